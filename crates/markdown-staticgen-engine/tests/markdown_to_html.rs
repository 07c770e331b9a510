use markdown_staticgen_engine::{
    MarkupError, MarkupNode, ParseOptions, RenderOptions, TypedSpan, extract_title,
    markdown_to_html, markdown_to_tree, markdown_to_tree_with, parsing::inline::split_links, render,
    render_with, text_to_spans,
};
use pretty_assertions::assert_eq;

#[test]
fn fixture_all_blocks() {
    assert_fixture("all_blocks");
}

#[test]
fn fixture_near_misses() {
    assert_fixture("near_misses");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let tree = markdown_to_tree(&md).unwrap();
    let html = render(&tree).unwrap();

    insta::assert_yaml_snapshot!(format!("{name}_tree").as_str(), tree);
    insta::assert_snapshot!(format!("{name}_html").as_str(), html);
}

#[test]
fn title_and_body_tree() {
    let md = "# Title\n\nHello **world**";
    let tree = markdown_to_tree(md).unwrap();

    assert_eq!(
        tree,
        MarkupNode::parent(
            "div",
            vec![
                MarkupNode::parent("h1", vec![MarkupNode::text("Title")]),
                MarkupNode::parent(
                    "p",
                    vec![MarkupNode::text("Hello "), MarkupNode::leaf("b", "world")],
                ),
            ],
        )
    );
    assert_eq!(extract_title(md).unwrap(), "Title");
}

#[test]
fn empty_document_renders_empty_root() {
    insta::assert_snapshot!(markdown_to_html("").unwrap(), @"<div></div>");
}

#[test]
fn heading_levels_snapshot() {
    let html = markdown_to_html("# One\n\n### Three\n\n###### Six").unwrap();
    insta::assert_snapshot!(html, @"<div><h1>One</h1><h3>Three</h3><h6>Six</h6></div>");
}

#[test]
fn lists_snapshot() {
    let html = markdown_to_html("- **a**\n- _b_\n\n1. `c`\n2. [d](/d)").unwrap();
    insta::assert_snapshot!(
        html,
        @r#"<div><ul><li><b>a</b></li><li><i>b</i></li></ul><ol><li><code>c</code></li><li><a href="/d">d</a></li></ol></div>"#
    );
}

#[test]
fn inline_failure_aborts_whole_document() {
    let md = "# Fine\n\nAlso fine\n\nBroken **bold";
    assert!(matches!(
        markdown_to_tree(md),
        Err(MarkupError::UnterminatedDelimiter { .. })
    ));
}

#[test]
fn strict_delimiters_reject_stray_markers() {
    let md = "`a` then a stray `";
    assert!(markdown_to_tree(md).is_ok());
    let strict = ParseOptions {
        strict_delimiters: true,
    };
    assert!(markdown_to_tree_with(md, &strict).is_err());
}

#[test]
fn code_block_content_is_escaped_only_on_request() {
    let tree = markdown_to_tree("```\n<b>\n```").unwrap();
    assert_eq!(render(&tree).unwrap(), "<div><pre><code><b></code></pre></div>");

    let escaped = RenderOptions {
        escape_html: true,
        ..RenderOptions::default()
    };
    assert_eq!(
        render_with(&tree, &escaped).unwrap(),
        "<div><pre><code>&lt;b&gt;</code></pre></div>"
    );
}

#[test]
fn rendering_is_idempotent() {
    let tree = markdown_to_tree("> quote\n\n- a\n- b\n\ntext ![i](i.png)").unwrap();
    assert_eq!(render(&tree).unwrap(), render(&tree).unwrap());
}

#[test]
fn link_stage_skips_image_with_same_label() {
    let spans = split_links(vec![TypedSpan::plain("see ![logo](l.png) or [logo](l.png)")]).unwrap();
    assert_eq!(
        spans,
        vec![
            TypedSpan::plain("see ![logo](l.png) or "),
            TypedSpan::link("logo", "l.png"),
        ]
    );
}

#[test]
fn plain_text_is_a_single_span() {
    let text = "nothing special here, just words.";
    assert_eq!(text_to_spans(text).unwrap(), vec![TypedSpan::plain(text)]);
}

#[test]
fn documents_convert_in_parallel() {
    let docs: Vec<String> = (0..8)
        .map(|i| format!("# Page {i}\n\nBody **{i}**"))
        .collect();

    let html: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = docs
            .iter()
            .map(|doc| s.spawn(move || markdown_to_html(doc).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, page) in html.iter().enumerate() {
        assert_eq!(
            page,
            &format!("<div><h1>Page {i}</h1><p>Body <b>{i}</b></p></div>")
        );
    }
}

#[test]
fn deserialized_tree_is_validated_at_render_time() {
    let node: MarkupNode = serde_json::from_str(
        r#"{"node": "parent", "tag": "div", "children": [{"node": "parent", "tag": "ul"}]}"#,
    )
    .unwrap();
    assert_eq!(
        render(&node),
        Err(MarkupError::MissingChildren {
            tag: "ul".to_string()
        })
    );
}

#[test]
fn tree_serializes_round_trip() {
    let tree = markdown_to_tree("Hi [x](/y)").unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: MarkupNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

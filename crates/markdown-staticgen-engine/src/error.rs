use thiserror::Error;

/// Errors surfaced while converting markdown to markup or rendering markup.
///
/// None of these are transient: each one means the input document is
/// malformed or a node was built in violation of the leaf/parent invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("unterminated `{delimiter}` delimiter in: {text}")]
    UnterminatedDelimiter { delimiter: String, text: String },

    #[error("could not locate `{markup}` in its source text")]
    MalformedMarkup { markup: String },

    #[error("leaf node has no value")]
    MissingValue,

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },

    #[error("no level-1 heading found in document")]
    NoHeadingFound,
}

pub type Result<T> = std::result::Result<T, MarkupError>;

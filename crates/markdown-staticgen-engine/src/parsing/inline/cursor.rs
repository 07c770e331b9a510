/// A byte cursor over a string slice, used for delimiter scanning.
///
/// Only ever stops on delimiter boundaries when its position is used to slice,
/// and all delimiters are ASCII, so slices stay on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat.as_bytes()))
    }

    /// Advances by one byte.
    pub fn bump(&mut self) {
        if !self.eof() {
            self.i += 1;
        }
    }

    /// Advances by `n` bytes. Caller must ensure `n` bytes remain.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until the remaining input starts with `pat`, or to the end.
    ///
    /// Returns true if `pat` was found.
    pub fn seek(&mut self, pat: &str) -> bool {
        while !self.eof() {
            if self.starts_with(pat) {
                return true;
            }
            self.bump();
        }
        false
    }
}

/// Decides which characters form whitespace
pub trait WhitespaceDetector {
    /// Returns true if `c` is whitespace
    fn is_whitespace(&self, c: char) -> bool;
}

/// Decides which characters start and continue a word
pub trait WordDetector {
    /// Returns true if `c` can start a word
    fn is_word_start(&self, c: char) -> bool;

    /// Returns true if `c` can appear after the first character of a word
    fn is_word_part(&self, c: char) -> bool;
}

impl<F> WhitespaceDetector for F
where
    F: Fn(char) -> bool,
{
    fn is_whitespace(&self, c: char) -> bool {
        self(c)
    }
}

/// Unicode whitespace as defined by [`char::is_whitespace`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CharWhitespace;

impl WhitespaceDetector for CharWhitespace {
    fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
    }
}

/// Identifiers: a letter or `_`, followed by letters, digits or `_`
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierDetector;

impl WordDetector for IdentifierDetector {
    fn is_word_start(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    fn is_word_part(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

/// A word detector built from two predicates
#[derive(Debug, Clone, Copy)]
pub struct WordChars<S, P> {
    start: S,
    part: P,
}

impl<S, P> WordChars<S, P>
where
    S: Fn(char) -> bool,
    P: Fn(char) -> bool,
{
    /// Words start with a character accepted by `start` and continue with
    /// characters accepted by `part`.
    pub fn new(start: S, part: P) -> Self {
        Self { start, part }
    }
}

impl<S, P> WordDetector for WordChars<S, P>
where
    S: Fn(char) -> bool,
    P: Fn(char) -> bool,
{
    fn is_word_start(&self, c: char) -> bool {
        (self.start)(c)
    }

    fn is_word_part(&self, c: char) -> bool {
        (self.part)(c)
    }
}

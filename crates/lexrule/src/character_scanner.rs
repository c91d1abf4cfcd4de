//! The character-level view rules scan through.

/// Character-level access to the text being scanned.
///
/// Rules receive a `CharacterScanner` and drive it forward with
/// [`read`](CharacterScanner::read). Pushback through
/// [`unread`](CharacterScanner::unread) may only undo reads the rule itself
/// performed: a rule that does not match must unread every character it read
/// before returning [`Token::Undefined`](crate::Token::Undefined).
pub trait CharacterScanner {
    /// Returns the next character, or `None` past the end of the range.
    ///
    /// The read position advances by one on every call, including the ones
    /// that return `None`.
    fn read(&mut self) -> Option<char>;

    /// Moves the read position back by one.
    fn unread(&mut self);

    /// The 0-based column of the read position, or `None` if the text
    /// cannot resolve it.
    fn column(&mut self) -> Option<usize>;

    /// The line delimiters of the text being scanned.
    fn legal_line_delimiters(&self) -> &[String];
}

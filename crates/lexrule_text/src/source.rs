//! The text-source capability.

use crate::error::LocationError;

/// Read access to a text addressed by character offsets.
///
/// This is the only view a scanner has of the text it tokenizes. All offsets
/// are 0-based character positions; lines are 0-based as well.
pub trait TextSource {
    /// The number of addressable characters.
    fn len(&self) -> usize;

    /// Returns true if the source holds no characters.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The character at `offset`.
    fn char_at(&self, offset: usize) -> Result<char, LocationError>;

    /// The index of the line containing `offset`.
    ///
    /// `offset == len()` is valid and resolves to the last line.
    fn line_of_offset(&self, offset: usize) -> Result<usize, LocationError>;

    /// The offset of the first character of `line`.
    fn line_offset(&self, line: usize) -> Result<usize, LocationError>;

    /// The line delimiters this source recognizes.
    fn legal_line_delimiters(&self) -> &[String];
}

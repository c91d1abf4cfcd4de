//! Errors raised by text sources

/// An offset, line or range that does not address the text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// A character offset past the end of the text.
    #[error("offset {offset} is outside the text (length {length})")]
    OffsetOutOfRange {
        /// The requested offset.
        offset: usize,
        /// The length of the text at the time of the request.
        length: usize,
    },

    /// A line index past the last line.
    #[error("line {line} does not exist (the text has {line_count} lines)")]
    LineOutOfRange {
        /// The requested line index.
        line: usize,
        /// The number of lines in the text.
        line_count: usize,
    },

    /// A range whose end lies past the end of the text.
    #[error("range of {len} characters at {offset} exceeds the text (length {length})")]
    RangeOutOfBounds {
        /// The start of the range.
        offset: usize,
        /// The length of the range.
        len: usize,
        /// The length of the text.
        length: usize,
    },
}

//! A mutable in-memory text with a line index.
//!
//! `Document` stores its content as characters so that offsets handed to a
//! scanner are character positions, never byte positions. The line index is
//! rebuilt on every modification; a `\r\n` pair counts as a single delimiter.
//!
//! # Examples
//! ```no_run
//! use lexrule_text::{Document, TextSource};
//!
//! let mut doc = Document::from("let x\nlet y");
//! assert_eq!(doc.line_count(), 2);
//! doc.replace(4, 1, "value").unwrap();
//! assert_eq!(doc.text(), "let value\nlet y");
//! ```

use std::fmt;

use lazy_static::lazy_static;

use crate::error::LocationError;
use crate::source::TextSource;

lazy_static! {
    /// Line delimiters recognized by every [`Document`].
    pub static ref DEFAULT_LINE_DELIMITERS: Vec<String> =
        vec!["\r".to_string(), "\n".to_string(), "\r\n".to_string()];
}

/// A mutable text addressed by character offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The characters of the text
    chars: Vec<char>,
    /// Offset of the first character of each line; always starts with 0
    line_starts: Vec<usize>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            line_starts: vec![0],
        }
    }

    /// The whole content as a string
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// The `length` characters starting at `offset`
    pub fn get(&self, offset: usize, length: usize) -> Result<String, LocationError> {
        let end = self.checked_end(offset, length)?;
        Ok(self.chars[offset..end].iter().collect())
    }

    /// Replace the whole content
    pub fn set(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.rebuild_lines();
    }

    /// Replace `length` characters at `offset` with `text`
    pub fn replace(&mut self, offset: usize, length: usize, text: &str) -> Result<(), LocationError> {
        let end = self.checked_end(offset, length)?;
        self.chars.splice(offset..end, text.chars());
        self.rebuild_lines();
        Ok(())
    }

    /// The number of lines; an empty document has one line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The length of `line` including its delimiter
    pub fn line_length(&self, line: usize) -> Result<usize, LocationError> {
        let start = self.line_offset(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.chars.len());
        Ok(end - start)
    }

    fn checked_end(&self, offset: usize, length: usize) -> Result<usize, LocationError> {
        match offset.checked_add(length) {
            Some(end) if end <= self.chars.len() => Ok(end),
            _ => Err(LocationError::RangeOutOfBounds {
                offset,
                len: length,
                length: self.chars.len(),
            }),
        }
    }

    fn rebuild_lines(&mut self) {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut iter = self.chars.iter().enumerate().peekable();
        while let Some((i, c)) = iter.next() {
            match *c {
                '\r' => {
                    // A \r\n pair ends the line after the \n
                    if let Some((_, '\n')) = iter.peek() {
                        iter.next();
                        self.line_starts.push(i + 2);
                    } else {
                        self.line_starts.push(i + 1);
                    }
                }
                '\n' => self.line_starts.push(i + 1),
                _ => {}
            }
        }
    }
}

impl TextSource for Document {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, offset: usize) -> Result<char, LocationError> {
        self.chars
            .get(offset)
            .copied()
            .ok_or(LocationError::OffsetOutOfRange {
                offset,
                length: self.chars.len(),
            })
    }

    fn line_of_offset(&self, offset: usize) -> Result<usize, LocationError> {
        if offset > self.chars.len() {
            return Err(LocationError::OffsetOutOfRange {
                offset,
                length: self.chars.len(),
            });
        }
        // line_starts[0] == 0, so a miss always lands after some line start
        match self.line_starts.binary_search(&offset) {
            Ok(line) => Ok(line),
            Err(next) => Ok(next - 1),
        }
    }

    fn line_offset(&self, line: usize) -> Result<usize, LocationError> {
        self.line_starts
            .get(line)
            .copied()
            .ok_or(LocationError::LineOutOfRange {
                line,
                line_count: self.line_starts.len(),
            })
    }

    fn legal_line_delimiters(&self) -> &[String] {
        &DEFAULT_LINE_DELIMITERS
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        let mut doc = Self::new();
        doc.set(text);
        doc
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

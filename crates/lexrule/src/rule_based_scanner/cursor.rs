use lexrule_text::TextSource;
use log::{trace, warn};

use crate::character_scanner::CharacterScanner;

/// The read position of a scanner over one bound range.
///
/// The cursor is owned by its [`RuleBasedScanner`](crate::RuleBasedScanner)
/// and lent to rules as a `&mut dyn CharacterScanner` while they evaluate.
/// Reads past the range end return `None` but still advance the offset, so
/// the offset may sit one or more positions past `range_end` after peeking.
#[derive(Clone, Default)]
pub struct ScanCursor<'s> {
    /// The text being scanned
    source: Option<&'s dyn TextSource>,
    /// Line delimiters captured when the range was bound
    delimiters: Vec<String>,
    /// Offset of the next character to be read
    offset: usize,
    /// Exclusive end of the scanned range
    range_end: usize,
    /// Cached column of `offset`; `None` until computed
    column: Option<usize>,
}

impl<'s> ScanCursor<'s> {
    /// Binds the cursor to `[offset, min(source.len(), offset + length))`.
    pub(crate) fn bind(&mut self, source: &'s dyn TextSource, offset: usize, length: usize) {
        self.source = Some(source);
        self.offset = offset;
        self.column = None;
        self.range_end = source.len().min(offset.saturating_add(length));
        self.delimiters = source.legal_line_delimiters().to_vec();
    }

    /// The offset of the next character to be read
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The exclusive end of the bound range
    pub fn range_end(&self) -> usize {
        self.range_end
    }

    pub(crate) fn invalidate_column(&mut self) {
        self.column = None;
    }
}

impl CharacterScanner for ScanCursor<'_> {
    fn read(&mut self) -> Option<char> {
        let c = match self.source {
            Some(source) if self.offset < self.range_end => match source.char_at(self.offset) {
                Ok(c) => Some(c),
                Err(err) => {
                    trace!("read at {} degraded to EOF: {}", self.offset, err);
                    None
                }
            },
            _ => None,
        };

        self.offset = self.offset.saturating_add(1);
        self.column = None;
        c
    }

    fn unread(&mut self) {
        if self.offset == 0 {
            warn!("unread past the start of the text; the active rule read fewer characters than it unread");
            return;
        }
        self.offset -= 1;
        self.column = None;
    }

    fn column(&mut self) -> Option<usize> {
        if self.column.is_none() {
            let source = self.source?;
            let offset = self.offset;
            match source
                .line_of_offset(offset)
                .and_then(|line| source.line_offset(line))
            {
                Ok(line_start) => self.column = Some(offset.saturating_sub(line_start)),
                Err(err) => trace!("column of offset {} is unknown: {}", offset, err),
            }
        }
        self.column
    }

    fn legal_line_delimiters(&self) -> &[String] {
        &self.delimiters
    }
}

impl std::fmt::Debug for ScanCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanCursor")
            .field("bound", &self.source.is_some())
            .field("offset", &self.offset)
            .field("range_end", &self.range_end)
            .field("column", &self.column)
            .finish()
    }
}

//! The rule-based scanner
//!
//! [`RuleBasedScanner`] evaluates its rules in order at the current position.
//! The first rule that returns a defined token wins; the characters that rule
//! consumed make up the token. If no rule fires, the scanner reads a single
//! character and returns its default token, or [`Token::Eof`] when the range
//! is exhausted. Once the end is reached every further call returns
//! [`Token::Eof`] again.

mod cursor;

pub use cursor::ScanCursor;

use lexrule_text::TextSource;
use log::{debug, trace};

use crate::character_scanner::CharacterScanner;
use crate::error::ScanError;
use crate::rule::Rule;
use crate::token::Token;
use crate::token_scanner::TokenScanner;

/// A scanner "programmed" with an ordered list of rules
pub struct RuleBasedScanner<'s, D> {
    /// The rules, in priority order
    rules: Vec<Box<dyn Rule<D>>>,
    /// The token returned when no rule fires and input remains
    default_token: Option<Token<D>>,
    /// The read position over the bound range
    cursor: ScanCursor<'s>,
    /// The offset at which the last returned token starts
    token_offset: usize,
}

/// A token together with the part of the text it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedToken<D> {
    /// The token returned by the scanner
    pub token: Token<D>,
    /// The offset of the first character of the token
    pub offset: usize,
    /// The number of characters the token covers
    pub length: usize,
}

impl<'s, D> RuleBasedScanner<'s, D> {
    /// Create a scanner without rules and without a bound text
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            default_token: None,
            cursor: ScanCursor::default(),
            token_offset: 0,
        }
    }

    /// Create a scanner with the given rules
    pub fn with_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Rule<D>>>,
    {
        let mut scanner = Self::new();
        scanner.set_rules(rules);
        scanner
    }

    /// Replace the rules of this scanner.
    ///
    /// The scanner keeps the rules it is given; a scan already in progress
    /// continues with the new list from its next token on.
    pub fn set_rules<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = Box<dyn Rule<D>>>,
    {
        self.rules = rules.into_iter().collect();
        debug!("scanner configured with {} rules", self.rules.len());
    }

    /// The number of configured rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Configure the token returned when no rule fires and input remains.
    ///
    /// The token must carry data. On error the previous default is kept.
    pub fn set_default_return_token(&mut self, token: Token<D>) -> Result<(), ScanError> {
        let kind = match &token {
            Token::Undefined => Some("an undefined"),
            Token::Eof => Some("an end-of-input"),
            Token::Whitespace(None) => Some("a whitespace"),
            Token::Other(None) => Some("an unclassified"),
            Token::Whitespace(Some(_)) | Token::Other(Some(_)) => None,
        };
        match kind {
            Some(kind) => Err(ScanError::DefaultTokenWithoutData { kind }),
            None => {
                self.default_token = Some(token);
                Ok(())
            }
        }
    }

    /// The token returned when no rule fires, once one is established
    pub fn default_return_token(&self) -> Option<&Token<D>> {
        self.default_token.as_ref()
    }

    /// The read position of this scanner
    pub fn cursor(&self) -> &ScanCursor<'s> {
        &self.cursor
    }
}

impl<'s, D: Clone> RuleBasedScanner<'s, D> {
    /// Iterate over the remaining tokens of the bound range.
    ///
    /// The iterator stops before [`Token::Eof`].
    pub fn tokens(&mut self) -> Tokens<'_, 's, D> {
        Tokens { scanner: self }
    }
}

impl<D> Default for RuleBasedScanner<'_, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, D: Clone> TokenScanner<'s, D> for RuleBasedScanner<'s, D> {
    fn set_range(&mut self, source: &'s dyn TextSource, offset: usize, length: usize) {
        self.cursor.bind(source, offset, length);
        self.token_offset = offset;

        if self.default_token.is_none() {
            self.default_token = Some(Token::unclassified());
        }

        debug!(
            "scanner bound to range {}..{} of a text of length {}",
            offset,
            self.cursor.range_end(),
            source.len()
        );
    }

    fn next_token(&mut self) -> Token<D> {
        self.token_offset = self.cursor.offset();
        self.cursor.invalidate_column();

        for (index, rule) in self.rules.iter().enumerate() {
            let token = rule.evaluate(&mut self.cursor);
            if !token.is_undefined() {
                trace!(
                    "rule {} matched {}..{}",
                    index,
                    self.token_offset,
                    self.cursor.offset()
                );
                return token;
            }
        }

        if self.cursor.read().is_none() {
            return Token::Eof;
        }

        match &self.default_token {
            Some(token) => token.clone(),
            None => Token::unclassified(),
        }
    }

    fn token_offset(&self) -> usize {
        self.token_offset
    }

    fn token_length(&self) -> usize {
        self.cursor
            .offset()
            .min(self.cursor.range_end())
            .saturating_sub(self.token_offset)
    }
}

impl<D> CharacterScanner for RuleBasedScanner<'_, D> {
    fn read(&mut self) -> Option<char> {
        self.cursor.read()
    }

    fn unread(&mut self) {
        self.cursor.unread()
    }

    fn column(&mut self) -> Option<usize> {
        self.cursor.column()
    }

    fn legal_line_delimiters(&self) -> &[String] {
        self.cursor.legal_line_delimiters()
    }
}

/// Iterator over the tokens of a [`RuleBasedScanner`]
pub struct Tokens<'a, 's, D> {
    scanner: &'a mut RuleBasedScanner<'s, D>,
}

impl<D: Clone> Iterator for Tokens<'_, '_, D> {
    type Item = ScannedToken<D>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.scanner.next_token();
        if token.is_eof() {
            return None;
        }
        Some(ScannedToken {
            token,
            offset: self.scanner.token_offset(),
            length: self.scanner.token_length(),
        })
    }
}

// Include the test module
#[cfg(test)]
mod tests;

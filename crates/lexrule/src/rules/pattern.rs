//! Delimited patterns: strings, comments, and similar constructs.
//!
//! A [`PatternRule`] matches a start sequence followed by everything up to and
//! including an end sequence. It can also be configured to end at a line
//! delimiter or at the end of the range, and to skip characters following an
//! escape character.

use crate::character_scanner::CharacterScanner;
use crate::rule::{PredicateRule, Rule};
use crate::rules::{starts_at_column, Lookahead};
use crate::token::Token;

/// Matches text between a start and an end sequence
pub struct PatternRule<D> {
    start: Vec<char>,
    end: Vec<char>,
    token: Token<D>,
    escape: Option<char>,
    breaks_on_eol: bool,
    breaks_on_eof: bool,
    escape_continues_line: bool,
    column: Option<usize>,
}

impl<D> PatternRule<D> {
    /// A pattern from `start` to `end`.
    ///
    /// Without an end sequence the pattern can only end at a line delimiter
    /// or at the end of the range, so enable one of those. An empty start
    /// sequence never matches.
    pub fn new(start: &str, end: Option<&str>, token: Token<D>) -> Self {
        Self {
            start: start.chars().collect(),
            end: end.map(|e| e.chars().collect()).unwrap_or_default(),
            token,
            escape: None,
            breaks_on_eol: false,
            breaks_on_eof: false,
            escape_continues_line: false,
            column: None,
        }
    }

    /// A pattern that never spans more than one line, e.g. a string literal.
    ///
    /// An unterminated pattern ends with the line delimiter.
    pub fn single_line(start: &str, end: &str, token: Token<D>) -> Self {
        Self::new(start, Some(end), token).breaks_on_eol(true)
    }

    /// A pattern running from `start` to the end of the line, e.g. a line comment
    pub fn end_of_line(start: &str, token: Token<D>) -> Self {
        Self::new(start, None, token)
            .breaks_on_eol(true)
            .breaks_on_eof(true)
    }

    /// A pattern that may span lines, e.g. a block comment
    pub fn multi_line(start: &str, end: &str, token: Token<D>) -> Self {
        Self::new(start, Some(end), token)
    }

    /// Skip the character following `escape`
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    /// End the pattern at a line delimiter
    pub fn breaks_on_eol(mut self, breaks: bool) -> Self {
        self.breaks_on_eol = breaks;
        self
    }

    /// End the pattern at the end of the range
    pub fn breaks_on_eof(mut self, breaks: bool) -> Self {
        self.breaks_on_eof = breaks;
        self
    }

    /// An escape character directly before a line delimiter continues the
    /// pattern on the next line
    pub fn escape_continues_line(mut self, continues: bool) -> Self {
        self.escape_continues_line = continues;
        self
    }

    /// Only match patterns starting at `column`
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Consume everything up to and including the end of the pattern.
    ///
    /// On failure every character read here is unread again.
    fn end_sequence_detected(&self, scanner: &mut dyn CharacterScanner) -> bool {
        let mut delimiters: Vec<Vec<char>> = scanner
            .legal_line_delimiters()
            .iter()
            .map(|d| d.chars().collect::<Vec<char>>())
            .filter(|d| !d.is_empty())
            .collect();
        // Longest first so that \r\n wins over \r
        delimiters.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut lookahead = Lookahead::new(scanner);
        while let Some(c) = lookahead.read() {
            if Some(c) == self.escape {
                match lookahead.read() {
                    // Leave the EOF read to the loop condition
                    None => lookahead.unread(),
                    Some(escaped) if self.escape_continues_line => {
                        for delimiter in &delimiters {
                            if escaped == delimiter[0]
                                && sequence_detected(&mut lookahead, delimiter, self.breaks_on_eof)
                            {
                                break;
                            }
                        }
                    }
                    Some(_) => {}
                }
            } else if self.end.first() == Some(&c) {
                if sequence_detected(&mut lookahead, &self.end, self.breaks_on_eof) {
                    return true;
                }
            } else if self.breaks_on_eol {
                for delimiter in &delimiters {
                    if c == delimiter[0]
                        && sequence_detected(&mut lookahead, delimiter, self.breaks_on_eof)
                    {
                        return true;
                    }
                }
            }
        }

        if self.breaks_on_eof {
            // Give back the EOF read so the next token starts at the range end
            lookahead.unread();
            return true;
        }

        lookahead.rewind();
        false
    }
}

/// Checks that the characters after an already-read first character
/// continue `sequence`. On mismatch those characters are unread.
fn sequence_detected(scanner: &mut dyn CharacterScanner, sequence: &[char], eof_allowed: bool) -> bool {
    for (i, expected) in sequence.iter().enumerate().skip(1) {
        let c = scanner.read();
        if c.is_none() && eof_allowed {
            scanner.unread();
            return true;
        }
        if c != Some(*expected) {
            // The mismatching read plus the i - 1 matched characters
            for _ in 0..i {
                scanner.unread();
            }
            return false;
        }
    }
    true
}

impl<D: Clone> Rule<D> for PatternRule<D> {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<D> {
        self.evaluate_resume(scanner, false)
    }
}

impl<D: Clone> PredicateRule<D> for PatternRule<D> {
    fn success_token(&self) -> Token<D> {
        self.token.clone()
    }

    fn evaluate_resume(&self, scanner: &mut dyn CharacterScanner, resume: bool) -> Token<D> {
        if resume {
            if self.end_sequence_detected(scanner) {
                return self.token.clone();
            }
            return Token::Undefined;
        }

        let c = scanner.read();
        let starts = c.is_some() && c == self.start.first().copied();

        if starts {
            if let Some(column) = self.column {
                if !starts_at_column(scanner, column) {
                    scanner.unread();
                    return Token::Undefined;
                }
            }

            if sequence_detected(scanner, &self.start, false) {
                if self.end_sequence_detected(scanner) {
                    return self.token.clone();
                }
                for _ in 1..self.start.len() {
                    scanner.unread();
                }
            }
        }

        scanner.unread();
        Token::Undefined
    }
}

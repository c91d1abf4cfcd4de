use std::collections::HashMap;

use crate::character_scanner::CharacterScanner;
use crate::rule::Rule;
use crate::rules::detector::WordDetector;
use crate::rules::starts_at_column;
use crate::token::Token;

/// Matches words and classifies them through a keyword table.
///
/// A word is one character accepted by [`WordDetector::is_word_start`]
/// followed by any number accepted by [`WordDetector::is_word_part`]. Words
/// found in the table return their own token; others return the rule's
/// default token. If that default is [`Token::Undefined`] the whole word is
/// unread, so a later rule gets to see it.
pub struct WordRule<D, W> {
    detector: W,
    default_token: Token<D>,
    column: Option<usize>,
    words: HashMap<String, Token<D>>,
    ignore_case: bool,
}

impl<D, W: WordDetector> WordRule<D, W> {
    /// A rule that only matches words added with [`add_word`](Self::add_word)
    pub fn new(detector: W) -> Self {
        Self::with_default(detector, Token::Undefined)
    }

    /// A rule returning `default_token` for words not in the table
    pub fn with_default(detector: W, default_token: Token<D>) -> Self {
        Self {
            detector,
            default_token,
            column: None,
            words: HashMap::new(),
            ignore_case: false,
        }
    }

    /// Compare words case-insensitively. Call before adding words.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Only match words starting at `column`
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Classify `word` as `token`
    pub fn add_word(&mut self, word: &str, token: Token<D>) {
        self.words.insert(self.key(word), token);
    }

    /// Builder form of [`add_word`](Self::add_word)
    pub fn with_word(mut self, word: &str, token: Token<D>) -> Self {
        self.add_word(word, token);
        self
    }

    fn key(&self, word: &str) -> String {
        if self.ignore_case {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

impl<D: Clone, W: WordDetector> Rule<D> for WordRule<D, W> {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<D> {
        let first = match scanner.read() {
            Some(c) if self.detector.is_word_start(c) => c,
            _ => {
                scanner.unread();
                return Token::Undefined;
            }
        };

        if let Some(column) = self.column {
            if !starts_at_column(scanner, column) {
                scanner.unread();
                return Token::Undefined;
            }
        }

        let mut word = String::new();
        word.push(first);
        let mut length = 1;
        while let Some(c) = scanner.read() {
            if !self.detector.is_word_part(c) {
                break;
            }
            word.push(c);
            length += 1;
        }
        scanner.unread();

        if let Some(token) = self.words.get(&self.key(&word)) {
            return token.clone();
        }

        if self.default_token.is_undefined() {
            for _ in 0..length {
                scanner.unread();
            }
        }
        self.default_token.clone()
    }
}

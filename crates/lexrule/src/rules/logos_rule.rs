//! Adapter for token enums derived with `logos`.
//!
//! [`LogosRule`] buffers a bounded lookahead from the scanner, lexes it with
//! the logos-generated automaton and keeps only the first token, provided it
//! starts right at the read position. Characters beyond that token are
//! unread again. This lets an existing logos lexer act as one rule among
//! others, e.g. for keywords and literals, while comments and strings are
//! handled by [`PatternRule`](crate::rules::PatternRule)s that span lines.

use std::marker::PhantomData;

use log::trace;
use logos::Logos;

use crate::character_scanner::CharacterScanner;
use crate::rule::Rule;
use crate::rules::Lookahead;
use crate::token::Token;

/// Lookahead limits for a [`LogosRule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadConfig {
    /// Maximum number of characters buffered per evaluation
    pub max_lookahead: usize,
    /// Stop buffering after the first line delimiter character
    pub stop_at_line_delimiter: bool,
}

impl Default for LookaheadConfig {
    fn default() -> Self {
        Self {
            max_lookahead: 256,
            stop_at_line_delimiter: true,
        }
    }
}

/// A rule backed by a logos token enum `K`.
///
/// The classifier maps each lexed `K` to a [`Token`]; returning
/// [`Token::Undefined`] rejects the match and leaves the position untouched.
pub struct LogosRule<K, F> {
    classify: F,
    config: LookaheadConfig,
    _kind: PhantomData<fn() -> K>,
}

impl<K, F> LogosRule<K, F>
where
    K: for<'a> Logos<'a, Source = str, Extras = ()>,
{
    /// A rule with the default lookahead
    pub fn new(classify: F) -> Self {
        Self::with_config(classify, LookaheadConfig::default())
    }

    /// A rule with explicit lookahead limits
    pub fn with_config(classify: F, config: LookaheadConfig) -> Self {
        Self {
            classify,
            config,
            _kind: PhantomData,
        }
    }
}

impl<K, D, F> Rule<D> for LogosRule<K, F>
where
    K: for<'a> Logos<'a, Source = str, Extras = ()>,
    F: Fn(K) -> Token<D>,
{
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<D> {
        let line_starts: Vec<char> = scanner
            .legal_line_delimiters()
            .iter()
            .filter_map(|d| d.chars().next())
            .collect();

        let mut lookahead = Lookahead::new(scanner);
        let mut buffer = String::new();
        let mut truncated = false;
        loop {
            if lookahead.consumed() >= self.config.max_lookahead {
                // Only a cut if there is more text after the limit
                truncated = lookahead.read().is_some();
                lookahead.unread();
                break;
            }
            match lookahead.read() {
                Some(c) => {
                    buffer.push(c);
                    if self.config.stop_at_line_delimiter && line_starts.contains(&c) {
                        break;
                    }
                }
                None => break,
            }
        }

        let mut lexer = K::lexer(buffer.as_str());
        let matched = match lexer.next() {
            Some(Ok(kind)) if lexer.span().start == 0 && lexer.span().end > 0 => {
                Some((kind, lexer.span().end))
            }
            _ => None,
        };

        let Some((kind, end)) = matched else {
            lookahead.rewind();
            return Token::Undefined;
        };

        // A match running into the limit may be the prefix of a longer token
        if truncated && end == buffer.len() {
            trace!("logos match {:?} reaches the lookahead limit", buffer);
            lookahead.rewind();
            return Token::Undefined;
        }

        let token = (self.classify)(kind);
        if token.is_undefined() {
            lookahead.rewind();
            return Token::Undefined;
        }

        let used = buffer[..end].chars().count();
        trace!("logos matched {:?}", &buffer[..end]);
        while lookahead.consumed() > used {
            lookahead.unread();
        }
        token
    }
}

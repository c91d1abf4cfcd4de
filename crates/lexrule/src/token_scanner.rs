//! The token-level scanning interface.

use lexrule_text::TextSource;

use crate::token::Token;

/// Token-level access to a range of a text.
///
/// A consumer binds a range once per pass, then pulls tokens until
/// [`Token::Eof`], reading [`token_offset`](TokenScanner::token_offset) and
/// [`token_length`](TokenScanner::token_length) after each pull to map the
/// token back onto the text.
pub trait TokenScanner<'s, D> {
    /// Binds `source` and restricts scanning to `length` characters starting
    /// at `offset`. The range end is clamped to the length of the source.
    fn set_range(&mut self, source: &'s dyn TextSource, offset: usize, length: usize);

    /// Returns the next token in the range.
    fn next_token(&mut self) -> Token<D>;

    /// The offset of the token returned by the last `next_token` call.
    fn token_offset(&self) -> usize;

    /// The length of the token returned by the last `next_token` call.
    fn token_length(&self) -> usize;
}

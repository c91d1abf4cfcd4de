//! Rule traits.
//!
//! Closures taking a `&mut dyn CharacterScanner` and returning a [`Token`]
//! are rules too.

use crate::character_scanner::CharacterScanner;
use crate::token::Token;

/// A matcher plugged into a [`RuleBasedScanner`](crate::RuleBasedScanner).
///
/// On success a rule consumes the characters it matched and returns a defined
/// token. On failure it must leave the read position exactly where it found
/// it and return [`Token::Undefined`]. The scanner does not restore the
/// position between rules, so a rule that forgets to unread shifts every
/// token boundary after it.
pub trait Rule<D> {
    /// Attempts to match at the current position of `scanner`.
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<D>;
}

/// A rule that always produces the same token when it matches.
///
/// Predicate rules can resume a match whose start sequence lies before the
/// scanned range, which lets a partitioner restart in the middle of a
/// multi-line construct.
pub trait PredicateRule<D>: Rule<D> {
    /// The token returned on a successful match.
    fn success_token(&self) -> Token<D>;

    /// Like [`Rule::evaluate`], but with `resume` set the rule assumes its
    /// start sequence was already consumed and only looks for the end.
    fn evaluate_resume(&self, scanner: &mut dyn CharacterScanner, resume: bool) -> Token<D>;
}

impl<D, F> Rule<D> for F
where
    F: Fn(&mut dyn CharacterScanner) -> Token<D>,
{
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<D> {
        self(scanner)
    }
}

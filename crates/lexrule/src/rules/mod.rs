//! Stock rules
//!
//! Every rule in this module restores the read position when it does not
//! match, so they can be combined freely in a
//! [`RuleBasedScanner`](crate::RuleBasedScanner).

mod character;
mod detector;
mod lookahead;
#[cfg(feature = "logos")]
mod logos_rule;
mod number;
mod pattern;
mod whitespace;
mod word;

pub use character::CharacterRule;
pub use detector::{CharWhitespace, IdentifierDetector, WhitespaceDetector, WordChars, WordDetector};
#[cfg(feature = "logos")]
pub use logos_rule::{LogosRule, LookaheadConfig};
pub use number::NumberRule;
pub use pattern::PatternRule;
pub use whitespace::WhitespaceRule;
pub use word::WordRule;

pub(crate) use lookahead::Lookahead;

use crate::character_scanner::CharacterScanner;

/// Whether the character just read sits at `column`
pub(crate) fn starts_at_column(scanner: &mut dyn CharacterScanner, column: usize) -> bool {
    // The read position is already one past the character
    match column.checked_add(1) {
        Some(expected) => scanner.column() == Some(expected),
        None => false,
    }
}

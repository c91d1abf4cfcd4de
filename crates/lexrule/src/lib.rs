//! Rule-based lexical scanning
//!
//! This crate provides a scanner that is "programmed" with an ordered list of
//! rules. Each call to [`TokenScanner::next_token`] evaluates the rules in
//! order against a shared character cursor; the first rule returning a
//! defined token wins. When no rule fires, the scanner consumes a single
//! character and returns its default token, or [`Token::Eof`] at the end of
//! the configured range.
//!
//! Rules see the text only through [`CharacterScanner`]. A rule that reads
//! ahead and then fails must unread everything it read before returning
//! [`Token::Undefined`]; the scanner never rolls the cursor back on a rule's
//! behalf.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod character_scanner;
pub mod error;
pub mod rule;
pub mod rule_based_scanner;
pub mod rules;
pub mod token;
pub mod token_scanner;

// Re-export the main types for convenience
pub use character_scanner::CharacterScanner;
pub use error::ScanError;
pub use lexrule_text::{Document, LocationError, TextSource};
pub use rule::{PredicateRule, Rule};
pub use rule_based_scanner::{RuleBasedScanner, ScanCursor, ScannedToken, Tokens};
pub use token::Token;
pub use token_scanner::TokenScanner;

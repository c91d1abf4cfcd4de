//! Text sources for the lexrule scanning engine
//!
//! This crate defines the [`TextSource`] capability a scanner reads from and
//! ships [`Document`], a mutable in-memory text with a line index.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod error;
pub mod source;

// Re-export the main types for convenience
pub use document::{Document, DEFAULT_LINE_DELIMITERS};
pub use error::LocationError;
pub use source::TextSource;

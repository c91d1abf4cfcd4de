//! Scan results.

use std::fmt;

/// The result of one scan step.
///
/// A token is either one of the two sentinels, [`Token::Undefined`] (a rule
/// did not match) and [`Token::Eof`] (the range is exhausted), or a defined
/// token classifying the characters just consumed. Defined tokens carry an
/// optional opaque payload `D` that identifies their category; consumers
/// distinguish sentinels with the predicate methods, never by comparing
/// payloads.
///
/// Tokens carry no position. The scanner that returned a token reports where
/// it starts and how long it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token<D> {
    /// Returned by a rule that did not match
    Undefined,
    /// Returned by the scanner once the range is exhausted
    Eof,
    /// A run of whitespace
    Whitespace(Option<D>),
    /// Any other classified text
    Other(Option<D>),
}

impl<D> Token<D> {
    /// A defined token carrying `data`
    pub fn other(data: D) -> Self {
        Token::Other(Some(data))
    }

    /// A whitespace token without payload
    pub fn whitespace() -> Self {
        Token::Whitespace(None)
    }

    /// A whitespace token carrying `data`
    pub fn whitespace_with(data: D) -> Self {
        Token::Whitespace(Some(data))
    }

    /// A defined token without payload.
    ///
    /// This is what a scanner returns for unmatched characters when no
    /// default token was configured.
    pub fn unclassified() -> Self {
        Token::Other(None)
    }

    /// Returns true for [`Token::Undefined`]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Token::Undefined)
    }

    /// Returns true for [`Token::Eof`]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// Returns true for whitespace tokens
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    /// Returns true for defined tokens that are not whitespace
    pub fn is_other(&self) -> bool {
        matches!(self, Token::Other(_))
    }

    /// The payload of a defined token
    pub fn data(&self) -> Option<&D> {
        match self {
            Token::Whitespace(data) | Token::Other(data) => data.as_ref(),
            Token::Undefined | Token::Eof => None,
        }
    }

    /// Consume the token and return its payload
    pub fn into_data(self) -> Option<D> {
        match self {
            Token::Whitespace(data) | Token::Other(data) => data,
            Token::Undefined | Token::Eof => None,
        }
    }
}

impl<D: fmt::Debug> fmt::Display for Token<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Undefined => write!(f, "<undefined>"),
            Token::Eof => write!(f, "<eof>"),
            Token::Whitespace(None) => write!(f, "<whitespace>"),
            Token::Whitespace(Some(data)) => write!(f, "<whitespace {:?}>", data),
            Token::Other(None) => write!(f, "<other>"),
            Token::Other(Some(data)) => write!(f, "{:?}", data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_distinguished_by_predicates() {
        let undefined: Token<&str> = Token::Undefined;
        let eof: Token<&str> = Token::Eof;

        assert!(undefined.is_undefined());
        assert!(!undefined.is_eof());
        assert!(eof.is_eof());
        assert!(!eof.is_other());
        assert_eq!(undefined.data(), None);
        assert_eq!(eof.data(), None);
    }

    #[test]
    fn test_defined_tokens() {
        let keyword = Token::other("keyword");
        assert!(keyword.is_other());
        assert!(!keyword.is_whitespace());
        assert_eq!(keyword.data(), Some(&"keyword"));
        assert_eq!(keyword.into_data(), Some("keyword"));

        let blank: Token<&str> = Token::whitespace();
        assert!(blank.is_whitespace());
        assert_eq!(blank.data(), None);
        assert_eq!(Token::whitespace_with(7).data(), Some(&7));
    }

    #[test]
    fn test_unclassified_is_defined_without_data() {
        let token: Token<u8> = Token::unclassified();
        assert!(token.is_other());
        assert!(!token.is_undefined());
        assert_eq!(token.data(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::other("word").to_string(), "\"word\"");
        assert_eq!(Token::<u8>::Eof.to_string(), "<eof>");
    }
}

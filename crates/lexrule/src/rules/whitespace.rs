use crate::character_scanner::CharacterScanner;
use crate::rule::Rule;
use crate::rules::detector::WhitespaceDetector;
use crate::token::Token;

/// Matches a run of whitespace
pub struct WhitespaceRule<D, W> {
    detector: W,
    token: Token<D>,
}

impl<D, W: WhitespaceDetector> WhitespaceRule<D, W> {
    /// A rule returning [`Token::whitespace`] for runs accepted by `detector`
    pub fn new(detector: W) -> Self {
        Self::with_token(detector, Token::whitespace())
    }

    /// A rule returning `token` for runs accepted by `detector`
    pub fn with_token(detector: W, token: Token<D>) -> Self {
        Self { detector, token }
    }
}

impl<D: Clone, W: WhitespaceDetector> Rule<D> for WhitespaceRule<D, W> {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<D> {
        match scanner.read() {
            Some(c) if self.detector.is_whitespace(c) => {
                while let Some(c) = scanner.read() {
                    if !self.detector.is_whitespace(c) {
                        break;
                    }
                }
                // Give back the character that ended the run, or the EOF read
                scanner.unread();
                self.token.clone()
            }
            _ => {
                scanner.unread();
                Token::Undefined
            }
        }
    }
}

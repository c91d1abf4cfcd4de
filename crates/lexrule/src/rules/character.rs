use crate::character_scanner::CharacterScanner;
use crate::rule::Rule;
use crate::token::Token;

/// Matches exactly one character out of a fixed set
pub struct CharacterRule<D> {
    chars: Vec<char>,
    token: Token<D>,
}

impl<D> CharacterRule<D> {
    /// A rule matching the single character `c`
    pub fn new(c: char, token: Token<D>) -> Self {
        Self {
            chars: vec![c],
            token,
        }
    }

    /// A rule matching any one character of `chars`
    pub fn any_of(chars: &str, token: Token<D>) -> Self {
        Self {
            chars: chars.chars().collect(),
            token,
        }
    }
}

impl<D: Clone> Rule<D> for CharacterRule<D> {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<D> {
        match scanner.read() {
            Some(c) if self.chars.contains(&c) => self.token.clone(),
            _ => {
                scanner.unread();
                Token::Undefined
            }
        }
    }
}

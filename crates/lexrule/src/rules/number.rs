use crate::character_scanner::CharacterScanner;
use crate::rule::Rule;
use crate::rules::starts_at_column;
use crate::token::Token;

/// Matches a run of ASCII digits
pub struct NumberRule<D> {
    token: Token<D>,
    column: Option<usize>,
}

impl<D> NumberRule<D> {
    /// A rule returning `token` for every run of digits
    pub fn new(token: Token<D>) -> Self {
        Self {
            token,
            column: None,
        }
    }

    /// Only match numbers starting at `column`
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

impl<D: Clone> Rule<D> for NumberRule<D> {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<D> {
        if let Some(c) = scanner.read() {
            let column_matches = match self.column {
                None => true,
                Some(column) => starts_at_column(scanner, column),
            };
            if c.is_ascii_digit() && column_matches {
                while let Some(c) = scanner.read() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                }
                scanner.unread();
                return self.token.clone();
            }
        }
        scanner.unread();
        Token::Undefined
    }
}

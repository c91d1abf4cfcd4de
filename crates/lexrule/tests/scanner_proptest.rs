//! Property-based tests for the rule-based scanner
//!
//! These check the token stream invariants for arbitrary text and ranges:
//! tokens tile the range without gaps, the end is sticky, reads and unreads
//! balance, and columns agree with the line structure of the text.

use lexrule::rules::{
    CharWhitespace, IdentifierDetector, NumberRule, PatternRule, WhitespaceRule, WordRule,
};
use lexrule::{
    CharacterScanner, Document, Rule, RuleBasedScanner, TextSource, Token, TokenScanner,
};
use proptest::prelude::*;

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,5}",
            "[0-9]{1,3}",
            "[ \t]{1,2}",
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            Just("\"str\"".to_string()),
            Just("\"open".to_string()),
            Just("/* c */".to_string()),
            Just("/*".to_string()),
            Just("// note".to_string()),
            Just("/".to_string()),
            "[=;(){}]",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

/// Stock rules; each gives back what it read when it does not match,
/// and a match never keeps a read past the range end
fn restoring_rules() -> Vec<Box<dyn Rule<&'static str>>> {
    vec![
        Box::new(PatternRule::end_of_line("//", Token::other("comment"))),
        Box::new(PatternRule::multi_line("/*", "*/", Token::other("comment"))),
        Box::new(PatternRule::single_line("\"", "\"", Token::other("string")).with_escape('\\')),
        Box::new(WhitespaceRule::new(CharWhitespace)),
        Box::new(WordRule::with_default(IdentifierDetector, Token::other("word"))),
        Box::new(NumberRule::new(Token::other("number"))),
    ]
}

fn digits(scanner: &mut dyn CharacterScanner) -> Token<&'static str> {
    run(scanner, |c| c.is_ascii_digit(), "digits")
}

fn alphanumeric(scanner: &mut dyn CharacterScanner) -> Token<&'static str> {
    run(scanner, |c| c.is_ascii_alphanumeric(), "alphanumeric")
}

fn run(
    scanner: &mut dyn CharacterScanner,
    accept: impl Fn(char) -> bool,
    name: &'static str,
) -> Token<&'static str> {
    let mut count = 0;
    loop {
        match scanner.read() {
            Some(c) if accept(c) => count += 1,
            _ => {
                scanner.unread();
                break;
            }
        }
    }
    if count == 0 {
        Token::Undefined
    } else {
        Token::other(name)
    }
}

/// Clamp an arbitrary (start, length) pair into a range that starts inside the text
fn clamp_range(len: usize, start: usize, length: usize) -> (usize, usize) {
    (start % (len + 1), length)
}

proptest! {
    #[test]
    fn tokens_tile_the_range(
        text in source_strategy(),
        start in 0usize..200,
        length in 0usize..220,
    ) {
        let doc = Document::from(text.as_str());
        let (offset, length) = clamp_range(doc.len(), start, length);
        let end = doc.len().min(offset + length);

        let mut scanner = RuleBasedScanner::with_rules(restoring_rules());
        scanner.set_default_return_token(Token::other("default")).unwrap();
        scanner.set_range(&doc, offset, length);

        let mut expected_offset = offset;
        loop {
            let token = scanner.next_token();
            prop_assert!(!token.is_undefined());
            prop_assert_eq!(scanner.token_offset(), expected_offset);
            if token.is_eof() {
                prop_assert_eq!(scanner.token_length(), 0);
                break;
            }
            prop_assert!(scanner.token_length() > 0);
            expected_offset += scanner.token_length();
            prop_assert!(expected_offset <= end);
        }
        prop_assert_eq!(expected_offset, end);

        // The end is sticky
        for _ in 0..3 {
            prop_assert_eq!(scanner.next_token(), Token::Eof);
            prop_assert_eq!(scanner.token_length(), 0);
        }
    }

    #[test]
    fn first_matching_rule_wins(text in "[a-z0-9 ]{0,40}") {
        let doc = Document::from(text.as_str());
        let rules: Vec<Box<dyn Rule<&'static str>>> = vec![Box::new(digits), Box::new(alphanumeric)];
        let mut scanner = RuleBasedScanner::with_rules(rules);
        scanner.set_default_return_token(Token::other("default")).unwrap();
        scanner.set_range(&doc, 0, doc.len());

        let chars: Vec<char> = text.chars().collect();
        for scanned in scanner.tokens() {
            let first = chars[scanned.offset];
            let lexeme = &chars[scanned.offset..scanned.offset + scanned.length];
            if first.is_ascii_digit() {
                prop_assert_eq!(scanned.token, Token::other("digits"));
                prop_assert!(lexeme.iter().all(|c| c.is_ascii_digit()));
            } else if first.is_ascii_alphanumeric() {
                prop_assert_eq!(scanned.token, Token::other("alphanumeric"));
            } else {
                prop_assert_eq!(scanned.token, Token::other("default"));
                prop_assert_eq!(scanned.length, 1);
            }
        }
    }

    #[test]
    fn reads_and_unreads_balance(text in "[a-z\n]{0,30}", start in 0usize..40, count in 0usize..50) {
        let doc = Document::from(text.as_str());
        let offset = start % (doc.len() + 1);

        let mut scanner: RuleBasedScanner<'_, &str> = RuleBasedScanner::new();
        scanner.set_range(&doc, offset, doc.len() - offset);

        let first: Vec<Option<char>> = (0..count).map(|_| scanner.read()).collect();
        for _ in 0..count {
            scanner.unread();
        }
        prop_assert_eq!(scanner.cursor().offset(), offset);

        let second: Vec<Option<char>> = (0..count).map(|_| scanner.read()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn column_counts_characters_since_line_start(text in "[a-c\n]{0,30}", count in 0usize..40) {
        let doc = Document::from(text.as_str());
        let mut scanner: RuleBasedScanner<'_, &str> = RuleBasedScanner::new();
        scanner.set_range(&doc, 0, doc.len());

        let count = count.min(doc.len());
        for _ in 0..count {
            scanner.read();
        }

        let prefix: Vec<char> = text.chars().take(count).collect();
        let expected = match prefix.iter().rposition(|&c| c == '\n') {
            Some(newline) => count - newline - 1,
            None => count,
        };
        prop_assert_eq!(scanner.column(), Some(expected));
    }
}

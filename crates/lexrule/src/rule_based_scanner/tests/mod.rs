
use super::*;
use lexrule_text::Document;

type Scanned = (Token<&'static str>, usize, usize);

#[allow(dead_code)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

/// Scan the whole of `text` and collect every token, including the final EOF
fn scan_all(rules: Vec<Box<dyn Rule<&'static str>>>, text: &str) -> Vec<Scanned> {
    init_test_logger();
    let doc = Document::from(text);
    let mut scanner = RuleBasedScanner::with_rules(rules);
    scanner
        .set_default_return_token(Token::other("default"))
        .unwrap();
    scanner.set_range(&doc, 0, doc.len());
    drain(&mut scanner)
}

fn drain(scanner: &mut RuleBasedScanner<'_, &'static str>) -> Vec<Scanned> {
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let eof = token.is_eof();
        tokens.push((token, scanner.token_offset(), scanner.token_length()));
        if eof {
            return tokens;
        }
    }
}

/// Matches a run of ASCII lowercase letters
fn lowercase_word(scanner: &mut dyn CharacterScanner) -> Token<&'static str> {
    let mut count = 0;
    loop {
        match scanner.read() {
            Some(c) if c.is_ascii_lowercase() => count += 1,
            _ => {
                scanner.unread();
                break;
            }
        }
    }
    if count == 0 {
        Token::Undefined
    } else {
        Token::other("WORD")
    }
}

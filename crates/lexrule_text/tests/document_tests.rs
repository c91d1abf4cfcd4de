use lexrule_text::{Document, LocationError, TextSource, DEFAULT_LINE_DELIMITERS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_document_reports_default_delimiters() {
    let doc = Document::from("x");
    assert_eq!(doc.legal_line_delimiters(), DEFAULT_LINE_DELIMITERS.as_slice());
    assert!(doc.legal_line_delimiters().iter().any(|d| d == "\r\n"));
}

#[test]
fn test_get_and_replace_ranges() {
    let mut doc = Document::from("Patient data");
    assert_eq!(doc.get(0, 7).as_deref(), Ok("Patient"));
    assert_eq!(
        doc.get(8, 10),
        Err(LocationError::RangeOutOfBounds {
            offset: 8,
            len: 10,
            length: 12
        })
    );

    doc.replace(8, 4, "record\nsummary").unwrap();
    assert_eq!(doc.to_string(), "Patient record\nsummary");
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.line_offset(1), Ok(15));
}

#[test]
fn test_set_replaces_content() {
    let mut doc = Document::from("a\nb\nc");
    assert_eq!(doc.line_count(), 3);
    doc.set("single");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.len(), 6);
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof!["[a-z ]{0,6}", Just("\n".to_string()), Just("\r\n".to_string()), Just("\r".to_string())],
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn line_index_is_consistent(text in text_strategy()) {
        let doc = Document::from(text.as_str());

        for line in 0..doc.line_count() {
            let start = doc.line_offset(line).unwrap();
            prop_assert_eq!(doc.line_of_offset(start).unwrap(), line);
        }

        for offset in 0..=doc.len() {
            let line = doc.line_of_offset(offset).unwrap();
            let start = doc.line_offset(line).unwrap();
            prop_assert!(start <= offset);
            prop_assert!(offset - start <= doc.line_length(line).unwrap());
        }

        let total: usize = (0..doc.line_count()).map(|l| doc.line_length(l).unwrap()).sum();
        prop_assert_eq!(total, doc.len());
    }
}

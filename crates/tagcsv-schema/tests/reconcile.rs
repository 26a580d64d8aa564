use proptest::prelude::*;
use tagcsv_model::FieldKind;
use tagcsv_schema::{FieldDescriptor, HeaderError, reconcile};

fn descriptor(name: &str, required: bool, index: usize) -> FieldDescriptor {
    FieldDescriptor {
        name: name.to_string(),
        ident: "field",
        required,
        index,
        kind: FieldKind::Integer,
        decodes_text: false,
        encodes_text: false,
    }
}

#[test]
fn test_header_spellings_match_the_same_field() {
    let fields = vec![descriptor("integer", true, 0)];
    for header in [" Integer ", "INTEGER", "integer", "\tinteger"] {
        let mapping = reconcile(&[header], &fields).unwrap();
        assert_eq!(mapping.matched_headers(), vec!["integer"], "{header:?}");
    }
}

#[test]
fn test_column_order_follows_the_header() {
    let fields = vec![descriptor("integer", true, 0), descriptor("string", false, 1)];
    let mapping = reconcile(&["string", "integer"], &fields).unwrap();
    assert_eq!(mapping.matched_headers(), vec!["string", "integer"]);
    assert_eq!(mapping.slot(0).map(|f| f.index), Some(1));
    assert_eq!(mapping.slot(1).map(|f| f.index), Some(0));
}

#[test]
fn test_no_matched_headers() {
    let fields = vec![descriptor("integer", false, 0)];
    let mapping = reconcile(&["no_match", "no_match_two"], &fields).unwrap();
    assert!(mapping.matched_headers().is_empty());
    assert_eq!(mapping.len(), 2);
}

#[test]
fn test_duplicate_headers_after_normalization() {
    let fields = vec![descriptor("string", false, 0)];
    let err = reconcile(&["string", "test", "STRING"], &fields).unwrap_err();
    assert_eq!(
        err,
        HeaderError::DuplicateHeader {
            header: "STRING".to_string()
        }
    );
}

#[test]
fn test_first_missing_required_field_is_reported() {
    let fields = vec![
        descriptor("present", true, 0),
        descriptor("first", true, 1),
        descriptor("second", true, 2),
    ];
    let err = reconcile(&["present"], &fields).unwrap_err();
    assert_eq!(err.to_string(), "column 'first' required but not found");
}

fn scramble_case(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn test_matching_ignores_case_and_padding(
        name in "[a-z][a-z0-9_]{0,12}",
        mask in prop::collection::vec(any::<bool>(), 1..8),
        left in 0usize..3,
        right in 0usize..3,
    ) {
        let fields = vec![descriptor(&name, true, 0)];
        let header = format!("{}{}{}", " ".repeat(left), scramble_case(&name, &mask), " ".repeat(right));
        let mapping = reconcile(&[header.as_str()], &fields).unwrap();
        prop_assert_eq!(mapping.matched_headers(), vec![name.as_str()]);
    }

    #[test]
    fn test_mapping_length_equals_header_count(
        headers in prop::collection::hash_set("[a-z]{1,6}", 1..10),
    ) {
        let headers: Vec<String> = headers.into_iter().collect();
        let fields = vec![descriptor("zzzzzzz", false, 0)];
        let mapping = reconcile(&headers, &fields).unwrap();
        prop_assert_eq!(mapping.len(), headers.len());
        prop_assert!(mapping.matched_headers().is_empty());
    }
}

use proptest::prelude::*;
use tagcsv_codec::{DecodeError, EncodeError, decode_row, encode_row};
use tagcsv_model::{CodecError, CodecResult, CsvValue, DecodeFn, EncodeFn};
use tagcsv_schema::{FieldDef, Record, Schema, reconcile};

macro_rules! def {
    ($record:ty, $field:ident, $tag:expr) => {
        FieldDef::new(
            stringify!($field),
            Some($tag),
            |r: &$record| &r.$field,
            |r: &mut $record| &mut r.$field,
        )
    };
}

/// Upper-cases on decode, refuses the value "boom" on encode.
#[derive(Debug, Default, Clone, PartialEq)]
struct Shout(String);

fn decode_shout(slot: &mut Shout, raw: &[u8]) -> CodecResult<()> {
    let text = std::str::from_utf8(raw).map_err(CodecError::from_source)?;
    if text == "bad" {
        return Err(CodecError::new("refused"));
    }
    slot.0 = text.to_uppercase();
    Ok(())
}

fn encode_shout(slot: &Shout) -> CodecResult<Vec<u8>> {
    if slot.0 == "boom" {
        return Err(CodecError::new("cannot render"));
    }
    Ok(slot.0.to_lowercase().into_bytes())
}

impl CsvValue for Shout {
    fn text_decoder() -> Option<DecodeFn<Self>> {
        Some(decode_shout)
    }

    fn text_encoder() -> Option<EncodeFn<Self>> {
        Some(encode_shout)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Row {
    text: String,
    number: i64,
    small: i8,
    flag: bool,
    texts: Vec<String>,
    numbers: Vec<i32>,
    shout: Option<Shout>,
    note: Option<String>,
}

impl Record for Row {
    fn fields() -> Vec<FieldDef<Self>> {
        vec![
            def!(Row, text, "text,required"),
            def!(Row, number, "number"),
            def!(Row, small, "small"),
            def!(Row, flag, "flag"),
            def!(Row, texts, "texts"),
            def!(Row, numbers, "numbers"),
            def!(Row, shout, "shout"),
            def!(Row, note, "note"),
        ]
    }
}

const HEADER: [&str; 8] = [
    "text", "number", "small", "flag", "texts", "numbers", "shout", "note",
];

fn decode(cells: &[&str], dest: &mut Row) -> Result<(), DecodeError> {
    let schema = Schema::<Row>::derive().unwrap();
    let mapping = reconcile(&HEADER, schema.fields()).unwrap();
    let cells: Vec<&[u8]> = cells.iter().map(|c| c.as_bytes()).collect();
    decode_row(&schema, &mapping, &cells, dest)
}

#[test]
fn test_decodes_every_builtin_kind() {
    let mut row = Row::default();
    decode(
        &[" hi ", " -12 ", "7", "T", "a,b c", "1,2,3", "loud", "n"],
        &mut row,
    )
    .unwrap();

    assert_eq!(row.text, "hi");
    assert_eq!(row.number, -12);
    assert_eq!(row.small, 7);
    assert!(row.flag);
    assert_eq!(row.texts, vec!["a", "b c"]);
    assert_eq!(row.numbers, vec![1, 2, 3]);
    assert_eq!(row.shout, Some(Shout("LOUD".to_string())));
    assert_eq!(row.note.as_deref(), Some("n"));
}

#[test]
fn test_column_count_is_checked_first() {
    let mut row = Row::default();
    let err = decode(&["x", "1"], &mut row).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::ColumnCount {
            expected: 8,
            found: 2
        }
    ));
    assert_eq!(row, Row::default());
}

#[test]
fn test_empty_required_cell_fails() {
    let mut row = Row::default();
    let err = decode(&["  ", "1", "", "", "", "", "", ""], &mut row).unwrap_err();
    assert_eq!(err.to_string(), "column text required but no value found");
}

#[test]
fn test_empty_optional_cell_resets_field() {
    let mut row = Row::default();
    decode(&["a", "5", "1", "true", "x", "9", "q", "n"], &mut row).unwrap();
    decode(&["b", "", "", "", "", "", "", ""], &mut row).unwrap();
    assert_eq!(
        row,
        Row {
            text: "b".to_string(),
            ..Row::default()
        }
    );
}

#[test]
fn test_integer_and_boolean_failures() {
    let mut row = Row::default();
    let err = decode(&["a", "12x", "", "", "", "", "", ""], &mut row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to coerce value '12x' into integer for field number"
    );

    let err = decode(&["a", "", "300", "", "", "", "", ""], &mut row).unwrap_err();
    assert!(matches!(err, DecodeError::Integer { ref field, .. } if field == "small"));

    let err = decode(&["a", "", "", "yes", "", "", "", ""], &mut row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to coerce value 'yes' into boolean for field flag"
    );
}

#[test]
fn test_integer_list_reports_failing_element() {
    let mut row = Row {
        numbers: vec![4],
        ..Row::default()
    };
    let err = decode(&["a", "", "", "", "", "1,x,3", "", ""], &mut row).unwrap_err();
    match err {
        DecodeError::IntegerElement {
            ref value, index, ..
        } => {
            assert_eq!(value, "x");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with(
        "failed to coerce value 'x' (indexed 1) into integer for field numbers: "
    ));
    assert_eq!(row.numbers, vec![4]);
}

#[test]
fn test_integer_list_element_out_of_range() {
    let mut row = Row {
        numbers: vec![4],
        ..Row::default()
    };
    let err = decode(&["a", "", "", "", "", "1,3000000000", "", ""], &mut row).unwrap_err();
    match err {
        DecodeError::IntegerElement {
            ref value, index, ..
        } => {
            assert_eq!(value, "3000000000");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "failed to coerce value '3000000000' (indexed 1) into integer for field numbers: \
         number out of range [-2147483648, 2147483647]"
    );
    assert_eq!(row.numbers, vec![4]);

    decode(&["a", "", "", "", "", "-2147483648,2147483647", "", ""], &mut row).unwrap();
    assert_eq!(row.numbers, vec![i32::MIN, i32::MAX]);
}

#[test]
fn test_list_elements_are_not_trimmed() {
    let mut row = Row::default();
    decode(&["a", "", "", "", "x, y", "", "", ""], &mut row).unwrap();
    assert_eq!(row.texts, vec!["x", " y"]);

    let err = decode(&["a", "", "", "", "", "1, 2", "", ""], &mut row).unwrap_err();
    assert!(matches!(err, DecodeError::IntegerElement { index: 1, .. }));
}

#[test]
fn test_custom_decoder_failure_wraps_cause() {
    let mut row = Row::default();
    let err = decode(&["a", "", "", "", "", "", "bad", ""], &mut row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to coerce value 'bad' using custom marshaler for field shout: refused"
    );
}

#[test]
fn test_earlier_fields_keep_values_on_error() {
    let mut row = Row::default();
    let _ = decode(&["kept", "3", "", "nope", "", "", "", ""], &mut row).unwrap_err();
    assert_eq!(row.text, "kept");
    assert_eq!(row.number, 3);
}

#[test]
fn test_non_utf8_cell_for_builtin_kind() {
    let schema = Schema::<Row>::derive().unwrap();
    let mapping = reconcile(&HEADER, schema.fields()).unwrap();
    let cells: [&[u8]; 8] = [b"\xC0", b"", b"", b"", b"", b"", b"", b""];
    let mut row = Row::default();
    let err = decode_row(&schema, &mapping, &cells, &mut row).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidUtf8 { ref field } if field == "text"));
}

#[test]
fn test_unmapped_columns_are_ignored() {
    let schema = Schema::<Row>::derive().unwrap();
    let mapping = reconcile(&["extra", "text", "other"], schema.fields()).unwrap();
    let mut row = Row::default();
    let cells: [&[u8]; 3] = [b"?", b"t", b"!"];
    decode_row(&schema, &mapping, &cells, &mut row).unwrap();
    assert_eq!(row.text, "t");
}

#[test]
fn test_encodes_in_declaration_order() {
    let row = Row {
        text: "hi".to_string(),
        number: -3,
        small: 2,
        flag: false,
        texts: vec!["a".to_string(), "b".to_string()],
        numbers: vec![1, 2],
        shout: Some(Shout("LOUD".to_string())),
        note: None,
    };
    let schema = Schema::<Row>::derive().unwrap();
    let cells = encode_row(&schema, &row).unwrap();
    assert_eq!(
        cells,
        vec!["hi", "-3", "2", "false", "a,b", "1,2", "loud", ""]
    );
}

#[test]
fn test_absent_custom_value_encodes_empty() {
    let schema = Schema::<Row>::derive().unwrap();
    let cells = encode_row(&schema, &Row::default()).unwrap();
    assert_eq!(cells[6], "");
}

#[test]
fn test_custom_encoder_failure() {
    let row = Row {
        shout: Some(Shout("boom".to_string())),
        ..Row::default()
    };
    let schema = Schema::<Row>::derive().unwrap();
    let err = encode_row(&schema, &row).unwrap_err();
    assert!(matches!(err, EncodeError::Custom { ref field, .. } if field == "shout"));
}

proptest! {
    #[test]
    fn test_encoded_rows_decode_to_the_same_record(
        text in "[a-z][a-z ]{0,8}[a-z]",
        number in any::<i64>(),
        small in any::<i8>(),
        flag in any::<bool>(),
        texts in prop::collection::vec("[a-z]{1,4}", 1..4),
        numbers in prop::collection::vec(any::<i32>(), 1..4),
    ) {
        let original = Row {
            text,
            number,
            small,
            flag,
            texts,
            numbers,
            shout: None,
            note: Some("n".to_string()),
        };
        let schema = Schema::<Row>::derive().unwrap();
        let cells = encode_row(&schema, &original).unwrap();

        let mapping = reconcile(&HEADER, schema.fields()).unwrap();
        let cells: Vec<&[u8]> = cells.iter().map(|c| c.as_bytes()).collect();
        let mut decoded = Row::default();
        decode_row(&schema, &mapping, &cells, &mut decoded).unwrap();
        prop_assert_eq!(decoded, original);
    }
}

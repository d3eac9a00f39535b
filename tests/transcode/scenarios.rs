//! Fixed transcoding scenarios, one tag value shape per test.

use crate::common::*;
use tagdex::FieldKind;

fn assert_only_field(row: &OutputRow, name: &str, expected: FieldValue) {
    assert_eq!(row.field(name), Some(&expected), "field {}", name);
    assert_eq!(row.fields.len(), 1, "unexpected extra fields: {:?}", row.fields);
    assert_eq!(row.object_id, OBJECT_ID);
}

#[test]
fn boolean_value_sets_bool_field() {
    let row = transcode_pairs(&[("foo/bar", "true")]).unwrap();
    assert_only_field(&row, "foo/bar_tag_bool", FieldValue::Bool(true));
    assert_eq!(paths(&row), vec!["foo/bar"]);
}

#[test]
fn false_value_sets_bool_field() {
    let row = transcode_pairs(&[("foo/bar", "false")]).unwrap();
    assert_only_field(&row, "foo/bar_tag_bool", FieldValue::Bool(false));
}

#[test]
fn null_value_sets_null_marker_false() {
    let row = transcode_pairs(&[("foo/bar", "null")]).unwrap();
    assert_only_field(&row, "foo/bar_tag_null", FieldValue::Bool(false));
    assert!(row.has_path("foo/bar"));
}

#[test]
fn string_set_value_sets_set_field() {
    let row = transcode_pairs(&[("foo/bar", r#"["one", "two"]"#)]).unwrap();
    assert_eq!(sorted_set(&row, "foo/bar_tag_set_str"), vec!["one", "two"]);
    assert_eq!(row.fields.len(), 1);
}

#[test]
fn string_set_with_empty_string() {
    let row = transcode_pairs(&[("foo/bar", r#"[""]"#)]).unwrap();
    assert_eq!(sorted_set(&row, "foo/bar_tag_set_str"), vec![String::new()]);
}

#[test]
fn string_value_sets_raw_str_field() {
    let row = transcode_pairs(&[("foo/bar", r#""fubar""#)]).unwrap();
    assert_only_field(&row, "foo/bar_tag_raw_str", FieldValue::Str("fubar".into()));
}

#[test]
fn empty_string_value_sets_raw_str_field() {
    let row = transcode_pairs(&[("foo/bar", r#""""#)]).unwrap();
    assert_only_field(&row, "foo/bar_tag_raw_str", FieldValue::Str(String::new()));
}

#[test]
fn string_with_parens_and_commas() {
    let row = transcode_pairs(&[("foo/bar", r#""),""#)]).unwrap();
    assert_only_field(&row, "foo/bar_tag_raw_str", FieldValue::Str("),".into()));
}

#[test]
fn string_with_quotes() {
    let row = transcode_pairs(&[("foo/bar", r#""hello\"world'""#)]).unwrap();
    assert_only_field(
        &row,
        "foo/bar_tag_raw_str",
        FieldValue::Str("hello\"world'".into()),
    );
}

#[test]
fn integer_value_is_double() {
    let row = transcode_pairs(&[("foo/bar", "4")]).unwrap();
    assert_only_field(&row, "foo/bar_tag_number", FieldValue::Number(4.0));
}

#[test]
fn six_digit_integer_value() {
    let row = transcode_pairs(&[("foo/bar", "123456")]).unwrap();
    assert_only_field(&row, "foo/bar_tag_number", FieldValue::Number(123456.0));
}

#[test]
fn float_value() {
    let row = transcode_pairs(&[("foo/bar", "4.3")]).unwrap();
    assert_only_field(&row, "foo/bar_tag_number", FieldValue::Number(4.3));
}

#[test]
fn more_than_one_tag_value() {
    let row = transcode_pairs(&[("foo/bar", "4.3"), ("test/tag", r#""hello""#)]).unwrap();
    assert_eq!(row.field("foo/bar_tag_number"), Some(&FieldValue::Number(4.3)));
    assert_eq!(
        row.field("test/tag_tag_raw_str"),
        Some(&FieldValue::Str("hello".into()))
    );
    assert_eq!(paths(&row), vec!["foo/bar", "test/tag"]);
    assert_eq!(row.object_id, OBJECT_ID);
}

#[test]
fn binary_value_has_path_but_no_field() {
    let payload = r#"{"file-id": "222b0bd51fcef7e65c2e62db2ed65457013bab56be6fafeb19ee11d453153c80", "mime-type": "image/jpeg", "size": 4}"#;
    let row = transcode_pairs(&[("foo/bar", payload)]).unwrap();
    for kind in FieldKind::ALL {
        assert!(row.field(&kind.field_name("foo/bar")).is_none(), "{}", kind);
    }
    assert!(row.fields.is_empty());
    assert_eq!(paths(&row), vec!["foo/bar"]);
}

#[test]
fn no_tag_values() {
    let row = transcode_literal(r#"{"(,)"}"#).unwrap();
    assert!(row.paths.is_empty());
    assert!(row.fields.is_empty());
    assert_eq!(row.object_id, OBJECT_ID);
}

#[test]
fn empty_value_token_is_skipped() {
    let row = transcode_literal(r#"{"(foo/bar,)"}"#).unwrap();
    assert!(row.is_empty());
}

#[test]
fn empty_decoded_value_has_path_but_no_field() {
    let row = transcode_pairs(&[("foo/bar", "")]).unwrap();
    assert!(row.fields.is_empty());
    assert_eq!(paths(&row), vec!["foo/bar"]);
}

#[test]
fn out_of_range_numbers_become_infinite() {
    let huge = format!("1{}", "0".repeat(400));
    let row = transcode_pairs(&[("a/big", huge.as_str()), ("a/exp", "1e400"), ("a/neg", "-1e400")])
        .unwrap();
    assert_eq!(row.field("a/big_tag_number"), Some(&FieldValue::Number(f64::INFINITY)));
    assert_eq!(row.field("a/exp_tag_number"), Some(&FieldValue::Number(f64::INFINITY)));
    assert_eq!(
        row.field("a/neg_tag_number"),
        Some(&FieldValue::Number(f64::NEG_INFINITY))
    );
}

#[test]
fn invalid_tag_value_is_malformed_pair() {
    let err = transcode_literal(r#"{"(bogus-value)"}"#).unwrap_err();
    assert!(matches!(err.root(), TranscodeError::MalformedPair { .. }));
    assert_eq!(err.object_id(), Some(OBJECT_ID));
}

#[test]
fn malformed_pair_aborts_rest_of_row() {
    let literal = format!(
        "{{{},\"(bogus-value)\"}}",
        element("foo/bar", "true")
    );
    assert!(transcode_literal(&literal).is_err());
}

#[test]
fn unicode_escapes_round_trip() {
    let row = transcode_pairs(&[("foo/bar", r#""\u00f1and\u00fa""#)]).unwrap();
    assert_only_field(&row, "foo/bar_tag_raw_str", FieldValue::Str("\u{f1}and\u{fa}".into()));
}

#[test]
fn raw_utf8_round_trips() {
    let row = transcode_pairs(&[("foo/bar", "\"\u{e1}\u{e9}\u{ed}\u{f3}\"")]).unwrap();
    assert_only_field(
        &row,
        "foo/bar_tag_raw_str",
        FieldValue::Str("\u{e1}\u{e9}\u{ed}\u{f3}".into()),
    );
}

#[test]
fn unicode_set_round_trips() {
    let row = transcode_pairs(&[("foo/bar", "[\"one\", \"\u{e1}\u{e9}\"]")]).unwrap();
    assert_eq!(
        sorted_set(&row, "foo/bar_tag_set_str"),
        vec!["one".to_string(), "\u{e1}\u{e9}".to_string()]
    );
}

#[test]
fn escaped_literal_from_export() {
    // As rendered by the export for "The path of a namespace."
    let literal =
        r#"{"(fluiddb/namespaces/description,\"\\\\x225468652070617468206f662061206e616d6573706163652e22\")"}"#;
    let row = transcode_literal(literal).unwrap();
    assert_eq!(
        row.field("fluiddb/namespaces/description_tag_raw_str"),
        Some(&FieldValue::Str("The path of a namespace.".into()))
    );
}

#[test]
fn invalid_json_reports_both_payloads() {
    let err = transcode_pairs(&[("foo/bar", "{\"a\": ")]).unwrap_err();
    match err.root() {
        TranscodeError::ValueParse {
            original, decoded, ..
        } => {
            assert_eq!(original, &encode_value("{\"a\": "));
            assert_eq!(decoded, "{\"a\": ");
        }
        other => panic!("Wrong error variant: {other:?}"),
    }
}

#[test]
fn unframed_value_is_decode_error() {
    let err = transcode_literal(r#"{"(foo/bar,true)"}"#).unwrap_err();
    assert!(matches!(err.root(), TranscodeError::Decode { .. }));
}

//! Property tests over generated rows.

use crate::common::*;
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use tagdex::FieldKind;

fn tag_path() -> impl Strategy<Value = String> {
    "[a-z]{1,8}/[a-z0-9_-]{1,12}"
}

/// JSON text for a primitive value
fn primitive_json() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("null".to_string()),
        any::<bool>().prop_map(|b| b.to_string()),
        (-(1i64 << 53)..(1i64 << 53)).prop_map(|n| n.to_string()),
        "\\PC*".prop_map(|s| serde_json::to_string(&s).unwrap()),
        vec("\\PC{0,10}", 0..5).prop_map(|v| serde_json::to_string(&v).unwrap()),
    ]
}

/// JSON text for a flat object payload
fn opaque_json() -> impl Strategy<Value = String> {
    btree_map("[a-z-]{1,10}", "[ -~]{0,20}", 0..5)
        .prop_map(|m| serde_json::to_string(&m).unwrap())
}

proptest! {
    #[test]
    fn paths_match_pairs(pairs in btree_map(tag_path(), primitive_json(), 1..8)) {
        let input: Vec<(&str, &str)> = pairs.iter().map(|(p, j)| (p.as_str(), j.as_str())).collect();
        let row = transcode_pairs(&input).unwrap();

        let expected: Vec<&str> = pairs.keys().map(String::as_str).collect();
        prop_assert_eq!(paths(&row), expected);
        prop_assert_eq!(row.fields.len(), pairs.len());
        for name in row.fields.keys() {
            let (path, _) = FieldKind::parse_field_name(name).unwrap();
            prop_assert!(pairs.contains_key(path));
        }
    }

    #[test]
    fn strings_round_trip(s in "\\PC*") {
        let json = serde_json::to_string(&s).unwrap();
        let row = transcode_pairs(&[("foo/bar", json.as_str())]).unwrap();
        let expected = FieldValue::Str(s);
        prop_assert_eq!(row.field("foo/bar_tag_raw_str"), Some(&expected));
    }

    #[test]
    fn integers_become_doubles(n in -(1i64 << 53)..(1i64 << 53)) {
        let json = n.to_string();
        let row = transcode_pairs(&[("foo/bar", json.as_str())]).unwrap();
        let expected = FieldValue::Number(n as f64);
        prop_assert_eq!(row.field("foo/bar_tag_number"), Some(&expected));
    }

    #[test]
    fn string_sets_round_trip(set in vec("\\PC{0,10}", 0..6)) {
        let json = serde_json::to_string(&set).unwrap();
        let row = transcode_pairs(&[("foo/bar", json.as_str())]).unwrap();
        let expected = FieldValue::StrSet(set);
        prop_assert_eq!(row.field("foo/bar_tag_set_str"), Some(&expected));
    }

    #[test]
    fn objects_give_path_only(json in opaque_json()) {
        let row = transcode_pairs(&[("foo/bar", json.as_str())]).unwrap();
        prop_assert!(row.fields.is_empty());
        prop_assert_eq!(paths(&row), vec!["foo/bar"]);
    }

    #[test]
    fn element_without_comma_aborts(bogus in "[a-z/_-]{1,20}", good in primitive_json()) {
        let literal = format!("{{{},\"({})\"}}", element("foo/bar", &good), bogus);
        let err = transcode_literal(&literal).unwrap_err();
        let is_malformed_pair = matches!(err.root(), TranscodeError::MalformedPair { .. });
        prop_assert!(is_malformed_pair);
    }

    #[test]
    fn object_id_passes_through(id in "\\PC{1,40}") {
        let row = Transcoder::new().transcode(Row::new(id.clone(), "{\"(,)\"}")).unwrap();
        prop_assert_eq!(&row.object_id, &id);
        prop_assert!(row.is_empty());
    }
}

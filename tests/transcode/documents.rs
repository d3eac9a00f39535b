//! Rendering transcoded rows as search documents, singly and in batches.

use crate::common::*;
use serde_json::{json, Value};
use tagdex::{to_document, transcode_batch, BatchConfig, ErrorPolicy, OutputConfig, TagdexConfig};

#[test]
fn document_matches_index_schema() {
    let row = transcode_pairs(&[
        ("foo/bar", "4.3"),
        ("test/tag", r#""hello""#),
        ("test/set", r#"["one", "two"]"#),
        ("test/none", "null"),
        ("test/file", r#"{"mime-type": "image/jpeg", "size": 4}"#),
    ])
    .unwrap();

    let doc = Value::Object(to_document(&row, &OutputConfig::default()));
    assert_eq!(
        doc,
        json!({
            "fluiddb/id": OBJECT_ID,
            "paths": ["foo/bar", "test/file", "test/none", "test/set", "test/tag"],
            "foo/bar_tag_number": 4.3,
            "test/tag_tag_raw_str": "hello",
            "test/set_tag_set_str": ["one", "two"],
            "test/none_tag_null": false,
        })
    );
}

#[test]
fn document_without_values_has_no_paths_field() {
    let row = transcode_literal(r#"{"(,)"}"#).unwrap();
    let doc = to_document(&row, &OutputConfig::default());
    assert!(!doc.contains_key("paths"));
    assert!(!doc.contains_key("path_value_pair"));
    assert_eq!(doc.len(), 1);
}

#[test]
fn configured_layout_is_used() {
    let config = TagdexConfig::from_toml_str(
        "[output]\nid_field = \"object\"\npaths_field = \"has\"\n",
    )
    .unwrap();
    let row = transcode_pairs(&[("foo/bar", "true")]).unwrap();
    let doc = to_document(&row, &config.output);
    assert_eq!(doc["object"], OBJECT_ID);
    assert_eq!(doc["has"], json!(["foo/bar"]));
    assert_eq!(doc["foo/bar_tag_bool"], true);
}

#[test]
fn batch_skip_reports_failures() {
    let rows = vec![
        Row::new("a", literal(&[("x/y", "1")])),
        Row::new("b", r#"{"(bogus-value)"}"#),
        Row::without_pairs("c"),
        Row::new("d", literal(&[("x/y", "[1]")])),
    ];
    let config = BatchConfig {
        on_error: ErrorPolicy::Skip,
        parallel: true,
    };
    let report = transcode_batch(&Transcoder::new(), rows, &config).unwrap();

    let ids: Vec<&str> = report.documents.iter().map(|d| d.object_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    let kinds: Vec<(&str, &str)> = report
        .failures
        .iter()
        .map(|f| (f.object_id.as_str(), f.error.kind()))
        .collect();
    assert_eq!(kinds, vec![("b", "malformed_pair"), ("d", "value_parse")]);
}

#[test]
fn batch_abort_stops_at_first_failure() {
    let rows = vec![
        Row::new("a", literal(&[("x/y", "1")])),
        Row::new("b", literal(&[("x/y", "{")])),
    ];
    let err = transcode_batch(&Transcoder::new(), rows, &BatchConfig::default()).unwrap_err();
    assert_eq!(err.object_id(), Some("b"));
    assert_eq!(err.kind(), "value_parse");
}

#[test]
fn transcoder_is_shareable_across_threads() {
    let transcoder = std::sync::Arc::new(Transcoder::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let transcoder = std::sync::Arc::clone(&transcoder);
            std::thread::spawn(move || {
                let id = uuid::Uuid::new_v4().to_string();
                let json = i.to_string();
                let row = transcoder
                    .transcode(Row::new(id.clone(), literal(&[("t/n", json.as_str())])))
                    .unwrap();
                (id, row)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (id, row) = handle.join().unwrap();
        assert_eq!(row.object_id, id);
        assert_eq!(row.field("t/n_tag_number"), Some(&FieldValue::Number(i as f64)));
    }
}

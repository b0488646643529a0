use ejson::{Arena, ParseOptions};
use rstest::rstest;

fn render(source: &str) -> String {
    let mut arena = Arena::unbounded();
    let options = ParseOptions::new().with_single_quoted_strings(true);
    let parsed = ejson::parse_str(source, &mut arena, &options).unwrap();
    ejson::to_string(arena.value(parsed.root))
}

#[rstest]
#[case("null", "null")]
#[case("true", "true")]
#[case("false", "false")]
#[case("0", "0")]
#[case("9223372036854775807", "9223372036854775807")]
#[case("97.24", "97.240000")]
#[case("2.5", "2.500000")]
#[case("3.0", "3")]
#[case("\"hi\"", "\"hi\"")]
#[case("'hi'", "\"hi\"")]
#[case("[]", "[]")]
#[case("{}", "{}")]
#[case("[1,2 ,3]", "[1, 2, 3]")]
#[case(r#"{"a":1,"b":[true,null]}"#, r#"{"a": 1, "b": [true, null]}"#)]
#[case(r#"{'k': 'v'}"#, r#"{"k": "v"}"#)]
fn renders_canonical_text(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render(source), expected);
}

#[rstest]
fn strings_are_written_verbatim() {
    assert_eq!(render(r#"["a\nb", "tab\there"]"#), r#"["a\nb", "tab\there"]"#);
}

#[rstest]
fn duplicate_keys_are_written_in_order() {
    assert_eq!(render(r#"{"a":1,"a":2}"#), r#"{"a": 1, "a": 2}"#);
}

#[rstest]
#[case(r#"[97.24, true, {"name": false, "pass": "HelloKitty"}, null]"#)]
#[case(r#"{"nested": {"deep": [[[]], {}, 0.5, 12]}}"#)]
#[case("[2.5, 100, \"x\", [false]]")]
fn reparse_of_output_is_equal(#[case] source: &str) {
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse_str(source, &mut arena, &ParseOptions::default()).unwrap();
    let text = ejson::to_vec(arena.value(parsed.root));

    let mut second = Arena::unbounded();
    let reparsed = ejson::parse(&text, &mut second, &ParseOptions::default()).unwrap();
    assert_eq!(reparsed.consumed, text.len());
    assert!(ejson::equal(arena.value(parsed.root), second.value(reparsed.root)));
}

#[rstest]
fn bounded_write_fits() {
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse_str("[1,2,3]", &mut arena, &ParseOptions::default()).unwrap();
    let mut dst = [0xAAu8; 16];
    let written = ejson::write_to_slice(arena.value(parsed.root), &mut dst);
    assert_eq!(written, 9);
    assert_eq!(&dst[..9], b"[1, 2, 3]");
    assert_eq!(dst[9], 0);
    assert_eq!(dst[10], 0xAA);
}

#[rstest]
#[case(9, b"[1, 2, 3".as_slice())]
#[case(5, b"[1, ".as_slice())]
#[case(1, b"".as_slice())]
fn bounded_write_truncates(#[case] size: usize, #[case] prefix: &[u8]) {
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse_str("[1,2,3]", &mut arena, &ParseOptions::default()).unwrap();
    let mut dst = vec![0xAAu8; size];
    let required = ejson::write_to_slice(arena.value(parsed.root), &mut dst);
    assert_eq!(required, 9);
    assert!(required >= size);
    assert_eq!(&dst[..size - 1], prefix);
    assert_eq!(dst[size - 1], 0);
}

#[rstest]
fn bounded_write_into_empty_buffer_only_measures() {
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse_str(r#"{"k": "v"}"#, &mut arena, &ParseOptions::default()).unwrap();
    let required = ejson::write_to_slice(arena.value(parsed.root), &mut [0u8; 0]);
    assert_eq!(required, r#"{"k": "v"}"#.len());
}

#[rstest]
fn display_matches_to_string() {
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse_str("[1, {\"a\": 0.5}]", &mut arena, &ParseOptions::default()).unwrap();
    let root = arena.value(parsed.root);
    assert_eq!(format!("{root}"), ejson::to_string(root));
    assert_eq!(format!("{root}"), "[1, {\"a\": 0.500000}]");
}

#[rstest]
fn non_utf8_string_is_replaced_in_to_string() {
    let source = b"[\"\xff\"]";
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse(source, &mut arena, &ParseOptions::default()).unwrap();
    let root = arena.value(parsed.root);
    assert_eq!(ejson::to_vec(root), b"[\"\xff\"]".to_vec());
    assert_eq!(ejson::to_string(root), "[\"\u{FFFD}\"]");
}

#[rstest]
fn serializes_through_serde() {
    let source = r#"{"a": 1, "b": [true, null, "x"], "c": 2.5}"#;
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse_str(source, &mut arena, &ParseOptions::default()).unwrap();
    let root = arena.value(parsed.root);

    let value = serde_json::to_value(root).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"a": 1, "b": [true, null, "x"], "c": 2.5})
    );
}

#[rstest]
fn serde_output_keeps_duplicate_keys() {
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse_str(r#"{"a": 1, "a": 2}"#, &mut arena, &ParseOptions::default()).unwrap();
    let text = serde_json::to_string(&arena.value(parsed.root)).unwrap();
    assert_eq!(text, r#"{"a":1,"a":2}"#);
}

#[rstest]
fn serde_writes_non_utf8_strings_as_bytes() {
    let mut arena = Arena::unbounded();
    let parsed = ejson::parse(b"\"\xff\x01\"", &mut arena, &ParseOptions::default()).unwrap();
    let text = serde_json::to_string(&arena.value(parsed.root)).unwrap();
    assert_eq!(text, "[255,1]");
}

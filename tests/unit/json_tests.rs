use filekit::{FileIoError, read_json, write_json, write_json_with_indent};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_write_json() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.json");
    let data = json!({"key": "value"});

    write_json(&data, &test_file).unwrap();

    let read: Value = read_json(&test_file).unwrap();
    assert_eq!(read, data);
}

#[test]
fn test_json_round_trip_values() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("values.json");
    let values = vec![
        json!(null),
        json!(true),
        json!(42),
        json!(-3.5),
        json!("text with \"quotes\" and \n newline"),
        json!([1, "two", [3], {"four": 4}]),
        json!({"nested": {"list": [], "map": {}, "flag": false}}),
    ];

    for value in values {
        write_json(&value, &test_file).unwrap();
        let read: Value = read_json(&test_file).unwrap();
        assert_eq!(read, value);
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Settings {
    name: String,
    retries: u32,
    tags: Vec<String>,
    limits: BTreeMap<String, f64>,
}

#[test]
fn test_json_round_trip_typed() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("settings.json");
    let settings = Settings {
        name: "primary".to_string(),
        retries: 3,
        tags: vec!["a".to_string(), "b".to_string()],
        limits: BTreeMap::from([("cpu".to_string(), 0.5), ("mem".to_string(), 2.0)]),
    };

    write_json(&settings, &test_file).unwrap();

    let read: Settings = read_json(&test_file).unwrap();
    assert_eq!(read, settings);
}

#[test]
fn test_write_json_uses_four_space_indent() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("indent.json");

    write_json(&json!({"a": 1}), &test_file).unwrap();

    assert_eq!(fs::read_to_string(&test_file).unwrap(), "{\n    \"a\": 1\n}");
}

#[test]
fn test_write_json_with_custom_indent() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("indent.json");

    write_json_with_indent(&json!({"a": [1]}), &test_file, 2).unwrap();

    assert_eq!(
        fs::read_to_string(&test_file).unwrap(),
        "{\n  \"a\": [\n    1\n  ]\n}"
    );
}

#[test]
fn test_write_json_overwrites_and_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("nested").join("dir").join("out.json");

    write_json(&json!({"long": "x".repeat(100)}), &test_file).unwrap();
    write_json(&json!(1), &test_file).unwrap();

    assert_eq!(fs::read_to_string(&test_file).unwrap(), "1");
}

#[test]
fn test_read_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("bad.json");
    fs::write(&test_file, "{\"key\": ").unwrap();

    let err = read_json::<Value>(&test_file).unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(err, FileIoError::Parse { format: "JSON", .. }));
}

#[test]
fn test_read_missing_json() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let err = read_json::<Value>(&missing).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_write_json_rejects_non_string_keys() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("keys.json");
    let mut map = BTreeMap::new();
    map.insert(vec![1u8], "value");

    let err = write_json(&map, &test_file).unwrap_err();
    assert!(matches!(err, FileIoError::Serialize { .. }));
}

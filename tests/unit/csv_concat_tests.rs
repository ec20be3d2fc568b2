use filekit::{
    RowDict, read_concatenated_row_dicts, read_csv_as_row_dicts,
    write_csv_from_concatenated_csvs, write_csv_from_row_dicts,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn row(pairs: &[(&str, &str)]) -> RowDict {
    pairs.iter().copied().collect()
}

fn create_temp_csv_files(dir: &Path) -> Vec<PathBuf> {
    let row_dicts_1 = vec![
        row(&[("header1", "file_1_row1_1"), ("header2", "file_1_row1_2")]),
        row(&[("header1", "file_1_row2_1"), ("header2", "file_1_row2_2")]),
    ];
    let row_dicts_2 = vec![
        row(&[("header1", "file_2_row1_1"), ("header2", "file_2_row1_2")]),
        row(&[("header1", "file_2_row2_1"), ("header2", "file_2_row2_2")]),
    ];

    let csv_file_path_1 = dir.join("file1.csv");
    write_csv_from_row_dicts(&row_dicts_1, &csv_file_path_1, None).unwrap();

    let csv_file_path_2 = dir.join("file2.csv");
    write_csv_from_row_dicts(&row_dicts_2, &csv_file_path_2, None).unwrap();

    vec![csv_file_path_1, csv_file_path_2]
}

#[test]
fn test_write_csv_from_concatenated_csvs() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = create_temp_csv_files(temp_dir.path());
    let out_csv_path = temp_dir.path().join("concatenated.csv");

    let written = write_csv_from_concatenated_csvs(&inputs, &out_csv_path).unwrap();
    assert_eq!(written, 4);

    let expected_content = vec![
        row(&[("header1", "file_1_row1_1"), ("header2", "file_1_row1_2")]),
        row(&[("header1", "file_1_row2_1"), ("header2", "file_1_row2_2")]),
        row(&[("header1", "file_2_row1_1"), ("header2", "file_2_row1_2")]),
        row(&[("header1", "file_2_row2_1"), ("header2", "file_2_row2_2")]),
    ];

    let actual_content = read_csv_as_row_dicts(&out_csv_path).unwrap();
    assert_eq!(
        actual_content, expected_content,
        "Expected:\n{:?}\n\nGot:\n{:?}",
        expected_content, actual_content
    );
}

#[test]
fn test_concatenation_equals_reads_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = create_temp_csv_files(temp_dir.path());
    let reversed: Vec<PathBuf> = inputs.iter().rev().cloned().collect();
    let out_csv_path = temp_dir.path().join("reversed.csv");

    write_csv_from_concatenated_csvs(&reversed, &out_csv_path).unwrap();

    let mut expected = read_csv_as_row_dicts(&reversed[0]).unwrap();
    expected.extend(read_csv_as_row_dicts(&reversed[1]).unwrap());
    assert_eq!(read_csv_as_row_dicts(&out_csv_path).unwrap(), expected);
    assert_eq!(expected[0].get("header1"), Some("file_2_row1_1"));
}

#[test]
fn test_concatenation_header_comes_from_first_row() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");
    fs::write(&first, "a,b\n1,2\n").unwrap();
    fs::write(&second, "b,c\n3,4\n").unwrap();
    let out_csv_path = temp_dir.path().join("out.csv");

    write_csv_from_concatenated_csvs(&[&first, &second], &out_csv_path).unwrap();

    assert_eq!(fs::read_to_string(&out_csv_path).unwrap(), "a,b\n1,2\n,3\n");
}

#[test]
fn test_concatenation_skips_header_only_files() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.csv");
    let full = temp_dir.path().join("full.csv");
    fs::write(&empty, "x,y\n").unwrap();
    fs::write(&full, "a\n1\n").unwrap();

    let rows = read_concatenated_row_dicts(&[&empty, &full]).unwrap();

    assert_eq!(rows, vec![row(&[("a", "1")])]);
}

#[test]
fn test_concatenation_missing_input_leaves_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let mut inputs = create_temp_csv_files(temp_dir.path());
    inputs.push(temp_dir.path().join("missing.csv"));
    let out_csv_path = temp_dir.path().join("out.csv");
    fs::write(&out_csv_path, "previous").unwrap();

    let err = write_csv_from_concatenated_csvs(&inputs, &out_csv_path).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(fs::read_to_string(&out_csv_path).unwrap(), "previous");
}

#[test]
fn test_concatenation_of_only_empty_inputs_fails() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.csv");
    fs::write(&empty, "x,y\n").unwrap();
    let out_csv_path = temp_dir.path().join("out.csv");

    let err = write_csv_from_concatenated_csvs(&[&empty], &out_csv_path).unwrap_err();

    assert!(matches!(err, filekit::FileIoError::EmptyInput(_)));
}

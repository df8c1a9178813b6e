// tests/integration_tests/single_file_test.rs
use super::common::create_test_file;
use anyhow::Result;
use fileops::{analyze_file, parse_count};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_single_file_outputs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let lines: Vec<String> = (1..=8).map(|i| format!("line {i} of eight")).collect();
    let input = create_test_file(temp_dir.path(), "input.txt", &(lines.join("\n") + "\n"))?;
    let out_dir = temp_dir.path().join("out");

    let analysis = analyze_file(&input, "line 1", parse_count("3", 5), &out_dir)?;

    assert_eq!(analysis.line_count, 8);
    assert_eq!(analysis.match_count, 1);
    // "line", "of", "eight" per line; the digits are not words.
    assert_eq!(analysis.stats.word_count, 24);

    let filtered = fs::read_to_string(out_dir.join("filtered.txt"))?;
    let filtered_not = fs::read_to_string(out_dir.join("filtered_not.txt"))?;
    assert_eq!(filtered, "line 1 of eight\n");
    assert_eq!(filtered_not.lines().count(), 7);
    assert_eq!(
        fs::read_to_string(out_dir.join("head.txt"))?,
        "line 1 of eight\nline 2 of eight\nline 3 of eight\n"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("tail.txt"))?,
        "line 6 of eight\nline 7 of eight\nline 8 of eight\n"
    );
    Ok(())
}

#[test]
fn test_invalid_count_uses_default() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let lines: Vec<String> = (1..=8).map(|i| format!("row {i}")).collect();
    let input = create_test_file(temp_dir.path(), "input.txt", &lines.join("\n"))?;
    let out_dir = temp_dir.path().join("out");

    analyze_file(&input, "", parse_count("-4", 5), &out_dir)?;

    assert_eq!(fs::read_to_string(out_dir.join("head.txt"))?.lines().count(), 5);
    assert_eq!(fs::read_to_string(out_dir.join("filtered.txt"))?.lines().count(), 8);
    assert_eq!(fs::read_to_string(out_dir.join("filtered_not.txt"))?, "");
    Ok(())
}

#[test]
fn test_empty_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "empty.txt", "")?;
    let out_dir = temp_dir.path().join("out");

    let analysis = analyze_file(&input, "x", 5, &out_dir)?;

    assert_eq!(analysis.line_count, 0);
    assert_eq!(analysis.stats.word_count, 0);
    assert_eq!(analysis.stats.average_length, 0.0);
    for name in ["filtered.txt", "filtered_not.txt", "head.txt", "tail.txt"] {
        assert_eq!(fs::read_to_string(out_dir.join(name))?, "", "{name}");
    }
    Ok(())
}

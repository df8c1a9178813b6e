// tests/integration_tests/directory_test.rs
use super::common::{create_test_file, setup_corpus};
use anyhow::Result;
use fileops::{Error, analyze_directory, merge};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_directory_outputs() -> Result<()> {
    let temp_dir = setup_corpus()?;
    let out = TempDir::new()?;
    let out_dir = out.path().join("out");

    let outputs = analyze_directory(temp_dir.path(), ".txt", &out_dir)?;

    assert_eq!(outputs.file_count, 3);
    assert_eq!(outputs.report, out_dir.join("report.txt"));
    assert_eq!(outputs.index, out_dir.join("index.txt"));
    assert_eq!(outputs.merged, out_dir.join("merged.txt"));

    let index = fs::read_to_string(&outputs.index)?;
    assert_eq!(index.lines().count(), 3);
    assert!(index.lines().all(|l| l.contains(" octets | ")));
    assert_eq!(fs::read(&outputs.merged)?, merge(temp_dir.path(), ".txt")?);
    Ok(())
}

#[test]
fn test_zero_matches_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "only.md", "markdown\n")?;
    let out = TempDir::new()?;

    let result = analyze_directory(temp_dir.path(), ".txt", out.path());

    assert!(matches!(result, Err(Error::NoMatchingFiles { .. })));
    for name in ["report.txt", "index.txt", "merged.txt"] {
        assert!(!out.path().join(name).exists(), "{name} must not be written");
    }
    Ok(())
}

#[test]
fn test_rerun_overwrites_previous_artifacts() -> Result<()> {
    let temp_dir = setup_corpus()?;
    let out = TempDir::new()?;

    analyze_directory(temp_dir.path(), ".txt", out.path())?;
    fs::remove_file(temp_dir.path().join("chapter2.txt"))?;
    let outputs = analyze_directory(temp_dir.path(), ".txt", out.path())?;

    assert_eq!(outputs.file_count, 2);
    let merged = fs::read_to_string(&outputs.merged)?;
    assert!(!merged.contains("Ishmael"));
    Ok(())
}

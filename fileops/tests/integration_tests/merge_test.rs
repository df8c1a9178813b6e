// tests/integration_tests/merge_test.rs
use super::common::{create_test_file, setup_corpus};
use anyhow::Result;
use fileops::{Error, merge};
use tempfile::TempDir;

#[test]
fn test_merge_exact_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a.txt", "hello\n")?;
    create_test_file(temp_dir.path(), "b.txt", "world")?;

    let merged = merge(temp_dir.path(), ".txt")?;

    assert_eq!(
        merged,
        b"===== a.txt =====\nhello\n\n===== b.txt =====\nworld\n\n"
    );
    Ok(())
}

#[test]
fn test_merge_nested_corpus() -> Result<()> {
    let temp_dir = setup_corpus()?;

    let text = String::from_utf8(merge(temp_dir.path(), ".txt")?)?;

    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("===== ")).collect();
    assert_eq!(
        headers,
        vec![
            "===== appendix/notes.txt =====",
            "===== chapter1.txt =====",
            "===== chapter2.txt =====",
        ]
    );
    assert!(text.contains("===== chapter2.txt =====\nCall me Ishmael.\n\n"));
    assert!(!text.contains("not scanned"));
    Ok(())
}

#[test]
fn test_merge_same_tree_twice_is_identical() -> Result<()> {
    let first = setup_corpus()?;
    let second = setup_corpus()?;

    assert_eq!(
        merge(first.path(), ".txt")?,
        merge(second.path(), ".txt")?,
        "Output must not depend on where the tree lives"
    );
    Ok(())
}

#[test]
fn test_merge_missing_root() {
    let result = merge(std::path::Path::new("no/such/root"), ".txt");
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

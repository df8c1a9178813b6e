// tests/integration_tests/report_test.rs
use super::common::setup_corpus;
use anyhow::Result;
use fileops::{AggregateTotals, Error, report, scan};

#[test]
fn test_report_follows_scan_order() -> Result<()> {
    let temp_dir = setup_corpus()?;

    let files = scan(temp_dir.path(), ".txt")?;
    let result = report(temp_dir.path(), ".txt")?;

    assert_eq!(result.paths(), files);
    assert_eq!(files.len(), 3, "Only .txt files are reported");
    Ok(())
}

#[test]
fn test_report_totals_match_records() -> Result<()> {
    let temp_dir = setup_corpus()?;

    let result = report(temp_dir.path(), ".txt")?;

    let size: u64 = result.records.iter().map(|r| r.size).sum();
    let lines: u64 = result.records.iter().map(|r| r.line_count).sum();
    let words: u64 = result.records.iter().map(|r| r.stats.word_count).sum();
    assert_eq!(result.totals, AggregateTotals { size, lines, words });

    // chapter1: 2 lines, 16 words; chapter2: 1 line, 3 words; notes: 3 lines, 2 words
    assert_eq!(result.totals.lines, 6);
    assert_eq!(result.totals.words, 21);
    Ok(())
}

#[test]
fn test_rendered_report_lists_every_file() -> Result<()> {
    let temp_dir = setup_corpus()?;

    let result = report(temp_dir.path(), ".txt")?;
    let text = result.render();

    assert!(text.starts_with("Multi-file report\n\n"));
    for record in &result.records {
        assert!(text.contains(&format!("File: {}\n", record.path.display())));
    }
    assert!(text.ends_with(&format!(
        "Totals\n  Size: {}\n  Lines: 6\n  Words: 21\n",
        result.totals.size
    )));
    Ok(())
}

#[test]
fn test_report_without_matches() -> Result<()> {
    let temp_dir = setup_corpus()?;
    let result = report(temp_dir.path(), ".log");
    assert!(matches!(result, Err(Error::NoMatchingFiles { .. })));
    Ok(())
}

#[test]
fn test_report_on_a_file_root() -> Result<()> {
    let temp_dir = setup_corpus()?;
    let result = report(&temp_dir.path().join("chapter2.txt"), ".txt");
    assert!(matches!(result, Err(Error::NotADirectory { .. })));
    Ok(())
}

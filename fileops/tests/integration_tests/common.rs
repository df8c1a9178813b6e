// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// A small corpus: three `.txt` files across two levels plus noise.
pub fn setup_corpus() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "chapter1.txt",
        "It was the best of times, it was the worst of times.\nIn 1859 Dickens wrote it.\n",
    )?;
    create_test_file(temp_dir.path(), "chapter2.txt", "Call me Ishmael.")?;
    create_test_file(
        temp_dir.path(),
        "appendix/notes.txt",
        "(see above)\n\n123 456\n",
    )?;
    create_test_file(temp_dir.path(), "appendix/draft.md", "not scanned\n")?;
    create_test_file(temp_dir.path(), "README", "no extension\n")?;

    Ok(temp_dir)
}

// src/menu.rs
use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::analyzer::{analyze_directory, analyze_file};
use crate::core::lock::{lock, unlock};
use crate::core::text::parse_count;
use crate::core::text::slice::DEFAULT_COUNT;
use crate::utils::is_file;

/// Prompt-driven front end over the analysis operations.
///
/// A failed operation is reported and the loop keeps going; only `6` or the
/// end of input leaves it.
pub struct Menu<R, W> {
    config: Config,
    current_file: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        let current_file = config.default_file.clone();
        Self {
            config,
            current_file,
            input,
            output,
        }
    }

    #[must_use]
    pub fn current_file(&self) -> &Path {
        &self.current_file
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.ask("Choice: ")? else {
                writeln!(self.output, "\nGoodbye.")?;
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.choose_file()?,
                "2" => self.analyze_current_file()?,
                "3" => self.analyze_directory()?,
                "4" => self.lock_file()?,
                "5" => self.unlock_file()?,
                "6" => {
                    writeln!(self.output, "Goodbye.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== FileOps ===")?;
        writeln!(self.output, "Current file: {}", self.current_file.display())?;
        writeln!(self.output, "1) Choose the current file")?;
        writeln!(self.output, "2) Analyze a file")?;
        writeln!(self.output, "3) Analyze a directory")?;
        writeln!(self.output, "4) Lock a file")?;
        writeln!(self.output, "5) Unlock a file")?;
        writeln!(self.output, "6) Quit")?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Like [`Self::ask`], treating end of input as an empty answer.
    fn ask_or_empty(&mut self, prompt: &str) -> Result<String> {
        Ok(self.ask(prompt)?.unwrap_or_default())
    }

    fn show<T: Display, E: Display>(&mut self, result: std::result::Result<T, E>) -> Result<()> {
        match result {
            Ok(value) => writeln!(self.output, "{value}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn choose_file(&mut self) -> Result<()> {
        let answer = self.ask_or_empty("File path (empty = default): ")?;
        let path = if answer.is_empty() {
            self.config.default_file.clone()
        } else {
            PathBuf::from(answer)
        };
        if !is_file(&path) {
            writeln!(self.output, "Error: file not found.")?;
            return Ok(());
        }
        self.current_file = path;
        Ok(())
    }

    fn analyze_current_file(&mut self) -> Result<()> {
        let answer = self.ask_or_empty("File path (empty = current): ")?;
        let path = if answer.is_empty() {
            self.current_file.clone()
        } else {
            PathBuf::from(answer)
        };
        if !is_file(&path) {
            writeln!(self.output, "Error: file not found.")?;
            return Ok(());
        }
        let keyword = self.ask_or_empty("Keyword: ")?;
        let count = parse_count(
            &self.ask_or_empty(&format!("N for head/tail (default {DEFAULT_COUNT}): "))?,
            DEFAULT_COUNT,
        );
        let result = analyze_file(&path, &keyword, count, &self.config.out_dir);
        let written = result.is_ok();
        self.show(result)?;
        if written {
            writeln!(self.output, "Files written to {}", self.config.out_dir.display())?;
        }
        Ok(())
    }

    fn analyze_directory(&mut self) -> Result<()> {
        let answer = self.ask_or_empty("Directory (empty = base dir): ")?;
        let dir = if answer.is_empty() {
            self.config.base_dir.clone()
        } else {
            PathBuf::from(answer)
        };
        let result = analyze_directory(&dir, &self.config.default_ext, &self.config.out_dir);
        self.show(result)
    }

    /// Prompts for a path and a `yes` confirmation.
    fn confirmed_path(&mut self, prompt: &str) -> Result<Option<PathBuf>> {
        let path = self.ask_or_empty(prompt)?;
        if path.is_empty() {
            writeln!(self.output, "Empty path.")?;
            return Ok(None);
        }
        let confirm = self.ask_or_empty("Confirm (yes/no): ")?;
        if !confirm.eq_ignore_ascii_case("yes") {
            writeln!(self.output, "Cancelled.")?;
            return Ok(None);
        }
        Ok(Some(PathBuf::from(path)))
    }

    fn lock_file(&mut self) -> Result<()> {
        let Some(path) = self.confirmed_path("File to lock: ")? else {
            return Ok(());
        };
        let result = lock(&path, &self.config.out_dir)
            .map(|marker| format!("Lock created: {}", marker.display()));
        self.show(result)
    }

    fn unlock_file(&mut self) -> Result<()> {
        let Some(path) = self.confirmed_path("File to unlock: ")? else {
            return Ok(());
        };
        let result = unlock(&path, &self.config.out_dir)
            .map(|marker| format!("Lock removed: {}", marker.display()));
        self.show(result)
    }
}

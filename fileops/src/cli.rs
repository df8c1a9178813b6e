// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, Write as _};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::core::analyzer::{analyze_directory, analyze_file};
use crate::core::lock::{lock, unlock};
use crate::core::text::parse_count;
use crate::core::text::slice::DEFAULT_COUNT;
use crate::menu::Menu;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML config file; a missing or invalid file means built-in defaults
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides `out_dir` from the config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Extension to scan for, leading dot included (overrides `default_ext`)
    #[arg(short, long)]
    pub ext: Option<String>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Operation to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Analyze one file and write filtered/head/tail excerpts
    File {
        /// File to analyze (defaults to `default_file`)
        path: Option<PathBuf>,

        /// Keyword splitting lines into filtered.txt and filtered_not.txt
        #[arg(short, long, default_value = "")]
        keyword: String,

        /// Number of lines for head.txt and tail.txt
        #[arg(short = 'n', long, default_value = "5", allow_hyphen_values = true)]
        lines: String,
    },

    /// Write report.txt, index.txt and merged.txt for a directory
    Dir {
        /// Directory to scan (defaults to `base_dir`)
        dir: Option<PathBuf>,
    },

    /// Create a lock marker for a file
    Lock { path: PathBuf },

    /// Remove the lock marker of a file
    Unlock { path: PathBuf },

    /// Interactive menu
    Menu,
}

/// Loads the config file and applies command-line overrides.
#[must_use]
pub fn resolve_config(args: &Args) -> Config {
    let mut config = Config::load(&args.config);
    if let Some(out_dir) = &args.out_dir {
        config.out_dir.clone_from(out_dir);
    }
    if let Some(ext) = &args.ext {
        config.default_ext.clone_from(ext);
    }
    config
}

/// Sets up `env_logger` at `level`; `RUST_LOG` still takes precedence.
pub fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}

pub fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args);

    match args.command.unwrap_or(Command::Menu) {
        Command::File {
            path,
            keyword,
            lines,
        } => {
            let path = path.unwrap_or_else(|| config.default_file.clone());
            let count = parse_count(&lines, DEFAULT_COUNT);
            let analysis = analyze_file(&path, &keyword, count, &config.out_dir)
                .with_context(|| format!("Failed to analyze file: {}", path.display()))?;
            println!("{analysis}");
            println!("Files written to {}", config.out_dir.display());
        }
        Command::Dir { dir } => {
            let dir = dir.unwrap_or_else(|| config.base_dir.clone());
            let outputs = analyze_directory(&dir, &config.default_ext, &config.out_dir)
                .with_context(|| format!("Failed to analyze directory: {}", dir.display()))?;
            println!("{outputs}");
        }
        Command::Lock { path } => {
            let marker = lock(&path, &config.out_dir)
                .with_context(|| format!("Failed to lock: {}", path.display()))?;
            println!("Lock created: {}", marker.display());
        }
        Command::Unlock { path } => {
            let marker = unlock(&path, &config.out_dir)
                .with_context(|| format!("Failed to unlock: {}", path.display()))?;
            println!("Lock removed: {}", marker.display());
        }
        Command::Menu => {
            let stdin = io::stdin();
            Menu::new(config, stdin.lock(), io::stdout()).run()?;
        }
    }

    Ok(())
}

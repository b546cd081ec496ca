//! CLI argument definitions
//!
//! Command-line options and configuration merging logic.

use std::num::IntErrorKind;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::{DEFAULT_BASE_URL, DEFAULT_INPUT_DIR, DEFAULT_SESSION_FILE, DEFAULT_YEAR};

#[derive(Debug, Parser)]
#[command(name = "aoc-input")]
#[command(about = "Download an Advent of Code puzzle input", version)]
pub(crate) struct Cli {
    /// Day to download, between 1 and 25 (inclusive)
    #[arg(allow_negative_numbers = true, value_parser = integer_literal)]
    pub(crate) number: String,

    /// File holding the session cookie on its first line [default: session.id]
    #[arg(long, value_name = "PATH")]
    pub(crate) session_file: Option<PathBuf>,

    /// Directory the input is written to [default: ./input/]
    #[arg(short, long, value_name = "DIR")]
    pub(crate) input_dir: Option<PathBuf>,

    /// Event year [default: 2024]
    #[arg(short, long)]
    pub(crate) year: Option<u16>,

    /// Print request and file details to stderr
    #[arg(long)]
    pub(crate) debug: bool,

    #[arg(skip)]
    pub(crate) base_url: Option<String>,
}

/// Accept any integer, including ones too large for `i64`, so the range
/// check reports them instead of the argument parser
fn integer_literal(s: &str) -> Result<String, String> {
    match s.parse::<i64>() {
        Ok(_) => Ok(s.to_string()),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(s.to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.session_file.is_none() {
            self.session_file = config.session_file;
        }
        if self.input_dir.is_none() {
            self.input_dir = config.input_dir;
        }
        if self.year.is_none() {
            self.year = config.year;
        }
        if self.base_url.is_none() {
            self.base_url = config.base_url;
        }
        self
    }

    pub(crate) fn session_file(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE))
    }

    pub(crate) fn input_dir(&self) -> PathBuf {
        self.input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
    }

    pub(crate) fn year(&self) -> u16 {
        self.year.unwrap_or(DEFAULT_YEAR)
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

//! Console reporting for CLI commands.
//!
//! Every command writes through a [`Reporter`], so `--format json` yields
//! machine-readable documents for listings and status lines alike.

use serde::Serialize;
use serde_json::{Map, Value, json};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use reliefhub_core::error::AppError;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Kind of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    /// Progress chatter; dropped in JSON mode.
    Note,
    Warning,
    Failure,
}

impl Status {
    fn marker(self) -> &'static str {
        match self {
            Self::Done => "✓",
            Self::Note => "·",
            Self::Warning => "⚠",
            Self::Failure => "✗",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Done => "ok",
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Failure => "error",
        }
    }
}

/// Writes command results in the format chosen on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints `rows` as a table with a count footer, or as
    /// `{"<noun>": [...], "count": n}`.
    pub fn rows<T: Serialize + Tabled>(&self, noun: &str, rows: &[T]) -> Result<(), AppError> {
        println!("{}", self.render_rows(noun, rows)?);
        Ok(())
    }

    pub fn done(&self, message: &str) {
        self.status(Status::Done, message);
    }

    pub fn note(&self, message: &str) {
        self.status(Status::Note, message);
    }

    pub fn warning(&self, message: &str) {
        self.status(Status::Warning, message);
    }

    /// Failures go to stderr.
    pub fn failure(&self, message: &str) {
        self.status(Status::Failure, message);
    }

    fn status(&self, status: Status, message: &str) {
        let Some(line) = self.render_status(status, message) else {
            return;
        };
        if status == Status::Failure {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    fn render_rows<T: Serialize + Tabled>(
        &self,
        noun: &str,
        rows: &[T],
    ) -> Result<String, AppError> {
        match self.format {
            OutputFormat::Table if rows.is_empty() => Ok(format!("No {noun} found.")),
            OutputFormat::Table => {
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                Ok(format!("{table}\n{} {noun}", rows.len()))
            }
            OutputFormat::Json => {
                let mut doc = Map::new();
                doc.insert(noun.to_string(), serde_json::to_value(rows)?);
                doc.insert("count".to_string(), Value::from(rows.len()));
                Ok(serde_json::to_string_pretty(&doc)?)
            }
        }
    }

    fn render_status(&self, status: Status, message: &str) -> Option<String> {
        match self.format {
            OutputFormat::Table => Some(format!("{} {message}", status.marker())),
            OutputFormat::Json if status == Status::Note => None,
            OutputFormat::Json => {
                Some(json!({ "status": status.label(), "message": message }).to_string())
            }
        }
    }
}

//! Evaluates a spreadsheet of bill forms in one pass.
//!
//! Each data row is an independent submission keyed by the form's field names in the header row.
//! Rows that fail validation are reported alongside the ones that split; only unreadable or
//! malformed CSV aborts the import.

mod parser;

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::calculator::split;
use super::format::SplitView;
use super::validation::{validate, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read bill spreadsheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid bill spreadsheet: {0}")]
    Csv(#[from] csv::Error),
}

/// What happened to a single row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Split(SplitView),
    Rejected { errors: ValidationErrors },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn split_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, BatchOutcome::Split(_)))
            .count()
    }

    pub fn rejected_count(&self) -> usize {
        self.entries.len() - self.split_count()
    }
}

pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<BatchReport, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<BatchReport, BatchImportError> {
        let entries: Vec<BatchEntry> = parser::parse_rows(reader)?
            .into_iter()
            .map(|row| {
                let outcome = match validate(&row.form) {
                    Ok(input) => BatchOutcome::Split(SplitView::from(&split(&input))),
                    Err(errors) => BatchOutcome::Rejected { errors },
                };
                BatchEntry {
                    row: row.row,
                    label: row.label,
                    outcome,
                }
            })
            .collect();

        let report = BatchReport { entries };
        debug!(
            rows = report.entries.len(),
            rejected = report.rejected_count(),
            "bill spreadsheet evaluated"
        );
        Ok(report)
    }
}

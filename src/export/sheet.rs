//! Tabular sheets and per-step outcomes.

use super::record::PlayerRecord;

/// A named sheet of player rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub records: Vec<PlayerRecord>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, records: Vec<PlayerRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

/// Result of an optional pipeline step.
///
/// Steps whose data is nice-to-have report failure as `Skipped` with a
/// user-facing warning instead of an error, so the export carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    Success(T),
    Skipped(String),
}

impl<T> StepOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Success(_))
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            StepOutcome::Success(_) => None,
            StepOutcome::Skipped(warning) => Some(warning),
        }
    }
}

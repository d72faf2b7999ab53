use serde::Serialize;
use std::path::PathBuf;

/// A snapshot of tracked mutable files, keyed by a sortable
/// second-resolution timestamp. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Backup {
    pub timestamp: String,
    pub files: Vec<PathBuf>,
}

/// Outcome of a single validation check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn pass(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            detail: detail.into(),
        }
    }

    pub fn fail(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Aggregated result of a validation run. Derived from current on-disk
/// state; persisted only when a report is explicitly requested.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub checks: Vec<CheckResult>,
    pub score: usize,
    pub max_score: usize,
}

impl ValidationReport {
    pub fn new(checks: Vec<CheckResult>) -> Self {
        let score = checks.iter().filter(|check| check.passed).count();
        let max_score = checks.len();
        Self {
            checks,
            score,
            max_score,
        }
    }

    /// Overall pass requires every top-level check to pass.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }
}

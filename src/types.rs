//! Core types for lint results.
//!
//! - `Finding` - one reported issue (position + message)
//! - `Fingerprint` - the identity used to compare findings across file versions
//! - `LintResult` - findings accumulated by one lint pass
//! - `LintReport` - serializable aggregate over a whole lint call

use serde::{Deserialize, Serialize};

/// One reported issue: a position and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Line number (1-based)
    pub line: usize,

    /// Column number (1-based)
    pub column: usize,

    /// Human-readable message
    pub message: String,

    /// File the finding belongs to, when one is known
    pub file_path: Option<String>,
}

impl Finding {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            file_path: None,
        }
    }

    /// Identity for deduplication and diffing. The file path is excluded
    /// so the same error compares equal across two files with different
    /// names.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            line: self.line,
            column: self.column,
            message: self.message.clone(),
        }
    }
}

/// The (line, column, message) tuple identifying a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Findings from one lint pass.
///
/// Success is derived, not stored: a result with no errors is successful
/// by construction, so `success == errors.is_empty()` cannot be violated.
/// The first-error accessors mirror `errors.first()` the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintResult {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pass found no errors
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, finding: Finding) {
        self.errors.push(finding);
    }

    pub fn add_warning(&mut self, finding: Finding) {
        self.warnings.push(finding);
    }

    /// The first error found, mirrored by the accessors below
    pub fn first_error(&self) -> Option<&Finding> {
        self.errors.first()
    }

    pub fn line(&self) -> Option<usize> {
        self.first_error().map(|f| f.line)
    }

    pub fn column(&self) -> Option<usize> {
        self.first_error().map(|f| f.column)
    }

    pub fn message(&self) -> Option<&str> {
        self.first_error().map(|f| f.message.as_str())
    }

    pub fn file_path(&self) -> Option<&str> {
        self.first_error().and_then(|f| f.file_path.as_deref())
    }

    /// Stamp every finding with the linted file's path, overwriting any
    /// value recorded during analysis.
    pub fn set_file_path(&mut self, path: &str) {
        for finding in self.errors.iter_mut().chain(self.warnings.iter_mut()) {
            finding.file_path = Some(path.to_string());
        }
    }
}

/// Serializable aggregate over a whole lint call, for report output.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// Overall success (no errors in any result)
    pub success: bool,

    /// Total error count across all results
    pub error_count: usize,

    /// Total warning count across all results
    pub warning_count: usize,

    /// The per-pass results, in the order they were produced
    pub results: Vec<LintResult>,
}

impl LintReport {
    pub fn from_results(results: Vec<LintResult>) -> Self {
        let error_count = results.iter().map(|r| r.errors.len()).sum();
        let warning_count = results.iter().map(|r| r.warnings.len()).sum();
        Self {
            success: error_count == 0,
            error_count,
            warning_count,
            results,
        }
    }
}

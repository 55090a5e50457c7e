//! Error types and exit codes for lintfall.

use std::process::ExitCode;

use thiserror::Error;

/// CLI-level faults.
///
/// Lint calls themselves never fail: unreadable files and broken tools
/// degrade to findings inside the result set, so the worst case of any
/// lint is an empty or conservative result, never a propagated error.
#[derive(Error, Debug)]
pub enum LintfallError {
    #[error("Unknown language: {name}")]
    UnknownLanguage { name: String },

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintfallError {
    /// Exit codes, `main`-facing:
    /// - 0: success (no findings)
    /// - 1: findings reported
    /// - 2: unknown language name
    /// - 3: report encoding / IO fault
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::UnknownLanguage { .. } => ExitCode::from(2),
            Self::Encode(_) => ExitCode::from(3),
            Self::Io(_) => ExitCode::from(3),
        }
    }
}

/// Result type alias for lintfall operations
pub type Result<T> = std::result::Result<T, LintfallError>;

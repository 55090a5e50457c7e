//! lintfall: pluggable lint engine with external tools and a heuristic
//! fallback.
//!
//! Given a source file or an in-memory code string, lintfall resolves
//! the language from the file extension, runs that language's external
//! check command when it is installed, and otherwise falls back to a
//! built-in heuristic analyzer (a bracket/string state machine plus
//! per-language pattern checks). It can also lint differentially:
//! compare two versions of a file and report only the errors the edit
//! introduced.
//!
//! # Example
//!
//! ```ignore
//! use lintfall::{Lang, Linter};
//!
//! let linter = Linter::new();
//! let results = linter.lint("if x = 1 then return end", Some(Lang::Lua));
//! for result in &results {
//!     for finding in &result.errors {
//!         println!("{}:{}: {}", finding.line, finding.column, finding.message);
//!     }
//! }
//! ```

pub mod analyzer;
pub mod cli;
pub mod diff;
pub mod error;
pub mod linter;
pub mod probe;
pub mod profile;
pub mod runner;
pub mod types;

// Re-export commonly used types
pub use analyzer::analyze;
pub use diff::filter_new_errors;
pub use error::{LintfallError, Result};
pub use linter::{LintInput, Linter};
pub use probe::ToolProbe;
pub use profile::{profile_for, CommentStyle, Lang, LanguageProfile};
pub use runner::{run_check_tool, ToolOutcome};
pub use types::{Finding, Fingerprint, LintReport, LintResult};

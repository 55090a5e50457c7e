//! Lint orchestration: input resolution, dispatch, path stamping.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::analyze;
use crate::diff::filter_new_errors;
use crate::probe::ToolProbe;
use crate::profile::Lang;
use crate::runner::{run_check_tool, ToolOutcome};
use crate::types::{Finding, LintResult};

/// What the caller handed us: a file on disk or inline source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintInput {
    Path(PathBuf),
    Source(String),
}

impl LintInput {
    /// Resolve the dual-purpose string argument once: an existing path
    /// with no embedded newline is a file, everything else is code.
    pub fn detect(raw: &str) -> Self {
        if !raw.contains('\n') && Path::new(raw).exists() {
            Self::Path(PathBuf::from(raw))
        } else {
            Self::Source(raw.to_string())
        }
    }
}

/// The lint engine: the language registry plus one tool-availability
/// probe shared by every call.
///
/// Calls are pure request/response; there is no per-call state beyond
/// the probe's memoized PATH lookups, so a `Linter` is safe to share
/// across concurrent callers.
#[derive(Debug, Default)]
pub struct Linter {
    probe: ToolProbe,
}

impl Linter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a linter around a pre-seeded probe.
    pub fn with_probe(probe: ToolProbe) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &ToolProbe {
        &self.probe
    }

    /// Lint a file path or an inline code string.
    ///
    /// An unsupported language yields an empty result set: skipping a
    /// file is not a verdict that it is clean.
    pub fn lint(&self, input: &str, language: Option<Lang>) -> Vec<LintResult> {
        self.lint_input(LintInput::detect(input), language)
    }

    /// Typed entry point; `lint` resolves the ambiguous string form to
    /// this.
    pub fn lint_input(&self, input: LintInput, language: Option<Lang>) -> Vec<LintResult> {
        let (code, file_path, language) = match input {
            LintInput::Path(path) => {
                let code = match fs::read_to_string(&path) {
                    Ok(code) => code,
                    Err(e) => {
                        let mut result = LintResult::new();
                        let mut finding = Finding::new(1, 1, format!("Error reading file: {e}"));
                        finding.file_path = Some(path.display().to_string());
                        result.add_error(finding);
                        return vec![result];
                    }
                };
                let language = language.or_else(|| Lang::from_path(&path));
                (code, Some(path), language)
            }
            // Inline code with no hint defaults to the native-grammar
            // language.
            LintInput::Source(code) => (code, None, language.or(Some(Lang::Rust))),
        };

        let Some(language) = language else {
            return Vec::new();
        };
        let profile = language.profile();

        tracing::debug!(language = language.name(), "linting");
        let mut results = match run_check_tool(&code, &profile, &self.probe) {
            // The tool ran; its verdict is final.
            ToolOutcome::Ran(results) => results,
            // The tool could not run; the fallback analyzer is the
            // authoritative check.
            ToolOutcome::Skipped => analyze(&code, language),
        };

        results.retain(|r| !r.success() || !r.warnings.is_empty());

        if let Some(path) = file_path {
            let path = path.display().to_string();
            for result in &mut results {
                result.set_file_path(&path);
            }
        }

        results
    }

    /// Lint two versions of a file and keep only the errors introduced
    /// in `updated`. Both versions are checked as the language resolved
    /// from the updated path's extension.
    pub fn lint_file_diff(&self, original: &Path, updated: &Path) -> Vec<LintResult> {
        let Some(language) = Lang::from_path(updated) else {
            return Vec::new();
        };

        // A no-error updated file can never have new errors; the
        // original's fingerprints are never computed in that case.
        let updated_results =
            self.lint_input(LintInput::Path(updated.to_path_buf()), Some(language));
        if updated_results.iter().all(LintResult::success) {
            return Vec::new();
        }

        let original_results =
            self.lint_input(LintInput::Path(original.to_path_buf()), Some(language));
        filter_new_errors(&original_results, updated_results)
    }
}

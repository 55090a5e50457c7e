//! External-tool invocation: temp file, subprocess, output parsing.

use std::fs;
use std::path::Path;
use std::process::Command;

use regex::Regex;

use crate::probe::ToolProbe;
use crate::profile::LanguageProfile;
use crate::types::{Finding, LintResult};

/// What became of the external-tool attempt.
#[derive(Debug)]
pub enum ToolOutcome {
    /// The tool ran; its verdict is final. An empty vec is a clean exit.
    Ran(Vec<LintResult>),

    /// No command configured, or the binary is not installed. The
    /// fallback analyzer is authoritative.
    Skipped,
}

/// Check `code` with the profile's external command.
///
/// The code is written to a uniquely named temp file carrying the
/// language's canonical extension; the file is removed on every exit
/// path. A nonzero exit is the normal "lint found problems" signal, not
/// a malfunction. Spawn and temp-file failures degrade to a single
/// descriptive finding rather than propagating.
pub fn run_check_tool(code: &str, profile: &LanguageProfile, probe: &ToolProbe) -> ToolOutcome {
    let Some(command) = profile.check_command else {
        return ToolOutcome::Skipped;
    };
    if !probe.is_available(command[0]) {
        tracing::debug!(tool = command[0], "check tool not on PATH, falling back");
        return ToolOutcome::Skipped;
    }

    let temp = match tempfile::Builder::new()
        .prefix("lintfall-")
        .suffix(&format!(".{}", profile.language.extension()))
        .tempfile()
    {
        Ok(temp) => temp,
        Err(e) => {
            return ToolOutcome::Ran(vec![failure_result(format!(
                "Failed to create temp file: {e}"
            ))]);
        }
    };
    if let Err(e) = fs::write(temp.path(), code) {
        return ToolOutcome::Ran(vec![failure_result(format!("Failed to write temp file: {e}"))]);
    }

    let outcome = invoke(command, temp.path(), profile.output_pattern);
    if let Err(e) = temp.close() {
        tracing::warn!("failed to remove temp file: {e}");
    }
    outcome
}

fn invoke(command: &[&str], path: &Path, pattern: &Regex) -> ToolOutcome {
    let output = match Command::new(command[0]).args(&command[1..]).arg(path).output() {
        Ok(output) => output,
        Err(e) => {
            return ToolOutcome::Ran(vec![failure_result(format!(
                "Failed to run {}: {e}",
                command[0]
            ))]);
        }
    };

    if output.status.success() {
        return ToolOutcome::Ran(Vec::new());
    }

    // Syntax checkers report on stderr; stdout is the fallback.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let diagnostics = if stderr.trim().is_empty() {
        &stdout
    } else {
        &stderr
    };

    let mut result = parse_diagnostics(diagnostics, pattern);
    if result.success() {
        // Nonzero exit with nothing parseable still has to surface.
        let message = match output.status.code() {
            Some(code) => format!("{} exited with status {code} and no diagnostics", command[0]),
            None => format!("{} was terminated by a signal", command[0]),
        };
        result.add_error(Finding::new(1, 1, message));
    }

    ToolOutcome::Ran(vec![result])
}

/// Match each diagnostic line against the profile's output pattern.
/// Lines the pattern does not recognize are never dropped; they degrade
/// to an opaque error at the file head.
fn parse_diagnostics(diagnostics: &str, pattern: &Regex) -> LintResult {
    let mut result = LintResult::new();
    for line in diagnostics.lines().filter(|l| !l.trim().is_empty()) {
        match pattern.captures(line) {
            Some(caps) => {
                let line_no = caps.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(1);
                let column = caps.get(3).and_then(|m| m.as_str().parse().ok()).unwrap_or(1);
                let message = caps.get(4).map(|m| m.as_str()).unwrap_or(line);
                result.add_error(Finding::new(line_no, column, message));
            }
            None => result.add_error(Finding::new(1, 1, line)),
        }
    }
    result
}

fn failure_result(message: String) -> LintResult {
    let mut result = LintResult::new();
    result.add_error(Finding::new(1, 1, message));
    result
}

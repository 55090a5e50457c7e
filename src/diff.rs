//! Differential filter: keep only the errors absent from a baseline run.

use std::collections::HashSet;

use crate::types::{Finding, Fingerprint, LintResult};

/// Subtract the original run's error fingerprints from the updated
/// run's results.
///
/// Kept findings stay grouped per originating result (file paths
/// preserved); results left with no errors are dropped. This is set
/// subtraction, not sequence alignment: an error that moved lines
/// because of an unrelated edit counts as new.
pub fn filter_new_errors(original: &[LintResult], updated: Vec<LintResult>) -> Vec<LintResult> {
    let known: HashSet<Fingerprint> = original
        .iter()
        .flat_map(|r| r.errors.iter().map(Finding::fingerprint))
        .collect();

    updated
        .into_iter()
        .filter_map(|result| {
            let fresh: Vec<Finding> = result
                .errors
                .into_iter()
                .filter(|f| !known.contains(&f.fingerprint()))
                .collect();
            if fresh.is_empty() {
                None
            } else {
                Some(LintResult {
                    errors: fresh,
                    warnings: Vec::new(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(findings: &[(usize, usize, &str)]) -> LintResult {
        let mut result = LintResult::new();
        for &(line, column, message) in findings {
            result.add_error(Finding::new(line, column, message));
        }
        result
    }

    #[test]
    fn identical_runs_subtract_to_nothing() {
        let baseline = vec![result_with(&[(3, 1, "Unclosed bracket: '('")])];
        let updated = vec![result_with(&[(3, 1, "Unclosed bracket: '('")])];
        assert!(filter_new_errors(&baseline, updated).is_empty());
    }

    #[test]
    fn only_new_fingerprints_survive() {
        let baseline = vec![result_with(&[(3, 1, "Unclosed bracket: '('")])];
        let updated = vec![result_with(&[
            (3, 1, "Unclosed bracket: '('"),
            (5, 2, "Mismatched bracket: ')'"),
        ])];

        let new = filter_new_errors(&baseline, updated);
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].errors.len(), 1);
        assert_eq!(new[0].errors[0].line, 5);
        assert_eq!(new[0].errors[0].column, 2);
    }

    #[test]
    fn fingerprints_compare_across_file_paths() {
        let mut old = result_with(&[(2, 4, "boom")]);
        old.set_file_path("before.lua");
        let mut new = result_with(&[(2, 4, "boom")]);
        new.set_file_path("after.lua");

        assert!(filter_new_errors(&[old], vec![new]).is_empty());
    }

    #[test]
    fn empty_groups_are_discarded_but_grouping_is_kept() {
        let baseline = vec![result_with(&[(1, 1, "a")])];
        let updated = vec![
            result_with(&[(1, 1, "a")]),
            result_with(&[(9, 9, "b"), (10, 1, "c")]),
        ];

        let new = filter_new_errors(&baseline, updated);
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].errors.len(), 2);
    }

    #[test]
    fn empty_baseline_keeps_everything() {
        let updated = vec![result_with(&[(1, 1, "a")])];
        let new = filter_new_errors(&[], updated);
        assert_eq!(new.len(), 1);
    }
}

//! Fallback heuristic analyzer.
//!
//! Used when no external tool ran. Rust gets a full parse with the
//! in-process grammar; every other language gets a tolerant structural
//! scan: a bracket/string state machine plus per-language pattern
//! checks. The scan is intentionally approximate, a best-effort safety
//! net rather than a grammar.

use crate::profile::{CommentStyle, Lang, LanguageProfile};
use crate::types::{Finding, LintResult};

/// Keywords that legitimately end a C-family line without punctuation
const C_FAMILY_KEYWORDS: [&str; 9] = [
    "if", "else", "for", "while", "switch", "case", "func", "class", "struct",
];

/// Heuristic syntax check for `code`.
///
/// Findings accumulate into a single `LintResult`; a clean scan returns
/// an empty vec.
pub fn analyze(code: &str, lang: Lang) -> Vec<LintResult> {
    match lang {
        Lang::Rust => parse_native(code),
        _ => scan_structure(code, &lang.profile()),
    }
}

/// Full parse with the in-process grammar. A syntax failure emits
/// exactly one finding at the first bad node, and no heuristic checks
/// run for the native language.
fn parse_native(code: &str) -> Vec<LintResult> {
    let mut parser = tree_sitter::Parser::new();
    let language: tree_sitter::Language = tree_sitter_rust::LANGUAGE.into();
    if parser.set_language(&language).is_err() {
        // Grammar/runtime version skew. Analyzer faults never abort a
        // lint call; the scan simply reports nothing.
        tracing::warn!("rust grammar failed to load, skipping native parse");
        return Vec::new();
    }
    let Some(tree) = parser.parse(code, None) else {
        return Vec::new();
    };
    let root = tree.root_node();
    if !root.has_error() {
        return Vec::new();
    }

    let node = first_error_node(root).unwrap_or(root);
    let position = node.start_position();
    let message = if node.is_missing() {
        format!("Syntax error: missing {}", node.kind())
    } else {
        "Syntax error: unexpected token".to_string()
    };

    let mut result = LintResult::new();
    result.add_error(Finding::new(position.row + 1, position.column + 1, message));
    vec![result]
}

/// Depth-first search for the first ERROR or missing node.
fn first_error_node(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    Some(node)
}

/// Left-to-right scan: bracket stack and string flag over
/// comment-stripped lines, then the per-language line heuristics.
fn scan_structure(code: &str, profile: &LanguageProfile) -> Vec<LintResult> {
    let mut result = LintResult::new();
    let mut stack: Vec<(char, usize, usize)> = Vec::new();

    for (idx, raw) in code.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_line_comment(raw, profile.comment_style);

        let mut in_string = false;
        let mut quote = '"';
        for (col_idx, ch) in line.chars().enumerate() {
            let col = col_idx + 1;
            if ch == '"' || ch == '\'' {
                if !in_string {
                    in_string = true;
                    quote = ch;
                } else if ch == quote {
                    in_string = false;
                }
                continue;
            }
            if in_string {
                continue;
            }
            match ch {
                '(' | '[' | '{' => stack.push((ch, line_no, col)),
                ')' | ']' | '}' => match stack.last() {
                    Some(&(open, _, _)) if closing(open) == ch => {
                        stack.pop();
                    }
                    // A mismatched closer is reported but never pops;
                    // the scan continues with the stack unchanged.
                    _ => result.add_error(Finding::new(
                        line_no,
                        col,
                        format!("Mismatched bracket: '{ch}'"),
                    )),
                },
                _ => {}
            }
        }
    }

    for (bracket, line_no, col) in stack {
        result.add_error(Finding::new(
            line_no,
            col,
            format!("Unclosed bracket: '{bracket}'"),
        ));
    }

    match profile.language {
        Lang::Swift | Lang::Cpp | Lang::C => check_statement_terminators(code, profile, &mut result),
        Lang::Lua | Lang::Luau => check_condition_assignments(code, profile, &mut result),
        _ => {}
    }

    if result.success() && result.warnings.is_empty() {
        Vec::new()
    } else {
        vec![result]
    }
}

fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Drop everything from the line-comment marker on. Block comment
/// styles have no line marker and pass through untouched.
fn strip_line_comment(line: &str, style: CommentStyle) -> &str {
    match style.line_marker().and_then(|marker| line.find(marker)) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Replace string-literal contents with spaces, length-preserving, so
/// the line heuristics cannot trigger on quoted text.
fn mask_string_literals(line: &str) -> String {
    let mut masked = String::with_capacity(line.len());
    let mut in_string = false;
    let mut quote = '"';
    for ch in line.chars() {
        if ch == '"' || ch == '\'' {
            if !in_string {
                in_string = true;
                quote = ch;
            } else if ch == quote {
                in_string = false;
            }
            masked.push(ch);
        } else if in_string {
            masked.push(' ');
        } else {
            masked.push(ch);
        }
    }
    masked
}

/// C-family check: a code line that ends without `;`, `{`, `}` or `:`
/// is flagged unless it is a preprocessor directive or carries a
/// keyword that legitimately ends bare.
fn check_statement_terminators(code: &str, profile: &LanguageProfile, result: &mut LintResult) {
    for (idx, raw) in code.lines().enumerate() {
        let masked = mask_string_literals(strip_line_comment(raw, profile.comment_style));
        let line = masked.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.ends_with(';') || line.ends_with('{') || line.ends_with('}') || line.ends_with(':')
        {
            continue;
        }
        if C_FAMILY_KEYWORDS.iter().any(|kw| line.contains(kw)) {
            continue;
        }
        result.add_error(Finding::new(
            idx + 1,
            line.chars().count().max(1),
            "Missing semicolon at end of line",
        ));
    }
}

/// Lua-family check: `if` together with a bare `=` (no `==`, no `~=`)
/// usually means assignment where a comparison was intended.
fn check_condition_assignments(code: &str, profile: &LanguageProfile, result: &mut LintResult) {
    for (idx, raw) in code.lines().enumerate() {
        let masked = mask_string_literals(strip_line_comment(raw, profile.comment_style));
        if !masked.contains("if") || !masked.contains('=') {
            continue;
        }
        if masked.contains("==") || masked.contains("~=") {
            continue;
        }
        let column = masked.chars().position(|c| c == '=').map_or(1, |i| i + 1);
        result.add_error(Finding::new(
            idx + 1,
            column,
            "Possible use of assignment (=) instead of equality (==) in condition",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sole_result(results: Vec<LintResult>) -> LintResult {
        assert_eq!(results.len(), 1, "expected exactly one result");
        results.into_iter().next().unwrap()
    }

    #[test]
    fn well_formed_rust_parses_clean() {
        let code = "fn main() {\n    println!(\"hello\");\n}\n";
        assert!(analyze(code, Lang::Rust).is_empty());
    }

    #[test]
    fn broken_rust_yields_exactly_one_finding() {
        let result = sole_result(analyze("fn main( {\n", Lang::Rust));
        assert_eq!(result.errors.len(), 1);
        assert!(result.message().unwrap().starts_with("Syntax error"));
        assert!(result.line().unwrap() >= 1);
    }

    #[test]
    fn unmatched_open_reports_its_own_position() {
        let result = sole_result(analyze("local t = {1, 2\n", Lang::Lua));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line, 1);
        assert_eq!(result.errors[0].column, 11);
        assert_eq!(result.errors[0].message, "Unclosed bracket: '{'");
    }

    #[test]
    fn closer_before_opener_is_one_mismatch_plus_one_unclosed() {
        let result = sole_result(analyze(")(", Lang::Lua));
        let mismatched: Vec<_> = result
            .errors
            .iter()
            .filter(|f| f.message.starts_with("Mismatched"))
            .collect();
        let unclosed: Vec<_> = result
            .errors
            .iter()
            .filter(|f| f.message.starts_with("Unclosed"))
            .collect();
        assert_eq!(mismatched.len(), 1);
        assert_eq!((mismatched[0].line, mismatched[0].column), (1, 1));
        assert_eq!(unclosed.len(), 1);
        assert_eq!((unclosed[0].line, unclosed[0].column), (1, 2));
    }

    #[test]
    fn wrong_closer_keeps_the_stack() {
        // The `]` never pops the `(`, so the open paren also reports.
        let result = sole_result(analyze("(]", Lang::Lua));
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].message, "Mismatched bracket: ']'");
        assert_eq!(result.errors[1].message, "Unclosed bracket: '('");
    }

    #[test]
    fn brackets_inside_string_literals_are_ignored() {
        assert!(analyze("local s = \"(\"\n", Lang::Lua).is_empty());
        assert!(analyze("s = ')('\n", Lang::Python).is_empty());
    }

    #[test]
    fn brackets_inside_line_comments_are_ignored() {
        assert!(analyze("-- (((\n", Lang::Lua).is_empty());
        assert!(analyze("x = 1  # )\n", Lang::Python).is_empty());
        assert!(analyze("x = 1; // )\n", Lang::Cpp).is_empty());
    }

    #[test]
    fn mixed_quotes_do_not_end_a_string() {
        assert!(analyze("s = \"it's (fine)\"\n", Lang::Python).is_empty());
    }

    #[test]
    fn nested_brackets_balance() {
        assert!(analyze("t = {a = {1, (2)}, b = [3]}\n", Lang::Python).is_empty());
    }

    #[test]
    fn missing_terminator_is_flagged_for_c_family() {
        let result = sole_result(analyze("int x = 1\n", Lang::Cpp));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line, 1);
        assert_eq!(result.errors[0].message, "Missing semicolon at end of line");
    }

    #[test]
    fn control_flow_lines_end_bare() {
        let code = "#include <stdio.h>\nwhile (x > 0) {\n    x--;\n}\n";
        assert!(analyze(code, Lang::C).is_empty());
    }

    #[test]
    fn terminator_and_bracket_findings_are_separate() {
        // Same input trips the bracket scan and the terminator check.
        let result = sole_result(analyze("int x = f(1\n", Lang::C));
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn lua_assignment_in_condition_is_flagged() {
        let result = sole_result(analyze("if x = 1 then\n", Lang::Lua));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line, 1);
        assert_eq!(result.errors[0].column, 6);
        assert!(result.errors[0].message.contains("assignment"));
    }

    #[test]
    fn lua_equality_operators_are_not_flagged() {
        assert!(analyze("if x == 1 then\nend\n", Lang::Lua).is_empty());
        assert!(analyze("if x ~= 1 then\nend\n", Lang::Luau).is_empty());
    }

    #[test]
    fn lua_check_ignores_quoted_text() {
        assert!(analyze("print(\"if x = 1\")\n", Lang::Lua).is_empty());
    }

    #[test]
    fn block_comment_styles_are_not_stripped() {
        // CSS has no line marker, so the bracket scan sees everything.
        let result = sole_result(analyze("a { color: red;\n", Lang::Css));
        assert_eq!(result.errors[0].message, "Unclosed bracket: '{'");
    }
}

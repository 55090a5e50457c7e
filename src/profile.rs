//! Language profiles: extension mapping, check commands, output patterns.
//!
//! The per-language table is the sole integration point for adding a
//! language. It is read-only at runtime: adding an entry here (extension,
//! check command, output pattern, comment style) is all a new language
//! needs.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tool output shaped like `file:line:col: message`
static COLON_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+):(\d+):(\d+): (.+)$").expect("colon output pattern"));

/// Tool output shaped like `file: line N, col M, message`
static COMPACT_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+): line (\d+), col (\d+), (.+)$").expect("compact output pattern"));

const PYTHON_CHECK: &[&str] = &["python", "-m", "py_compile"];
const NODE_CHECK: &[&str] = &["node", "--check"];
const TSC_CHECK: &[&str] = &["tsc", "--noEmit"];
const SWIFT_CHECK: &[&str] = &["swift", "-syntax-only"];
const CLANGXX_CHECK: &[&str] = &["clang++", "-fsyntax-only", "-std=c++17"];
const CLANG_CHECK: &[&str] = &["clang", "-fsyntax-only"];
const LUAC_CHECK: &[&str] = &["luac", "-p"];
const LUAU_CHECK: &[&str] = &["luau", "--parse"];

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Rust,
    Python,
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Swift,
    Cpp,
    C,
    Lua,
    Luau,
    Html,
    Css,
}

impl Lang {
    /// Detect language from a file extension (case-insensitive, no
    /// leading dot). Unknown extensions are not an error: `None` means
    /// "skip linting entirely".
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "rs" => Some(Self::Rust),
            "py" | "pyi" => Some(Self::Python),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            "swift" => Some(Self::Swift),
            "cpp" | "cc" | "cxx" => Some(Self::Cpp),
            "c" | "h" => Some(Self::C),
            "lua" => Some(Self::Lua),
            "luau" => Some(Self::Luau),
            "html" | "htm" => Some(Self::Html),
            "css" => Some(Self::Css),
            _ => None,
        }
    }

    /// Detect language from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical extension, used as the temp-file suffix so external
    /// tools that dispatch on suffix behave correctly
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Rust => "rs",
            Self::Python => "py",
            Self::JavaScript => "js",
            Self::Jsx => "jsx",
            Self::TypeScript => "ts",
            Self::Tsx => "tsx",
            Self::Swift => "swift",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Lua => "lua",
            Self::Luau => "luau",
            Self::Html => "html",
            Self::Css => "css",
        }
    }

    /// Canonical language name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Swift => "swift",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Lua => "lua",
            Self::Luau => "luau",
            Self::Html => "html",
            Self::Css => "css",
        }
    }

    /// All supported languages, in registry order
    pub fn all() -> &'static [Lang] {
        &[
            Self::Rust,
            Self::Python,
            Self::JavaScript,
            Self::Jsx,
            Self::TypeScript,
            Self::Tsx,
            Self::Swift,
            Self::Cpp,
            Self::C,
            Self::Lua,
            Self::Luau,
            Self::Html,
            Self::Css,
        ]
    }

    /// The per-language configuration bundle
    pub fn profile(self) -> LanguageProfile {
        let (check_command, output_pattern, comment_style): (
            Option<&'static [&'static str]>,
            &'static Regex,
            CommentStyle,
        ) = match self {
            // Rust has a first-class in-process parser; the fallback
            // analyzer is always authoritative for it.
            Self::Rust => (None, &COLON_FORMAT, CommentStyle::Slash),
            Self::Python => (Some(PYTHON_CHECK), &COLON_FORMAT, CommentStyle::Hash),
            Self::JavaScript | Self::Jsx => (Some(NODE_CHECK), &COMPACT_FORMAT, CommentStyle::Slash),
            Self::TypeScript | Self::Tsx => (Some(TSC_CHECK), &COMPACT_FORMAT, CommentStyle::Slash),
            Self::Swift => (Some(SWIFT_CHECK), &COLON_FORMAT, CommentStyle::Slash),
            Self::Cpp => (Some(CLANGXX_CHECK), &COLON_FORMAT, CommentStyle::Slash),
            Self::C => (Some(CLANG_CHECK), &COLON_FORMAT, CommentStyle::Slash),
            Self::Lua => (Some(LUAC_CHECK), &COLON_FORMAT, CommentStyle::Dash),
            Self::Luau => (Some(LUAU_CHECK), &COLON_FORMAT, CommentStyle::Dash),
            Self::Html => (None, &COMPACT_FORMAT, CommentStyle::HtmlBlock),
            Self::Css => (None, &COLON_FORMAT, CommentStyle::Block),
        };

        LanguageProfile {
            language: self,
            check_command,
            output_pattern,
            comment_style,
        }
    }
}

/// Comment style used when stripping comments for heuristic analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `#`
    Hash,
    /// `//`
    Slash,
    /// `--`
    Dash,
    /// `/* ... */`
    Block,
    /// `<!-- ... -->`
    HtmlBlock,
}

impl CommentStyle {
    /// The line-comment marker, if this style has one. Block styles are
    /// never stripped from a single line.
    pub fn line_marker(&self) -> Option<&'static str> {
        match self {
            Self::Hash => Some("#"),
            Self::Slash => Some("//"),
            Self::Dash => Some("--"),
            Self::Block | Self::HtmlBlock => None,
        }
    }
}

/// Per-language configuration: how to check a language and how to read
/// the check tool's output.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub language: Lang,

    /// External check command argv. `None` means no external tool is
    /// configured and the fallback analyzer is always used.
    pub check_command: Option<&'static [&'static str]>,

    /// Extracts (file, line, column, message) from one line of tool output
    pub output_pattern: &'static Regex,

    pub comment_style: CommentStyle,
}

/// Registry lookup: the profile for a file extension, or `None` when the
/// extension is unsupported.
pub fn profile_for(extension: &str) -> Option<LanguageProfile> {
    Lang::from_extension(extension).map(Lang::profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(Lang::from_extension("PY"), Some(Lang::Python));
        assert_eq!(Lang::from_extension("Lua"), Some(Lang::Lua));
        assert_eq!(Lang::from_extension("tsx"), Some(Lang::Tsx));
    }

    #[test]
    fn unknown_extensions_are_absent() {
        assert_eq!(Lang::from_extension("zig"), None);
        assert!(profile_for("xyz").is_none());
    }

    #[test]
    fn aliases_resolve_to_canonical_language() {
        assert_eq!(Lang::from_extension("mjs"), Some(Lang::JavaScript));
        assert_eq!(Lang::from_extension("cc"), Some(Lang::Cpp));
        assert_eq!(Lang::from_extension("h"), Some(Lang::C));
        assert_eq!(Lang::from_extension("htm"), Some(Lang::Html));
    }

    #[test]
    fn from_path_uses_the_extension() {
        assert_eq!(Lang::from_path(Path::new("src/mod.LUA")), Some(Lang::Lua));
        assert_eq!(Lang::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn rust_has_no_external_command() {
        assert!(Lang::Rust.profile().check_command.is_none());
    }

    #[test]
    fn colon_pattern_extracts_positions() {
        let profile = Lang::Python.profile();
        let caps = profile
            .output_pattern
            .captures("/tmp/x.py:12:5: invalid syntax")
            .unwrap();
        assert_eq!(&caps[2], "12");
        assert_eq!(&caps[3], "5");
        assert_eq!(&caps[4], "invalid syntax");
    }

    #[test]
    fn compact_pattern_extracts_positions() {
        let profile = Lang::JavaScript.profile();
        let caps = profile
            .output_pattern
            .captures("/tmp/x.js: line 3, col 14, Unexpected token")
            .unwrap();
        assert_eq!(&caps[2], "3");
        assert_eq!(&caps[3], "14");
        assert_eq!(&caps[4], "Unexpected token");
    }

    #[test]
    fn block_styles_have_no_line_marker() {
        assert_eq!(Lang::Css.profile().comment_style.line_marker(), None);
        assert_eq!(Lang::Html.profile().comment_style.line_marker(), None);
        assert_eq!(Lang::Lua.profile().comment_style.line_marker(), Some("--"));
    }
}

//! ast-grep wrapper and language detection from file extensions.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the C-family language from a file path extension.
///
/// Returns `None` for unrecognized extensions.
#[must_use]
pub fn detect_language(file_path: &Path) -> Option<SupportLang> {
    let ext = file_path.extension()?.to_str()?;
    match ext {
        "c" | "h" => Some(SupportLang::C),
        "cpp" | "cc" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" => Some(SupportLang::Cpp),
        _ => None,
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Human-readable language label used in diagnostics.
#[must_use]
pub const fn language_label(lang: SupportLang) -> &'static str {
    match lang {
        SupportLang::C => "C",
        SupportLang::Cpp => "C++",
        _ => "unsupported",
    }
}

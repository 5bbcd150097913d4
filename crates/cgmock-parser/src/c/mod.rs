//! ast-grep frontend for C headers (and C++ headers with `extern "C"` blocks).
//!
//! Walks the top-level `translation_unit`, descending into linkage blocks and
//! preprocessor conditionals. Conditionals are resolved against the macros
//! defined on the command line and by top-level `#define`/`#undef` lines;
//! `#include` is never followed. The split `extern "C" {` braces of
//! `__cplusplus` guards are blanked before parsing.

mod linkage_guards;
mod processors;

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use ast_grep_language::SupportLang;

use crate::args::FrontendArgs;
use crate::error::ParserError;
use crate::frontend::{Declaration, Frontend, TranslationUnit};
use crate::parser::{AstTree, detect_language, language_label, parse_source};

use processors::{MacroState, collect_declarations, first_error_line};

#[derive(Debug, Clone, Copy, Default)]
pub struct CFrontend {
    tolerate_syntax_errors: bool,
}

impl CFrontend {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tolerate_syntax_errors: false,
        }
    }

    /// Recover declarations from inside `ERROR` regions instead of failing.
    #[must_use]
    pub const fn tolerate_syntax_errors(mut self, tolerate: bool) -> Self {
        self.tolerate_syntax_errors = tolerate;
        self
    }

    /// Parse already-loaded `source` as if it were read from `path`.
    ///
    /// # Errors
    /// Returns [`ParserError::ParseFailed`] if the tree contains syntax errors
    /// (unless tolerated) and [`ParserError::UnsupportedLanguage`] for an
    /// unknown `-x` language.
    pub fn parse_source(
        &self,
        path: impl Into<PathBuf>,
        source: &str,
        args: &[String],
    ) -> Result<CUnit, ParserError> {
        let path = path.into();
        let args = FrontendArgs::parse(args);
        args.check_language()?;
        if !args.ignored.is_empty() {
            tracing::debug!(path = %path.display(), ignored = ?args.ignored, "frontend arguments ignored");
        }

        let language = args
            .language
            .or_else(|| detect_language(&path))
            .unwrap_or(SupportLang::C);
        let source = linkage_guards::blank_linkage_guards(source);
        if matches!(source, Cow::Owned(_)) {
            tracing::debug!(path = %path.display(), "blanked extern \"C\" guard braces");
        }
        let tree = parse_source(&source, language);

        if let Some(line) = first_error_line(&tree.root()) {
            if !self.tolerate_syntax_errors {
                return Err(ParserError::ParseFailed {
                    path,
                    language: language_label(language).to_string(),
                    message: format!("syntax error at line {line}"),
                });
            }
            tracing::debug!(path = %path.display(), line, "recovering declarations around syntax error");
        }

        Ok(CUnit {
            defined: args.defined_macros(language),
            path,
            language,
            tree,
            recover: self.tolerate_syntax_errors,
        })
    }
}

impl Frontend for CFrontend {
    type Unit = CUnit;

    fn parse(&self, path: &Path, args: &[String]) -> Result<CUnit, ParserError> {
        let source = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_source(path, &source, args)
    }
}

/// One parsed C or C++ file.
pub struct CUnit {
    path: PathBuf,
    language: SupportLang,
    tree: AstTree,
    defined: BTreeSet<String>,
    recover: bool,
}

impl CUnit {
    #[must_use]
    pub const fn language(&self) -> SupportLang {
        self.language
    }
}

impl fmt::Debug for CUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CUnit")
            .field("path", &self.path)
            .field("language", &self.language)
            .field("defined", &self.defined)
            .finish_non_exhaustive()
    }
}

impl TranslationUnit for CUnit {
    fn path(&self) -> &Path {
        &self.path
    }

    fn declarations(&self) -> Vec<Declaration> {
        let mut macros = MacroState::new(self.defined.clone());
        collect_declarations(&self.tree.root(), &mut macros, self.recover)
    }
}

#[cfg(test)]
mod tests;

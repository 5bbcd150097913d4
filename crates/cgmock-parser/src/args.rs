//! Interpretation of compiler-style frontend arguments.
//!
//! Arguments are forwarded verbatim from the command line. The frontend only
//! understands language selection and macro definitions; everything else
//! (include paths, warning flags, ...) is recorded and ignored.

use std::collections::BTreeSet;

use ast_grep_language::SupportLang;

use crate::error::ParserError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontendArgs {
    /// Language forced by `-x` or `-std=`.
    pub language: Option<SupportLang>,
    /// Macros from `-D`, in argument order.
    pub defines: Vec<String>,
    /// Macros from `-U`, in argument order.
    pub undefines: Vec<String>,
    /// Arguments the frontend does not act on.
    pub ignored: Vec<String>,
    /// A `-x` value naming a language no grammar exists for.
    pub unsupported_language: Option<String>,
}

impl FrontendArgs {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let mut parsed = Self::default();
        let mut iter = args.iter().map(AsRef::as_ref);
        while let Some(arg) = iter.next() {
            if arg == "--" {
                continue;
            } else if arg == "-x" {
                match iter.next() {
                    Some(value) => parsed.select_language(value),
                    None => parsed.ignored.push(arg.to_string()),
                }
            } else if let Some(value) = arg.strip_prefix("-x") {
                parsed.select_language(value);
            } else if arg == "-D" {
                if let Some(value) = iter.next() {
                    parsed.defines.push(macro_name(value));
                }
            } else if let Some(value) = arg.strip_prefix("-D") {
                parsed.defines.push(macro_name(value));
            } else if arg == "-U" {
                if let Some(value) = iter.next() {
                    parsed.undefines.push(value.to_string());
                }
            } else if let Some(value) = arg.strip_prefix("-U") {
                parsed.undefines.push(value.to_string());
            } else if let Some(standard) = arg
                .strip_prefix("-std=")
                .or_else(|| arg.strip_prefix("--std="))
            {
                parsed.language = Some(if standard.contains("++") {
                    SupportLang::Cpp
                } else {
                    SupportLang::C
                });
            } else {
                parsed.ignored.push(arg.to_string());
            }
        }
        parsed
    }

    fn select_language(&mut self, value: &str) {
        match value {
            "c" | "c-header" => self.language = Some(SupportLang::C),
            "c++" | "c++-header" => self.language = Some(SupportLang::Cpp),
            other => self.unsupported_language = Some(other.to_string()),
        }
    }

    /// Fail if a `-x` value named a language without a grammar.
    ///
    /// # Errors
    /// Returns [`ParserError::UnsupportedLanguage`].
    pub fn check_language(&self) -> Result<(), ParserError> {
        match &self.unsupported_language {
            Some(language) => Err(ParserError::UnsupportedLanguage(language.clone())),
            None => Ok(()),
        }
    }

    /// Macros defined before the first line of a unit in `lang`.
    #[must_use]
    pub fn defined_macros(&self, lang: SupportLang) -> BTreeSet<String> {
        let mut defined: BTreeSet<String> = self.defines.iter().cloned().collect();
        if lang == SupportLang::Cpp {
            defined.insert("__cplusplus".to_string());
        }
        for name in &self.undefines {
            defined.remove(name);
        }
        defined
    }
}

fn macro_name(definition: &str) -> String {
    definition
        .split_once('=')
        .map_or(definition, |(name, _)| name)
        .to_string()
}

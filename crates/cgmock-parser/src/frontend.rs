//! The plugin boundary between cgmock and a C/C++ source parser.
//!
//! A [`Frontend`] parses one file into a [`TranslationUnit`], which exposes
//! its top-level declarations in source order as language-neutral
//! [`Declaration`] values. Type spellings follow the libclang convention:
//! `"const char *"`, `"int (*)(int)"`, with parameter arrays and functions
//! already decayed to pointers.

use std::path::Path;

use crate::error::ParserError;

pub trait Frontend {
    type Unit: TranslationUnit;

    /// Parse `path`, forwarding the compiler-style `args` to the frontend.
    ///
    /// # Errors
    /// Returns [`ParserError`] if the file cannot be read or parsed.
    fn parse(&self, path: &Path, args: &[String]) -> Result<Self::Unit, ParserError>;
}

pub trait TranslationUnit {
    fn path(&self) -> &Path;

    /// Top-level declarations in the order they appear in the unit.
    fn declarations(&self) -> Vec<Declaration>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(FunctionDecl),
    /// Types, variables, macros and anything else that is not a function.
    Other { kind: String, line: u32 },
}

impl Declaration {
    #[must_use]
    pub const fn as_function(&self) -> Option<&FunctionDecl> {
        match self {
            Self::Function(function) => Some(function),
            Self::Other { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub return_type: String,
    /// Declared parameters, including the lone `void` of `f(void)`.
    pub parameters: Vec<ParamDecl>,
    /// Whether the parameter list ends in `...`.
    pub variadic: bool,
    /// A definition with a body rather than a prototype.
    pub is_definition: bool,
    /// 1-based source line.
    pub line: u32,
}

impl FunctionDecl {
    /// `f(void)`: one unnamed `void` parameter that declares an empty list.
    #[must_use]
    pub fn is_void_prototype(&self) -> bool {
        !self.variadic
            && matches!(self.parameters.as_slice(), [only] if only.is_void_marker())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub type_spelling: String,
    pub name: Option<String>,
}

impl ParamDecl {
    #[must_use]
    pub fn is_void_marker(&self) -> bool {
        self.name.is_none() && self.type_spelling == "void"
    }
}

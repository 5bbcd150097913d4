//! # cgmock-parser
//!
//! Turns C headers into [`FunctionSignature`](cgmock_core::FunctionSignature)
//! sequences.
//!
//! Parsing sits behind the [`Frontend`] / [`TranslationUnit`] plugin boundary;
//! the shipped [`CFrontend`] walks ast-grep C/C++ trees. The
//! [`extractor`] module is frontend-agnostic: it selects function
//! declarations, applies the [`NameFilter`](cgmock_core::NameFilter) and the
//! [`ParameterPolicy`](cgmock_core::ParameterPolicy), and concatenates
//! results across files.

pub mod args;
pub mod c;
pub mod error;
pub mod extractor;
pub mod frontend;
pub mod parser;

pub use args::FrontendArgs;
pub use c::{CFrontend, CUnit};
pub use error::ParserError;
pub use extractor::{extract_files, extract_functions};
pub use frontend::{Declaration, Frontend, FunctionDecl, ParamDecl, TranslationUnit};
pub use parser::{AstTree, detect_language, parse_source};

//! # cgmock-core
//!
//! Core types shared across the cgmock crates:
//! - [`FunctionSignature`], the normalized model of one C function declaration
//! - [`LibraryIdentity`], the symbol names derived from a library name
//! - [`NameFilter`], the allowlist predicate over function names
//! - Type spelling helpers and the option enums carried through configuration
//! - Cross-cutting error types

pub mod errors;
pub mod filter;
pub mod identity;
pub mod options;
pub mod signature;
pub mod spelling;

pub use errors::CoreError;
pub use filter::NameFilter;
pub use identity::LibraryIdentity;
pub use options::{MockStyle, ParameterPolicy};
pub use signature::{FunctionSignature, duplicate_names};

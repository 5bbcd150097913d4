//! Cross-cutting error types for cgmock.
//!
//! Frontend and configuration errors live in their own crates; they converge
//! in `cgmock-cli` through `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The filter list could not be read.
    #[error("Failed to read filter list: {0}")]
    FilterSource(#[from] std::io::Error),

    /// The library name cannot seed C++ identifiers.
    #[error("Invalid library name {name:?}: expected a C identifier")]
    InvalidLibraryName { name: String },
}

//! Parser error types for cgmock-parser.

use std::path::PathBuf;

/// Errors raised while reading or parsing an input file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {} ({language}): {message}", path.display())]
    ParseFailed {
        path: PathBuf,
        language: String,
        message: String,
    },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

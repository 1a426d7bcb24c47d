//! Error type shared by the loader, page builder and CLI.

use thiserror::Error;

/// Failures surfaced while reading and parsing documentation.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a document or directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The grammar could not be loaded into the parser.
    #[error("incompatible tree-sitter language: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The heading query does not compile against the grammar.
    #[error("invalid section query: {0}")]
    Query(#[from] tree_sitter::QueryError),
    /// Tree-sitter gave up on the document.
    #[error("failed to parse {0}")]
    Parse(String),
    /// A probe report could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats by providing the tree-sitter grammar and heading query
//! specific to each one.

pub mod markdown;

/// Grammar and heading query for one document format.
pub trait Format {
    /// Tree-sitter grammar used to parse the document.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing each heading node as `@heading`.
    fn section_query(&self) -> &str;
}

//! Section representation for tree-sitter parsed documents.
//!
//! A section is the stretch of a document from one heading to the next. Each one becomes a
//! navigation entry and a scroll target on the rendered page, so it tracks the line of its
//! heading and where its hierarchy sits relative to the other headings.

#[derive(Clone, Debug, PartialEq, Eq)]
/// Heading-delimited division of a document.
pub struct Section {
    /// Section heading text without markup symbols.
    pub title: String,
    /// Heading depth (1 for `#`, up to 6).
    pub level: usize,
    /// Zero-based line of the heading.
    pub line_start: usize,
    /// Line where the next section begins or file ends.
    pub line_end: usize,
    /// Source file containing this section.
    pub file_path: String,
    /// Index of the containing section in the hierarchy.
    pub parent_index: Option<usize>,
    /// Indices of directly nested subsections.
    pub children_indices: Vec<usize>,
}

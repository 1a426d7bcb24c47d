//! Locating documentation files and splitting them into sections.
//!
//! Directories are walked recursively and filtered by extension, while paths named explicitly on
//! the command line are always kept. Sections come from the heading query of a [`Format`], run
//! over the tree-sitter parse of the whole file.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::section::Section;
use std::fs;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Expands `paths` into a sorted list of document files.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_dir(&path, extensions, &mut documents)?;
        } else if path.is_file() {
            documents.push(path);
        }
    }
    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn collect_dir(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_dir(&path, extensions, out)?;
        } else if has_extension(&path, extensions) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.trim_start_matches('.') == ext))
}

/// Extracts sections from already loaded `source`, attributing them to `file_path`.
///
/// # Errors
///
/// Returns an error if the grammar or query is rejected or parsing fails.
pub fn sections_from_source(
    source: &str,
    file_path: &str,
    format: &dyn Format,
) -> Result<Vec<Section>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse(file_path.to_string()))?;
    let query = Query::new(&language, format.section_query())?;

    let mut headings = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let Ok(text) = node.utf8_text(source.as_bytes()) else {
                continue;
            };
            if let Some((level, title)) = parse_heading(text) {
                headings.push((node.start_position().row, level, title));
            }
        }
    }
    headings.sort_by_key(|(row, _, _)| *row);

    let line_count = source.lines().count();
    let mut sections: Vec<Section> = Vec::with_capacity(headings.len());
    let mut open: Vec<usize> = Vec::new();

    for (i, (row, level, title)) in headings.iter().enumerate() {
        while open
            .last()
            .is_some_and(|&idx| sections[idx].level >= *level)
        {
            open.pop();
        }
        let parent_index = open.last().copied();
        let line_end = headings.get(i + 1).map_or(line_count, |(next, _, _)| *next);

        sections.push(Section {
            title: title.clone(),
            level: *level,
            line_start: *row,
            line_end,
            file_path: file_path.to_string(),
            parent_index,
            children_indices: Vec::new(),
        });
        if let Some(parent) = parent_index {
            sections[parent].children_indices.push(i);
        }
        open.push(i);
    }

    Ok(sections)
}

/// Splits an ATX heading into its level and title text.
fn parse_heading(text: &str) -> Option<(usize, String)> {
    let line = text.lines().next()?.trim();
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = line[level..].trim();
    // A closing run of `#` only counts when separated from the text by whitespace.
    let unclosed = rest.trim_end_matches('#');
    let title = if unclosed.is_empty() || unclosed.ends_with(char::is_whitespace) {
        unclosed.trim_end()
    } else {
        rest
    };
    Some((level, title.to_string()))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;

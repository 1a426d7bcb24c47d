use super::{find_documents, parse_heading, sections_from_source};
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use tempfile::tempdir;

const GUIDE: &str = "# Guide

Intro text.

## Install

Steps.

## Usage

```sh
# not a heading
```

# FAQ
";

#[test]
fn test_extracts_headings_with_hierarchy() {
    let sections = sections_from_source(GUIDE, "guide.md", &MarkdownFormat).unwrap();

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Guide", "Install", "Usage", "FAQ"]);

    let levels: Vec<usize> = sections.iter().map(|s| s.level).collect();
    assert_eq!(levels, vec![1, 2, 2, 1]);

    assert_eq!(sections[0].parent_index, None);
    assert_eq!(sections[0].children_indices, vec![1, 2]);
    assert_eq!(sections[2].parent_index, Some(0));
    assert_eq!(sections[3].parent_index, None);
    assert_eq!(sections[3].file_path, "guide.md");
}

#[test]
fn test_section_line_ranges() {
    let sections = sections_from_source(GUIDE, "guide.md", &MarkdownFormat).unwrap();

    let ranges: Vec<(usize, usize)> = sections
        .iter()
        .map(|s| (s.line_start, s.line_end))
        .collect();
    assert_eq!(ranges, vec![(0, 4), (4, 8), (8, 14), (14, 15)]);
}

#[test]
fn test_skipped_levels_attach_to_nearest_shallower_heading() {
    let source = "# Top\n\n### Deep\n\n## Mid\n";
    let sections = sections_from_source(source, "doc.md", &MarkdownFormat).unwrap();

    assert_eq!(sections[1].parent_index, Some(0));
    assert_eq!(sections[2].parent_index, Some(0));
    assert_eq!(sections[0].children_indices, vec![1, 2]);
}

#[test]
fn test_document_without_headings() {
    let sections = sections_from_source("just text\n", "plain.md", &MarkdownFormat).unwrap();
    assert!(sections.is_empty());
}

#[test]
fn test_parse_heading_strips_markers() {
    assert_eq!(parse_heading("## Usage\n"), Some((2, "Usage".to_string())));
    assert_eq!(parse_heading("# Closed ##"), Some((1, "Closed".to_string())));
    assert_eq!(parse_heading("# C#"), Some((1, "C#".to_string())));
    assert_eq!(parse_heading("plain"), None);
    assert_eq!(parse_heading("####### seven"), None);
}

#[test]
fn test_find_documents_filters_directories_by_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.md"), "# B").unwrap();
    fs::write(dir.path().join("notes.txt"), "text").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("a.md"), "# A").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();

    assert_eq!(
        found,
        vec![dir.path().join("b.md"), dir.path().join("sub").join("a.md")]
    );
}

#[test]
fn test_find_documents_keeps_explicit_files() {
    let dir = tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "# Notes").unwrap();
    let missing = dir.path().join("missing.md");

    let found = find_documents(vec![notes.clone(), missing], &[".md".to_string()]).unwrap();

    assert_eq!(found, vec![notes]);
}

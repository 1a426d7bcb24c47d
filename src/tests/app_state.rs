use super::{AppState, FileMode, View};
use crate::formats::markdown::MarkdownFormat;
use crate::page::Page;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

// Headings on lines 0, 10 and 20, so with 20 units per line they sit at 0, 200 and 400.
fn source() -> String {
    let mut text = String::new();
    for title in ["Intro", "Setup", "Usage"] {
        text.push_str(&format!("# {title}\n"));
        text.push_str(&"text\n".repeat(9));
    }
    text
}

fn app_with_page() -> AppState {
    let mut app = AppState::new(vec![PathBuf::from("doc.md")], 20, 3);
    let page = Page::from_source(&source(), "doc.md", &MarkdownFormat, 20).unwrap();
    app.load_page(page);
    app
}

fn active(app: &AppState) -> Vec<String> {
    app.page.as_ref().unwrap().active_fragments()
}

#[test]
fn test_file_mode_from_file_count() {
    let single = AppState::new(vec![PathBuf::from("a.md")], 20, 3);
    assert_eq!(single.file_mode, FileMode::Single);
    assert_eq!(single.current_view, View::FileList);

    let multi = AppState::new(vec![PathBuf::from("a.md"), PathBuf::from("b.md")], 20, 3);
    assert_eq!(multi.file_mode, FileMode::Multi);
}

#[test]
fn test_nothing_active_before_first_scroll() {
    let app = app_with_page();
    assert_eq!(app.current_view, View::Page);
    assert!(active(&app).is_empty());
}

#[test]
fn test_scroll_events_drive_highlighting() {
    let mut app = app_with_page();

    app.scroll_to(0);
    assert_eq!(active(&app), vec!["#intro"]);

    // Row 6 is offset 120, past Setup's threshold of 110.
    app.scroll_to(6);
    assert_eq!(app.scroll_top(), 120);
    assert_eq!(active(&app), vec!["#setup"]);

    app.scroll_to_top();
    assert_eq!(active(&app), vec!["#intro"]);
}

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut app = app_with_page();

    app.scroll_to(1000);
    assert_eq!(app.scroll_row, 29);
    assert_eq!(active(&app), vec!["#usage"]);

    app.viewport_height = 10;
    app.scroll_to_bottom();
    assert_eq!(app.scroll_row, 20);

    app.scroll_by(-100);
    assert_eq!(app.scroll_row, 0);
}

#[test]
fn test_step_and_page_scrolling() {
    let mut app = app_with_page();
    app.viewport_height = 8;

    app.scroll_down();
    assert_eq!(app.scroll_row, 3);
    app.page_down();
    assert_eq!(app.scroll_row, 11);
    app.scroll_up();
    assert_eq!(app.scroll_row, 8);
    app.page_up();
    assert_eq!(app.scroll_row, 0);
}

#[test]
fn test_section_jumps() {
    let mut app = app_with_page();

    assert_eq!(app.find_prev_section(), None);
    app.next_section();
    assert_eq!(app.scroll_row, 10);
    assert_eq!(active(&app), vec!["#setup"]);

    app.next_section();
    assert_eq!(app.scroll_row, 20);
    app.next_section();
    assert_eq!(app.scroll_row, 20);
    assert_eq!(app.message.as_deref(), Some("No more sections"));

    app.prev_section();
    assert_eq!(app.scroll_row, 10);
}

#[test]
fn test_open_and_close_file() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.md");
    let second = dir.path().join("second.md");
    fs::write(&first, "# One\n").unwrap();
    fs::write(&second, source()).unwrap();

    let mut app = AppState::new(vec![first, second], 20, 3);
    app.open_file(1).unwrap();

    assert_eq!(app.current_file_index, 1);
    assert_eq!(app.current_view, View::Page);
    assert_eq!(app.page.as_ref().unwrap().entries.len(), 3);
    assert_eq!(app.spy.as_ref().unwrap().links().len(), 3);

    app.close_page();
    assert_eq!(app.current_view, View::FileList);
    assert!(app.page.is_none());
}

#[test]
fn test_open_missing_file_fails() {
    let dir = tempdir().unwrap();
    let mut app = AppState::new(vec![dir.path().join("gone.md")], 20, 3);

    assert!(app.open_file(0).is_err());
    assert!(app.page.is_none());
}

#[test]
fn test_next_section_below_last_row_reports_end() {
    let mut app = app_with_page();
    app.viewport_height = 15;
    app.scroll_to(15);

    // Usage starts on line 20 but the page cannot scroll past row 15.
    assert_eq!(app.find_next_section(), Some(2));
    app.next_section();

    assert_eq!(app.scroll_row, 15);
    assert_eq!(app.message.as_deref(), Some("No more sections"));
}

#[test]
fn test_single_line_scrolling() {
    let mut app = app_with_page();

    app.scroll_by(1);
    app.scroll_by(1);
    assert_eq!(app.scroll_row, 2);

    app.scroll_by(-1);
    assert_eq!(app.scroll_row, 1);
    assert_eq!(active(&app), vec!["#intro"]);
}

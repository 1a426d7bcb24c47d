//! The core state machine bridging documentation files and the page viewer.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user
//! scrolls. Every scroll request becomes one scroll event for the page's [`ScrollSpy`], which
//! updates the `active` markers in the page's element tree; the UI then renders whatever the
//! tree says. Nothing is highlighted until the first scroll, as on a freshly loaded page.

use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::page::{line_offset, Page};
use crate::scroll_spy::ScrollSpy;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(PartialEq, Debug)]
/// Determines navigation scope and quit behavior based on project size.
pub enum FileMode {
    /// Single-file mode quits directly to shell.
    Single,
    /// Multi-file mode returns to file list before quitting.
    Multi,
}

#[derive(PartialEq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Displays available files for multi-file projects.
    FileList,
    /// Shows a document with its navigation pane.
    Page,
}

/// Session state of the viewer.
pub struct AppState {
    /// File paths available for viewing.
    pub files: Vec<PathBuf>,
    /// Selected file in the file list view.
    pub current_file_index: usize,
    /// Controls navigation behavior and file list visibility.
    pub file_mode: FileMode,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Page of the open file.
    pub page: Option<Page>,
    /// Spy watching the open page.
    pub spy: Option<ScrollSpy>,
    /// First visible line of the page.
    pub scroll_row: usize,
    /// Number of text lines the content pane can show, set while drawing.
    pub viewport_height: usize,
    /// Lines moved per scroll step.
    pub scroll_step: usize,
    /// Page units per line.
    pub line_height: u32,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Initialises application state and determines file mode.
    ///
    /// Single-file projects skip the file list and quit directly to shell, while multi-file
    /// projects show a file selector and return to it on 'q'.
    pub fn new(files: Vec<PathBuf>, line_height: u32, scroll_step: usize) -> Self {
        let file_mode = if files.len() == 1 {
            FileMode::Single
        } else {
            FileMode::Multi
        };

        Self {
            files,
            current_file_index: 0,
            file_mode,
            current_view: View::FileList,
            page: None,
            spy: None,
            scroll_row: 0,
            viewport_height: 0,
            scroll_step: scroll_step.max(1),
            line_height,
            message: None,
        }
    }

    /// Opens the file at `index` and switches to the page view.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open_file(&mut self, index: usize) -> Result<()> {
        let Some(path) = self.files.get(index) else {
            return Ok(());
        };
        let source = fs::read_to_string(path)?;
        let page = Page::from_source(
            &source,
            &path.to_string_lossy(),
            &MarkdownFormat,
            self.line_height,
        )?;
        debug!(path = %path.display(), "opened page");
        self.current_file_index = index;
        self.load_page(page);
        Ok(())
    }

    /// Shows `page`, resetting the scroll position and spy.
    pub fn load_page(&mut self, page: Page) {
        self.spy = Some(ScrollSpy::from_document(&page.document));
        self.page = Some(page);
        self.scroll_row = 0;
        self.message = None;
        self.current_view = View::Page;
    }

    /// Leaves the page for the file list.
    pub fn close_page(&mut self) {
        self.page = None;
        self.spy = None;
        self.scroll_row = 0;
        self.current_view = View::FileList;
    }

    #[must_use]
    /// Scroll offset of the current position in page units.
    pub fn scroll_top(&self) -> i64 {
        line_offset(self.scroll_row, self.line_height)
    }

    #[must_use]
    /// Last row the page can be scrolled to.
    pub fn max_row(&self) -> usize {
        self.page.as_ref().map_or(0, |page| {
            page.lines.len().saturating_sub(self.viewport_height.max(1))
        })
    }

    /// Moves to `row` (clamped) and raises a scroll event.
    pub fn scroll_to(&mut self, row: usize) {
        self.scroll_row = row.min(self.max_row());
        let scroll_top = self.scroll_top();
        if let (Some(spy), Some(page)) = (&self.spy, &mut self.page) {
            spy.handle_scroll(&mut page.document, scroll_top);
        }
    }

    /// Scrolls by `delta` lines, negative values scrolling up.
    pub fn scroll_by(&mut self, delta: isize) {
        let row = self.scroll_row.saturating_add_signed(delta);
        self.scroll_to(row);
    }

    /// Scrolls down one step.
    pub fn scroll_down(&mut self) {
        self.scroll_to(self.scroll_row.saturating_add(self.scroll_step));
    }

    /// Scrolls up one step.
    pub fn scroll_up(&mut self) {
        self.scroll_to(self.scroll_row.saturating_sub(self.scroll_step));
    }

    /// Scrolls down one screen.
    pub fn page_down(&mut self) {
        let height = self.viewport_height.max(1);
        self.scroll_to(self.scroll_row.saturating_add(height));
    }

    /// Scrolls up one screen.
    pub fn page_up(&mut self) {
        let height = self.viewport_height.max(1);
        self.scroll_to(self.scroll_row.saturating_sub(height));
    }

    /// Scrolls to the start of the page.
    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    /// Scrolls to the end of the page.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_row());
    }

    /// Scrolls so the heading of nav entry `index` is at the top.
    pub fn jump_to_section(&mut self, index: usize) {
        let Some(line) = self
            .page
            .as_ref()
            .and_then(|page| page.entries.get(index))
            .map(|entry| entry.line)
        else {
            return;
        };
        self.scroll_to(line);
    }

    #[must_use]
    /// Nav entry of the first heading below the top of the viewport.
    pub fn find_next_section(&self) -> Option<usize> {
        self.page
            .as_ref()?
            .entries
            .iter()
            .position(|entry| entry.line > self.scroll_row)
    }

    #[must_use]
    /// Nav entry of the last heading above the top of the viewport.
    pub fn find_prev_section(&self) -> Option<usize> {
        self.page
            .as_ref()?
            .entries
            .iter()
            .rposition(|entry| entry.line < self.scroll_row)
    }

    /// Jumps to the next heading, reporting when there is none.
    ///
    /// Headings past the last scrollable row cannot reach the top, so landing on the same row
    /// counts as having no next section.
    pub fn next_section(&mut self) {
        let row = self.scroll_row;
        if let Some(next) = self.find_next_section() {
            self.jump_to_section(next);
        }
        if self.scroll_row == row {
            self.message = Some("No more sections".to_string());
        }
    }

    /// Jumps to the previous heading, reporting when there is none.
    pub fn prev_section(&mut self) {
        let row = self.scroll_row;
        if let Some(prev) = self.find_prev_section() {
            self.jump_to_section(prev);
        }
        if self.scroll_row == row {
            self.message = Some("No previous sections".to_string());
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;

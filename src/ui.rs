//! The UI renders the application state into something visible and scrollable.
//!
//! The draw function dispatches based on the current view (file list or page).
//! The page view splits into a navigation pane, whose entries are styled from the `active`
//! markers the scroll spy left in the page, and the document text scrolled to the current row.

use crate::app_state::{AppState, View};
use crate::config::Config;
use crate::page::Page;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &mut AppState, _cfg: &Config) {
    match app.current_view {
        View::FileList => draw_file_list(f, app),
        View::Page => draw_page(f, app),
    }
}

/// Generate indentation prefix for nested nav entries
fn get_tree_prefix(depth: usize, is_last: bool) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut prefix = "  ".repeat(depth - 1);
    if is_last {
        prefix.push_str("└ ");
    } else {
        prefix.push_str("├ ");
    }
    prefix
}

/// Whether no later entry shares the same parent.
fn is_last_sibling(page: &Page, index: usize) -> bool {
    let parent = page.entries[index].parent;
    !page.entries[index + 1..]
        .iter()
        .any(|entry| entry.parent == parent)
}

fn draw_file_list(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let items: Vec<ListItem> = app
        .files
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let style = if i == app.current_file_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Blue)
            };
            ListItem::new(Line::from(format!("📄 {}", path.display()))).style(style)
        })
        .collect();

    let title = format!("Files ({})", app.files.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, chunks[0]);

    let help = app
        .message
        .clone()
        .unwrap_or_else(|| "↑/↓: Navigate | Enter: Open | q: Quit".to_string());
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[1]);
}

fn draw_page(f: &mut Frame, app: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Borders take one line above and below the text.
    app.viewport_height = usize::from(panes[1].height.saturating_sub(2));

    let Some(page) = app.page.as_ref() else {
        return;
    };

    let items: Vec<ListItem> = page
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let prefix = get_tree_prefix(entry.depth, is_last_sibling(page, i));
            let style = if page.is_active(i) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if entry.depth == 0 {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(entry.title.clone(), style),
            ]))
        })
        .collect();

    let nav = List::new(items).block(Block::default().borders(Borders::ALL).title("Contents"));
    f.render_widget(nav, panes[0]);

    let text: Vec<Line> = page
        .lines
        .iter()
        .map(|line| {
            if line.starts_with('#') {
                Line::styled(line.clone(), Style::default().add_modifier(Modifier::BOLD))
            } else {
                Line::raw(line.clone())
            }
        })
        .collect();

    let file_name = app
        .files
        .get(app.current_file_index)
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    let row = u16::try_from(app.scroll_row).unwrap_or(u16::MAX);
    let content = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(file_name))
        .scroll((row, 0));
    f.render_widget(content, panes[1]);

    let status = if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        let current = app
            .spy
            .as_ref()
            .and_then(|spy| page.current_entry(spy, app.scroll_top()))
            .map_or("-", |entry| entry.title.as_str());
        format!(
            "offset {} | {current} | ↑/↓: Scroll | J/K: Line | PgUp/PgDn | Tab/Shift+Tab: Section | q: Quit",
            app.scroll_top()
        )
    };
    let help_widget = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, rows[1]);
}

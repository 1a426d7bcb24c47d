//! Serialisable results of probing a page at fixed scroll offsets.
//!
//! Probing replays scroll events without a terminal, which makes the highlighting of a
//! document easy to inspect or diff from scripts.

use crate::error::Result;
use crate::page::Page;
use crate::scroll_spy::ScrollSpy;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Active navigation entries after one scroll event.
pub struct Probe {
    /// Scroll offset handed to the spy.
    pub scroll_top: i64,
    /// Fragments of the active entries, in nav order.
    pub active: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
/// Probes of one document, in the order they were applied.
pub struct Report {
    /// Source file of the probed page.
    pub file: String,
    /// One probe per scroll offset.
    pub probes: Vec<Probe>,
}

impl Report {
    #[must_use]
    /// Applies each offset to `page` in turn, recording the highlighting after every event.
    ///
    /// Events accumulate like real scrolling, so a later probe sees the marker state left by
    /// earlier ones.
    pub fn run(file: &str, page: &mut Page, offsets: &[i64]) -> Self {
        let spy = ScrollSpy::from_document(&page.document);
        let probes = offsets
            .iter()
            .map(|&scroll_top| {
                spy.handle_scroll(&mut page.document, scroll_top);
                Probe {
                    scroll_top,
                    active: page.active_fragments(),
                }
            })
            .collect();
        Self {
            file: file.to_string(),
            probes,
        }
    }

    /// Pretty-printed JSON for the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;

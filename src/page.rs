//! Rendering a sectioned document into a page the scroll spy can watch.
//!
//! The page mirrors what a documentation site generator emits: a `<nav>` holding a list of
//! `page-scroll` links, one `<li>` per heading, with subsections in a nested list inside their
//! parent's item, followed by one `<section>` per heading placed at the vertical offset of its
//! heading line. Nested lists form their own sibling groups, so a subsection link and its
//! parent link can be active at the same time.

use crate::dom::{Document, NodeId};
use crate::error::Result;
use crate::formats::Format;
use crate::input;
use crate::scroll_spy::{ScrollSpy, ACTIVE_CLASS, LINK_CLASS};
use crate::section::Section;
use std::collections::HashSet;
use tracing::debug;

#[derive(Clone, Debug)]
/// One navigation entry of the page, in nav order.
pub struct NavEntry {
    /// Fragment reference of the link, e.g. `#usage`.
    pub fragment: String,
    /// Heading text shown in the nav.
    pub title: String,
    /// Nesting depth within the nav, 0 for top-level entries.
    pub depth: usize,
    /// Entry whose nested list holds this one.
    pub parent: Option<usize>,
    /// Line of the heading in the source text.
    pub line: usize,
    /// The `<li>` whose class the spy toggles.
    pub container: NodeId,
    /// The `<a class="page-scroll">` element.
    pub link: NodeId,
}

/// A document page with its navigation list and scroll targets.
pub struct Page {
    /// Element tree holding the nav and section elements.
    pub document: Document,
    /// Source text, one entry per rendered line.
    pub lines: Vec<String>,
    /// Navigation entries in document order.
    pub entries: Vec<NavEntry>,
    /// Page units per rendered line.
    pub line_height: u32,
}

#[must_use]
/// Vertical page offset of `line`.
pub fn line_offset(line: usize, line_height: u32) -> i64 {
    i64::try_from(line)
        .unwrap_or(i64::MAX)
        .saturating_mul(i64::from(line_height))
}

#[must_use]
/// Turns a heading into an element id: lowercase alphanumerics joined by hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if c == ' ' || c == '-' || c == '_' {
            slug.push('-');
        }
    }
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Hands out slugs, suffixing repeats with `-1`, `-2`, ...
#[derive(Default)]
struct SlugSet {
    used: HashSet<String>,
}

impl SlugSet {
    fn claim(&mut self, title: &str) -> String {
        let base = slugify(title);
        let mut slug = base.clone();
        let mut n = 0;
        while self.used.contains(&slug) {
            n += 1;
            slug = format!("{base}-{n}");
        }
        self.used.insert(slug.clone());
        slug
    }
}

impl Page {
    #[must_use]
    /// Builds the page for `sections` extracted from `source`.
    pub fn build(sections: &[Section], source: &str, line_height: u32) -> Self {
        let mut document = Document::new();
        let body = document.body();

        let nav = document.append_element(body, "nav");
        let top_list = document.append_element(nav, "ul");
        document.add_class(top_list, "nav");
        let main = document.append_element(body, "main");

        let mut slugs = SlugSet::default();
        let mut items: Vec<NodeId> = Vec::with_capacity(sections.len());
        let mut sublists: Vec<Option<NodeId>> = vec![None; sections.len()];
        let mut entries = Vec::with_capacity(sections.len());

        for (i, section) in sections.iter().enumerate() {
            let slug = slugs.claim(&section.title);
            let fragment = format!("#{slug}");

            let list = match section.parent_index {
                Some(parent) if parent < i => {
                    if let Some(list) = sublists[parent] {
                        list
                    } else {
                        let list = document.append_element(items[parent], "ul");
                        sublists[parent] = Some(list);
                        list
                    }
                }
                _ => top_list,
            };

            let item = document.append_element(list, "li");
            let link = document.append_element(item, "a");
            document.add_class(link, LINK_CLASS);
            document.set_href(link, &fragment);
            document.set_text(link, &section.title);
            items.push(item);

            let target = document.append_element(main, "section");
            document.set_id(target, &slug);
            document.set_text(target, &section.title);
            document.set_offset_top(target, line_offset(section.line_start, line_height));

            entries.push(NavEntry {
                fragment,
                title: section.title.clone(),
                depth: depth_of(sections, i),
                parent: section.parent_index.filter(|&p| p < i),
                line: section.line_start,
                container: item,
                link,
            });
        }

        debug!(sections = entries.len(), "built page");

        Self {
            document,
            lines: source.lines().map(str::to_string).collect(),
            entries,
            line_height,
        }
    }

    /// Parses `source` with `format` and builds its page.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    pub fn from_source(
        source: &str,
        file_path: &str,
        format: &dyn Format,
        line_height: u32,
    ) -> Result<Self> {
        let sections = input::sections_from_source(source, file_path, format)?;
        Ok(Self::build(&sections, source, line_height))
    }

    #[must_use]
    /// Total height of the rendered text.
    pub fn content_height(&self) -> i64 {
        line_offset(self.lines.len(), self.line_height)
    }

    #[must_use]
    /// Fragments of the entries whose container is currently active, in nav order.
    pub fn active_fragments(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| self.document.has_class(entry.container, ACTIVE_CLASS))
            .map(|entry| entry.fragment.clone())
            .collect()
    }

    #[must_use]
    /// Whether the entry at `index` is highlighted.
    pub fn is_active(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|entry| self.document.has_class(entry.container, ACTIVE_CLASS))
    }

    #[must_use]
    /// The most specific section in view at `scroll_top`.
    ///
    /// Follows the active top-level entry down through active entries of its nested list,
    /// stopping at entries `spy` no longer counts as reached. Nested lists keep their marker
    /// when scrolling leaves them, so such markers never make an entry current.
    pub fn current_entry(&self, spy: &ScrollSpy, scroll_top: i64) -> Option<&NavEntry> {
        let reached: HashSet<NodeId> = spy
            .reached(&self.document, scroll_top)
            .into_iter()
            .map(|link| link.element)
            .collect();
        let mut current: Option<usize> = None;
        loop {
            let next = self.entries.iter().enumerate().position(|(i, entry)| {
                entry.parent == current && self.is_active(i) && reached.contains(&entry.link)
            });
            match next {
                Some(i) => current = Some(i),
                None => return current.map(|i| &self.entries[i]),
            }
        }
    }
}

fn depth_of(sections: &[Section], index: usize) -> usize {
    let mut depth = 0;
    let mut current = sections[index].parent_index;
    while let Some(parent) = current {
        depth += 1;
        current = sections[parent].parent_index;
    }
    depth
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;

//! Scroll-driven active-link highlighting for a navigation bar.
//!
//! A [`ScrollSpy`] holds the navigation links discovered when a page is set up. Every scroll
//! event hands it the current scroll offset; each link whose target section has been reached
//! (its offset minus a fixed margin is at or above the scroll offset) gets its parent container
//! marked `active`, and that container's siblings lose the marker. Links are processed in
//! document order, so when several sections have been reached the last one wins within its
//! sibling group.

use crate::dom::{Document, NodeId};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// Class marking elements that participate in scroll spying.
pub const LINK_CLASS: &str = "page-scroll";

/// Class toggled on the container of the current navigation entry.
pub const ACTIVE_CLASS: &str = "active";

/// Distance above a section at which its link already counts as reached.
pub const DEFAULT_MARGIN: i64 = 90;

/// Looks up the vertical offset of a section by its identifier.
pub trait SectionResolver {
    /// Offset of the element with identifier `id` (no leading `#`), or `None` when absent.
    fn resolve(&self, id: &str) -> Option<i64>;
}

impl SectionResolver for Document {
    fn resolve(&self, id: &str) -> Option<i64> {
        self.get_element_by_id(id)
            .map(|node| self.element(node).offset_top)
    }
}

impl SectionResolver for HashMap<String, i64> {
    fn resolve(&self, id: &str) -> Option<i64> {
        self.get(id).copied()
    }
}

impl SectionResolver for BTreeMap<String, i64> {
    fn resolve(&self, id: &str) -> Option<i64> {
        self.get(id).copied()
    }
}

/// Applies the active marker to a link container.
pub trait Highlighter {
    /// Marks `container` active and clears the marker from its siblings.
    fn activate(&mut self, container: NodeId);
}

impl Highlighter for Document {
    fn activate(&mut self, container: NodeId) {
        self.add_class(container, ACTIVE_CLASS);
        for sibling in self.siblings(container) {
            self.remove_class(sibling, ACTIVE_CLASS);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A navigation entry pointing at a section of the page.
pub struct NavLink {
    /// Fragment reference as written in the link, e.g. `#about`.
    pub hash: String,
    /// The link element itself.
    pub element: NodeId,
    /// Element whose class is toggled, normally the link's parent.
    pub container: Option<NodeId>,
}

impl NavLink {
    #[must_use]
    /// Builds a link descriptor from an `href` value.
    ///
    /// Only the fragment part is kept, so `page.html#about` and `#about` both target `about`.
    /// A reference without a fragment yields an empty hash, which never resolves.
    pub fn new(href: &str, element: NodeId, container: Option<NodeId>) -> Self {
        let hash = href
            .find('#')
            .map_or_else(String::new, |at| href[at..].to_string());
        Self {
            hash,
            element,
            container,
        }
    }

    #[must_use]
    /// Identifier of the target section, `None` when the fragment is empty.
    pub fn target_id(&self) -> Option<&str> {
        self.hash.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// Highlights the navigation link of the section currently scrolled into view.
pub struct ScrollSpy {
    links: Vec<NavLink>,
    margin: i64,
}

impl ScrollSpy {
    #[must_use]
    /// Creates a spy over explicit link descriptors.
    pub fn new(links: Vec<NavLink>, margin: i64) -> Self {
        Self { links, margin }
    }

    #[must_use]
    /// Collects every `page-scroll` element of `document`, in document order.
    pub fn from_document(document: &Document) -> Self {
        let links: Vec<NavLink> = document
            .elements_by_class(LINK_CLASS)
            .into_iter()
            .map(|node| {
                let href = document.element(node).href.as_deref().unwrap_or_default();
                NavLink::new(href, node, document.parent(node))
            })
            .collect();
        debug!(links = links.len(), "collected navigation links");
        Self::new(links, DEFAULT_MARGIN)
    }

    #[must_use]
    /// The links in processing order.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    #[must_use]
    /// Margin subtracted from each section offset.
    pub fn margin(&self) -> i64 {
        self.margin
    }

    #[must_use]
    /// Links whose section threshold is met at `scroll_top`, in processing order.
    ///
    /// Links whose target cannot be resolved are left out.
    pub fn reached<R: SectionResolver + ?Sized>(
        &self,
        resolver: &R,
        scroll_top: i64,
    ) -> Vec<&NavLink> {
        self.links
            .iter()
            .filter(|link| {
                let Some(offset) = link.target_id().and_then(|id| resolver.resolve(id)) else {
                    debug!(hash = %link.hash, "skipping link with unresolved target");
                    return false;
                };
                scroll_top >= offset.saturating_sub(self.margin)
            })
            .collect()
    }

    /// Handles one scroll event on a document that both holds the sections and the links.
    pub fn handle_scroll(&self, document: &mut Document, scroll_top: i64) {
        let containers: Vec<NodeId> = self
            .reached(&*document, scroll_top)
            .into_iter()
            .filter_map(|link| link.container)
            .collect();
        for container in containers {
            trace!(%container, scroll_top, "activating");
            document.activate(container);
        }
    }

    /// Handles one scroll event with separately supplied section lookup and highlighting.
    pub fn handle_scroll_with<R, H>(&self, resolver: &R, highlighter: &mut H, scroll_top: i64)
    where
        R: SectionResolver + ?Sized,
        H: Highlighter + ?Sized,
    {
        for link in self.reached(resolver, scroll_top) {
            if let Some(container) = link.container {
                trace!(hash = %link.hash, scroll_top, "activating");
                highlighter.activate(container);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/scroll_spy.rs"]
mod tests;

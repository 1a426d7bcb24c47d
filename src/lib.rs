//! scrollspy: scroll-driven highlighting of a documentation page's navigation.
//!
//! The [`scroll_spy`] module holds the highlighting logic itself. The rest of the crate builds
//! pages from markdown documentation and drives them from a terminal viewer.

pub mod app_state;
pub mod config;
pub mod dom;
pub mod error;
pub mod formats;
pub mod input;
pub mod page;
pub mod report;
pub mod scroll_spy;
pub mod section;
pub mod ui;

pub use dom::{Document, NodeId};
pub use error::{Error, Result};
pub use scroll_spy::{Highlighter, NavLink, ScrollSpy, SectionResolver};

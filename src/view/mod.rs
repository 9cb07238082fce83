//! View model
//!
//! Pure functions from loaded categories and an immutable view state to
//! what a front end displays. Nothing here touches the file system.

pub mod preview;

pub use preview::Preview;

use serde::Serialize;

use crate::config::DEFAULT_PREVIEW_LINES;
use crate::store::Categories;

/// Display parameters; a new state is built for every change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Live search text, matched case-insensitively
    pub query: String,
    /// Body lines shown inline per entry
    pub preview_lines: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            preview_lines: DEFAULT_PREVIEW_LINES,
        }
    }
}

impl ViewState {
    pub fn new(preview_lines: usize) -> Self {
        Self {
            query: String::new(),
            preview_lines,
        }
    }

    /// Same view with a different search query
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

/// A visible entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub title: String,
    pub body: String,
    pub preview: Preview,
}

/// A visible category with its matching entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub entries: Vec<EntryView>,
}

/// Compute the visible categories for a view state
///
/// Entries match when the query occurs in their title or body. With a
/// query, categories without a match are left out; without one, every
/// category is listed, empty ones included.
pub fn render(categories: &Categories, view: &ViewState) -> Vec<CategoryView> {
    let needle = view.needle();

    categories
        .iter()
        .filter_map(|(name, entries)| {
            let visible: Vec<EntryView> = entries
                .iter()
                .filter(|entry| entry.matches(&needle))
                .map(|entry| EntryView {
                    title: entry.title.clone(),
                    body: entry.body.clone(),
                    preview: Preview::of(&entry.body, view.preview_lines),
                })
                .collect();

            if visible.is_empty() && !needle.is_empty() {
                return None;
            }

            Some(CategoryView {
                name: name.clone(),
                entries: visible,
            })
        })
        .collect()
}

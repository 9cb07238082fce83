//! Cheat-sheet entries
//!
//! Plain data types for parsed category content. No file system or
//! rendering concerns here.

use serde::Serialize;

/// One documented command or note: a title line and its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// First line of the block (e.g. "git status")
    pub title: String,
    /// Remaining lines of the block joined with '\n', possibly empty
    pub body: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Build an entry from one block of non-blank lines
    ///
    /// Returns `None` for an empty block.
    pub fn from_block(lines: &[&str]) -> Option<Self> {
        let (title, rest) = lines.split_first()?;
        Some(Self {
            title: (*title).to_string(),
            body: rest.join("\n"),
        })
    }

    /// Case-insensitive substring match against title or body
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.body.to_lowercase().contains(needle)
    }
}

/// Write entries back into category file text
///
/// Each entry becomes its title line followed by its body, entries
/// separated by a single blank line. Bodies containing blank lines do not
/// survive a re-parse as one entry.
pub fn serialize_entries(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| {
            if entry.body.is_empty() {
                entry.title.clone()
            } else {
                format!("{}\n{}", entry.title, entry.body)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

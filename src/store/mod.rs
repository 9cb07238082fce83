//! Category Store
//!
//! File-backed storage of categories: one text file per category,
//! parsed into entries on load.

pub mod files;
pub mod memory;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::parser::Entry;

pub use files::{
    category_path, create_category, ensure_directory, load_all, load_all_with, read_category,
    save_category, validate_name,
};
pub use memory::CategoryStore;

/// Category name to its entries, ordered by name
pub type Categories = BTreeMap<String, Vec<Entry>>;

/// What to do with a category file that cannot be read as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Fail the whole load
    #[default]
    Strict,
    /// Log a warning and leave the category out
    SkipUnreadable,
}

/// Result of a directory load
#[derive(Debug)]
pub struct LoadReport {
    pub categories: Categories,
    /// Files left out under `LoadPolicy::SkipUnreadable`
    pub skipped: Vec<(PathBuf, StoreError)>,
}

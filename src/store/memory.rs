//! In-memory category store
//!
//! Holds the loaded categories for a front end and keeps them in step with
//! its own writes.

use std::path::{Path, PathBuf};

use log::debug;

use super::files::{self, validate_name};
use super::{Categories, LoadPolicy};
use crate::config::Config;
use crate::error::StoreResult;
use crate::parser::{Entry, parse_category};

/// Loaded categories plus the directory they came from
///
/// Writes go to disk first. Only after they succeed is the touched
/// category updated in memory, so a failed operation leaves the loaded
/// state as it was.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    dir: PathBuf,
    extension: String,
    policy: LoadPolicy,
    categories: Categories,
}

impl CategoryStore {
    /// Create an empty, not yet loaded store
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>, policy: LoadPolicy) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            policy,
            categories: Categories::new(),
        }
    }

    /// Ensure the configured directory exists and load it
    pub fn open(config: &Config) -> StoreResult<Self> {
        files::ensure_directory(&config.docs_dir)?;
        let mut store = Self::new(
            config.docs_dir.clone(),
            config.extension.clone(),
            config.load_policy(),
        );
        store.reload()?;
        Ok(store)
    }

    /// Re-read every category file from disk
    pub fn reload(&mut self) -> StoreResult<&Categories> {
        let report = files::load_all_with(&self.dir, &self.extension, self.policy)?;
        self.categories = report.categories;
        Ok(&self.categories)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Entries of one category
    pub fn get(&self, name: &str) -> Option<&[Entry]> {
        self.categories.get(name).map(|entries| entries.as_slice())
    }

    /// Find an entry by exact title within a category
    pub fn find_entry(&self, category: &str, title: &str) -> Option<&Entry> {
        self.get(category)?.iter().find(|entry| entry.title == title)
    }

    /// Raw file text of a category, for editing
    pub fn read_raw(&self, name: &str) -> StoreResult<String> {
        files::read_category(&self.dir, &self.extension, name)
    }

    /// Create an empty category, returning its normalized name
    pub fn create(&mut self, name: &str) -> StoreResult<String> {
        files::create_category(&self.dir, &self.extension, name)?;
        let name = validate_name(name)?;
        self.categories.insert(name.clone(), Vec::new());
        Ok(name)
    }

    /// Rename and overwrite a category, returning its normalized name
    pub fn save(&mut self, old_name: &str, new_name: &str, raw_text: &str) -> StoreResult<String> {
        files::save_category(&self.dir, &self.extension, old_name, new_name, raw_text)?;
        let old_name = validate_name(old_name)?;
        let new_name = validate_name(new_name)?;

        self.categories.remove(&old_name);
        let entries = parse_category(raw_text.trim_end());
        debug!(
            "Updated category '{}' in memory ({} entries)",
            new_name,
            entries.len()
        );
        self.categories.insert(new_name.clone(), entries);
        Ok(new_name)
    }
}

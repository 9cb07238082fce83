//! Cheatsheet
//!
//! A small, fast store for categorized command cheat-sheets kept as plain
//! text files.
//!
//! This library provides:
//! - Block parsing of category files into (title, body) entries
//! - A file-backed category store with create/rename/save
//! - Query filtering and inline previews over an immutable view state
//! - A terminal front end and configuration management

pub mod config;
pub mod error;
pub mod parser;
pub mod shell;
pub mod store;
pub mod view;

// Re-exports for clean public API
pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use parser::{Entry, parse_category, serialize_entries};
pub use store::{Categories, CategoryStore, create_category, load_all, save_category};
pub use view::{ViewState, render};

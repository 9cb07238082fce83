//! Terminal front end
//!
//! Runs one configured operation against the category store and writes
//! the result. Every store failure is returned to the caller; the store's
//! loaded state is never left half-updated.

pub mod output;
pub mod watch;

use std::io::{self, Read, Write};

use anyhow::{Context, Result, anyhow};

use crate::config::{Command, Config};
use crate::error::StoreError;
use crate::store::CategoryStore;
use crate::view::{ViewState, render};

/// Open the configured store and run the configured command on stdio
pub fn run(config: &Config) -> Result<()> {
    let mut store = CategoryStore::open(config)?;
    let view = ViewState::new(config.preview_lines);

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(
        &mut store,
        &view,
        &config.command,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Run one command against an open store
///
/// `input` supplies new category content for `edit` without `--file`.
pub fn execute<R: Read, W: Write>(
    store: &mut CategoryStore,
    view: &ViewState,
    command: &Command,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List { query, json } => {
            let view = view.with_query(query.clone().unwrap_or_default());
            let views = render(store.categories(), &view);
            if *json {
                output::write_json(out, &views)?;
            } else {
                output::write_listing(out, &views)?;
            }
        }
        Command::Show { category, title } => {
            if store.get(category).is_none() {
                return Err(StoreError::NotFound {
                    name: category.clone(),
                }
                .into());
            }
            let entry = store
                .find_entry(category, title)
                .ok_or_else(|| anyhow!("entry '{}' not found in category '{}'", title, category))?;
            writeln!(out, "{}", entry.title)?;
            if !entry.body.is_empty() {
                writeln!(out, "{}", entry.body)?;
            }
        }
        Command::Add { name } => {
            let name = store.create(name)?;
            writeln!(out, "Created category '{}'", name)?;
        }
        Command::Cat { name } => {
            let text = store.read_raw(name)?;
            write!(out, "{}", text)?;
            if !text.is_empty() && !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Command::Edit { name, rename, file } => {
            let content = match file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    input
                        .read_to_string(&mut buf)
                        .context("Failed to read category content from stdin")?;
                    buf
                }
            };
            let new_name = rename.as_deref().unwrap_or(name);
            let saved = store.save(name, new_name, &content)?;
            if saved != *name {
                writeln!(out, "Renamed category '{}' to '{}'", name, saved)?;
            }
            writeln!(out, "Saved category '{}'", saved)?;
        }
        Command::Watch { query } => {
            let view = view.with_query(query.clone().unwrap_or_default());
            watch::watch(store, &view, out)?;
        }
    }

    Ok(())
}

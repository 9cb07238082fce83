//! Live re-listing when category files change on disk.

use std::io::Write;
use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::{Context, Result};
use log::{error, info, warn};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::output::write_listing;
use crate::store::CategoryStore;
use crate::view::{ViewState, render};

/// Quiet period used to coalesce the bursts of events one save produces
const SETTLE_TIME: Duration = Duration::from_millis(200);

/// Whether an event touches a category file
pub fn is_category_event(event: &Event, ext: &str) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event
        .paths
        .iter()
        .any(|path| path.extension().and_then(|s| s.to_str()) == Some(ext))
}

/// Print the listing, then print it again after every category change
///
/// Blocks until the watcher shuts down.
pub fn watch<W: Write>(store: &mut CategoryStore, view: &ViewState, out: &mut W) -> Result<()> {
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();

    let mut watcher = RecommendedWatcher::new(
        tx,
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )
    .context("Failed to create category watcher")?;
    watch_dir(&mut watcher, store.dir())?;

    write_listing(out, &render(store.categories(), view))?;
    out.flush()?;

    relist_on_changes(store, view, &rx, out)
}

/// Reload and re-list for each category event until the channel closes
///
/// A failed reload is logged and the previous listing stays current.
pub fn relist_on_changes<W: Write>(
    store: &mut CategoryStore,
    view: &ViewState,
    rx: &Receiver<notify::Result<Event>>,
    out: &mut W,
) -> Result<()> {
    while let Ok(res) = rx.recv() {
        match res {
            Ok(event) if is_category_event(&event, store.extension()) => {
                while rx.recv_timeout(SETTLE_TIME).is_ok() {}

                info!("Category files changed: {:?}", event.paths);
                match store.reload() {
                    Ok(categories) => {
                        writeln!(out)?;
                        write_listing(out, &render(categories, view))?;
                        out.flush()?;
                    }
                    Err(e) => warn!("Reload failed, keeping previous categories: {}", e),
                }
            }
            Ok(_) => {}
            Err(e) => error!("Category watcher error: {}", e),
        }
    }

    Ok(())
}

fn watch_dir(watcher: &mut RecommendedWatcher, dir: &Path) -> Result<()> {
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch category directory: {}", dir.display()))
}

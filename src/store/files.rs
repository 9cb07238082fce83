//! File operations for category files
//!
//! Reading, creating, renaming and overwriting `<name>.<ext>` files in the
//! category directory. Every function here is a direct, synchronous file
//! system call sequence with no cached state.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::Regex;

use super::{Categories, LoadPolicy, LoadReport};
use crate::error::{StoreError, StoreResult};
use crate::parser::parse_category;

/// Printable characters only, no path separators
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/\\\x00-\x1F\x7F]+$").expect("valid name pattern"));

/// Validate a user-supplied category name, returning it trimmed
pub fn validate_name(name: &str) -> StoreResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation(
            "category name must not be empty".to_string(),
        ));
    }
    if name == "." || name == ".." || !NAME_RE.is_match(name) {
        return Err(StoreError::Validation(format!(
            "'{}' is not a valid category name",
            name
        )));
    }
    Ok(name.to_string())
}

/// Path of the file backing a category
pub fn category_path(dir: &Path, ext: &str, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, ext))
}

/// Category name for a path, if it carries the recognized extension
fn category_name(path: &Path, ext: &str) -> Option<String> {
    if path.extension().and_then(|s| s.to_str()) != Some(ext) {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Create the category directory if it does not exist yet
pub fn ensure_directory(dir: &Path) -> StoreResult<()> {
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))
}

/// Category files in `dir`, sorted by path
fn list_category_files(dir: &Path, ext: &str) -> StoreResult<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))? {
        let path = entry.map_err(|e| StoreError::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = category_name(&path, ext) {
            files.push((name, path));
        }
    }

    files.sort();
    Ok(files)
}

/// Load every category in `dir`, failing on the first unreadable file
pub fn load_all(dir: &Path, ext: &str) -> StoreResult<Categories> {
    load_all_with(dir, ext, LoadPolicy::Strict).map(|report| report.categories)
}

/// Load every category in `dir` under the given policy
pub fn load_all_with(dir: &Path, ext: &str, policy: LoadPolicy) -> StoreResult<LoadReport> {
    let mut categories = BTreeMap::new();
    let mut skipped = Vec::new();

    for (name, path) in list_category_files(dir, ext)? {
        match fs::read_to_string(&path) {
            Ok(text) => {
                let entries = parse_category(&text);
                debug!("Loaded category '{}' ({} entries)", name, entries.len());
                categories.insert(name, entries);
            }
            Err(e) => match policy {
                LoadPolicy::Strict => return Err(StoreError::io(path, e)),
                LoadPolicy::SkipUnreadable => {
                    warn!("Skipping unreadable category file {}: {}", path.display(), e);
                    skipped.push((path.clone(), StoreError::io(path, e)));
                }
            },
        }
    }

    info!(
        "Loaded {} categories from {}",
        categories.len(),
        dir.display()
    );

    Ok(LoadReport {
        categories,
        skipped,
    })
}

/// Create an empty category file
///
/// Fails without writing anything if the file already exists.
pub fn create_category(dir: &Path, ext: &str, name: &str) -> StoreResult<()> {
    let name = validate_name(name)?;
    let path = category_path(dir, ext, &name);

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => StoreError::AlreadyExists { name: name.clone() },
            _ => StoreError::io(&path, e),
        })?;

    info!("Created category '{}'", name);
    Ok(())
}

/// Read the raw text of a category file
pub fn read_category(dir: &Path, ext: &str, name: &str) -> StoreResult<String> {
    let name = validate_name(name)?;
    let path = category_path(dir, ext, &name);
    fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound { name: name.clone() },
        _ => StoreError::io(&path, e),
    })
}

/// Rename a category if needed, then replace its contents
///
/// The rename happens first and is refused when `new_name` is taken, in
/// which case neither file is touched. Trailing whitespace of `raw_text`
/// is trimmed before writing.
pub fn save_category(
    dir: &Path,
    ext: &str,
    old_name: &str,
    new_name: &str,
    raw_text: &str,
) -> StoreResult<()> {
    let old_name = validate_name(old_name)?;
    let new_name = validate_name(new_name)?;
    let old_path = category_path(dir, ext, &old_name);
    if !old_path.is_file() {
        return Err(StoreError::NotFound { name: old_name });
    }

    let target = if new_name != old_name {
        let new_path = category_path(dir, ext, &new_name);
        if new_path.exists() {
            return Err(StoreError::AlreadyExists { name: new_name });
        }
        fs::rename(&old_path, &new_path).map_err(|e| StoreError::io(&old_path, e))?;
        info!("Renamed category '{}' to '{}'", old_name, new_name);
        new_path
    } else {
        old_path
    };

    write_replace(dir, &target, raw_text.trim_end())?;
    info!("Saved category '{}'", new_name);
    Ok(())
}

/// Overwrite `path` through a temp file renamed into place
fn write_replace(dir: &Path, path: &Path, contents: &str) -> StoreResult<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".cheatsheet-")
        .tempfile_in(dir)
        .map_err(|e| StoreError::io(dir, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
    }

    tmp.write_all(contents.as_bytes())
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  git  ").unwrap(), "git");
        assert_eq!(validate_name("docker compose").unwrap(), "docker compose");
        assert!(matches!(validate_name(""), Err(StoreError::Validation(_))));
        assert!(matches!(validate_name("   "), Err(StoreError::Validation(_))));
        assert!(matches!(validate_name(".."), Err(StoreError::Validation(_))));
        assert!(matches!(validate_name("a/b"), Err(StoreError::Validation(_))));
        assert!(matches!(validate_name("a\\b"), Err(StoreError::Validation(_))));
        assert!(matches!(validate_name("a\tb"), Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_category_name_requires_extension() {
        assert_eq!(
            category_name(Path::new("docs/git.txt"), "txt"),
            Some("git".to_string())
        );
        assert_eq!(
            category_name(Path::new("docs/v1.2.txt"), "txt"),
            Some("v1.2".to_string())
        );
        assert_eq!(category_name(Path::new("docs/git.md"), "txt"), None);
        assert_eq!(category_name(Path::new("docs/README"), "txt"), None);
    }

    #[test]
    fn test_load_ignores_other_files_and_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("git.txt"), "git status\nStatus.").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let categories = load_all(dir.path(), "txt").unwrap();
        assert_eq!(categories.keys().collect::<Vec<_>>(), vec!["git"]);
    }

    #[test]
    fn test_write_replace_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("git.txt");
        fs::write(&path, "old").unwrap();

        write_replace(dir.path(), &path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_read_missing_category() {
        let dir = tempdir().unwrap();
        let err = read_category(dir.path(), "txt", "nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { name } if name == "nope"));
    }
}

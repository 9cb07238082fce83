//! Tests for layering CLI, environment and config files
use std::fs;
use std::path::PathBuf;

use cheatsheet::config::{Args, Config, PROJECT_CONFIG_FILE};
use cheatsheet::store::{CategoryStore, LoadPolicy};
use clap::Parser;
use tempfile::tempdir;

fn args(argv: &[&str]) -> Args {
    Args::parse_from(std::iter::once("cheatsheet").chain(argv.iter().copied()))
}

#[test]
fn test_project_config_is_used() {
    let project = tempdir().unwrap();
    fs::write(
        project.path().join(PROJECT_CONFIG_FILE),
        "docs_dir = \"sheets\"\nextension = \"sheet\"\npreview_lines = 4\n",
    )
    .unwrap();

    let config = Config::resolve(args(&[]), None, project.path(), None).expect("config");

    assert!(config.has_project_config());
    assert_eq!(config.docs_dir, PathBuf::from("sheets"));
    assert_eq!(config.extension, "sheet");
    assert_eq!(config.preview_lines, 4);
}

#[test]
fn test_precedence_cli_env_project_user() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    let user_config = user.path().join("config.toml");
    fs::write(
        project.path().join(PROJECT_CONFIG_FILE),
        "docs_dir = \"project-docs\"\n",
    )
    .unwrap();
    fs::write(
        &user_config,
        "docs_dir = \"user-docs\"\nextension = \"md\"\nskip_unreadable = true\n",
    )
    .unwrap();

    let from_files =
        Config::resolve(args(&[]), None, project.path(), Some(&user_config)).unwrap();
    assert_eq!(from_files.docs_dir, PathBuf::from("project-docs"));
    assert_eq!(from_files.extension, "md");
    assert_eq!(from_files.load_policy(), LoadPolicy::SkipUnreadable);

    let from_env = Config::resolve(
        args(&[]),
        Some(PathBuf::from("env-docs")),
        project.path(),
        Some(&user_config),
    )
    .unwrap();
    assert_eq!(from_env.docs_dir, PathBuf::from("env-docs"));

    let from_cli = Config::resolve(
        args(&["--docs-dir", "cli-docs", "--extension", "txt"]),
        Some(PathBuf::from("env-docs")),
        project.path(),
        Some(&user_config),
    )
    .unwrap();
    assert_eq!(from_cli.docs_dir, PathBuf::from("cli-docs"));
    assert_eq!(from_cli.extension, "txt");
}

#[test]
fn test_open_creates_missing_directory() {
    let root = tempdir().unwrap();
    let docs = root.path().join("docs");

    let config = Config::resolve(
        args(&["--docs-dir", docs.to_str().unwrap()]),
        None,
        root.path(),
        None,
    )
    .unwrap();
    let store = CategoryStore::open(&config).expect("open store");

    assert!(docs.is_dir());
    assert!(store.categories().is_empty());
}

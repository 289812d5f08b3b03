#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly, validates its
//! input, and fails fast without touching any backend.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn polyglot(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("DEEPL_FREE_API_KEY")
        .env_remove("DEEPL_API_KEY")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Translate a UI string into every catalog language",
        ))
        .stdout(predicate::str::contains("--backend"))
        .stdout(predicate::str::contains("--languages"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: polyglot"))
        .stdout(predicate::str::contains("de:Some German text to translate"));
}

#[test]
fn test_usage_mentions_missing_trans() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("polyglot");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[trans]\ncommand = \"/nonexistent/bin/trans\"\n",
    )
    .unwrap();

    polyglot(&home)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is not installed"));
}

#[test]
fn test_missing_credentials_fails() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .args(["Hello", "world"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("DEEPL_FREE_API_KEY"))
        .stderr(predicate::str::contains("DEEPL_API_KEY"))
        .stderr(predicate::str::contains("https://www.deepl.com/pro#developer"));
}

#[test]
fn test_empty_credentials_fail() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .env("DEEPL_FREE_API_KEY", "")
        .args(["--backend", "deepl", "Hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DEEPL_FREE_API_KEY"));
}

#[test]
fn test_languages_list_google() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .arg("--languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Google target languages"))
        .stdout(predicate::str::contains("zh-Hant"))
        .stdout(predicate::str::contains("[requested as zh-TW]"))
        .stdout(predicate::str::contains("es-MX"));
}

#[test]
fn test_languages_list_deepl() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .args(["--languages", "--backend", "deepl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DeepL target languages"))
        .stdout(predicate::str::contains("[requested as pt-PT]"))
        .stdout(predicate::str::contains("[requested as en-US]"));
}

#[test]
fn test_languages_list_combined() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .args(["--languages", "--backend", "combined"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DeepL target languages (catalog code, name)\n",
        ))
        .stdout(predicate::str::contains(
            "\nGoogle target languages (catalog code, name)\n",
        ));
}

#[test]
fn test_languages_uses_config_backend() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("polyglot");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[polyglot]\nbackend = \"deepl\"\n",
    )
    .unwrap();

    polyglot(&home)
        .arg("--languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("DeepL target languages"));
}

#[test]
fn test_invalid_backend() {
    let home = TempDir::new().unwrap();
    polyglot(&home)
        .args(["--backend", "bing", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_broken_config_file_fails() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("polyglot");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[polyglot\n").unwrap();

    polyglot(&home)
        .env("DEEPL_API_KEY", "test-key")
        .arg("Hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

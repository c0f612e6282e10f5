//! Integration tests for the quotary CLI

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod common;
use common::quotary_cmd;

fn quotes_file(temp: &TempDir) -> PathBuf {
    temp.path().join("quotes.xml")
}

#[test]
fn test_list_without_a_file_shows_the_builtin_quotes() {
    let temp = TempDir::new().unwrap();

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eleanor Roosevelt"))
        .stdout(predicate::str::contains("William Shakespeare"))
        .stdout(predicate::str::contains("Winston Churchill"))
        .stdout(predicate::str::contains("Ralph Waldo Emerson"))
        .stdout(predicate::str::contains("William Arthur Ward"));
}

#[test]
fn test_bare_invocation_defaults_to_list() {
    let temp = TempDir::new().unwrap();

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .assert()
        .success()
        .stdout(predicate::str::contains("Eleanor Roosevelt"));
}

#[test]
fn test_listing_does_not_create_the_file() {
    let temp = TempDir::new().unwrap();

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("list")
        .assert()
        .success();

    assert!(!quotes_file(&temp).exists());
}

#[test]
fn test_add_appends_and_saves() {
    let temp = TempDir::new().unwrap();

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("add")
        .arg("Mark Twain")
        .arg("Get busy living.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added quote #6"));

    assert!(quotes_file(&temp).exists());

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Get busy living. (Mark Twain)"))
        .stdout(predicate::str::contains("Eleanor Roosevelt"));
}

#[test]
fn test_remove_persists_the_smaller_collection() {
    let temp = TempDir::new().unwrap();

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("remove")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed quote #1"));

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eleanor Roosevelt").not())
        .stdout(predicate::str::contains("William Shakespeare"));
}

#[test]
fn test_remove_out_of_range_fails() {
    let temp = TempDir::new().unwrap();

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("remove")
        .arg("99")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No quote at position 99"));
}

#[test]
fn test_say_out_of_range_fails() {
    let temp = TempDir::new().unwrap();

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("say")
        .arg("99")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No quote at position 99"));
}

#[test]
fn test_corrupt_file_degrades_to_the_builtin_quotes() {
    let temp = TempDir::new().unwrap();
    fs::write(quotes_file(&temp), "<quotes><quote author=\"A\">broken").unwrap();

    quotary_cmd(temp.path())
        .arg("--file")
        .arg(quotes_file(&temp))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eleanor Roosevelt"));
}

#[test]
fn test_config_file_can_point_at_the_quotes_file() {
    let temp = TempDir::new().unwrap();
    let quotes_path = temp.path().join("elsewhere.xml");

    let config_dir = temp.path().join(".config").join("quotary");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!("quotes_file = \"{}\"\n", quotes_path.display()),
    )
    .unwrap();

    quotary_cmd(temp.path())
        .arg("add")
        .arg("Mark Twain")
        .arg("Get busy living.")
        .assert()
        .success();

    assert!(quotes_path.exists());
}

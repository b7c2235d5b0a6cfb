use crate::cli::support::{fixture_words, stdout_json, TestEnv};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_config_show_defaults() {
    let env = TestEnv::new();
    env.bare()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexicon = (unset)"))
        .stdout(predicate::str::contains("format = (unset)"));
}

#[test]
fn test_config_set_lexicon_is_used_by_search() {
    let env = TestEnv::new();
    env.bare()
        .arg("config")
        .arg("set-lexicon")
        .arg(fixture_words())
        .assert()
        .success();

    let saved: toml::Table = toml::from_str(&fs::read_to_string(env.config_file()).unwrap()).unwrap();
    assert_eq!(
        saved["lexicon"].as_str(),
        Some(fixture_words().to_str().unwrap())
    );

    env.bare()
        .args(["--quiet", "search", "cat", "dog"])
        .assert()
        .success()
        .stdout("cat -> bat -> bot -> bog -> dog\n");
}

#[test]
fn test_config_set_format_is_default() {
    let env = TestEnv::new();
    env.bare()
        .args(["config", "set-format", "json"])
        .assert()
        .success();

    let output = env.cmd().args(["search", "at", "at"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "word_not_in_lexicon");

    let output = env.cmd().args(["search", "aa", "ba"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["count"], 1);
}

#[test]
fn test_flag_overrides_config_format() {
    let env = TestEnv::new();
    env.bare()
        .args(["config", "set-format", "json"])
        .assert()
        .success();

    env.cmd()
        .args(["--format", "human", "--quiet", "search", "aa", "ba"])
        .assert()
        .success()
        .stdout("aa -> ba\n");
}

#[test]
fn test_config_set_format_rejects_unknown() {
    let env = TestEnv::new();
    env.bare()
        .args(["config", "set-format", "yaml"])
        .assert()
        .code(2);
    assert!(!env.config_file().exists());
}

#[test]
fn test_config_set_format_output_follows_flag() {
    let env = TestEnv::new();
    env.bare()
        .args(["config", "set-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Set format = json in "));

    env.bare()
        .args(["--format", "records", "config", "set-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wordladder=1 records=1 mode=config.set ",
        ))
        .stdout(predicate::str::contains("format=json"));

    env.bare()
        .args(["--format", "human", "config", "set-format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Set format = records in "));
}

#[test]
fn test_malformed_config_only_fails_commands_that_read_it() {
    let env = TestEnv::new();
    fs::write(env.config_file(), "format = [").unwrap();

    env.cmd()
        .args(["--quiet", "search", "aa", "ba"])
        .assert()
        .success()
        .stdout("aa -> ba\n");

    env.bare()
        .args(["search", "aa", "ba"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));

    env.bare()
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_config_set_repairs_malformed_config() {
    let env = TestEnv::new();
    fs::write(env.config_file(), "format = [").unwrap();

    env.bare()
        .args(["config", "set-format", "json"])
        .assert()
        .success();

    let saved: toml::Table = toml::from_str(&fs::read_to_string(env.config_file()).unwrap()).unwrap();
    assert_eq!(saved["format"].as_str(), Some("json"));

    env.bare()
        .args(["--format", "human", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format = json"));
}

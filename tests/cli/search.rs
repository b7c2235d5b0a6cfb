use crate::cli::support::{stdout_json, TestEnv};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Human output
// ============================================================================

#[test]
fn test_search_single_ladder() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "cat", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat -> bat -> bot -> bog -> dog"))
        .stdout(predicate::str::contains("1 ladder (4 steps)"));
}

#[test]
fn test_search_one_step_summary() {
    let env = TestEnv::new();
    env.bare()
        .args(["--lexicon", "-", "search", "cat", "bat"])
        .write_stdin("cat bat")
        .assert()
        .success()
        .stdout("cat -> bat\n\n1 ladder (1 step)\n");
}

#[test]
fn test_search_all_shortest_ladders() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["--quiet", "search", "work", "play"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(
        lines[0],
        "work -> fork -> form -> foam -> flam -> flay -> play"
    );
    assert_eq!(
        lines[11],
        "work -> wort -> wert -> pert -> peat -> plat -> play"
    );

    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(sorted, lines);
}

#[test]
fn test_search_no_ladder_is_not_an_error() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "airplane", "tricycle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No ladder found from 'airplane' to 'tricycle'",
        ));
}

#[test]
fn test_search_same_word() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--quiet", "search", "cat", "cat"])
        .assert()
        .success()
        .stdout("cat\n");
}

#[test]
fn test_search_limit_keeps_total_count() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "work", "play", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 of 12 ladders (6 steps)"))
        .stdout(predicate::str::contains("work -> pork").count(1));
}

#[test]
fn test_search_limit_zero_is_usage_error() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "work", "play", "--limit", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid --limit: 0"));
}

// ============================================================================
// Validation and exit codes
// ============================================================================

#[test]
fn test_search_word_not_in_lexicon_exit_code_3() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "cat", "cow"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("word not in lexicon: cow"));
}

#[test]
fn test_search_length_mismatch_exit_code_3() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "cat", "work"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("length mismatch"));
}

#[test]
fn test_search_missing_lexicon_file_exit_code_1() {
    let env = TestEnv::new();
    env.bare()
        .args(["--lexicon", "/nonexistent/words.txt", "search", "cat", "dog"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open lexicon"));
}

#[test]
fn test_search_without_lexicon_exit_code_3() {
    let env = TestEnv::new();
    env.bare()
        .args(["search", "cat", "dog"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no lexicon given"));
}

#[test]
fn test_search_quiet_suppresses_errors() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--quiet", "search", "cat", "cow"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Lexicon sources
// ============================================================================

#[test]
fn test_search_lexicon_from_stdin() {
    let env = TestEnv::new();
    env.bare()
        .args(["--lexicon", "-", "--quiet", "search", "hit", "log"])
        .write_stdin("hit hot dot dog cog\nlog lot hog\n")
        .assert()
        .success()
        .stdout("hit -> hot -> hog -> log\nhit -> hot -> lot -> log\n");
}

#[test]
fn test_search_lexicon_from_env() {
    let env = TestEnv::new();
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "at\nit\n").unwrap();

    env.bare()
        .env("WORDLADDER_LEXICON", &path)
        .args(["--quiet", "search", "at", "it"])
        .assert()
        .success()
        .stdout("at -> it\n");
}

// ============================================================================
// Structured output
// ============================================================================

#[test]
fn test_search_json_output() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["--format", "json", "search", "awake", "sleep"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["from"], "awake");
    assert_eq!(json["to"], "sleep");
    assert_eq!(json["steps"], 9);
    assert_eq!(json["count"], 2);
    let ladders = json["ladders"].as_array().unwrap();
    assert_eq!(ladders.len(), 2);
    assert_eq!(ladders[0][4], "sharn");
    assert_eq!(ladders[1][4], "shire");
}

#[test]
fn test_search_json_no_ladder() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["--format", "json", "search", "airplane", "tricycle"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert!(json["steps"].is_null());
    assert_eq!(json["count"], 0);
    assert_eq!(json["ladders"].as_array().unwrap().len(), 0);
}

#[test]
fn test_search_json_error_envelope() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["--format", "json", "search", "cat", "cow"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "word_not_in_lexicon");
    assert_eq!(json["error"]["message"], "word not in lexicon: cow");
}

#[test]
fn test_search_records_output() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--format", "records", "search", "work", "play", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wordladder=1 records=1 mode=search from=work to=play ladders=12 length=6 truncated=true\n",
        ))
        .stdout(predicate::str::contains(
            "L 1 work fork form foam flam flay play\n",
        ))
        .stdout(predicate::str::contains("L 2").not());
}

#[test]
fn test_search_records_no_ladder() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--format", "records", "search", "airplane", "tricycle"])
        .assert()
        .success()
        .stdout(
            "H wordladder=1 records=1 mode=search from=airplane to=tricycle ladders=0 length=none truncated=false\n",
        );
}

//! Runs the `wordtracker` binary end to end against a scratch directory.
#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn wordtracker(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordtracker"))
        .current_dir(dir)
        .env_remove("WORDTRACKER_REPOSITORY")
        .args(args)
        .output()
        .expect("run wordtracker")
}

#[test]
fn reports_words_in_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "The cat sat.\nThe dog sat!\n").unwrap();

    let output = wordtracker(dir.path(), &["a.txt", "-pl"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Key : ===cat===  found in file:  a.txt  on lines: 1",
            "Key : ===dog===  found in file:  a.txt  on lines: 2",
            "Key : ===sat===  found in file:  a.txt  on lines: 1, 2",
            "Key : ===the===  found in file:  a.txt  on lines: 1, 2",
        ]
    );
    assert!(dir.path().join("repository.json").exists());
}

#[test]
fn repository_accumulates_across_runs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "red fish\n").unwrap();
    fs::write(dir.path().join("b.txt"), "blue\nfish\n").unwrap();

    assert!(wordtracker(dir.path(), &["a.txt", "-pf"]).status.success());
    let output = wordtracker(dir.path(), &["b.txt", "-po", "-f", "report.txt"]);
    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Output file generated."));

    let report = fs::read_to_string(dir.path().join("report.txt")).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "Key : ===blue===   number of entries: 1  found in file:  b.txt  on lines: 1",
            "Key : ===fish===   number of entries: 2  found in file:  a.txt  on lines: 1  found in file:  b.txt  on lines: 2",
            "Key : ===red===   number of entries: 1  found in file:  a.txt  on lines: 1",
        ]
    );
}

#[test]
fn custom_repository_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "word\n").unwrap();

    let output = wordtracker(
        dir.path(),
        &["a.txt", "-pf", "--repository", "store/words.json"],
    );
    assert!(output.status.success(), "{:?}", output);
    assert!(dir.path().join("store").join("words.json").exists());
    assert!(!dir.path().join("repository.json").exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();

    let output = wordtracker(dir.path(), &["absent.txt", "-pf"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.txt"));
}

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const ROADMAP: &str = r#"<html><body>
    <p><span id="Version_1.2">1.2</span></p>
    <div>
        <h3 id="Release_Notes_x">Release Notes</h3>
        <p>Fixed a bug.</p>
    </div>
    <p><span id="Version_1.3">1.3</span></p>
</body></html>"#;

fn write_fixtures(dir: &Path, changelog: &str) {
    fs::write(dir.join("roadmap.html"), ROADMAP).unwrap();
    fs::write(dir.join("ChangeLog"), changelog).unwrap();
}

fn reap() -> Command {
    Command::cargo_bin("reap").unwrap()
}

#[test]
fn test_prepends_entry_to_changelog() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), "old content\n");

    reap()
        .current_dir(dir.path())
        .args(["roadmap.html", "1.2"])
        .assert()
        .success();

    let updated = fs::read_to_string(dir.path().join("ChangeLog")).unwrap();
    assert_eq!(
        updated,
        " ==================== Neu in 1.2 ====================\n\n    Fixed a bug.\n\nold content\n"
    );
}

#[test]
fn test_no_match_rewrites_identically() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), "nothing to see\n");

    reap()
        .current_dir(dir.path())
        .args(["roadmap.html", "9.9"])
        .assert()
        .success();

    let updated = fs::read_to_string(dir.path().join("ChangeLog")).unwrap();
    assert_eq!(updated, "nothing to see\n");
}

#[test]
fn test_double_run_duplicates_entry() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), "old content\n");

    for _ in 0..2 {
        reap()
            .current_dir(dir.path())
            .args(["roadmap.html", "1.2"])
            .assert()
            .success();
    }

    let updated = fs::read_to_string(dir.path().join("ChangeLog")).unwrap();
    assert_eq!(updated.matches("Neu in 1.2").count(), 2);
    assert!(updated.ends_with("old content\n"));
}

#[test]
fn test_missing_roadmap_fails_without_touching_changelog() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ChangeLog"), "untouched\n").unwrap();

    reap()
        .current_dir(dir.path())
        .args(["absent.html", "1.2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("roadmap"));

    let content = fs::read_to_string(dir.path().join("ChangeLog")).unwrap();
    assert_eq!(content, "untouched\n");
}

#[test]
fn test_missing_changelog_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("roadmap.html"), ROADMAP).unwrap();

    reap()
        .current_dir(dir.path())
        .args(["roadmap.html", "1.2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("changelog"));
}

#[test]
fn test_requires_both_positional_arguments() {
    reap().arg("roadmap.html").assert().failure();
}

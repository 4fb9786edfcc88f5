//! End-to-end tests for the `deploycheck-scaffold` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn scaffold(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("deploycheck-scaffold").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_scaffold_is_idempotent() {
    let dir = TempDir::new().unwrap();

    scaffold(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created folder: ./angelsuccess-cybersecurity",
        ))
        .stdout(predicate::str::contains("Created file: "))
        .stdout(predicate::str::contains(
            "Project structure created successfully!",
        ));

    assert!(dir
        .path()
        .join("angelsuccess-cybersecurity/templates/system_settings.html")
        .is_file());

    scaffold(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not())
        .stdout(predicate::str::contains(
            "Project structure created successfully!",
        ));
}

#[test]
fn test_scaffold_keeps_existing_content() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("angelsuccess-cybersecurity");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("requirements.txt"), "flask==3.0\n").unwrap();

    scaffold(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created folder: ./angelsuccess-cybersecurity\n").not());

    assert_eq!(
        fs::read_to_string(root.join("requirements.txt")).unwrap(),
        "flask==3.0\n"
    );
}

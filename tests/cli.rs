//! End-to-end tests for the metasync binary
//!
//! Each test lays out a small Python project in a temp directory and runs the
//! binary against it with `--root`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PYPROJECT: &str = r#"[project]
name = "lango"
version = "1.2.3"
description = "Keep this line"
dependencies = [
    "old==1",
]

[project.optional-dependencies]
test = [
    "pytest==7.0",
]
"#;

fn metasync(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("metasync").unwrap();
    cmd.arg("--root").arg(root);
    cmd
}

fn create_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pyproject.toml"), PYPROJECT).unwrap();
    fs::create_dir_all(temp_dir.path().join("src/lango")).unwrap();
    fs::write(
        temp_dir.path().join("src/lango/__init__.py"),
        "\"\"\"Lango.\"\"\"\n\n__version__ = \"1.0.0\"  # old comment\n",
    )
    .unwrap();
    temp_dir
}

#[test]
fn requirements_sync_rewrites_arrays() {
    let project = create_project();
    fs::write(project.path().join("requirements.txt"), "# runtime\nnew==2\n").unwrap();
    fs::write(
        project.path().join("requirements-dev.txt"),
        "-r requirements.txt\npytest==8.1\nruff\n",
    )
    .unwrap();

    metasync(project.path())
        .arg("requirements")
        .assert()
        .success()
        .stdout(predicate::str::contains("Synced requirements to pyproject.toml"));

    let content = fs::read_to_string(project.path().join("pyproject.toml")).unwrap();
    let expected = PYPROJECT
        .replace("    \"old==1\",", "    \"new==2\",")
        .replace("    \"pytest==7.0\",", "    \"pytest==8.1\",\n    \"ruff\",");
    assert_eq!(content, expected);
}

#[test]
fn requirements_sync_second_run_is_in_sync() {
    let project = create_project();
    fs::write(project.path().join("requirements.txt"), "b==2\na==1\n").unwrap();

    metasync(project.path()).arg("requirements").assert().success();
    let first = fs::read_to_string(project.path().join("pyproject.toml")).unwrap();
    assert!(first.contains("dependencies = [\n    \"b==2\",\n    \"a==1\",\n]"));

    metasync(project.path())
        .arg("requirements")
        .assert()
        .success()
        .stdout(predicate::str::contains("pyproject.toml already in sync"));

    let second = fs::read_to_string(project.path().join("pyproject.toml")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn requirements_sync_comment_only_files_leave_pyproject_alone() {
    let project = create_project();
    fs::write(project.path().join("requirements.txt"), "# nothing yet\n\n").unwrap();
    fs::write(project.path().join("requirements-dev.txt"), "-e .\n").unwrap();

    metasync(project.path())
        .arg("requirements")
        .assert()
        .success()
        .stdout(predicate::str::contains("already in sync"));

    let content = fs::read_to_string(project.path().join("pyproject.toml")).unwrap();
    assert_eq!(content, PYPROJECT);
}

#[test]
fn requirements_sync_without_pyproject_fails() {
    let temp_dir = TempDir::new().unwrap();

    metasync(temp_dir.path())
        .arg("requirements")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pyproject.toml not found"));
}

#[test]
fn version_sync_updates_init_file() {
    let project = create_project();

    metasync(project.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Synced __version__ from pyproject.toml"));

    let init = fs::read_to_string(project.path().join("src/lango/__init__.py")).unwrap();
    assert_eq!(
        init,
        "\"\"\"Lango.\"\"\"\n\n__version__ = \"1.2.3\"  # modify in pyproject.toml\n"
    );

    metasync(project.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("__version__ already in sync"));
}

#[test]
fn version_sync_without_version_fails_and_leaves_init() {
    let project = create_project();
    fs::write(project.path().join("pyproject.toml"), "[project]\nname = \"lango\"\n").unwrap();

    metasync(project.path())
        .arg("version")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not find version"));

    let init = fs::read_to_string(project.path().join("src/lango/__init__.py")).unwrap();
    assert!(init.contains("__version__ = \"1.0.0\"  # old comment"));
}

#[test]
fn version_sync_without_init_file_fails() {
    let project = create_project();
    fs::remove_file(project.path().join("src/lango/__init__.py")).unwrap();

    metasync(project.path())
        .arg("version")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("src/lango/__init__.py not found"));
}

#[test]
fn version_sync_init_without_assignment_is_not_an_error() {
    let project = create_project();
    fs::write(project.path().join("src/lango/__init__.py"), "from .core import run\n").unwrap();

    metasync(project.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("already in sync"));

    let init = fs::read_to_string(project.path().join("src/lango/__init__.py")).unwrap();
    assert_eq!(init, "from .core import run\n");
}

#[test]
fn version_sync_custom_init_file() {
    let project = create_project();
    fs::create_dir_all(project.path().join("pkg")).unwrap();
    fs::write(project.path().join("pkg/__init__.py"), "__version__ = \"0.0.1\"\n").unwrap();

    metasync(project.path())
        .args(["version", "--init-file", "pkg/__init__.py"])
        .assert()
        .success();

    let init = fs::read_to_string(project.path().join("pkg/__init__.py")).unwrap();
    assert_eq!(init, "__version__ = \"1.2.3\"  # modify in pyproject.toml\n");
}

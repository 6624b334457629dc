//! CLI integration tests using the pre-built `ov2` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const SPRITES: &str = r#"spriteTypes = {
    spriteType = { name = "GFX_topbar_bg" texturefile = "gfx/interface/topbar.dds" }
}"#;

const WIDGETS: &str = r#"guiTypes = {
    windowType = {
        name = "topbar"
        size = { x = 800 y = 60 }
        iconType = { name = "topbar_bg" spriteType = "GFX_topbar_bg" }
        guiButtonType = { name = "menu_button" }
    }
}"#;

fn interface_dir() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("core.gfx"), SPRITES).unwrap();
    fs::write(dir.path().join("topbar.gui"), WIDGETS).unwrap();
    dir
}

fn ov2(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ov2"));
    cmd.arg("--interface-dir").arg(dir);
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ov2"));
    cmd.arg("--help").assert().success();
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ov2"));
    cmd.arg("--version").assert().success();
}

#[test]
fn test_check_prints_counts() {
    let dir = interface_dir();
    ov2(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(contains("files: 2"))
        .stdout(contains("sprites: 1"))
        .stdout(contains("widgets: 1 (3 including children)"));
}

#[test]
fn test_syntax_error_fails_the_run() {
    let dir = interface_dir();
    fs::write(
        dir.path().join("broken.gui"),
        "guiTypes = {\n  iconType = { name = \"x\" size = { x = 1 y = 1 } }\n}",
    )
    .unwrap();

    ov2(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("Syntax error in"))
        .stderr(contains("broken.gui:2:32: Unknown property 'size' for iconType."));
}

#[test]
fn test_keep_going_skips_broken_files() {
    let dir = interface_dir();
    fs::write(dir.path().join("broken.gui"), "guiTypes = { iconType = {").unwrap();

    ov2(dir.path())
        .args(["--keep-going", "check"])
        .assert()
        .success()
        .stdout(contains("files: 2"))
        .stdout(contains("failed: "));
}

#[test]
fn test_dump_to_file() {
    let dir = interface_dir();
    let output = dir.path().join("dump.json");

    ov2(dir.path())
        .arg("dump")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let json = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sprites"][0]["name"], "GFX_topbar_bg");
    assert_eq!(value["sprites"][0]["type"], "spriteType");
    assert_eq!(value["widgets"][0]["children"][1]["name"], "menu_button");
}

#[test]
fn test_lookup_finds_nested_widget() {
    let dir = interface_dir();
    ov2(dir.path())
        .args(["lookup", "menu_button"])
        .assert()
        .success()
        .stdout(contains("\"guiButtonType\""))
        .stdout(contains("\"sprite\": null"));
}

#[test]
fn test_lookup_missing_name_fails() {
    let dir = interface_dir();
    ov2(dir.path())
        .args(["lookup", "no_such_thing"])
        .assert()
        .failure()
        .stderr(contains("No sprite or widget named 'no_such_thing'"));
}

#[test]
fn test_tree_indents_children() {
    let dir = interface_dir();
    ov2(dir.path())
        .arg("tree")
        .assert()
        .success()
        .stdout(
            contains("windowType topbar\n")
                .and(contains("  iconType topbar_bg\n"))
                .and(contains("  guiButtonType menu_button\n")),
        );
}

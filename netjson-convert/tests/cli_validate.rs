use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

#[test]
fn validate_accepts_fixture() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netjson-convert"));
    cmd.arg("validate")
        .arg(fixture("fixtures/openwrt-router.json"))
        .arg("--backend")
        .arg("openwrt")
        .assert()
        .success()
        .stdout(predicate::str::contains("valid backend=openwrt"));
}

#[test]
fn validate_reports_missing_item_field() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netjson-convert"));
    cmd.arg("validate")
        .arg(fixture("fixtures/invalid-interfaces.json"))
        .arg("--backend")
        .arg("raspbian")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid raspbian document"))
        .stderr(predicate::str::contains(
            "interfaces[0] is missing required field 'name'",
        ));
}

#[test]
fn validate_rejects_wrong_kind() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("device.json");
    fs::write(&input, r#"{"dns_servers": "8.8.8.8"}"#).expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netjson-convert"));
    cmd.arg("validate")
        .arg(path_as_str(&input))
        .arg("--backend")
        .arg("openwrt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dns_servers"));
}

#[test]
fn validate_does_not_run_converters() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("device.json");
    fs::write(
        &input,
        r#"{"interfaces": [{"name": "wlan0", "type": "wireless",
            "wireless": {"radio": "missing", "mode": "station"}}]}"#,
    )
    .expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netjson-convert"));
    cmd.arg("validate")
        .arg(path_as_str(&input))
        .arg("--backend")
        .arg("openwrt")
        .assert()
        .success();
}

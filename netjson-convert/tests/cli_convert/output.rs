use super::*;

#[test]
fn convert_writes_json_output_file() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("blocks.json");

    netjson_convert()
        .arg("convert")
        .arg(fixture("fixtures/zerotier-networks.json"))
        .arg("--backend")
        .arg("zerotier")
        .arg("--output")
        .arg(path_as_str(&output))
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend=zerotier"))
        .stdout(predicate::str::contains("wrote"));

    let written = fs::read_to_string(&output).expect("read output");
    let dump: serde_json::Value = serde_json::from_str(&written).expect("json");
    let blocks = dump[0]["blocks"].as_array().expect("blocks");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1]["name"], "lab_net");
    assert_eq!(blocks[1]["options"]["id"], "1c33c1ced0000000");
}

#[test]
fn convert_refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("device.json");
    fs::write(&input, r#"{"zerotier": [{"name": "lab"}]}"#).expect("write");

    netjson_convert()
        .arg("convert")
        .arg(path_as_str(&input))
        .arg("--backend")
        .arg("zerotier")
        .arg("--output")
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite input document"));

    assert_eq!(
        fs::read_to_string(&input).expect("read"),
        r#"{"zerotier": [{"name": "lab"}]}"#
    );
}

#[test]
fn convert_uses_settings_file() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("device.json");
    let settings = dir.path().join("settings.toml");
    fs::write(&input, r#"{"general": {"timezone": "UTC"}}"#).expect("write");
    fs::write(&settings, "[openwrt]\ndefault_hostname = \"edge-7\"\n").expect("write");

    netjson_convert()
        .arg("convert")
        .arg(path_as_str(&input))
        .arg("--backend")
        .arg("openwrt")
        .arg("--settings")
        .arg(path_as_str(&settings))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hostname\": \"edge-7\""));
}

#[test]
fn convert_fails_on_broken_settings_file() {
    let dir = tempdir().expect("tempdir");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "[openwrt\n").expect("write");

    netjson_convert()
        .arg("convert")
        .arg(fixture("fixtures/zerotier-networks.json"))
        .arg("--backend")
        .arg("zerotier")
        .arg("--settings")
        .arg(path_as_str(&settings))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}

use super::*;

#[test]
fn convert_openwrt_text_lists_sections_and_summary() {
    netjson_convert()
        .arg("convert")
        .arg(fixture("fixtures/openwrt-router.json"))
        .arg("--backend")
        .arg("openwrt")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("[network]"))
        .stdout(predicate::str::contains("interface lan"))
        .stdout(predicate::str::contains("wifi-iface wifi_wlan0"))
        .stdout(predicate::str::contains("backend=openwrt"))
        .stderr(predicate::str::contains("warning:"));
}

#[test]
fn convert_raspbian_json_dump() {
    let assert = netjson_convert()
        .arg("convert")
        .arg(fixture("fixtures/raspbian-ap.json"))
        .arg("--backend")
        .arg("raspbian")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8");
    let dump: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    let sections: Vec<&str> = dump
        .as_array()
        .expect("sections")
        .iter()
        .filter_map(|s| s["name"].as_str())
        .collect();
    assert_eq!(sections, vec!["general", "interfaces", "wireless", "dns_servers"]);
}

#[test]
fn convert_fails_on_schema_violation() {
    netjson_convert()
        .arg("convert")
        .arg(fixture("fixtures/invalid-interfaces.json"))
        .arg("--backend")
        .arg("openwrt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema validation failed"))
        .stderr(predicate::str::contains("'name'"));
}

#[test]
fn convert_reports_unknown_radio() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("device.json");
    fs::write(
        &input,
        r#"{"interfaces": [{"name": "wlan0", "type": "wireless",
            "wireless": {"radio": "radio1", "mode": "station", "ssid": "x"}}]}"#,
    )
    .expect("write");

    netjson_convert()
        .arg("convert")
        .arg(path_as_str(&input))
        .arg("--backend")
        .arg("openwrt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("wireless converter failed"))
        .stderr(predicate::str::contains("radio 'radio1'"));
}

#[test]
fn convert_rejects_non_object_documents() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("list.json");
    fs::write(&input, "[1, 2]").expect("write");

    netjson_convert()
        .arg("convert")
        .arg(path_as_str(&input))
        .arg("--backend")
        .arg("zerotier")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

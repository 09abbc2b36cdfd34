use super::*;

#[test]
fn strict_mode_fails_on_skipped_extension_entries() {
    netjson_convert()
        .arg("convert")
        .arg(fixture("fixtures/openwrt-router.json"))
        .arg("--backend")
        .arg("openwrt")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("skipped unrecognized block firewall[1]"))
        .stderr(predicate::str::contains("strict mode: 1 warnings"));
}

#[test]
fn strict_mode_passes_clean_documents() {
    netjson_convert()
        .arg("convert")
        .arg(fixture("fixtures/raspbian-ap.json"))
        .arg("--backend")
        .arg("raspbian")
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn verbose_flag_enables_converter_logs() {
    netjson_convert()
        .arg("-vv")
        .arg("convert")
        .arg(fixture("fixtures/zerotier-networks.json"))
        .arg("--backend")
        .arg("zerotier")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("running"))
        .stderr(predicate::str::contains("conversion finished"));
}

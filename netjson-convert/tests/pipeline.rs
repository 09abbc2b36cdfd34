use std::path::PathBuf;

use config_block_core::{write, OptionValue};
use netjson_convert::backend::{Backend, BackendKind};
use netjson_convert::document::Document;
use netjson_convert::settings::Settings;
use pretty_assertions::assert_eq;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn load(path: &str) -> Document {
    Document::parse_file(&fixture(path)).expect("fixture should parse")
}

#[test]
fn openwrt_router_sections_and_blocks() {
    let doc = load("fixtures/openwrt-router.json");
    let conversion = Backend::new(BackendKind::OpenWrt, &Settings::default())
        .convert(&doc)
        .expect("convert");
    let out = &conversion.intermediate;

    let sections: Vec<&str> = out.sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sections, vec!["system", "network", "wireless", "firewall"]);

    let system = out.find("system", "system").expect("system");
    assert_eq!(system.get_str("hostname"), Some("router-1"));
    assert_eq!(system.get_str("zonename"), Some("Europe/Rome"));
    assert_eq!(
        system.get_str("timezone"),
        Some("CET-1CEST,M3.5.0,M10.5.0/3")
    );

    let names: Vec<&str> = out.blocks("network").iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["globals", "lan", "lan_2", "wan", "wlan0", "route1"]);

    let lan = out.find("network", "lan").expect("lan");
    assert_eq!(lan.get_str("ifname"), Some("eth0.1"));
    assert_eq!(lan.get_str("ipaddr"), Some("192.168.1.1"));
    assert_eq!(lan.get_str("netmask"), Some("255.255.255.0"));
    assert_eq!(lan.get_str("dns"), Some("10.11.12.13 8.8.8.8"));
    assert_eq!(
        out.find("network", "lan_2").and_then(|b| b.get_str("ip6addr")),
        Some("fd8e:f40a:6701::1/64")
    );
    let wan = out.find("network", "wan").expect("wan");
    assert_eq!(wan.get_str("proto"), Some("dhcp"));
    assert!(wan.get("dns").is_none());
    assert_eq!(wan.get_str("dns_search"), Some("netjson.org"));

    let radio = out.find("wireless", "radio0").expect("radio");
    assert_eq!(radio.get_str("htmode"), Some("VHT80"));
    assert_eq!(radio.get_str("hwmode"), Some("11a"));
    assert_eq!(radio.get_str("country"), Some("IT"));
    assert_eq!(radio.get("txpower"), Some(&OptionValue::Int(10)));

    let iface = out.find("wireless", "wifi_wlan0").expect("wifi-iface");
    assert_eq!(iface.get_str("encryption"), Some("psk2+ccmp"));
    assert_eq!(iface.get_str("key"), Some("changeme"));
    assert_eq!(iface.get_str("network"), Some("lan"));

    let zone = out.find("firewall", "lan_zone").expect("zone");
    assert_eq!(zone.block_type, "zone");
    assert_eq!(out.blocks("firewall").len(), 1);
    assert_eq!(conversion.warnings.len(), 1);
    assert_eq!(conversion.warnings[0].converter, "passthrough");
}

#[test]
fn reruns_are_byte_identical() {
    let doc = load("fixtures/openwrt-router.json");
    let backend = Backend::new(BackendKind::OpenWrt, &Settings::default());
    let first = backend.convert(&doc).expect("first");
    let second = backend.convert(&doc).expect("second");

    assert_eq!(first, second);
    assert_eq!(
        write(&first.intermediate).expect("write"),
        write(&second.intermediate).expect("write")
    );
}

#[test]
fn raspbian_access_point() {
    let doc = load("fixtures/raspbian-ap.json");
    let conversion = Backend::new(BackendKind::Raspbian, &Settings::default())
        .convert(&doc)
        .expect("convert");
    let out = &conversion.intermediate;

    let sections: Vec<&str> = out.sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        sections,
        vec!["general", "interfaces", "wireless", "dns_servers"]
    );
    assert_eq!(out.blocks("interfaces").len(), 2);

    let wlan = out.find("wireless", "wlan0").expect("wlan0");
    let encryption = wlan
        .get("encryption")
        .and_then(OptionValue::as_map)
        .expect("encryption");
    assert_eq!(encryption.get_str("wpa_key_mgmt"), Some("WPA-PSK"));
    assert_eq!(encryption.get_str("wpa_passphrase"), Some("changeme"));
    assert!(conversion.warnings.is_empty());
}

#[test]
fn zerotier_networks() {
    let doc = load("fixtures/zerotier-networks.json");
    let conversion = Backend::new(BackendKind::ZeroTier, &Settings::default())
        .convert(&doc)
        .expect("convert");

    assert_eq!(conversion.ran, vec!["zerotier"]);
    let lab = conversion
        .intermediate
        .find("zerotier", "lab_net")
        .expect("lab");
    assert_eq!(lab.get_str("id"), Some("1c33c1ced0000000"));
}

#[test]
fn custom_settings_change_defaults() {
    let doc = Document::parse(
        br#"{
            "general": {"timezone": "UTC"},
            "radios": [{"name": "radio0", "protocol": "802.11g", "channel": 1}]
        }"#,
    )
    .expect("doc");
    let mut settings = Settings::default();
    settings.openwrt.default_hostname = "edge".to_string();
    settings.openwrt.default_radio_driver = "ath9k".to_string();

    let out = Backend::new(BackendKind::OpenWrt, &settings)
        .convert(&doc)
        .expect("convert")
        .intermediate;
    assert_eq!(
        out.find("system", "system").and_then(|b| b.get_str("hostname")),
        Some("edge")
    );
    assert_eq!(
        out.find("wireless", "radio0").and_then(|b| b.get_str("type")),
        Some("ath9k")
    );
}

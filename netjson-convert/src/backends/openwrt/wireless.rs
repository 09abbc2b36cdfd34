use config_block_core::{logical_name, Block, BlockOptions};

use crate::backends::extra_options;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::{Encryption, Interface};
use crate::settings::WirelessSettings;
use crate::wifi::{active_protocol, cipher_suffix, EncryptionProtocol, WirelessMode};

/// `wifi-iface` blocks for interfaces that carry a `wireless` object.
pub struct Wireless {
    radius_port: u16,
}

impl Wireless {
    pub fn new(settings: &WirelessSettings) -> Self {
        Self {
            radius_port: settings.radius_port,
        }
    }

    fn iface_block(
        &self,
        document: &Document,
        interface: &Interface,
    ) -> Result<Option<Block>, ConvertError> {
        let Some(wireless) = &interface.wireless else {
            return Ok(None);
        };
        let entity = interface.entity();
        document.resolve_radio(&wireless.radio, &entity)?;
        let mode = WirelessMode::parse(&wireless.mode, &entity)?;

        let mut options = extra_options(&wireless.extra);
        options.insert_opt("ssid", wireless.ssid.clone());
        options.insert_opt("disabled", interface.disabled);
        options.insert("ifname", interface.name.as_str());
        options.insert("device", wireless.radio.as_str());
        options.insert_opt("macaddr", interface.mac.clone());
        options.insert("mode", uci_mode(mode));

        for (key, value) in [
            ("distance", wireless.ack_distance),
            ("rts", wireless.rts_threshold),
            ("frag", wireless.frag_threshold),
        ] {
            // zero is what generated forms send for "unset"
            options.insert_opt(key, value.filter(|v| *v > 0));
        }

        if let Some(encryption) = &wireless.encryption {
            if let Some(protocol) = active_protocol(Some(encryption), &entity)? {
                let resolved = self.encryption_options(encryption, protocol, mode, &entity)?;
                for (key, value) in resolved.iter() {
                    options.insert(key, value.clone());
                }
            }
        }

        let networks = match wireless.network.as_deref() {
            Some(networks) if !networks.is_empty() => networks.join(" "),
            _ => interface.logical_network().to_string(),
        };
        options.insert("network", logical_name(&networks));

        let name = format!("wifi_{}", logical_name(&interface.name));
        Ok(Some(Block::with_options("wifi-iface", name, options)))
    }

    fn encryption_options(
        &self,
        encryption: &Encryption,
        protocol: EncryptionProtocol,
        mode: WirelessMode,
        entity: &str,
    ) -> Result<BlockOptions, ConvertError> {
        let mut options = extra_options(&encryption.extra);
        let mut token = uci_encryption(protocol).to_string();

        if protocol.is_wep() {
            let key = encryption
                .key
                .as_deref()
                .ok_or_else(|| ConvertError::missing(entity, "encryption.key"))?;
            options.insert("key", "1");
            // `s:` tells hostapd the key is an ASCII string, not hex
            let key1 = match protocol {
                EncryptionProtocol::WepOpen => format!("s:{key}"),
                _ => key.to_string(),
            };
            options.insert("key1", key1);
        } else {
            options.insert_opt("key", encryption.key.clone());
        }

        if protocol.is_wpa() {
            if let Some(cipher) = cipher_suffix(encryption) {
                token = format!("{token}+{cipher}");
            }
        }

        if protocol.is_enterprise() {
            if mode == WirelessMode::AccessPoint {
                options.insert_opt("server", encryption.server.clone());
                options.insert("port", encryption.port.unwrap_or(self.radius_port));
            } else {
                for (key, value) in [
                    ("eap_type", &encryption.eap_type),
                    ("identity", &encryption.identity),
                    ("password", &encryption.password),
                    ("ca_cert", &encryption.ca_cert),
                    ("client_cert", &encryption.client_cert),
                    ("priv_key", &encryption.priv_key),
                    ("priv_key_pwd", &encryption.priv_key_pwd),
                ] {
                    options.insert_opt(key, value.clone());
                }
            }
        }

        options.insert("encryption", token);
        Ok(options)
    }
}

impl Converter for Wireless {
    fn name(&self) -> &'static str {
        "wireless"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("interfaces")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let mut blocks = Vec::new();
        for interface in document.copy_list::<Interface>("interfaces")? {
            if let Some(block) = self.iface_block(document, &interface)? {
                blocks.push(block);
            }
        }
        Ok(vec![SectionOutput::maybe("wireless", blocks)])
    }
}

fn uci_mode(mode: WirelessMode) -> &'static str {
    match mode {
        WirelessMode::AccessPoint => "ap",
        WirelessMode::Station => "sta",
        WirelessMode::Adhoc => "adhoc",
        WirelessMode::Monitor => "monitor",
        WirelessMode::Mesh => "mesh",
    }
}

fn uci_encryption(protocol: EncryptionProtocol) -> &'static str {
    match protocol {
        EncryptionProtocol::WepOpen => "wep-open",
        EncryptionProtocol::WepShared => "wep-shared",
        EncryptionProtocol::WpaPersonal => "psk",
        EncryptionProtocol::Wpa2Personal => "psk2",
        EncryptionProtocol::WpaPersonalMixed => "psk-mixed",
        EncryptionProtocol::WpaEnterprise => "wpa",
        EncryptionProtocol::Wpa2Enterprise => "wpa2",
        EncryptionProtocol::WpaEnterpriseMixed => "wpa-mixed",
        EncryptionProtocol::Wps => "psk",
    }
}

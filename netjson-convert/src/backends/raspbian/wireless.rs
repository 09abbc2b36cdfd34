use config_block_core::{Block, BlockOptions, OptionValue};

use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::{Encryption, Interface, InterfaceType, Radio, Wireless as WirelessConfig};
use crate::settings::WirelessSettings;
use crate::wifi::{
    active_protocol, band_for_channel, cipher_suffix, fixed_band, EncryptionProtocol, WirelessMode,
};

/// hostapd / wpa_supplicant settings for non-adhoc wireless interfaces.
pub struct Wireless {
    radius_port: u16,
}

impl Wireless {
    pub fn new(settings: &WirelessSettings) -> Self {
        Self {
            radius_port: settings.radius_port,
        }
    }

    fn wireless_block(
        &self,
        document: &Document,
        interface: &Interface,
        wireless: &WirelessConfig,
        mode: WirelessMode,
    ) -> Result<Block, ConvertError> {
        let entity = interface.entity();
        let radio = document.resolve_radio(&wireless.radio, &entity)?;

        let mut options = BlockOptions::new();
        options.insert("ifname", interface.name.as_str());
        options.insert("iftype", interface.kind.as_str());
        options.insert_opt("ssid", wireless.ssid.clone());
        options.insert("radio", wireless.radio.as_str());
        options.insert("mode", wireless.mode.as_str());
        for key in ["hidden", "wmm", "isolate"] {
            options.insert(key, flag(wireless, key));
        }
        options.insert("rts_threshold", wireless.rts_threshold.unwrap_or(-1));
        options.insert("frag_threshold", wireless.frag_threshold.unwrap_or(-1));
        for key in ["macfilter", "maclist"] {
            options.insert_opt(key, wireless.extra.get(key).and_then(OptionValue::from_json));
        }
        options.insert(
            "encryption",
            self.encryption(wireless.encryption.as_ref(), mode, &entity)?,
        );
        add_radio(&mut options, &radio);

        Ok(Block::with_options("wireless", interface.name.as_str(), options))
    }

    fn encryption(
        &self,
        encryption: Option<&Encryption>,
        mode: WirelessMode,
        entity: &str,
    ) -> Result<BlockOptions, ConvertError> {
        let mut options = BlockOptions::new();
        let (Some(encryption), Some(protocol)) = (encryption, active_protocol(encryption, entity)?)
        else {
            return Ok(options);
        };

        match protocol {
            EncryptionProtocol::Wps => {
                return Err(ConvertError::unsupported(
                    entity,
                    "encryption protocol",
                    protocol.token(),
                ));
            }
            EncryptionProtocol::WepOpen | EncryptionProtocol::WepShared => {
                let (method, auth_algs) = if protocol == EncryptionProtocol::WepOpen {
                    ("open", 1u8)
                } else {
                    ("shared", 2u8)
                };
                options.insert("protocol", "wep");
                options.insert("method", method);
                options.insert("auth_algs", auth_algs);
                options.insert_opt("key", encryption.key.clone());
            }
            _ if protocol.is_personal() => {
                options.insert("protocol", "wpa");
                options.insert("method", "personal");
                options.insert("auth_algs", "1");
                options.insert("wpa", protocol.wpa_version());
                options.insert("wpa_key_mgmt", "WPA-PSK");
                options.insert_opt("wpa_passphrase", encryption.key.clone());
                options.insert_opt("cipher", cipher(encryption));
            }
            _ if mode == WirelessMode::AccessPoint => {
                options.insert("protocol", "wpa");
                options.insert("method", "enterprise");
                options.insert("auth_algs", "1");
                options.insert("wpa", protocol.wpa_version());
                options.insert("wpa_key_mgmt", "WPA-EAP");
                options.insert_opt("auth_server_addr", encryption.server.clone());
                options.insert(
                    "auth_server_port",
                    encryption.port.unwrap_or(self.radius_port),
                );
                options.insert_opt("auth_server_shared_secret", encryption.key.clone());
            }
            _ => {
                options.insert("protocol", "wpa");
                options.insert("method", "enterprise");
                options.insert_opt(
                    "eap_type",
                    encryption.eap_type.as_deref().map(str::to_uppercase),
                );
                options.insert_opt("wpa_pairwise", cipher(encryption));
                for (key, value) in [
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
            if interface.kind != InterfaceType::Wireless {
                continue;
            }
            let Some(wireless) = &interface.wireless else {
                continue;
            };
            let mode = WirelessMode::parse(&wireless.mode, &interface.entity())?;
            // adhoc cells are configured in the interfaces file
            if mode == WirelessMode::Adhoc {
                continue;
            }
            blocks.push(self.wireless_block(document, &interface, wireless, mode)?);
        }
        Ok(vec![SectionOutput::maybe("wireless", blocks)])
    }
}

fn flag(wireless: &WirelessConfig, key: &str) -> OptionValue {
    wireless
        .extra
        .get(key)
        .and_then(OptionValue::from_json)
        .unwrap_or(OptionValue::Bool(false))
}

/// hostapd cipher list: `tkip+ccmp` becomes `TKIP CCMP`.
fn cipher(encryption: &Encryption) -> Option<String> {
    cipher_suffix(encryption).map(|cipher| cipher.replace('+', " ").to_uppercase())
}

fn add_radio(options: &mut BlockOptions, radio: &Radio) {
    options.insert("protocol", radio.protocol.replace('.', ""));
    options.insert(
        "hwmode",
        fixed_band(&radio.protocol).unwrap_or_else(|| band_for_channel(radio.channel)),
    );
    options.insert("channel", radio.channel);
    options.insert_opt("channel_width", radio.channel_width);
    options.insert_opt("country", radio.country.clone());
}

//! Wireless vocabularies shared by the platform converters.

use crate::error::ConvertError;
use crate::netjson::Encryption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionProtocol {
    WepOpen,
    WepShared,
    WpaPersonal,
    Wpa2Personal,
    WpaPersonalMixed,
    WpaEnterprise,
    Wpa2Enterprise,
    WpaEnterpriseMixed,
    Wps,
}

const PROTOCOLS: &[(&str, EncryptionProtocol)] = &[
    ("wep_open", EncryptionProtocol::WepOpen),
    ("wep_shared", EncryptionProtocol::WepShared),
    ("wpa_personal", EncryptionProtocol::WpaPersonal),
    ("wpa2_personal", EncryptionProtocol::Wpa2Personal),
    ("wpa_personal_mixed", EncryptionProtocol::WpaPersonalMixed),
    ("wpa_enterprise", EncryptionProtocol::WpaEnterprise),
    ("wpa2_enterprise", EncryptionProtocol::Wpa2Enterprise),
    ("wpa_enterprise_mixed", EncryptionProtocol::WpaEnterpriseMixed),
    ("wps", EncryptionProtocol::Wps),
];

impl EncryptionProtocol {
    pub fn parse(token: &str) -> Option<Self> {
        PROTOCOLS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, protocol)| *protocol)
    }

    pub fn token(self) -> &'static str {
        PROTOCOLS
            .iter()
            .find(|(_, protocol)| *protocol == self)
            .map(|(name, _)| *name)
            .unwrap_or("none")
    }

    pub fn is_wep(self) -> bool {
        matches!(self, Self::WepOpen | Self::WepShared)
    }

    /// WPA family proper; `wps` is excluded.
    pub fn is_wpa(self) -> bool {
        self.is_personal() || self.is_enterprise()
    }

    pub fn is_personal(self) -> bool {
        matches!(
            self,
            Self::WpaPersonal | Self::Wpa2Personal | Self::WpaPersonalMixed
        )
    }

    pub fn is_enterprise(self) -> bool {
        matches!(
            self,
            Self::WpaEnterprise | Self::Wpa2Enterprise | Self::WpaEnterpriseMixed
        )
    }

    /// hostapd `wpa` value: 1, 2, or 3 for mixed mode.
    pub fn wpa_version(self) -> &'static str {
        match self {
            Self::WpaPersonal | Self::WpaEnterprise => "1",
            Self::WpaPersonalMixed | Self::WpaEnterpriseMixed => "3",
            _ => "2",
        }
    }
}

/// Resolve the protocol of an encryption object that is actually in effect.
///
/// Returns `None` when encryption is absent, empty, disabled or set to `none`.
pub fn active_protocol(
    encryption: Option<&Encryption>,
    entity: &str,
) -> Result<Option<EncryptionProtocol>, ConvertError> {
    let Some(encryption) = encryption else {
        return Ok(None);
    };
    if encryption.disabled || encryption.is_empty() {
        return Ok(None);
    }
    let token = encryption
        .protocol
        .as_deref()
        .ok_or_else(|| ConvertError::missing(entity, "encryption.protocol"))?;
    if token == "none" {
        return Ok(None);
    }
    EncryptionProtocol::parse(token)
        .map(Some)
        .ok_or_else(|| ConvertError::unsupported(entity, "encryption protocol", token))
}

/// Cipher to append to a WPA setting; `auto` means leave it to the driver.
pub fn cipher_suffix(encryption: &Encryption) -> Option<&str> {
    encryption
        .cipher
        .as_deref()
        .filter(|cipher| !cipher.is_empty() && *cipher != "auto")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WirelessMode {
    AccessPoint,
    Station,
    Adhoc,
    Monitor,
    Mesh,
}

const MODES: &[(&str, WirelessMode)] = &[
    ("access_point", WirelessMode::AccessPoint),
    ("station", WirelessMode::Station),
    ("adhoc", WirelessMode::Adhoc),
    ("monitor", WirelessMode::Monitor),
    ("802.11s", WirelessMode::Mesh),
    ("mesh", WirelessMode::Mesh),
];

impl WirelessMode {
    pub fn parse(token: &str, entity: &str) -> Result<Self, ConvertError> {
        MODES
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, mode)| *mode)
            .ok_or_else(|| ConvertError::unsupported(entity, "wireless mode", token))
    }
}

/// Band letter for protocols that pin one (`802.11a`, `802.11b`, `802.11g`).
pub fn fixed_band(protocol: &str) -> Option<&'static str> {
    match protocol {
        "802.11a" => Some("a"),
        "802.11b" => Some("b"),
        "802.11g" => Some("g"),
        _ => None,
    }
}

/// Band implied by a channel number: 2.4 GHz up to channel 13.
pub fn band_for_channel(channel: u32) -> &'static str {
    if channel <= 13 {
        "g"
    } else {
        "a"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        active_protocol, band_for_channel, cipher_suffix, fixed_band, EncryptionProtocol,
        WirelessMode,
    };
    use crate::error::ConvertError;
    use crate::netjson::Encryption;

    fn encryption(value: serde_json::Value) -> Encryption {
        serde_json::from_value(value).expect("encryption")
    }

    #[test]
    fn inactive_encryption_resolves_to_none() {
        assert_eq!(active_protocol(None, "wlan0").expect("absent"), None);
        let disabled = encryption(json!({"protocol": "wpa2_personal", "disabled": true}));
        assert_eq!(active_protocol(Some(&disabled), "wlan0").expect("off"), None);
        let none = encryption(json!({"protocol": "none"}));
        assert_eq!(active_protocol(Some(&none), "wlan0").expect("none"), None);
        let empty = encryption(json!({}));
        assert_eq!(active_protocol(Some(&empty), "wlan0").expect("empty"), None);
    }

    #[test]
    fn configured_encryption_without_protocol_is_rejected() {
        let keyed = encryption(json!({"key": "changeme"}));
        let err = active_protocol(Some(&keyed), "interface wlan0").expect_err("no protocol");
        assert!(matches!(err, ConvertError::MissingField { field: "encryption.protocol", .. }));
    }

    #[test]
    fn unknown_protocol_is_rejected() {
        let bogus = encryption(json!({"protocol": "wpa3_magic"}));
        let err = active_protocol(Some(&bogus), "interface wlan0").expect_err("bogus");
        assert!(matches!(err, ConvertError::UnsupportedValue { ref value, .. } if value == "wpa3_magic"));
    }

    #[test]
    fn protocol_families() {
        let mixed = EncryptionProtocol::parse("wpa_personal_mixed").expect("mixed");
        assert!(mixed.is_wpa() && mixed.is_personal());
        assert_eq!(mixed.wpa_version(), "3");
        assert_eq!(mixed.token(), "wpa_personal_mixed");
        assert!(!EncryptionProtocol::Wps.is_wpa());
        assert!(EncryptionProtocol::WepShared.is_wep());
        assert_eq!(EncryptionProtocol::Wpa2Enterprise.wpa_version(), "2");
    }

    #[test]
    fn auto_cipher_is_not_a_suffix() {
        assert_eq!(cipher_suffix(&encryption(json!({"cipher": "auto"}))), None);
        assert_eq!(
            cipher_suffix(&encryption(json!({"cipher": "tkip+ccmp"}))),
            Some("tkip+ccmp")
        );
    }

    #[test]
    fn modes_and_bands() {
        assert_eq!(
            WirelessMode::parse("802.11s", "w").expect("mesh"),
            WirelessMode::Mesh
        );
        assert!(WirelessMode::parse("repeater", "w").is_err());
        assert_eq!(fixed_band("802.11b"), Some("b"));
        assert_eq!(fixed_band("802.11n"), None);
        assert_eq!(band_for_channel(13), "g");
        assert_eq!(band_for_channel(36), "a");
    }
}

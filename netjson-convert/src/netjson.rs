//! Typed views over NetJSON entities.
//!
//! Fields the converters act on are typed; everything else lands in the
//! flattened `extra` map and is passed through to the output blocks
//! untouched.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    Ethernet,
    Wireless,
    Bridge,
    Virtual,
    Loopback,
    Other,
}

impl InterfaceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ethernet => "ethernet",
            Self::Wireless => "wireless",
            Self::Bridge => "bridge",
            Self::Virtual => "virtual",
            Self::Loopback => "loopback",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(rename = "type")]
    pub kind: InterfaceType,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub autostart: Option<bool>,
    #[serde(default)]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub proto: Option<String>,
    #[serde(default)]
    pub dns: Option<Value>,
    #[serde(default)]
    pub dns_search: Option<Value>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub bridge_members: Option<Vec<String>>,
    #[serde(default)]
    pub wireless: Option<Wireless>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Interface {
    /// Logical network name, defaulting to the interface name.
    pub fn logical_network(&self) -> &str {
        self.network.as_deref().unwrap_or(&self.name)
    }

    pub fn entity(&self) -> String {
        format!("interface {}", self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub family: Option<AddressFamily>,
    pub proto: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub mask: Option<u8>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    /// Placeholder used for interfaces declared without any address.
    pub fn none() -> Self {
        Self {
            family: None,
            proto: "none".to_string(),
            address: None,
            mask: None,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wireless {
    pub radio: String,
    pub mode: String,
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default)]
    pub network: Option<Vec<String>>,
    #[serde(default)]
    pub ack_distance: Option<i64>,
    #[serde(default)]
    pub rts_threshold: Option<i64>,
    #[serde(default)]
    pub frag_threshold: Option<i64>,
    #[serde(default)]
    pub encryption: Option<Encryption>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Encryption {
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub cipher: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub eap_type: Option<String>,
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub ca_cert: Option<String>,
    #[serde(default)]
    pub client_cert: Option<String>,
    #[serde(default)]
    pub priv_key: Option<String>,
    #[serde(default)]
    pub priv_key_pwd: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Encryption {
    /// True for `{}`: no protocol and nothing else configured.
    pub fn is_empty(&self) -> bool {
        !self.disabled
            && [
                &self.protocol,
                &self.key,
                &self.cipher,
                &self.server,
                &self.eap_type,
                &self.identity,
                &self.password,
                &self.ca_cert,
                &self.client_cert,
                &self.priv_key,
                &self.priv_key_pwd,
            ]
            .iter()
            .all(|field| field.is_none())
            && self.port.is_none()
            && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Radio {
    pub name: String,
    pub protocol: String,
    pub channel: u32,
    #[serde(default)]
    pub channel_width: Option<u32>,
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub tx_power: Option<i64>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub hwmode: Option<String>,
    #[serde(default)]
    pub htmode: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Radio {
    pub fn entity(&self) -> String {
        format!("radio {}", self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub device: String,
    pub next: String,
    pub destination: String,
    #[serde(default)]
    pub cost: Option<i64>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpRule {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub dest: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Switch {
    pub name: String,
    #[serde(default)]
    pub vlan: Vec<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Led {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct General {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub ula_prefix: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnTunnel {
    pub name: String,
    #[serde(default)]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZeroTierNetwork {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub nwid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

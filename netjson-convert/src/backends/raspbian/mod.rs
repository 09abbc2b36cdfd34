//! Raspbian converters: `/etc/network/interfaces`, hostapd / wpa_supplicant,
//! resolv.conf and ntp.

mod dns;
mod general;
mod interfaces;
mod wireless;


pub use dns::{DnsSearch, DnsServers};
pub use general::{General, Ntp};
pub use interfaces::Interfaces;
pub use wireless::Wireless;

use crate::converter::Converter;
use crate::schema::{Property, PropertyKind, Schema};
use crate::settings::Settings;

pub static SCHEMA: Schema = Schema {
    name: "raspbian",
    properties: &[
        Property::new("general", PropertyKind::Object),
        Property::list("interfaces", &["name", "type"]),
        Property::list("radios", &["name", "protocol", "channel"]),
        Property::list("routes", &["device", "next", "destination"]),
        Property::new("ntp", PropertyKind::Object),
        Property::new("dns_servers", PropertyKind::StringList),
        Property::new("dns_search", PropertyKind::StringList),
        Property::list("files", &["path"]),
        Property::new("type", PropertyKind::Any),
    ],
    required: &[],
};

/// Converters in the order they run.
pub fn converters(settings: &Settings) -> Vec<Box<dyn Converter>> {
    vec![
        Box::new(General),
        Box::new(Interfaces),
        Box::new(Wireless::new(&settings.wireless)),
        Box::new(DnsServers),
        Box::new(DnsSearch),
        Box::new(Ntp),
    ]
}

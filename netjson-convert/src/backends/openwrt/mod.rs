//! OpenWrt UCI converters.

mod general;
mod interfaces;
mod openvpn;
mod radios;
mod routing;
mod switch;
mod wireless;


pub use general::{General, Led, Ntp};
pub use interfaces::Interfaces;
pub use openvpn::OpenVpn;
pub use radios::Radios;
pub use routing::{Routes, Rules};
pub use switch::Switch;
pub use wireless::Wireless;

use crate::backends::passthrough::Passthrough;
use crate::converter::Converter;
use crate::schema::{Property, PropertyKind, Schema};
use crate::settings::Settings;

pub static SCHEMA: Schema = Schema {
    name: "openwrt",
    properties: &[
        Property::new("general", PropertyKind::Object),
        Property::list("interfaces", &["name", "type"]),
        Property::list("radios", &["name", "protocol", "channel"]),
        Property::list("routes", &["device", "next", "destination"]),
        Property::list("ip_rules", &[]),
        Property::list("switch", &["name"]),
        Property::new("ntp", PropertyKind::Object),
        Property::list("led", &["name"]),
        Property::new("dns_servers", PropertyKind::StringList),
        Property::new("dns_search", PropertyKind::StringList),
        Property::list("openvpn", &["name"]),
        Property::list("files", &["path"]),
        Property::new("type", PropertyKind::Any),
    ],
    required: &[],
};

/// Converters in the order they run.
pub fn converters(settings: &Settings) -> Vec<Box<dyn Converter>> {
    vec![
        Box::new(General::new(&settings.openwrt)),
        Box::new(Ntp),
        Box::new(Led),
        Box::new(Interfaces),
        Box::new(Routes),
        Box::new(Rules),
        Box::new(Switch),
        Box::new(Radios::new(&settings.openwrt)),
        Box::new(Wireless::new(&settings.wireless)),
        Box::new(OpenVpn),
        Box::new(Passthrough::new(&SCHEMA, &settings.extensions)),
    ]
}

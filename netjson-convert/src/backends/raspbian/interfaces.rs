use config_block_core::{Block, BlockOptions, OptionValue};

use crate::addr::IpInterface;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::{Address, AddressFamily, Interface, InterfaceType, Route};
use crate::wifi::WirelessMode;

/// One block per interface for `/etc/network/interfaces`.
pub struct Interfaces;

impl Converter for Interfaces {
    fn name(&self) -> &'static str {
        "interfaces"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("interfaces")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let routes = route_options(&document.copy_list::<Route>("routes")?)?;
        let blocks = document
            .copy_list::<Interface>("interfaces")?
            .iter()
            .map(|interface| interface_block(interface, &routes))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vec![SectionOutput::new("interfaces", blocks)])
    }
}

fn interface_block(interface: &Interface, routes: &[OptionValue]) -> Result<Block, ConvertError> {
    let mut options = BlockOptions::new();
    options.insert("ifname", interface.name.as_str());
    options.insert("iftype", interface.kind.as_str());

    if matches!(
        interface.kind,
        InterfaceType::Ethernet | InterfaceType::Bridge | InterfaceType::Wireless
    ) && !interface.addresses.is_empty()
    {
        let addresses = interface
            .addresses
            .iter()
            .map(|address| address_option(interface, address))
            .collect::<Result<Vec<_>, _>>()?;
        options.insert("address", addresses);
    }

    options.insert_opt("mac", interface.mac.clone());
    for key in ["mtu", "txqueuelen"] {
        options.insert_opt(key, interface.extra.get(key).and_then(OptionValue::from_json));
    }
    options.insert("autostart", interface.autostart.unwrap_or(true));

    if !routes.is_empty() {
        options.insert("route", routes.to_vec());
    }

    if let Some(wireless) = &interface.wireless {
        if interface.kind == InterfaceType::Wireless
            && WirelessMode::parse(&wireless.mode, &interface.entity())? == WirelessMode::Adhoc
        {
            options.insert_opt("essid", wireless.ssid.clone());
            options.insert("mode", wireless.mode.as_str());
        }
    }

    if interface.kind == InterfaceType::Bridge {
        options.insert(
            "bridge_members",
            interface.bridge_members.clone().unwrap_or_default(),
        );
        options.insert(
            "stp",
            interface
                .extra
                .get("stp")
                .and_then(OptionValue::from_json)
                .unwrap_or(OptionValue::Bool(false)),
        );
    }

    Ok(Block::with_options(
        interface.kind.as_str(),
        interface.name.as_str(),
        options,
    ))
}

/// Address mapping with static masks rewritten as `netmask`: dotted for
/// IPv4, bit length for IPv6.
fn address_option(interface: &Interface, address: &Address) -> Result<OptionValue, ConvertError> {
    let mut options = BlockOptions::new();
    options.insert("proto", address.proto.as_str());
    options.insert_opt("family", address.family.map(AddressFamily::as_str));
    options.insert_opt("address", address.address.clone());
    options.extend_json(&address.extra);

    match (address.proto.as_str(), address.family, address.mask) {
        ("static", Some(AddressFamily::Ipv4), Some(mask)) => {
            let value = address.address.as_deref().unwrap_or_default();
            let parsed = IpInterface::from_parts(value, mask).map_err(|source| {
                ConvertError::address(interface.entity(), format!("{value}/{mask}"), source)
            })?;
            let netmask = parsed.netmask().ok_or_else(|| {
                ConvertError::unsupported(interface.entity(), "ipv4 address", value)
            })?;
            options.insert("netmask", netmask.to_string());
        }
        ("static", Some(AddressFamily::Ipv6), Some(mask)) => {
            options.insert("netmask", mask);
        }
        (_, _, mask) => {
            options.insert_opt("mask", mask);
        }
    }
    Ok(OptionValue::Map(options))
}

/// Routes attached to every interface stanza. The gateway decides the IP
/// version; IPv4 destinations are split into address and dotted mask.
fn route_options(routes: &[Route]) -> Result<Vec<OptionValue>, ConvertError> {
    let mut result = Vec::with_capacity(routes.len());
    for (idx, route) in routes.iter().enumerate() {
        let entity = format!("route {}", idx + 1);
        let gateway = IpInterface::parse(&route.next)
            .map_err(|source| ConvertError::address(&entity, &route.next, source))?;

        let mut options = BlockOptions::from_json_map(&route.extra);
        options.insert("device", route.device.as_str());
        options.insert("next", route.next.as_str());
        options.insert_opt("cost", route.cost);
        options.insert_opt("source", route.source.clone());
        options.insert("version", gateway.version());

        if gateway.version() == 4 {
            let destination = IpInterface::parse(&route.destination)
                .map_err(|source| ConvertError::address(&entity, &route.destination, source))?;
            let dest_mask = destination.netmask().ok_or_else(|| {
                ConvertError::unsupported(&entity, "ipv4 destination", &route.destination)
            })?;
            options.insert("dest", destination.addr.to_string());
            options.insert("dest_mask", dest_mask.to_string());
        } else {
            options.insert("destination", route.destination.as_str());
        }
        result.push(OptionValue::Map(options));
    }
    Ok(result)
}

use config_block_core::Block;

use crate::addr::IpInterface;
use crate::backends::extra_options;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::{IpRule, Route};

/// Static routes as `route` / `route6` blocks.
pub struct Routes;

impl Converter for Routes {
    fn name(&self) -> &'static str {
        "routes"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("routes")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let blocks = document
            .copy_list::<Route>("routes")?
            .into_iter()
            .enumerate()
            .map(|(idx, route)| route_block(idx + 1, route))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vec![SectionOutput::new("network", blocks)])
    }
}

fn route_block(number: usize, route: Route) -> Result<Block, ConvertError> {
    let entity = format!("route {number}");
    let destination = IpInterface::parse(&route.destination)
        .map_err(|source| ConvertError::address(&entity, &route.destination, source))?;

    let mut options = extra_options(&route.extra);
    options.insert("interface", route.device);
    options.insert("gateway", route.next);
    options.insert_opt("metric", route.cost);
    options.insert_opt("source", route.source);

    let block_type = match destination.netmask() {
        Some(netmask) => {
            options.insert("target", destination.addr.to_string());
            options.insert("netmask", netmask.to_string());
            "route"
        }
        None => {
            options.insert("target", destination.network());
            "route6"
        }
    };
    Ok(Block::with_options(block_type, format!("route{number}"), options))
}

/// Policy routing rules as `rule` / `rule6` blocks.
pub struct Rules;

impl Converter for Rules {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("ip_rules")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let blocks = document
            .copy_list::<IpRule>("ip_rules")?
            .into_iter()
            .enumerate()
            .map(|(idx, rule)| rule_block(idx + 1, rule))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vec![SectionOutput::new("network", blocks)])
    }
}

fn rule_block(number: usize, rule: IpRule) -> Result<Block, ConvertError> {
    let entity = format!("rule {number}");
    // dest decides the family; src only when dest is absent
    let version = match rule.dest.as_deref().or(rule.src.as_deref()) {
        Some(network) => IpInterface::parse(network)
            .map_err(|source| ConvertError::address(&entity, network, source))?
            .version(),
        None => 4,
    };

    let mut options = extra_options(&rule.extra);
    options.insert_opt("src", rule.src);
    options.insert_opt("dest", rule.dest);

    let block_type = if version == 6 { "rule6" } else { "rule" };
    Ok(Block::with_options(block_type, format!("rule{number}"), options))
}

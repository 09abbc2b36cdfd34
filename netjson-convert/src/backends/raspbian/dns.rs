use config_block_core::Block;

use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;

/// `nameserver` lines for resolv.conf.
pub struct DnsServers;

impl Converter for DnsServers {
    fn name(&self) -> &'static str {
        "dns_servers"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("dns_servers")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        Ok(vec![resolv_block(document, "dns_servers", "nameservers")])
    }
}

/// `search` domains for resolv.conf.
pub struct DnsSearch;

impl Converter for DnsSearch {
    fn name(&self) -> &'static str {
        "dns_search"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("dns_search")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        Ok(vec![resolv_block(document, "dns_search", "domains")])
    }
}

fn resolv_block(document: &Document, key: &str, option: &str) -> SectionOutput {
    let values = document.string_list(key);
    if values.is_empty() {
        return SectionOutput::acknowledged(key);
    }
    let mut block = Block::new("resolv", key);
    block.options.insert(option, values);
    SectionOutput::new(key, vec![block])
}

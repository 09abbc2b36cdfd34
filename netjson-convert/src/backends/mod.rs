//! Per-platform converter sets.

pub mod openwrt;
pub mod passthrough;
pub mod raspbian;
pub mod zerotier;

use config_block_core::BlockOptions;
use serde_json::{Map, Value};

/// Options built from the pass-through fields of an entity.
pub(crate) fn extra_options(extra: &Map<String, Value>) -> BlockOptions {
    BlockOptions::from_json_map(extra)
}

use std::collections::BTreeMap;

use serde::Deserialize;

/// Human zone names (`Europe/Rome`) mapped to POSIX TZ strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Timezones {
    zones: BTreeMap<String, String>,
}

impl Timezones {
    /// Built-in zone table. Falls back to `UTC` alone if the table is unreadable.
    pub fn embedded() -> Self {
        let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/timezones.toml"));
        match toml::from_str::<Self>(raw) {
            Ok(table) if !table.zones.is_empty() => table,
            _ => Self::fallback(),
        }
    }

    /// Zone names are stored with spaces; tzdata spellings
    /// (`America/Argentina/Buenos_Aires`) resolve too.
    pub fn posix(&self, zone: &str) -> Option<&str> {
        self.zones
            .get(zone)
            .or_else(|| self.zones.get(&zone.replace('_', " ")))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    fn fallback() -> Self {
        Self {
            zones: BTreeMap::from([("UTC".to_string(), "UTC0".to_string())]),
        }
    }
}

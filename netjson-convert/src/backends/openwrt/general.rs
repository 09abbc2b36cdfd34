use config_block_core::Block;
use serde_json::{Map, Value};

use crate::backends::extra_options;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::{General as GeneralConfig, Led as LedConfig};
use crate::settings::OpenWrtSettings;
use crate::timezones::Timezones;

/// `system` settings plus the ULA prefix in `network`.
pub struct General {
    default_hostname: String,
    timezones: Timezones,
}

impl General {
    pub fn new(settings: &OpenWrtSettings) -> Self {
        Self {
            default_hostname: settings.default_hostname.clone(),
            timezones: Timezones::embedded(),
        }
    }
}

impl Converter for General {
    fn name(&self) -> &'static str {
        "general"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("general")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let general: GeneralConfig = document.copy_object("general")?.unwrap_or_default();

        let zone = general.timezone.as_deref().unwrap_or("UTC");
        let posix = self
            .timezones
            .posix(zone)
            .ok_or_else(|| ConvertError::unsupported("general", "timezone", zone))?;

        let mut system = Block::with_options("system", "system", extra_options(&general.extra));
        system.options.insert(
            "hostname",
            general
                .hostname
                .clone()
                .unwrap_or_else(|| self.default_hostname.clone()),
        );
        system.options.insert("timezone", posix);
        system.options.insert("zonename", zone);

        let network = match general.ula_prefix {
            Some(prefix) => {
                let mut globals = Block::new("globals", "globals");
                globals.options.insert("ula_prefix", prefix);
                SectionOutput::new("network", vec![globals])
            }
            None => SectionOutput::acknowledged("network"),
        };

        Ok(vec![SectionOutput::new("system", vec![system]), network])
    }
}

/// NTP client settings as a `timeserver` block.
pub struct Ntp;

impl Converter for Ntp {
    fn name(&self) -> &'static str {
        "ntp"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("ntp")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let ntp: Map<String, Value> = document.copy_object("ntp")?.unwrap_or_default();
        if ntp.is_empty() {
            return Ok(vec![SectionOutput::acknowledged("system")]);
        }
        let block = Block::with_options("timeserver", "ntp", extra_options(&ntp));
        Ok(vec![SectionOutput::new("system", vec![block])])
    }
}

/// One `led` block per LED, named `led_<name>`.
pub struct Led;

impl Converter for Led {
    fn name(&self) -> &'static str {
        "led"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("led")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let blocks = document
            .copy_list::<LedConfig>("led")?
            .into_iter()
            .map(|led| {
                let mut options = extra_options(&led.extra);
                let block_name = format!("led_{}", led.name.to_lowercase());
                options.insert("name", led.name);
                Block::with_options("led", block_name, options)
            })
            .collect();
        Ok(vec![SectionOutput::new("system", blocks)])
    }
}

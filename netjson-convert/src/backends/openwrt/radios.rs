use config_block_core::Block;

use crate::backends::extra_options;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::Radio;
use crate::settings::OpenWrtSettings;
use crate::wifi::{band_for_channel, fixed_band};

/// `wifi-device` blocks, one per radio.
pub struct Radios {
    default_driver: String,
}

impl Radios {
    pub fn new(settings: &OpenWrtSettings) -> Self {
        Self {
            default_driver: settings.default_radio_driver.clone(),
        }
    }

    fn radio_block(&self, radio: Radio) -> Result<Block, ConvertError> {
        let driver = radio
            .driver
            .clone()
            .unwrap_or_else(|| self.default_driver.clone());

        let mut options = extra_options(&radio.extra);
        options.insert_opt("txpower", radio.tx_power);
        options.insert_opt("hwmode", hwmode(&radio));
        if radio.channel == 0 {
            options.insert("channel", "auto");
        } else {
            options.insert("channel", radio.channel);
        }
        if driver == "mac80211" {
            options.insert("htmode", htmode(&radio)?);
        } else {
            options.insert_opt("htmode", radio.htmode.clone());
        }
        options.insert_opt("country", radio.country.as_deref().map(str::to_uppercase));
        options.insert("type", driver);

        Ok(Block::with_options("wifi-device", radio.name, options))
    }
}

impl Converter for Radios {
    fn name(&self) -> &'static str {
        "radios"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("radios")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let blocks = document
            .copy_list::<Radio>("radios")?
            .into_iter()
            .map(|radio| self.radio_block(radio))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vec![SectionOutput::new("wireless", blocks)])
    }
}

/// `11a`, `11b` or `11g`. With automatic channel selection the band comes
/// from the `hwmode` hint, if any.
fn hwmode(radio: &Radio) -> Option<String> {
    if let Some(band) = fixed_band(&radio.protocol) {
        return Some(format!("11{band}"));
    }
    if radio.channel == 0 {
        return radio.hwmode.clone();
    }
    Some(format!("11{}", band_for_channel(radio.channel)))
}

fn htmode(radio: &Radio) -> Result<String, ConvertError> {
    if let Some(htmode) = &radio.htmode {
        return Ok(htmode.clone());
    }
    let prefix = match radio.protocol.as_str() {
        "802.11n" => "HT",
        "802.11ac" => "VHT",
        _ => return Ok("NONE".to_string()),
    };
    let width = radio
        .channel_width
        .ok_or_else(|| ConvertError::missing(radio.entity(), "channel_width"))?;
    Ok(format!("{prefix}{width}"))
}

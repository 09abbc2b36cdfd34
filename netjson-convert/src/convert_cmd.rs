use anyhow::{bail, Context, Result};
use config_block_core::{format_json, write_file};
use netjson_convert::backend::Backend;
use netjson_convert::document::Document;
use netjson_convert::report::{render_summary, render_text, render_warnings};
use netjson_convert::settings::resolve_settings;
use tracing::info;

use crate::cli::{ConvertArgs, OutputFormat};
use crate::path_guard;

pub fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(output) = &args.output {
        path_guard::ensure_output_not_input(output, &args.input)?;
    }

    let (settings, settings_source) = resolve_settings(args.settings.as_deref())
        .with_context(|| "failed to load settings")?;
    info!(source = %settings_source, "settings loaded");

    let document = Document::parse_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let backend = Backend::new(args.backend.into(), &settings);
    let conversion = backend
        .convert(&document)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    if !conversion.warnings.is_empty() {
        eprintln!("{}", render_warnings(&conversion.warnings));
    }
    if args.strict && !conversion.warnings.is_empty() {
        bail!(
            "convert failed in strict mode: {} warnings",
            conversion.warnings.len()
        );
    }

    if let Some(output) = &args.output {
        write_file(&conversion.intermediate, output)
            .with_context(|| format!("failed to write output {}", output.display()))?;
        println!("{}", render_summary(&conversion));
        println!("wrote {}", output.display());
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_text(&conversion));
            println!("{}", render_summary(&conversion));
        }
        OutputFormat::Json => println!("{}", format_json(&conversion.intermediate)),
    }
    Ok(())
}

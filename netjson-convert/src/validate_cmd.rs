use anyhow::{Context, Result};
use netjson_convert::backend::{Backend, BackendKind};
use netjson_convert::document::Document;
use netjson_convert::settings::Settings;

use crate::cli::ValidateArgs;

pub fn run_validate(args: ValidateArgs) -> Result<()> {
    let kind = BackendKind::from(args.backend);
    let document = Document::parse_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    Backend::new(kind, &Settings::default())
        .validate(&document)
        .with_context(|| {
            format!(
                "{} is not a valid {} document",
                args.input.display(),
                kind.as_str()
            )
        })?;

    println!("valid backend={}", kind.as_str());
    Ok(())
}

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use netjson_convert::backend::BackendKind;

#[derive(Parser, Debug)]
#[command(name = "netjson-convert")]
#[command(about = "Convert NetJSON documents into platform configuration blocks")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert one NetJSON document into intermediate blocks.
    Convert(ConvertArgs),
    /// Check one NetJSON document against a backend schema.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// NetJSON document to convert.
    pub input: PathBuf,
    /// Target platform.
    #[arg(long, value_enum)]
    pub backend: BackendArg,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the blocks as JSON to this file instead of printing them.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Settings TOML overriding the embedded defaults.
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Fail when any converter recorded a warning.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// NetJSON document to check.
    pub input: PathBuf,
    #[arg(long, value_enum)]
    pub backend: BackendArg,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum BackendArg {
    Openwrt,
    Raspbian,
    Zerotier,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Openwrt => BackendKind::OpenWrt,
            BackendArg::Raspbian => BackendKind::Raspbian,
            BackendArg::Zerotier => BackendKind::ZeroTier,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::warn;

use crate::api::ClientSettings;
use crate::config::{Config, ConfigOutputFormat};
use crate::consts::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum OutputFormat {
    /// Normalized records as pretty JSON (default)
    #[default]
    Json,
    /// Raw CSV export, unchanged
    Csv,
    /// Summary table
    Table,
}

impl From<ConfigOutputFormat> for OutputFormat {
    fn from(format: ConfigOutputFormat) -> Self {
        match format {
            ConfigOutputFormat::Json => OutputFormat::Json,
            ConfigOutputFormat::Csv => OutputFormat::Csv,
            ConfigOutputFormat::Table => OutputFormat::Table,
        }
    }
}

#[derive(Parser)]
#[command(name = "pelofeed")]
#[command(about = "Export and normalize Peloton workout history", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output format for workout records
    #[arg(short, long, global = true, value_enum)]
    pub(crate) format: Option<OutputFormat>,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub(crate) timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if self.format.is_none() {
            self.format = config.format.map(OutputFormat::from);
        }
        if self.base_url.is_none() {
            self.base_url = config.base_url.clone();
        }
        if self.timeout.is_none() {
            if config.timeout_secs == Some(0) {
                warn!("Ignoring timeout_secs = 0 in config");
            } else {
                self.timeout = config.timeout_secs;
            }
        }
        if let Some(Commands::Serve { bind }) = &mut self.command
            && bind.is_none()
        {
            *bind = config.bind.clone();
        }

        self
    }

    pub(crate) fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub(crate) fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

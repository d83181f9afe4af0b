//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Log in and print the workout history (default)
    Export,
    /// Normalize a local CSV export without contacting the API
    Normalize {
        /// CSV file to read; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Show the account profile
    Profile,
    /// Show one page of the workout list
    History {
        /// Page number, starting at 0
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Workouts per page
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Serve the workout export over HTTP
    Serve {
        /// Listen address (default 127.0.0.1:8080)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}

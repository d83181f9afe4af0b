mod api;
mod app;
mod cli;
mod config;
mod consts;
mod credentials;
mod error;
mod logging;
mod output;
mod pipeline;
mod server;
#[cfg(test)]
mod test_support;
mod utils;
mod workouts;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = Config::load();
    let cli = cli.with_config(&config);

    match app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

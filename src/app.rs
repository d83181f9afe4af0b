use std::fs;
use std::io::{self, Read, Write};
use std::net::SocketAddr;
use std::path::Path;

use tracing::info;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::consts::DEFAULT_BIND;
use crate::credentials::Credentials;
use crate::error::AppError;
use crate::output::{render_workout_table, to_pretty_json};
use crate::pipeline;
use crate::server::{self, ServerState};
use crate::utils::filter_json;
use crate::workouts::{WorkoutRecord, normalize_with_report};

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        None | Some(Commands::Export) => handle_export(cli),
        Some(Commands::Normalize { file }) => handle_normalize(cli, file.as_deref()),
        Some(Commands::Profile) => handle_profile(cli),
        Some(Commands::History { page, limit }) => handle_history(cli, *page, *limit),
        Some(Commands::Serve { bind }) => handle_serve(cli, bind.as_deref()),
    }
}

/// Print JSON output, optionally filtering through jq
fn print_json(json: &str, jq_filter: Option<&str>) -> Result<(), AppError> {
    match jq_filter {
        Some(filter) => print!("{}", filter_json(json, filter)?),
        None => println!("{json}"),
    }
    Ok(())
}

fn write_stdout(bytes: &[u8]) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes).map_err(AppError::Output)?;
    stdout.flush().map_err(AppError::Output)
}

fn handle_export(cli: &Cli) -> Result<(), AppError> {
    let credentials = Credentials::from_env()?;
    let csv = pipeline::fetch_csv(&cli.client_settings(), &credentials)?;
    emit_export(cli, &csv)
}

fn handle_normalize(cli: &Cli, file: Option<&Path>) -> Result<(), AppError> {
    let csv = read_input(file)?;
    emit_export(cli, &csv)
}

/// Write a raw CSV export in the selected format
fn emit_export(cli: &Cli, csv: &[u8]) -> Result<(), AppError> {
    match cli.output_format() {
        OutputFormat::Csv => write_stdout(csv),
        OutputFormat::Json => {
            let (records, report) = normalize_with_report(csv);
            info!(
                records = records.len(),
                blank_rows = report.blank_rows,
                quoted_rows = report.quoted_rows,
                "normalized export"
            );
            print_json(&to_pretty_json(&records)?, cli.jq.as_deref())
        }
        OutputFormat::Table => {
            let (records, _) = normalize_with_report(csv);
            print_table(&records, cli.use_color());
            Ok(())
        }
    }
}

fn print_table(records: &[WorkoutRecord], use_color: bool) {
    if records.is_empty() {
        println!("No workouts found.");
        return;
    }
    println!("{}", render_workout_table(records, use_color));
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>, AppError> {
    match file {
        Some(path) if path != Path::new("-") => fs::read(path).map_err(|source| AppError::Input {
            path: path.display().to_string(),
            source,
        }),
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|source| AppError::Input {
                    path: "stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn handle_profile(cli: &Cli) -> Result<(), AppError> {
    let credentials = Credentials::from_env()?;
    let profile = pipeline::fetch_profile(&cli.client_settings(), &credentials)?;
    print_json(&to_pretty_json(&profile)?, cli.jq.as_deref())
}

fn handle_history(cli: &Cli, page: u32, limit: u32) -> Result<(), AppError> {
    let credentials = Credentials::from_env()?;
    let workouts = pipeline::fetch_history(&cli.client_settings(), &credentials, page, limit)?;
    print_json(&to_pretty_json(&workouts)?, cli.jq.as_deref())
}

fn parse_bind(bind: Option<&str>) -> Result<SocketAddr, AppError> {
    let input = bind.unwrap_or(DEFAULT_BIND);
    input.parse().map_err(|_| AppError::InvalidBind {
        input: input.to_string(),
    })
}

fn handle_serve(cli: &Cli, bind: Option<&str>) -> Result<(), AppError> {
    let addr = parse_bind(bind)?;
    let credentials = Credentials::from_env()?;
    let state = ServerState::new(cli.client_settings(), credentials);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Server)?;
    runtime.block_on(server::serve(addr, state))
}

//! pokedex CLI
//!
//! Builds the regional dex database from PokeAPI, exports it as a JSON
//! catalogue, and answers "which Pokemon are in this game" lookups.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Print an empty line through the logger, so `--quiet` hides it too.
pub(crate) fn log_blank() {
    log::info!("");
}

/// `to_stderr` keeps stdout clean for machine-readable output.
fn init_logging(quiet: bool, verbose: bool, to_stderr: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(if to_stderr {
            env_logger::Target::Stderr
        } else {
            env_logger::Target::Stdout
        })
        // HTTP internals are noise even at --verbose.
        .filter_module("hyper_util", LevelFilter::Info)
        .filter_module("reqwest", LevelFilter::Info)
        .filter_module("rustls", LevelFilter::Info);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Error | log::Level::Warn => {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
            _ => writeln!(buf, "{}", record.args()),
        });
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    let json_output = matches!(cli.command, Commands::Lookup { json: true, .. });
    init_logging(cli.quiet, cli.verbose, json_output);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        db,
        quiet,
        command,
        ..
    } = cli;

    // Loaded per command so `config` still works when settings.toml is broken.
    let settings = || {
        pokedex_lib::settings::load_settings().map_err(|e| CliError::config(e.to_string()))
    };

    match command {
        Commands::Build { api_url } => {
            let settings = settings()?;
            commands::build::run_build(
                settings.resolve_db_path(db),
                settings.resolve_api_base_url(api_url),
                quiet,
            )
        }
        Commands::AddDex {
            dex,
            replace,
            api_url,
        } => {
            let settings = settings()?;
            commands::add_dex::run_add_dex(
                dex,
                replace,
                settings.resolve_db_path(db),
                settings.resolve_api_base_url(api_url),
                quiet,
            )
        }
        Commands::Export { output } => {
            let settings = settings()?;
            let output = output.unwrap_or_else(|| settings.resolve_catalogue(None).into());
            commands::export::run_export(settings.resolve_db_path(db), output)
        }
        Commands::Games => {
            commands::games::run_games();
            Ok(())
        }
        Commands::Lookup {
            game,
            catalogue,
            json,
        } => {
            let settings = settings()?;
            commands::lookup::run_lookup(&game, settings.resolve_catalogue(catalogue), json)
        }
        Commands::Stats { history } => {
            let settings = settings()?;
            commands::stats::run_stats(settings.resolve_db_path(db), history)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Set { key, value } => commands::config::run_config_set(&key, &value),
        },
    }
}

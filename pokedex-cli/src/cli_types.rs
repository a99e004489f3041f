//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pokedex_core::RegionalDex;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Build and query a regional Pokedex catalogue", long_about = None)]
pub(crate) struct Cli {
    /// SQLite database to build or read (overrides settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create or refresh the pokemon table from the national dex
    Build {
        /// PokeAPI root (e.g., a local mirror)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Fill one regional dex column from PokeAPI
    AddDex {
        /// Dex column or PokeAPI slug (e.g., galar, isle-of-armor, updated_hoenn)
        dex: RegionalDex,

        /// Clear the column before importing
        #[arg(long)]
        replace: bool,

        /// PokeAPI root (e.g., a local mirror)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Write the database out as a JSON catalogue
    Export {
        /// Output file (defaults to the configured catalogue path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported games with their region and dexes
    Games,

    /// Show the Pokemon of a game, grouped by regional dex
    Lookup {
        /// Game title or alias (e.g., "Sword/Shield", swsh, sv)
        game: String,

        /// Catalogue file path or http(s) URL
        #[arg(short, long)]
        catalogue: Option<String>,

        /// Print the groups as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show per-dex counts and import history
    Stats {
        /// Number of import log entries to show
        #[arg(long, default_value = "10")]
        history: u32,
    },

    /// Manage settings.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value comes from
    Show,

    /// Print the settings file path
    Path,

    /// Set a value (db_path, catalogue, api_base_url); an empty value clears it
    Set { key: String, value: String },
}

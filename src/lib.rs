//! rollcall library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod backup;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Sync => cli::commands::sync::handle(cfg),
        Commands::Audit { .. } => cli::commands::audit::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; the CLI may override the database path.
    // test mode never touches the user's config file or mirror.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if cli.test {
        cfg.mirror_file = format!("{}.mirror.csv", cfg.database);
    }

    dispatch(&cli, &cfg)
}

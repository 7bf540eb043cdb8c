//! emstrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
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
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg).await,
        Commands::Logout => cli::commands::login::handle_logout(cfg).await,
        Commands::ClockIn { .. }
        | Commands::ClockOut
        | Commands::BreakIn
        | Commands::BreakOut => cli::commands::clock::handle(&cli.command, cfg).await,
        Commands::Status => cli::commands::status::handle(cfg).await,
        Commands::Logs { .. } => cli::commands::logs::handle(&cli.command, cfg).await,
        Commands::Today => cli::commands::today::handle(cfg).await,
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg).await,
        Commands::Employees { .. } => cli::commands::employees::handle(&cli.command, cfg).await,
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cfg).await,
        Commands::Announce { .. } => cli::commands::announce::handle(&cli.command, cfg).await,
        Commands::Feed { .. } => cli::commands::feed::handle(&cli.command, cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load();

    // 3. apply the server override from the command line, if any
    if let Some(server) = &cli.server {
        cfg.server_url = server.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg).await
}

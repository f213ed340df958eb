//! CLI command definitions.

pub mod applications;
pub mod auth;
pub mod listings;
pub mod maintenance;
pub mod messages;
pub mod properties;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::state::AppState;

/// Manage a local rental portfolio.
#[derive(Debug, Parser)]
#[command(name = "rentfinder")]
#[command(version, about = "Manage a local rental portfolio", long_about = None)]
pub struct Cli {
    /// SQLite file holding the data.
    #[arg(long, env = "RENTFINDER_DB_PATH")]
    pub db_path: Option<String>,

    /// Keep all data in memory; nothing is written to disk.
    #[arg(long)]
    pub in_memory: bool,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Overrides `config` with the flags given on the command line.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.db_path {
            config.db_path = path.clone();
        }
        if self.in_memory {
            config.in_memory = true;
        }
        config
    }

    /// Runs the selected command and returns what should be printed.
    pub async fn run(self, state: &AppState) -> anyhow::Result<Option<String>> {
        let ctx = Context {
            format: self.format,
            quiet: self.quiet,
        };
        match self.command {
            Commands::Properties(cmd) => cmd.run(state, ctx).await,
            Commands::Applications(cmd) => cmd.run(state, ctx).await,
            Commands::Maintenance(cmd) => cmd.run(state, ctx).await,
            Commands::Messages(cmd) => cmd.run(state, ctx).await,
            Commands::Listings(cmd) => cmd.run(ctx),
            Commands::Auth(cmd) => cmd.run(state, ctx).await,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// A confirmation line, dropped under `--quiet`.
    fn notice(&self, message: String) -> Option<String> {
        (!self.quiet).then_some(message)
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rental property management.
    Properties(properties::PropertiesCommand),
    /// Rental applications.
    Applications(applications::ApplicationsCommand),
    /// Maintenance requests.
    Maintenance(maintenance::MaintenanceCommand),
    /// Conversations with tenants.
    Messages(messages::MessagesCommand),
    /// Search the marketplace catalogue.
    Listings(listings::ListingsCommand),
    /// Sign in and out of the mock account.
    Auth(auth::AuthCommand),
}

//! CLI command definitions and dispatch.

pub mod config;
pub mod ls;
pub mod transform;
pub mod tree;

use clap::{Parser, Subcommand};

use assetdrive_core::config::AppConfig;
use assetdrive_core::error::AppError;
use assetdrive_core::traits::AssetSource;
use assetdrive_service::{ExplorerState, FetchOutcome};
use assetdrive_storage::SourceManager;

use crate::output::OutputFormat;

/// AssetDrive: browse a media library as a folder tree
#[derive(Debug, Parser)]
#[command(name = "assetdrive", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Read assets from this JSON file instead of the configured source
    #[arg(short, long, global = true)]
    pub assets: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the folder tree
    Tree(tree::TreeArgs),
    /// List one folder's subfolders and files
    Ls(ls::LsArgs),
    /// Build a delivery URL for a transformed file
    Transform(transform::TransformArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Tree(args) => tree::execute(args, self, &config).await,
            Commands::Ls(args) => ls::execute(args, self, &config).await,
            Commands::Transform(args) => transform::execute(args, self, &config).await,
            Commands::Config(args) => config::execute(args, &self.config, &config, self.format),
        }
    }

    /// The asset source selected by `--assets` or the configuration.
    pub fn source_manager(&self, config: &AppConfig) -> Result<SourceManager, AppError> {
        match &self.assets {
            Some(path) => Ok(SourceManager::from_file(path, &config.source)),
            None => SourceManager::from_config(&config.source),
        }
    }
}

/// Helper: fetch the asset list into a fresh explorer state.
///
/// `search` narrows the listing on the source side.
pub async fn load_explorer(
    cli: &Cli,
    config: &AppConfig,
    search: Option<&str>,
) -> Result<ExplorerState, AppError> {
    let source = cli.source_manager(config)?.source();
    let mut state = ExplorerState::new(&config.explorer);

    let ticket = state.begin_fetch();
    let records = source.list_assets(search).await?;
    match state.apply_fetch(ticket, Ok(records)) {
        FetchOutcome::Applied { folders, files } => {
            tracing::debug!(folders, files, "Explorer loaded");
            Ok(state)
        }
        FetchOutcome::Failed { message } => Err(AppError::internal(message)),
        FetchOutcome::Stale => Err(AppError::internal("Fetch superseded unexpectedly")),
    }
}

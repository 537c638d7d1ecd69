//! `assetdrive transform`: build a delivery URL for a transformed file.

use clap::Args;
use serde::Serialize;

use assetdrive_core::config::AppConfig;
use assetdrive_core::error::AppError;
use assetdrive_entity::transform::{TransformFlags, TransformRequest};

use crate::output::{self, OutputFormat};

use super::Cli;

/// Arguments for the transform command
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Folder path holding the file
    pub path: String,

    /// File (public) id
    pub file_id: String,

    /// Strip the background
    #[arg(long)]
    pub remove_background: bool,

    /// Render in grayscale
    #[arg(long)]
    pub grayscale: bool,

    /// Replace the background using this prompt
    #[arg(long, value_name = "PROMPT")]
    pub replace_background: Option<String>,
}

#[derive(Debug, Serialize)]
struct TransformOutput {
    #[serde(flatten)]
    request: TransformRequest,
    url: String,
}

/// Execute the transform command
pub async fn execute(args: &TransformArgs, cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    let manager = cli.source_manager(config)?;
    let state = super::load_explorer(cli, config, None).await?;

    let folder = state
        .find_by_path(&args.path)
        .ok_or_else(|| AppError::not_found(format!("No folder at '{}'", args.path)))?;

    let flags = TransformFlags {
        remove_background: args.remove_background,
        grayscale: args.grayscale,
        replace_background: args.replace_background.clone(),
    };
    let request = state
        .transform_request(folder.id, &args.file_id, flags)
        .ok_or_else(|| {
            AppError::not_found(format!("No file '{}' in '{}'", args.file_id, args.path))
        })?;
    let url = manager.delivery_url(&request)?;

    match cli.format {
        OutputFormat::Json => output::print_json(&TransformOutput { request, url }),
        OutputFormat::Table => println!("{url}"),
    }

    Ok(())
}

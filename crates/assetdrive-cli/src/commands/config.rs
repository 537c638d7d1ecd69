//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use assetdrive_core::config::AppConfig;
use assetdrive_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Table => {
                println!("Configuration ({config_path})");
                output::print_kv("source.kind", config.source.kind.as_str());
                output::print_kv("source.base_url", &config.source.base_url);
                output::print_kv("source.assets_path", &config.source.assets_path);
                output::print_kv(
                    "source.timeout_seconds",
                    &config.source.timeout_seconds.to_string(),
                );
                output::print_kv("source.file_path", &config.source.file_path);
                output::print_kv("source.cloud_name", or_unset(&config.source.cloud_name));
                output::print_kv("explorer.root_folder_name", &config.explorer.root_folder_name);
                output::print_kv(
                    "explorer.breadcrumb_max_depth",
                    &config.explorer.breadcrumb_max_depth.to_string(),
                );
                output::print_kv("explorer.default_sort", config.explorer.default_sort.as_str());
                output::print_kv("explorer.default_view", config.explorer.default_view.as_str());
                output::print_kv("logging.level", &config.logging.level);
                output::print_kv("logging.format", &config.logging.format);
            }
        },
    }

    Ok(())
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(unset)" } else { value }
}

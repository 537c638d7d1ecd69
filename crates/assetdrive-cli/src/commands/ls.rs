//! `assetdrive ls`: list one folder's subfolders and files.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use assetdrive_core::config::AppConfig;
use assetdrive_core::error::AppError;
use assetdrive_core::types::{FolderId, SortKey};
use assetdrive_entity::file::FileEntry;
use assetdrive_entity::folder::Folder;
use assetdrive_service::{ExplorerState, ListingSummary};

use crate::output::{self, OutputFormat};

use super::Cli;

/// Arguments for the ls command
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Folder path, e.g. `photos/2024`; empty for the top level
    #[arg(default_value = "")]
    pub path: String,

    /// Case-insensitive file name filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: name, date or size
    #[arg(long)]
    pub sort: Option<SortKey>,
}

/// Subfolder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Files directly inside
    files: usize,
    /// Folder ID
    id: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            name: format!("{}/", folder.name),
            files: folder.files.len(),
            id: folder.id.to_string(),
        }
    }
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// Name
    name: String,
    /// Kind
    kind: String,
    /// Size
    size: String,
    /// Last modified
    modified: String,
    /// File ID
    id: String,
}

impl From<&FileEntry> for FileRow {
    fn from(file: &FileEntry) -> Self {
        Self {
            name: file.name.clone(),
            kind: file.kind.to_string(),
            size: file.human_size(),
            modified: file
                .modified_at()
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            id: file.id.clone(),
        }
    }
}

/// JSON shape of a listing
#[derive(Debug, Serialize)]
struct Listing<'a> {
    path: Vec<&'a str>,
    folders: Vec<&'a Folder>,
    files: Vec<&'a FileEntry>,
    summary: Option<ListingSummary>,
}

/// Execute the ls command
pub async fn execute(args: &LsArgs, cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    let mut state = super::load_explorer(cli, config, None).await?;
    if let Some(search) = &args.search {
        state.set_search_query(search.as_str());
    }
    state.set_sort_by(args.sort.unwrap_or(config.explorer.default_sort));

    let parent = select_path(&mut state, &args.path)?;
    let subfolders = state.children_of(parent);
    let files = state.sorted_files();
    let crumbs: Vec<&str> = match parent {
        Some(_) => state.breadcrumbs().into_iter().map(|f| f.name.as_str()).collect(),
        None => Vec::new(),
    };

    match cli.format {
        OutputFormat::Json => output::print_json(&Listing {
            path: crumbs,
            folders: subfolders,
            files,
            summary: state.listing_summary(),
        }),
        OutputFormat::Table => {
            println!("/{}", crumbs.join("/"));

            let folder_rows: Vec<FolderRow> = subfolders.into_iter().map(FolderRow::from).collect();
            if !folder_rows.is_empty() {
                output::print_list(&folder_rows, OutputFormat::Table);
            }

            let file_rows: Vec<FileRow> = files.into_iter().map(FileRow::from).collect();
            output::print_list(&file_rows, OutputFormat::Table);

            if let Some(summary) = state.listing_summary() {
                let shown = if summary.filtered {
                    format!("{} of {}", summary.visible, summary.total)
                } else {
                    summary.total.to_string()
                };
                output::print_kv("Files", &shown);
            }
        }
    }

    Ok(())
}

/// Select the folder at `path` and return it as the parent for subfolder
/// listing. The top level lists root folders and, if present, the files of
/// the implicit root folder.
fn select_path(state: &mut ExplorerState, path: &str) -> Result<Option<FolderId>, AppError> {
    let found = state.find_by_path(path).map(|f| f.id);
    let top_level = path.split('/').all(|s| s.trim().is_empty());

    match (found, top_level) {
        (Some(id), false) => {
            state.select_folder(Some(id));
            Ok(Some(id))
        }
        (home, true) => {
            state.select_folder(home);
            Ok(None)
        }
        (None, false) => Err(AppError::not_found(format!("No folder at '{path}'"))),
    }
}

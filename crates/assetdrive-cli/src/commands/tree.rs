//! `assetdrive tree`: print the synthesized folder tree.

use clap::Args;

use assetdrive_core::config::AppConfig;
use assetdrive_core::error::AppError;
use assetdrive_entity::folder::FolderNode;

use crate::output::{self, OutputFormat};

use super::Cli;

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Max depth to print (0 = roots only)
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Only include assets matching this term
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Execute the tree command
pub async fn execute(args: &TreeArgs, cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    let state = super::load_explorer(cli, config, args.search.as_deref()).await?;
    let tree = state.builder().tree(state.folders());

    match cli.format {
        OutputFormat::Json => output::print_json(&tree),
        OutputFormat::Table => {
            if tree.roots.is_empty() {
                println!("No folders.");
                return Ok(());
            }
            println!("/");
            for line in render(&tree.roots, args.depth) {
                println!("{line}");
            }
            println!();
            output::print_kv("Folders", &tree.total_folders.to_string());
            let files: usize = tree.roots.iter().map(FolderNode::total_file_count).sum();
            output::print_kv("Files", &files.to_string());
        }
    }

    Ok(())
}

/// Render nodes as box-drawing lines, children indented below parents.
fn render(nodes: &[FolderNode], max_depth: Option<usize>) -> Vec<String> {
    fn go(nodes: &[FolderNode], prefix: &str, max_depth: Option<usize>, lines: &mut Vec<String>) {
        for (i, node) in nodes.iter().enumerate() {
            let last = i + 1 == nodes.len();
            let branch = if last { "└── " } else { "├── " };
            lines.push(format!(
                "{prefix}{branch}{}/ ({})",
                node.name, node.file_count
            ));
            if max_depth.is_some_and(|max| node.depth >= max) {
                continue;
            }
            let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
            go(&node.children, &child_prefix, max_depth, lines);
        }
    }

    let mut lines = Vec::new();
    go(nodes, "", max_depth, &mut lines);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdrive_core::types::FolderId;

    fn node(name: &str, depth: usize, children: Vec<FolderNode>) -> FolderNode {
        FolderNode {
            id: FolderId::new(),
            name: name.to_string(),
            depth,
            file_count: 1,
            children,
        }
    }

    #[test]
    fn test_render_nested() {
        let roots = vec![
            node("a", 0, vec![node("b", 1, vec![node("c", 2, vec![])])]),
            node("z", 0, vec![]),
        ];
        assert_eq!(
            render(&roots, None),
            vec![
                "├── a/ (1)",
                "│   └── b/ (1)",
                "│       └── c/ (1)",
                "└── z/ (1)",
            ]
        );
        assert_eq!(render(&roots, Some(0)), vec!["├── a/ (1)", "└── z/ (1)"]);
    }
}

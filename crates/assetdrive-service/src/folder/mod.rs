//! Folder tree synthesis from asset paths.

pub mod builder;
pub mod path;

pub use builder::{BuiltFolders, TreeBuilder};
pub use path::normalize_path;

//! In-memory namespace of named folders holding named files, addressed by
//! slash-delimited paths.
//!
//! ```
//! let mut root = nstree::Root::new();
//! root.create_folder_path("/root/files").unwrap();
//! root.create_file_path("/root/files", "main.txt", "hello world").unwrap();
//! assert_eq!(root.read_to_string("/root/files/main.txt").unwrap(), "hello world");
//! ```

mod error;
mod node;
mod root;
mod store;

pub mod path;
pub mod tree_format;

pub use error::{Error, Result};
pub use node::{File, FileID, Folder, FolderID, NodeID, ROOT_ID};
pub use root::Root;

#[cfg(test)]
mod tests;

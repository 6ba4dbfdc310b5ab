use anyhow::{Result, anyhow};
use clap::Args;
use diagnostics::log_debug;
use nstree::Root;

/// Entries used to populate a fresh tree before a command runs.
#[derive(Args, Debug, Default, Clone)]
pub struct SeedArgs {
    /// Create a file, given as PATH=CONTENT; the last path segment is the filename
    #[arg(long = "put", value_name = "PATH=CONTENT")]
    pub puts: Vec<String>,

    /// Create a folder path, including any missing ancestors
    #[arg(long = "mkdir", value_name = "PATH")]
    pub mkdirs: Vec<String>,
}

/// A parsed `--put` entry.
#[derive(Debug, PartialEq, Eq)]
pub struct PutEntry {
    pub folder: String,
    pub filename: String,
    pub content: String,
}

/// Parses `PATH=CONTENT`, splitting at the first `=`.
pub fn parse_put(entry: &str) -> Result<PutEntry> {
    let (path, content) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected PATH=CONTENT, got {entry:?}"))?;
    let (folders, filename) = nstree::path::split_file(path)
        .ok_or_else(|| anyhow!("File path {path:?} needs a folder and a filename"))?;

    Ok(PutEntry {
        folder: nstree::path::join(&folders),
        filename: filename.to_string(),
        content: content.to_string(),
    })
}

/// Builds a tree from the seed entries, folders first.
pub fn build_root(seed: &SeedArgs) -> Result<Root> {
    let mut root = Root::new();

    for path in &seed.mkdirs {
        _ = root.create_folder_path(path)?;
    }

    for entry in &seed.puts {
        let put = parse_put(entry)?;
        _ = root.create_file_path(&put.folder, &put.filename, put.content.as_bytes())?;
    }

    log_debug!(
        "Seeded tree with {nodes} nodes",
        nodes: root.node_count()
    );
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put() {
        assert_eq!(
            parse_put("/root/files/main.txt=hello=world").unwrap(),
            PutEntry {
                folder: "/root/files".to_string(),
                filename: "main.txt".to_string(),
                content: "hello=world".to_string(),
            }
        );
        assert!(parse_put("/no/equals").is_err());
        assert!(parse_put("/toplevel=content").is_err());
    }

    #[test]
    fn test_build_root() {
        let seed = SeedArgs {
            puts: vec!["a/b/f=x".to_string()],
            mkdirs: vec!["/empty".to_string()],
        };
        let root = build_root(&seed).unwrap();
        assert!(root.exists("/empty"));
        assert_eq!(root.read_to_string("/a/b/f").unwrap(), "x");
    }
}

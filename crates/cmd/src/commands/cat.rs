use std::io::Write;

use anyhow::Result;
use diagnostics::log_debug;

use crate::common::{SeedArgs, build_root};

/// Seeds a tree and writes the content of the file at `path` to `out`.
pub fn cat_command<O: Write>(seed: &SeedArgs, path: &str, out: &mut O) -> Result<()> {
    let root = build_root(seed)?;
    let content = root.read_file_path(path)?;

    log_debug!("Read {len} bytes from {path}", len: content.len(), path: path);
    out.write_all(&content)?;
    Ok(())
}

use std::io::Write;

use anyhow::Result;

use crate::common::{SeedArgs, build_root};

/// Seeds a tree and lists every file path, optionally with its size.
pub fn ls_command<O: Write>(seed: &SeedArgs, long: bool, out: &mut O) -> Result<()> {
    let root = build_root(seed)?;
    for (path, id) in root.walk_files()? {
        if long {
            let size = root.file(id)?.content().len();
            writeln!(out, "{size:>8} {path}")?;
        } else {
            writeln!(out, "{path}")?;
        }
    }
    Ok(())
}

use std::io::Write;

use anyhow::Result;
use nstree::tree_format::format_tree;

use crate::common::{SeedArgs, build_root};

/// Seeds a tree and draws it.
pub fn tree_command<O: Write>(seed: &SeedArgs, out: &mut O) -> Result<()> {
    let root = build_root(seed)?;
    write!(out, "{}", format_tree(&root.tree()?))?;
    Ok(())
}

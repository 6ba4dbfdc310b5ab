use std::io::Write;

use anyhow::Result;
use diagnostics::{log_error, log_info};
use nstree::Root;

pub const DEMO_FOLDER: &str = "/root/files";
pub const DEMO_FILE: &str = "main.txt";
pub const DEMO_CONTENT: &str = "hello world";

/// Builds the sample tree, prints the sample file, then tears the tree down.
///
/// A failed read is reported on `err` and does not stop teardown.
pub fn demo_command<O: Write, E: Write>(out: &mut O, err: &mut E) -> Result<()> {
    let mut root = Root::new();
    _ = root.create_folder_path(DEMO_FOLDER)?;
    _ = root.create_file_path(DEMO_FOLDER, DEMO_FILE, DEMO_CONTENT)?;

    let path = format!("{DEMO_FOLDER}/{DEMO_FILE}");
    match root.read_to_string(&path) {
        Ok(content) => writeln!(out, "File content: {content}")?,
        Err(e) => {
            log_error!("Demo read failed: {error}", error: e.to_string());
            writeln!(err, "{e}")?;
        }
    }

    let released = root.cleanup();
    log_info!("Demo released {released} nodes", released: released);
    Ok(())
}

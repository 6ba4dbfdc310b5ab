use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use diagnostics::{Verbosity, log_error};

use cmd::common::SeedArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "nstree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enable debug logging when NSTREE_LOG is not set
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create /root/files/main.txt, read it back and tear the tree down
    Demo,
    /// Read one file from a seeded tree
    Cat {
        #[command(flatten)]
        seed: SeedArgs,
        /// File path to read
        path: String,
    },
    /// Draw a seeded tree
    Tree {
        #[command(flatten)]
        seed: SeedArgs,
    },
    /// List every file path in a seeded tree
    Ls {
        #[command(flatten)]
        seed: SeedArgs,
        /// Show file sizes
        #[arg(short, long)]
        long: bool,
    },
}

fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => cmd::demo_command(&mut out, &mut std::io::stderr())?,
        Commands::Cat { seed, path } => cmd::cat_command(&seed, &path, &mut out)?,
        Commands::Tree { seed } => cmd::tree_command(&seed, &mut out)?,
        Commands::Ls { seed, long } => cmd::ls_command(&seed, long, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let fallback = if cli.verbose {
        Verbosity::Debug
    } else {
        Verbosity::Off
    };
    diagnostics::init_with_default(fallback);

    if let Err(e) = run(cli) {
        log_error!("Command failed: {error}", error: e.to_string());
        _ = writeln!(std::io::stderr(), "Error: {e}");
        std::process::exit(1);
    }
}

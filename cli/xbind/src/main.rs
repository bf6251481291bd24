//! xbind CLI — binding generator for synchronous-bridge extension modules.

mod commands;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xbind", version, about = "Synchronous-bridge binding generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JS and C sources from a module descriptor
    Generate {
        /// Module descriptor file (<module>.toml)
        descriptor: String,
        /// Custom bindings file (default: <module>_custom_bindings.toml next
        /// to the descriptor, when present)
        #[arg(long)]
        customs: Option<String>,
        /// Output directory (default: current directory)
        #[arg(long)]
        out_dir: Option<String>,
        /// Emit only the JavaScript module
        #[arg(long)]
        js_only: bool,
    },
    /// Validate a descriptor and its custom bindings without emitting
    Check {
        /// Module descriptor file (<module>.toml)
        descriptor: String,
        /// Custom bindings file
        #[arg(long)]
        customs: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            descriptor,
            customs,
            out_dir,
            js_only,
        } => commands::generate::run(
            Path::new(&descriptor),
            customs.as_deref().map(Path::new),
            out_dir.as_deref().map(Path::new),
            js_only,
        ),

        Commands::Check {
            descriptor,
            customs,
        } => commands::check::run(Path::new(&descriptor), customs.as_deref().map(Path::new)),
    }
}

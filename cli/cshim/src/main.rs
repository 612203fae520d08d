//! cshim CLI — generates flat C-ABI shim headers for C++ libraries.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cshim", version, about = "C-ABI shim generator for C++ libraries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shim headers and symbol tables from declaration manifests
    Generate {
        /// Declaration manifests (.shim.toml), one per library
        #[arg(required = true)]
        manifests: Vec<PathBuf>,
        /// Target platform (windows-like, posix-like)
        #[arg(long)]
        platform: String,
        /// Output directory for generated headers and symbol tables
        #[arg(long, default_value = "shim-out")]
        out_dir: PathBuf,
        /// Policy for types without a public destructor
        #[arg(long, value_enum, default_value = "skip")]
        on_undestructible: Undestructible,
    },
    /// Validate declaration manifests without generating anything
    Check {
        /// Declaration manifests (.shim.toml)
        #[arg(required = true)]
        manifests: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Undestructible {
    /// Exclude the type from the exported surface with a warning
    Skip,
    /// Abort generation of the library
    Fail,
}

impl From<Undestructible> for cshim_gen::UndestructiblePolicy {
    fn from(value: Undestructible) -> Self {
        match value {
            Undestructible::Skip => cshim_gen::UndestructiblePolicy::Skip,
            Undestructible::Fail => cshim_gen::UndestructiblePolicy::Fail,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            manifests,
            platform,
            out_dir,
            on_undestructible,
        } => commands::generate::run(&manifests, &platform, &out_dir, on_undestructible.into()),
        Commands::Check { manifests } => commands::check::run(&manifests),
    }
}

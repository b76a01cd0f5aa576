use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rulekit - rule and prompt compiler for AI coding assistants
#[derive(Parser, Debug)]
#[command(name = "rulekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a resource document for one or more targets
    Compile {
        /// Path to the resource document (YAML or JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Target names (markdown, kiro, cursor, claude, copilot)
        #[arg(short, long, value_delimiter = ',')]
        targets: Vec<String>,

        /// Output root directory (prints to stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Write directly under the output root, without per-target
        /// subdirectories
        #[arg(long)]
        flat: bool,

        /// Path to rulekit.toml (defaults to ./rulekit.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List registered targets
    Targets,

    /// Parse and display a resource document (debugging)
    #[command(hide = true)]
    Parse {
        /// Path to the resource document
        #[arg(short, long)]
        file: PathBuf,
    },
}

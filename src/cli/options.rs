use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Classify DOS game files, sniff executables and pick filesystem strategies
#[derive(Parser)]
#[command(name = "gamebox-filetypes")]
#[command(about = "Classify DOS game files and check whether they can run under emulation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct FileTypesCli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON or YAML file of extension -> application overrides
    #[arg(long, global = true)]
    pub overrides: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the category and type sets of files or folders
    Classify {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Report the executable type and header details of files
    Sniff {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Check whether programs can run under DOS emulation
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show how the contents of images or folders would be accessed
    Strategy {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Show which application should open a file
    OpenWith { file: PathBuf },

    /// Find every program below a directory and check its compatibility
    Scan {
        directory: PathBuf,

        /// Descend into at most this many directory levels
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

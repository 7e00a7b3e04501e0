//! CLI commands and argument parsing

use crate::types::{FolderId, OrgId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Organization folder listing CLI
#[derive(Parser, Debug)]
#[command(name = "folder-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Folder data file (JSON), overrides `data.path` from the config
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every folder of an organization
    All {
        /// Organization id
        #[arg(long)]
        org: OrgId,
    },

    /// Fetch one page of an organization's folders
    Page {
        /// Organization id
        #[arg(long)]
        org: OrgId,

        /// Page size (defaults to `pagination.default_page_size`)
        #[arg(long)]
        size: Option<usize>,

        /// Id of the first folder in the page
        #[arg(long)]
        starting_at: Option<FolderId>,
    },

    /// Fetch pages until the cursor chain ends
    Walk {
        /// Organization id
        #[arg(long)]
        org: OrgId,

        /// Page size (defaults to `pagination.default_page_size`)
        #[arg(long)]
        size: Option<usize>,

        /// Id of the first folder of the first page
        #[arg(long)]
        starting_at: Option<FolderId>,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (defaults to `server.port`)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

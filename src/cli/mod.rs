pub mod apply;
pub mod check;
pub mod init;
pub mod slug;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formfix")]
#[command(version)]
#[command(about = "Form-UX behaviors: slug sync, autofocus, confirm gates", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "formfix.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Slugify titles from arguments, or stdin when none are given
    Slug {
        titles: Vec<String>,
    },
    /// Validate an alias against the form contract
    Check {
        alias: String,
    },
    /// Run the behaviors against a page fixture and print the result
    Apply {
        /// Page fixture (JSON)
        #[arg(short, long)]
        page: PathBuf,
        /// Event script (JSON array); defaults to a single ready event
        #[arg(short, long)]
        events: Option<PathBuf>,
        /// Answer every confirm prompt with yes instead of asking
        #[arg(long)]
        assume_yes: bool,
    },
}

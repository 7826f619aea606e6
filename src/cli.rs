//! Command-line interface, parsed with clap.

use clap::{Parser, Subcommand};

/// Leadarr - Lead Generation CRM
/// A self-hosted pipeline for companies, contacts and job leads
#[derive(Parser)]
#[command(name = "leadarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP daemon
    #[command(alias = "daemon", alias = "d")]
    Serve,

    /// Run a platform search and print a summary
    #[command(alias = "s")]
    Search {
        /// Search keywords
        #[arg(required = true)]
        query: Vec<String>,

        /// Location filter
        #[arg(long)]
        location: Option<String>,
    },

    /// Print CRM totals
    Stats,

    /// Show recent searches
    #[command(alias = "h")]
    History {
        /// Maximum entries to print
        #[arg(default_value_t = 10)]
        limit: usize,
    },

    /// Create default config file
    Init,
}

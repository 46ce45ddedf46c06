//! CLI argument definitions for pinset.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pinset",
    version,
    about = "Validate and resolve pinned requirements manifests",
    long_about = "pinset reads grouped `name==version` requirement manifests, reports duplicate, \
                  conflicting and malformed pins in one pass, merges manifests in priority order, \
                  and produces a reproducible, group-partitioned environment for an installer."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Manifest to read (defaults to requirements.txt in this or a parent directory)
    #[arg(short, long, global = true, env = "PINSET_MANIFEST")]
    pub manifest: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse and validate the manifest
    Check,

    /// Print the resolved environment by group
    Show {
        /// Only show this group (repeatable)
        #[arg(short, long = "group")]
        groups: Vec<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the manifest and write the lockfile
    Lock {
        /// Fail if the lockfile is missing or out of date instead of writing it
        #[arg(long)]
        check: bool,
    },

    /// Merge manifests, lowest priority first
    Merge {
        /// Manifests to merge, in priority order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Write the merged manifest to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write selected groups as a flat requirements list
    Export {
        /// Group to include (repeatable; all groups when omitted)
        #[arg(short, long = "group")]
        groups: Vec<String>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

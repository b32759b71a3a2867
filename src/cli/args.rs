//! Defines the command-line arguments and subcommands for the protomig CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "protomig",
    version,
    about = "Migrates legacy namespace/prototype sources into class declarations."
)]
pub struct ProtomigArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full migration and write the transformed sources.
    Migrate {
        /// A legacy source file, or a directory scanned recursively.
        #[arg(required = true)]
        path: PathBuf,
        /// Directory to write transformed units into. Without it the
        /// transformed sources are printed to stdout as a dry run.
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[command(flatten)]
        dialect: DialectArgs,
    },
    /// Show a per-unit colored diff of the migration without writing files.
    Diff {
        /// A legacy source file, or a directory scanned recursively.
        #[arg(required = true)]
        path: PathBuf,
        #[command(flatten)]
        dialect: DialectArgs,
    },
    /// Dump the symbol table and dependency graph as JSON.
    Report {
        /// A legacy source file, or a directory scanned recursively.
        #[arg(required = true)]
        path: PathBuf,
        #[command(flatten)]
        dialect: DialectArgs,
    },
}

/// Dialect settings shared by every subcommand.
#[derive(Debug, Args)]
pub struct DialectArgs {
    /// The namespace identifier the legacy sources hang everything from.
    #[arg(long, default_value = "APP")]
    pub namespace: String,
    /// Logical name of the root unit that initializes the namespace.
    #[arg(long, default_value = "Main")]
    pub root_unit: String,
}

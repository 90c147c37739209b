//! CLI argument definitions for the Arbor binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Arbor in-memory document store inspector
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Arbor: seed an in-memory store from JSON and inspect it")]
#[command(version)]
pub struct Cli {
    /// JSON file of `collection -> id -> data` to seed the store with
    #[arg(short, long, global = true, env = "ARBOR_SEED")]
    pub seed: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "ARBOR_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the value at a dotted path
    Get(GetArgs),
    /// List collections with their document counts
    Collections,
    /// Destroy everything at a dotted path and print what remains
    Destroy(DestroyArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted path; empty for the whole tree
    #[arg(default_value = "")]
    pub path: String,

    /// Read a one-level copy
    #[arg(long, conflicts_with = "deep")]
    pub copy: bool,

    /// Read a fully independent copy
    #[arg(long)]
    pub deep: bool,
}

/// Arguments for the destroy command
#[derive(clap::Args, Debug)]
pub struct DestroyArgs {
    /// Dotted path; empty wipes the whole store
    #[arg(default_value = "")]
    pub path: String,
}

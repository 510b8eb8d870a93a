//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and global flags.
//! Individual command definitions are in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::commands::Command;
use crate::config::{Engine, EnumMode};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a resolver config file (defaults to ./.ormgen.json when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Target database engine (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub engine: Option<Engine>,

    /// Storage of enum fields (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub enums: Option<EnumMode>,

    /// Suppress resolver warnings
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Log filter implied by `-v`, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

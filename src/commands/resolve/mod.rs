mod cli_tests;
mod execute;
mod output;

use std::path::PathBuf;

use clap::Args;

use crate::commands::validate_file_exists;

/// Resolve a descriptor set and print every resolved type with its fields
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  ormgen resolve -f descriptors.json               # All resolved types
  ormgen resolve -f descriptors.json -t Account    # A single type
  ormgen resolve -f descriptors.json -o json       # Machine-readable output")]
pub struct ResolveCmd {
    /// Path to the descriptor set JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub file: PathBuf,

    /// Only show this type (origin name or target name)
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,
}

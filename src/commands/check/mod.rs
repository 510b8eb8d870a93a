mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use std::path::PathBuf;

use clap::Args;

use crate::commands::validate_file_exists;

/// Resolve a descriptor set and print a summary
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  ormgen check -f descriptors.json                  # Summary with warnings
  ormgen check -f descriptors.json --engine postgres
  ormgen check -f descriptors.json -q -o json       # No warnings, JSON summary")]
pub struct CheckCmd {
    /// Path to the descriptor set JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub file: PathBuf,
}

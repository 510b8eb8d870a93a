mod execute;
mod execute_tests;
mod output;
mod output_tests;

use std::path::PathBuf;

use clap::Args;

use crate::commands::validate_file_exists;
use crate::schema::RelationKind;

/// List association fields with their resolved keys and join tables
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  ormgen associations -f descriptors.json                   # Every association
  ormgen associations -f descriptors.json -k many-to-many   # Join tables only
  ormgen associations -f descriptors.json -o toon           # Compact output")]
pub struct AssociationsCmd {
    /// Path to the descriptor set JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub file: PathBuf,

    /// Only show associations of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<RelationKind>,
}

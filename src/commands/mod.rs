//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` building a command-specific result from the resolved schema
//! - `output.rs` formatting that result for display

mod associations;
mod check;
mod resolve;

pub use associations::AssociationsCmd;
pub use check::CheckCmd;
pub use resolve::ResolveCmd;

use clap::Subcommand;
use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ResolverConfig;
use crate::descriptor::load_descriptors;
use crate::output::{OutputFormat, Outputable};
use crate::resolve::{resolve, ResolvedSchema};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config: &ResolverConfig) -> Result<Self::Output, Box<dyn Error>>;
}

/// Execute a command and format its result.
pub trait CommandRunner {
    fn run(self, config: &ResolverConfig, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

impl<T: Execute> CommandRunner for T {
    fn run(self, config: &ResolverConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a descriptor set and print every resolved type with its fields
    Resolve(ResolveCmd),

    /// List association fields with their resolved keys and join tables
    Associations(AssociationsCmd),

    /// Resolve a descriptor set and print a summary
    Check(CheckCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config: &ResolverConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Resolve(cmd) => cmd.run(config, format),
            Command::Associations(cmd) => cmd.run(config, format),
            Command::Check(cmd) => cmd.run(config, format),
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}

pub(crate) fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}

/// Load a descriptor file and run the resolver over it.
pub(crate) fn load_schema(file: &Path, config: &ResolverConfig) -> Result<ResolvedSchema, Box<dyn Error>> {
    let set = load_descriptors(file)?;
    info!(file = %file.display(), modules = set.modules.len(), "loaded descriptors");
    let schema = resolve(&set, config)?;
    Ok(schema)
}

/// Display form of a descriptor path, as carried in command results.
pub(crate) fn source_name(file: &Path) -> String {
    file.display().to_string()
}

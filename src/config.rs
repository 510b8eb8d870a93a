//! Resolver configuration.
//!
//! Settings come from an optional `.ormgen.json` file in the current
//! directory (or an explicit `--config` path); command-line flags override
//! whatever the file sets.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".ormgen.json";

/// Target database engine. Some type substitutions only exist for postgres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Unset,
    Postgres,
}

/// How enum fields are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EnumMode {
    #[default]
    Int,
    String,
}

/// Settings consumed by the resolver and the default type mapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub engine: Engine,
    pub enums: EnumMode,
    /// Suppress non-fatal warnings
    pub quiet: bool,
}

impl ResolverConfig {
    pub fn string_enums(&self) -> bool {
        self.enums == EnumMode::String
    }

    pub fn is_postgres(&self) -> bool {
        self.engine == Engine::Postgres
    }

    /// Load configuration from `path`, or from `.ormgen.json` when no path is
    /// given. A missing default file yields the defaults; a missing explicit
    /// file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&config_path).map_err(|e| {
            format!("Failed to read {}: {}", config_path.display(), e)
        })?;

        let config: ResolverConfig = serde_json::from_str(&content).map_err(|e| {
            format!("Invalid JSON in {}: {}", config_path.display(), e)
        })?;

        Ok(config)
    }

    /// Apply command-line overrides on top of file settings.
    pub fn with_overrides(mut self, engine: Option<Engine>, enums: Option<EnumMode>, quiet: bool) -> Self {
        if let Some(engine) = engine {
            self.engine = engine;
        }
        if let Some(enums) = enums {
            self.enums = enums;
        }
        if quiet {
            self.quiet = true;
        }
        self
    }
}

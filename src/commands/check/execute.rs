use std::error::Error;

use serde::Serialize;

use super::CheckCmd;
use crate::commands::{load_schema, source_name, Execute};
use crate::config::ResolverConfig;
use crate::resolve::ResolutionStats;

/// Summary of a successful resolution
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub source: String,
    pub types: usize,
    pub fields: usize,
    pub stats: ResolutionStats,
    pub warnings: Vec<String>,
}

impl Execute for CheckCmd {
    type Output = CheckResult;

    fn execute(self, config: &ResolverConfig) -> Result<Self::Output, Box<dyn Error>> {
        let schema = load_schema(&self.file, config)?;

        Ok(CheckResult {
            source: source_name(&self.file),
            types: schema.types.len(),
            fields: schema.field_count(),
            stats: schema.stats,
            warnings: schema.warnings,
        })
    }
}

//! Shared test utilities for resolver and command tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::config::{Engine, ResolverConfig};
use crate::descriptor::{parse_descriptors, DescriptorSet};
use crate::error::ResolveError;
use crate::fixtures;
use crate::resolve::{resolve, ResolvedSchema};

/// Create a temporary file containing the given content.
///
/// Used to create descriptor and config files for loading tests.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Parse a descriptor set, panicking on invalid JSON.
pub fn descriptors(json: &str) -> DescriptorSet {
    parse_descriptors(json).expect("Fixture should parse")
}

/// Resolve descriptor JSON with the default configuration.
pub fn resolve_json(json: &str) -> Result<ResolvedSchema, ResolveError> {
    resolve(&descriptors(json), &ResolverConfig::default())
}

/// Resolve descriptor JSON with the postgres engine selected.
pub fn resolve_json_postgres(json: &str) -> Result<ResolvedSchema, ResolveError> {
    let config = ResolverConfig {
        engine: Engine::Postgres,
        ..Default::default()
    };
    resolve(&descriptors(json), &config)
}

/// Resolve the accounts fixture.
pub fn accounts_schema() -> ResolvedSchema {
    resolve_json(fixtures::ACCOUNTS).expect("Accounts fixture should resolve")
}

/// Wrap message JSON objects into a single-module descriptor set.
pub fn single_module(messages: &str) -> String {
    format!(
        r#"{{"modules": [{{"name": "acme", "import_path": "github.com/acme/acme", "messages": [{}]}}]}}"#,
        messages
    )
}

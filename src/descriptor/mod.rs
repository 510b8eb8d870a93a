//! Loading annotated message descriptors.
//!
//! The descriptor set is the resolver's only input: per module, the declared
//! messages with their fields and annotation blocks.

mod models;

pub use models::{
    DeclaredType, DescriptorSet, ExtraField, FieldDescriptor, FieldOptions, MessageDescriptor,
    MessageOptions, ModuleDescriptor, TypeKind,
};

use std::fs;
use std::path::Path;

use crate::error::DescriptorError;

/// Parse a descriptor set from JSON text.
pub fn parse_descriptors(content: &str) -> Result<DescriptorSet, DescriptorError> {
    serde_json::from_str(content).map_err(|e| DescriptorError::JsonParseFailed {
        message: e.to_string(),
    })
}

/// Read and parse a descriptor set from a JSON file.
pub fn load_descriptors(path: &Path) -> Result<DescriptorSet, DescriptorError> {
    let content = fs::read_to_string(path).map_err(|e| DescriptorError::FileReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_descriptors(&content)
}

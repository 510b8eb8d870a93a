//! Error types for descriptor loading and schema resolution.
//!
//! Every resolution failure is fatal: the pipeline stops at the first error
//! and no partial schema is returned.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Failed to read descriptor file '{path}': {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Failed to parse descriptor JSON: {message}")]
    JsonParseFailed { message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{name} is not ormable.")]
    NotResolvable { name: String },

    #[error("Primary key cannot be found in {type_name}.")]
    MissingPrimaryKey { type_name: String },

    #[error("Missing {field} field in {type_name}.")]
    MissingReferencedField { field: String, type_name: String },

    #[error(
        "Object {child} from package {child_module} cannot be used for {kind} in {parent} (package {parent_module}) \
         since it does not have FK field {foreign_key} defined. Manually define the key, or switch to {alternative}"
    )]
    CrossModuleForeignKey {
        child: String,
        child_module: String,
        kind: &'static str,
        parent: String,
        parent_module: String,
        foreign_key: String,
        alternative: &'static str,
    },

    #[error(
        "Cannot include {field} field into {type_name} as it already exists there with a different type: {existing} {synthesized}"
    )]
    ForeignKeyTypeConflict {
        field: String,
        type_name: String,
        existing: String,
        synthesized: String,
    },

    #[error("Cannot include {field} field into {type_name} as it already exists there.")]
    DuplicateField { field: String, type_name: String },

    #[error("unknown message type in references_type: {target} in field: {field} of type: {type_name}")]
    UnknownReferencedMessage {
        target: String,
        field: String,
        type_name: String,
    },

    #[error("unknown tag type '{tag_type}' of identifier field {field} in {type_name}")]
    UnknownTagType {
        tag_type: String,
        field: String,
        type_name: String,
    },
}

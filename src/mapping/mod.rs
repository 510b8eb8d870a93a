//! Type mapping: declared IDL types to native field types.
//!
//! The resolver only talks to the `TypeMapper` trait. `StandardTypeMapper`
//! carries the built-in substitution tables (scalars, enums, repeated
//! scalars under postgres, and the well-known message types).

mod standard;

pub use standard::StandardTypeMapper;

use crate::descriptor::{DeclaredType, ExtraField};
use crate::schema::{FieldType, StorageTag, TypeRef};

/// A mapped basic field: its type plus the (possibly rewritten) storage tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub ty: FieldType,
    pub tag: Option<StorageTag>,
}

/// A mapped extra field. `recognized` is false when the type was neither
/// qualified by a package nor a known builtin or special type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraMapping {
    pub ty: TypeRef,
    pub recognized: bool,
}

/// An identifier field carried a column type with no native mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTagType(pub String);

pub trait TypeMapper {
    /// Map one declared field. `Ok(None)` means the field is not a basic
    /// field and is skipped (unsupported repeated fields, non-well-known
    /// messages).
    fn map_field(
        &self,
        declared: &DeclaredType,
        repeated: bool,
        tag: Option<&StorageTag>,
    ) -> Result<Option<Mapping>, UnknownTagType>;

    /// Map a manually declared extra field.
    fn map_extra(&self, extra: &ExtraField) -> ExtraMapping;
}

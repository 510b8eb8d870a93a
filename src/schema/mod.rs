//! Resolved schema model.
//!
//! The registry owns every resolvable type; each type carries an ordered
//! field set whose fields hold a semantic type, a storage tag, an optional
//! association, and provenance.
//!
//! | Type | Role |
//! |------|------|
//! | `Registry` | Owns `RegisteredType` entries in registration order |
//! | `FieldSet` | Name-unique, insertion-ordered fields of one type |
//! | `FieldType` | `Deferred` placeholder or a `Resolved(TypeRef)` |
//! | `Association` | Relationship kind plus its (resolved) key names |
//! | `StorageTag` | Column hints, rendered to a struct tag for the emitter |

mod fields;
mod registry;
mod tag;
mod types;

pub use fields::FieldSet;
pub use registry::{normalize_type_name, ModuleRef, RegisteredType, Registry};
pub use tag::{KeyNames, StorageTag, WritePermission};
pub use types::{
    Association, Field, FieldType, KeyedAssociation, ManyToManyOptions, RelationKind, TypeRef,
    BYTES, TARGET_SUFFIX,
};

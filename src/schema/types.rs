//! Field and association types held by the schema registry.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::tag::{KeyNames, StorageTag};

/// Native byte-sequence type name. Foreign keys of this type are never made nullable.
pub const BYTES: &str = "[]byte";

/// Suffix appended to an origin name to form the target type name.
pub const TARGET_SUFFIX: &str = "ORM";

/// A concrete native type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRef {
    /// Base type name without module qualifier or decoration
    pub name: String,
    /// Module the type lives in; `None` for builtins and types local to the owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub nullable: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub repeated: bool,
}

impl TypeRef {
    /// A builtin, non-nullable type.
    pub fn builtin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            module: None,
            nullable: false,
            repeated: false,
        }
    }

    /// A type qualified by `module`.
    pub fn qualified(module: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            module: Some(module.to_string()),
            nullable: false,
            repeated: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn non_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    pub fn is_byte_sequence(&self) -> bool {
        self.name == BYTES
    }

    /// Re-qualify this type for use inside `module`: a qualifier naming the
    /// holder's own module is dropped, any other qualifier is kept.
    pub fn requalified_for(mut self, module: Option<&str>) -> Self {
        if module.is_some() && self.module.as_deref() == module {
            self.module = None;
        }
        self
    }

    /// Short alias a module is referred to by: the last path segment, minus
    /// any dotted prefix (`github.com/satori/go.uuid` is `uuid`).
    pub fn module_alias(module: &str) -> &str {
        let segment = module.rsplit('/').find(|s| !s.is_empty()).unwrap_or(module);
        segment.rsplit('.').next().unwrap_or(segment)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeated {
            write!(f, "[]")?;
        }
        if self.nullable {
            write!(f, "*")?;
        }
        if let Some(module) = &self.module {
            write!(f, "{}.", Self::module_alias(module))?;
        }
        write!(f, "{}", self.name)
    }
}

/// Semantic type of a field.
///
/// `Deferred` marks a field whose concrete type is only known once an
/// association fixes it; association resolution upgrades it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "type", rename_all = "snake_case")]
pub enum FieldType {
    Deferred,
    Resolved(TypeRef),
}

impl FieldType {
    pub fn as_resolved(&self) -> Option<&TypeRef> {
        match self {
            FieldType::Deferred => None,
            FieldType::Resolved(ty) => Some(ty),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, FieldType::Deferred)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Deferred => write!(f, "interface{{}}"),
            FieldType::Resolved(ty) => write!(f, "{}", ty),
        }
    }
}

/// Relationship kind of an association field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    HasOne,
    HasMany,
    BelongsTo,
    ManyToMany,
}

impl RelationKind {
    pub fn label(&self) -> &'static str {
        match self {
            RelationKind::HasOne => "has-one",
            RelationKind::HasMany => "has-many",
            RelationKind::BelongsTo => "belongs-to",
            RelationKind::ManyToMany => "many-to-many",
        }
    }
}

/// Options shared by has-one, has-many and belongs-to.
///
/// `foreign_key` and `references` start as the explicit annotation values (if
/// any) and hold the resolved names afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyedAssociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
    /// Tag applied to the synthesized foreign-key field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key_tag: Option<StorageTag>,
}

impl KeyedAssociation {
    pub fn foreign_key_not_null(&self) -> bool {
        self.foreign_key_tag.as_ref().is_some_and(|tag| tag.not_null)
    }
}

/// Many-to-many options; the join-table shape lives entirely here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManyToManyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_foreign_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_references: Option<String>,
}

/// Relationship annotation of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Association {
    HasOne(KeyedAssociation),
    HasMany(KeyedAssociation),
    BelongsTo(KeyedAssociation),
    ManyToMany(ManyToManyOptions),
}

impl Association {
    pub fn kind(&self) -> RelationKind {
        match self {
            Association::HasOne(_) => RelationKind::HasOne,
            Association::HasMany(_) => RelationKind::HasMany,
            Association::BelongsTo(_) => RelationKind::BelongsTo,
            Association::ManyToMany(_) => RelationKind::ManyToMany,
        }
    }

    pub fn key_names(&self) -> KeyNames<'_> {
        match self {
            Association::HasOne(opts) | Association::HasMany(opts) | Association::BelongsTo(opts) => {
                KeyNames {
                    foreign_key: opts.foreign_key.as_deref(),
                    references: opts.references.as_deref(),
                    ..KeyNames::default()
                }
            }
            Association::ManyToMany(opts) => KeyNames {
                foreign_key: opts.foreign_key.as_deref(),
                references: opts.references.as_deref(),
                join_table: opts.join_table.as_deref(),
                join_foreign_key: opts.join_foreign_key.as_deref(),
                join_references: opts.join_references.as_deref(),
            },
        }
    }
}

/// A single attribute of a registered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<StorageTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association: Option<Association>,
    /// Origin name of the type that caused this field to exist. Used only to
    /// pick a concrete decode target, never to traverse ownership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: None,
            association: None,
            provenance: None,
        }
    }

    pub fn with_tag(mut self, tag: Option<StorageTag>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_association(mut self, association: Option<Association>) -> Self {
        self.association = association;
        self
    }

    pub fn is_primary_key(&self) -> bool {
        self.tag.as_ref().is_some_and(|tag| tag.primary_key)
    }

    /// Rendered struct tag for the emitter.
    pub fn storage_tag(&self) -> Option<String> {
        StorageTag::render(self.tag.as_ref(), self.association.as_ref())
    }
}

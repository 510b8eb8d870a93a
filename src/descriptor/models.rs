//! JSON descriptor structures for annotated message definitions.
//!
//! These types are deserialized from the descriptor set produced by the IDL
//! front end and are treated as read-only input by the resolver.

use serde::Deserialize;

use crate::schema::{Association, StorageTag};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescriptorSet {
    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDescriptor {
    /// IDL package name
    pub name: String,
    #[serde(default)]
    pub import_path: Option<String>,
    #[serde(default)]
    pub messages: Vec<MessageDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageDescriptor {
    pub name: String,
    #[serde(default)]
    pub map_entry: bool,
    #[serde(default)]
    pub options: Option<MessageOptions>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    /// Short name: the last segment of a dotted name.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn is_ormable(&self) -> bool {
        self.options.as_ref().is_some_and(|opts| opts.ormable)
    }

    pub fn extra_fields(&self) -> &[ExtraField] {
        self.options
            .as_ref()
            .map(|opts| opts.include.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageOptions {
    pub ormable: bool,
    pub table: Option<String>,
    /// Manually declared fields merged in after the declared ones
    pub include: Vec<ExtraField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtraField {
    pub name: String,
    /// Native type; a leading `*` marks it nullable
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub tag: Option<StorageTag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Scalar,
    Enum,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeclaredType {
    pub kind: TypeKind,
    /// Scalar keyword, or (possibly dotted) enum/message name
    pub name: String,
}

impl DeclaredType {
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub declared: DeclaredType,
    #[serde(default)]
    pub repeated: bool,
    #[serde(default)]
    pub options: Option<FieldOptions>,
}

impl FieldDescriptor {
    pub fn is_dropped(&self) -> bool {
        self.options.as_ref().is_some_and(|opts| opts.drop)
    }

    pub fn tag(&self) -> Option<&StorageTag> {
        self.options.as_ref().and_then(|opts| opts.tag.as_ref())
    }

    pub fn association(&self) -> Option<&Association> {
        self.options.as_ref().and_then(|opts| opts.association.as_ref())
    }

    pub fn is_embedded(&self) -> bool {
        self.tag().is_some_and(|tag| tag.embedded)
    }

    pub fn is_many_to_many(&self) -> bool {
        matches!(self.association(), Some(Association::ManyToMany(_)))
    }

    pub fn is_belongs_to(&self) -> bool {
        matches!(self.association(), Some(Association::BelongsTo(_)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Skip the field entirely
    pub drop: bool,
    pub tag: Option<StorageTag>,
    /// Explicit cross-reference to another message, by short name
    pub references_type: Option<String>,
    pub association: Option<Association>,
}

//! Registry of resolvable types.
//!
//! The registry owns every `RegisteredType` for the duration of a resolution.
//! Entries are created in the registration pass and only ever gain fields.

use std::collections::BTreeSet;

use heck::ToSnakeCase;
use indexmap::IndexMap;
use serde::Serialize;

use super::fields::FieldSet;
use super::types::TARGET_SUFFIX;
use crate::error::ResolveError;
use crate::inflection;

/// The module a type is declared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRef {
    /// IDL package name; identity used for cross-module checks
    pub name: String,
    /// Native module path used to qualify types from this module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_path: Option<String>,
}

/// A resolvable target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredType {
    /// Name as declared
    pub origin_name: String,
    /// Derived target name
    pub name: String,
    pub module: ModuleRef,
    /// Explicit table name, if annotated
    pub table: Option<String>,
    pub fields: FieldSet,
}

impl RegisteredType {
    pub fn new(origin_name: &str, module: ModuleRef, table: Option<String>) -> Self {
        Self {
            origin_name: origin_name.to_string(),
            name: format!("{}{}", origin_name, TARGET_SUFFIX),
            module,
            table,
            fields: FieldSet::new(),
        }
    }

    /// Explicit table name, else the plural snake-case origin name.
    pub fn table_name(&self) -> String {
        match &self.table {
            Some(table) if !table.is_empty() => table.clone(),
            _ => inflection::plural(&self.origin_name.to_snake_case()),
        }
    }
}

/// Strip array/pointer decoration and module qualifiers from a type name.
pub fn normalize_type_name(type_name: &str) -> &str {
    let short = type_name.rsplit('.').next().unwrap_or(type_name);
    short.trim_matches(|c| c == '[' || c == ']' || c == '*')
}

#[derive(Debug, Default)]
pub struct Registry {
    types: IndexMap<String, RegisteredType>,
    messages: BTreeSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a type keyed by origin name. The first registration wins;
    /// returns whether this call inserted.
    pub fn register(&mut self, ty: RegisteredType) -> bool {
        if self.types.contains_key(&ty.origin_name) {
            return false;
        }
        self.types.insert(ty.origin_name.clone(), ty);
        true
    }

    /// Record a declared message name, resolvable or not.
    pub fn note_message(&mut self, name: &str) {
        self.messages.insert(name.to_string());
    }

    pub fn is_known_message(&self, name: &str) -> bool {
        self.messages.contains(name)
    }

    pub fn is_resolvable(&self, type_name: &str) -> bool {
        self.types.contains_key(normalize_type_name(type_name))
    }

    /// Look up a type the caller asserts is resolvable. Accepts either the
    /// origin name or the derived target name.
    pub fn lookup(&self, type_name: &str) -> Result<&RegisteredType, ResolveError> {
        self.types
            .get(self.key(type_name))
            .ok_or_else(|| ResolveError::NotResolvable {
                name: type_name.to_string(),
            })
    }

    pub fn lookup_mut(&mut self, type_name: &str) -> Result<&mut RegisteredType, ResolveError> {
        let key = self.key(type_name);
        self.types
            .get_mut(key)
            .ok_or_else(|| ResolveError::NotResolvable {
                name: type_name.to_string(),
            })
    }

    /// Registered types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &RegisteredType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn into_types(self) -> Vec<RegisteredType> {
        self.types.into_values().collect()
    }

    fn key<'a>(&self, type_name: &'a str) -> &'a str {
        let short = normalize_type_name(type_name);
        if self.types.contains_key(short) {
            return short;
        }
        short.strip_suffix(TARGET_SUFFIX).unwrap_or(short)
    }
}

use std::error::Error;

use serde::Serialize;

use super::ResolveCmd;
use crate::commands::{load_schema, source_name, Execute};
use crate::config::ResolverConfig;
use crate::output::{TypeGroup, TypeGroupResult};
use crate::schema::{Field, RegisteredType};

/// One resolved field as shown by the resolve command
#[derive(Debug, Clone, Serialize)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association: Option<String>,
}

impl From<&Field> for FieldEntry {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            ty: field.ty.to_string(),
            tag: field.storage_tag(),
            provenance: field.provenance.clone(),
            association: field
                .association
                .as_ref()
                .map(|association| association.kind().label().to_string()),
        }
    }
}

pub type ResolveResult = TypeGroupResult<FieldEntry>;

fn matches_type(ty: &RegisteredType, filter: Option<&str>) -> bool {
    filter.is_none_or(|name| ty.origin_name == name || ty.name == name)
}

impl Execute for ResolveCmd {
    type Output = ResolveResult;

    fn execute(self, config: &ResolverConfig) -> Result<Self::Output, Box<dyn Error>> {
        let schema = load_schema(&self.file, config)?;

        let items: Vec<TypeGroup<FieldEntry>> = schema
            .types
            .iter()
            .filter(|ty| matches_type(ty, self.type_name.as_deref()))
            .map(|ty| TypeGroup {
                name: ty.name.clone(),
                table: ty.table_name(),
                module: ty.module.name.clone(),
                entries: ty.fields.iter().map(FieldEntry::from).collect(),
            })
            .collect();

        Ok(ResolveResult {
            source: source_name(&self.file),
            total_items: items.iter().map(|group| group.entries.len()).sum(),
            items,
            warnings: schema.warnings,
        })
    }
}

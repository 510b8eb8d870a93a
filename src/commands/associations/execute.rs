use std::error::Error;

use serde::Serialize;

use super::AssociationsCmd;
use crate::commands::{load_schema, source_name, Execute};
use crate::config::ResolverConfig;
use crate::output::{TypeGroup, TypeGroupResult};
use crate::schema::{Association, Field, RelationKind};

/// A resolved association field with its key names
#[derive(Debug, Clone, Serialize)]
pub struct AssociationEntry {
    pub field: String,
    pub kind: RelationKind,
    pub target: String,
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

impl AssociationEntry {
    fn from_field(field: &Field, association: &Association) -> Self {
        let keys = association.key_names();
        Self {
            field: field.name.clone(),
            kind: association.kind(),
            target: field
                .ty
                .as_resolved()
                .map(|ty| ty.name.clone())
                .unwrap_or_default(),
            foreign_key: keys.foreign_key.map(str::to_string),
            references: keys.references.map(str::to_string),
            join_table: keys.join_table.map(str::to_string),
            join_foreign_key: keys.join_foreign_key.map(str::to_string),
            join_references: keys.join_references.map(str::to_string),
        }
    }
}

pub type AssociationsResult = TypeGroupResult<AssociationEntry>;

impl Execute for AssociationsCmd {
    type Output = AssociationsResult;

    fn execute(self, config: &ResolverConfig) -> Result<Self::Output, Box<dyn Error>> {
        let schema = load_schema(&self.file, config)?;

        let mut items = Vec::new();
        for ty in &schema.types {
            let entries: Vec<AssociationEntry> = ty
                .fields
                .iter()
                .filter_map(|field| {
                    let association = field.association.as_ref()?;
                    self.kind
                        .is_none_or(|kind| association.kind() == kind)
                        .then(|| AssociationEntry::from_field(field, association))
                })
                .collect();

            // types without matching associations are left out
            if entries.is_empty() {
                continue;
            }
            items.push(TypeGroup {
                name: ty.name.clone(),
                table: ty.table_name(),
                module: ty.module.name.clone(),
                entries,
            });
        }

        Ok(AssociationsResult {
            source: source_name(&self.file),
            total_items: items.iter().map(|group| group.entries.len()).sum(),
            items,
            warnings: schema.warnings,
        })
    }
}

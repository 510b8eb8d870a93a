//! Output formatting for associations command results.

use super::execute::{AssociationEntry, AssociationsResult};
use crate::output::{warning_lines, TableFormatter};

impl TableFormatter for AssociationsResult {
    type Entry = AssociationEntry;

    fn format_header(&self) -> String {
        format!("Associations: {}", self.source)
    }

    fn format_empty_message(&self) -> String {
        "No associations found.".to_string()
    }

    fn format_summary(&self, total: usize, type_count: usize) -> String {
        format!("Found {} association(s) in {} type(s):", total, type_count)
    }

    fn format_entry(&self, entry: &AssociationEntry) -> String {
        format!("{} [{}] -> {}", entry.field, entry.kind.label(), entry.target)
    }

    fn format_entry_details(&self, entry: &AssociationEntry) -> Vec<String> {
        let mut details = Vec::new();
        if let (Some(foreign_key), Some(references)) = (&entry.foreign_key, &entry.references) {
            details.push(format!("key: {} -> {}", foreign_key, references));
        }
        if let Some(join_table) = &entry.join_table {
            details.push(format!(
                "join: {} ({}, {})",
                join_table,
                entry.join_foreign_key.as_deref().unwrap_or_default(),
                entry.join_references.as_deref().unwrap_or_default()
            ));
        }
        details
    }

    fn format_footer(&self) -> Vec<String> {
        warning_lines(&self.warnings)
    }
}

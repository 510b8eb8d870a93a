//! Output formatting for resolve command results.

use super::execute::{FieldEntry, ResolveResult};
use crate::output::{warning_lines, TableFormatter};

impl TableFormatter for ResolveResult {
    type Entry = FieldEntry;

    fn format_header(&self) -> String {
        format!("Resolved schema: {}", self.source)
    }

    fn format_empty_message(&self) -> String {
        "No resolvable types found.".to_string()
    }

    fn format_summary(&self, total: usize, type_count: usize) -> String {
        format!("Found {} field(s) in {} type(s):", total, type_count)
    }

    fn format_entry(&self, entry: &FieldEntry) -> String {
        match &entry.tag {
            Some(tag) => format!("{} {} `{}`", entry.name, entry.ty, tag),
            None => format!("{} {}", entry.name, entry.ty),
        }
    }

    fn format_entry_details(&self, entry: &FieldEntry) -> Vec<String> {
        let mut details = Vec::new();
        if let Some(association) = &entry.association {
            details.push(format!("association: {}", association));
        }
        if let Some(provenance) = &entry.provenance {
            details.push(format!("from: {}", provenance));
        }
        details
    }

    fn format_footer(&self) -> Vec<String> {
        warning_lines(&self.warnings)
    }
}

//! Output formatting for check command results.

use super::execute::CheckResult;
use crate::output::{warning_lines, Outputable};

impl Outputable for CheckResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Check: {}", self.source));
        lines.push(String::new());

        if self.types == 0 {
            lines.push("No resolvable types found.".to_string());
        } else {
            lines.push(format!("Types: {}", self.types));
            lines.push(format!("Fields: {}", self.fields));
            lines.push(format!("Associations: {}", self.stats.associations));
            lines.push(format!(
                "Foreign keys: {} created, {} reused",
                self.stats.foreign_keys_created, self.stats.foreign_keys_reused
            ));
            lines.push(format!("Join tables: {}", self.stats.join_tables));
        }

        let warnings = warning_lines(&self.warnings);
        if !warnings.is_empty() {
            lines.push(String::new());
            lines.extend(warnings);
        }

        lines.join("\n")
    }
}

//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Generic result for commands that list entries grouped by resolved type.
#[derive(Debug, Default, Serialize)]
pub struct TypeGroupResult<E> {
    /// Descriptor file the schema was resolved from
    pub source: String,
    pub total_items: usize,
    pub items: Vec<TypeGroup<E>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// A resolved type with a collection of generic entries
#[derive(Debug, Default, Serialize)]
pub struct TypeGroup<E> {
    pub name: String,
    pub table: String,
    pub module: String,
    pub entries: Vec<E>,
}

/// Trait for customizing table formatting for type-grouped results
///
/// Provides hooks for formatting headers, empty states, summaries, and individual entries.
pub trait TableFormatter {
    type Entry;

    /// Format the header line(s) of the table
    fn format_header(&self) -> String;

    /// Format the message shown when there are no results
    fn format_empty_message(&self) -> String;

    /// Format the summary line after header and before entries
    ///
    /// # Arguments
    /// * `total` - Total number of entries across all types
    /// * `type_count` - Number of types in the result
    fn format_summary(&self, total: usize, type_count: usize) -> String;

    /// Format the header for a type
    fn format_group_header(&self, group: &TypeGroup<Self::Entry>) -> String {
        format!("{} (table: {}, module: {})", group.name, group.table, group.module)
    }

    /// Format a single entry within a type
    fn format_entry(&self, entry: &Self::Entry) -> String;

    /// Format optional detail lines for an entry
    ///
    /// Default implementation returns empty vec.
    fn format_entry_details(&self, _entry: &Self::Entry) -> Vec<String> {
        Vec::new()
    }

    /// Lines appended after all groups
    fn format_footer(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Default implementation of Outputable for TypeGroupResult using TableFormatter
impl<E> Outputable for TypeGroupResult<E>
where
    E: Serialize,
    TypeGroupResult<E>: TableFormatter<Entry = E>,
{
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(self.format_header());
        lines.push(String::new());

        if self.items.is_empty() {
            lines.push(self.format_empty_message());
        } else {
            lines.push(self.format_summary(self.total_items, self.items.len()));

            for group in &self.items {
                lines.push(String::new());
                lines.push(self.format_group_header(group));

                for entry in &group.entries {
                    lines.push(format!("  {}", self.format_entry(entry)));

                    for detail in self.format_entry_details(entry) {
                        lines.push(format!("    {}", detail));
                    }
                }
            }
        }

        let footer = self.format_footer();
        if !footer.is_empty() {
            lines.push(String::new());
            lines.extend(footer);
        }

        lines.join("\n")
    }
}

/// Warning lines shared by every command that reports resolver warnings.
pub fn warning_lines(warnings: &[String]) -> Vec<String> {
    if warnings.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("Warnings ({}):", warnings.len())];
    lines.extend(warnings.iter().map(|warning| format!("  {}", warning)));
    lines
}

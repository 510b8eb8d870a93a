//! Storage tag metadata attached to fields.
//!
//! A `StorageTag` is read verbatim from field annotations, may be rewritten by
//! the type mapper (e.g. forcing a column type), and is finally rendered into
//! the `gorm:"..."` struct tag the emitter attaches to each generated field.

use serde::{Deserialize, Serialize};

use super::types::Association;

/// Write permission override for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePermission {
    UpdateOnly,
    CreateOnly,
    No,
}

/// Column-level storage hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub primary_key: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub not_null: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub auto_increment: bool,
    /// `Some("")` renders a bare `index`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_index: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub embedded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_prefix: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_permission: Option<WritePermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub many_to_many: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_foreign_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_references: Option<String>,
}

impl StorageTag {
    /// Returns a copy of `tag` (or an empty tag) with the column type replaced.
    pub fn with_type(tag: Option<&StorageTag>, column_type: &str) -> StorageTag {
        let mut tag = tag.cloned().unwrap_or_default();
        tag.column_type = Some(column_type.to_string());
        tag
    }

    /// Render the struct tag for a field, or `None` when nothing is set.
    ///
    /// Key options come from the resolved association when present, otherwise
    /// from the raw tag.
    pub fn render(tag: Option<&StorageTag>, association: Option<&Association>) -> Option<String> {
        let empty = StorageTag::default();
        let tag = tag.unwrap_or(&empty);
        let mut parts: Vec<String> = Vec::new();

        if let Some(column) = &tag.column {
            parts.push(format!("column:{}", column));
        }
        if let Some(column_type) = &tag.column_type {
            parts.push(format!("type:{}", column_type));
        }
        if let Some(size) = tag.size {
            parts.push(format!("size:{}", size));
        }
        if let Some(precision) = tag.precision {
            parts.push(format!("precision:{}", precision));
        }
        if tag.primary_key {
            parts.push("primaryKey".to_string());
        }
        if tag.unique {
            parts.push("unique".to_string());
        }
        if let Some(default) = &tag.default {
            parts.push(format!("default:{}", default));
        }
        if tag.not_null {
            parts.push("not null".to_string());
        }
        if tag.auto_increment {
            parts.push("autoIncrement".to_string());
        }
        push_named(&mut parts, "index", tag.index.as_deref());
        push_named(&mut parts, "uniqueIndex", tag.unique_index.as_deref());
        if tag.embedded {
            parts.push("embedded".to_string());
        }
        if let Some(prefix) = &tag.embedded_prefix {
            parts.push(format!("embeddedPrefix:{}", prefix));
        }
        if tag.ignore {
            parts.push("-".to_string());
        }
        if let Some(check) = &tag.check {
            parts.push(format!("check:{}", check));
        }
        if tag.can_read == Some(false) {
            parts.push("->:false".to_string());
        }
        match tag.write_permission {
            Some(WritePermission::UpdateOnly) => parts.push("<-:update".to_string()),
            Some(WritePermission::CreateOnly) => parts.push("<-:create".to_string()),
            Some(WritePermission::No) => parts.push("<-:false".to_string()),
            None => {}
        }
        if let Some(constraint) = &tag.constraint {
            parts.push(format!("constraint:{}", constraint));
        }

        let keys = match association {
            Some(association) => association.key_names(),
            None => KeyNames {
                foreign_key: tag.foreign_key.as_deref(),
                references: tag.references.as_deref(),
                join_table: tag.many_to_many.as_deref(),
                join_foreign_key: tag.join_foreign_key.as_deref(),
                join_references: tag.join_references.as_deref(),
            },
        };
        let keyed = [
            ("foreignKey", keys.foreign_key),
            ("references", keys.references),
            ("many2many", keys.join_table),
            ("joinForeignKey", keys.join_foreign_key),
            ("joinReferences", keys.join_references),
        ];
        for (label, value) in keyed {
            if let Some(value) = value {
                parts.push(format!("{}:{}", label, value));
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(format!("gorm:\"{}\"", parts.join(";")))
        }
    }
}

fn push_named(parts: &mut Vec<String>, label: &str, value: Option<&str>) {
    match value {
        Some("") => parts.push(label.to_string()),
        Some(name) => parts.push(format!("{}:{}", label, name)),
        None => {}
    }
}

/// Borrowed view of the key names an association (or raw tag) carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyNames<'a> {
    pub foreign_key: Option<&'a str>,
    pub references: Option<&'a str>,
    pub join_table: Option<&'a str>,
    pub join_foreign_key: Option<&'a str>,
    pub join_references: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{KeyedAssociation, ManyToManyOptions};
    use rstest::rstest;

    #[rstest]
    fn test_render_empty_tag_is_none() {
        assert_eq!(StorageTag::render(None, None), None);
        assert_eq!(StorageTag::render(Some(&StorageTag::default()), None), None);
    }

    #[rstest]
    fn test_render_column_options_in_order() {
        let tag = StorageTag {
            column: Some("user_name".to_string()),
            column_type: Some("text".to_string()),
            size: Some(255),
            primary_key: true,
            not_null: true,
            index: Some(String::new()),
            unique_index: Some("idx_name".to_string()),
            ..Default::default()
        };
        assert_eq!(
            StorageTag::render(Some(&tag), None).as_deref(),
            Some("gorm:\"column:user_name;type:text;size:255;primaryKey;not null;index;uniqueIndex:idx_name\"")
        );
    }

    #[rstest]
    fn test_render_permissions() {
        let tag = StorageTag {
            can_read: Some(false),
            write_permission: Some(WritePermission::CreateOnly),
            ignore: true,
            ..Default::default()
        };
        assert_eq!(
            StorageTag::render(Some(&tag), None).as_deref(),
            Some("gorm:\"-;->:false;<-:create\"")
        );
    }

    #[rstest]
    fn test_render_prefers_association_keys_over_raw_tag() {
        let tag = StorageTag {
            foreign_key: Some("Ignored".to_string()),
            ..Default::default()
        };
        let association = Association::HasMany(KeyedAssociation {
            foreign_key: Some("UserId".to_string()),
            references: Some("Id".to_string()),
            foreign_key_tag: None,
        });
        assert_eq!(
            StorageTag::render(Some(&tag), Some(&association)).as_deref(),
            Some("gorm:\"foreignKey:UserId;references:Id\"")
        );
    }

    #[rstest]
    fn test_render_many_to_many_keys() {
        let association = Association::ManyToMany(ManyToManyOptions {
            foreign_key: Some("Id".to_string()),
            references: Some("Id".to_string()),
            join_table: Some("user_groups".to_string()),
            join_foreign_key: Some("user_id".to_string()),
            join_references: Some("group_id".to_string()),
        });
        assert_eq!(
            StorageTag::render(None, Some(&association)).as_deref(),
            Some("gorm:\"foreignKey:Id;references:Id;many2many:user_groups;joinForeignKey:user_id;joinReferences:group_id\"")
        );
    }

    #[rstest]
    fn test_with_type_keeps_other_options() {
        let tag = StorageTag {
            not_null: true,
            ..Default::default()
        };
        let rewritten = StorageTag::with_type(Some(&tag), "uuid");
        assert!(rewritten.not_null);
        assert_eq!(rewritten.column_type.as_deref(), Some("uuid"));
        assert_eq!(StorageTag::with_type(None, "jsonb").column_type.as_deref(), Some("jsonb"));
    }
}

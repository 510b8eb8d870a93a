use crate::config::ResolverConfig;
use crate::descriptor::{DeclaredType, ExtraField, TypeKind};
use crate::schema::{FieldType, StorageTag, TypeRef, BYTES};

use super::{ExtraMapping, Mapping, TypeMapper, UnknownTagType};

pub const TIME_MODULE: &str = "time";
pub const UUID_MODULE: &str = "github.com/satori/go.uuid";
pub const JSONB_MODULE: &str = "github.com/jinzhu/gorm/dialects/postgres";
pub const PQ_MODULE: &str = "github.com/lib/pq";
pub const TYPES_MODULE: &str = "github.com/TheSDTM/protoc-gen-gorm/types";

const BUILTIN_TYPES: &[&str] = &[
    "bool", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32",
    "uint64", "uintptr", "float32", "float64", "string", "[]byte",
];

/// Built-in substitution tables, switched by engine and enum mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTypeMapper {
    config: ResolverConfig,
}

impl StandardTypeMapper {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    fn map_repeated(&self, declared: &DeclaredType, tag: Option<&StorageTag>) -> Option<Mapping> {
        if declared.kind != TypeKind::Scalar || !self.config.is_postgres() {
            return None;
        }
        let (array, column_type) = match native_scalar(&declared.name)? {
            "bool" => ("BoolArray", "bool[]"),
            "float64" => ("Float64Array", "float[]"),
            "int64" => ("Int64Array", "integer[]"),
            "string" => ("StringArray", "text[]"),
            _ => return None,
        };
        Some(Mapping {
            ty: FieldType::Resolved(TypeRef::qualified(PQ_MODULE, array)),
            tag: Some(StorageTag::with_type(tag, column_type)),
        })
    }

    fn map_well_known(
        &self,
        declared: &DeclaredType,
        tag: Option<&StorageTag>,
    ) -> Result<Option<Mapping>, UnknownTagType> {
        let postgres = self.config.is_postgres();
        let passthrough = |ty: TypeRef| Mapping {
            ty: FieldType::Resolved(ty),
            tag: tag.cloned(),
        };

        let mapping = match declared.short_name() {
            "StringValue" => passthrough(TypeRef::builtin("string").nullable()),
            "DoubleValue" => passthrough(TypeRef::builtin("float64").nullable()),
            "FloatValue" => passthrough(TypeRef::builtin("float32").nullable()),
            "Int32Value" => passthrough(TypeRef::builtin("int32").nullable()),
            "Int64Value" => passthrough(TypeRef::builtin("int64").nullable()),
            "UInt32Value" => passthrough(TypeRef::builtin("uint32").nullable()),
            "UInt64Value" => passthrough(TypeRef::builtin("uint64").nullable()),
            "BoolValue" => passthrough(TypeRef::builtin("bool").nullable()),
            "Timestamp" => passthrough(TypeRef::qualified(TIME_MODULE, "Time").nullable()),
            "UUID" => Mapping {
                ty: FieldType::Resolved(TypeRef::qualified(UUID_MODULE, "UUID")),
                tag: if postgres {
                    Some(StorageTag::with_type(tag, "uuid"))
                } else {
                    tag.cloned()
                },
            },
            "UUIDValue" => Mapping {
                ty: FieldType::Resolved(TypeRef::qualified(UUID_MODULE, "UUID").nullable()),
                tag: if postgres {
                    Some(StorageTag::with_type(tag, "uuid"))
                } else {
                    tag.cloned()
                },
            },
            "JSONValue" if postgres => Mapping {
                ty: FieldType::Resolved(TypeRef::qualified(JSONB_MODULE, "Jsonb").nullable()),
                tag: Some(StorageTag::with_type(tag, "jsonb")),
            },
            "InetValue" => Mapping {
                ty: FieldType::Resolved(TypeRef::qualified(TYPES_MODULE, "Inet").nullable()),
                tag: Some(StorageTag::with_type(tag, if postgres { "inet" } else { "varchar(48)" })),
            },
            "TimeOnly" => Mapping {
                ty: FieldType::Resolved(TypeRef::builtin("string")),
                tag: Some(StorageTag::with_type(tag, "time")),
            },
            "Identifier" => map_identifier(tag)?,
            _ => return Ok(None),
        };

        Ok(Some(mapping))
    }
}

impl TypeMapper for StandardTypeMapper {
    fn map_field(
        &self,
        declared: &DeclaredType,
        repeated: bool,
        tag: Option<&StorageTag>,
    ) -> Result<Option<Mapping>, UnknownTagType> {
        if repeated {
            return Ok(self.map_repeated(declared, tag));
        }

        match declared.kind {
            TypeKind::Enum => {
                let native = if self.config.string_enums() { "string" } else { "int32" };
                Ok(Some(Mapping {
                    ty: FieldType::Resolved(TypeRef::builtin(native)),
                    tag: tag.cloned(),
                }))
            }
            TypeKind::Scalar => Ok(native_scalar(&declared.name).map(|native| Mapping {
                ty: FieldType::Resolved(TypeRef::builtin(native)),
                tag: tag.cloned(),
            })),
            TypeKind::Message => self.map_well_known(declared, tag),
        }
    }

    fn map_extra(&self, extra: &ExtraField) -> ExtraMapping {
        let nullable = extra.type_name.starts_with('*');
        let raw = extra.type_name.trim_start_matches('*');
        let raw = raw.rsplit('.').next().unwrap_or(raw);

        let (ty, recognized) = match extra.package.as_deref().filter(|p| !p.is_empty()) {
            Some(package) => (TypeRef::qualified(package, raw), true),
            None if BUILTIN_TYPES.contains(&raw) => (TypeRef::builtin(raw), true),
            None if raw == "Time" => (TypeRef::qualified(TIME_MODULE, raw), true),
            None if raw == "UUID" => (TypeRef::qualified(UUID_MODULE, raw), true),
            None if raw == "Jsonb" && self.config.is_postgres() => {
                (TypeRef::qualified(JSONB_MODULE, raw), true)
            }
            None if raw == "Inet" => (TypeRef::qualified(TYPES_MODULE, raw), true),
            None => (TypeRef::builtin(raw), false),
        };

        ExtraMapping {
            ty: if nullable { ty.nullable() } else { ty },
            recognized,
        }
    }
}

/// Native type for an IDL scalar keyword.
fn native_scalar(keyword: &str) -> Option<&'static str> {
    let native = match keyword {
        "double" => "float64",
        "float" => "float32",
        "int32" | "sint32" | "sfixed32" => "int32",
        "int64" | "sint64" | "sfixed64" => "int64",
        "uint32" | "fixed32" => "uint32",
        "uint64" | "fixed64" => "uint64",
        "bool" => "bool",
        "string" => "string",
        "bytes" => BYTES,
        _ => return None,
    };
    Some(native)
}

/// Opaque identifiers take their native type from the column type.
fn map_identifier(tag: Option<&StorageTag>) -> Result<Mapping, UnknownTagType> {
    let column_type = tag
        .and_then(|tag| tag.column_type.as_deref())
        .unwrap_or_default()
        .to_lowercase();
    let family = if column_type.contains("char") {
        "char"
    } else if column_type.contains("array") || column_type.contains('[') || column_type.contains(']') {
        "array"
    } else {
        column_type.as_str()
    };

    let ty = match family {
        "uuid" | "text" | "char" | "array" | "cidr" | "inet" | "macaddr" => {
            TypeRef::builtin("string").nullable()
        }
        "smallint" | "integer" | "bigint" | "numeric" | "smallserial" | "serial" | "bigserial" => {
            TypeRef::builtin("int64").nullable()
        }
        "jsonb" | "bytea" => TypeRef::builtin(BYTES),
        "" => {
            return Ok(Mapping {
                ty: FieldType::Deferred,
                tag: tag.cloned(),
            });
        }
        _ => return Err(UnknownTagType(column_type.clone())),
    };

    let strict = tag.is_some_and(|tag| tag.not_null || tag.primary_key);
    Ok(Mapping {
        ty: FieldType::Resolved(if strict { ty.non_null() } else { ty }),
        tag: tag.cloned(),
    })
}

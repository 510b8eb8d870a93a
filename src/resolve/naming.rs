//! Naming and conflict helpers shared by the association passes.
//!
//! Primary-key discovery, dimension counting, field-type compatibility and
//! deterministic name synthesis.

use heck::ToSnakeCase;

use crate::descriptor::{MessageDescriptor, TypeKind};
use crate::error::ResolveError;
use crate::schema::{normalize_type_name, Field, FieldType, RegisteredType, RelationKind};

/// Convert an IDL identifier to an exported field name.
///
/// Underscores followed by a lowercase letter are dropped and that letter is
/// capitalised, as is the first letter and any letter following a digit.
/// Existing capitals are kept, so already-converted names come back unchanged.
pub fn camel_case(name: &str) -> String {
    let bytes = name.as_bytes();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    if bytes.first() == Some(&b'_') {
        out.push('X');
        i += 1;
    }

    while i < bytes.len() {
        let c = bytes[i];
        if c == b'_' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_lowercase() {
            i += 1;
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c as char);
            i += 1;
            continue;
        }
        out.push(c.to_ascii_uppercase() as char);
        while i + 1 < bytes.len() && bytes[i + 1].is_ascii_lowercase() {
            i += 1;
            out.push(bytes[i] as char);
        }
        i += 1;
    }

    out
}

/// Snake-case database identifier for a synthesized name.
pub fn db_name(name: &str) -> String {
    name.to_snake_case()
}

/// Find a type's primary key: the first field tagged primary-key, else the
/// first field named `id` in any case.
pub fn find_primary_key(ty: &RegisteredType) -> Result<&Field, ResolveError> {
    ty.fields
        .iter()
        .find(|field| field.is_primary_key())
        .or_else(|| ty.fields.iter().find(|field| field.name.eq_ignore_ascii_case("id")))
        .ok_or_else(|| ResolveError::MissingPrimaryKey {
            type_name: ty.name.clone(),
        })
}

/// Resolve a reference key on `ty`: the explicit field when named, else the
/// primary key.
pub fn reference_key<'a>(ty: &'a RegisteredType, explicit: Option<&str>) -> Result<&'a Field, ResolveError> {
    match explicit.filter(|name| !name.is_empty()) {
        Some(name) => {
            let name = camel_case(name);
            ty.fields
                .get(&name)
                .ok_or_else(|| ResolveError::MissingReferencedField {
                    field: name,
                    type_name: ty.name.clone(),
                })
        }
        None => find_primary_key(ty),
    }
}

/// Count sibling fields of `msg` that relate to `target` with the same kind.
///
/// Has-one and has-many share one bucket: every field that is neither
/// many-to-many nor belongs-to. Dropped fields never count.
pub fn dimension_count(msg: &MessageDescriptor, target: &str, kind: RelationKind) -> usize {
    let target = normalize_type_name(target);
    msg.fields
        .iter()
        .filter(|field| !field.is_dropped() && field.declared.kind == TypeKind::Message)
        .filter(|field| match kind {
            RelationKind::HasOne | RelationKind::HasMany => {
                !field.is_many_to_many() && !field.is_belongs_to()
            }
            RelationKind::BelongsTo => field.is_belongs_to(),
            RelationKind::ManyToMany => field.is_many_to_many(),
        })
        .filter(|field| normalize_type_name(&field.declared.name) == target)
        .count()
}

/// Whether an existing field type is compatible with a synthesized one.
///
/// Resolved types must agree on nullability, base name, module and
/// cardinality.
pub fn same_type(existing: &FieldType, synthesized: &FieldType) -> bool {
    match (existing, synthesized) {
        (FieldType::Deferred, FieldType::Deferred) => true,
        (FieldType::Resolved(a), FieldType::Resolved(b)) => {
            a.nullable == b.nullable && a.name == b.name && a.module == b.module && a.repeated == b.repeated
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::parse_descriptors;
    use crate::schema::{ModuleRef, StorageTag, TypeRef};
    use rstest::rstest;

    fn registered(fields: Vec<Field>) -> RegisteredType {
        let mut ty = RegisteredType::new(
            "Account",
            ModuleRef {
                name: "acme".to_string(),
                import_path: None,
            },
            None,
        );
        for field in fields {
            ty.fields.insert(field).unwrap();
        }
        ty
    }

    fn scalar(name: &str, ty: &str) -> Field {
        Field::new(name, FieldType::Resolved(TypeRef::builtin(ty)))
    }

    #[rstest]
    #[case("id", "Id")]
    #[case("user_id", "UserId")]
    #[case("UserID", "UserID")]
    #[case("XsAccountId", "XsAccountId")]
    #[case("_hidden", "XHidden")]
    #[case("address2_line", "Address2Line")]
    #[case("v1beta", "V1Beta")]
    #[case("", "")]
    fn test_camel_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_case(input), expected);
    }

    #[rstest]
    #[case("UserGroups", "user_groups")]
    #[case("UserId", "user_id")]
    #[case("UserID", "user_id")]
    #[case("user_groups", "user_groups")]
    fn test_db_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(db_name(input), expected);
    }

    #[rstest]
    fn test_primary_key_prefers_tag() {
        let mut key = scalar("Key", "string");
        key.tag = Some(StorageTag {
            primary_key: true,
            ..Default::default()
        });
        let ty = registered(vec![scalar("Id", "uint64"), key]);
        assert_eq!(find_primary_key(&ty).unwrap().name, "Key");
    }

    #[rstest]
    #[case("Id")]
    #[case("ID")]
    #[case("iD")]
    fn test_primary_key_falls_back_to_id(#[case] name: &str) {
        let ty = registered(vec![scalar("Name", "string"), scalar(name, "uint64")]);
        assert_eq!(find_primary_key(&ty).unwrap().name, name);
    }

    #[rstest]
    fn test_primary_key_missing() {
        let ty = registered(vec![scalar("Name", "string")]);
        let err = find_primary_key(&ty).unwrap_err();
        assert_eq!(err.to_string(), "Primary key cannot be found in AccountORM.");
    }

    #[rstest]
    fn test_reference_key_explicit() {
        let ty = registered(vec![scalar("Id", "uint64"), scalar("ExternalId", "string")]);
        assert_eq!(reference_key(&ty, Some("external_id")).unwrap().name, "ExternalId");
        assert_eq!(reference_key(&ty, None).unwrap().name, "Id");
        assert_eq!(reference_key(&ty, Some("")).unwrap().name, "Id");
    }

    #[rstest]
    fn test_reference_key_explicit_missing() {
        let ty = registered(vec![scalar("Id", "uint64")]);
        let err = reference_key(&ty, Some("code")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingReferencedField {
                field: "Code".to_string(),
                type_name: "AccountORM".to_string(),
            }
        );
    }

    #[rstest]
    fn test_dimension_count_scopes() {
        let set = parse_descriptors(
            r#"{"modules": [{"name": "acme", "messages": [{
                "name": "Account",
                "fields": [
                    {"name": "owners", "type": {"kind": "message", "name": "User"}, "repeated": true},
                    {"name": "admins", "type": {"kind": "message", "name": "acme.User"}, "repeated": true},
                    {"name": "creator", "type": {"kind": "message", "name": "User"},
                     "options": {"association": {"belongs_to": {}}}},
                    {"name": "members", "type": {"kind": "message", "name": "User"}, "repeated": true,
                     "options": {"association": {"many_to_many": {}}}},
                    {"name": "legacy", "type": {"kind": "message", "name": "User"},
                     "options": {"drop": true}},
                    {"name": "user", "type": {"kind": "scalar", "name": "string"}}
                ]
            }]}]}"#,
        )
        .unwrap();
        let msg = &set.modules[0].messages[0];
        assert_eq!(dimension_count(msg, "User", RelationKind::HasMany), 2);
        assert_eq!(dimension_count(msg, "User", RelationKind::HasOne), 2);
        assert_eq!(dimension_count(msg, "User", RelationKind::BelongsTo), 1);
        assert_eq!(dimension_count(msg, "User", RelationKind::ManyToMany), 1);
        assert_eq!(dimension_count(msg, "Group", RelationKind::HasMany), 0);
    }

    #[rstest]
    fn test_same_type() {
        let nullable = FieldType::Resolved(TypeRef::builtin("uint64").nullable());
        let value = FieldType::Resolved(TypeRef::builtin("uint64"));
        let qualified = FieldType::Resolved(TypeRef::qualified("time", "uint64").nullable());
        assert!(same_type(&nullable, &nullable.clone()));
        assert!(!same_type(&nullable, &value));
        assert!(!same_type(&nullable, &qualified));
        assert!(same_type(&FieldType::Deferred, &FieldType::Deferred));
        assert!(!same_type(&FieldType::Deferred, &value));
    }
}

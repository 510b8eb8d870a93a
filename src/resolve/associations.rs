//! Pass 3: association resolution.
//!
//! Has-one and has-many put the foreign key on the associated (child) type,
//! belongs-to puts it on the declaring type. Many-to-many injects nothing and
//! records the join-table shape in its options. Options that already hold a
//! value are reused, so feeding resolved options back in is a no-op.

use tracing::debug;

use crate::descriptor::{FieldDescriptor, MessageDescriptor, TypeKind};
use crate::error::ResolveError;
use crate::inflection::{plural, singular};
use crate::schema::{
    Association, Field, FieldType, KeyedAssociation, ManyToManyOptions, RegisteredType, Registry,
    RelationKind, StorageTag, TypeRef,
};

use super::naming::{camel_case, db_name, dimension_count, find_primary_key, reference_key, same_type};
use super::ResolutionStats;

/// Resolve every association field declared by `msg` and append the
/// association fields to its registered type.
pub(crate) fn resolve_associations(
    registry: &mut Registry,
    msg: &MessageDescriptor,
    stats: &mut ResolutionStats,
) -> Result<(), ResolveError> {
    let type_name = msg.short_name();

    for field in msg.fields.iter().filter(|field| !field.is_dropped()) {
        if field.declared.kind != TypeKind::Message || !registry.is_resolvable(&field.declared.name) {
            continue;
        }

        let field_name = camel_case(&field.name);
        let field_type = field.declared.short_name();
        let association = if field.repeated {
            match field.association() {
                Some(Association::ManyToMany(opts)) => Some(Association::ManyToMany(
                    resolve_many_to_many(registry, msg, &field_name, field_type, opts.clone(), stats)?,
                )),
                other => {
                    let opts = match other {
                        Some(Association::HasMany(opts)) => opts.clone(),
                        _ => KeyedAssociation::default(),
                    };
                    let link = Link::new(msg, &field_name, field_type, RelationKind::HasMany);
                    Some(Association::HasMany(resolve_has(registry, &link, opts, stats)?))
                }
            }
        } else if field.is_embedded() {
            None
        } else {
            match field.association() {
                Some(Association::BelongsTo(opts)) => {
                    let link = Link::new(msg, &field_name, field_type, RelationKind::BelongsTo);
                    Some(Association::BelongsTo(resolve_belongs_to(registry, &link, opts.clone(), stats)?))
                }
                other => {
                    let opts = match other {
                        Some(Association::HasOne(opts)) => opts.clone(),
                        _ => KeyedAssociation::default(),
                    };
                    let link = Link::new(msg, &field_name, field_type, RelationKind::HasOne);
                    Some(Association::HasOne(resolve_has(registry, &link, opts, stats)?))
                }
            }
        };

        if association.is_some() {
            stats.associations += 1;
        }
        append_association_field(registry, type_name, field, field_name, association)?;
    }

    let ormable = registry.lookup_mut(type_name)?;
    let primary_key = find_primary_key(ormable).ok().map(|field| field.name.clone());
    if let Some(primary_key) = primary_key {
        let origin_name = ormable.origin_name.clone();
        if let Some(field) = ormable.fields.get_mut(&primary_key) {
            field.provenance = Some(origin_name);
        }
    }

    Ok(())
}

/// One association field being resolved.
struct Link<'a> {
    msg: &'a MessageDescriptor,
    /// Declaring type's origin name
    type_name: &'a str,
    field_name: &'a str,
    /// Associated type's short name
    field_type: &'a str,
    kind: RelationKind,
}

impl<'a> Link<'a> {
    fn new(msg: &'a MessageDescriptor, field_name: &'a str, field_type: &'a str, kind: RelationKind) -> Self {
        Self {
            msg,
            type_name: msg.short_name(),
            field_name,
            field_type,
            kind,
        }
    }

    fn dimension(&self) -> usize {
        dimension_count(self.msg, self.field_type, self.kind)
    }
}

/// Has-one and has-many: the declaring type is the parent, the associated
/// type holds the foreign key.
fn resolve_has(
    registry: &mut Registry,
    link: &Link<'_>,
    mut opts: KeyedAssociation,
    stats: &mut ResolutionStats,
) -> Result<KeyedAssociation, ResolveError> {
    let parent = registry.lookup(link.type_name)?;
    let child = registry.lookup(link.field_type)?;

    let reference = reference_key(parent, opts.references.as_deref())?;
    let fk_type = foreign_key_type(&reference.ty, opts.foreign_key_not_null(), child);
    let reference_name = reference.name.clone();

    // explicit has-many keys are taken verbatim, has-one keys are camel-cased
    let foreign_key = match opts.foreign_key.as_deref().filter(|name| !name.is_empty()) {
        Some(explicit) if link.kind == RelationKind::HasMany => explicit.to_string(),
        Some(explicit) => camel_case(explicit),
        None if link.dimension() == 1 => format!("{}{}", link.type_name, reference_name),
        None => format!("{}{}{}", link.field_name, link.type_name, reference_name),
    };

    if child.module.name != parent.module.name && !child.fields.contains(&foreign_key) {
        let alternative = match link.kind {
            RelationKind::HasMany => RelationKind::ManyToMany,
            _ => RelationKind::BelongsTo,
        };
        return Err(ResolveError::CrossModuleForeignKey {
            child: child.name.clone(),
            child_module: child.module.name.clone(),
            kind: link.kind.label(),
            parent: parent.name.clone(),
            parent_module: parent.module.name.clone(),
            foreign_key,
            alternative: alternative.label(),
        });
    }

    let parent_origin = parent.origin_name.clone();
    let child = registry.lookup_mut(link.field_type)?;
    merge_foreign_key(
        child,
        &foreign_key,
        fk_type,
        opts.foreign_key_tag.clone(),
        parent_origin,
        stats,
    )?;

    debug!(
        kind = link.kind.label(),
        declaring = link.type_name,
        field = link.field_name,
        foreign_key = %foreign_key,
        "resolved association"
    );
    opts.references = Some(reference_name);
    opts.foreign_key = Some(foreign_key);
    Ok(opts)
}

/// Belongs-to: the associated type is the parent, the declaring type holds
/// the foreign key. Names are scoped by the field type rather than the
/// declaring type.
fn resolve_belongs_to(
    registry: &mut Registry,
    link: &Link<'_>,
    mut opts: KeyedAssociation,
    stats: &mut ResolutionStats,
) -> Result<KeyedAssociation, ResolveError> {
    let parent = registry.lookup(link.field_type)?;
    let child = registry.lookup(link.type_name)?;

    let reference = reference_key(parent, opts.references.as_deref())?;
    let fk_type = foreign_key_type(&reference.ty, opts.foreign_key_not_null(), child);
    let reference_name = reference.name.clone();

    let foreign_key = match opts.foreign_key.as_deref().filter(|name| !name.is_empty()) {
        Some(explicit) => camel_case(explicit),
        None if link.dimension() == 1 => format!("{}{}", link.field_type, reference_name),
        None => format!("{}{}", link.field_name, reference_name),
    };

    let parent_origin = parent.origin_name.clone();
    let child = registry.lookup_mut(link.type_name)?;
    merge_foreign_key(
        child,
        &foreign_key,
        fk_type,
        opts.foreign_key_tag.clone(),
        parent_origin,
        stats,
    )?;

    debug!(
        kind = link.kind.label(),
        declaring = link.type_name,
        field = link.field_name,
        foreign_key = %foreign_key,
        "resolved association"
    );
    opts.references = Some(reference_name);
    opts.foreign_key = Some(foreign_key);
    Ok(opts)
}

fn resolve_many_to_many(
    registry: &Registry,
    msg: &MessageDescriptor,
    field_name: &str,
    field_type: &str,
    mut opts: ManyToManyOptions,
    stats: &mut ResolutionStats,
) -> Result<ManyToManyOptions, ResolveError> {
    let type_name = msg.short_name();
    let ormable = registry.lookup(type_name)?;
    let associated = registry.lookup(field_type)?;

    let foreign_key = reference_key(ormable, opts.foreign_key.as_deref())?.name.clone();
    let references = reference_key(associated, opts.references.as_deref())?.name.clone();
    let self_referential = type_name == field_type;

    let join_table = match opts.join_table.as_deref().filter(|name| !name.is_empty()) {
        Some(explicit) => db_name(explicit),
        None if dimension_count(msg, field_type, RelationKind::ManyToMany) == 1 && !self_referential => {
            db_name(&format!("{}{}", type_name, plural(field_type)))
        }
        None => db_name(&format!("{}{}", type_name, plural(field_name))),
    };
    let join_foreign_key = match opts.join_foreign_key.as_deref().filter(|name| !name.is_empty()) {
        Some(explicit) => explicit.to_string(),
        None => db_name(&format!("{}{}", type_name, foreign_key)),
    };
    let join_references = match opts.join_references.as_deref().filter(|name| !name.is_empty()) {
        Some(explicit) => explicit.to_string(),
        None if self_referential => db_name(&format!("{}{}", singular(field_name), references)),
        None => db_name(&format!("{}{}", field_type, references)),
    };

    debug!(
        declaring = type_name,
        field = field_name,
        join_table = %join_table,
        "resolved many-to-many"
    );
    stats.join_tables += 1;
    opts.foreign_key = Some(foreign_key);
    opts.references = Some(references);
    opts.join_table = Some(join_table);
    opts.join_foreign_key = Some(join_foreign_key);
    opts.join_references = Some(join_references);
    Ok(opts)
}

/// Type of a synthesized foreign key, qualified for the type that holds it.
///
/// A not-null foreign key drops nullability. Otherwise the key is nullable,
/// unless it is a byte sequence, which is kept as is.
fn foreign_key_type(reference: &FieldType, not_null: bool, holder: &RegisteredType) -> FieldType {
    let Some(ty) = reference.as_resolved() else {
        return FieldType::Deferred;
    };
    let ty = if not_null {
        ty.clone().non_null()
    } else if ty.nullable || ty.is_byte_sequence() {
        ty.clone()
    } else {
        ty.clone().nullable()
    };
    FieldType::Resolved(ty.requalified_for(holder.module.import_path.as_deref()))
}

/// Add the foreign key to `child`, or reconcile it with an existing field of
/// the same name. Either way the field's provenance becomes `parent_origin`.
fn merge_foreign_key(
    child: &mut RegisteredType,
    name: &str,
    ty: FieldType,
    tag: Option<StorageTag>,
    parent_origin: String,
    stats: &mut ResolutionStats,
) -> Result<(), ResolveError> {
    let Some(existing) = child.fields.get_mut(name) else {
        let mut field = Field::new(name, ty).with_tag(tag);
        field.provenance = Some(parent_origin);
        stats.foreign_keys_created += 1;
        return child
            .fields
            .insert(field)
            .map_err(|rejected| ResolveError::DuplicateField {
                field: rejected.name,
                type_name: child.name.clone(),
            });
    };

    if existing.ty.is_deferred() {
        existing.ty = ty;
    } else if !ty.is_deferred() && !same_type(&existing.ty, &ty) {
        return Err(ResolveError::ForeignKeyTypeConflict {
            field: name.to_string(),
            type_name: child.name.clone(),
            existing: existing.ty.to_string(),
            synthesized: ty.to_string(),
        });
    }
    existing.provenance = Some(parent_origin);
    stats.foreign_keys_reused += 1;
    Ok(())
}

/// Append the association field itself to the declaring type.
fn append_association_field(
    registry: &mut Registry,
    type_name: &str,
    field: &FieldDescriptor,
    field_name: String,
    association: Option<Association>,
) -> Result<(), ResolveError> {
    let target = registry.lookup(&field.declared.name)?;
    let ty = TypeRef {
        name: target.name.clone(),
        module: target.module.import_path.clone(),
        nullable: true,
        repeated: field.repeated,
    };

    let ormable = registry.lookup_mut(type_name)?;
    let ty = ty.requalified_for(ormable.module.import_path.as_deref());

    let appended = Field::new(field_name, FieldType::Resolved(ty))
        .with_tag(field.tag().cloned())
        .with_association(association);
    ormable
        .fields
        .insert(appended)
        .map_err(|rejected| ResolveError::DuplicateField {
            field: rejected.name,
            type_name: ormable.name.clone(),
        })
}

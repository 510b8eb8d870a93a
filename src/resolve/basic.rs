//! Pass 2: basic field mapping.

use tracing::debug;

use crate::descriptor::MessageDescriptor;
use crate::diagnostics::Diagnostics;
use crate::error::ResolveError;
use crate::mapping::TypeMapper;
use crate::schema::{Field, FieldType, Registry};

use super::naming::camel_case;

/// Map the declared fields of `msg`, then merge its extra fields.
///
/// Dropped fields and fields the mapper declines are skipped. Fields naming
/// another message through `references_type` get that message as provenance.
pub(crate) fn map_basic_fields(
    registry: &mut Registry,
    msg: &MessageDescriptor,
    mapper: &dyn TypeMapper,
    diagnostics: &mut Diagnostics,
) -> Result<(), ResolveError> {
    let type_name = registry.lookup(msg.short_name())?.name.clone();

    let mut mapped = Vec::with_capacity(msg.fields.len());
    for field in msg.fields.iter().filter(|field| !field.is_dropped()) {
        let field_name = camel_case(&field.name);
        let mapping = mapper
            .map_field(&field.declared, field.repeated, field.tag())
            .map_err(|unknown| ResolveError::UnknownTagType {
                tag_type: unknown.0,
                field: field_name.clone(),
                type_name: type_name.clone(),
            })?;
        let Some(mapping) = mapping else {
            continue;
        };

        let mut target = Field::new(field_name, mapping.ty).with_tag(mapping.tag);
        let referenced = field
            .options
            .as_ref()
            .and_then(|opts| opts.references_type.as_deref())
            .filter(|name| !name.is_empty());
        if let Some(referenced) = referenced {
            if !registry.is_known_message(referenced) {
                return Err(ResolveError::UnknownReferencedMessage {
                    target: referenced.to_string(),
                    field: field.name.clone(),
                    type_name: msg.short_name().to_string(),
                });
            }
            target.provenance = Some(referenced.to_string());
        }
        mapped.push(target);
    }

    let ormable = registry.lookup_mut(msg.short_name())?;
    for field in mapped {
        ormable
            .fields
            .insert(field)
            .map_err(|rejected| ResolveError::DuplicateField {
                field: rejected.name,
                type_name: type_name.clone(),
            })?;
    }

    for extra in msg.extra_fields() {
        let field_name = camel_case(&extra.name);
        if ormable.fields.contains(&field_name) {
            return Err(ResolveError::DuplicateField {
                field: field_name,
                type_name,
            });
        }

        let mapping = mapper.map_extra(extra);
        if !mapping.recognized {
            diagnostics.warn(format!(
                "included field {:?} of type {:?} is not a recognized special type, and no package specified. \
                 This type is assumed to be in the same package as the generated code",
                extra.name, extra.type_name
            ));
        }

        let field = Field::new(field_name, FieldType::Resolved(mapping.ty)).with_tag(extra.tag.clone());
        ormable
            .fields
            .insert(field)
            .map_err(|rejected| ResolveError::DuplicateField {
                field: rejected.name,
                type_name: type_name.clone(),
            })?;
    }

    debug!(type_name = %type_name, fields = ormable.fields.len(), "basic fields mapped");
    Ok(())
}

//! Three-pass schema resolution.
//!
//! 1. Register every resolvable message across the whole descriptor set.
//! 2. Map the basic (non-association) fields of every registered type.
//! 3. Resolve associations for every registered type, injecting foreign keys
//!    into other types and filling association options.
//!
//! Each pass visits all types, in declaration order, before the next begins.
//! The registry is threaded through the passes by exclusive reference.

mod associations;
mod basic;
pub mod naming;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ResolverConfig;
use crate::descriptor::{DescriptorSet, MessageDescriptor};
use crate::diagnostics::Diagnostics;
use crate::error::ResolveError;
use crate::mapping::{StandardTypeMapper, TypeMapper};
use crate::schema::{ModuleRef, RegisteredType, Registry};

/// Counters collected while resolving associations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionStats {
    pub associations: usize,
    pub foreign_keys_created: usize,
    pub foreign_keys_reused: usize,
    pub join_tables: usize,
}

/// The fully resolved schema handed to the emitter.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    /// Registered types in registration order
    pub types: Vec<RegisteredType>,
    pub stats: ResolutionStats,
    pub warnings: Vec<String>,
}

impl ResolvedSchema {
    /// Look up a resolved type by origin name.
    pub fn get(&self, origin_name: &str) -> Option<&RegisteredType> {
        self.types.iter().find(|ty| ty.origin_name == origin_name)
    }

    pub fn field_count(&self) -> usize {
        self.types.iter().map(|ty| ty.fields.len()).sum()
    }
}

/// Resolve a descriptor set with the built-in type mapper.
pub fn resolve(set: &DescriptorSet, config: &ResolverConfig) -> Result<ResolvedSchema, ResolveError> {
    resolve_with(set, config, &StandardTypeMapper::new(*config))
}

/// Resolve a descriptor set with a caller-supplied type mapper.
///
/// # Errors
///
/// Returns the first fatal condition met; no partial schema is produced.
pub fn resolve_with(
    set: &DescriptorSet,
    config: &ResolverConfig,
    mapper: &dyn TypeMapper,
) -> Result<ResolvedSchema, ResolveError> {
    let mut diagnostics = Diagnostics::new(config.quiet);

    let (mut registry, owned) = register_types(set);
    info!(types = registry.len(), "registered resolvable types");

    for msg in &owned {
        basic::map_basic_fields(&mut registry, msg, mapper, &mut diagnostics)?;
    }
    debug!("basic fields mapped");

    let mut stats = ResolutionStats::default();
    for msg in &owned {
        associations::resolve_associations(&mut registry, msg, &mut stats)?;
    }
    info!(
        associations = stats.associations,
        foreign_keys = stats.foreign_keys_created,
        join_tables = stats.join_tables,
        "associations resolved"
    );

    Ok(ResolvedSchema {
        types: registry.into_types(),
        stats,
        warnings: diagnostics.into_warnings(),
    })
}

/// Pass 1. Returns the registry and the messages that own a registry entry,
/// in declaration order. Map entries are ignored altogether.
fn register_types(set: &DescriptorSet) -> (Registry, Vec<&MessageDescriptor>) {
    let mut registry = Registry::new();
    let mut owned = Vec::new();

    for module in &set.modules {
        for msg in module.messages.iter().filter(|msg| !msg.map_entry) {
            registry.note_message(msg.short_name());
            if !msg.is_ormable() {
                continue;
            }

            let module_ref = ModuleRef {
                name: module.name.clone(),
                import_path: module.import_path.clone(),
            };
            let table = msg.options.as_ref().and_then(|opts| opts.table.clone());
            if registry.register(RegisteredType::new(msg.short_name(), module_ref, table)) {
                debug!(type_name = msg.short_name(), module = %module.name, "registered");
                owned.push(msg);
            } else {
                debug!(type_name = msg.short_name(), module = %module.name, "already registered, skipping");
            }
        }
    }

    (registry, owned)
}

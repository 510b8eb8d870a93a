//! Insertion-ordered field container.

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::types::Field;

/// Fields of a registered type keyed by name.
///
/// Lookup is by name; iteration follows insertion order, which is the order
/// fields are emitted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: IndexMap<String, Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Returns the rejected field if the name is taken.
    pub fn insert(&mut self, field: Field) -> Result<(), Field> {
        match self.fields.entry(field.name.clone()) {
            Entry::Occupied(_) => Err(field),
            Entry::Vacant(slot) => {
                slot.insert(field);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

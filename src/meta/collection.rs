//! Ordered, name-indexed descriptor registry for one object type.

use crate::error::{Error, Result};
use crate::meta::descriptor::ValueDescriptor;
use std::collections::HashMap;

/// The descriptors of one concrete document object type, in registration
/// order, with an ASCII case-insensitive name index.
///
/// Built exactly once per type and cached for the process lifetime; this
/// is intentional immutable shared state.
#[derive(Debug)]
pub struct ValueDescriptorCollection {
    type_name: &'static str,
    ordered: Vec<ValueDescriptor>,
    index: HashMap<String, usize>,
}

impl ValueDescriptorCollection {
    pub(crate) fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            ordered: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Name of the type these descriptors belong to.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether no descriptors are registered.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ValueDescriptor> {
        self.ordered.iter()
    }

    /// Look up a descriptor by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&ValueDescriptor> {
        self.index
            .get(&name.to_ascii_lowercase())
            .map(|&i| &self.ordered[i])
    }

    /// Look up a descriptor by case-insensitive name, failing with
    /// `InvalidFieldName` when absent.
    pub fn find(&self, name: &str) -> Result<&ValueDescriptor> {
        self.get(name).ok_or_else(|| Error::InvalidFieldName {
            type_name: self.type_name,
            name: name.to_string(),
        })
    }

    pub(crate) fn insert(&mut self, descriptor: ValueDescriptor) {
        let key = descriptor.name().to_ascii_lowercase();
        debug_assert!(
            !self.index.contains_key(&key),
            "duplicate descriptor '{}' on {}",
            descriptor.name(),
            self.type_name
        );
        self.index.insert(key, self.ordered.len());
        self.ordered.push(descriptor);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut ValueDescriptor> {
        self.ordered.last_mut()
    }
}

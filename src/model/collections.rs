//! Ordered child collections.

use crate::meta::Meta;
use crate::model::object::{DocumentObject, ObjectBase, ParentLink};
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

static COLLECTION_META: Lazy<Meta> = Lazy::new(|| Meta::empty("ObjectCollection"));

/// An ordered collection of owned child document objects.
///
/// The collection owns its children: adding an element binds its parent
/// slot, removing one unbinds it. Mutation at a position invalidates the
/// positional context of everything behind it, so insertion and removal
/// reset the derived state of every element at or after the mutation
/// point.
#[derive(Debug, Clone)]
pub struct ObjectCollection<T> {
    base: ObjectBase,
    items: Vec<T>,
}

impl<T> Default for ObjectCollection<T> {
    fn default() -> Self {
        Self {
            base: ObjectBase::default(),
            items: Vec::new(),
        }
    }
}

impl<T: DocumentObject + Clone> ObjectCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element by position.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Element by position, mutable.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// First element.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last element.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Last element, mutable.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate elements in order, mutable.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Append an element, binding it to the tail position. Appending
    /// shifts nothing, so no derived state is reset.
    pub fn push(&mut self, mut item: T) -> &mut T {
        let index = self.items.len();
        item.set_parent(Some(ParentLink::Index(index)));
        self.items.push(item);
        // Just pushed, cannot fail.
        &mut self.items[index]
    }

    /// Insert an element at `index`, shifting later elements.
    ///
    /// Every element originally at or after `index` is re-bound to its new
    /// position and has its derived state reset; the inserted element
    /// itself is not reset.
    pub fn insert_object_at(&mut self, index: usize, mut item: T) {
        item.set_parent(Some(ParentLink::Index(index)));
        self.items.insert(index, item);
        self.rebind_from(index + 1);
    }

    /// Remove and return the element at `index`, shifting later elements
    /// and resetting their derived state.
    pub fn remove_object_at(&mut self, index: usize) -> T {
        let mut removed = self.items.remove(index);
        removed.set_parent(None);
        self.rebind_from(index);
        removed
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        for item in &mut self.items {
            item.set_parent(None);
        }
        self.items.clear();
    }

    /// Identity query: the position of `child` within this collection, by
    /// address. This is how a child learns which slot of its parent it is
    /// bound to without an upward pointer.
    pub fn index_of(&self, child: &dyn DocumentObject) -> Option<usize> {
        let target = child.as_any() as *const dyn std::any::Any as *const ();
        self.items.iter().position(|item| {
            std::ptr::eq(item.as_any() as *const dyn std::any::Any as *const (), target)
        })
    }

    fn rebind_from(&mut self, start: usize) {
        for (i, item) in self.items.iter_mut().enumerate().skip(start) {
            item.set_parent(Some(ParentLink::Index(i)));
            item.reset_cached_values();
        }
    }
}

impl<T: DocumentObject + Clone> DocumentObject for ObjectCollection<T> {
    fn meta(&self) -> &'static Meta {
        &COLLECTION_META
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn clone_object(&self) -> Box<dyn DocumentObject> {
        Box::new(self.clone())
    }

    fn is_collection(&self) -> bool {
        true
    }

    fn child_count(&self) -> usize {
        self.items.len()
    }

    fn child_at(&self, index: usize) -> Option<&dyn DocumentObject> {
        self.items.get(index).map(|item| item as &dyn DocumentObject)
    }

    fn child_at_mut(&mut self, index: usize) -> Option<&mut dyn DocumentObject> {
        self.items
            .get_mut(index)
            .map(|item| item as &mut dyn DocumentObject)
    }
}

impl<T: Serialize> Serialize for ObjectCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'a, T> IntoIterator for &'a ObjectCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

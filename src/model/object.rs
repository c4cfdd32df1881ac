//! The document object base contract.
//!
//! Every node of a document tree implements [`DocumentObject`]: it can
//! report its per-type [`Meta`], be downcast by value descriptors, be
//! deep-cloned, and carry a parent back-reference. The back-reference is
//! an identity label ("which slot of my parent am I bound to"), never a
//! pointer; path resolution only ever walks downward from a root.

use crate::meta::Meta;
use std::any::Any;
use std::fmt;

/// The slot of a parent object a child is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentLink {
    /// Bound to a named field of the parent.
    Field(&'static str),
    /// Bound to a position in a parent collection.
    Index(usize),
}

/// State embedded in every document object.
#[derive(Debug, Clone, Default)]
pub struct ObjectBase {
    parent: Option<ParentLink>,
}

impl ObjectBase {
    /// The slot this object is bound to, if attached to a parent.
    pub fn parent(&self) -> Option<ParentLink> {
        self.parent
    }

    /// Bind or unbind the parent slot.
    pub fn set_parent(&mut self, link: Option<ParentLink>) {
        self.parent = link;
    }
}

/// A node in the document tree.
pub trait DocumentObject: Any + fmt::Debug {
    /// The shared, per-type descriptor table.
    fn meta(&self) -> &'static Meta;

    /// Upcast for descriptor downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for descriptor downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The embedded base state.
    fn base(&self) -> &ObjectBase;

    /// The embedded base state, mutable.
    fn base_mut(&mut self) -> &mut ObjectBase;

    /// Deep structural clone. No two live trees share a child node.
    fn clone_object(&self) -> Box<dyn DocumentObject>;

    /// Whether the mere presence of this object is significant, making it
    /// report non-null even when all of its fields are null.
    fn is_meaningful(&self) -> bool {
        false
    }

    /// Reset derived, position-dependent state. Collections invoke this on
    /// every element at or after a mutation point.
    fn reset_cached_values(&mut self) {}

    /// Whether this object is an ordered child collection.
    fn is_collection(&self) -> bool {
        false
    }

    /// Number of collection children.
    fn child_count(&self) -> usize {
        0
    }

    /// Collection child by position.
    fn child_at(&self, index: usize) -> Option<&dyn DocumentObject> {
        let _ = index;
        None
    }

    /// Collection child by position, mutable.
    fn child_at_mut(&mut self, index: usize) -> Option<&mut dyn DocumentObject> {
        let _ = index;
        None
    }

    /// The slot of the parent this object is bound to.
    fn parent_link(&self) -> Option<ParentLink> {
        self.base().parent()
    }

    /// Bind or unbind the parent slot.
    fn set_parent(&mut self, link: Option<ParentLink>) {
        self.base_mut().set_parent(link);
    }
}

/// Implements the mechanical parts of [`DocumentObject`] for a concrete
/// type with an embedded `base: ObjectBase` field.
///
/// `dom_object!(Type, meta = STATIC)` for regular objects and
/// `dom_object!(Type, meta = STATIC, meaningful)` for types whose mere
/// presence is significant.
macro_rules! dom_object {
    ($ty:ident, meta = $meta:expr) => {
        impl $crate::model::object::DocumentObject for $ty {
            fn meta(&self) -> &'static $crate::meta::Meta {
                &$meta
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }

            fn base(&self) -> &$crate::model::object::ObjectBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::model::object::ObjectBase {
                &mut self.base
            }

            fn clone_object(&self) -> Box<dyn $crate::model::object::DocumentObject> {
                Box::new(self.clone())
            }
        }
    };
    ($ty:ident, meta = $meta:expr, meaningful) => {
        impl $crate::model::object::DocumentObject for $ty {
            fn meta(&self) -> &'static $crate::meta::Meta {
                &$meta
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }

            fn base(&self) -> &$crate::model::object::ObjectBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::model::object::ObjectBase {
                &mut self.base
            }

            fn clone_object(&self) -> Box<dyn $crate::model::object::DocumentObject> {
                Box::new(self.clone())
            }

            fn is_meaningful(&self) -> bool {
                true
            }
        }
    };
}

pub(crate) use dom_object;

/// Shared body of the auto-vivifying accessors: create the nested object
/// on first access and bind it to its named field slot.
pub(crate) fn vivify<'a, C>(slot: &'a mut Option<C>, field: &'static str) -> &'a mut C
where
    C: DocumentObject + Default,
{
    slot.get_or_insert_with(|| {
        let mut child = C::default();
        child.set_parent(Some(ParentLink::Field(field)));
        child
    })
}

//! Reflective metadata for document object types.
//!
//! Each concrete document object type owns one [`Meta`]: a descriptor
//! table built lazily on first access and cached for the process lifetime
//! (a `once_cell::sync::Lazy` static per type, so first-use races in a
//! concurrent host resolve to a single published table). `Meta` resolves
//! dotted multi-segment paths such as `"Format.Font.Bold"` by recursive
//! delegation into the nested object's own `Meta`, and implements the
//! bulk null operations over all fields of an instance.
//!
//! Reads never construct missing intermediate objects; the write path
//! (`set_value`) descends read-write and auto-vivifies them.

mod collection;
mod descriptor;

pub use collection::ValueDescriptorCollection;
pub use descriptor::{AccessMode, DescriptorKind, Resolved, ValueDescriptor};

use crate::error::{Error, Result};
use crate::model::object::DocumentObject;
use crate::values::{NullableValue, Value};
use descriptor::{
    Accessor, CollectionFns, ObjectFns, PlainFns, RefFns, ScalarFns,
};

/// Per-type facade over a [`ValueDescriptorCollection`].
///
/// Holds no per-instance state; every operation takes the target instance
/// as a parameter. The instance passed to an operation must be of the
/// type this `Meta` was built for.
#[derive(Debug)]
pub struct Meta {
    descriptors: ValueDescriptorCollection,
}

impl Meta {
    /// Start building the descriptor table for one concrete type.
    pub fn builder(type_name: &'static str) -> MetaBuilder {
        MetaBuilder {
            descriptors: ValueDescriptorCollection::new(type_name),
        }
    }

    /// A table with no descriptors, shared by plain child collections.
    pub fn empty(type_name: &'static str) -> Meta {
        Meta {
            descriptors: ValueDescriptorCollection::new(type_name),
        }
    }

    /// The descriptor registry, usable for generic tooling.
    pub fn descriptors(&self) -> &ValueDescriptorCollection {
        &self.descriptors
    }

    /// Resolve a dotted path on `obj` and read the addressed field.
    pub fn get_value<'a>(
        &self,
        obj: &'a dyn DocumentObject,
        path: &str,
        mode: AccessMode,
    ) -> Result<Resolved<'a>> {
        let (head, tail) = split_path(path)?;
        let descriptor = self.descriptors.find(head)?;
        match tail {
            None => descriptor.get(obj, mode),
            Some(rest) => match descriptor.peek_object(obj)? {
                // Reads never vivify: an absent intermediate makes the
                // whole path read as null.
                None => Ok(Resolved::Null),
                Some(child) => child.meta().get_value(child, rest, mode),
            },
        }
    }

    /// Resolve a dotted path on `obj` and write the addressed field,
    /// vivifying absent intermediate objects. The path and value shape are
    /// validated before any mutation of the terminal field.
    ///
    /// Field names are checked level by level as the descent proceeds, so a
    /// write that fails on a later segment can leave intermediates it
    /// vivified on the way down. Those objects hold no values, still read
    /// as semantically empty, and contribute nothing to serialized output.
    pub fn set_value(&self, obj: &mut dyn DocumentObject, path: &str, value: Value) -> Result<()> {
        let (head, tail) = split_path(path)?;
        let descriptor = self.descriptors.find(head)?;
        match tail {
            None => descriptor.set(obj, value),
            Some(rest) => {
                let child = descriptor.ensure_object(obj)?;
                let meta = child.meta();
                meta.set_value(child, rest, value)
            }
        }
    }

    /// Null-check the field addressed by a dotted path. The path must
    /// terminate at a scalar; object-valued heads with no remaining tail
    /// use the recursive "semantically empty" check.
    pub fn is_null(&self, obj: &dyn DocumentObject, path: &str) -> Result<bool> {
        let (head, tail) = split_path(path)?;
        let descriptor = self.descriptors.find(head)?;
        match tail {
            None => descriptor.is_null(obj),
            Some(rest) => {
                if matches!(
                    descriptor.kind(),
                    DescriptorKind::Plain | DescriptorKind::Scalar
                ) {
                    return Err(Error::InvalidPathShape {
                        path: path.to_string(),
                        reason: "path continues past a scalar field",
                    });
                }
                match descriptor.peek_object(obj)? {
                    None => Ok(true),
                    Some(child) => child.meta().is_null(child, rest),
                }
            }
        }
    }

    /// Clear the field addressed by a dotted path. Absent intermediates
    /// are left absent (they are already null).
    pub fn set_null(&self, obj: &mut dyn DocumentObject, path: &str) -> Result<()> {
        let (head, tail) = split_path(path)?;
        let descriptor = self.descriptors.find(head)?;
        match tail {
            None => descriptor.set_null(obj),
            Some(rest) => match descriptor.peek_object_mut(obj)? {
                None => Ok(()),
                Some(child) => {
                    let meta = child.meta();
                    meta.set_null(child, rest)
                }
            },
        }
    }

    /// Whether every non-ref-only field of `obj` is null.
    pub fn is_null_all(&self, obj: &dyn DocumentObject) -> Result<bool> {
        for descriptor in self.descriptors.iter() {
            if descriptor.is_ref_only() {
                continue;
            }
            if !descriptor.is_null(obj)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Clear every non-ref-only field of `obj`.
    pub fn set_null_all(&self, obj: &mut dyn DocumentObject) -> Result<()> {
        for descriptor in self.descriptors.iter() {
            if descriptor.is_ref_only() {
                continue;
            }
            descriptor.set_null(obj)?;
        }
        Ok(())
    }
}

/// Whether a document object is semantically empty: all fields null,
/// recursively, or all children empty for collections. Objects whose mere
/// presence is significant report non-null unconditionally.
pub fn object_is_null(obj: &dyn DocumentObject) -> Result<bool> {
    if obj.is_meaningful() {
        return Ok(false);
    }
    if obj.is_collection() {
        for i in 0..obj.child_count() {
            if let Some(child) = obj.child_at(i) {
                if !object_is_null(child)? {
                    return Ok(false);
                }
            }
        }
        return Ok(true);
    }
    obj.meta().is_null_all(obj)
}

/// Recursively clear a document object: every child of a collection,
/// every non-ref-only field otherwise.
pub fn set_null_object(obj: &mut dyn DocumentObject) -> Result<()> {
    if obj.is_collection() {
        for i in 0..obj.child_count() {
            if let Some(child) = obj.child_at_mut(i) {
                set_null_object(child)?;
            }
        }
        return Ok(());
    }
    let meta = obj.meta();
    meta.set_null_all(obj)
}

/// Split a dotted path into its head segment and remaining tail.
///
/// The whole remaining path is validated here, not just the head: the
/// descent short-circuits at absent intermediates, so a malformed tail
/// must be rejected before the first segment resolves.
fn split_path(path: &str) -> Result<(&str, Option<&str>)> {
    if path.is_empty() {
        return Err(Error::InvalidPathShape {
            path: path.to_string(),
            reason: "empty path",
        });
    }
    if path.split('.').any(|segment| segment.is_empty()) {
        return Err(Error::InvalidPathShape {
            path: path.to_string(),
            reason: "empty segment",
        });
    }
    Ok(match path.split_once('.') {
        None => (path, None),
        Some((head, tail)) => (head, Some(tail)),
    })
}

/// Builder for a type's descriptor table.
///
/// Registration is explicit and compile-time checked: each entry is a set
/// of plain function pointers over the concrete type, so no runtime
/// reflection is involved and a registered accessor cannot name a field
/// that does not exist.
pub struct MetaBuilder {
    descriptors: ValueDescriptorCollection,
}

impl MetaBuilder {
    /// Register a nullable scalar field.
    pub fn scalar<T, N>(
        mut self,
        name: &'static str,
        get: fn(&T) -> &N,
        get_mut: fn(&mut T) -> &mut N,
    ) -> Self
    where
        T: DocumentObject,
        N: NullableValue + 'static,
    {
        self.descriptors.insert(ValueDescriptor {
            name,
            ref_only: false,
            item_type: None,
            accessor: Accessor::Scalar(Box::new(ScalarFns { get, get_mut })),
        });
        self
    }

    /// Register a plain, always-set field.
    pub fn plain<T>(
        mut self,
        name: &'static str,
        get: fn(&T) -> Value,
        set: fn(&mut T, Value) -> Result<()>,
        clear: fn(&mut T),
    ) -> Self
    where
        T: DocumentObject,
    {
        self.descriptors.insert(ValueDescriptor {
            name,
            ref_only: false,
            item_type: None,
            accessor: Accessor::Plain(Box::new(PlainFns { get, set, clear })),
        });
        self
    }

    /// Register an owned nested object field. `ensure` is the
    /// auto-vivifying accessor used by write descent.
    pub fn object<T, C>(
        mut self,
        name: &'static str,
        peek: fn(&T) -> Option<&C>,
        peek_mut: fn(&mut T) -> Option<&mut C>,
        ensure: fn(&mut T) -> &mut C,
    ) -> Self
    where
        T: DocumentObject,
        C: DocumentObject,
    {
        self.descriptors.insert(ValueDescriptor {
            name,
            ref_only: false,
            item_type: None,
            accessor: Accessor::Object(Box::new(ObjectFns {
                peek,
                peek_mut,
                ensure,
            })),
        });
        self
    }

    /// Register a reference-only object field: computed or borrowed,
    /// excluded from bulk null operations.
    pub fn object_ref<T, C>(mut self, name: &'static str, peek: fn(&T) -> Option<&C>) -> Self
    where
        T: DocumentObject,
        C: DocumentObject,
    {
        self.descriptors.insert(ValueDescriptor {
            name,
            ref_only: true,
            item_type: None,
            accessor: Accessor::ObjectRef(Box::new(RefFns { peek })),
        });
        self
    }

    /// Register an owned, always-present child collection field.
    pub fn collection<T, C>(
        mut self,
        name: &'static str,
        item_type: &'static str,
        get: fn(&T) -> &C,
        get_mut: fn(&mut T) -> &mut C,
    ) -> Self
    where
        T: DocumentObject,
        C: DocumentObject,
    {
        self.descriptors.insert(ValueDescriptor {
            name,
            ref_only: false,
            item_type: Some(item_type),
            accessor: Accessor::Collection(Box::new(CollectionFns { get, get_mut })),
        });
        self
    }

    /// Exclude the most recently registered field from bulk null sweeps.
    pub fn ref_only(mut self) -> Self {
        if let Some(last) = self.descriptors.last_mut() {
            last.ref_only = true;
        }
        self
    }

    /// Finish the table.
    pub fn build(self) -> Meta {
        Meta {
            descriptors: self.descriptors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Font, Paragraph};
    use crate::values::Value;

    fn meta_of(obj: &dyn DocumentObject) -> &'static Meta {
        obj.meta()
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("Bold").unwrap(), ("Bold", None));
        assert_eq!(
            split_path("Format.Font.Bold").unwrap(),
            ("Format", Some("Font.Bold"))
        );
        assert!(split_path("").is_err());
        assert!(split_path(".Bold").is_err());
        assert!(split_path("Format.").is_err());
        assert!(split_path("Format..Bold").is_err());
    }

    #[test]
    fn test_unknown_field_name() {
        let p = Paragraph::new();
        let err = meta_of(&p)
            .get_value(&p, "NoSuchField", AccessMode::ReadOnly)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFieldName { .. }));
    }

    #[test]
    fn test_failed_leaf_write_leaves_intermediates_empty() {
        let mut p = Paragraph::new();
        let err = meta_of(&p)
            .set_value(&mut p, "Format.Font.NoSuchField", Value::Bool(true))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFieldName { .. }));

        // The descent vivified Format and Font before the bad leaf name was
        // caught; they carry no values and still read as empty.
        assert!(p.format().is_some());
        assert!(meta_of(&p).is_null(&p, "Format").unwrap());
        assert!(meta_of(&p).is_null(&p, "Format.Font").unwrap());
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut p = Paragraph::new();
        meta_of(&p)
            .set_value(&mut p, "format.font.BOLD", Value::Bool(true))
            .unwrap();
        assert!(p.format().unwrap().font().unwrap().bold.get());
    }

    #[test]
    fn test_dotted_path_equivalence() {
        let mut p = Paragraph::new();
        // Direct property assignment...
        p.format_mut().font_mut().bold.set(true);

        // ...reads back through the generic path API.
        let v = meta_of(&p)
            .get_value(&p, "Format.Font.Bold", AccessMode::ReadOnly)
            .unwrap()
            .into_value();
        assert_eq!(v, Some(Value::Bool(true)));

        // And the generic write is visible to direct property reads.
        meta_of(&p)
            .set_value(&mut p, "Format.Font.Bold", Value::Bool(false))
            .unwrap();
        assert!(!p.format().unwrap().font().unwrap().bold.get());
        assert!(!p.format().unwrap().font().unwrap().bold.is_null());
    }

    #[test]
    fn test_set_value_vivifies_intermediates() {
        let mut p = Paragraph::new();
        assert!(p.format().is_none());

        meta_of(&p)
            .set_value(&mut p, "Format.Font.Italic", Value::Bool(true))
            .unwrap();
        assert!(p.format().unwrap().font().unwrap().italic.get());
    }

    #[test]
    fn test_get_value_never_vivifies() {
        let p = Paragraph::new();

        let resolved = meta_of(&p)
            .get_value(&p, "Format.Font.Bold", AccessMode::GetNull)
            .unwrap();
        assert!(resolved.is_null());
        // The read must not have constructed the intermediate format.
        assert!(p.format().is_none());
    }

    #[test]
    fn test_read_modes() {
        let p = Paragraph::new();

        // GetNull surfaces the unset scalar as an explicit null result.
        let resolved = meta_of(&p)
            .get_value(&p, "Style", AccessMode::GetNull)
            .unwrap();
        assert!(resolved.is_null());

        // ReadOnly reads the effective (default) value.
        let resolved = meta_of(&p)
            .get_value(&p, "Style", AccessMode::ReadOnly)
            .unwrap();
        assert_eq!(resolved.into_value(), Some(Value::String(String::new())));
    }

    #[test]
    fn test_descend_past_scalar_fails() {
        let mut p = Paragraph::new();
        let err = meta_of(&p)
            .get_value(&p, "Style.Nope", AccessMode::ReadOnly)
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));

        let err = meta_of(&p)
            .set_value(&mut p, "Style.Nope", Value::Bool(true))
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_is_null_path_must_stop_at_scalar() {
        let p = Paragraph::new();
        let err = meta_of(&p).is_null(&p, "Style.Anything").unwrap_err();
        assert!(matches!(err, Error::InvalidPathShape { .. }));
    }

    #[test]
    fn test_is_null_paths() {
        let mut p = Paragraph::new();
        assert!(meta_of(&p).is_null(&p, "Format").unwrap());
        assert!(meta_of(&p).is_null(&p, "Format.Font.Bold").unwrap());

        p.format_mut().font_mut().bold.set(false);
        assert!(!meta_of(&p).is_null(&p, "Format").unwrap());
        assert!(!meta_of(&p).is_null(&p, "Format.Font").unwrap());
        assert!(!meta_of(&p).is_null(&p, "Format.Font.Bold").unwrap());
    }

    #[test]
    fn test_bulk_is_null_is_conjunctive() {
        let mut font = Font::new();
        assert!(font.meta().is_null_all(&font).unwrap());

        font.size.set(crate::values::Unit::from_point(10.0));
        assert!(!font.meta().is_null_all(&font).unwrap());

        font.meta().set_null_all(&mut font).unwrap();
        assert!(font.meta().is_null_all(&font).unwrap());
        assert!(font.size.is_null());
    }

    #[test]
    fn test_set_null_path() {
        let mut p = Paragraph::new();
        p.format_mut().font_mut().bold.set(true);
        meta_of(&p).set_null(&mut p, "Format.Font.Bold").unwrap();
        assert!(p.format().unwrap().font().unwrap().bold.is_null());

        // Clearing through an absent intermediate is a no-op, not a vivify.
        let mut q = Paragraph::new();
        meta_of(&q).set_null(&mut q, "Format.Font.Bold").unwrap();
        assert!(q.format().is_none());
    }
}

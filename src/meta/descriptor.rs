//! Value descriptors: stateless, shared accessors for one named field.
//!
//! A descriptor knows how to read, write, null-check and null-reset its
//! field on any instance of the type it was registered for; the instance
//! is supplied at call time. Descriptors are built once per type from
//! plain function pointers (no runtime reflection) and live for the
//! process lifetime inside the type's [`Meta`](crate::meta::Meta).

use crate::error::{Error, Result};
use crate::meta::{object_is_null, set_null_object};
use crate::model::object::DocumentObject;
use crate::values::{NullableValue, Value};

/// How a read through the meta layer treats unset values.
///
/// Reads never auto-vivify; the read-write descent that lazily constructs
/// intermediate objects is the `set_value` path, whose mutable access is
/// expressed in the function signature rather than in a mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Unset values surface as [`Resolved::Null`].
    GetNull,
    /// Unset scalars read as their type default; unset nested objects
    /// still surface as [`Resolved::Null`] (there is nothing to return).
    ReadOnly,
}

/// Result of resolving a field or dotted path on an instance.
#[derive(Debug)]
pub enum Resolved<'a> {
    /// The field (or an intermediate object on the path) is not set.
    Null,
    /// A scalar value.
    Value(Value),
    /// A nested document object.
    Object(&'a dyn DocumentObject),
}

impl<'a> Resolved<'a> {
    /// Whether this is the explicit null result.
    pub fn is_null(&self) -> bool {
        matches!(self, Resolved::Null)
    }

    /// The scalar value, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Resolved::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The nested object, if any.
    pub fn into_object(self) -> Option<&'a dyn DocumentObject> {
        match self {
            Resolved::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// Field category a descriptor was registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// A plain, always-set value (e.g. a style name).
    Plain,
    /// A nullable scalar wrapper.
    Scalar,
    /// An owned nested object, absent until first write.
    Object,
    /// A reference-only object: computed or borrowed, excluded from bulk
    /// null operations and from write descent.
    ObjectRef,
    /// An owned child collection, always present.
    Collection,
}

pub(crate) fn cast<T: DocumentObject>(obj: &dyn DocumentObject) -> Result<&T> {
    obj.as_any()
        .downcast_ref::<T>()
        .ok_or(Error::DescriptorTarget {
            expected: std::any::type_name::<T>(),
        })
}

pub(crate) fn cast_mut<T: DocumentObject>(obj: &mut dyn DocumentObject) -> Result<&mut T> {
    obj.as_any_mut()
        .downcast_mut::<T>()
        .ok_or(Error::DescriptorTarget {
            expected: std::any::type_name::<T>(),
        })
}

pub(crate) trait ScalarAccess: Send + Sync {
    fn get<'a>(&self, obj: &'a dyn DocumentObject) -> Result<&'a dyn NullableValue>;
    fn get_mut<'a>(&self, obj: &'a mut dyn DocumentObject) -> Result<&'a mut dyn NullableValue>;
}

pub(crate) struct ScalarFns<T, N> {
    pub get: fn(&T) -> &N,
    pub get_mut: fn(&mut T) -> &mut N,
}

impl<T, N> ScalarAccess for ScalarFns<T, N>
where
    T: DocumentObject,
    N: NullableValue + 'static,
{
    fn get<'a>(&self, obj: &'a dyn DocumentObject) -> Result<&'a dyn NullableValue> {
        Ok((self.get)(cast::<T>(obj)?))
    }

    fn get_mut<'a>(&self, obj: &'a mut dyn DocumentObject) -> Result<&'a mut dyn NullableValue> {
        Ok((self.get_mut)(cast_mut::<T>(obj)?))
    }
}

pub(crate) trait PlainAccess: Send + Sync {
    fn get(&self, obj: &dyn DocumentObject) -> Result<Value>;
    fn set(&self, obj: &mut dyn DocumentObject, value: Value) -> Result<()>;
    fn clear(&self, obj: &mut dyn DocumentObject) -> Result<()>;
}

pub(crate) struct PlainFns<T> {
    pub get: fn(&T) -> Value,
    pub set: fn(&mut T, Value) -> Result<()>,
    pub clear: fn(&mut T),
}

impl<T: DocumentObject> PlainAccess for PlainFns<T> {
    fn get(&self, obj: &dyn DocumentObject) -> Result<Value> {
        Ok((self.get)(cast::<T>(obj)?))
    }

    fn set(&self, obj: &mut dyn DocumentObject, value: Value) -> Result<()> {
        (self.set)(cast_mut::<T>(obj)?, value)
    }

    fn clear(&self, obj: &mut dyn DocumentObject) -> Result<()> {
        (self.clear)(cast_mut::<T>(obj)?);
        Ok(())
    }
}

pub(crate) trait ObjectAccess: Send + Sync {
    fn peek<'a>(&self, obj: &'a dyn DocumentObject) -> Result<Option<&'a dyn DocumentObject>>;
    fn peek_mut<'a>(
        &self,
        obj: &'a mut dyn DocumentObject,
    ) -> Result<Option<&'a mut dyn DocumentObject>>;
    fn ensure<'a>(&self, obj: &'a mut dyn DocumentObject) -> Result<&'a mut dyn DocumentObject>;
}

pub(crate) struct ObjectFns<T, C> {
    pub peek: fn(&T) -> Option<&C>,
    pub peek_mut: fn(&mut T) -> Option<&mut C>,
    pub ensure: fn(&mut T) -> &mut C,
}

impl<T, C> ObjectAccess for ObjectFns<T, C>
where
    T: DocumentObject,
    C: DocumentObject,
{
    fn peek<'a>(&self, obj: &'a dyn DocumentObject) -> Result<Option<&'a dyn DocumentObject>> {
        Ok((self.peek)(cast::<T>(obj)?).map(|c| c as &dyn DocumentObject))
    }

    fn peek_mut<'a>(
        &self,
        obj: &'a mut dyn DocumentObject,
    ) -> Result<Option<&'a mut dyn DocumentObject>> {
        Ok((self.peek_mut)(cast_mut::<T>(obj)?).map(|c| c as &mut dyn DocumentObject))
    }

    fn ensure<'a>(&self, obj: &'a mut dyn DocumentObject) -> Result<&'a mut dyn DocumentObject> {
        Ok((self.ensure)(cast_mut::<T>(obj)?))
    }
}

pub(crate) trait RefAccess: Send + Sync {
    fn peek<'a>(&self, obj: &'a dyn DocumentObject) -> Result<Option<&'a dyn DocumentObject>>;
}

pub(crate) struct RefFns<T, C> {
    pub peek: fn(&T) -> Option<&C>,
}

impl<T, C> RefAccess for RefFns<T, C>
where
    T: DocumentObject,
    C: DocumentObject,
{
    fn peek<'a>(&self, obj: &'a dyn DocumentObject) -> Result<Option<&'a dyn DocumentObject>> {
        Ok((self.peek)(cast::<T>(obj)?).map(|c| c as &dyn DocumentObject))
    }
}

pub(crate) trait CollectionAccess: Send + Sync {
    fn get<'a>(&self, obj: &'a dyn DocumentObject) -> Result<&'a dyn DocumentObject>;
    fn get_mut<'a>(&self, obj: &'a mut dyn DocumentObject) -> Result<&'a mut dyn DocumentObject>;
}

pub(crate) struct CollectionFns<T, C> {
    pub get: fn(&T) -> &C,
    pub get_mut: fn(&mut T) -> &mut C,
}

impl<T, C> CollectionAccess for CollectionFns<T, C>
where
    T: DocumentObject,
    C: DocumentObject,
{
    fn get<'a>(&self, obj: &'a dyn DocumentObject) -> Result<&'a dyn DocumentObject> {
        Ok((self.get)(cast::<T>(obj)?))
    }

    fn get_mut<'a>(&self, obj: &'a mut dyn DocumentObject) -> Result<&'a mut dyn DocumentObject> {
        Ok((self.get_mut)(cast_mut::<T>(obj)?))
    }
}

pub(crate) enum Accessor {
    Plain(Box<dyn PlainAccess>),
    Scalar(Box<dyn ScalarAccess>),
    Object(Box<dyn ObjectAccess>),
    ObjectRef(Box<dyn RefAccess>),
    Collection(Box<dyn CollectionAccess>),
}

/// One named, typed field slot on a document object type.
///
/// Stateless and shared across all instances of the type; the target
/// instance is a parameter of every operation.
pub struct ValueDescriptor {
    pub(crate) name: &'static str,
    pub(crate) ref_only: bool,
    pub(crate) item_type: Option<&'static str>,
    pub(crate) accessor: Accessor,
}

impl std::fmt::Debug for ValueDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("ref_only", &self.ref_only)
            .field("item_type", &self.item_type)
            .finish()
    }
}

impl ValueDescriptor {
    /// Field name, unique (case-insensitively) within the owning type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field category.
    pub fn kind(&self) -> DescriptorKind {
        match self.accessor {
            Accessor::Plain(_) => DescriptorKind::Plain,
            Accessor::Scalar(_) => DescriptorKind::Scalar,
            Accessor::Object(_) => DescriptorKind::Object,
            Accessor::ObjectRef(_) => DescriptorKind::ObjectRef,
            Accessor::Collection(_) => DescriptorKind::Collection,
        }
    }

    /// Whether this field is excluded from bulk null operations.
    pub fn is_ref_only(&self) -> bool {
        self.ref_only
    }

    /// The declared element type, for collection fields.
    pub fn item_type(&self) -> Option<&'static str> {
        self.item_type
    }

    /// Read the field on `obj`.
    pub fn get<'a>(&self, obj: &'a dyn DocumentObject, mode: AccessMode) -> Result<Resolved<'a>> {
        match &self.accessor {
            Accessor::Plain(a) => Ok(Resolved::Value(a.get(obj)?)),
            Accessor::Scalar(a) => {
                let scalar = a.get(obj)?;
                if scalar.is_null() && mode == AccessMode::GetNull {
                    Ok(Resolved::Null)
                } else {
                    Ok(Resolved::Value(scalar.get_value()))
                }
            }
            Accessor::Object(_) | Accessor::ObjectRef(_) | Accessor::Collection(_) => {
                if mode == AccessMode::GetNull && self.is_null(obj)? {
                    return Ok(Resolved::Null);
                }
                match self.peek_object(obj)? {
                    Some(child) => Ok(Resolved::Object(child)),
                    None => Ok(Resolved::Null),
                }
            }
        }
    }

    /// Write the field on `obj` after validating the value shape.
    /// `Value::Null` clears the field.
    pub fn set(&self, obj: &mut dyn DocumentObject, value: Value) -> Result<()> {
        match &self.accessor {
            Accessor::Plain(a) => a.set(obj, value),
            Accessor::Scalar(a) => a.get_mut(obj)?.set_value(value),
            Accessor::Object(_) | Accessor::Collection(_) => {
                if value.is_null() {
                    self.set_null(obj)
                } else {
                    Err(value.incompatible_with("Object"))
                }
            }
            Accessor::ObjectRef(_) => Err(value.incompatible_with("reference-only Object")),
        }
    }

    /// Null-check the field on `obj`. Nested objects are null when absent
    /// or semantically empty; "meaningful" objects report non-null once
    /// instantiated.
    pub fn is_null(&self, obj: &dyn DocumentObject) -> Result<bool> {
        match &self.accessor {
            Accessor::Plain(_) => Ok(false),
            Accessor::Scalar(a) => Ok(a.get(obj)?.is_null()),
            Accessor::Object(a) => match a.peek(obj)? {
                Some(child) => object_is_null(child),
                None => Ok(true),
            },
            Accessor::ObjectRef(a) => match a.peek(obj)? {
                Some(child) => object_is_null(child),
                None => Ok(true),
            },
            Accessor::Collection(a) => object_is_null(a.get(obj)?),
        }
    }

    /// Clear the field on `obj`. Plain fields reset to their default;
    /// nested objects and collections are recursively nulled without being
    /// dropped or vivified.
    pub fn set_null(&self, obj: &mut dyn DocumentObject) -> Result<()> {
        match &self.accessor {
            Accessor::Plain(a) => a.clear(obj),
            Accessor::Scalar(a) => {
                a.get_mut(obj)?.set_null();
                Ok(())
            }
            Accessor::Object(a) => match a.peek_mut(obj)? {
                Some(child) => set_null_object(child),
                None => Ok(()),
            },
            Accessor::ObjectRef(_) => Ok(()),
            Accessor::Collection(a) => set_null_object(a.get_mut(obj)?),
        }
    }

    /// The nested object behind this field, if present. Fails with
    /// `TypeMismatch` for scalar-kind fields; the caller supplies the path
    /// segment for the error.
    pub(crate) fn peek_object<'a>(
        &self,
        obj: &'a dyn DocumentObject,
    ) -> Result<Option<&'a dyn DocumentObject>> {
        match &self.accessor {
            Accessor::Object(a) => a.peek(obj),
            Accessor::ObjectRef(a) => a.peek(obj),
            Accessor::Collection(a) => Ok(Some(a.get(obj)?)),
            Accessor::Plain(_) | Accessor::Scalar(_) => Err(Error::TypeMismatch {
                segment: self.name.to_string(),
            }),
        }
    }

    /// The nested object behind this field for write descent, vivifying an
    /// absent owned object. Reference-only fields cannot be descended into
    /// for writing.
    pub(crate) fn ensure_object<'a>(
        &self,
        obj: &'a mut dyn DocumentObject,
    ) -> Result<&'a mut dyn DocumentObject> {
        match &self.accessor {
            Accessor::Object(a) => a.ensure(obj),
            Accessor::Collection(a) => a.get_mut(obj),
            Accessor::ObjectRef(_) | Accessor::Plain(_) | Accessor::Scalar(_) => {
                Err(Error::TypeMismatch {
                    segment: self.name.to_string(),
                })
            }
        }
    }

    /// Mutable peek for null propagation along a path; never vivifies.
    pub(crate) fn peek_object_mut<'a>(
        &self,
        obj: &'a mut dyn DocumentObject,
    ) -> Result<Option<&'a mut dyn DocumentObject>> {
        match &self.accessor {
            Accessor::Object(a) => a.peek_mut(obj),
            Accessor::Collection(a) => Ok(Some(a.get_mut(obj)?)),
            Accessor::ObjectRef(_) | Accessor::Plain(_) | Accessor::Scalar(_) => {
                Err(Error::TypeMismatch {
                    segment: self.name.to_string(),
                })
            }
        }
    }
}

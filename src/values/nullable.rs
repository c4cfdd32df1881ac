//! Nullable scalar wrappers.
//!
//! Every settable scalar field on a document object is one of these
//! wrappers: a value of the field's type plus an explicit "not set" state
//! that is distinct from any valid value. A null field contributes nothing
//! to serialization and inherits from its base style or default at render
//! time; a set field contributes an explicit value. There is no third
//! state.
//!
//! The typed accessors (`get`/`set`) never fail; a null wrapper reads as
//! the type's zero value. The dynamic accessors of [`NullableValue`] are
//! what the meta layer drives and are where type coercion and enum
//! validation live.

use crate::error::{Error, Result};
use crate::values::unit::Unit;
use crate::values::value::Value;
use serde::{Serialize, Serializer};
use std::fmt;

/// Uniform dynamic access to a nullable scalar field.
///
/// Object-safe so that value descriptors can hand out `&dyn NullableValue`
/// regardless of the concrete wrapper behind a field.
pub trait NullableValue: fmt::Debug {
    /// True iff the value was never set or was explicitly reset.
    fn is_null(&self) -> bool;

    /// Reset to the null state unconditionally.
    fn set_null(&mut self);

    /// The effective value; the type's zero value when null. Never fails.
    fn get_value(&self) -> Value;

    /// Assign from a dynamic value, coercing where the shapes are
    /// compatible. `Value::Null` is equivalent to [`set_null`].
    ///
    /// Fails with `IncompatibleValue` on shape mismatch and
    /// `InvalidEnumValue` for undeclared enum members; the field is left
    /// unmodified on failure.
    ///
    /// [`set_null`]: NullableValue::set_null
    fn set_value(&mut self, value: Value) -> Result<()>;

    /// Textual attribute form for the DDL writer. Only meaningful when
    /// the value is not null.
    fn ddl_text(&self) -> String {
        self.get_value().to_ddl()
    }
}

/// A document enum usable behind [`NEnum`].
///
/// Implementations are generated by the `dom_enum!` macro; only the
/// open-set `SymbolName` enum is written by hand.
pub trait DomEnum: Copy + fmt::Debug + PartialEq + Default + Serialize + 'static {
    /// Enum type name used in error messages.
    const NAME: &'static str;

    /// Resolve a raw value to a declared member, or `None`.
    fn from_raw(raw: i32) -> Option<Self>;

    /// Resolve a member name (ASCII case-insensitive), or `None`.
    fn from_name(name: &str) -> Option<Self>;

    /// The raw value of this member.
    fn raw(self) -> i32;

    /// Textual form written to DDL output.
    fn ddl_text(self) -> String;
}

/// Declares a closed-set document enum and derives its [`DomEnum`] impl.
///
/// The first listed member is the default.
macro_rules! dom_enum {
    (
        $(#[$attr:meta])*
        $name:ident {
            $first:ident = $first_raw:literal
            $(, $variant:ident = $raw:literal)* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
        pub enum $name {
            $first,
            $($variant,)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl $crate::values::nullable::DomEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn from_raw(raw: i32) -> Option<Self> {
                match raw {
                    $first_raw => Some(Self::$first),
                    $($raw => Some(Self::$variant),)*
                    _ => None,
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                if name.eq_ignore_ascii_case(stringify!($first)) {
                    return Some(Self::$first);
                }
                $(
                    if name.eq_ignore_ascii_case(stringify!($variant)) {
                        return Some(Self::$variant);
                    }
                )*
                None
            }

            fn raw(self) -> i32 {
                match self {
                    Self::$first => $first_raw,
                    $(Self::$variant => $raw,)*
                }
            }

            fn ddl_text(self) -> String {
                match self {
                    Self::$first => stringify!($first).to_string(),
                    $(Self::$variant => stringify!($variant).to_string(),)*
                }
            }
        }
    };
}

pub(crate) use dom_enum;

/// Nullable boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NBool(Option<bool>);

impl NBool {
    /// Create a set value.
    pub fn new(value: bool) -> Self {
        NBool(Some(value))
    }

    /// The effective value; `false` when null.
    pub fn get(&self) -> bool {
        self.0.unwrap_or(false)
    }

    /// Set the value, clearing the null state.
    pub fn set(&mut self, value: bool) {
        self.0 = Some(value);
    }
}

impl From<bool> for NBool {
    fn from(value: bool) -> Self {
        NBool::new(value)
    }
}

impl NullableValue for NBool {
    fn is_null(&self) -> bool {
        self.0.is_none()
    }

    fn set_null(&mut self) {
        self.0 = None;
    }

    fn get_value(&self) -> Value {
        Value::Bool(self.get())
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => self.set_null(),
            Value::Bool(b) => self.set(b),
            other => return Err(other.incompatible_with("Bool")),
        }
        Ok(())
    }
}

impl Serialize for NBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Nullable integer.
///
/// The null state is the `i32::MIN` sentinel, so setting `i32::MIN`
/// explicitly is the same as resetting to null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NInt(i32);

const INT_NULL: i32 = i32::MIN;

impl NInt {
    /// Create a set value.
    pub fn new(value: i32) -> Self {
        NInt(value)
    }

    /// The effective value; `0` when null.
    pub fn get(&self) -> i32 {
        if self.0 == INT_NULL {
            0
        } else {
            self.0
        }
    }

    /// Set the value, clearing the null state.
    pub fn set(&mut self, value: i32) {
        self.0 = value;
    }
}

impl Default for NInt {
    fn default() -> Self {
        NInt(INT_NULL)
    }
}

impl From<i32> for NInt {
    fn from(value: i32) -> Self {
        NInt::new(value)
    }
}

impl NullableValue for NInt {
    fn is_null(&self) -> bool {
        self.0 == INT_NULL
    }

    fn set_null(&mut self) {
        self.0 = INT_NULL;
    }

    fn get_value(&self) -> Value {
        Value::Int(self.get())
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => self.set_null(),
            Value::Int(i) => self.set(i),
            other => return Err(other.incompatible_with("Int")),
        }
        Ok(())
    }
}

impl Serialize for NInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_null() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(&self.0)
        }
    }
}

/// Nullable double.
///
/// The null state is the `f64::MIN` sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NDouble(f64);

const DOUBLE_NULL: f64 = f64::MIN;

impl NDouble {
    /// Create a set value.
    pub fn new(value: f64) -> Self {
        NDouble(value)
    }

    /// The effective value; `0.0` when null.
    pub fn get(&self) -> f64 {
        if self.0 == DOUBLE_NULL {
            0.0
        } else {
            self.0
        }
    }

    /// Set the value, clearing the null state.
    pub fn set(&mut self, value: f64) {
        self.0 = value;
    }
}

impl Default for NDouble {
    fn default() -> Self {
        NDouble(DOUBLE_NULL)
    }
}

impl From<f64> for NDouble {
    fn from(value: f64) -> Self {
        NDouble::new(value)
    }
}

impl NullableValue for NDouble {
    fn is_null(&self) -> bool {
        self.0 == DOUBLE_NULL
    }

    fn set_null(&mut self) {
        self.0 = DOUBLE_NULL;
    }

    fn get_value(&self) -> Value {
        Value::Double(self.get())
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => self.set_null(),
            Value::Double(d) => self.set(d),
            Value::Int(i) => self.set(f64::from(i)),
            other => return Err(other.incompatible_with("Double")),
        }
        Ok(())
    }
}

impl Serialize for NDouble {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_null() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(&self.0)
        }
    }
}

/// Nullable string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NString(Option<String>);

impl NString {
    /// Create a set value.
    pub fn new(value: impl Into<String>) -> Self {
        NString(Some(value.into()))
    }

    /// The effective value; the empty string when null.
    pub fn get(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    /// Set the value, clearing the null state.
    pub fn set(&mut self, value: impl Into<String>) {
        self.0 = Some(value.into());
    }
}

impl From<&str> for NString {
    fn from(value: &str) -> Self {
        NString::new(value)
    }
}

impl NullableValue for NString {
    fn is_null(&self) -> bool {
        self.0.is_none()
    }

    fn set_null(&mut self) {
        self.0 = None;
    }

    fn get_value(&self) -> Value {
        Value::String(self.get().to_string())
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => self.set_null(),
            Value::String(s) => self.set(s),
            other => return Err(other.incompatible_with("String")),
        }
        Ok(())
    }
}

impl Serialize for NString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Nullable measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NUnit(Option<Unit>);

impl NUnit {
    /// Create a set value.
    pub fn new(value: Unit) -> Self {
        NUnit(Some(value))
    }

    /// The effective value; zero points when null.
    pub fn get(&self) -> Unit {
        self.0.unwrap_or(Unit::ZERO)
    }

    /// Set the value, clearing the null state.
    pub fn set(&mut self, value: Unit) {
        self.0 = Some(value);
    }
}

impl From<Unit> for NUnit {
    fn from(value: Unit) -> Self {
        NUnit::new(value)
    }
}

impl NullableValue for NUnit {
    fn is_null(&self) -> bool {
        self.0.is_none()
    }

    fn set_null(&mut self) {
        self.0 = None;
    }

    fn get_value(&self) -> Value {
        Value::Unit(self.get())
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => self.set_null(),
            Value::Unit(u) => self.set(u),
            // Bare numbers are taken as points.
            Value::Double(d) => self.set(Unit::from_point(d)),
            Value::Int(i) => self.set(Unit::from_point(f64::from(i))),
            other => return Err(other.incompatible_with("Unit")),
        }
        Ok(())
    }
}

impl Serialize for NUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Nullable enum member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NEnum<E: DomEnum> {
    value: Option<E>,
}

impl<E: DomEnum> NEnum<E> {
    /// Create a set value.
    pub fn new(value: E) -> Self {
        NEnum { value: Some(value) }
    }

    /// The effective member; the enum's default when null.
    pub fn get(&self) -> E {
        self.value.unwrap_or_default()
    }

    /// Set the member, clearing the null state.
    pub fn set(&mut self, value: E) {
        self.value = Some(value);
    }
}

impl<E: DomEnum> Default for NEnum<E> {
    fn default() -> Self {
        NEnum { value: None }
    }
}

impl<E: DomEnum> From<E> for NEnum<E> {
    fn from(value: E) -> Self {
        NEnum::new(value)
    }
}

impl<E: DomEnum> NullableValue for NEnum<E> {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn set_null(&mut self) {
        self.value = None;
    }

    fn get_value(&self) -> Value {
        Value::Int(self.get().raw())
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => self.set_null(),
            Value::Int(raw) => {
                let member = E::from_raw(raw).ok_or_else(|| Error::InvalidEnumValue {
                    enum_name: E::NAME,
                    value: raw.to_string(),
                })?;
                self.set(member);
            }
            Value::String(name) => {
                let member = E::from_name(&name).ok_or_else(|| Error::InvalidEnumValue {
                    enum_name: E::NAME,
                    value: name,
                })?;
                self.set(member);
            }
            other => return Err(other.incompatible_with(E::NAME)),
        }
        Ok(())
    }

    fn ddl_text(&self) -> String {
        self.get().ddl_text()
    }
}

impl<E: DomEnum> Serialize for NEnum<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    dom_enum! {
        /// Test-only enum.
        Flavor {
            Plain = 0,
            Sweet = 1,
            Sour = 2,
        }
    }

    #[test]
    fn test_null_round_trip_bool() {
        let mut v = NBool::default();
        assert!(v.is_null());
        assert!(!v.get());

        v.set(true);
        assert!(!v.is_null());
        assert!(v.get());

        v.set_null();
        assert!(v.is_null());
        assert!(!v.get());
    }

    #[test]
    fn test_null_round_trip_int() {
        let mut v = NInt::default();
        assert!(v.is_null());
        assert_eq!(v.get(), 0);

        v.set(42);
        assert!(!v.is_null());
        assert_eq!(v.get(), 42);

        v.set_null();
        assert!(v.is_null());
        assert_eq!(v.get(), 0);
    }

    #[test]
    fn test_null_round_trip_double() {
        let mut v = NDouble::default();
        assert!(v.is_null());
        assert_eq!(v.get(), 0.0);

        v.set(1.25);
        assert!(!v.is_null());
        assert_eq!(v.get(), 1.25);

        v.set_null();
        assert!(v.is_null());
    }

    #[test]
    fn test_null_round_trip_string() {
        let mut v = NString::default();
        assert!(v.is_null());
        assert_eq!(v.get(), "");

        v.set("hello");
        assert!(!v.is_null());
        assert_eq!(v.get(), "hello");

        v.set_null();
        assert!(v.is_null());
        assert_eq!(v.get(), "");
    }

    #[test]
    fn test_null_round_trip_unit() {
        let mut v = NUnit::default();
        assert!(v.is_null());
        assert_eq!(v.get(), Unit::ZERO);

        v.set(Unit::from_centimeter(3.0));
        assert!(!v.is_null());
        assert_eq!(v.get(), Unit::from_centimeter(3.0));

        v.set_null();
        assert!(v.is_null());
    }

    #[test]
    fn test_null_round_trip_enum() {
        let mut v: NEnum<Flavor> = NEnum::default();
        assert!(v.is_null());
        assert_eq!(v.get(), Flavor::Plain);

        v.set(Flavor::Sour);
        assert!(!v.is_null());
        assert_eq!(v.get(), Flavor::Sour);

        v.set_null();
        assert!(v.is_null());
    }

    #[test]
    fn test_enum_validation() {
        let mut v: NEnum<Flavor> = NEnum::default();

        v.set_value(Value::Int(1)).unwrap();
        assert_eq!(v.get(), Flavor::Sweet);
        assert_eq!(v.get_value(), Value::Int(1));

        let err = v.set_value(Value::Int(17)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::InvalidEnumValue { enum_name: "Flavor", .. }
        ));
        // The field is left unmodified on failure.
        assert_eq!(v.get(), Flavor::Sweet);

        v.set_value(Value::String("sour".into())).unwrap();
        assert_eq!(v.get(), Flavor::Sour);
        assert!(v.set_value(Value::String("bitter".into())).is_err());
    }

    #[test]
    fn test_enum_ddl_text() {
        let v: NEnum<Flavor> = NEnum::new(Flavor::Sweet);
        assert_eq!(v.ddl_text(), "Sweet");
    }

    #[test]
    fn test_coercions() {
        let mut u = NUnit::default();
        u.set_value(Value::Double(6.0)).unwrap();
        assert_eq!(u.get(), Unit::from_point(6.0));

        let mut d = NDouble::default();
        d.set_value(Value::Int(4)).unwrap();
        assert_eq!(d.get(), 4.0);

        let mut b = NBool::default();
        assert!(b.set_value(Value::Int(1)).is_err());
        assert!(b.is_null());
    }

    #[test]
    fn test_int_min_is_null_sentinel() {
        let mut v = NInt::new(7);
        v.set(i32::MIN);
        assert!(v.is_null());
        assert_eq!(v.get(), 0);
    }

    #[test]
    fn test_equality() {
        assert_eq!(NBool::default(), NBool::default());
        assert_eq!(NBool::new(true), NBool::new(true));
        assert_ne!(NBool::new(true), NBool::default());
        assert_ne!(NBool::new(true), NBool::new(false));

        assert_eq!(NEnum::<Flavor>::default(), NEnum::<Flavor>::default());
        assert_ne!(NEnum::new(Flavor::Plain), NEnum::<Flavor>::default());
    }
}

//! The dynamic value currency of the reflective meta layer.

use crate::error::Error;
use crate::values::color::Color;
use crate::values::unit::Unit;
use std::fmt;

/// A dynamically typed scalar value.
///
/// `Value` is the exchange type of the generic get/set path API: typed
/// fields accept and produce it so that callers without compile-time
/// knowledge of a concrete document type can still read and write fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The explicit "not set" value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer, also used as the raw form of enum members.
    Int(i32),
    /// A floating point number.
    Double(f64),
    /// A string.
    String(String),
    /// A measurement.
    Unit(Unit),
    /// An ARGB color.
    Color(Color),
}

impl Value {
    /// Shape name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Double(_) => "Double",
            Value::String(_) => "String",
            Value::Unit(_) => "Unit",
            Value::Color(_) => "Color",
        }
    }

    /// Whether this is the explicit null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Textual attribute form used by the DDL writer.
    pub fn to_ddl(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Double(d) => d.to_string(),
            Value::String(s) => quote(s),
            Value::Unit(u) => u.to_string(),
            Value::Color(c) => c.to_string(),
        }
    }

    pub(crate) fn incompatible_with(&self, expected: &'static str) -> Error {
        Error::IncompatibleValue {
            expected,
            given: self.type_name(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other.to_ddl()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Unit> for Value {
    fn from(v: Unit) -> Self {
        Value::Unit(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Value::Color(v)
    }
}

/// Quote and escape a string for DDL output.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ddl_forms() {
        assert_eq!(Value::Bool(true).to_ddl(), "true");
        assert_eq!(Value::Int(-3).to_ddl(), "-3");
        assert_eq!(Value::Double(1.5).to_ddl(), "1.5");
        assert_eq!(Value::String("a \"b\"".into()).to_ddl(), "\"a \\\"b\\\"\"");
        assert_eq!(Value::Unit(Unit::from_centimeter(2.0)).to_ddl(), "2cm");
        assert_eq!(Value::Null.to_ddl(), "null");
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(Value::from(12i32).type_name(), "Int");
        assert_eq!(Value::from("x").type_name(), "String");
        assert_eq!(Value::Null.type_name(), "Null");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\nb"), "\"a\\nb\"");
        assert_eq!(quote("back\\slash"), "\"back\\\\slash\"");
    }
}

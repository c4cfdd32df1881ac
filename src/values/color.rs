//! ARGB color values with an explicit "empty" state.
//!
//! Color-space math is out of scope; a color here is an opaque ARGB word
//! that is either set or empty, following the same nullable contract as
//! the scalar wrappers.

use crate::error::Result;
use crate::values::nullable::NullableValue;
use crate::values::value::Value;
use serde::{Serialize, Serializer};
use std::fmt;

/// An ARGB color that is either set or empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color(Option<u32>);

impl Color {
    /// The empty (unset) color.
    pub const EMPTY: Color = Color(None);

    /// Create a color from a full ARGB word.
    pub fn from_argb(argb: u32) -> Self {
        Color(Some(argb))
    }

    /// Create an opaque color from RGB components.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(Some(
            0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b),
        ))
    }

    /// The ARGB word, or 0 when empty.
    pub fn argb(&self) -> u32 {
        self.0.unwrap_or(0)
    }

    /// Whether the color is empty (unset).
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(argb) => write!(f, "0x{:08X}", argb),
            None => write!(f, "empty"),
        }
    }
}

impl NullableValue for Color {
    fn is_null(&self) -> bool {
        self.is_empty()
    }

    fn set_null(&mut self) {
        self.0 = None;
    }

    fn get_value(&self) -> Value {
        Value::Color(*self)
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => {
                self.set_null();
                Ok(())
            }
            Value::Color(c) => {
                *self = c;
                Ok(())
            }
            Value::Int(argb) => {
                self.0 = Some(argb as u32);
                Ok(())
            }
            other => Err(other.incompatible_with("Color")),
        }
    }

    fn ddl_text(&self) -> String {
        self.to_string()
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Some(_) => serializer.serialize_some(&self.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_empty() {
        let c = Color::default();
        assert!(c.is_empty());
        assert_eq!(c.argb(), 0);
        assert_eq!(c, Color::EMPTY);
    }

    #[test]
    fn test_color_from_rgb() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.argb(), 0xFF12_3456);
        assert_eq!(c.to_string(), "0xFF123456");
    }

    #[test]
    fn test_color_nullable_contract() {
        let mut c = Color::from_argb(0xFF00_FF00);
        assert!(!c.is_null());
        c.set_null();
        assert!(c.is_null());
        assert_eq!(c.get_value(), Value::Color(Color::EMPTY));

        c.set_value(Value::Color(Color::from_rgb(1, 2, 3))).unwrap();
        assert!(!c.is_null());
        assert!(c.set_value(Value::Bool(true)).is_err());
    }
}

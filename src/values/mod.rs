//! Nullable value primitives.
//!
//! Wrapper types for the scalar field categories of the document model
//! (bool, int, double, string, enum, measurement, color), each carrying an
//! explicit "not set" state, plus the dynamic [`Value`] currency the
//! reflective meta layer exchanges.

mod color;
pub(crate) mod nullable;
mod unit;
mod value;

pub use color::Color;
pub use nullable::{DomEnum, NBool, NDouble, NEnum, NInt, NString, NUnit, NullableValue};
pub use unit::{Unit, UnitType};
pub use value::Value;

pub(crate) use nullable::dom_enum;
pub(crate) use value::quote;

//! Measurement values with an attached unit of measure.

use serde::{Serialize, Serializer};
use std::fmt;

/// Unit of measure for a [`Unit`] value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Typographic points (1/72 inch). The default, written without a suffix.
    #[default]
    Point,
    /// Centimeters
    Centimeter,
    /// Millimeters
    Millimeter,
    /// Inches
    Inch,
    /// Picas (12 points)
    Pica,
}

impl UnitType {
    /// DDL suffix for this unit of measure.
    pub fn suffix(self) -> &'static str {
        match self {
            UnitType::Point => "",
            UnitType::Centimeter => "cm",
            UnitType::Millimeter => "mm",
            UnitType::Inch => "in",
            UnitType::Pica => "pc",
        }
    }
}

/// A measurement: a magnitude plus a unit of measure.
///
/// Two units compare equal only when both magnitude and unit of measure
/// match; no conversion arithmetic is applied by comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    value: f64,
    kind: UnitType,
}

impl Unit {
    /// A zero-point measurement.
    pub const ZERO: Unit = Unit {
        value: 0.0,
        kind: UnitType::Point,
    };

    /// Create a measurement in points.
    pub fn from_point(value: f64) -> Self {
        Self {
            value,
            kind: UnitType::Point,
        }
    }

    /// Create a measurement in centimeters.
    pub fn from_centimeter(value: f64) -> Self {
        Self {
            value,
            kind: UnitType::Centimeter,
        }
    }

    /// Create a measurement in millimeters.
    pub fn from_millimeter(value: f64) -> Self {
        Self {
            value,
            kind: UnitType::Millimeter,
        }
    }

    /// Create a measurement in inches.
    pub fn from_inch(value: f64) -> Self {
        Self {
            value,
            kind: UnitType::Inch,
        }
    }

    /// Create a measurement in picas.
    pub fn from_pica(value: f64) -> Self {
        Self {
            value,
            kind: UnitType::Pica,
        }
    }

    /// The magnitude in the unit's own measure.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit of measure.
    pub fn kind(&self) -> UnitType {
        self.kind
    }

    /// The magnitude converted to points.
    pub fn as_point(&self) -> f64 {
        match self.kind {
            UnitType::Point => self.value,
            UnitType::Centimeter => self.value * 72.0 / 2.54,
            UnitType::Millimeter => self.value * 72.0 / 25.4,
            UnitType::Inch => self.value * 72.0,
            UnitType::Pica => self.value * 12.0,
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::ZERO
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.kind.suffix())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::from_point(12.0).to_string(), "12");
        assert_eq!(Unit::from_centimeter(2.5).to_string(), "2.5cm");
        assert_eq!(Unit::from_inch(1.0).to_string(), "1in");
    }

    #[test]
    fn test_unit_equality_is_literal() {
        // No conversion arithmetic: 10mm and 1cm are distinct values.
        assert_ne!(Unit::from_millimeter(10.0), Unit::from_centimeter(1.0));
        assert_eq!(Unit::from_point(6.0), Unit::from_point(6.0));
    }

    #[test]
    fn test_as_point() {
        assert_eq!(Unit::from_inch(1.0).as_point(), 72.0);
        assert_eq!(Unit::from_pica(2.0).as_point(), 24.0);
        assert!((Unit::from_centimeter(2.54).as_point() - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_default_is_zero() {
        assert_eq!(Unit::default(), Unit::ZERO);
        assert_eq!(Unit::ZERO.to_string(), "0");
    }
}

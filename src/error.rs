//! Error types for the docmodel library.

use thiserror::Error;

/// Result type alias for docmodel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while accessing or serializing a document tree.
///
/// Every contract violation is surfaced to the immediate caller; the library
/// never degrades to a best-effort result, because a silently tolerated bad
/// field name or out-of-range enum value would corrupt serialized output
/// without detection.
#[derive(Error, Debug)]
pub enum Error {
    /// A dotted-path segment does not name any registered field.
    #[error("unknown field name '{name}' on {type_name}")]
    InvalidFieldName {
        /// Type the lookup was performed on.
        type_name: &'static str,
        /// The offending path segment.
        name: String,
    },

    /// An enum-kind field was set to a value outside its declared members.
    #[error("'{value}' is not a member of enum {enum_name}")]
    InvalidEnumValue {
        /// Name of the enum type.
        enum_name: &'static str,
        /// Textual form of the rejected value.
        value: String,
    },

    /// A dotted path is malformed (empty, leading/trailing dot, or it
    /// attempts to continue past a terminal scalar field).
    #[error("malformed field path '{path}': {reason}")]
    InvalidPathShape {
        /// The full path as given by the caller.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// An intermediate path segment resolved to a value that is not a
    /// document object while further segments remain.
    #[error("cannot descend into '{segment}': not a document object")]
    TypeMismatch {
        /// The segment that resolved to a non-object value.
        segment: String,
    },

    /// A value of the wrong shape was assigned to a field.
    #[error("cannot assign {given} value to a {expected} field")]
    IncompatibleValue {
        /// Value shape the field expects.
        expected: &'static str,
        /// Value shape that was supplied.
        given: &'static str,
    },

    /// A style's base-style chain loops back on itself.
    #[error("circular base style chain involving '{style}'")]
    CircularBaseStyle {
        /// Name of a style on the cycle.
        style: String,
    },

    /// A style names a base style that does not exist in the collection.
    #[error("style '{style}' has unknown base style '{base}'")]
    UnknownBaseStyle {
        /// The referring style.
        style: String,
        /// The missing base style name.
        base: String,
    },

    /// The document is already bound to a different renderer.
    #[error("document is already bound to another renderer")]
    AlreadyBound,

    /// A descriptor was invoked against an instance of the wrong type.
    #[error("descriptor target type mismatch: expected {expected}")]
    DescriptorTarget {
        /// Type name the descriptor was registered for.
        expected: &'static str,
    },

    /// Error producing JSON output.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFieldName {
            type_name: "Paragraph",
            name: "Bogus".to_string(),
        };
        assert_eq!(err.to_string(), "unknown field name 'Bogus' on Paragraph");

        let err = Error::InvalidEnumValue {
            enum_name: "ParagraphAlignment",
            value: "17".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'17' is not a member of enum ParagraphAlignment"
        );
    }

    #[test]
    fn test_path_shape_display() {
        let err = Error::InvalidPathShape {
            path: ".Font.Bold".to_string(),
            reason: "empty leading segment",
        };
        assert!(err.to_string().contains(".Font.Bold"));
        assert!(err.to_string().contains("empty leading segment"));
    }
}

//! Errors raised while constructing or decoding bounded values.
//!
//! Mutators never fail: they normalize their input by clamping. Only the
//! constructors that validate a contract and the JSON decoders return these.

use core::fmt;

/// Which stored field of a bounded value was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Value,
    Original,
}

impl Field {
    /// Wire name of the field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "val",
            Self::Original => "orig",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders an optional upper bound for error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpperBound(pub Option<i64>);

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(max) => write!(f, "{max}"),
            None => f.write_str("unbounded"),
        }
    }
}

/// Errors produced by bounded value construction and decoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Serialized text does not have the expected shape.
    #[error("malformed input: {message}")]
    MalformedInput {
        /// Parser diagnostic.
        message: String,
    },

    /// Upper bound is not strictly greater than the lower bound.
    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i64, max: i64 },

    /// A stored field lies outside its bounds.
    #[error("{field} ({value}) must satisfy {min} <= {field} <= {max}")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: UpperBound,
    },

    /// A Clock or Counter contract was violated.
    #[error("invalid {kind}: {reason}")]
    InvalidConstruction {
        /// Name of the specialization, e.g. `Clock`.
        kind: &'static str,
        reason: &'static str,
    },

    /// The serializer failed to produce text.
    #[error("failed to encode: {message}")]
    Encode { message: String },

    /// The value cannot be expressed in the requested legacy wire format.
    #[error("cannot encode as {format}: {reason}")]
    Unrepresentable {
        format: &'static str,
        reason: &'static str,
    },
}

impl ValueError {
    pub(crate) fn malformed(err: impl fmt::Display) -> Self {
        Self::MalformedInput {
            message: err.to_string(),
        }
    }

    pub(crate) fn encode(err: impl fmt::Display) -> Self {
        Self::Encode {
            message: err.to_string(),
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "VALUE_MALFORMED_INPUT",
            Self::InvalidRange { .. } => "VALUE_INVALID_RANGE",
            Self::OutOfRange { .. } => "VALUE_OUT_OF_RANGE",
            Self::InvalidConstruction { .. } => "VALUE_INVALID_CONSTRUCTION",
            Self::Encode { .. } => "VALUE_ENCODE",
            Self::Unrepresentable { .. } => "VALUE_UNREPRESENTABLE",
        }
    }
}

/// Result alias used throughout the crate.
pub type ValueResult<T> = Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_error_matches_legacy_text() {
        let err = ValueError::InvalidConstruction {
            kind: "Clock",
            reason: "min must be 0",
        };
        assert_eq!(err.to_string(), "invalid Clock: min must be 0");
        assert_eq!(err.error_code(), "VALUE_INVALID_CONSTRUCTION");
    }

    #[test]
    fn out_of_range_renders_unbounded_max() {
        let err = ValueError::OutOfRange {
            field: Field::Original,
            value: -1,
            min: 0,
            max: UpperBound(None),
        };
        assert_eq!(err.to_string(), "orig (-1) must satisfy 0 <= orig <= unbounded");
    }
}

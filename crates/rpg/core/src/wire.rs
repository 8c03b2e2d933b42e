//! JSON wire formats for bounded values.
//!
//! Four shapes exist in persisted data:
//!
//! | Format | Shape |
//! |---|---|
//! | [`WireFormat::Canonical`] | `{"min","max","val","inc","orig"}` (`max` may be `null`) |
//! | [`WireFormat::Incrementer`] | `{"inc","val","orig"}`, no bounds at all |
//! | [`WireFormat::Clamped`] | `{"min","max","incrementer":{"inc","val","orig"}}` |
//! | [`WireFormat::Unsigned`] | `{"max","val","inc"}`, floor fixed at 0 |
//!
//! The legacy formats use `max == 0` to mean "no upper bound" (Clamped) or
//! `inc == 0` to mean "step 1" (Unsigned). Those sentinels are translated
//! here and nowhere else.

use serde::{Deserialize, Serialize};

use crate::error::{ValueError, ValueResult};
use crate::value::BoundedValue;

/// Identifies one of the supported JSON shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireFormat {
    Canonical,
    Incrementer,
    Clamped,
    Unsigned,
}

impl WireFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Incrementer => "Incrementer",
            Self::Clamped => "ClampedIncrementer",
            Self::Unsigned => "UIncrementer",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ValueRecord {
    pub(crate) min: i64,
    // Required even though it is nullable.
    #[serde(deserialize_with = "Option::deserialize")]
    pub(crate) max: Option<i64>,
    pub(crate) val: i64,
    pub(crate) inc: i64,
    pub(crate) orig: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct IncrementerRecord {
    inc: i64,
    val: i64,
    orig: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClampedRecord {
    min: i64,
    max: i64,
    incrementer: IncrementerRecord,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnsignedRecord {
    max: i64,
    val: i64,
    inc: i64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnyRecord {
    Canonical(ValueRecord),
    Clamped(ClampedRecord),
    Unsigned(UnsignedRecord),
    Incrementer(IncrementerRecord),
}

/// True for the legacy inputs that stand for "no value stored".
pub(crate) fn is_null_literal(text: &str) -> bool {
    matches!(text.trim(), "null" | r#""""#)
}

/// Stored fields of a decoded value before invariants are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Parts {
    pub(crate) min: i64,
    pub(crate) max: Option<i64>,
    pub(crate) value: i64,
    pub(crate) step: i64,
    pub(crate) original: i64,
}

impl Parts {
    pub(crate) fn validate(self) -> ValueResult<BoundedValue> {
        BoundedValue::from_parts(self.min, self.max, self.value, self.step, self.original)
    }
}

/// Decodes any supported shape, reporting which one matched.
///
/// `null` and `""` decode to the zero value in canonical form.
pub fn decode(text: &str) -> ValueResult<(BoundedValue, WireFormat)> {
    let (parts, format) = decode_parts(text)?;
    Ok((parts.validate()?, format))
}

/// Parses any supported shape without checking the range invariants, so
/// callers can apply a stricter contract first.
pub(crate) fn decode_parts(text: &str) -> ValueResult<(Parts, WireFormat)> {
    if is_null_literal(text) {
        return Ok((Parts::from(BoundedValue::default()), WireFormat::Canonical));
    }

    let record: AnyRecord = serde_json::from_str(text).map_err(|err| {
        tracing::debug!("rejected bounded value JSON: {}", err);
        ValueError::malformed(err)
    })?;

    match record {
        AnyRecord::Canonical(r) => Ok((
            Parts {
                min: r.min,
                max: r.max,
                value: r.val,
                step: r.inc,
                original: r.orig,
            },
            WireFormat::Canonical,
        )),
        AnyRecord::Clamped(r) => Ok((clamped_parts(r), WireFormat::Clamped)),
        AnyRecord::Unsigned(r) => Ok((unsigned_parts(r)?, WireFormat::Unsigned)),
        AnyRecord::Incrementer(r) => Ok((
            Parts {
                min: i64::MIN,
                max: None,
                value: r.val,
                step: r.inc,
                original: r.orig,
            },
            WireFormat::Incrementer,
        )),
    }
}

impl From<BoundedValue> for Parts {
    fn from(value: BoundedValue) -> Self {
        Self {
            min: value.min(),
            max: value.max(),
            value: value.value(),
            step: value.step(),
            original: value.original(),
        }
    }
}

/// Encodes `value` in the requested shape.
///
/// Legacy shapes drop information they cannot hold: the Incrementer shape
/// drops the bounds and the Unsigned shape drops the original value. Values a
/// shape cannot hold at all fail with [`ValueError::Unrepresentable`].
pub fn encode(value: &BoundedValue, format: WireFormat) -> ValueResult<String> {
    let incrementer = IncrementerRecord {
        inc: value.step(),
        val: value.value(),
        orig: value.original(),
    };

    let text = match format {
        WireFormat::Canonical => return value.to_json(),
        WireFormat::Incrementer => serde_json::to_string(&incrementer),
        WireFormat::Clamped => {
            let max = match value.max() {
                None => 0,
                Some(0) => {
                    return Err(unrepresentable(format, "a max of 0 means unbounded"));
                }
                Some(max) => max,
            };
            serde_json::to_string(&ClampedRecord {
                min: value.min(),
                max,
                incrementer,
            })
        }
        WireFormat::Unsigned => {
            if value.min() != 0 {
                return Err(unrepresentable(format, "min must be 0"));
            }
            let Some(max) = value.max() else {
                return Err(unrepresentable(format, "max must be set"));
            };
            if value.step() < 0 {
                return Err(unrepresentable(format, "inc must not be negative"));
            }
            serde_json::to_string(&UnsignedRecord {
                max,
                val: value.value(),
                inc: value.step(),
            })
        }
    };

    text.map_err(ValueError::encode)
}

fn clamped_parts(record: ClampedRecord) -> Parts {
    let max = if record.max == 0 {
        tracing::debug!(min = record.min, "legacy max of 0 read as unbounded");
        None
    } else {
        Some(record.max)
    };

    let inner = record.incrementer;
    Parts {
        min: record.min,
        max,
        value: inner.val,
        step: inner.inc,
        original: inner.orig,
    }
}

fn unsigned_parts(record: UnsignedRecord) -> ValueResult<Parts> {
    if record.max < 1 {
        return Err(ValueError::InvalidRange {
            min: 0,
            max: record.max,
        });
    }

    let step = match record.inc {
        inc if inc < 0 => {
            return Err(ValueError::InvalidConstruction {
                kind: "UIncrementer",
                reason: "inc must be greater than or equal to 0",
            });
        }
        0 => 1,
        inc => inc,
    };

    Ok(Parts {
        min: 0,
        max: Some(record.max),
        value: record.val,
        step,
        original: 0,
    })
}

fn unrepresentable(format: WireFormat, reason: &'static str) -> ValueError {
    ValueError::Unrepresentable {
        format: format.as_str(),
        reason,
    }
}

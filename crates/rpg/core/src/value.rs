//! The bounded value at the heart of every clock and counter.
//!
//! A [`BoundedValue`] carries a current value, a signed step, a snapshot of
//! its original value, and an inclusive range `[min, max]`. The upper bound is
//! optional: `None` means the value only has a floor.
//!
//! Every mutator keeps `value` and `original` inside the range. Out-of-range
//! input is clamped rather than rejected, so mutation never fails.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Field, UpperBound, ValueError, ValueResult};
use crate::math::{clamp, clamp_max, clamp_min};
use crate::wire::{self, ValueRecord};

/// Integer value clamped to an inclusive, optionally unbounded range.
///
/// # Example
/// ```
/// # use rpg_core::BoundedValue;
/// let mut v = BoundedValue::bounded(-4, 4).unwrap();
/// v.add(10);
/// assert_eq!(v.value(), 4);
/// v.remove(20);
/// assert_eq!(v.value(), -4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ValueRecord", into = "ValueRecord")]
pub struct BoundedValue {
    min: i64,
    max: Option<i64>,
    value: i64,
    step: i64,
    original: i64,
}

impl BoundedValue {
    /// Creates a value over `[min, max]` with step 1, starting as close to 0
    /// as the range allows.
    pub fn bounded(min: i64, max: i64) -> ValueResult<Self> {
        if max <= min {
            return Err(ValueError::InvalidRange { min, max });
        }

        let value = clamp(0, min, max);
        Ok(Self {
            min,
            max: Some(max),
            value,
            step: 1,
            original: value,
        })
    }

    /// Creates a value with only a lower bound and step 1.
    pub fn unbounded(min: i64) -> Self {
        let value = clamp_min(0, min);
        Self {
            min,
            max: None,
            value,
            step: 1,
            original: value,
        }
    }

    /// Creates a value over `[0, max]`, the classic unsigned incrementer.
    pub fn unsigned(max: i64) -> ValueResult<Self> {
        Self::bounded(0, max)
    }

    /// Rebuilds a value from stored fields, checking every invariant.
    pub fn from_parts(
        min: i64,
        max: Option<i64>,
        value: i64,
        step: i64,
        original: i64,
    ) -> ValueResult<Self> {
        match max {
            Some(max) if max <= min => return Err(ValueError::InvalidRange { min, max }),
            _ => {}
        }

        let candidate = Self {
            min,
            max,
            value,
            step,
            original,
        };
        candidate.check_field(Field::Value, value)?;
        candidate.check_field(Field::Original, original)?;
        Ok(candidate)
    }

    /// Sets the starting value, which also becomes the original value.
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = self.clamped(value);
        self.original = self.value;
        self
    }

    /// Sets the step applied by increment and decrement.
    #[must_use]
    pub const fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Parses the canonical JSON form.
    ///
    /// The literals `null` and `""` yield the zero value.
    pub fn from_json(text: &str) -> ValueResult<Self> {
        if wire::is_null_literal(text) {
            return Ok(Self::default());
        }

        let record: ValueRecord = serde_json::from_str(text).map_err(|err| {
            tracing::debug!("rejected bounded value JSON: {}", err);
            ValueError::malformed(err)
        })?;
        Self::try_from(record)
    }

    /// Renders the canonical JSON form.
    pub fn to_json(&self) -> ValueResult<String> {
        serde_json::to_string(&ValueRecord::from(*self)).map_err(ValueError::encode)
    }

    // ===== accessors =====

    pub const fn value(&self) -> i64 {
        self.value
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound, or `None` when unbounded.
    pub const fn max(&self) -> Option<i64> {
        self.max
    }

    pub const fn step(&self) -> i64 {
        self.step
    }

    pub const fn original(&self) -> i64 {
        self.original
    }

    pub const fn is_bounded(&self) -> bool {
        self.max.is_some()
    }

    /// True when the value sits on the upper bound. Always false when
    /// unbounded.
    pub fn is_full(&self) -> bool {
        self.max == Some(self.value)
    }

    /// True when the value is literally zero, regardless of `min`.
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub const fn is_at_min(&self) -> bool {
        self.value == self.min
    }

    /// True when the value still equals the original value.
    pub const fn is_unchanged(&self) -> bool {
        self.value == self.original
    }

    // ===== mutators =====

    /// Adds `step` to the value.
    pub fn increment(&mut self) {
        self.value = self.clamped(self.value.saturating_add(self.step));
    }

    /// Subtracts `step` from the value. A negative step raises it.
    pub fn decrement(&mut self) {
        self.value = self.clamped(self.value.saturating_sub(self.step));
    }

    pub fn add(&mut self, amount: i64) {
        self.value = self.clamped(self.value.saturating_add(amount));
    }

    pub fn remove(&mut self, amount: i64) {
        self.value = self.clamped(self.value.saturating_sub(amount));
    }

    /// Sets the step. The step is not constrained by the range.
    pub fn set_step(&mut self, step: i64) {
        self.step = step;
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = self.clamped(value);
    }

    pub fn set_original(&mut self, original: i64) {
        self.original = self.clamped(original);
    }

    /// Moves the lower bound.
    ///
    /// A bound at or above `max` is pulled down to `max - 1`. The value and
    /// original value are raised to the new bound if needed.
    pub fn set_min(&mut self, min: i64) {
        let min = match self.max {
            Some(max) if min >= max => {
                tracing::debug!(requested = min, max, "min coerced below max");
                max - 1
            }
            _ => min,
        };

        self.min = min;
        self.value = clamp_min(self.value, min);
        self.original = clamp_min(self.original, min);
    }

    /// Moves the upper bound.
    ///
    /// A bound at or below `min` is pushed up to `min + 1`. The value and
    /// original value are lowered to the new bound if needed.
    pub fn set_max(&mut self, max: i64) {
        let max = if max <= self.min {
            tracing::debug!(requested = max, min = self.min, "max coerced above min");
            match self.min.checked_add(1) {
                Some(max) => max,
                None => {
                    self.min -= 1;
                    i64::MAX
                }
            }
        } else {
            max
        };

        self.max = Some(max);
        self.value = clamp_max(self.value, max);
        self.original = clamp_max(self.original, max);
    }

    /// Removes the upper bound.
    pub fn clear_max(&mut self) {
        self.max = None;
    }

    /// Moves the value to the upper bound. Does nothing when unbounded.
    pub fn fill(&mut self) {
        if let Some(max) = self.max {
            self.value = max;
        }
    }

    /// Moves the value to the lower bound.
    pub fn floor(&mut self) {
        self.value = self.min;
    }

    /// Moves the value to zero, or the nearest bound if zero is out of range.
    pub fn empty(&mut self) {
        self.value = self.clamped(0);
    }

    /// Restores the original value.
    pub fn reset(&mut self) {
        self.value = self.clamped(self.original);
    }

    fn clamped(&self, v: i64) -> i64 {
        match self.max {
            Some(max) => clamp(v, self.min, max),
            None => clamp_min(v, self.min),
        }
    }

    fn check_field(&self, field: Field, value: i64) -> ValueResult<()> {
        if self.clamped(value) == value {
            return Ok(());
        }

        Err(ValueError::OutOfRange {
            field,
            value,
            min: self.min,
            max: UpperBound(self.max),
        })
    }
}

impl TryFrom<ValueRecord> for BoundedValue {
    type Error = ValueError;

    fn try_from(record: ValueRecord) -> ValueResult<Self> {
        Self::from_parts(record.min, record.max, record.val, record.inc, record.orig)
    }
}

impl From<BoundedValue> for ValueRecord {
    fn from(value: BoundedValue) -> Self {
        Self {
            min: value.min,
            max: value.max,
            val: value.value,
            inc: value.step,
            orig: value.original,
        }
    }
}

impl fmt::Display for BoundedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}/{}", self.value, max),
            None => write!(f, "{}", self.value),
        }
    }
}

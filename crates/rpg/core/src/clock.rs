//! Clocks: fillable gauges that count ticks from 0 up to a number of steps.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValueError, ValueResult};
use crate::value::BoundedValue;
use crate::wire;

const KIND: &str = "Clock";

/// A gauge over `[0, steps]` that always moves one tick at a time.
///
/// The lower bound and step are fixed; only the number of steps can change.
///
/// ```
/// # use rpg_core::Clock;
/// let mut clock = Clock::new(4).unwrap();
/// clock.increment();
/// clock.add(10);
/// assert!(clock.is_full());
/// assert_eq!(clock.to_string(), "4/4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoundedValue", into = "BoundedValue")]
pub struct Clock(BoundedValue);

impl Clock {
    /// Creates an empty clock with `steps` segments.
    pub fn new(steps: i64) -> ValueResult<Self> {
        if steps < 1 {
            return Err(invalid("max must be greater than 0"));
        }

        BoundedValue::bounded(0, steps).map(Self)
    }

    /// Creates a clock with `ticks` already filled (clamped to the clock).
    pub fn with_ticks(steps: i64, ticks: i64) -> ValueResult<Self> {
        Ok(Self(Self::new(steps)?.0.with_value(ticks)))
    }

    /// Decodes a clock from any supported wire shape.
    pub fn from_json(text: &str) -> ValueResult<Self> {
        let (parts, _) = wire::decode_parts(text)?;
        check_contract(parts.min, parts.max, parts.step)?;
        parts.validate().map(Self)
    }

    /// Renders the canonical JSON form.
    pub fn to_json(&self) -> ValueResult<String> {
        self.0.to_json()
    }

    /// Read-only view of the underlying value.
    pub const fn as_value(&self) -> &BoundedValue {
        &self.0
    }

    pub const fn value(&self) -> i64 {
        self.0.value()
    }

    /// Number of steps on the clock.
    pub fn max(&self) -> i64 {
        self.0.max().unwrap_or(1)
    }

    pub const fn original(&self) -> i64 {
        self.0.original()
    }

    pub fn is_full(&self) -> bool {
        self.0.is_full()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn increment(&mut self) {
        self.0.increment();
    }

    pub fn decrement(&mut self) {
        self.0.decrement();
    }

    pub fn add(&mut self, ticks: i64) {
        self.0.add(ticks);
    }

    pub fn remove(&mut self, ticks: i64) {
        self.0.remove(ticks);
    }

    /// Resizes the clock. Fewer than one step is raised to one.
    pub fn set_max(&mut self, steps: i64) {
        self.0.set_max(steps);
    }

    /// Grows the clock by `steps`.
    pub fn add_steps(&mut self, steps: i64) {
        self.set_max(self.max().saturating_add(steps));
    }

    /// Shrinks the clock by `steps`, never below one step.
    pub fn remove_steps(&mut self, steps: i64) {
        self.set_max(self.max().saturating_sub(steps));
    }

    pub fn set_value(&mut self, ticks: i64) {
        self.0.set_value(ticks);
    }

    pub fn set_original(&mut self, ticks: i64) {
        self.0.set_original(ticks);
    }

    pub fn fill(&mut self) {
        self.0.fill();
    }

    pub fn empty(&mut self) {
        self.0.empty();
    }

    pub fn reset(&mut self) {
        self.0.reset();
    }
}

impl TryFrom<BoundedValue> for Clock {
    type Error = ValueError;

    fn try_from(value: BoundedValue) -> ValueResult<Self> {
        check_contract(value.min(), value.max(), value.step())?;
        Ok(Self(value))
    }
}

impl From<Clock> for BoundedValue {
    fn from(clock: Clock) -> Self {
        clock.0
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn check_contract(min: i64, max: Option<i64>, step: i64) -> ValueResult<()> {
    if min != 0 {
        return Err(invalid("min must be 0"));
    }

    if !matches!(max, Some(max) if max >= 1) {
        return Err(invalid("max must be greater than 0"));
    }

    if step != 1 {
        return Err(invalid("inc must be 1"));
    }

    Ok(())
}

fn invalid(reason: &'static str) -> ValueError {
    ValueError::InvalidConstruction { kind: KIND, reason }
}

//! Counters: zero-based tallies with an optional ceiling.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValueError, ValueResult};
use crate::value::BoundedValue;
use crate::wire;

const KIND: &str = "Counter";

/// A tally that never drops below zero.
///
/// Unbounded by default; [`Counter::bounded`] or [`Counter::set_max`] add a
/// ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoundedValue", into = "BoundedValue")]
pub struct Counter(BoundedValue);

impl Counter {
    /// Creates an unbounded counter at zero.
    pub fn new() -> Self {
        Self(BoundedValue::unbounded(0))
    }

    /// Creates an unbounded counter. Negative input starts at zero.
    pub fn with_value(value: i64) -> Self {
        Self(BoundedValue::unbounded(0).with_value(value))
    }

    /// Creates a counter over `[0, max]`.
    pub fn bounded(max: i64) -> ValueResult<Self> {
        BoundedValue::unsigned(max).map(Self)
    }

    /// Decodes a counter from any supported wire shape.
    pub fn from_json(text: &str) -> ValueResult<Self> {
        let (parts, _) = wire::decode_parts(text)?;
        check_contract(parts.min)?;
        parts.validate().map(Self)
    }

    /// Renders the canonical JSON form.
    pub fn to_json(&self) -> ValueResult<String> {
        self.0.to_json()
    }

    pub const fn as_value(&self) -> &BoundedValue {
        &self.0
    }

    pub const fn value(&self) -> i64 {
        self.0.value()
    }

    pub const fn step(&self) -> i64 {
        self.0.step()
    }

    pub const fn original(&self) -> i64 {
        self.0.original()
    }

    pub const fn max(&self) -> Option<i64> {
        self.0.max()
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

    pub fn add(&mut self, amount: i64) {
        self.0.add(amount);
    }

    pub fn remove(&mut self, amount: i64) {
        self.0.remove(amount);
    }

    pub fn set_step(&mut self, step: i64) {
        self.0.set_step(step);
    }

    pub fn set_max(&mut self, max: i64) {
        self.0.set_max(max);
    }

    pub fn clear_max(&mut self) {
        self.0.clear_max();
    }

    pub fn set_value(&mut self, value: i64) {
        self.0.set_value(value);
    }

    pub fn set_original(&mut self, value: i64) {
        self.0.set_original(value);
    }

    /// Moves to the ceiling. Does nothing when unbounded.
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

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<BoundedValue> for Counter {
    type Error = ValueError;

    fn try_from(value: BoundedValue) -> ValueResult<Self> {
        check_contract(value.min())?;
        Ok(Self(value))
    }
}

impl From<Counter> for BoundedValue {
    fn from(counter: Counter) -> Self {
        counter.0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn check_contract(min: i64) -> ValueResult<()> {
    if min != 0 {
        return Err(ValueError::InvalidConstruction {
            kind: KIND,
            reason: "min must be 0",
        });
    }

    Ok(())
}

//! Bounded numeric values for tabletop tooling.
//!
//! `rpg-core` models clocks, counters, and incrementers as a single
//! [`BoundedValue`]: an integer with a signed step, an original-value
//! snapshot, and an inclusive range whose upper bound may be absent.
//! [`Clock`] and [`Counter`] wrap it with a tighter construction contract.
//!
//! Values persist as JSON. [`wire`] reads the canonical shape as well as the
//! legacy shapes still found in stored character sheets and tokens.
pub mod clock;
pub mod counter;
pub mod error;
pub mod math;
pub mod value;
pub mod wire;

pub use clock::Clock;
pub use counter::Counter;
pub use error::{Field, ValueError, ValueResult};
pub use value::BoundedValue;
pub use wire::WireFormat;

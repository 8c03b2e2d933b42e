//! Standard polyhedral dice.
//!
//! Every roll takes the random source as an argument so callers can seed it;
//! [`roll`] is the shortcut that uses the thread-local generator.
pub mod die;
pub mod error;
pub mod pool;

pub use die::{Die, roll};
pub use error::DiceError;
pub use pool::{DicePool, DieResults};

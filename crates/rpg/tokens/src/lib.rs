//! Counter tokens for the tabletop.
//!
//! A [`CounterToken`] places a [`rpg_core::Counter`] on the table and draws
//! its value with one image per decimal digit, taken from a [`CounterTheme`].
pub mod error;
#[cfg(feature = "loaders")]
pub mod loaders;
pub mod theme;
pub mod token;

pub use error::{TokenError, TokenResult};
#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, ThemeLoader};
pub use theme::{CounterTheme, DIGIT_COUNT};
pub use token::{CounterToken, DigitPlace};

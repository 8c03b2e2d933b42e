//! Standard polyhedral dice.

use rand::Rng;

use crate::error::DiceError;

/// One of the standard tabletop dice.
///
/// Names parse and print in the usual notation (`"d20"`); the discriminant is
/// the number of faces.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Die {
    D2 = 2,
    D4 = 4,
    D6 = 6,
    D8 = 8,
    D10 = 10,
    D12 = 12,
    D20 = 20,
    D100 = 100,
}

impl Die {
    /// Number of faces.
    pub const fn sides(self) -> u32 {
        self as u32
    }

    /// Rolls once, uniformly in `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.gen_range(1..=self.sides())
    }

    /// Rolls `count` times.
    pub fn roll_many<R: Rng + ?Sized>(self, rng: &mut R, count: usize) -> Vec<u32> {
        (0..count).map(|_| self.roll(rng)).collect()
    }
}

impl TryFrom<u32> for Die {
    type Error = DiceError;

    fn try_from(sides: u32) -> Result<Self, Self::Error> {
        match sides {
            2 => Ok(Self::D2),
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            _ => Err(DiceError::UnsupportedDie { sides }),
        }
    }
}

/// Rolls `die` once with the thread-local generator.
pub fn roll(die: Die) -> u32 {
    die.roll(&mut rand::thread_rng())
}

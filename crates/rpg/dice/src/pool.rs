//! Rolling several dice of one kind at once.

use rand::Rng;

use crate::die::Die;

/// A number of identical dice rolled together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DicePool(pub usize);

impl DicePool {
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    pub const fn count(self) -> usize {
        self.0
    }

    /// Rolls every die in the pool and summarizes the results.
    pub fn roll<R: Rng + ?Sized>(self, die: Die, rng: &mut R) -> DieResults {
        let mut results = DieResults::new(die);
        for face in die.roll_many(rng, self.0) {
            results.record(face);
        }
        results
    }
}

/// Summary of a pool roll.
///
/// An empty roll keeps the starting sentinels: `highest` 0 and `lowest` equal
/// to the number of sides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DieResults {
    pub die: Die,
    pub highest: u32,
    pub lowest: u32,
    pub sum: u32,
    pub all: Vec<u32>,
}

impl DieResults {
    pub fn new(die: Die) -> Self {
        Self {
            die,
            highest: 0,
            lowest: die.sides(),
            sum: 0,
            all: Vec::new(),
        }
    }

    fn record(&mut self, face: u32) {
        self.highest = self.highest.max(face);
        self.lowest = self.lowest.min(face);
        self.sum = self.sum.saturating_add(face);
        self.all.push(face);
    }
}

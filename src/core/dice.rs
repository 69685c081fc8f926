//! Dice rolls and roll validation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lowest face of a six-sided die
pub const DIE_MIN: u8 = 1;
/// Highest face of a six-sided die
pub const DIE_MAX: u8 = 6;

/// A dice source failed to produce two valid die faces
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRoll {
    #[error("no dice were read")]
    NoDice,

    #[error("expected 2 dice, got {0}")]
    WrongCount(usize),

    #[error("die value {0} is outside 1-6")]
    OutOfRange(u8),

    #[error("could not read '{0}' as a die value")]
    Unreadable(String),
}

/// Two validated die faces
///
/// Only constructed through validation, so both faces are always in 1..=6
/// and the total is always in 2..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    first: u8,
    second: u8,
}

impl DiceRoll {
    /// Validate a pair of die faces
    pub fn new(first: u8, second: u8) -> Result<Self, InvalidRoll> {
        for value in [first, second] {
            if !(DIE_MIN..=DIE_MAX).contains(&value) {
                return Err(InvalidRoll::OutOfRange(value));
            }
        }
        Ok(DiceRoll { first, second })
    }

    /// Validate however many values a reader produced
    ///
    /// Exactly two values are required; zero, one or three values fail.
    pub fn from_values(values: &[u8]) -> Result<Self, InvalidRoll> {
        match values {
            [] => Err(InvalidRoll::NoDice),
            [first, second] => DiceRoll::new(*first, *second),
            other => Err(InvalidRoll::WrongCount(other.len())),
        }
    }

    pub fn total(&self) -> u8 {
        self.first + self.second
    }

    pub fn as_pair(&self) -> (u8, u8) {
        (self.first, self.second)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.first, self.second, self.total())
    }
}

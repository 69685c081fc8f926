//! Scripted dice for deterministic testing
//!
//! Replays a predetermined sequence of rolls. Each entry holds whatever
//! values a reader produced, so scripts can also exercise the invalid-roll
//! path (a lone value, a zero, a seven).

use crate::core::{DiceRoll, InvalidRoll};
use crate::game::dice_source::DiceSource;
use crate::game::GameSnapshot;
use crate::{BaseballError, Result};
use serde::{Deserialize, Serialize};

/// A dice source that follows a fixed script of rolls
///
/// Once the script is exhausted every further acquisition fails with
/// [`InvalidRoll::NoDice`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedDice {
    script: Vec<Vec<u8>>,
    /// Current position in the script
    pub current_index: usize,
}

impl ScriptedDice {
    /// Create a source from raw value groups
    pub fn new(script: Vec<Vec<u8>>) -> Self {
        ScriptedDice {
            script,
            current_index: 0,
        }
    }

    /// Create a source from well-formed pairs
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        ScriptedDice::new(pairs.iter().map(|&(a, b)| vec![a, b]).collect())
    }

    /// Parse a script such as `"1,2 6,6 3,4"`
    ///
    /// Rolls are separated by whitespace, values within a roll by commas.
    /// Counts and ranges are not checked here; they are reported as
    /// [`InvalidRoll`] when the roll is acquired.
    pub fn parse(s: &str) -> Result<Self> {
        let mut script = Vec::new();
        for group in s.split_whitespace() {
            let values = group
                .split(',')
                .filter(|v| !v.is_empty())
                .map(|v| {
                    v.parse::<u8>().map_err(|_| {
                        BaseballError::InvalidInput(format!("invalid die value '{}' in '{}'", v, group))
                    })
                })
                .collect::<Result<Vec<u8>>>()?;
            script.push(values);
        }
        Ok(ScriptedDice::new(script))
    }

    /// Rolls left in the script
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.current_index)
    }
}

impl DiceSource for ScriptedDice {
    fn name(&self) -> &str {
        "script"
    }

    fn acquire_dice(&mut self, _view: &GameSnapshot) -> std::result::Result<(u8, u8), InvalidRoll> {
        let Some(values) = self.script.get(self.current_index) else {
            return Err(InvalidRoll::NoDice);
        };
        self.current_index += 1;
        DiceRoll::from_values(values).map(|roll| roll.as_pair())
    }
}

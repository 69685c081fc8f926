//! Read-only game snapshots for reporting
//!
//! A snapshot is an owned copy of the reportable parts of a
//! [`GameState`](crate::game::GameState). Presentation layers render it as
//! console text (via `Display`) or JSON (via serde).

use crate::core::{BaseState, Score, Team};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable view of the game at one moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub inning: u32,
    pub current_team: Team,
    pub outs: u8,
    pub score: Score,
    pub bases: BaseState,
}

impl GameSnapshot {
    /// Serialize to a single JSON line
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string(self)
            .map_err(|e| crate::BaseballError::SerializationError(e.to_string()))
    }
}

impl fmt::Display for GameSnapshot {
    /// Three-line scoreboard:
    ///
    /// ```text
    /// Score: Guest 2 - Home 1
    /// Outs: 1
    /// Bases: 1 _ 3
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "Outs: {}", self.outs)?;
        write!(f, "Bases: {}", self.bases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameSnapshot {
        GameSnapshot {
            inning: 3,
            current_team: Team::Home,
            outs: 1,
            score: Score { guest: 2, home: 1 },
            bases: BaseState::from_flags(true, false, true),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Score: Guest 2 - Home 1\nOuts: 1\nBases: 1 _ 3"
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"current_team\":\"Home\""));
        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}

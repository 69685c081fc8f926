//! Turn resolution: dice to play event to state change

use crate::core::{DiceRoll, InvalidRoll, PlayEvent};
use crate::game::GameState;
use serde::{Deserialize, Serialize};

/// What happened on one resolved turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub roll: DiceRoll,
    pub event: PlayEvent,
    /// Bases the batter advanced (0 for a strikeout)
    pub bases_advanced: u8,
    /// Runs that scored on the play
    pub runs_scored: u32,
}

/// Resolve one plate appearance from two raw die values
///
/// Fails with [`InvalidRoll`] when either value is outside 1..=6, in which
/// case `game` is not touched.
pub fn resolve_turn(game: &mut GameState, die_a: u8, die_b: u8) -> Result<TurnOutcome, InvalidRoll> {
    let roll = DiceRoll::new(die_a, die_b)?;
    Ok(resolve_roll(game, roll))
}

/// Apply a validated roll to the game
///
/// Either records one out or forces one advance, never both.
pub fn resolve_roll(game: &mut GameState, roll: DiceRoll) -> TurnOutcome {
    let event = PlayEvent::from_roll(roll);
    let bases_advanced = event.bases_advanced();

    let runs_scored = if event.is_out() {
        game.record_out();
        0
    } else {
        game.advance_runners(bases_advanced)
    };

    TurnOutcome {
        roll,
        event,
        bases_advanced,
        runs_scored,
    }
}

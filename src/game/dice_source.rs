//! Dice source trait
//!
//! This module defines the interface between the game engine and whatever
//! produces dice: a random number generator, a fixed script, a person typing
//! values, or an image-recognition pipeline. The game loop asks the source
//! for a roll once per turn and hands it a read-only snapshot of the game so
//! interactive sources can show the situation before prompting.

use crate::core::{InvalidRoll, Team};
use crate::game::GameSnapshot;

/// Produces one pair of die values per turn
///
/// Implementations may block (waiting for input, a camera, ...) but must
/// return either two values or an [`InvalidRoll`]. Values are validated
/// again by the engine, so a source that passes through raw readings
/// without checking them is still safe.
pub trait DiceSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Acquire the next roll
    fn acquire_dice(&mut self, view: &GameSnapshot) -> Result<(u8, u8), InvalidRoll>;

    /// Called when the game ends (for cleanup/logging)
    fn on_game_end(&mut self, _view: &GameSnapshot, _winner: Team) {}
}

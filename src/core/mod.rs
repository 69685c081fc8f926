//! Core game types: teams, bases, dice and play events

pub mod team;
pub mod bases;
pub mod dice;
pub mod event;

pub use team::{Team, Score};
pub use bases::BaseState;
pub use dice::{DiceRoll, InvalidRoll, DIE_MAX, DIE_MIN};
pub use event::PlayEvent;

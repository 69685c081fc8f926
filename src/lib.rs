//! Dice Baseball - a two-dice baseball game engine
//!
//! Each plate appearance is decided by the total of two six-sided dice,
//! mapped to a strikeout, walk, single, double, triple or home run. The
//! engine tracks innings, outs, bases and score, and plays nine innings
//! (more while tied) against any source of dice.

pub mod core;
pub mod game;
pub mod play_log;
pub mod simulation;
pub mod error;

pub use error::{BaseballError, Result};

//! Play events and the dice-total rule table

use crate::core::DiceRoll;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single plate appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayEvent {
    Strikeout,
    Walk,
    Single,
    Double,
    Triple,
    HomeRun,
}

impl PlayEvent {
    /// Every event, in table order
    pub const ALL: [PlayEvent; 6] = [
        PlayEvent::Strikeout,
        PlayEvent::Walk,
        PlayEvent::Single,
        PlayEvent::Double,
        PlayEvent::Triple,
        PlayEvent::HomeRun,
    ];

    /// Look up the event for a dice total
    ///
    /// | Total    | Event     |
    /// |----------|-----------|
    /// | 2, 3     | Strikeout |
    /// | 4        | Walk      |
    /// | 5, 6, 7  | Single    |
    /// | 8, 9     | Double    |
    /// | 10       | Triple    |
    /// | 11, 12   | Home Run  |
    ///
    /// Returns `None` for totals two dice cannot produce.
    pub fn from_total(total: u8) -> Option<PlayEvent> {
        match total {
            2 | 3 => Some(PlayEvent::Strikeout),
            4 => Some(PlayEvent::Walk),
            5..=7 => Some(PlayEvent::Single),
            8 | 9 => Some(PlayEvent::Double),
            10 => Some(PlayEvent::Triple),
            11 | 12 => Some(PlayEvent::HomeRun),
            _ => None,
        }
    }

    /// Event for a validated roll; every roll total is covered by the table
    pub fn from_roll(roll: DiceRoll) -> PlayEvent {
        let total = roll.total();
        PlayEvent::from_total(total)
            .unwrap_or_else(|| unreachable!("validated roll has total {} outside 2..=12", total))
    }

    /// Bases the batter and every runner are forced to advance
    ///
    /// Zero only for a strikeout, which records an out instead.
    pub fn bases_advanced(self) -> u8 {
        match self {
            PlayEvent::Strikeout => 0,
            PlayEvent::Walk | PlayEvent::Single => 1,
            PlayEvent::Double => 2,
            PlayEvent::Triple => 3,
            PlayEvent::HomeRun => 4,
        }
    }

    pub fn is_out(self) -> bool {
        self == PlayEvent::Strikeout
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayEvent::Strikeout => "Strike Out",
            PlayEvent::Walk => "Walk",
            PlayEvent::Single => "Single",
            PlayEvent::Double => "Double",
            PlayEvent::Triple => "Triple",
            PlayEvent::HomeRun => "Home Run",
        }
    }
}

impl fmt::Display for PlayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

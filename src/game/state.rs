//! Main game state structure

use crate::core::{BaseState, Score, Team};
use crate::game::phase::OUTS_PER_HALF_INNING;
use crate::game::GameSnapshot;
use serde::{Deserialize, Serialize};

/// Complete game state
///
/// Holds everything that changes during a game: the inning, which team is
/// batting, outs, score and base runners. It is owned by a single driver
/// (normally a [`GameLoop`](crate::game::GameLoop)) and mutated one turn at
/// a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current inning (starts at 1)
    pub inning: u32,

    /// Team currently at bat
    pub current_team: Team,

    /// Outs in the current half-inning
    pub outs: u8,

    /// Runs per team
    pub score: Score,

    /// Runners on base
    pub bases: BaseState,
}

impl GameState {
    /// Create a game at the top of the first inning with the guest batting
    pub fn new() -> Self {
        GameState {
            inning: 1,
            current_team: Team::Guest,
            outs: 0,
            score: Score::new(),
            bases: BaseState::empty(),
        }
    }

    /// Record one out against the batting team
    ///
    /// The caller decides whether the half-inning is over; see
    /// [`is_half_inning_over`](Self::is_half_inning_over).
    pub fn record_out(&mut self) {
        self.outs += 1;
    }

    /// Force the batter and every runner ahead by `bases`
    ///
    /// Runners are moved from third base down to first so a runner never
    /// lands on a base whose occupant has not moved yet. Runners pushed past
    /// third score. The batter then takes base `bases`, or scores on a home
    /// run (`bases == 4`). Runs are credited to the batting team and the
    /// number scored on the play is returned.
    ///
    /// # Panics
    /// If `bases` is not in 1..=4.
    pub fn advance_runners(&mut self, bases: u8) -> u32 {
        assert!(
            (1..=4).contains(&bases),
            "advance_runners called with {} bases (expected 1..=4)",
            bases
        );

        let mut runs = 0;
        for base in (1..=BaseState::COUNT).rev() {
            if !self.bases.is_occupied(base) {
                continue;
            }
            self.bases.set(base, false);
            let target = base + bases;
            if target > BaseState::COUNT {
                runs += 1;
            } else {
                self.bases.set(target, true);
            }
        }

        if bases < 4 {
            self.bases.set(bases, true);
        } else {
            runs += 1;
        }

        self.score.add(self.current_team, runs);
        runs
    }

    /// Clear outs and bases for a new half-inning
    pub fn reset_half_inning(&mut self) {
        self.outs = 0;
        self.bases.clear();
    }

    /// Hand the bat to the other team
    pub fn swap_team(&mut self) {
        self.current_team = self.current_team.opponent();
    }

    /// Move on to the next inning
    pub fn start_next_inning(&mut self) {
        self.inning += 1;
    }

    pub fn is_half_inning_over(&self) -> bool {
        self.outs >= OUTS_PER_HALF_INNING
    }

    /// Owned copy of the reportable state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            inning: self.inning,
            current_team: self.current_team,
            outs: self.outs,
            score: self.score,
            bases: self.bases,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

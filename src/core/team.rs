//! Teams and the scoreboard

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two teams in a game
///
/// The guest team always bats first in an inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Guest,
    Home,
}

impl Team {
    /// Both teams in batting order
    pub const ALL: [Team; 2] = [Team::Guest, Team::Home];

    /// The other team
    pub fn opponent(self) -> Team {
        match self {
            Team::Guest => Team::Home,
            Team::Home => Team::Guest,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::Guest => "Guest",
            Team::Home => "Home",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs scored by each team
///
/// Runs are only ever added, so both totals are non-decreasing over a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub guest: u32,
    pub home: u32,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    /// Runs scored by `team`
    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::Guest => self.guest,
            Team::Home => self.home,
        }
    }

    /// Credit `runs` to `team`
    pub fn add(&mut self, team: Team, runs: u32) {
        match team {
            Team::Guest => self.guest += runs,
            Team::Home => self.home += runs,
        }
    }

    pub fn is_tied(&self) -> bool {
        self.guest == self.home
    }

    /// Team with strictly more runs, or `None` while tied
    pub fn leader(&self) -> Option<Team> {
        use std::cmp::Ordering;
        match self.guest.cmp(&self.home) {
            Ordering::Greater => Some(Team::Guest),
            Ordering::Less => Some(Team::Home),
            Ordering::Equal => None,
        }
    }

    pub fn total(&self) -> u32 {
        self.guest + self.home
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guest {} - Home {}", self.guest, self.home)
    }
}

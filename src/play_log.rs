//! Play-by-play log
//!
//! Every resolved turn is appended to a [`PlayLog`], which can be replayed
//! for reporting or summarized into an inning-by-inning [`LineScore`].

use crate::core::{PlayEvent, Team};
use crate::game::TurnOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One resolved plate appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub inning: u32,
    pub team: Team,
    pub outcome: TurnOutcome,
    /// Outs in the half-inning after this play
    pub outs_after: u8,
}

/// Ordered history of plays in a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayLog {
    plays: Vec<PlayRecord>,

    /// Is logging enabled? (disabled for bulk simulation)
    enabled: bool,
}

impl PlayLog {
    pub fn new() -> Self {
        PlayLog {
            plays: Vec::new(),
            enabled: true,
        }
    }

    /// Create a disabled log (for benchmarking and simulation)
    pub fn disabled() -> Self {
        PlayLog {
            plays: Vec::new(),
            enabled: false,
        }
    }

    pub fn record(&mut self, play: PlayRecord) {
        if self.enabled {
            self.plays.push(play);
        }
    }

    pub fn last(&self) -> Option<&PlayRecord> {
        self.plays.last()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn plays(&self) -> &[PlayRecord] {
        &self.plays
    }

    /// Number of plays that ended in `event`
    pub fn count(&self, event: PlayEvent) -> usize {
        self.plays.iter().filter(|p| p.outcome.event == event).count()
    }

    /// Runs per inning for each team
    pub fn line_score(&self) -> LineScore {
        let mut line = LineScore::default();
        for play in &self.plays {
            line.add(play.team, play.inning, play.outcome.runs_scored);
        }
        line
    }
}

impl Default for PlayLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Inning-by-inning runs, as printed on a scoreboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    pub guest: Vec<u32>,
    pub home: Vec<u32>,
}

impl LineScore {
    fn add(&mut self, team: Team, inning: u32, runs: u32) {
        let innings = match team {
            Team::Guest => &mut self.guest,
            Team::Home => &mut self.home,
        };
        let idx = (inning as usize).saturating_sub(1);
        if innings.len() <= idx {
            innings.resize(idx + 1, 0);
        }
        innings[idx] += runs;
    }

    pub fn innings(&self, team: Team) -> &[u32] {
        match team {
            Team::Guest => &self.guest,
            Team::Home => &self.home,
        }
    }

    pub fn total(&self, team: Team) -> u32 {
        self.innings(team).iter().sum()
    }

    /// Innings with at least one play by either team
    pub fn innings_played(&self) -> usize {
        self.guest.len().max(self.home.len())
    }
}

impl fmt::Display for LineScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let innings = self.innings_played();
        write!(f, "{:<6}", "")?;
        for inning in 1..=innings {
            write!(f, "{:>3}", inning)?;
        }
        writeln!(f, "{:>5}", "R")?;

        for team in Team::ALL {
            write!(f, "{:<6}", team.name())?;
            let runs = self.innings(team);
            for idx in 0..innings {
                match runs.get(idx) {
                    Some(r) => write!(f, "{:>3}", r)?,
                    None => write!(f, "{:>3}", "-")?,
                }
            }
            write!(f, "{:>5}", self.total(team))?;
            if team == Team::Guest {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

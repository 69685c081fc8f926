//! Batch simulation of many games in parallel
//!
//! Each game owns its own [`GameState`] and [`RandomDice`]; games are
//! independent, so they run concurrently with rayon and the results are
//! folded into [`SimulationStats`].

use crate::core::Team;
use crate::game::{GameLoop, GameResult, GameState, RandomDice, VerbosityLevel};
use crate::play_log::PlayLog;
use crate::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate statistics over a batch of games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub games: usize,
    pub guest_wins: usize,
    pub home_wins: usize,
    pub extra_inning_games: usize,
    pub total_runs: u64,
    pub total_turns: u64,
    /// Most innings played in a single game
    pub longest_game: u32,
}

impl SimulationStats {
    /// Fold one game result into the totals
    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        match result.winner {
            Team::Guest => self.guest_wins += 1,
            Team::Home => self.home_wins += 1,
        }
        if result.went_to_extra_innings() {
            self.extra_inning_games += 1;
        }
        self.total_runs += u64::from(result.final_score.total());
        self.total_turns += u64::from(result.turns_played);
        self.longest_game = self.longest_game.max(result.innings_played);
    }

    pub fn wins(&self, team: Team) -> usize {
        match team {
            Team::Guest => self.guest_wins,
            Team::Home => self.home_wins,
        }
    }

    /// Average combined runs per game
    pub fn average_runs(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_runs as f64 / self.games as f64
    }

    fn percent(&self, count: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        100.0 * count as f64 / self.games as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played: {}", self.games)?;
        for team in Team::ALL {
            let wins = self.wins(team);
            writeln!(f, "{} wins: {} ({:.1}%)", team, wins, self.percent(wins))?;
        }
        writeln!(
            f,
            "Extra-inning games: {} ({:.1}%)",
            self.extra_inning_games,
            self.percent(self.extra_inning_games)
        )?;
        writeln!(f, "Average runs per game: {:.2}", self.average_runs())?;
        write!(f, "Longest game: {} innings", self.longest_game)
    }
}

/// Seed for game `game_idx` of a batch started from `seed`
pub fn game_seed(seed: u64, game_idx: usize) -> u64 {
    seed.wrapping_add((game_idx as u64).wrapping_mul(0x9E3779B97F4A7C15))
}

/// Play one silent game with the given dice
pub fn play_game(mut dice: RandomDice) -> Result<GameResult> {
    let mut game = GameState::new();
    let mut game_loop = GameLoop::new(&mut game)
        .with_verbosity(VerbosityLevel::Silent)
        .with_play_log(PlayLog::disabled());
    game_loop.run_game(&mut dice)
}

/// Run `games` games in parallel and collect statistics
///
/// With a seed every game gets a derived seed, so the statistics are
/// reproducible regardless of thread scheduling.
pub fn run_simulation(games: usize, seed: Option<u64>) -> Result<SimulationStats> {
    let results = (0..games)
        .into_par_iter()
        .map(|game_idx| {
            let dice = match seed {
                Some(seed) => RandomDice::with_seed(game_seed(seed, game_idx)),
                None => RandomDice::new(),
            };
            play_game(dice)
        })
        .collect::<Result<Vec<GameResult>>>()?;

    let mut stats = SimulationStats::default();
    for result in &results {
        stats.record(result);
    }
    Ok(stats)
}

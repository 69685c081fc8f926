//! Game loop implementation
//!
//! Drives a game turn by turn: acquire dice, resolve the play, and walk the
//! inning state machine (half-inning over, inning over, game over).

use crate::core::{DiceRoll, Score, Team};
use crate::game::dice_source::DiceSource;
use crate::game::logger::GameLogger;
use crate::game::phase::GamePhase;
use crate::game::resolver::{resolve_roll, TurnOutcome};
use crate::game::{GameSnapshot, GameState};
use crate::play_log::{PlayLog, PlayRecord};
use crate::{BaseballError, Result};

/// Verbosity level for game output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game start and outcome
    Minimal = 1,
    /// Normal - half-innings and every play (default)
    #[default]
    Normal = 2,
    /// Verbose - also the scoreboard after every play
    Verbose = 3,
}

/// Result of running a game to completion
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameResult {
    /// Team with the higher score
    pub winner: Team,
    pub final_score: Score,
    /// Full innings completed (9 unless the game went to extra innings)
    pub innings_played: u32,
    /// Plate appearances resolved
    pub turns_played: u32,
}

impl GameResult {
    pub fn went_to_extra_innings(&self) -> bool {
        self.innings_played > crate::game::phase::REGULATION_INNINGS
    }
}

/// Report for one resolved turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub turn: TurnOutcome,
    /// State right after the play, before any half-inning transition
    pub snapshot: GameSnapshot,
    /// Phase right after the play
    pub phase: GamePhase,
}

/// Summary of one completed half-inning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfInningSummary {
    pub inning: u32,
    pub team: Team,
    pub runs: u32,
    pub turns: u32,
}

/// Game loop manager
///
/// Holds the only mutable borrow of the [`GameState`] for as long as the
/// loop lives, so the state can only change one turn at a time.
pub struct GameLoop<'a> {
    /// The game state
    pub game: &'a mut GameState,
    phase: GamePhase,
    /// Set when the game reaches `GameOver`
    winner: Option<Team>,
    logger: GameLogger,
    play_log: PlayLog,
    last_outcome: Option<TurnOutcome>,
    turns_played: u32,
    /// Batting team's runs and turns played when the current half-inning began
    half_inning_start: (u32, u32),
    started: bool,
    /// Half-inning whose header has been printed (lazy printing)
    header_printed_for: Option<(u32, Team)>,
}

impl<'a> GameLoop<'a> {
    /// Create a new game loop for the given game state
    pub fn new(game: &'a mut GameState) -> Self {
        let runs = game.score.get(game.current_team);
        GameLoop {
            game,
            phase: GamePhase::InningInProgress,
            winner: None,
            logger: GameLogger::new(),
            play_log: PlayLog::new(),
            last_outcome: None,
            turns_played: 0,
            half_inning_start: (runs, 0),
            started: false,
            header_printed_for: None,
        }
    }

    /// Set verbosity level for output
    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.logger.set_verbosity(verbosity);
        self
    }

    /// Replace the logger (e.g. a capturing or JSON logger)
    pub fn with_logger(mut self, logger: GameLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the play log (e.g. a disabled one for bulk simulation)
    pub fn with_play_log(mut self, play_log: PlayLog) -> Self {
        self.play_log = play_log;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The most recently resolved play
    pub fn last_outcome(&self) -> Option<&TurnOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn play_log(&self) -> &PlayLog {
        &self.play_log
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Final result, once the game is over
    pub fn result(&self) -> Option<GameResult> {
        let winner = self.winner?;
        Some(GameResult {
            winner,
            final_score: self.game.score,
            innings_played: self.game.inning - 1,
            turns_played: self.turns_played,
        })
    }

    /// Resolve one turn with dice from `source`
    ///
    /// The source sees the game as it will be once pending half-inning and
    /// inning transitions are applied, but they are only applied after a
    /// valid roll is in hand. If the source fails, the error is returned
    /// and neither the game state nor the phase changes; retrying is up to
    /// the caller.
    pub fn step(&mut self, source: &mut dyn DiceSource) -> Result<StepOutcome> {
        let (pending, view) = self.pending();
        if pending.is_game_over() {
            self.settle_phase();
            return Err(BaseballError::GameAlreadyOver);
        }

        self.print_half_inning_header(&view);

        let roll = match source
            .acquire_dice(&view)
            .and_then(|(a, b)| DiceRoll::new(a, b))
        {
            Ok(roll) => roll,
            Err(e) => {
                self.logger.log(
                    VerbosityLevel::Minimal,
                    Some("invalid_roll"),
                    &format!("Error: {}. Please try again.", e),
                );
                return Err(e.into());
            }
        };

        self.settle_phase();
        let turn = resolve_roll(self.game, roll);

        self.turns_played += 1;
        self.last_outcome = Some(turn);
        self.play_log.record(PlayRecord {
            inning: self.game.inning,
            team: self.game.current_team,
            outcome: turn,
            outs_after: self.game.outs,
        });
        self.log_turn(&turn);

        if self.game.is_half_inning_over() {
            self.phase = GamePhase::HalfInningOver;
            self.logger.log(
                VerbosityLevel::Normal,
                Some("half_inning"),
                &format!("End of {}'s turn", self.game.current_team),
            );
        }

        Ok(StepOutcome {
            turn,
            snapshot: self.game.snapshot(),
            phase: self.phase,
        })
    }

    /// Apply the next phase transition and return the new phase
    ///
    /// See [`GamePhase::advance`] for the transitions. `InningInProgress`
    /// and `GameOver` are left as they are.
    pub fn advance_phase(&mut self) -> GamePhase {
        let from = self.phase;
        self.phase = from.advance(self.game);
        match from {
            GamePhase::HalfInningOver => {
                let team = self.game.current_team;
                self.half_inning_start = (self.game.score.get(team), self.turns_played);
                self.log_snapshot();
            }
            GamePhase::InningOver if self.phase.is_game_over() => {
                self.winner = self.game.score.leader();
            }
            _ => {}
        }
        self.phase
    }

    /// Advance until a team is batting or the game is over
    fn settle_phase(&mut self) {
        while !self.phase.is_settled() {
            self.advance_phase();
        }
    }

    /// Phase and view once pending transitions are applied, without applying them
    fn pending(&self) -> (GamePhase, GameSnapshot) {
        let mut game = self.game.clone();
        let mut phase = self.phase;
        while !phase.is_settled() {
            phase = phase.advance(&mut game);
        }
        (phase, game.snapshot())
    }

    /// Play turns until the current half-inning is over
    ///
    /// Transitions into the next half-inning (or game over) before
    /// returning. An `InvalidRoll` stops the half-inning mid-way; calling
    /// again resumes it, and the summary still counts the plays made
    /// before the interruption.
    pub fn play_half_inning(&mut self, source: &mut dyn DiceSource) -> Result<HalfInningSummary> {
        loop {
            self.step(source)?;
            if self.phase == GamePhase::HalfInningOver {
                break;
            }
        }

        let team = self.game.current_team;
        let (runs_before, turns_before) = self.half_inning_start;
        let summary = HalfInningSummary {
            inning: self.game.inning,
            team,
            runs: self.game.score.get(team) - runs_before,
            turns: self.turns_played - turns_before,
        };

        self.settle_phase();
        Ok(summary)
    }

    /// Run the game to completion
    ///
    /// Resumable: after an `InvalidRoll` error, calling again continues
    /// from the same turn.
    pub fn run_game(&mut self, source: &mut dyn DiceSource) -> Result<GameResult> {
        if !self.started {
            self.started = true;
            self.logger.minimal(&format!("=== Play ball! (dice: {}) ===", source.name()));
        }

        loop {
            if let Some(result) = self.result() {
                self.log_game_over(&result);
                source.on_game_end(&self.game.snapshot(), result.winner);
                return Ok(result);
            }
            self.play_half_inning(source)?;
        }
    }

    fn print_half_inning_header(&mut self, view: &GameSnapshot) {
        let half_inning = (view.inning, view.current_team);
        if self.header_printed_for == Some(half_inning) {
            return;
        }
        self.header_printed_for = Some(half_inning);
        self.logger.log(
            VerbosityLevel::Normal,
            Some("half_inning"),
            &format!("Inning {}, {} batting", view.inning, view.current_team),
        );
    }

    fn log_turn(&self, turn: &TurnOutcome) {
        if !self.logger.enabled(VerbosityLevel::Normal) {
            return;
        }
        let mut message = format!("Dice roll: {} -> {}", turn.roll, turn.event);
        if turn.runs_scored > 0 {
            message.push_str(&format!(" ({} scored)", turn.runs_scored));
        }
        self.logger.log(VerbosityLevel::Normal, Some("turn"), &message);
        self.log_snapshot();
    }

    fn log_snapshot(&self) {
        if !self.logger.enabled(VerbosityLevel::Verbose) {
            return;
        }
        for line in self.game.snapshot().to_string().lines() {
            self.logger.log(VerbosityLevel::Verbose, Some("snapshot"), line);
        }
    }

    fn log_game_over(&self, result: &GameResult) {
        self.logger.minimal("Game Over!");
        self.logger.minimal(&format!("Final Score: {}", result.final_score));
        self.logger.minimal(&format!("{} wins!", result.winner));
    }
}

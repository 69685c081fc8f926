//! Game state, turn resolution and the inning loop

pub mod dice_source;
pub mod game_loop;
pub mod interactive_dice;
pub mod logger;
pub mod phase;
pub mod random_dice;
pub mod resolver;
pub mod scripted_dice;
pub mod snapshot;
pub mod state;

pub use dice_source::DiceSource;
pub use game_loop::{GameLoop, GameResult, HalfInningSummary, StepOutcome, VerbosityLevel};
pub use interactive_dice::InteractiveDice;
pub use logger::{GameLogger, LogEntry, OutputFormat, OutputMode};
pub use phase::{GamePhase, OUTS_PER_HALF_INNING, REGULATION_INNINGS};
pub use random_dice::RandomDice;
pub use resolver::{resolve_roll, resolve_turn, TurnOutcome};
pub use scripted_dice::ScriptedDice;
pub use snapshot::GameSnapshot;
pub use state::GameState;

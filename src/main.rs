//! Dice Baseball - Main Binary
//!
//! Play a game with random, scripted or hand-rolled dice, or simulate many
//! games and print statistics.

use clap::{Parser, Subcommand, ValueEnum};
use dice_baseball::{
    game::{
        GameLogger, GameLoop, GameResult, GameState, InteractiveDice, OutputFormat,
        RandomDice, ScriptedDice, VerbosityLevel,
    },
    simulation::run_simulation,
    BaseballError, Result,
};
use std::io::{BufReader, Stdin, Stdout};

/// Where dice come from
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DiceKind {
    /// Roll with a random number generator
    Random,
    /// Replay the rolls given with --rolls
    Script,
    /// Type in the values of physical dice
    Manual,
}

/// Output format for play-by-play
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "baseball")]
#[command(about = "Dice Baseball - a two-dice baseball game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play {
        /// Dice source
        #[arg(long, value_enum, default_value = "random")]
        dice: DiceKind,

        /// Random seed for deterministic games (random dice only)
        #[arg(long)]
        seed: Option<u64>,

        /// Rolls for scripted dice, e.g. "1,2 6,6 3,4"
        #[arg(long, value_name = "ROLLS", required_if_eq("dice", "script"))]
        rolls: Option<String>,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,
    },

    /// Simulate many games with random dice and print statistics
    Simulate {
        /// Number of games to run
        #[arg(long, short = 'g', default_value_t = 1000)]
        games: usize,

        /// Random seed for reproducible statistics
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            dice,
            seed,
            rolls,
            verbosity,
            format,
        } => run_play(dice, seed, rolls, verbosity.into(), format.into()),
        Commands::Simulate { games, seed } => {
            let stats = run_simulation(games, seed)?;
            println!("=== Dice Baseball - Simulation ===\n");
            println!("{stats}");
            Ok(())
        }
    }
}

fn run_play(
    dice: DiceKind,
    seed: Option<u64>,
    rolls: Option<String>,
    verbosity: VerbosityLevel,
    format: OutputFormat,
) -> Result<()> {
    let mut logger = GameLogger::with_verbosity(verbosity);
    logger.set_output_format(format);

    let mut game = GameState::new();
    let mut game_loop = GameLoop::new(&mut game).with_logger(logger);

    let result = match dice {
        DiceKind::Random => {
            let mut source = match seed {
                Some(seed) => RandomDice::with_seed(seed),
                None => RandomDice::new(),
            };
            game_loop.run_game(&mut source)?
        }
        DiceKind::Script => {
            let rolls = rolls.ok_or_else(|| {
                BaseballError::InvalidInput("--rolls is required with --dice script".to_string())
            })?;
            let mut source = ScriptedDice::parse(&rolls)?;
            game_loop.run_game(&mut source)?
        }
        DiceKind::Manual => {
            let mut source = InteractiveDice::stdio();
            run_with_retry(&mut game_loop, &mut source)?
        }
    };

    report(&game_loop, &result, verbosity, format)
}

/// Keep re-prompting after a bad roll until the game is over or input ends
fn run_with_retry(
    game_loop: &mut GameLoop<'_>,
    source: &mut InteractiveDice<BufReader<Stdin>, Stdout>,
) -> Result<GameResult> {
    loop {
        match game_loop.run_game(&mut *source) {
            Ok(result) => return Ok(result),
            Err(BaseballError::InvalidRoll(_)) if !source.is_exhausted() => continue,
            Err(e) => return Err(e),
        }
    }
}

fn report(
    game_loop: &GameLoop<'_>,
    result: &GameResult,
    verbosity: VerbosityLevel,
    format: OutputFormat,
) -> Result<()> {
    if verbosity == VerbosityLevel::Silent {
        return Ok(());
    }

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", game_loop.play_log().line_score());
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "result": result,
                "line_score": game_loop.play_log().line_score(),
            });
            let line = serde_json::to_string(&summary)
                .map_err(|e| BaseballError::SerializationError(e.to_string()))?;
            println!("{line}");
        }
    }
    Ok(())
}

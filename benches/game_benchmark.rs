//! Performance benchmarks for the dice baseball engine
//!
//! Measures game execution with Criterion.rs in three ways:
//!
//! 1. **Fresh** - Build a new game and play it to the end
//! 2. **Snapshot** - Clone a mid-game state and finish it from there
//! 3. **Batch** - Run a parallel simulation of many games

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dice_baseball::{
    game::{resolve_turn, GameLoop, GameState, RandomDice, VerbosityLevel},
    play_log::PlayLog,
    simulation::{play_game, run_simulation},
};
use std::time::{Duration, Instant};

/// Metrics collected during a single game
#[derive(Debug, Clone)]
struct GameMetrics {
    turns: u32,
    innings: u32,
    duration: Duration,
}

impl GameMetrics {
    fn games_per_sec(&self) -> f64 {
        1.0 / self.duration.as_secs_f64()
    }

    fn turns_per_sec(&self) -> f64 {
        self.turns as f64 / self.duration.as_secs_f64()
    }
}

fn run_game_with_metrics(seed: u64) -> dice_baseball::Result<GameMetrics> {
    let start = Instant::now();
    let result = play_game(RandomDice::with_seed(seed))?;
    Ok(GameMetrics {
        turns: result.turns_played,
        innings: result.innings_played,
        duration: start.elapsed(),
    })
}

/// Benchmark: Fresh mode - new game each iteration
fn bench_game_fresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_execution");

    let seed = 42u64;
    println!("\nWarmup game (seed {}):", seed);
    if let Ok(metrics) = run_game_with_metrics(seed) {
        println!("  Turns: {}", metrics.turns);
        println!("  Innings: {}", metrics.innings);
        println!("  Duration: {:?}", metrics.duration);
        println!("  Games/sec: {:.2}", metrics.games_per_sec());
        println!("  Turns/sec: {:.2}", metrics.turns_per_sec());
    }

    group.bench_with_input(BenchmarkId::new("fresh", seed), &seed, |b, &seed| {
        b.iter(|| {
            play_game(RandomDice::with_seed(black_box(seed)))
                .expect("Game should complete successfully")
        });
    });

    group.finish();
}

/// Benchmark: Snapshot mode - clone a game in progress and play it out
fn bench_game_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_execution");
    let seed = 42u64;

    // Play the first four innings once to get the starting state
    let mut initial_game = GameState::new();
    {
        let mut game_loop =
            GameLoop::new(&mut initial_game).with_verbosity(VerbosityLevel::Silent);
        let mut dice = RandomDice::with_seed(seed);
        for _ in 0..8 {
            game_loop
                .play_half_inning(&mut dice)
                .expect("Half-inning should complete");
        }
    }

    group.bench_function(BenchmarkId::new("snapshot", seed), |b| {
        b.iter(|| {
            let mut game = initial_game.clone();
            let mut game_loop = GameLoop::new(&mut game)
                .with_verbosity(VerbosityLevel::Silent)
                .with_play_log(PlayLog::disabled());
            let mut dice = RandomDice::with_seed(seed + 1);
            game_loop
                .run_game(&mut dice)
                .expect("Game should complete successfully")
        });
    });

    group.finish();
}

/// Benchmark: single turn resolution
fn bench_resolve_turn(c: &mut Criterion) {
    c.bench_function("resolve_turn", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            for (d1, d2) in [(3, 4), (4, 4), (5, 5), (6, 6), (2, 2), (1, 1)] {
                resolve_turn(&mut game, black_box(d1), black_box(d2))
                    .expect("Roll should be valid");
            }
            game
        });
    });
}

/// Benchmark: parallel batch simulation
fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    group.sample_size(10);

    for games in [100usize, 1000] {
        group.bench_with_input(BenchmarkId::new("games", games), &games, |b, &games| {
            b.iter(|| run_simulation(games, Some(42)).expect("Simulation should complete"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_game_fresh,
    bench_game_snapshot,
    bench_resolve_turn,
    bench_simulation
);
criterion_main!(benches);

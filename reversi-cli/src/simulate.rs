//! Simulate command - play random games through the engine
//!
//! Each turn picks uniformly among the legal moves. There is no search; this
//! only drives the engine end to end and reports how games finish.
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_games(), report_results()
//! - Level 3: play_random_game(), compute_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use reversi_core::{BoardConfig, GameResult, GameState, Winner};

use crate::setup::BoardArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    result: GameResult,
    placements: u32,
    passes: u32,
}

/// Aggregated results
#[derive(Clone, Debug)]
struct SimulationResults {
    games: Vec<GameRecord>,
    black_wins: usize,
    white_wins: usize,
    draws: usize,
    avg_placements: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// This function reads like a table of contents:
/// 1. Resolve board size
/// 2. Play the games
/// 3. Report results
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let config = args.board.resolve()?;

    tracing::info!(
        "Simulating {} games on {}x{} board",
        args.games,
        config.width,
        config.height
    );

    let results = play_games(&config, args.games, seed)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_games(config: &BoardConfig, count: usize, seed: Option<u64>) -> Result<SimulationResults> {
    let mut rng = create_rng(seed);
    let mut games = Vec::with_capacity(count);

    for game_num in 0..count {
        let record = play_random_game(config, game_num + 1, &mut rng)?;

        tracing::debug!(
            "Game {}: {} ({} placements, {} passes)",
            record.game_number,
            record.result,
            record.placements,
            record.passes
        );

        games.push(record);
    }

    Ok(compute_statistics(games))
}

fn report_results(results: &SimulationResults, args: &SimulateArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game to completion with random legal moves
fn play_random_game(
    config: &BoardConfig,
    game_number: usize,
    rng: &mut ChaCha8Rng,
) -> Result<GameRecord> {
    let mut state: GameState = config.new_game()?;
    let mut placements = 0;
    let mut passes = 0;

    loop {
        let moves = state.legal_moves(state.current_player());
        let Some(&pos) = moves.choose(rng) else {
            anyhow::bail!("{} has no legal move in an unfinished game", state.current_player());
        };

        let record = state.attempt_move(pos)?;
        placements += 1;
        if record.skipped.is_some() {
            passes += 1;
        }

        if let Some(result) = record.result {
            return Ok(GameRecord {
                game_number,
                result,
                placements,
                passes,
            });
        }
    }
}

fn compute_statistics(games: Vec<GameRecord>) -> SimulationResults {
    let count = |winner: Winner| games.iter().filter(|g| g.result.winner == winner).count();
    let black_wins = count(Winner::Black);
    let white_wins = count(Winner::White);
    let draws = count(Winner::Draw);

    let total_placements: u32 = games.iter().map(|g| g.placements).sum();
    let avg_placements = if games.is_empty() {
        0.0
    } else {
        total_placements as f32 / games.len() as f32
    };

    SimulationResults {
        games,
        black_wins,
        white_wins,
        draws,
        avg_placements,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &SimulationResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        result: GameResult,
        placements: u32,
        passes: u32,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        black_wins: usize,
        white_wins: usize,
        draws: usize,
        avg_placements: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        black_wins: results.black_wins,
        white_wins: results.white_wins,
        draws: results.draws,
        avg_placements: results.avg_placements,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                result: g.result,
                placements: g.placements,
                passes: g.passes,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &SimulationResults) {
    let total = results.games.len();

    println!("\n=== Simulation Results ===");
    println!("Total games: {}", total);
    println!(
        "Black wins:  {} ({:.1}%)",
        results.black_wins,
        percent(results.black_wins, total)
    );
    println!(
        "White wins:  {} ({:.1}%)",
        results.white_wins,
        percent(results.white_wins, total)
    );
    println!(
        "Draws:       {} ({:.1}%)",
        results.draws,
        percent(results.draws, total)
    );
    println!("Avg placements: {:.1}", results.avg_placements);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(game_number: usize, winner: Winner, placements: u32) -> GameRecord {
        GameRecord {
            game_number,
            result: GameResult {
                winner,
                black_count: 0,
                white_count: 0,
            },
            placements,
            passes: 0,
        }
    }

    #[test]
    fn test_compute_statistics_empty() {
        let results = compute_statistics(vec![]);
        assert_eq!(results.black_wins, 0);
        assert_eq!(results.white_wins, 0);
        assert_eq!(results.draws, 0);
        assert_eq!(results.avg_placements, 0.0);
    }

    #[test]
    fn test_compute_statistics() {
        let games = vec![
            record(1, Winner::Black, 50),
            record(2, Winner::White, 60),
            record(3, Winner::Draw, 70),
            record(4, Winner::Black, 60),
        ];

        let results = compute_statistics(games);
        assert_eq!(results.black_wins, 2);
        assert_eq!(results.white_wins, 1);
        assert_eq!(results.draws, 1);
        assert_eq!(results.avg_placements, 60.0);
    }

    #[test]
    fn test_random_games_finish() {
        let config = BoardConfig::default();
        let results = play_games(&config, 10, Some(7)).unwrap();
        assert_eq!(results.games.len(), 10);
        assert_eq!(results.black_wins + results.white_wins + results.draws, 10);
        for game in &results.games {
            assert!(game.placements <= 60);
            assert!(game.result.black_count + game.result.white_count <= 64);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = BoardConfig::new(6, 6);
        let a = play_games(&config, 5, Some(42)).unwrap();
        let b = play_games(&config, 5, Some(42)).unwrap();
        let outcomes = |r: &SimulationResults| {
            r.games
                .iter()
                .map(|g| (g.result, g.placements))
                .collect::<Vec<_>>()
        };
        assert_eq!(outcomes(&a), outcomes(&b));
    }
}

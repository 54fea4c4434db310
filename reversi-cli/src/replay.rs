//! Replay command - apply a scripted move list
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: replay_moves(), report()
//! - Level 4: move list parsing

use anyhow::{Context, Result};
use clap::Args;

use reversi_core::{GameState, MoveRecord, Pos};

use crate::display::{describe_move, render_game};
use crate::setup::BoardArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Moves as x,y separated by spaces or semicolons, e.g. "2,3 2,2"
    #[arg(long)]
    pub moves: String,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Print every move, not just the final position
    #[arg(long)]
    pub verbose: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run replay command
///
/// 1. Parse the move list
/// 2. Apply moves, stopping at the first rejection
/// 3. Report the final position
pub fn run(args: ReplayArgs) -> Result<()> {
    let moves = parse_moves(&args.moves)?;
    let mut game = args.board.new_game()?;

    tracing::info!("Replaying {} moves", moves.len());

    let records = replay_moves(&mut game, &moves)?;

    report(&game, &records, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn replay_moves(game: &mut GameState, moves: &[Pos]) -> Result<Vec<MoveRecord>> {
    let mut records = Vec::with_capacity(moves.len());
    for (i, &pos) in moves.iter().enumerate() {
        let record = game
            .attempt_move(pos)
            .with_context(|| format!("Move {} at {} rejected", i + 1, pos))?;
        records.push(record);
    }
    Ok(records)
}

fn report(game: &GameState, records: &[MoveRecord], args: &ReplayArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        return Ok(());
    }

    if args.verbose {
        for record in records {
            print!("{}", describe_move(record));
        }
    }
    print!("{}", render_game(game));
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn parse_moves(text: &str) -> Result<Vec<Pos>> {
    text.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<Pos>().map_err(anyhow::Error::from))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_core::{EngineError, Winner};

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves(" 2,3; 2,2  4,5;").unwrap();
        assert_eq!(moves, vec![Pos::new(2, 3), Pos::new(2, 2), Pos::new(4, 5)]);
        assert!(parse_moves("").unwrap().is_empty());
        assert!(parse_moves("2,3 x").is_err());
    }

    #[test]
    fn test_replay_to_end() {
        let moves = parse_moves("2,3 2,2 4,5 3,5 2,5 5,3 6,3 2,4 2,1").unwrap();
        let mut game = GameState::new();
        let records = replay_moves(&mut game, &moves).unwrap();
        assert_eq!(records.len(), 9);
        assert_eq!(game.result().map(|r| r.winner), Some(Winner::Black));
    }

    #[test]
    fn test_replay_stops_at_rejected_move() {
        let moves = parse_moves("2,3 0,0 2,2").unwrap();
        let mut game = GameState::new();
        let err = replay_moves(&mut game, &moves).unwrap_err();
        assert!(err.to_string().contains("Move 2 at (0, 0) rejected"));
        assert!(err
            .downcast_ref::<EngineError>()
            .is_some_and(EngineError::is_invalid_move));
        // first move stays applied
        assert_eq!(game.score().black, 4);
    }
}

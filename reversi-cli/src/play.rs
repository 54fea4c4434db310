//! Play command - interactive pass-and-play on the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_session() - read/apply/render loop
//! - Level 3: handle_command()
//! - Level 4: input parsing

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use reversi_core::{EngineError, GameState, Pos};

use crate::display::{describe_move, render_game};
use crate::setup::BoardArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub board: BoardArgs,
}

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Move(Pos),
    New,
    Moves,
    Help,
    Quit,
    Blank,
}

const HELP: &str = "Commands: x,y (place a disc), moves, new, help, quit";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    let mut game = args.board.new_game()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(&mut game, stdin.lock(), stdout.lock())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Read commands until quit or end of input
fn play_session<R: BufRead, W: Write>(game: &mut GameState, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{}", HELP)?;
    write!(out, "{}", render_game(game))?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                prompt(&mut out)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        handle_command(game, command, &mut out)?;
        prompt(&mut out)?;
    }

    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn handle_command<W: Write>(game: &mut GameState, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Move(pos) => match game.attempt_move(pos) {
            Ok(record) => {
                write!(out, "{}", describe_move(&record))?;
                write!(out, "{}", render_game(game))?;
                if game.is_over() {
                    writeln!(out, "Type 'new' to start again.")?;
                }
            }
            Err(e @ EngineError::GameAlreadyOver) => {
                writeln!(out, "{}. Type 'new' to start again.", e)?;
            }
            Err(e) => writeln!(out, "Rejected: {}", e)?,
        },
        Command::New => {
            game.initialize();
            write!(out, "{}", render_game(game))?;
        }
        Command::Moves => {
            let moves: Vec<String> = game
                .legal_moves(game.current_player())
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect();
            if moves.is_empty() {
                writeln!(out, "No legal moves")?;
            } else {
                writeln!(out, "Legal moves: {}", moves.join(" "))?;
            }
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit | Command::Blank => {}
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn parse_command(line: &str) -> Result<Command, EngineError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Ok(Command::Blank),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "new" | "reset" => Ok(Command::New),
        "moves" | "m" => Ok(Command::Moves),
        "help" | "h" | "?" => Ok(Command::Help),
        other => other.parse().map(Command::Move),
    }
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

// ============================================================================
// TESTS
// ============================================================================

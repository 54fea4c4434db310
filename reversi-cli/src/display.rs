//! Text rendering of engine state

use reversi_core::{GameState, MoveRecord, Player};

fn disc(player: Player) -> char {
    match player {
        Player::Black => 'X',
        Player::White => 'O',
    }
}

/// Board followed by a status line
pub fn render_game(game: &GameState) -> String {
    let mut out = game.board().to_string();
    let score = game.score();
    match game.result() {
        Some(result) => out.push_str(&format!("Game over. {}\n", result)),
        None => out.push_str(&format!(
            "Black {} : White {} - {} ({}) to move\n",
            score.black,
            score.white,
            game.current_player(),
            disc(game.current_player())
        )),
    }
    out
}

/// One line per event in a move
pub fn describe_move(record: &MoveRecord) -> String {
    let mut out = format!(
        "{} plays {} and flips {}\n",
        record.player,
        record.pos,
        record.flipped.len()
    );
    if let Some(skipped) = record.skipped {
        out.push_str(&format!("{} has no legal move and passes\n", skipped));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_core::Pos;

    #[test]
    fn test_render_new_game() {
        let text = render_game(&GameState::new());
        assert!(text.contains("Black 2 : White 2 - Black (X) to move"));
        assert!(text.lines().count() >= 9);
    }

    #[test]
    fn test_describe_move() {
        let mut game = GameState::new();
        let record = game.attempt_move(Pos::new(2, 3)).unwrap();
        assert_eq!(describe_move(&record), "Black plays (2, 3) and flips 1\n");
    }
}

//! Per-round state machine
//!
//! The engine itself is stateless; sequencing turns and detecting the end of
//! a round is the caller's job. [`Round`] packages that job so every
//! front-end shares one correct implementation: apply a move for the player
//! whose turn it is, flip the turn, and settle the outcome as soon as the
//! mark just played wins or the board fills.

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Move, Player};

/// Outcome of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// A single round of play: the board, whose turn it is, and the outcome
/// once decided. Discard and build a new one for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: BoardState,
    to_move: Player,
    outcome: Option<Outcome>,
}

impl Round {
    /// Start a round on an empty board with `first` to move
    pub fn new(first: Player) -> Self {
        Round {
            board: BoardState::new(),
            to_move: first,
            outcome: None,
        }
    }

    /// The current board
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The outcome, once the round is decided
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Play `mv` for the player whose turn it is.
    ///
    /// Returns the outcome if this move ends the round.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoundOver`](crate::Error::RoundOver) if the round is
    /// already decided, or the underlying [`BoardState::with_move`] error
    /// for an out-of-range or occupied cell.
    pub fn play(&mut self, mv: Move) -> Result<Option<Outcome>, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::RoundOver);
        }

        let mover = self.to_move;
        self.board = self.board.with_move(mv, mover)?;
        self.to_move = mover.opponent();

        if self.board.has_won(mover) {
            self.outcome = Some(Outcome::Win(mover));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        }

        Ok(self.outcome)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_alternation() {
        let mut round = Round::new(Player::X);
        assert_eq!(round.to_move(), Player::X);

        round.play(Move::new(0, 0)).unwrap();
        assert_eq!(round.to_move(), Player::O);

        round.play(Move::new(1, 1)).unwrap();
        assert_eq!(round.to_move(), Player::X);
    }

    #[test]
    fn test_win_transition() {
        let mut round = Round::new(Player::X);
        round.play(Move::new(0, 0)).unwrap(); // X
        round.play(Move::new(1, 0)).unwrap(); // O
        round.play(Move::new(0, 1)).unwrap(); // X
        round.play(Move::new(1, 1)).unwrap(); // O
        let outcome = round.play(Move::new(0, 2)).unwrap(); // X wins top row

        assert_eq!(outcome, Some(Outcome::Win(Player::X)));
        assert_eq!(round.outcome(), Some(Outcome::Win(Player::X)));
    }

    #[test]
    fn test_draw_transition() {
        let mut round = Round::new(Player::X);
        // X O X
        // X O O
        // O X X
        let plies = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ];
        let mut outcome = None;
        for (row, col) in plies {
            outcome = round.play(Move::new(row, col)).unwrap();
        }

        assert_eq!(outcome, Some(Outcome::Draw));
    }

    #[test]
    fn test_play_after_round_over() {
        let mut round = Round::new(Player::X);
        round.play(Move::new(0, 0)).unwrap(); // X
        round.play(Move::new(1, 0)).unwrap(); // O
        round.play(Move::new(0, 1)).unwrap(); // X
        round.play(Move::new(1, 1)).unwrap(); // O
        round.play(Move::new(0, 2)).unwrap(); // X wins

        let result = round.play(Move::new(2, 2));
        assert!(matches!(result, Err(crate::Error::RoundOver)));
    }

    #[test]
    fn test_o_first_round() {
        let mut round = Round::new(Player::O);
        round.play(Move::new(1, 1)).unwrap();
        assert_eq!(round.board().get(1, 1).unwrap(), crate::Cell::O);
        assert_eq!(round.to_move(), Player::X);
    }
}

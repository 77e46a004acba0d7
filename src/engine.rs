//! Exhaustive minimax search over board states
//!
//! The remaining game tree of a 3x3 board is tiny (at most 9! branches from
//! an empty board, collapsing rapidly as cells fill), so the engine
//! enumerates it fully: no pruning, no depth limit, no heuristics.

use std::collections::HashMap;

use crate::board::{BoardState, Move, Player};

/// Scratch table for positions already solved during one engine call.
///
/// Keyed by the position and whose turn it is in the simulated line; the
/// maximizing player is fixed for the lifetime of the table. Purely an
/// internal optimization: scores are identical with or without it.
type Memo = HashMap<(BoardState, bool), i32>;

/// Perfect-play evaluator and move selector.
///
/// Stateless: every call is a pure function of the board snapshot and the
/// designated player, so independent calls never interfere.
pub struct SearchEngine;

impl SearchEngine {
    /// Minimax value of `state` from `maximizer`'s perspective, in
    /// {-1, 0, 1}, assuming the opponent moves next.
    ///
    /// This is the score of a position `maximizer` has just moved into,
    /// which is how [`select_move`](Self::select_move) scores each candidate.
    pub fn evaluate(state: &BoardState, maximizer: Player) -> i32 {
        let mut memo = Memo::new();
        Self::minimax(state, maximizer, false, &mut memo)
    }

    /// The optimal move for `ai` on `state`.
    ///
    /// Every legal move is scored by full-tree evaluation; the best score
    /// wins, and ties go to the first such move in row-major enumeration
    /// order. The result is fully deterministic for a given input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`](crate::Error::NoLegalMoves) if the
    /// board has no empty cell. The caller is expected to check for a
    /// terminal position before requesting a move; a sentinel move is never
    /// returned in its place.
    pub fn select_move(state: &BoardState, ai: Player) -> Result<Move, crate::Error> {
        let mut memo = Memo::new();
        let mut best: Option<(Move, i32)> = None;

        for mv in state.legal_moves() {
            let next = state
                .with_move(mv, ai)
                .expect("legal move generation should not fail");
            let score = Self::minimax(&next, ai, false, &mut memo);

            // Strictly greater, so equally scored moves keep the earliest.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv).ok_or(crate::Error::NoLegalMoves)
    }

    fn minimax(state: &BoardState, maximizer: Player, maximizing: bool, memo: &mut Memo) -> i32 {
        // Terminal checks in fixed priority order: maximizer's win first,
        // then the opponent's, then a full board.
        if state.has_won(maximizer) {
            return 1;
        }
        if state.has_won(maximizer.opponent()) {
            return -1;
        }
        if state.is_full() {
            return 0;
        }

        let key = (*state, maximizing);
        if let Some(&score) = memo.get(&key) {
            return score;
        }

        let to_place = if maximizing {
            maximizer
        } else {
            maximizer.opponent()
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in state.legal_moves() {
            let next = state
                .with_move(mv, to_place)
                .expect("legal move generation should not fail");
            let score = Self::minimax(&next, maximizer, !maximizing, memo);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        memo.insert(key, best);
        best
    }
}

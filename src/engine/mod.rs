//! Driver-facing entry points.
//!
//! Free functions cover one-shot use: start a game, ask for a move, replay
//! or take back moves, classify the position. [`Engine`] keeps a search
//! state (and its transposition table) alive between moves.
//!
//! Scores returned by [`evaluate`] are from White's perspective: positive
//! favours White regardless of the side to move.

mod controller;

use std::time::Duration;

use crate::board::{Board, BoardError, GameStatus, Move, SearchConfig, SearchState};

pub use controller::Engine;

/// Table size for one-shot searches, whose table is dropped after one move
const ONE_SHOT_TT_MB: usize = 1;

fn one_shot_state() -> SearchState {
    SearchState::new(ONE_SHOT_TT_MB)
}

/// Convert a budget in seconds to a search time limit. Negative or NaN
/// budgets mean "no time at all"; an infinite budget means no limit.
pub(crate) fn budget_from_secs(secs: f64) -> Option<Duration> {
    if secs.is_nan() || secs <= 0.0 {
        Some(Duration::ZERO)
    } else {
        Duration::try_from_secs_f64(secs).ok()
    }
}

/// Standard initial position.
#[must_use]
pub fn new_game() -> Board {
    Board::new()
}

/// Search a copy of `board` for at most `secs` seconds and `max_depth`
/// plies. The caller's board is never touched.
///
/// Returns `None` when the position has no legal moves. Even with a zero
/// budget, depth 1 completes and a legal move is returned.
#[must_use]
pub fn best_move(board: &Board, secs: f64, max_depth: u32) -> Option<Move> {
    let mut scratch = board.clone();
    let mut state = one_shot_state();
    let mut config = SearchConfig::depth(max_depth);
    config.time_limit = budget_from_secs(secs);
    crate::board::search(&mut scratch, &mut state, config).best_move
}

/// Apply a legal move.
///
/// # Errors
/// [`BoardError::IllegalMove`] if `mv` is not legal here; the board is unchanged.
pub fn apply(board: &mut Board, mv: Move) -> Result<(), BoardError> {
    board.apply(mv)
}

/// Take back the last applied move.
///
/// # Errors
/// [`BoardError::UndoStackUnderflow`] if no move has been applied.
pub fn undo(board: &mut Board) -> Result<Move, BoardError> {
    board.undo()
}

/// Whether and why the game has ended.
#[must_use]
pub fn is_game_over(board: &Board) -> GameStatus {
    board.clone().game_status()
}

/// Static evaluation from White's perspective, in centipawns.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    board.clone().evaluate_white()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_conversion() {
        assert_eq!(budget_from_secs(-1.0), Some(Duration::ZERO));
        assert_eq!(budget_from_secs(f64::NAN), Some(Duration::ZERO));
        assert_eq!(budget_from_secs(0.5), Some(Duration::from_millis(500)));
        assert_eq!(budget_from_secs(f64::INFINITY), None);
    }

    #[test]
    fn new_game_is_ongoing_and_balanced() {
        let board = new_game();
        assert_eq!(is_game_over(&board), GameStatus::Ongoing);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn best_move_leaves_board_untouched() {
        let board = new_game();
        let before = board.clone();
        let mv = best_move(&board, 5.0, 2).expect("opening has moves");
        assert_eq!(board, before);
        let mut legal = board.clone();
        assert!(legal.generate_moves().contains(mv));
    }

    #[test]
    fn one_shot_search_uses_small_table() {
        let one_shot = one_shot_state().tt.capacity();
        let persistent = SearchState::new(crate::board::DEFAULT_TT_MB).tt.capacity();
        assert!(one_shot < persistent);
    }

    #[test]
    fn apply_and_undo_through_free_functions() {
        let mut board = new_game();
        let mv = board.parse_move("g1f3").unwrap();
        apply(&mut board, mv).unwrap();
        assert_eq!(undo(&mut board), Ok(mv));
        assert_eq!(undo(&mut board), Err(BoardError::UndoStackUnderflow));
        assert_eq!(board, new_game());
    }
}

//! Engine controller implementation.

use std::time::Duration;

use crate::board::{
    search, Board, BoardError, GameStatus, Move, SearchConfig, SearchError, SearchInfoCallback,
    SearchParams, SearchResult, SearchState,
};

/// Engine controller managing search and game state
pub struct Engine {
    /// Current board position
    board: Board,
    /// Search state (transposition table, stats) kept across moves
    search_state: SearchState,
    /// Optional callback for per-iteration search info
    info_callback: Option<SearchInfoCallback>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Engine {
            board: Board::new(),
            search_state: SearchState::with_params(params),
            info_callback: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the current position. The transposition table is kept;
    /// entries are keyed by fingerprint so stale ones are harmless.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Reset to the initial position and forget cached search results.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.search_state.clear_tt();
    }

    pub fn set_info_callback(&mut self, callback: Option<SearchInfoCallback>) {
        self.info_callback = callback;
    }

    #[must_use]
    pub fn search_state(&self) -> &SearchState {
        &self.search_state
    }

    pub fn search_state_mut(&mut self) -> &mut SearchState {
        &mut self.search_state
    }

    /// Run a search on the current position without changing it.
    pub fn search(&mut self, budget: Option<Duration>, max_depth: u32) -> SearchResult {
        let mut config = SearchConfig::depth(max_depth);
        config.time_limit = budget;
        config.info_callback = self.info_callback.clone();
        search(&mut self.board, &mut self.search_state, config)
    }

    /// Pick a move for the side to move.
    ///
    /// # Errors
    /// [`SearchError::NoLegalMoves`] if the position is terminal, and
    /// [`SearchError::NoMoveAvailable`] if the search was stopped before
    /// depth 1 finished.
    pub fn choose_move(
        &mut self,
        budget: Option<Duration>,
        max_depth: u32,
    ) -> Result<Move, SearchError> {
        if self.board.generate_moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        self.search(budget, max_depth)
            .best_move
            .ok_or(SearchError::NoMoveAvailable)
    }

    /// Apply a move to the engine's position.
    ///
    /// # Errors
    /// [`BoardError::IllegalMove`] if the move is not legal here.
    pub fn apply(&mut self, mv: Move) -> Result<(), BoardError> {
        self.board.apply(mv)
    }

    /// # Errors
    /// [`BoardError::UndoStackUnderflow`] if there is nothing to take back.
    pub fn undo(&mut self) -> Result<Move, BoardError> {
        self.board.undo()
    }

    pub fn status(&mut self) -> GameStatus {
        self.board
            .game_status_with_repetition(self.search_state.params.repetition_count)
    }

    /// Static evaluation of the current position from White's perspective
    pub fn evaluate(&mut self) -> i32 {
        self.board.evaluate_white()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

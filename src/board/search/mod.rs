//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening under a wall-clock budget
//! - Negamax alpha-beta (fail-soft)
//! - Transposition table cutoffs with bound narrowing
//! - Move ordering (MVV-LVA, promotions, checks)
//! - Path draws: fifty-move rule, repetition, insufficient material

mod clock;
mod constants;
mod iterative;
pub(crate) mod move_order;
mod negamax;
mod params;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::tt::TranspositionTable;

use super::{Board, Move};
pub use clock::SearchClock;
pub use constants::{DEFAULT_MAX_DEPTH, DEFAULT_TT_MB, INFINITY};
pub use params::SearchParams;

/// Outcome of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move of the deepest fully completed iteration
    pub best_move: Option<Move>,
    /// Score of `best_move` from the side to move's perspective
    pub score: i32,
    pub nodes: u64,
    /// Deepest iteration that completed (0 if none did, or the move was forced)
    pub depth: u32,
    /// The search stopped because time ran out or a stop was requested
    pub time_expired: bool,
}

/// Why a search could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The root position has no legal moves; it is checkmate or stalemate.
    #[error("no legal moves in the root position")]
    NoLegalMoves,
    /// Search was stopped before depth 1 completed.
    #[error("search stopped before any move was found")]
    NoMoveAvailable,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub total_nodes: u64,
    pub tt_hits: u64,
    pub searches: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        self.nodes = 0;
        self.tt_hits = 0;
    }
}

/// Search state persisted across searches
#[derive(Debug, Clone)]
pub struct SearchState {
    pub stats: SearchStats,
    pub tt: TranspositionTable,
    pub params: SearchParams,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        Self::with_params(SearchParams {
            tt_mb,
            ..SearchParams::default()
        })
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        SearchState {
            stats: SearchStats::default(),
            tt: TranspositionTable::new(params.tt_mb).with_policy(params.tt_replacement),
            params,
        }
    }

    pub fn new_search(&mut self) {
        if self.params.clear_tt_each_search {
            self.tt.clear();
        }
        self.tt.new_generation();
        self.stats.reset_search();
        self.stats.searches += 1;
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Replace the parameters. The table is reallocated only if its size
    /// changed.
    pub fn set_params(&mut self, params: SearchParams) {
        if params.tt_mb != self.params.tt_mb {
            self.tt = TranspositionTable::new(params.tt_mb);
        }
        self.tt.set_policy(params.tt_replacement);
        self.params = params;
    }

    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tt.hashfull_per_mille()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::with_params(SearchParams::default())
    }
}

/// Configuration for a search operation.
#[derive(Clone, Default)]
pub struct SearchConfig {
    /// Maximum depth to search (None = `DEFAULT_MAX_DEPTH`)
    pub max_depth: Option<u32>,
    /// Wall-clock budget (None = unlimited)
    pub time_limit: Option<Duration>,
    /// Shared flag that aborts the search when raised
    pub stop: Option<Arc<AtomicBool>>,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Create a time-limited search config
    #[must_use]
    pub fn time(time_limit: Duration) -> Self {
        SearchConfig {
            time_limit: Some(time_limit),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_time(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    #[must_use]
    pub fn with_stop(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub score: i32,
    pub mate_in: Option<i32>,
    pub best_move: Option<Move>,
    /// Nodes visited by this iteration alone
    pub iteration_nodes: u64,
    /// Nodes visited by the whole search so far
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u64,
    pub tt_hits: u64,
    pub hashfull: u32,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Unified search function that accepts a configuration.
///
/// The board is restored to its original state before returning.
///
/// # Example
/// ```
/// use chess_search::board::{search, Board, SearchConfig, SearchState};
///
/// let mut board = Board::new();
/// let mut state = SearchState::new(1);
/// let result = search(&mut board, &mut state, SearchConfig::depth(2));
/// assert!(result.best_move.is_some());
/// ```
#[allow(clippy::needless_pass_by_value)] // Config is intentionally consumed
pub fn search(board: &mut Board, state: &mut SearchState, config: SearchConfig) -> SearchResult {
    let max_depth = config.max_depth.unwrap_or(DEFAULT_MAX_DEPTH).max(1);
    let clock = match config.stop {
        Some(stop) => SearchClock::with_stop(config.time_limit, stop),
        None => SearchClock::new(config.time_limit),
    };
    iterative::run_search(board, state, &clock, max_depth, config.info_callback)
}

/// Search with an externally owned clock, so another thread can move the
/// deadline or raise the stop flag mid-search.
pub fn search_with_clock(
    board: &mut Board,
    state: &mut SearchState,
    clock: &SearchClock,
    max_depth: u32,
    info_callback: Option<SearchInfoCallback>,
) -> SearchResult {
    iterative::run_search(board, state, clock, max_depth.max(1), info_callback)
}

/// Find best move with fixed depth limit
pub fn find_best_move(board: &mut Board, state: &mut SearchState, max_depth: u32) -> Option<Move> {
    search(board, state, SearchConfig::depth(max_depth)).best_move
}

/// Find best move within a time budget and depth limit
pub fn find_best_move_with_time(
    board: &mut Board,
    state: &mut SearchState,
    budget: Duration,
    max_depth: u32,
) -> Option<Move> {
    search(
        board,
        state,
        SearchConfig::depth(max_depth).with_time(budget),
    )
    .best_move
}

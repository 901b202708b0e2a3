//! Negamax alpha-beta over the legal move tree.

use crate::board::{Board, Move, MATE_SCORE, MATE_THRESHOLD};
use crate::tt::BoundType;

use super::constants::INFINITY;
use super::move_order::order_moves;
use super::{SearchClock, SearchInfoCallback, SearchState};

/// Search context for a single search
pub(crate) struct SearchContext<'a> {
    pub board: &'a mut Board,
    pub state: &'a mut SearchState,
    pub clock: &'a SearchClock,
    pub nodes: u64,
    pub tt_hits: u64,
    /// Depth of the iteration in progress
    pub iteration_depth: u32,
    /// Set once the clock or stop flag ends the iteration early
    pub aborted: bool,
    /// A repetition or fifty-move draw was scored inside the current subtree
    pub history_draw: bool,
    pub info_callback: Option<SearchInfoCallback>,
}

/// Mate scores are stored relative to the node, so the same mate found via
/// a different path length reads back correctly.
#[inline]
pub(crate) fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

#[inline]
pub(crate) fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        board: &'a mut Board,
        state: &'a mut SearchState,
        clock: &'a SearchClock,
        info_callback: Option<SearchInfoCallback>,
    ) -> Self {
        SearchContext {
            board,
            state,
            clock,
            nodes: 0,
            tt_hits: 0,
            iteration_depth: 0,
            aborted: false,
            history_draw: false,
            info_callback,
        }
    }

    /// Depth 1 ignores the deadline so a move is always available; only the
    /// external stop flag can interrupt it.
    #[inline]
    pub(crate) fn should_stop(&self) -> bool {
        self.clock.is_stopped() || (self.iteration_depth >= 2 && self.clock.is_expired())
    }

    /// Draws that depend on the path to the node rather than the placement
    fn is_history_draw(&self) -> bool {
        self.board.is_draw_by_fifty_move_rule()
            || self
                .board
                .is_draw_by_repetition(self.state.params.repetition_count)
    }

    /// Whether the fifty-move rule can fire inside a subtree of `depth` plies.
    /// Results from such a node depend on the halfmove clock, which the
    /// fingerprint does not cover.
    #[inline]
    fn within_fifty_move_horizon(&self, depth: u32) -> bool {
        self.board.halfmove_clock() + depth >= 100
    }

    /// Fail-soft negamax. Returns 0 with `aborted` set if time ran out; the
    /// caller must then discard the value.
    pub(crate) fn negamax(&mut self, depth: u32, mut alpha: i32, mut beta: i32, ply: usize) -> i32 {
        if self.aborted || self.should_stop() {
            self.aborted = true;
            return 0;
        }
        self.nodes += 1;

        // Mate and stalemate outrank every draw rule
        let moves = self.board.generate_moves();
        if moves.is_empty() {
            return if self.board.is_in_check() {
                -(MATE_SCORE - ply as i32)
            } else {
                0
            };
        }
        if ply > 0 {
            if self.is_history_draw() {
                self.history_draw = true;
                return 0;
            }
            if self.board.is_insufficient_material() {
                return 0;
            }
        }
        if depth == 0 {
            return self.board.evaluate_with_move_count(moves.len());
        }

        let hash = self.board.hash();
        let cacheable = !self.within_fifty_move_horizon(depth);
        if ply > 0 && cacheable {
            if let Some(entry) = self.state.tt.probe(hash, depth) {
                self.tt_hits += 1;
                let tt_score = score_from_tt(entry.score, ply);
                match entry.bound_type {
                    BoundType::Exact => return tt_score,
                    BoundType::LowerBound => alpha = alpha.max(tt_score),
                    BoundType::UpperBound => beta = beta.min(tt_score),
                }
                if alpha >= beta {
                    return tt_score;
                }
            }
        }

        let outer_history_draw = std::mem::replace(&mut self.history_draw, false);
        let ordered = order_moves(self.board, &moves, self.state.params.check_bonus);
        let window_alpha = alpha;
        let mut best = -INFINITY;

        for scored in ordered.iter() {
            self.board.make_move(scored.mv);
            let score = -self.negamax(depth - 1, -beta, -alpha, ply + 1);
            self.board.unmake_move();

            if self.aborted {
                return 0;
            }
            if score > best {
                best = score;
                if best > alpha {
                    alpha = best;
                }
            }
            if alpha >= beta {
                break;
            }
        }

        let subtree_history_draw = self.history_draw;
        self.history_draw = outer_history_draw || subtree_history_draw;

        if cacheable && !subtree_history_draw {
            let bound = if best <= window_alpha {
                BoundType::UpperBound
            } else if best >= beta {
                BoundType::LowerBound
            } else {
                BoundType::Exact
            };
            self.state
                .tt
                .store(hash, depth, score_to_tt(best, ply), bound);
        }

        best
    }

    /// Search every root move with a full window and return the first move
    /// reaching the best score. `None` if the iteration was aborted.
    pub(crate) fn search_root(&mut self, depth: u32) -> Option<(Move, i32)> {
        if self.should_stop() {
            self.aborted = true;
            return None;
        }
        self.nodes += 1;

        let moves = self.board.generate_moves();
        let ordered = order_moves(self.board, &moves, self.state.params.check_bonus);

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;
        self.history_draw = false;

        for scored in ordered.iter() {
            self.board.make_move(scored.mv);
            let score = -self.negamax(depth - 1, -beta, -alpha, 1);
            self.board.unmake_move();

            if self.aborted {
                return None;
            }
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((scored.mv, score));
                alpha = alpha.max(score);
            }
        }

        let cacheable = !self.history_draw && !self.within_fifty_move_horizon(depth);
        if let Some((_, score)) = best.filter(|_| cacheable) {
            self.state
                .tt
                .store(self.board.hash(), depth, score_to_tt(score, 0), BoundType::Exact);
        }
        best
    }
}

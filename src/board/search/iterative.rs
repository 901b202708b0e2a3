use log::{debug, info, trace};

use crate::board::{Board, MATE_SCORE, MATE_THRESHOLD};

use super::negamax::SearchContext;
use super::{SearchClock, SearchInfoCallback, SearchIterationInfo, SearchResult, SearchState};

/// Moves until mate implied by a mate score, negative when being mated
fn mate_in(score: i32) -> Option<i32> {
    if score.abs() < MATE_THRESHOLD {
        None
    } else if score > 0 {
        Some((MATE_SCORE - score + 1) / 2)
    } else {
        Some(-(MATE_SCORE + score + 1) / 2)
    }
}

impl SearchContext<'_> {
    /// Deepen one ply at a time until `max_depth`, a forced mate, or the
    /// clock runs out. Only fully completed iterations update the result.
    pub(crate) fn iterative_deepening(&mut self, max_depth: u32) -> SearchResult {
        let mut result = SearchResult {
            best_move: None,
            score: 0,
            nodes: 0,
            depth: 0,
            time_expired: false,
        };

        for depth in 1..=max_depth {
            self.iteration_depth = depth;
            let iter_start_nodes = self.nodes;

            let Some((best_move, score)) = self.search_root(depth) else {
                trace!(
                    "search aborted during depth {depth} after {} nodes",
                    self.nodes
                );
                result.time_expired = true;
                break;
            };

            result.best_move = Some(best_move);
            result.score = score;
            result.depth = depth;
            self.report_iteration(&result, self.nodes - iter_start_nodes);

            if score.abs() >= MATE_THRESHOLD {
                break;
            }
        }

        result.nodes = self.nodes;
        result
    }

    fn report_iteration(&self, result: &SearchResult, iteration_nodes: u64) {
        let elapsed = self.clock.elapsed().as_millis() as u64;
        let nps = if elapsed > 0 {
            self.nodes * 1000 / elapsed
        } else {
            0
        };
        let info = SearchIterationInfo {
            depth: result.depth,
            score: result.score,
            mate_in: mate_in(result.score),
            best_move: result.best_move,
            iteration_nodes,
            nodes: self.nodes,
            nps,
            time_ms: elapsed,
            tt_hits: self.tt_hits,
            hashfull: self.state.hashfull_per_mille(),
        };

        debug!(
            "depth {} score {} nodes {} nps {} tthits {} hashfull {} time {}ms best {}",
            info.depth,
            info.score,
            info.nodes,
            info.nps,
            info.tt_hits,
            info.hashfull,
            info.time_ms,
            info.best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
        );

        if let Some(cb) = &self.info_callback {
            cb(&info);
        }
    }
}

/// Run the main search algorithm
pub(crate) fn run_search(
    board: &mut Board,
    state: &mut SearchState,
    clock: &SearchClock,
    max_depth: u32,
    info_callback: Option<SearchInfoCallback>,
) -> SearchResult {
    state.new_search();

    let mut ctx = SearchContext::new(board, state, clock, info_callback);

    let moves = ctx.board.generate_moves();
    let result = if moves.is_empty() {
        SearchResult {
            best_move: None,
            score: ctx.board.evaluate_with_move_count(0),
            nodes: 0,
            depth: 0,
            time_expired: false,
        }
    } else if moves.len() == 1 {
        // Forced move, nothing to search
        SearchResult {
            best_move: moves.first(),
            score: ctx.board.evaluate_with_move_count(1),
            nodes: 0,
            depth: 0,
            time_expired: false,
        }
    } else {
        ctx.iterative_deepening(max_depth)
    };

    ctx.state.stats.nodes = ctx.nodes;
    ctx.state.stats.tt_hits = ctx.tt_hits;
    ctx.state.stats.total_nodes = ctx.state.stats.total_nodes.saturating_add(ctx.nodes);

    info!(
        "search finished: best {} score {} depth {} nodes {} time {}ms{}",
        result
            .best_move
            .map_or_else(|| "none".to_string(), |m| m.to_string()),
        result.score,
        result.depth,
        result.nodes,
        clock.elapsed().as_millis(),
        if result.time_expired { " (stopped)" } else { "" },
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mate_distance_from_score() {
        assert_eq!(mate_in(MATE_SCORE - 1), Some(1));
        assert_eq!(mate_in(MATE_SCORE - 3), Some(2));
        assert_eq!(mate_in(-(MATE_SCORE - 2)), Some(-1));
        assert_eq!(mate_in(35), None);
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tt::ReplacementPolicy;

use super::constants::{DEFAULT_CHECK_BONUS, DEFAULT_REPETITION_COUNT, DEFAULT_TT_MB};

/// Tunable knobs for a search. Every field has a sensible default.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Ordering bonus for a move that gives check
    pub check_bonus: i32,
    /// Occurrences of a position that count as a draw inside the tree
    pub repetition_count: u32,
    pub tt_replacement: ReplacementPolicy,
    pub tt_mb: usize,
    /// Start every search with an empty transposition table
    pub clear_tt_each_search: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            check_bonus: DEFAULT_CHECK_BONUS,
            repetition_count: DEFAULT_REPETITION_COUNT,
            tt_replacement: ReplacementPolicy::DepthPreferred,
            tt_mb: DEFAULT_TT_MB,
            clear_tt_each_search: false,
        }
    }
}

//! Search constants.

/// Window bound wider than any reachable score
pub const INFINITY: i32 = 32_000;

/// Depth used when a search is given no depth limit
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;

/// Ordering bonus for checking moves
pub const DEFAULT_CHECK_BONUS: i32 = 50;

pub const DEFAULT_REPETITION_COUNT: u32 = 3;

//! Transposition table for caching search results.
//!
//! A fixed-capacity, position-keyed cache indexed by the low bits of the
//! Zobrist fingerprint. Each slot holds at most one entry; which entry
//! survives a collision is decided by the configured [`ReplacementPolicy`].
//! Lookups verify the full 64-bit key, so a slot never answers for a
//! position it was not built for.

use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// How a store decides whether to overwrite an occupied slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReplacementPolicy {
    /// Newest result always wins.
    AlwaysReplace,
    /// Keep deeper results from the current search; replace anything from
    /// an older generation.
    #[default]
    DepthPreferred,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u32,
    pub score: i32,
    pub bound_type: BoundType,
    pub generation: u16,
}

impl TTEntry {
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }
}

/// Single-threaded transposition table with power-of-two capacity.
#[derive(Clone, Debug)]
pub struct TranspositionTable {
    slots: Vec<Option<TTEntry>>,
    mask: usize,
    policy: ReplacementPolicy,
    generation: u16,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = mem::size_of::<Option<TTEntry>>();
        let num_slots = (size_mb * 1024 * 1024) / slot_size;
        Self::with_entries(num_slots)
    }

    /// Create a table holding `entries` slots, rounded down to a power of
    /// two (minimum 1024).
    #[must_use]
    pub fn with_entries(entries: usize) -> Self {
        let mut num_slots = if entries.is_power_of_two() {
            entries
        } else {
            entries.next_power_of_two() / 2
        };
        if num_slots < 1024 {
            num_slots = 1024;
        }

        TranspositionTable {
            slots: vec![None; num_slots],
            mask: num_slots - 1,
            policy: ReplacementPolicy::default(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ReplacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_policy(&mut self, policy: ReplacementPolicy) {
        self.policy = policy;
    }

    #[must_use]
    pub fn policy(&self) -> ReplacementPolicy {
        self.policy
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn generation(&self) -> u16 {
        self.generation
    }

    /// Mark the start of a new top-level search. Entries from earlier
    /// generations become preferred replacement victims.
    pub fn new_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Entry for `hash` searched to exactly `depth`, if one is stored.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u32) -> Option<TTEntry> {
        self.lookup(hash).filter(|entry| entry.depth == depth)
    }

    /// Entry for `hash` regardless of its depth
    #[must_use]
    pub fn lookup(&self, hash: u64) -> Option<TTEntry> {
        self.slots[self.index(hash)].filter(|entry| entry.key == hash)
    }

    /// Store a search result, subject to the replacement policy.
    pub fn store(&mut self, hash: u64, depth: u32, score: i32, bound_type: BoundType) {
        let idx = self.index(hash);
        let replace = match (&self.slots[idx], self.policy) {
            (None, _) | (_, ReplacementPolicy::AlwaysReplace) => true,
            (Some(existing), ReplacementPolicy::DepthPreferred) => {
                existing.key == hash
                    || existing.generation != self.generation
                    || depth >= existing.depth
            }
        };

        if replace {
            self.slots[idx] = Some(TTEntry {
                key: hash,
                depth,
                score,
                bound_type,
                generation: self.generation,
            });
        }
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample the first 1000 slots
        let sample_size = self.slots.len().min(1000);
        let occupied = self
            .slots
            .iter()
            .take(sample_size)
            .filter(|slot| slot.is_some())
            .count();
        ((occupied as u64 * 1000) / sample_size as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.generation = 0;
    }
}

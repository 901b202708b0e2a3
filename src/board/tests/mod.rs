//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generator node counts
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Make/unmake and apply/undo correctness
//! - `edge_cases.rs` - Castling, en passant, pins and other special positions
//! - `eval.rs` - Evaluator symmetry and terms
//! - `search.rs` - Search correctness against brute-force minimax
//! - `proptest.rs` - Property-based tests

mod draw;
mod edge_cases;
mod proptest;

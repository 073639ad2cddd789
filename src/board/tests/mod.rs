//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-count verification against reference positions
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod make_unmake;

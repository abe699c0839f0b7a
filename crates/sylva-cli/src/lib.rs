//! SYLVA CLI library.
//!
//! Text rendering for the CLI commands. Kept out of `main.rs` so it can be
//! unit tested.

pub mod output;

//! Field/position multi-key sort utility
//!
//! Sorts either integers or separator-delimited text records read from files
//! or standard input. Ordering is driven by `+m.n` / `-m.n` sort passes:
//! each pass names a field and a character position within it, with its own
//! ascending/descending direction, and later passes break ties left to
//! right.

#![warn(clippy::all)]

pub mod compare;
pub mod config;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use config::{Config, Direction, Mode, SortPass};
pub use error::{SortError, SortResult};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Run one sort: ingest every input, sort per the configured mode, emit to
/// the configured destination.
pub fn sort(config: &Config) -> SortResult<()> {
    engine::Engine::new(config).run()
}

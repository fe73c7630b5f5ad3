//! Error types for the sort routines and the demo driver.

use thiserror::Error;

/// Failure of the bounded-length sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The caller asked for more elements than the run actually holds.
    #[error("element count {count} runs past the end of a {capacity}-element run")]
    CountOutOfBounds { count: usize, capacity: usize },
}

/// Failure while running the demo against a console.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sort(#[from] SortError),
}

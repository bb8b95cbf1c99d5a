//! Error types for the visualizer
//!
//! The heap engine and playback controller are infallible: an empty heap
//! yields `None` and out-of-range navigation is a no-op. Errors only arise
//! at the boundary, when input is rejected or an operation does not fit the
//! current state. None of them are fatal; the UI shows them in the status bar.

use thiserror::Error;

/// Rejected weight input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightError {
    /// Empty or non-numeric input
    #[error("Please enter a valid weight")]
    Empty,

    /// Below the minimum weight
    #[error("Weight must be positive")]
    NotPositive,

    /// Above the maximum weight
    #[error("Weight seems unrealistic (max 300kg)")]
    TooHigh,
}

/// Errors surfaced by the transport operations
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error(transparent)]
    InvalidWeight(#[from] WeightError),

    /// A sort run is loaded and not finished
    #[error("A heap sort is in progress")]
    SortInProgress,

    /// An insert animation has not finished yet
    #[error("An insert is still animating")]
    InsertInProgress,

    /// Nothing to sort
    #[error("The heap is empty")]
    EmptyHeap,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

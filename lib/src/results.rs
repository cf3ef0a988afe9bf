use thiserror::Error;

use crate::orientation::Orientation;

/// Indicates that a puzzle could not be built or a grid could not be parsed.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum WordSearchError {
    /// Indicates that no words were given to place.
    #[error("the word list is empty")]
    EmptyWordList,
    /// Indicates that a word was empty or held a non-lowercase character.
    #[error("word {0:?} must be a non-empty lowercase string")]
    InvalidWord(String),
    /// Indicates that a configured dimension was zero.
    #[error("grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
    /// Indicates that the configured orientation list was empty.
    #[error("at least one orientation is required")]
    NoOrientations,
    /// Indicates that the configured attempt count was zero.
    #[error("at least one attempt per grid size is required")]
    NoAttempts,
    /// Indicates that the grid grew to its configured limit and some word
    /// still could not be placed.
    #[error("no puzzle found after growing the grid to {height}x{width}")]
    GrowthExhausted { height: usize, width: usize },
    /// Indicates that parsed grid rows were missing, empty, or uneven.
    #[error("grid rows must be non-empty and of equal length")]
    RaggedGrid,
}

/// A word located in a grid: where it starts and which way it runs.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoundWord {
    pub word: String,
    /// Column of the word's first letter.
    pub x: usize,
    /// Row of the word's first letter.
    pub y: usize,
    pub orientation: Orientation,
}

/// The outcome of searching a grid for a list of words.
///
/// Every input word appears in exactly one of the two lists, and both lists
/// preserve the input order.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    pub found: Vec<FoundWord>,
    pub not_found: Vec<String>,
}

//! Centralized error types for the game.
//!
//! Graph lookups themselves never fail; errors only surface while loading a level
//! or the runtime configuration.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

/// Error type for maze grid parsing.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Grid is empty")]
    Empty,
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Invalid rotation '{symbol}' at ({col}, {row})")]
    InvalidRotation { symbol: char, col: usize, row: usize },
    #[error("Rotation grid is {found_cols}x{found_rows}, tile grid is {cols}x{rows}")]
    DimensionMismatch {
        cols: usize,
        rows: usize,
        found_cols: usize,
        found_rows: usize,
    },
}

/// Errors related to maze layout and graph construction.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MapError {
    #[error("No node at tile ({col}, {row})")]
    MissingNode { col: f32, row: f32 },

    #[error("Maze has no nodes")]
    NoNodes,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

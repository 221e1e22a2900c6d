//! Error types for the crate

use thiserror::Error;

/// Main error type for grid construction, training and export
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("layout is not rectangular: row {row} has {found} cells, expected {expected}")]
    NonRectangularLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout contains no cells")]
    EmptyLayout,

    #[error("layout defines more than one start cell: {first:?} and {second:?}")]
    MultipleStarts {
        first: (usize, usize),
        second: (usize, usize),
    },

    #[error("layout has no eligible start cell")]
    NoEligibleStart,

    #[error("invalid decay schedule: {0}")]
    InvalidDecay(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

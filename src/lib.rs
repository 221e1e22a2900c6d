//! Tabular temporal-difference learning on discrete grid worlds
//!
//! ```
//! use gridworld_td::{
//!     algo::{TdAgent, TdConfig},
//!     exploration::EpsilonGreedy,
//!     grid::{Grid, SymbolTable},
//! };
//!
//! let mut grid = Grid::parse("S+++T", &SymbolTable::standard())?;
//! let mut agent = TdAgent::new(TdConfig::q_learning(), EpsilonGreedy::new(0.1));
//! agent.train(&mut grid, 100)?;
//!
//! let path = grid.greedy_path(grid.start().unwrap(), 10);
//! assert!(path.terminated);
//! # Ok::<(), gridworld_td::Error>(())
//! ```

/// Temporal-difference learning algorithms
pub mod algo;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

mod error;

/// Exploration policies
pub mod exploration;

/// CSV export of learned value tables
pub mod export;

/// Grid world environment
pub mod grid;

mod util;

pub use error::{Error, Result};

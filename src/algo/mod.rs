/// Temporal-difference control: Q-learning and SARSA
pub mod td;

pub use td::{q_learning, sarsa, Algorithm, EpisodeSummary, TdAgent, TdConfig};

use crate::grid::{Action, ActionValues};

mod decaying;
mod epsilon_greedy;

pub use decaying::DecayingEpsilonGreedy;
pub use epsilon_greedy::EpsilonGreedy;

/// Exploration policy result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Explore,
    Exploit,
}

/// Chooses an action from a cell's value estimates
pub trait Policy {
    /// Select an action given the current cell's estimates
    ///
    /// `is_new_episode` is true only for the first selection of an episode,
    /// which lets stateful policies advance their schedules.
    fn select_action(&mut self, values: &ActionValues, is_new_episode: bool) -> Action;

    /// The current exploration rate, if the policy has one
    fn exploration_rate(&self) -> Option<f32> {
        None
    }
}

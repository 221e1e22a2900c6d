use log::{debug, info, trace};
use strum::{Display, EnumString};

use crate::{
    assert_interval,
    exploration::Policy,
    grid::{Action, ActionValues, CellId, Grid},
    Result,
};

/// Which estimate of the successor's value the update bootstraps from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    /// Off-policy: the largest estimate at the successor
    #[strum(to_string = "Q-learning", serialize = "q_learning", serialize = "q")]
    QLearning,
    /// On-policy: the estimate of the action the policy picks at the successor
    #[strum(to_string = "SARSA")]
    Sarsa,
}

impl Algorithm {
    /// Compute the bootstrap target from the successor's estimates
    pub fn bootstrap<P: Policy + ?Sized>(self, next: &ActionValues, policy: &mut P) -> f32 {
        match self {
            Algorithm::QLearning => next.max(),
            Algorithm::Sarsa => next[policy.select_action(next, false)],
        }
    }
}

/// Configuration for the [`TdAgent`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdConfig {
    /// Learning rate
    ///
    /// **Default**: `1.0`
    pub alpha: f32,
    /// Discount factor
    ///
    /// **Default**: `1.0`
    pub gamma: f32,
    /// **Default**: [`Algorithm::QLearning`]
    pub algorithm: Algorithm,
}

impl TdConfig {
    /// Q-learning with alpha = 1, which is safe in a deterministic grid
    pub fn q_learning() -> Self {
        Self {
            alpha: 1.0,
            gamma: 1.0,
            algorithm: Algorithm::QLearning,
        }
    }

    /// SARSA with alpha = 0.1, since it follows the behavior policy's noise
    pub fn sarsa() -> Self {
        Self {
            alpha: 0.1,
            gamma: 1.0,
            algorithm: Algorithm::Sarsa,
        }
    }
}

impl Default for TdConfig {
    fn default() -> Self {
        Self::q_learning()
    }
}

/// Outcome of a single episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    pub start: CellId,
    /// Number of actions taken, blocked moves included
    pub steps: usize,
    /// Undiscounted sum of the observed rewards
    pub reward: f32,
}

/// A tabular temporal-difference learner that stores its estimates in the grid's cells
///
/// One control loop serves both [Q-learning](Algorithm::QLearning) and
/// [SARSA](Algorithm::Sarsa); they only differ in the bootstrap target.
pub struct TdAgent<P: Policy> {
    policy: P,
    alpha: f32,
    gamma: f32,
    algorithm: Algorithm,
    episode: u32,
}

impl<P: Policy> TdAgent<P> {
    /// **Panics** if `alpha` or `gamma` is not in the interval `[0,1]`
    pub fn new(config: TdConfig, policy: P) -> Self {
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.gamma, 0.0, 1.0);
        Self {
            policy,
            alpha: config.alpha,
            gamma: config.gamma,
            algorithm: config.algorithm,
            episode: 0,
        }
    }

    pub fn config(&self) -> TdConfig {
        TdConfig {
            alpha: self.alpha,
            gamma: self.gamma,
            algorithm: self.algorithm,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Number of completed episodes
    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Apply one TD update to the departed cell and return the new estimate
    fn learn(&mut self, grid: &mut Grid, cell: CellId, action: Action, next: CellId) -> f32 {
        let q_value = grid.cell(cell).values()[action];
        let next_cell = grid.cell(next);
        let reward = next_cell.reward();
        let bootstrap = self
            .algorithm
            .bootstrap(next_cell.values(), &mut self.policy);

        let update = q_value + self.alpha * (reward + self.gamma * bootstrap - q_value);
        grid.cell_mut(cell).values_mut()[action] = update;

        trace!(
            "{:?} {:?} {} -> {:?}: {} -> {}",
            grid.position(cell),
            action,
            reward,
            grid.position(next),
            q_value,
            update
        );
        update
    }

    /// Run a single episode from the grid's starting position to a terminal cell
    pub fn go(&mut self, grid: &mut Grid) -> Result<EpisodeSummary> {
        let start = grid.starting_position()?;
        let mut current = start;
        let mut is_new_episode = true;
        let mut steps = 0;
        let mut total_reward = 0.0;

        while !grid.cell(current).is_terminal() {
            let action = self
                .policy
                .select_action(grid.cell(current).values(), is_new_episode);
            let next = grid.take_action(current, action);
            self.learn(grid, current, action, next);

            total_reward += grid.cell(next).reward();
            steps += 1;
            current = next;
            is_new_episode = false;
        }

        self.episode += 1;
        debug!(
            "Episode {}: {} steps, reward {}, epsilon {:?}",
            self.episode,
            steps,
            total_reward,
            self.policy.exploration_rate()
        );

        Ok(EpisodeSummary {
            start,
            steps,
            reward: total_reward,
        })
    }

    /// Run `episodes` episodes, returning a summary of each
    pub fn train(&mut self, grid: &mut Grid, episodes: u32) -> Result<Vec<EpisodeSummary>> {
        info!(
            "Training {} for {} episodes (alpha {}, gamma {})",
            self.algorithm, episodes, self.alpha, self.gamma
        );

        let summaries = (0..episodes)
            .map(|_| self.go(grid))
            .collect::<Result<Vec<_>>>()?;

        if !summaries.is_empty() {
            let mean = summaries.iter().map(|s| s.reward).sum::<f32>() / summaries.len() as f32;
            info!(
                "Finished {} episodes of {}, mean reward {:.3}",
                summaries.len(),
                self.algorithm,
                mean
            );
        }
        Ok(summaries)
    }
}

/// Train `grid` with Q-learning for `episodes` episodes
pub fn q_learning<P: Policy>(
    grid: &mut Grid,
    policy: P,
    alpha: f32,
    gamma: f32,
    episodes: u32,
) -> Result<Vec<EpisodeSummary>> {
    let config = TdConfig {
        alpha,
        gamma,
        algorithm: Algorithm::QLearning,
    };
    TdAgent::new(config, policy).train(grid, episodes)
}

/// Train `grid` with SARSA for `episodes` episodes
pub fn sarsa<P: Policy>(
    grid: &mut Grid,
    policy: P,
    alpha: f32,
    gamma: f32,
    episodes: u32,
) -> Result<Vec<EpisodeSummary>> {
    let config = TdConfig {
        alpha,
        gamma,
        algorithm: Algorithm::Sarsa,
    };
    TdAgent::new(config, policy).train(grid, episodes)
}

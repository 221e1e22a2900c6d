use rand::{rngs::StdRng, SeedableRng};

use crate::{
    decay::{Decay, InverseTime},
    grid::{Action, ActionValues},
};

use super::{EpsilonGreedy, Policy};

/// Epsilon greedy exploration whose epsilon follows a schedule over episodes
///
/// Wraps an [`EpsilonGreedy`] selector. At the start of every episode the
/// episode counter `n` is incremented and epsilon is set to the schedule's
/// value at `n - 1`. Epsilon only changes at episode boundaries.
#[derive(Debug, Clone)]
pub struct DecayingEpsilonGreedy<D: Decay> {
    inner: EpsilonGreedy,
    schedule: D,
    episode: u32,
}

impl DecayingEpsilonGreedy<InverseTime> {
    /// Greedy in the Limit with Infinite Exploration: epsilon = 1/n after `n` episodes
    pub fn glie() -> Self {
        Self::glie_with_rng(StdRng::from_entropy())
    }

    pub fn glie_with_rng(rng: StdRng) -> Self {
        Self::with_rng(InverseTime::harmonic(), rng)
    }
}

impl<D: Decay> DecayingEpsilonGreedy<D> {
    pub fn new(schedule: D) -> Self {
        Self::with_rng(schedule, StdRng::from_entropy())
    }

    /// **Panics** if the schedule starts outside the interval `[0,1]`
    pub fn with_rng(schedule: D, rng: StdRng) -> Self {
        let initial = schedule.evaluate(0.0);
        Self {
            inner: EpsilonGreedy::with_rng(initial, rng),
            schedule,
            episode: 0,
        }
    }

    /// Advance to the next episode and recompute epsilon
    pub fn update_epsilon(&mut self) {
        self.episode += 1;
        let epsilon = self.schedule.evaluate((self.episode - 1) as f32);
        self.inner.set_epsilon(epsilon);
    }

    pub fn epsilon(&self) -> f32 {
        self.inner.epsilon()
    }

    /// Number of episodes started so far
    pub fn episode(&self) -> u32 {
        self.episode
    }
}

impl<D: Decay> Policy for DecayingEpsilonGreedy<D> {
    fn select_action(&mut self, values: &ActionValues, is_new_episode: bool) -> Action {
        if is_new_episode {
            self.update_epsilon();
        }
        self.inner.select_action(values, is_new_episode)
    }

    fn exploration_rate(&self) -> Option<f32> {
        Some(self.inner.epsilon())
    }
}

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use strum::VariantArray;

use crate::{
    assert_interval,
    grid::{Action, ActionValues},
};

use super::{Choice, Policy};

/// Epsilon greedy exploration policy with a fixed epsilon threshold
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    epsilon: f32,
    rng: StdRng,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy seeded from system entropy
    ///
    /// **Panics** if `epsilon` is not in the interval `[0,1]`
    pub fn new(epsilon: f32) -> Self {
        Self::with_rng(epsilon, StdRng::from_entropy())
    }

    /// Initialize epsilon greedy policy with an explicit random source
    ///
    /// **Panics** if `epsilon` is not in the interval `[0,1]`
    pub fn with_rng(epsilon: f32, rng: StdRng) -> Self {
        assert_interval!(epsilon, 0.0, 1.0);
        Self { epsilon, rng }
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// **Panics** if `epsilon` is not in the interval `[0,1]`
    pub fn set_epsilon(&mut self, epsilon: f32) {
        assert_interval!(epsilon, 0.0, 1.0);
        self.epsilon = epsilon;
    }

    /// Decide whether the next selection explores or exploits
    pub fn choose(&mut self) -> Choice {
        if self.rng.gen::<f32>() < self.epsilon {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }

    /// A uniformly random action
    pub fn random_action(&mut self) -> Action {
        *Action::VARIANTS
            .choose(&mut self.rng)
            .expect("There is always at least one action available")
    }
}

impl Policy for EpsilonGreedy {
    fn select_action(&mut self, values: &ActionValues, _is_new_episode: bool) -> Action {
        match self.choose() {
            Choice::Explore => self.random_action(),
            Choice::Exploit => values.greedy(),
        }
    }

    fn exploration_rate(&self) -> Option<f32> {
        Some(self.epsilon)
    }
}

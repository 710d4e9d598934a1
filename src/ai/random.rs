use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::GameState;

use super::policy::{Policy, PolicyError};

/// A policy that selects uniformly at random from legal moves.
///
/// Also the fallback when a classifier-backed policy reports
/// [`PolicyError::ClassifierUnavailable`].
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    type State = GameState;
    type Action = usize;

    fn select_move(&mut self, state: &GameState) -> Result<usize, PolicyError> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(PolicyError::NoValidMoves);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::cards::CardAction;

use super::qtable::{QState, QTable};

/// Tabular Q-learning agent with an epsilon-greedy behavior policy.
pub struct QLearningAgent {
    table: QTable,
    epsilon: f64,
    alpha: f64,
    gamma: f64,
    rng: StdRng,
}

impl QLearningAgent {
    pub fn new(alpha: f64, gamma: f64, epsilon: f64) -> Self {
        Self::from_rng(alpha, gamma, epsilon, StdRng::from_os_rng())
    }

    pub fn with_seed(alpha: f64, gamma: f64, epsilon: f64, seed: u64) -> Self {
        Self::from_rng(alpha, gamma, epsilon, StdRng::seed_from_u64(seed))
    }

    fn from_rng(alpha: f64, gamma: f64, epsilon: f64, rng: StdRng) -> Self {
        QLearningAgent {
            table: QTable::new(),
            epsilon,
            alpha,
            gamma,
            rng,
        }
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn into_table(self) -> QTable {
        self.table
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Pick an action for `state`: explore uniformly with probability
    /// epsilon, otherwise act greedily on the table.
    pub fn select_action(&mut self, state: QState) -> CardAction {
        if self.rng.random::<f64>() < self.epsilon {
            if self.rng.random_range(0..2) == 0 {
                CardAction::Stand
            } else {
                CardAction::Draw
            }
        } else {
            self.table.greedy_action(state)
        }
    }

    /// One-step Q update. `next` is ignored as a bootstrap source when the
    /// episode ended there.
    pub fn update(&mut self, state: QState, action: CardAction, reward: f64, next: QState, done: bool) {
        let future = if done { 0.0 } else { self.table.max_value(next) };
        let target = reward + self.gamma * future;
        let values = self.table.values_mut(state);
        let current = values[action.index()];
        values[action.index()] = (1.0 - self.alpha) * current + self.alpha * target;
    }

    /// Multiplicative epsilon decay with a floor.
    pub fn decay_epsilon(&mut self, decay: f64, floor: f64) {
        self.epsilon = (self.epsilon * decay).max(floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_moves_value_toward_target() {
        let mut agent = QLearningAgent::with_seed(0.1, 0.9, 0.0, 1);
        let state = QState::new(8, 2);
        let next = QState::new(14, 2);

        agent.update(state, CardAction::Draw, 0.0, next, false);
        // Empty table: target is 0 + 0.9 * 0, value stays 0
        assert_eq!(agent.table().values(state), [0.0, 0.0]);

        agent.update(next, CardAction::Stand, 1.0, next, true);
        // (1 - 0.1) * 0 + 0.1 * 1 = 0.1
        assert_eq!(agent.table().values(next)[0], 0.1);

        agent.update(state, CardAction::Draw, 0.0, next, false);
        // Bootstrap from max Q(next) = 0.1: 0.1 * 0.9 * 0.1 = 0.009
        let expected = 0.1 * (0.9 * 0.1);
        assert!((agent.table().values(state)[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_terminal_update_ignores_next_state_values() {
        let mut agent = QLearningAgent::with_seed(0.1, 0.9, 0.0, 1);
        let state = QState::new(10, 4);
        let next = QState::new(16, 4);
        agent.update(next, CardAction::Stand, 1.0, next, true);

        agent.update(state, CardAction::Draw, -1.0, next, true);
        // Done: target is the bare reward
        let expected = 0.1 * -1.0;
        assert!((agent.table().values(state)[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_when_epsilon_zero() {
        let mut agent = QLearningAgent::with_seed(0.1, 0.9, 0.0, 5);
        let state = QState::new(6, 2);
        agent.table.values_mut(state)[CardAction::Draw.index()] = 1.0;
        for _ in 0..50 {
            assert_eq!(agent.select_action(state), CardAction::Draw);
        }
    }

    #[test]
    fn test_explores_when_epsilon_one() {
        let mut agent = QLearningAgent::with_seed(0.1, 0.9, 1.0, 5);
        let state = QState::new(6, 2);
        agent.table.values_mut(state)[CardAction::Draw.index()] = 1.0;
        // With pure exploration both actions must show up
        let mut saw_stand = false;
        for _ in 0..200 {
            if agent.select_action(state) == CardAction::Stand {
                saw_stand = true;
                break;
            }
        }
        assert!(saw_stand);
    }

    #[test]
    fn test_epsilon_decays_to_floor() {
        let mut agent = QLearningAgent::with_seed(0.1, 0.9, 1.0, 1);
        let mut expected = 1.0f64;
        for _ in 0..20_000 {
            agent.decay_epsilon(0.9995, 0.01);
            expected = (expected * 0.9995).max(0.01);
        }
        assert_eq!(agent.epsilon(), expected);
        assert_eq!(agent.epsilon(), 0.01);
    }

    #[test]
    fn test_epsilon_decay_matches_schedule_before_floor() {
        let mut agent = QLearningAgent::with_seed(0.1, 0.9, 1.0, 1);
        let mut expected = 1.0f64;
        for _ in 0..500 {
            agent.decay_epsilon(0.9995, 0.01);
            expected = (expected * 0.9995).max(0.01);
        }
        assert_eq!(agent.epsilon(), expected);
        assert!(agent.epsilon() > 0.01);
    }
}

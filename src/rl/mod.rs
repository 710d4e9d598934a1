//! Tabular reinforcement learning for the card game: the Q-table and its
//! discretized state key, the learning agent, and the training loop.

mod agent;
mod policy;
mod qtable;
mod trainer;

pub use agent::QLearningAgent;
pub use policy::QLearningPolicy;
pub use qtable::{QState, QTable};
pub use trainer::{evaluate_greedy, Trainer, TrainingReport, TrainingSchedule};

use crate::cards::{CardAction, SevenAndHalfEnv};

use super::agent::QLearningAgent;
use super::qtable::{QState, QTable};

/// Episode count and exploration schedule for a training run.
#[derive(Debug, Clone, Copy)]
pub struct TrainingSchedule {
    pub episodes: usize,
    pub history_interval: usize,
    pub epsilon_decay: f64,
    pub epsilon_floor: f64,
}

impl Default for TrainingSchedule {
    fn default() -> Self {
        TrainingSchedule {
            episodes: 30_000,
            history_interval: 1_000,
            epsilon_decay: 0.9995,
            epsilon_floor: 0.01,
        }
    }
}

/// Summary of a finished training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Win rate over each completed interval of
    /// [`TrainingSchedule::history_interval`] episodes.
    pub win_rate_history: Vec<f64>,
    pub episodes: usize,
    pub final_epsilon: f64,
    pub states_visited: usize,
}

/// Runs Q-learning episodes against the card environment and tracks the
/// rolling win rate.
pub struct Trainer {
    env: SevenAndHalfEnv,
    agent: QLearningAgent,
    schedule: TrainingSchedule,
    verbose: bool,
}

impl Trainer {
    pub fn new(env: SevenAndHalfEnv, agent: QLearningAgent, schedule: TrainingSchedule) -> Self {
        Trainer {
            env,
            agent,
            schedule,
            verbose: false,
        }
    }

    /// Print interval progress lines while training.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn agent(&self) -> &QLearningAgent {
        &self.agent
    }

    pub fn into_agent(self) -> QLearningAgent {
        self.agent
    }

    pub fn train(&mut self) -> TrainingReport {
        let mut history = Vec::new();
        let mut wins_in_window = 0usize;

        for episode in 1..=self.schedule.episodes {
            if self.run_episode() {
                wins_in_window += 1;
            }
            self.agent
                .decay_epsilon(self.schedule.epsilon_decay, self.schedule.epsilon_floor);

            if episode % self.schedule.history_interval == 0 {
                let rate = wins_in_window as f64 / self.schedule.history_interval as f64;
                history.push(rate);
                wins_in_window = 0;
                if self.verbose {
                    println!(
                        "Episode {}/{}: win rate {:.3}, epsilon {:.4}, states {}",
                        episode,
                        self.schedule.episodes,
                        rate,
                        self.agent.epsilon(),
                        self.agent.table().len()
                    );
                }
            }
        }

        TrainingReport {
            win_rate_history: history,
            episodes: self.schedule.episodes,
            final_epsilon: self.agent.epsilon(),
            states_visited: self.agent.table().len(),
        }
    }

    /// Play one episode with learning updates; returns true on a win.
    fn run_episode(&mut self) -> bool {
        let mut obs = self.env.reset();
        loop {
            let state = QState::from_observation(obs);
            let action = self.agent.select_action(state);
            let step = self.env.step(action);
            let next = QState::from_observation(step.observation);
            self.agent.update(state, action, step.reward, next, step.done);
            obs = step.observation;
            if step.done {
                return step.reward > 0.0;
            }
        }
    }
}

/// Win rate of the greedy policy over `episodes` fresh games, with no
/// exploration and no learning.
pub fn evaluate_greedy(env: &mut SevenAndHalfEnv, table: &QTable, episodes: usize) -> f64 {
    let mut wins = 0usize;
    for _ in 0..episodes {
        let mut obs = env.reset();
        loop {
            let action = table.greedy_action(QState::from_observation(obs));
            let step = env.step(action);
            obs = step.observation;
            if step.done {
                if step.reward > 0.0 {
                    wins += 1;
                }
                break;
            }
        }
    }
    wins as f64 / episodes as f64
}

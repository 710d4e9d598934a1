//! # Turnwise
//!
//! Decision-making core shared by two turn-based games: a four-in-a-row
//! connection board game and a push-your-luck card game. Provides an
//! adversarial tree search with alpha-beta pruning, a windowed positional
//! evaluator, a classifier-backed move policy, and a tabular Q-learning
//! agent trained by self-play.
//!
//! ## Modules
//!
//! - [`game`]: board rules engine (board, players, state machine)
//! - [`ai`]: policy trait, minimax search, heuristic, classifier policy
//! - [`cards`]: card deck, scoring, and the push-your-luck environment
//! - [`rl`]: Q-table, Q-learning agent, self-play trainer
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod ai;
pub mod cards;
pub mod config;
pub mod error;
pub mod game;
pub mod rl;

//! Push-your-luck card game: deck, hand scoring with the wild card, and
//! the episodic environment a learning agent plays against.

mod deck;
mod env;

pub use deck::{hand_score, standard_deck, Card, Hand, BUST_THRESHOLD};
pub use env::{CardAction, Observation, SevenAndHalfEnv, Step};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::deck::{hand_score, standard_deck, Card, Hand, BUST_THRESHOLD};

/// The dealer draws while its score is below this.
const DEALER_STAND_SCORE: f64 = 5.0;

/// Player actions. `Stand` hands control to the fixed dealer policy,
/// `Draw` takes another card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    Stand = 0,
    Draw = 1,
}

impl CardAction {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<CardAction> {
        match index {
            0 => Some(CardAction::Stand),
            1 => Some(CardAction::Draw),
            _ => None,
        }
    }
}

/// The reduced state a policy sees: its own score and the dealer's
/// face-up card (face cards and the wild collapsed to 0.5). Full hands
/// stay hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub player_score: f64,
    pub dealer_visible: f64,
}

/// Result of one environment step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
}

/// Push-your-luck card environment.
///
/// A 41-card deck (ranks 1-10 across four suits, one ten replaced by the
/// wild) is shuffled at reset and one card dealt to each side. The player
/// draws until standing or busting past 7.5; on stand a fixed dealer
/// policy draws while below 5.0 and the higher total wins. Rewards are
/// `+1` (dealer bust or strictly higher player score), `-1` otherwise;
/// ties favor the dealer.
pub struct SevenAndHalfEnv {
    deck: Vec<Card>,
    player_hand: Hand,
    dealer_hand: Hand,
    done: bool,
    rng: StdRng,
}

impl SevenAndHalfEnv {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut env = SevenAndHalfEnv {
            deck: Vec::new(),
            player_hand: Vec::new(),
            dealer_hand: Vec::new(),
            done: true,
            rng,
        };
        env.reset();
        env
    }

    /// Start a new episode: shuffle a fresh deck and deal one card each.
    pub fn reset(&mut self) -> Observation {
        self.deck = standard_deck();
        self.deck.shuffle(&mut self.rng);
        let first = self.draw_card();
        let second = self.draw_card();
        self.player_hand = vec![first];
        self.dealer_hand = vec![second];
        self.done = false;
        self.observation()
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer_hand
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn player_score(&self) -> f64 {
        hand_score(&self.player_hand)
    }

    pub fn dealer_score(&self) -> f64 {
        hand_score(&self.dealer_hand)
    }

    /// The reduced state exposed to policies.
    pub fn observation(&self) -> Observation {
        Observation {
            player_score: self.player_score(),
            dealer_visible: self.dealer_hand[0].visible_value(),
        }
    }

    /// Advance the episode by one action. Calling `step` on a finished
    /// episode is a no-op that reports `done`.
    pub fn step(&mut self, action: CardAction) -> Step {
        if self.done {
            return Step {
                observation: self.observation(),
                reward: 0.0,
                done: true,
            };
        }

        match action {
            CardAction::Draw => {
                let card = self.draw_card();
                self.player_hand.push(card);
                if self.player_score() > BUST_THRESHOLD {
                    self.done = true;
                    self.finish(-1.0)
                } else {
                    Step {
                        observation: self.observation(),
                        reward: 0.0,
                        done: false,
                    }
                }
            }
            CardAction::Stand => {
                // Fixed dealer policy: draw while below the stand score
                while hand_score(&self.dealer_hand) < DEALER_STAND_SCORE {
                    let card = self.draw_card();
                    self.dealer_hand.push(card);
                }

                let dealer = self.dealer_score();
                let player = self.player_score();
                self.done = true;

                if dealer > BUST_THRESHOLD || player > dealer {
                    self.finish(1.0)
                } else {
                    // Ties favor the dealer
                    self.finish(-1.0)
                }
            }
        }
    }

    fn finish(&self, reward: f64) -> Step {
        Step {
            observation: self.observation(),
            reward,
            done: true,
        }
    }

    fn draw_card(&mut self) -> Card {
        // Busts at 7.5 bound both hands far below the 41-card deck
        self.deck.pop().expect("deck outlasts any legal episode")
    }
}

impl Default for SevenAndHalfEnv {
    fn default() -> Self {
        Self::new()
    }
}

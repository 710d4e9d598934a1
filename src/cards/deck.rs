use std::fmt;

/// Hand totals above this are a bust.
pub const BUST_THRESHOLD: f64 = 7.5;

/// A playing card: ranks 1-7 are worth their face value, ranks 8-10 are
/// worth half a point, and the single wild card takes whatever value best
/// helps the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Rank(u8),
    Wild,
}

impl Card {
    /// Fixed face value; `None` for the wild card, whose value is chosen
    /// at scoring time.
    pub fn fixed_value(self) -> Option<f64> {
        match self {
            Card::Rank(r) if r >= 8 => Some(0.5),
            Card::Rank(r) => Some(f64::from(r)),
            Card::Wild => None,
        }
    }

    /// Value as seen on the dealer's face-up card: any face card or the
    /// wild collapses to 0.5.
    pub fn visible_value(self) -> f64 {
        self.fixed_value().unwrap_or(0.5)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Rank(r) => write!(f, "{r}"),
            Card::Wild => write!(f, "Wild"),
        }
    }
}

/// An ordered sequence of cards.
pub type Hand = Vec<Card>;

/// Build the unshuffled deck: ranks 1-10 across four suits with one ten
/// removed and replaced by the single wild card (41 cards total).
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(41);
    for rank in 1..=10u8 {
        let copies = if rank == 10 { 3 } else { 4 };
        for _ in 0..copies {
            deck.push(Card::Rank(rank));
        }
    }
    deck.push(Card::Wild);
    deck
}

/// Score a hand, resolving the wild card to the largest candidate value in
/// `{0.5, 1, 2, ..., 7}` that does not push the total past
/// [`BUST_THRESHOLD`]. If every candidate busts, the wild resolves to its
/// minimum value 0.5, so the hand always has a deterministic score.
pub fn hand_score(hand: &[Card]) -> f64 {
    let base: f64 = hand.iter().filter_map(|c| c.fixed_value()).sum();
    if !hand.contains(&Card::Wild) {
        return base;
    }

    let mut best = None;
    for candidate in [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0] {
        let total = base + candidate;
        if total <= BUST_THRESHOLD {
            best = Some(total);
        }
    }
    best.unwrap_or(base + 0.5)
}

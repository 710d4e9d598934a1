use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cards::{CardAction, Observation};

/// Discretized environment state used as the Q-table key.
///
/// Scores are stored as counts of half points (a score of 3.5 becomes 7),
/// so keys hash and compare exactly instead of going through floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QState {
    pub player_half_points: u8,
    pub dealer_half_points: u8,
}

impl QState {
    pub fn new(player_half_points: u8, dealer_half_points: u8) -> Self {
        QState {
            player_half_points,
            dealer_half_points,
        }
    }

    pub fn from_scores(player_score: f64, dealer_visible: f64) -> Self {
        QState {
            player_half_points: (player_score * 2.0).round() as u8,
            dealer_half_points: (dealer_visible * 2.0).round() as u8,
        }
    }

    pub fn from_observation(obs: Observation) -> Self {
        Self::from_scores(obs.player_score, obs.dealer_visible)
    }

    pub fn player_score(self) -> f64 {
        f64::from(self.player_half_points) / 2.0
    }

    pub fn dealer_visible(self) -> f64 {
        f64::from(self.dealer_half_points) / 2.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QEntry {
    state: QState,
    values: [f64; 2],
}

/// Action-value table over [`QState`]s.
///
/// Entries appear lazily with both action values at `0.0`; the array is
/// indexed by [`CardAction::index`] (stand 0, draw 1). Serializes as a
/// flat entry list so it can be written as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<QEntry>", into = "Vec<QEntry>")]
pub struct QTable {
    entries: HashMap<QState, [f64; 2]>,
}

impl QTable {
    pub fn new() -> Self {
        QTable {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Action values for `state`, without materializing an entry.
    pub fn values(&self, state: QState) -> [f64; 2] {
        self.entries.get(&state).copied().unwrap_or([0.0, 0.0])
    }

    /// Mutable action values for `state`, inserting the zero entry on
    /// first touch.
    pub fn values_mut(&mut self, state: QState) -> &mut [f64; 2] {
        self.entries.entry(state).or_insert([0.0, 0.0])
    }

    /// Best action for `state`; ties resolve to `Stand`.
    pub fn greedy_action(&self, state: QState) -> CardAction {
        let values = self.values(state);
        if values[CardAction::Draw.index()] > values[CardAction::Stand.index()] {
            CardAction::Draw
        } else {
            CardAction::Stand
        }
    }

    /// Value of the greedy action in `state`.
    pub fn max_value(&self, state: QState) -> f64 {
        let values = self.values(state);
        values[0].max(values[1])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QState, &[f64; 2])> {
        self.entries.iter()
    }
}

impl From<Vec<QEntry>> for QTable {
    fn from(entries: Vec<QEntry>) -> Self {
        QTable {
            entries: entries.into_iter().map(|e| (e.state, e.values)).collect(),
        }
    }
}

impl From<QTable> for Vec<QEntry> {
    fn from(table: QTable) -> Self {
        let mut entries: Vec<QEntry> = table
            .entries
            .into_iter()
            .map(|(state, values)| QEntry { state, values })
            .collect();
        entries.sort_by_key(|e| (e.state.player_half_points, e.state.dealer_half_points));
        entries
    }
}

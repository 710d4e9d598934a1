use crate::ai::{Policy, PolicyError};
use crate::cards::{CardAction, Observation};

use super::qtable::{QState, QTable};

/// Greedy play over a trained [`QTable`], behind the shared [`Policy`]
/// trait so card and board strategies are driven the same way.
pub struct QLearningPolicy {
    table: QTable,
}

impl QLearningPolicy {
    pub fn new(table: QTable) -> Self {
        QLearningPolicy { table }
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }
}

impl Policy for QLearningPolicy {
    type State = Observation;
    type Action = CardAction;

    fn select_move(&mut self, state: &Observation) -> Result<CardAction, PolicyError> {
        Ok(self.table.greedy_action(QState::from_observation(*state)))
    }

    fn name(&self) -> &str {
        "QLearning"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untrained_table_stands() {
        let mut policy = QLearningPolicy::new(QTable::new());
        let obs = Observation {
            player_score: 4.0,
            dealer_visible: 2.0,
        };
        assert_eq!(policy.select_move(&obs).unwrap(), CardAction::Stand);
    }

    #[test]
    fn test_follows_table_preference() {
        let mut table = QTable::new();
        let state = QState::from_scores(1.5, 6.0);
        table.values_mut(state)[CardAction::Draw.index()] = 0.4;
        let mut policy = QLearningPolicy::new(table);

        let obs = Observation {
            player_score: 1.5,
            dealer_visible: 6.0,
        };
        assert_eq!(policy.select_move(&obs).unwrap(), CardAction::Draw);
    }
}

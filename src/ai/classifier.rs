use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Cell, GameState, Player};

use super::policy::{Policy, PolicyError};

/// Contract for an externally trained position classifier.
///
/// `features` is the flattened board (`rows * cols` values, row-major):
/// acting side's pieces as `1.0`, opponent's as `-1.0`, empty as `0.0`.
/// The returned label is `1` if the acting side is predicted to win, `-1`
/// if the opponent is, `0` for a draw or an uncertain position.
///
/// Training lives outside this crate; the policy only consumes inference.
pub trait Classifier: Send {
    fn predict(&self, features: &[f64]) -> i8;
}

/// Flatten a board into the classifier feature vector, from `actor`'s
/// perspective.
pub fn flatten_features(board: &Board, actor: Player) -> Vec<f64> {
    let own = actor.to_cell();
    let opp = actor.other().to_cell();
    let mut features = Vec::with_capacity(board.rows() * board.cols());
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            features.push(match board.get(row, col) {
                c if c == own => 1.0,
                c if c == opp => -1.0,
                _ => 0.0,
            });
        }
    }
    features
}

/// Move policy backed by an external classifier.
///
/// Immediate wins are taken and immediate opponent wins blocked without
/// consulting the classifier; remaining candidates are scored by predicted
/// outcome plus a small center bonus, scanned in randomized order to avoid
/// positional bias.
pub struct ClassifierPolicy {
    classifier: Option<Box<dyn Classifier>>,
    rng: StdRng,
}

impl ClassifierPolicy {
    pub fn new(classifier: Option<Box<dyn Classifier>>) -> Self {
        ClassifierPolicy {
            classifier,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(classifier: Option<Box<dyn Classifier>>, seed: u64) -> Self {
        ClassifierPolicy {
            classifier,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn label_score(label: i8) -> f64 {
        match label.signum() {
            1 => 10.0,  // acting side predicted to win
            -1 => -10.0, // opponent predicted to win
            _ => 0.0,   // draw / uncertain
        }
    }

    /// Would `player` win immediately by dropping in `col`?
    fn wins_at(board: &Board, col: usize, player: Player) -> bool {
        let mut probe = board.clone();
        match probe.drop_piece(col, player.to_cell()) {
            Ok(_) => probe.is_win(player.to_cell()),
            Err(_) => false,
        }
    }
}

impl Policy for ClassifierPolicy {
    type State = GameState;
    type Action = usize;

    fn select_move(&mut self, state: &GameState) -> Result<usize, PolicyError> {
        let legal = state.legal_actions();
        if legal.is_empty() {
            return Err(PolicyError::NoValidMoves);
        }
        let actor = state.current_player();
        let board = state.board();

        // Take an immediate win without asking the classifier
        for &col in &legal {
            if Self::wins_at(board, col, actor) {
                return Ok(col);
            }
        }

        // Block an immediate opponent win
        for &col in &legal {
            if Self::wins_at(board, col, actor.other()) {
                return Ok(col);
            }
        }

        let classifier = self
            .classifier
            .as_ref()
            .ok_or(PolicyError::ClassifierUnavailable)?;

        // Random initial best guarantees a result even if all scores tie
        let mut best_col = legal[self.rng.random_range(0..legal.len())];
        let mut best_score = f64::NEG_INFINITY;

        let mut candidates = legal.clone();
        candidates.shuffle(&mut self.rng);

        let center = board.center_col();
        for col in candidates {
            let next = state.apply_move(col)?;
            let features = flatten_features(next.board(), actor);
            let mut score = Self::label_score(classifier.predict(&features));
            if col == center {
                score += 1.0;
            }
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }

        Ok(best_col)
    }

    fn name(&self) -> &str {
        "Classifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub that fails the test if inference is ever reached.
    struct PanicClassifier;

    impl Classifier for PanicClassifier {
        fn predict(&self, _features: &[f64]) -> i8 {
            panic!("classifier should not be consulted for forced moves");
        }
    }

    struct AlwaysDraw;

    impl Classifier for AlwaysDraw {
        fn predict(&self, _features: &[f64]) -> i8 {
            0
        }
    }

    /// Predicts a win for the acting side only when it holds a piece in
    /// the bottom cell of column 5.
    struct FavorsColumnFive;

    impl Classifier for FavorsColumnFive {
        fn predict(&self, features: &[f64]) -> i8 {
            // 6x7 board, row-major: bottom row starts at index 35
            if features[35 + 5] == 1.0 {
                1
            } else {
                0
            }
        }
    }

    fn red_threat_state() -> GameState {
        // Red holds [0,1,2] on the bottom row; col 3 completes the win
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Red
            state = state.apply_move(col).unwrap(); // Yellow
        }
        state
    }

    #[test]
    fn takes_immediate_win_without_inference() {
        let mut policy = ClassifierPolicy::with_seed(Some(Box::new(PanicClassifier)), 7);
        let state = red_threat_state();
        assert_eq!(policy.select_move(&state).unwrap(), 3);
    }

    #[test]
    fn blocks_opponent_win_without_inference() {
        // Yellow threatens [0,1,2] at bottom; Red must play col 3
        let mut state = GameState::initial();
        state = state.apply_move(6).unwrap(); // Red
        state = state.apply_move(0).unwrap(); // Yellow
        state = state.apply_move(6).unwrap(); // Red
        state = state.apply_move(1).unwrap(); // Yellow
        state = state.apply_move(5).unwrap(); // Red
        state = state.apply_move(2).unwrap(); // Yellow

        let mut policy = ClassifierPolicy::with_seed(Some(Box::new(PanicClassifier)), 7);
        assert_eq!(policy.select_move(&state).unwrap(), 3);
    }

    #[test]
    fn follows_classifier_preference() {
        let mut policy = ClassifierPolicy::with_seed(Some(Box::new(FavorsColumnFive)), 11);
        let state = GameState::initial();
        // Win score 10 beats the center bonus 1
        assert_eq!(policy.select_move(&state).unwrap(), 5);
    }

    #[test]
    fn missing_classifier_is_recoverable() {
        let mut policy = ClassifierPolicy::with_seed(None, 3);
        let state = GameState::initial();
        let err = policy.select_move(&state).unwrap_err();
        assert!(matches!(err, PolicyError::ClassifierUnavailable));

        // Degrade to uniform-random selection, as callers are expected to
        let mut fallback = crate::ai::RandomPolicy::with_seed(3);
        let action = fallback.select_move(&state).unwrap();
        assert!(state.legal_actions().contains(&action));
    }

    #[test]
    fn all_ties_still_yield_a_legal_move() {
        let mut policy = ClassifierPolicy::with_seed(Some(Box::new(AlwaysDraw)), 42);
        let state = GameState::initial().apply_move(3).unwrap();
        for _ in 0..50 {
            let action = policy.select_move(&state).unwrap();
            assert!(state.legal_actions().contains(&action));
        }
    }

    #[test]
    fn terminal_state_is_an_error() {
        let state = red_threat_state().apply_move(3).unwrap();
        assert!(state.is_terminal());
        let mut policy = ClassifierPolicy::with_seed(Some(Box::new(AlwaysDraw)), 1);
        assert!(matches!(
            policy.select_move(&state),
            Err(PolicyError::NoValidMoves)
        ));
    }

    #[test]
    fn features_are_acting_side_relative() {
        let state = GameState::initial().apply_move(3).unwrap();
        // Red played (5, 3); it is Yellow's turn
        let features = flatten_features(state.board(), Player::Yellow);
        assert_eq!(features.len(), 42);
        assert_eq!(features[5 * 7 + 3], -1.0);
        assert!(features.iter().filter(|&&f| f != 0.0).count() == 1);

        let red_view = flatten_features(state.board(), Player::Red);
        assert_eq!(red_view[5 * 7 + 3], 1.0);
    }
}

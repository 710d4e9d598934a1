use crate::game::MoveError;

/// Errors surfaced by move-selection policies.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The state is terminal or the board is full; callers must check
    /// `is_terminal` before asking a policy for a move.
    #[error("no valid moves available")]
    NoValidMoves,

    /// No trained classifier handle was supplied. Recoverable: callers
    /// fall back to uniform-random move selection.
    #[error("no classifier handle available")]
    ClassifierUnavailable,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

/// Universal interface for move-selection strategies.
///
/// Unifies the adversarial search, the classifier-backed policy, and the
/// Q-learning agent behind one contract, so a caller owning its own turn
/// loop can swap strategies without touching game rules.
pub trait Policy {
    type State;
    type Action;

    /// Select a move for the given state.
    fn select_move(&mut self, state: &Self::State) -> Result<Self::Action, PolicyError>;

    /// Return the policy's display name.
    fn name(&self) -> &str;
}

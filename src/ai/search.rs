use std::time::{Duration, Instant};

use crate::game::{GameOutcome, GameState, Player};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::policy::{Policy, PolicyError};

/// Terminal win/loss magnitude; dominates any heuristic value. Remaining
/// depth is added on top so the search prefers faster wins and slower
/// losses.
const WIN_SCORE: f64 = 1_000_000.0;

/// Outcome of a search: the chosen column and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub column: usize,
    pub score: f64,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Each recursive call applies candidate moves to a private copy of the
/// state, so sibling branches never share mutable data. An optional
/// deadline is checked at every recursion entry; once it expires, pending
/// subtrees are scored by the heuristic so the root still returns the best
/// move found so far.
pub struct SearchPolicy {
    depth: usize,
    deadline: Option<Duration>,
    heuristic: Box<dyn Heuristic>,
}

impl SearchPolicy {
    pub fn new(depth: usize) -> Self {
        SearchPolicy {
            depth,
            deadline: None,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        SearchPolicy {
            depth,
            deadline: None,
            heuristic,
        }
    }

    /// Impose a wall-clock budget on each `select_move` call.
    pub fn with_deadline(mut self, budget: Duration) -> Self {
        self.deadline = Some(budget);
        self
    }

    /// Run the search and return both the chosen column and its score.
    ///
    /// Fails with [`PolicyError::NoValidMoves`] on a terminal or full
    /// board; callers must check `is_terminal` first.
    pub fn search(&self, state: &GameState) -> Result<SearchResult, PolicyError> {
        if state.is_terminal() || state.legal_actions().is_empty() {
            return Err(PolicyError::NoValidMoves);
        }

        let cutoff = self.deadline.map(|d| Instant::now() + d);
        let max_player = state.current_player();
        let (column, score) = self.minimax(state, self.depth, f64::NEG_INFINITY, f64::INFINITY, true, max_player, cutoff);

        // The root is non-terminal with depth >= 1, so a move is always found.
        let column = column.ok_or(PolicyError::NoValidMoves)?;
        Ok(SearchResult { column, score })
    }

    /// Column candidates ordered center-out (`[3,2,4,1,5,0,6]` on a 7-wide
    /// board). Improves pruning efficiency without changing correctness.
    fn move_order(cols: usize) -> Vec<usize> {
        let center = cols / 2;
        let mut order = Vec::with_capacity(cols);
        order.push(center);
        for offset in 1..=center {
            if center >= offset {
                order.push(center - offset);
            }
            if center + offset < cols {
                order.push(center + offset);
            }
        }
        order
    }

    fn minimax(
        &self,
        state: &GameState,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        max_player: Player,
        cutoff: Option<Instant>,
    ) -> (Option<usize>, f64) {
        if let Some(outcome) = state.outcome() {
            let value = match outcome {
                GameOutcome::Winner(winner) if winner == max_player => WIN_SCORE + depth as f64,
                GameOutcome::Winner(_) => -(WIN_SCORE + depth as f64),
                GameOutcome::Draw => 0.0,
            };
            return (None, value);
        }

        let expired = cutoff.is_some_and(|c| Instant::now() >= c);
        if depth == 0 || expired {
            return (None, self.heuristic.evaluate(state.board(), max_player));
        }

        let legal = state.legal_actions();
        let mut best_move = None;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for col in Self::move_order(state.board().cols()) {
            if !legal.contains(&col) {
                continue;
            }
            // Private copy per branch
            let next = match state.apply_move(col) {
                Ok(next) => next,
                Err(_) => continue,
            };
            let (_, score) =
                self.minimax(&next, depth - 1, alpha, beta, !maximizing, max_player, cutoff);

            // Strict improvement only: the first best move in order is kept.
            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(col);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(col);
                }
                beta = beta.min(best);
            }
            if alpha >= beta {
                break; // pruned, not an error
            }
        }

        (best_move, best)
    }
}

impl Policy for SearchPolicy {
    type State = GameState;
    type Action = usize;

    fn select_move(&mut self, state: &GameState) -> Result<usize, PolicyError> {
        self.search(state).map(|r| r.column)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

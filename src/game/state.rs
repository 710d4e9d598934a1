use super::{Board, MoveError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Full game state: board, side to move, and outcome once terminal.
///
/// States are immutable: `apply_move` returns a fresh state, so sibling
/// search branches never observe each other's mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Initial state on the standard 6x7 board.
    pub fn initial() -> Self {
        Self::with_dims(6, 7)
    }

    /// Initial state on a board with the given dimensions.
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the resulting state.
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        // Clone the board and apply move
        let mut new_board = self.board.clone();
        new_board.drop_piece(column, self.current_player.to_cell())?;

        // Check for win
        let outcome = if new_board.is_win(self.current_player.to_cell()) {
            Some(GameOutcome::Winner(self.current_player))
        } else if new_board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board: new_board,
            current_player: self.current_player.other(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
    }

    #[test]
    fn test_apply_move_invalid_column() {
        let state = GameState::initial();
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_apply_move_full_column() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state = state.apply_move(0).unwrap(); // Red
            state = state.apply_move(0).unwrap(); // Yellow
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_move_after_game_over() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow
            }
        }
        assert!(state.is_terminal());
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let state = GameState::initial();
        let _next = state.apply_move(3).unwrap();
        assert_eq!(state.board().get(5, 3), Cell::Empty);
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn test_draw_on_tiny_board() {
        // 1x4 board fills without a connect-four
        let mut state = GameState::with_dims(1, 4);
        for col in 0..4 {
            state = state.apply_move(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}

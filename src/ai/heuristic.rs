use crate::game::{Board, Player};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Windowed evaluator: scores every contiguous length-4 window in all four
/// directions, plus a center-column bonus.
///
/// Per-window contributions for one side:
///
/// | window content            | contribution |
/// |---------------------------|--------------|
/// | 4 of side                 | +100         |
/// | 3 of side + 1 empty       | +5           |
/// | 2 of side + 2 empty       | +2           |
/// | 3 of opponent + 1 empty   | -4           |
///
/// plus +3 per side piece in the center column.
///
/// [`Heuristic::evaluate`] returns the differential of those contributions
/// (side minus opponent), which makes the evaluator antisymmetric:
/// `evaluate(b, p) == -evaluate(b.swap_sides(), p)` for every board.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> f64 {
        let mut score = 0.0;
        if own == 4 {
            score += 100.0;
        } else if own == 3 && empty == 1 {
            score += 5.0;
        } else if own == 2 && empty == 2 {
            score += 2.0;
        }
        if opp == 3 && empty == 1 {
            score -= 4.0;
        }
        score
    }

    /// One-sided score: the raw contribution table summed over all windows
    /// for `player`, center bonus included.
    pub fn side_score(&self, board: &Board, player: Player) -> f64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let rows = board.rows();
        let cols = board.cols();
        let mut score = 0.0;

        // Center column bonus
        let center = board.center_col();
        for row in 0..rows {
            if board.get(row, center) == own_cell {
                score += 3.0;
            }
        }

        let mut tally = |cells: [crate::game::Cell; 4]| {
            let own = cells.iter().filter(|&&c| c == own_cell).count();
            let opp = cells.iter().filter(|&&c| c == opp_cell).count();
            let empty = 4 - own - opp;
            Self::score_window(own, opp, empty)
        };

        // Horizontal
        for row in 0..rows {
            for col in 0..cols.saturating_sub(3) {
                score += tally([
                    board.get(row, col),
                    board.get(row, col + 1),
                    board.get(row, col + 2),
                    board.get(row, col + 3),
                ]);
            }
        }

        // Vertical
        for col in 0..cols {
            for row in 0..rows.saturating_sub(3) {
                score += tally([
                    board.get(row, col),
                    board.get(row + 1, col),
                    board.get(row + 2, col),
                    board.get(row + 3, col),
                ]);
            }
        }

        // Diagonal (top-left to bottom-right, \)
        for row in 0..rows.saturating_sub(3) {
            for col in 0..cols.saturating_sub(3) {
                score += tally([
                    board.get(row, col),
                    board.get(row + 1, col + 1),
                    board.get(row + 2, col + 2),
                    board.get(row + 3, col + 3),
                ]);
            }
        }

        // Diagonal (bottom-left to top-right, /)
        for row in 3..rows {
            for col in 0..cols.saturating_sub(3) {
                score += tally([
                    board.get(row, col),
                    board.get(row - 1, col + 1),
                    board.get(row - 2, col + 2),
                    board.get(row - 3, col + 3),
                ]);
            }
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        self.side_score(board, player) - self.side_score(board, player.other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new(6, 7);
        let h = WindowHeuristic;
        assert_eq!(h.evaluate(&board, Player::Red), 0.0);
        assert_eq!(h.evaluate(&board, Player::Yellow), 0.0);
    }

    #[test]
    fn single_center_piece_scores_exactly_three() {
        let mut board = Board::new(6, 7);
        board.drop_piece(3, Cell::Red).unwrap();
        let h = WindowHeuristic;
        // One lone piece: no window term fires, only the center bonus.
        assert_eq!(h.evaluate(&board, Player::Red), 3.0);
        assert_eq!(h.evaluate(&board, Player::Yellow), -3.0);
    }

    #[test]
    fn center_preference() {
        let h = WindowHeuristic;
        let mut board_center = Board::new(6, 7);
        board_center.drop_piece(3, Cell::Red).unwrap();
        let mut board_edge = Board::new(6, 7);
        board_edge.drop_piece(0, Cell::Red).unwrap();

        assert!(
            h.evaluate(&board_center, Player::Red) > h.evaluate(&board_edge, Player::Red),
            "center piece should score higher than edge piece"
        );
    }

    #[test]
    fn three_in_a_row_is_a_threat() {
        let h = WindowHeuristic;
        let mut board = Board::new(6, 7);
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        let for_red = h.evaluate(&board, Player::Red);
        let for_yellow = h.evaluate(&board, Player::Yellow);
        assert!(for_red > 0.0, "own threat should be positive, got {for_red}");
        assert_eq!(for_red, -for_yellow);
    }

    #[test]
    fn side_score_matches_contribution_table() {
        let h = WindowHeuristic;
        let mut board = Board::new(6, 7);
        // Vertical stack of 2 red in column 0: exactly one 2+2E window
        // (rows 2..=5 of column 0), no center pieces.
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(0, Cell::Red).unwrap();
        assert_eq!(h.side_score(&board, Player::Red), 2.0);
        // From Yellow's perspective: two red pieces never form a 3+1E
        // window, so no -4 term fires.
        assert_eq!(h.side_score(&board, Player::Yellow), 0.0);
    }

    #[test]
    fn opponent_three_penalty() {
        let h = WindowHeuristic;
        let mut board = Board::new(6, 7);
        for _ in 0..3 {
            board.drop_piece(0, Cell::Yellow).unwrap();
        }
        // Yellow has a vertical 3+1E window in column 0.
        let red_side = h.side_score(&board, Player::Red);
        assert!(red_side < 0.0, "opponent threat should penalize, got {red_side}");
    }

    #[test]
    fn symmetry_under_side_swap() {
        let h = WindowHeuristic;
        let mut board = Board::new(6, 7);
        // An uneven mid-game position
        let drops = [
            (3, Cell::Red),
            (3, Cell::Yellow),
            (2, Cell::Red),
            (4, Cell::Yellow),
            (2, Cell::Red),
            (5, Cell::Yellow),
            (0, Cell::Red),
        ];
        for (col, cell) in drops {
            board.drop_piece(col, cell).unwrap();
        }

        let swapped = board.swap_sides();
        assert_eq!(
            h.evaluate(&board, Player::Red),
            -h.evaluate(&swapped, Player::Red)
        );
        assert_eq!(
            h.evaluate(&board, Player::Yellow),
            -h.evaluate(&swapped, Player::Yellow)
        );
        // Evaluating for the opponent is the same as swapping sides.
        assert_eq!(
            h.evaluate(&board, Player::Red),
            -h.evaluate(&board, Player::Yellow)
        );
    }

    #[test]
    fn four_in_a_row_dominates() {
        let h = WindowHeuristic;
        let mut board = Board::new(6, 7);
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(h.evaluate(&board, Player::Red) >= 100.0);
    }
}

use super::*;
use serde::Serialize;
use serde::Serializer;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Four-in-a-row on a six-by-seven grid. Row zero is the top.
///
/// Tokens fall to the lowest empty cell of their column; four in a line
/// horizontally, vertically, or diagonally wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connect {
    pub grid: [[Option<Side>; COLS]; ROWS],
}

impl Connect {
    pub fn new() -> Self {
        Self {
            grid: [[None; COLS]; ROWS],
        }
    }

    pub fn apply(&self, side: Side, mv: &Move) -> Result<Step, MoveError> {
        let column = match mv {
            Move::Drop(column) => *column,
            _ => return Err(MoveError::Malformed("expected a column drop".into())),
        };
        if column >= COLS {
            return Err(MoveError::Illegal(format!("column {} out of range", column)));
        }
        let row = (0..ROWS)
            .rev()
            .find(|row| self.grid[*row][column].is_none())
            .ok_or_else(|| MoveError::Illegal(format!("column {} is full", column)))?;
        let mut next = self.clone();
        next.grid[row][column] = Some(side);
        Ok(Step {
            board: Board::Connect(next),
            next: side.flip(),
        })
    }

    pub fn verdict(&self, _next: Side) -> Verdict {
        for side in [Side::One, Side::Two] {
            if self.wins(side) {
                return Verdict::Win(side);
            }
        }
        if (0..COLS).all(|column| self.grid[0][column].is_some()) {
            Verdict::Draw
        } else {
            Verdict::Open
        }
    }

    pub fn moves(&self, _side: Side) -> Vec<Move> {
        (0..COLS)
            .filter(|column| self.grid[0][*column].is_none())
            .map(Move::Drop)
            .collect()
    }

    /// Whether this side has any four in a line.
    pub fn wins(&self, side: Side) -> bool {
        let mine = |r: usize, c: usize| self.grid[r][c] == Some(side);
        for r in 0..ROWS {
            for c in 0..COLS - 3 {
                if (0..4).all(|i| mine(r, c + i)) {
                    return true;
                }
            }
        }
        for r in 0..ROWS - 3 {
            for c in 0..COLS {
                if (0..4).all(|i| mine(r + i, c)) {
                    return true;
                }
            }
        }
        for r in 0..ROWS - 3 {
            for c in 0..COLS - 3 {
                if (0..4).all(|i| mine(r + i, c + i)) {
                    return true;
                }
            }
        }
        for r in 3..ROWS {
            for c in 0..COLS - 3 {
                if (0..4).all(|i| mine(r - i, c + i)) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Connect {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Connect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<Vec<u8>> = self
            .grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(u8::from).unwrap_or(0))
                    .collect()
            })
            .collect();
        rows.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drops(columns: &[(Side, usize)]) -> Connect {
        let mut board = Connect::new();
        for (side, column) in columns {
            let step = board.apply(*side, &Move::Drop(*column)).unwrap();
            board = match step.board {
                Board::Connect(next) => next,
                _ => unreachable!(),
            };
        }
        board
    }

    #[test]
    fn tokens_fall_to_the_bottom() {
        let board = drops(&[(Side::One, 3), (Side::Two, 3)]);
        assert_eq!(board.grid[5][3], Some(Side::One));
        assert_eq!(board.grid[4][3], Some(Side::Two));
    }

    #[test]
    fn horizontal_four_wins() {
        let board = drops(&[
            (Side::One, 0),
            (Side::Two, 0),
            (Side::One, 1),
            (Side::Two, 1),
            (Side::One, 2),
            (Side::Two, 2),
            (Side::One, 3),
        ]);
        assert!(board.wins(Side::One));
        assert_eq!(board.verdict(Side::Two), Verdict::Win(Side::One));
    }

    #[test]
    fn vertical_four_wins() {
        let board = drops(&[
            (Side::Two, 6),
            (Side::Two, 6),
            (Side::Two, 6),
            (Side::Two, 6),
        ]);
        assert_eq!(board.verdict(Side::One), Verdict::Win(Side::Two));
    }

    #[test]
    fn diagonal_four_wins() {
        // staircase for side one on columns 0..=3
        let board = drops(&[
            (Side::One, 0),
            (Side::Two, 1),
            (Side::One, 1),
            (Side::Two, 2),
            (Side::One, 2),
            (Side::Two, 3),
            (Side::One, 2),
            (Side::Two, 3),
            (Side::One, 3),
            (Side::Two, 6),
            (Side::One, 3),
        ]);
        assert!(board.wins(Side::One));
    }

    #[test]
    fn full_column_is_illegal() {
        let board = drops(&[
            (Side::One, 0),
            (Side::Two, 0),
            (Side::One, 0),
            (Side::Two, 0),
            (Side::One, 0),
            (Side::Two, 0),
        ]);
        assert!(matches!(
            board.apply(Side::One, &Move::Drop(0)),
            Err(MoveError::Illegal(_))
        ));
        assert_eq!(board.moves(Side::One).len(), 6);
    }

    #[test]
    fn out_of_range_column_is_illegal() {
        let board = Connect::new();
        assert!(board.apply(Side::One, &Move::Drop(7)).is_err());
    }

    #[test]
    fn full_top_row_without_a_winner_is_a_draw() {
        let mut board = Connect::new();
        for (column, side) in [1, 1, 2, 2, 1, 1, 2].into_iter().enumerate() {
            board.grid[0][column] = Some(if side == 1 { Side::One } else { Side::Two });
        }
        assert_eq!(board.verdict(Side::One), Verdict::Draw);
    }
}

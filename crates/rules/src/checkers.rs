use super::*;
use serde::Serialize;
use serde::Serializer;

const SIZE: usize = 8;

/// A piece on the board and whether it has been crowned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub king: bool,
}

/// On the wire a man is 1 or 2 and a king adds ten, so 11 and 12.
impl From<Piece> for u8 {
    fn from(piece: Piece) -> Self {
        u8::from(piece.side) + if piece.king { 10 } else { 0 }
    }
}

/// Checkers on the dark squares of an eight-by-eight board.
///
/// Side two opens on rows zero through two and moves down; side one opens
/// on rows five through seven and moves up. Captures are forced: while any
/// jump exists, plain steps are illegal. A piece reaching the far row is
/// crowned and may move both ways. There are no chained jumps; each
/// capture is its own turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkers {
    pub grid: [[Option<Piece>; SIZE]; SIZE],
}

impl Checkers {
    pub fn new() -> Self {
        let mut grid = [[None; SIZE]; SIZE];
        for r in 0..SIZE {
            for c in 0..SIZE {
                if (r + c) % 2 == 1 {
                    if r < 3 {
                        grid[r][c] = Some(Piece {
                            side: Side::Two,
                            king: false,
                        });
                    }
                    if r > 4 {
                        grid[r][c] = Some(Piece {
                            side: Side::One,
                            king: false,
                        });
                    }
                }
            }
        }
        Self { grid }
    }

    /// Row direction a side's men advance in.
    const fn forward(side: Side) -> isize {
        match side {
            Side::One => -1,
            Side::Two => 1,
        }
    }

    const fn crowning_row(side: Side) -> usize {
        match side {
            Side::One => 0,
            Side::Two => SIZE - 1,
        }
    }

    fn piece(&self, at: Square) -> Option<Piece> {
        self.grid[at.r][at.c]
    }

    fn row_directions(piece: Piece) -> Vec<isize> {
        if piece.king {
            vec![-1, 1]
        } else {
            vec![Self::forward(piece.side)]
        }
    }

    fn squares_of(&self, side: Side) -> Vec<Square> {
        let mut out = Vec::new();
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.grid[r][c].map(|piece| piece.side) == Some(side) {
                    out.push(Square { r, c });
                }
            }
        }
        out
    }

    fn jumps_from(&self, from: Square) -> Vec<Move> {
        let mut out = Vec::new();
        let piece = match self.piece(from) {
            Some(piece) => piece,
            None => return out,
        };
        for dr in Self::row_directions(piece) {
            for dc in [-1isize, 1] {
                let (tr, tc) = (from.r as isize + 2 * dr, from.c as isize + 2 * dc);
                if tr < 0 || tr >= SIZE as isize || tc < 0 || tc >= SIZE as isize {
                    continue;
                }
                let over = Square {
                    r: (from.r as isize + dr) as usize,
                    c: (from.c as isize + dc) as usize,
                };
                let to = Square {
                    r: tr as usize,
                    c: tc as usize,
                };
                if self.piece(to).is_none()
                    && self.piece(over).map(|p| p.side) == Some(piece.side.flip())
                {
                    out.push(Move::Slide { from, to });
                }
            }
        }
        out
    }

    fn steps_from(&self, from: Square) -> Vec<Move> {
        let mut out = Vec::new();
        let piece = match self.piece(from) {
            Some(piece) => piece,
            None => return out,
        };
        for dr in Self::row_directions(piece) {
            for dc in [-1isize, 1] {
                let (tr, tc) = (from.r as isize + dr, from.c as isize + dc);
                if tr < 0 || tr >= SIZE as isize || tc < 0 || tc >= SIZE as isize {
                    continue;
                }
                let to = Square {
                    r: tr as usize,
                    c: tc as usize,
                };
                if self.piece(to).is_none() {
                    out.push(Move::Slide { from, to });
                }
            }
        }
        out
    }

    pub fn moves(&self, side: Side) -> Vec<Move> {
        let jumps: Vec<Move> = self
            .squares_of(side)
            .into_iter()
            .flat_map(|at| self.jumps_from(at))
            .collect();
        if !jumps.is_empty() {
            return jumps;
        }
        self.squares_of(side)
            .into_iter()
            .flat_map(|at| self.steps_from(at))
            .collect()
    }

    pub fn apply(&self, side: Side, mv: &Move) -> Result<Step, MoveError> {
        let (from, to) = match mv {
            Move::Slide { from, to } => (*from, *to),
            _ => return Err(MoveError::Malformed("expected a from/to pair".into())),
        };
        if from.r >= SIZE || from.c >= SIZE || to.r >= SIZE || to.c >= SIZE {
            return Err(MoveError::Illegal("square off the board".into()));
        }
        let piece = self
            .piece(from)
            .ok_or_else(|| MoveError::Illegal("no piece on that square".into()))?;
        if piece.side != side {
            return Err(MoveError::Illegal("that piece is not yours".into()));
        }
        if !self.moves(side).contains(mv) {
            let jumping = !self
                .squares_of(side)
                .iter()
                .all(|at| self.jumps_from(*at).is_empty());
            let reason = if jumping && to.r.abs_diff(from.r) != 2 {
                "a capture is available and must be taken"
            } else {
                "that piece cannot move there"
            };
            return Err(MoveError::Illegal(reason.into()));
        }
        let mut next = self.clone();
        next.grid[from.r][from.c] = None;
        if to.r.abs_diff(from.r) == 2 {
            let over = Square {
                r: (from.r + to.r) / 2,
                c: (from.c + to.c) / 2,
            };
            next.grid[over.r][over.c] = None;
        }
        let crowned = piece.king || to.r == Self::crowning_row(side);
        next.grid[to.r][to.c] = Some(Piece {
            side,
            king: crowned,
        });
        Ok(Step {
            board: Board::Checkers(next),
            next: side.flip(),
        })
    }

    /// A side with no pieces or no legal moves has lost.
    pub fn verdict(&self, next: Side) -> Verdict {
        if self.moves(next).is_empty() {
            Verdict::Win(next.flip())
        } else {
            Verdict::Open
        }
    }
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Checkers {
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

    fn man(side: Side) -> Option<Piece> {
        Some(Piece { side, king: false })
    }

    fn king(side: Side) -> Option<Piece> {
        Some(Piece { side, king: true })
    }

    fn slide(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::Slide {
            from: Square {
                r: from.0,
                c: from.1,
            },
            to: Square { r: to.0, c: to.1 },
        }
    }

    #[test]
    fn opening_layout() {
        let board = Checkers::new();
        let count = |side| board.squares_of(side).len();
        assert_eq!(count(Side::One), 12);
        assert_eq!(count(Side::Two), 12);
        // pieces only on dark squares
        for r in 0..SIZE {
            for c in 0..SIZE {
                if board.grid[r][c].is_some() {
                    assert_eq!((r + c) % 2, 1);
                }
            }
        }
    }

    #[test]
    fn men_only_move_forward() {
        let board = Checkers::new();
        assert!(board.moves(Side::One).contains(&slide((5, 0), (4, 1))));
        assert!(board.apply(Side::One, &slide((5, 0), (6, 1))).is_err());
    }

    #[test]
    fn capture_is_forced() {
        let mut board = Checkers {
            grid: [[None; SIZE]; SIZE],
        };
        board.grid[5][2] = man(Side::One);
        board.grid[4][3] = man(Side::Two);
        board.grid[5][6] = man(Side::One);
        // the plain step with the other piece is refused while a jump exists
        let refused = board.apply(Side::One, &slide((5, 6), (4, 5)));
        assert!(matches!(refused, Err(MoveError::Illegal(_))));
        assert_eq!(board.moves(Side::One), vec![slide((5, 2), (3, 4))]);
    }

    #[test]
    fn jump_removes_the_captured_man() {
        let mut board = Checkers {
            grid: [[None; SIZE]; SIZE],
        };
        board.grid[5][2] = man(Side::One);
        board.grid[4][3] = man(Side::Two);
        let step = board.apply(Side::One, &slide((5, 2), (3, 4))).unwrap();
        let next = match step.board {
            Board::Checkers(next) => next,
            _ => unreachable!(),
        };
        assert_eq!(next.grid[4][3], None);
        assert_eq!(next.grid[3][4], man(Side::One));
        assert_eq!(step.next, Side::Two);
    }

    #[test]
    fn no_chained_jumps() {
        let mut board = Checkers {
            grid: [[None; SIZE]; SIZE],
        };
        board.grid[7][0] = man(Side::One);
        board.grid[6][1] = man(Side::Two);
        board.grid[4][3] = man(Side::Two);
        board.grid[0][7] = man(Side::Two);
        let step = board.apply(Side::One, &slide((7, 0), (5, 2))).unwrap();
        // the turn passes even though a second jump would be on
        assert_eq!(step.next, Side::Two);
    }

    #[test]
    fn reaching_the_far_row_crowns() {
        let mut board = Checkers {
            grid: [[None; SIZE]; SIZE],
        };
        board.grid[1][2] = man(Side::One);
        board.grid[7][6] = man(Side::Two);
        let step = board.apply(Side::One, &slide((1, 2), (0, 3))).unwrap();
        let next = match step.board {
            Board::Checkers(next) => next,
            _ => unreachable!(),
        };
        assert_eq!(next.grid[0][3], king(Side::One));
    }

    #[test]
    fn kings_move_backward() {
        let mut board = Checkers {
            grid: [[None; SIZE]; SIZE],
        };
        board.grid[3][4] = king(Side::One);
        assert!(board.moves(Side::One).contains(&slide((3, 4), (4, 5))));
        assert!(board.moves(Side::One).contains(&slide((3, 4), (2, 3))));
    }

    #[test]
    fn side_without_moves_loses() {
        let mut board = Checkers {
            grid: [[None; SIZE]; SIZE],
        };
        board.grid[0][1] = man(Side::Two);
        assert_eq!(board.verdict(Side::One), Verdict::Win(Side::Two));
        assert_eq!(board.verdict(Side::Two), Verdict::Open);
    }

    #[test]
    fn wire_encoding_marks_kings() {
        let mut board = Checkers {
            grid: [[None; SIZE]; SIZE],
        };
        board.grid[0][1] = king(Side::One);
        board.grid[2][3] = man(Side::Two);
        let wire = serde_json::to_value(&board).unwrap();
        assert_eq!(wire[0][1], serde_json::json!(11));
        assert_eq!(wire[2][3], serde_json::json!(2));
    }
}

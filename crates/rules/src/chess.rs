use super::*;
use serde::Serialize;
use serde::Serializer;

const SIZE: usize = 8;

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const ROOK_RAYS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_RAYS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub role: Role,
}

/// Wire letters: uppercase for side one, lowercase for side two.
impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        let letter = match piece.role {
            Role::Pawn => 'P',
            Role::Knight => 'N',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::Queen => 'Q',
            Role::King => 'K',
        };
        match piece.side {
            Side::One => letter,
            Side::Two => letter.to_ascii_lowercase(),
        }
    }
}

/// Castling rights still standing, per side and wing. A right lapses when
/// the king moves or the rook's corner is touched; it never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rights {
    kingside: [bool; 2],
    queenside: [bool; 2],
}

impl Rights {
    pub fn kingside(&self, side: Side) -> bool {
        self.kingside[side.index()]
    }

    pub fn queenside(&self, side: Side) -> bool {
        self.queenside[side.index()]
    }

    fn clear_kingside(&mut self, side: Side) {
        self.kingside[side.index()] = false;
    }

    fn clear_queenside(&mut self, side: Side) {
        self.queenside[side.index()] = false;
    }

    fn clear(&mut self, side: Side) {
        self.clear_kingside(side);
        self.clear_queenside(side);
    }
}

impl Default for Rights {
    fn default() -> Self {
        Self {
            kingside: [true; 2],
            queenside: [true; 2],
        }
    }
}

/// Chess with full legality checking.
///
/// Side one plays the uppercase pieces from the bottom two rows. Every
/// candidate move is simulated and discarded if it leaves the mover's own
/// king attacked, which covers pins, discovered checks, and king walks in
/// one rule. Castling demands untouched rights, a clear corridor, and no
/// attack on the squares the king crosses. Pawns reaching the far row
/// always become queens. There is no en passant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chess {
    pub grid: [[Option<Piece>; SIZE]; SIZE],
    pub rights: Rights,
}

impl Chess {
    pub fn new() -> Self {
        let mut grid = [[None; SIZE]; SIZE];
        let back = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];
        for (c, role) in back.into_iter().enumerate() {
            grid[0][c] = Some(Piece {
                side: Side::Two,
                role,
            });
            grid[SIZE - 1][c] = Some(Piece {
                side: Side::One,
                role,
            });
        }
        for c in 0..SIZE {
            grid[1][c] = Some(Piece {
                side: Side::Two,
                role: Role::Pawn,
            });
            grid[SIZE - 2][c] = Some(Piece {
                side: Side::One,
                role: Role::Pawn,
            });
        }
        Self {
            grid,
            rights: Rights::default(),
        }
    }

    const fn forward(side: Side) -> isize {
        match side {
            Side::One => -1,
            Side::Two => 1,
        }
    }

    const fn home_row(side: Side) -> usize {
        match side {
            Side::One => SIZE - 1,
            Side::Two => 0,
        }
    }

    const fn pawn_row(side: Side) -> usize {
        match side {
            Side::One => SIZE - 2,
            Side::Two => 1,
        }
    }

    const fn promotion_row(side: Side) -> usize {
        match side {
            Side::One => 0,
            Side::Two => SIZE - 1,
        }
    }

    fn offset(at: Square, dr: isize, dc: isize) -> Option<Square> {
        let (r, c) = (at.r as isize + dr, at.c as isize + dc);
        if r < 0 || r >= SIZE as isize || c < 0 || c >= SIZE as isize {
            None
        } else {
            Some(Square {
                r: r as usize,
                c: c as usize,
            })
        }
    }

    fn find_king(&self, side: Side) -> Option<Square> {
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.grid[r][c]
                    == Some(Piece {
                        side,
                        role: Role::King,
                    })
                {
                    return Some(Square { r, c });
                }
            }
        }
        None
    }

    /// Whether any piece of `by` attacks the square.
    fn attacked(&self, at: Square, by: Side) -> bool {
        for dc in [-1isize, 1] {
            if let Some(from) = Self::offset(at, -Self::forward(by), dc) {
                if self.grid[from.r][from.c]
                    == Some(Piece {
                        side: by,
                        role: Role::Pawn,
                    })
                {
                    return true;
                }
            }
        }
        for (offsets, role) in [(&KNIGHT_OFFSETS, Role::Knight), (&KING_OFFSETS, Role::King)] {
            for (dr, dc) in offsets {
                if let Some(from) = Self::offset(at, *dr, *dc) {
                    if self.grid[from.r][from.c] == Some(Piece { side: by, role }) {
                        return true;
                    }
                }
            }
        }
        for (rays, runner) in [(&ROOK_RAYS, Role::Rook), (&BISHOP_RAYS, Role::Bishop)] {
            for (dr, dc) in rays {
                let mut walk = Self::offset(at, *dr, *dc);
                while let Some(square) = walk {
                    match self.grid[square.r][square.c] {
                        None => walk = Self::offset(square, *dr, *dc),
                        Some(piece) => {
                            if piece.side == by && (piece.role == runner || piece.role == Role::Queen)
                            {
                                return true;
                            }
                            break;
                        }
                    }
                }
            }
        }
        false
    }

    fn in_check(&self, side: Side) -> bool {
        self.find_king(side)
            .map(|at| self.attacked(at, side.flip()))
            .unwrap_or(false)
    }

    fn pawn_moves(&self, from: Square, side: Side, out: &mut Vec<Move>) {
        let dir = Self::forward(side);
        if let Some(to) = Self::offset(from, dir, 0) {
            if self.grid[to.r][to.c].is_none() {
                out.push(Move::Slide { from, to });
                if from.r == Self::pawn_row(side) {
                    if let Some(far) = Self::offset(from, 2 * dir, 0) {
                        if self.grid[far.r][far.c].is_none() {
                            out.push(Move::Slide { from, to: far });
                        }
                    }
                }
            }
        }
        for dc in [-1isize, 1] {
            if let Some(to) = Self::offset(from, dir, dc) {
                if self.grid[to.r][to.c].map(|piece| piece.side) == Some(side.flip()) {
                    out.push(Move::Slide { from, to });
                }
            }
        }
    }

    fn offset_moves(&self, from: Square, side: Side, offsets: &[(isize, isize)], out: &mut Vec<Move>) {
        for (dr, dc) in offsets {
            if let Some(to) = Self::offset(from, *dr, *dc) {
                if self.grid[to.r][to.c].map(|piece| piece.side) != Some(side) {
                    out.push(Move::Slide { from, to });
                }
            }
        }
    }

    fn ray_moves(&self, from: Square, side: Side, rays: &[(isize, isize)], out: &mut Vec<Move>) {
        for (dr, dc) in rays {
            let mut walk = Self::offset(from, *dr, *dc);
            while let Some(to) = walk {
                match self.grid[to.r][to.c] {
                    None => {
                        out.push(Move::Slide { from, to });
                        walk = Self::offset(to, *dr, *dc);
                    }
                    Some(piece) => {
                        if piece.side != side {
                            out.push(Move::Slide { from, to });
                        }
                        break;
                    }
                }
            }
        }
    }

    /// Piece movement without king-safety filtering and without castling.
    fn pseudo(&self, side: Side) -> Vec<Move> {
        let mut out = Vec::new();
        for r in 0..SIZE {
            for c in 0..SIZE {
                let from = Square { r, c };
                let piece = match self.grid[r][c] {
                    Some(piece) if piece.side == side => piece,
                    _ => continue,
                };
                match piece.role {
                    Role::Pawn => self.pawn_moves(from, side, &mut out),
                    Role::Knight => self.offset_moves(from, side, &KNIGHT_OFFSETS, &mut out),
                    Role::King => self.offset_moves(from, side, &KING_OFFSETS, &mut out),
                    Role::Rook => self.ray_moves(from, side, &ROOK_RAYS, &mut out),
                    Role::Bishop => self.ray_moves(from, side, &BISHOP_RAYS, &mut out),
                    Role::Queen => {
                        self.ray_moves(from, side, &ROOK_RAYS, &mut out);
                        self.ray_moves(from, side, &BISHOP_RAYS, &mut out);
                    }
                }
            }
        }
        out
    }

    fn castles(&self, side: Side) -> Vec<Move> {
        let mut out = Vec::new();
        let row = Self::home_row(side);
        let king = Square { r: row, c: 4 };
        let own = |role| {
            Some(Piece { side, role })
        };
        if self.grid[row][4] != own(Role::King) || self.in_check(side) {
            return out;
        }
        let enemy = side.flip();
        if self.rights.kingside(side)
            && self.grid[row][7] == own(Role::Rook)
            && self.grid[row][5].is_none()
            && self.grid[row][6].is_none()
            && !self.attacked(Square { r: row, c: 5 }, enemy)
            && !self.attacked(Square { r: row, c: 6 }, enemy)
        {
            out.push(Move::Slide {
                from: king,
                to: Square { r: row, c: 6 },
            });
        }
        if self.rights.queenside(side)
            && self.grid[row][0] == own(Role::Rook)
            && self.grid[row][1].is_none()
            && self.grid[row][2].is_none()
            && self.grid[row][3].is_none()
            && !self.attacked(Square { r: row, c: 3 }, enemy)
            && !self.attacked(Square { r: row, c: 2 }, enemy)
        {
            out.push(Move::Slide {
                from: king,
                to: Square { r: row, c: 2 },
            });
        }
        out
    }

    /// Carry out a move already known to be legal.
    fn play(&self, side: Side, from: Square, to: Square) -> Chess {
        let mut next = self.clone();
        if let Some(mut piece) = next.grid[from.r][from.c] {
            if piece.role == Role::King && from.c == 4 && to.c.abs_diff(from.c) == 2 {
                let (corner, landing) = if to.c == 6 { (7, 5) } else { (0, 3) };
                next.grid[from.r][landing] = next.grid[from.r][corner].take();
            }
            if piece.role == Role::King {
                next.rights.clear(side);
            }
            if piece.role == Role::Pawn && to.r == Self::promotion_row(side) {
                piece.role = Role::Queen;
            }
            next.grid[from.r][from.c] = None;
            next.grid[to.r][to.c] = Some(piece);
        }
        let touches = |at: Square, r: usize, c: usize| at.r == r && at.c == c;
        for (row, owner) in [(SIZE - 1, Side::One), (0, Side::Two)] {
            if touches(from, row, 0) || touches(to, row, 0) {
                next.rights.clear_queenside(owner);
            }
            if touches(from, row, 7) || touches(to, row, 7) {
                next.rights.clear_kingside(owner);
            }
        }
        next
    }

    pub fn moves(&self, side: Side) -> Vec<Move> {
        let mut out: Vec<Move> = self
            .pseudo(side)
            .into_iter()
            .filter(|mv| match mv {
                Move::Slide { from, to } => !self.play(side, *from, *to).in_check(side),
                _ => false,
            })
            .collect();
        out.extend(self.castles(side));
        out
    }

    pub fn apply(&self, side: Side, mv: &Move) -> Result<Step, MoveError> {
        let (from, to) = match mv {
            Move::Slide { from, to } => (*from, *to),
            _ => return Err(MoveError::Malformed("expected a from/to pair".into())),
        };
        if from.r >= SIZE || from.c >= SIZE || to.r >= SIZE || to.c >= SIZE {
            return Err(MoveError::Illegal("square off the board".into()));
        }
        let piece = self.grid[from.r][from.c]
            .ok_or_else(|| MoveError::Illegal("no piece on that square".into()))?;
        if piece.side != side {
            return Err(MoveError::Illegal("that piece is not yours".into()));
        }
        if !self.moves(side).contains(mv) {
            let reason = if self.pseudo(side).contains(mv) {
                "that move leaves your king in check"
            } else {
                "that piece cannot move there"
            };
            return Err(MoveError::Illegal(reason.into()));
        }
        Ok(Step {
            board: Board::Chess(self.play(side, from, to)),
            next: side.flip(),
        })
    }

    /// No legal moves ends the game: checkmate if the king is attacked,
    /// stalemate otherwise.
    pub fn verdict(&self, next: Side) -> Verdict {
        if !self.moves(next).is_empty() {
            Verdict::Open
        } else if self.in_check(next) {
            Verdict::Win(next.flip())
        } else {
            Verdict::Draw
        }
    }
}

impl Default for Chess {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Chess {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<Vec<String>> = self
            .grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|piece| char::from(piece).to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();
        rows.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::IndexedRandom;

    fn bare() -> Chess {
        Chess {
            grid: [[None; SIZE]; SIZE],
            rights: Rights::default(),
        }
    }

    fn put(board: &mut Chess, r: usize, c: usize, side: Side, role: Role) {
        board.grid[r][c] = Some(Piece { side, role });
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

    fn play_out(moves: &[((usize, usize), (usize, usize))]) -> Chess {
        let mut board = Chess::new();
        let mut side = Side::One;
        for (from, to) in moves {
            let step = board.apply(side, &slide(*from, *to)).unwrap();
            board = match step.board {
                Board::Chess(next) => next,
                _ => unreachable!(),
            };
            side = step.next;
        }
        board
    }

    #[test]
    fn twenty_opening_moves() {
        let board = Chess::new();
        assert_eq!(board.moves(Side::One).len(), 20);
        assert_eq!(board.moves(Side::Two).len(), 20);
        assert!(board.moves(Side::One).contains(&slide((7, 1), (5, 2))));
    }

    #[test]
    fn blocked_pawn_cannot_advance() {
        let mut board = Chess::new();
        put(&mut board, 5, 3, Side::Two, Role::Knight);
        let moves = board.moves(Side::One);
        assert!(!moves.contains(&slide((6, 3), (5, 3))));
        assert!(!moves.contains(&slide((6, 3), (4, 3))));
    }

    #[test]
    fn pinned_rook_stays_on_the_file() {
        let mut board = bare();
        put(&mut board, 7, 4, Side::One, Role::King);
        put(&mut board, 6, 4, Side::One, Role::Rook);
        put(&mut board, 0, 4, Side::Two, Role::Rook);
        put(&mut board, 0, 0, Side::Two, Role::King);
        let moves = board.moves(Side::One);
        assert!(!moves.contains(&slide((6, 4), (6, 3))));
        assert!(moves.contains(&slide((6, 4), (5, 4))));
        assert!(moves.contains(&slide((6, 4), (0, 4))));
        let refused = board.apply(Side::One, &slide((6, 4), (6, 3)));
        assert_eq!(
            refused,
            Err(MoveError::Illegal(
                "that move leaves your king in check".into()
            ))
        );
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let board = play_out(&[
            ((6, 5), (5, 5)),
            ((1, 4), (3, 4)),
            ((6, 6), (4, 6)),
            ((0, 3), (4, 7)),
        ]);
        assert_eq!(board.verdict(Side::One), Verdict::Win(Side::Two));
    }

    #[test]
    fn bare_kings_with_queen_corner_stalemate() {
        let mut board = bare();
        put(&mut board, 0, 0, Side::Two, Role::King);
        put(&mut board, 1, 2, Side::One, Role::Queen);
        put(&mut board, 2, 1, Side::One, Role::King);
        assert!(board.moves(Side::Two).is_empty());
        assert_eq!(board.verdict(Side::Two), Verdict::Draw);
    }

    #[test]
    fn kingside_castle_moves_both_pieces() {
        let mut board = bare();
        put(&mut board, 7, 4, Side::One, Role::King);
        put(&mut board, 7, 7, Side::One, Role::Rook);
        put(&mut board, 0, 4, Side::Two, Role::King);
        assert!(board.moves(Side::One).contains(&slide((7, 4), (7, 6))));
        let step = board.apply(Side::One, &slide((7, 4), (7, 6))).unwrap();
        let next = match step.board {
            Board::Chess(next) => next,
            _ => unreachable!(),
        };
        assert_eq!(
            next.grid[7][6],
            Some(Piece {
                side: Side::One,
                role: Role::King
            })
        );
        assert_eq!(
            next.grid[7][5],
            Some(Piece {
                side: Side::One,
                role: Role::Rook
            })
        );
        assert_eq!(next.grid[7][7], None);
        assert!(!next.rights.kingside(Side::One));
        assert!(!next.rights.queenside(Side::One));
    }

    #[test]
    fn castling_through_an_attacked_square_is_refused() {
        let mut board = bare();
        put(&mut board, 7, 4, Side::One, Role::King);
        put(&mut board, 7, 7, Side::One, Role::Rook);
        put(&mut board, 0, 4, Side::Two, Role::King);
        put(&mut board, 0, 5, Side::Two, Role::Rook);
        assert!(!board.moves(Side::One).contains(&slide((7, 4), (7, 6))));
        assert!(board.apply(Side::One, &slide((7, 4), (7, 6))).is_err());
    }

    #[test]
    fn moving_the_rook_drops_one_wing_only() {
        let mut board = bare();
        put(&mut board, 7, 4, Side::One, Role::King);
        put(&mut board, 7, 7, Side::One, Role::Rook);
        put(&mut board, 7, 0, Side::One, Role::Rook);
        put(&mut board, 0, 4, Side::Two, Role::King);
        let step = board.apply(Side::One, &slide((7, 7), (4, 7))).unwrap();
        let next = match step.board {
            Board::Chess(next) => next,
            _ => unreachable!(),
        };
        assert!(!next.rights.kingside(Side::One));
        assert!(next.rights.queenside(Side::One));
    }

    #[test]
    fn promotion_always_makes_a_queen() {
        let mut board = bare();
        put(&mut board, 1, 0, Side::One, Role::Pawn);
        put(&mut board, 7, 4, Side::One, Role::King);
        put(&mut board, 0, 7, Side::Two, Role::King);
        let step = board.apply(Side::One, &slide((1, 0), (0, 0))).unwrap();
        let next = match step.board {
            Board::Chess(next) => next,
            _ => unreachable!(),
        };
        assert_eq!(
            next.grid[0][0],
            Some(Piece {
                side: Side::One,
                role: Role::Queen
            })
        );
    }

    #[test]
    fn no_legal_move_ever_leaves_the_mover_in_check() {
        let mut rng = rand::rng();
        let mut board = Chess::new();
        let mut side = Side::One;
        for _ in 0..60 {
            let moves = board.moves(side);
            let mv = match moves.choose(&mut rng) {
                Some(mv) => *mv,
                None => break,
            };
            let step = board.apply(side, &mv).unwrap();
            board = match step.board {
                Board::Chess(next) => next,
                _ => unreachable!(),
            };
            assert!(!board.in_check(side), "{} left the mover in check", mv);
            side = step.next;
        }
    }
}

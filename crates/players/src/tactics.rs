use parlor_cards::Rank;
use parlor_cards::Ranking;
use parlor_rules::chess;
use parlor_rules::Board;
use parlor_rules::Chess;
use parlor_rules::Move;
use parlor_rules::Poker;
use parlor_rules::Side;
use parlor_rules::Verdict;

/// Deny the opponent an immediate four-in-a-row by taking their winning
/// column. The column game is the only one where sitting on the square
/// the opponent needs is this cheap to read.
pub fn block(board: &Board, side: Side, legal: &[Move]) -> Option<Move> {
    if !matches!(board, Board::Connect(_)) {
        return None;
    }
    let rival = side.flip();
    let threat = board.moves(rival).into_iter().find(|mv| {
        board
            .apply(rival, mv)
            .map(|step| step.board.verdict(step.next) == Verdict::Win(rival))
            .unwrap_or(false)
    })?;
    legal.contains(&threat).then_some(threat)
}

/// The per-game lean hard opponents take when nothing decisive is on.
pub fn prefer(board: &Board, side: Side, legal: &[Move]) -> Option<Move> {
    match board {
        Board::Connect(_) => legal.contains(&Move::Drop(3)).then_some(Move::Drop(3)),
        Board::Checkers(_) => legal.iter().find(|mv| is_jump(mv)).copied(),
        Board::Chess(board) => best_capture(board, legal),
        Board::Mancala(_) => legal
            .iter()
            .find(|mv| grants_another_turn(board, side, mv))
            .copied(),
        Board::Poker(board) => betting_line(board, side, legal),
        Board::Blackjack(_) => None,
    }
}

fn is_jump(mv: &Move) -> bool {
    matches!(mv, Move::Slide { from, to } if to.r.abs_diff(from.r) == 2)
}

fn grants_another_turn(board: &Board, side: Side, mv: &Move) -> bool {
    board
        .apply(side, mv)
        .map(|step| step.next == side)
        .unwrap_or(false)
}

fn worth(role: chess::Role) -> u8 {
    match role {
        chess::Role::Pawn => 1,
        chess::Role::Knight | chess::Role::Bishop => 3,
        chess::Role::Rook => 5,
        chess::Role::Queen => 9,
        chess::Role::King => 0,
    }
}

/// The capture that takes the most material, if any capture exists.
fn best_capture(board: &Chess, legal: &[Move]) -> Option<Move> {
    legal
        .iter()
        .filter_map(|mv| match mv {
            Move::Slide { to, .. } => board.grid[to.r][to.c].map(|piece| (worth(piece.role), *mv)),
            _ => None,
        })
        .max_by_key(|(value, _)| *value)
        .map(|(_, mv)| mv)
}

/// Strength-led poker line: build the pot with two pair or better, see
/// cards with a made pair, take free cards, fold junk into a bet.
fn betting_line(board: &Poker, side: Side, legal: &[Move]) -> Option<Move> {
    let (strong, decent) = appetite(board, side);
    let pick = if strong && legal.contains(&Move::Bet) {
        Move::Bet
    } else if legal.contains(&Move::Check) {
        Move::Check
    } else if (strong || decent) && legal.contains(&Move::Call) {
        Move::Call
    } else {
        Move::Fold
    };
    Some(pick)
}

fn appetite(board: &Poker, side: Side) -> (bool, bool) {
    if board.community.is_empty() {
        let hole = board.hole(side);
        let paired = hole.len() == 2 && hole[0].rank() == hole[1].rank();
        let big = hole.iter().all(|card| card.rank() >= Rank::Ten);
        // heads up, any two cards are worth seeing a flop
        (paired || big, true)
    } else {
        let value = board.strength(side).value();
        let strong = !matches!(value, Ranking::HighCard(_) | Ranking::OnePair(_));
        let decent = strong || matches!(value, Ranking::OnePair(_));
        (strong, decent)
    }
}

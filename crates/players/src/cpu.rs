use crate::tactics;
use parlor_rules::Board;
use parlor_rules::Difficulty;
use parlor_rules::Move;
use parlor_rules::Side;
use parlor_rules::Verdict;
use rand::seq::IndexedRandom;

/// A computer opponent for any of the six games.
pub struct Cpu {
    difficulty: Difficulty,
}

impl Cpu {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Pick a move, or None when the side has nothing to play.
    ///
    /// Whatever comes back is drawn from the board's own legal moves, so
    /// the caller can apply it without a second validation pass.
    pub fn choose(&self, board: &Board, side: Side) -> Option<Move> {
        let ref mut rng = rand::rng();
        let legal = board.moves(side);
        if legal.is_empty() {
            return None;
        }
        match self.difficulty {
            Difficulty::Easy => legal.choose(rng).copied(),
            Difficulty::Medium => {
                Self::winning(board, side, &legal).or_else(|| legal.choose(rng).copied())
            }
            Difficulty::Hard => Self::winning(board, side, &legal)
                .or_else(|| tactics::block(board, side, &legal))
                .or_else(|| tactics::prefer(board, side, &legal))
                .or_else(|| legal.choose(rng).copied()),
        }
    }

    /// A move that ends the game in this side's favor right now.
    fn winning(board: &Board, side: Side, legal: &[Move]) -> Option<Move> {
        legal
            .iter()
            .find(|mv| {
                board
                    .apply(side, mv)
                    .map(|step| step.board.verdict(step.next) == Verdict::Win(side))
                    .unwrap_or(false)
            })
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_cards::Card;
    use parlor_rules::poker::Street;
    use parlor_rules::Connect;
    use parlor_rules::GameKind;
    use parlor_rules::Poker;

    fn connect_with(tokens: &[(usize, usize, Side)]) -> Board {
        let mut board = Connect::new();
        for (r, c, side) in tokens {
            board.grid[*r][*c] = Some(*side);
        }
        Board::Connect(board)
    }

    fn cards(spec: &str) -> Vec<Card> {
        spec.split_whitespace().map(Card::from).collect()
    }

    #[test]
    fn every_difficulty_stays_legal_on_every_game() {
        for kind in GameKind::all() {
            let board = Board::new(kind);
            let legal = board.moves(Side::Two);
            for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                match Cpu::new(difficulty).choose(&board, Side::Two) {
                    Some(mv) => assert!(legal.contains(&mv), "{} gave {}", kind, mv),
                    None => assert!(legal.is_empty(), "{} passed with moves left", kind),
                }
            }
        }
    }

    #[test]
    fn easy_is_random_but_legal() {
        let board = Board::new(GameKind::Connect);
        let cpu = Cpu::new(Difficulty::Easy);
        for _ in 0..50 {
            let mv = cpu.choose(&board, Side::One).unwrap();
            assert!(board.moves(Side::One).contains(&mv));
        }
    }

    #[test]
    fn medium_takes_the_immediate_win() {
        let board = connect_with(&[
            (5, 6, Side::Two),
            (4, 6, Side::Two),
            (3, 6, Side::Two),
            (5, 0, Side::One),
            (5, 1, Side::One),
        ]);
        let mv = Cpu::new(Difficulty::Medium).choose(&board, Side::Two);
        assert_eq!(mv, Some(Move::Drop(6)));
    }

    #[test]
    fn hard_blocks_the_handed_over_win() {
        let board = connect_with(&[
            (5, 0, Side::One),
            (4, 0, Side::One),
            (3, 0, Side::One),
            (5, 3, Side::Two),
        ]);
        let mv = Cpu::new(Difficulty::Hard).choose(&board, Side::Two);
        assert_eq!(mv, Some(Move::Drop(0)));
    }

    #[test]
    fn hard_wins_before_it_blocks() {
        // both sides threaten a vertical four; hard must finish its own
        let board = connect_with(&[
            (5, 0, Side::One),
            (4, 0, Side::One),
            (3, 0, Side::One),
            (5, 6, Side::Two),
            (4, 6, Side::Two),
            (3, 6, Side::Two),
        ]);
        let mv = Cpu::new(Difficulty::Hard).choose(&board, Side::Two);
        assert_eq!(mv, Some(Move::Drop(6)));
    }

    #[test]
    fn medium_calls_the_winning_river() {
        let board = Board::Poker(Poker {
            player_hand: cards("9s 8d"),
            cpu_hand: cards("Ah Kh"),
            community: cards("2h 7h Th 6c 5d"),
            player_chips: 900,
            cpu_chips: 950,
            pot: 100,
            current_bet: 50,
            street: Street::River,
            turn: Side::Two,
            folded: None,
        });
        let mv = Cpu::new(Difficulty::Medium).choose(&board, Side::Two);
        assert_eq!(mv, Some(Move::Call));
    }

    #[test]
    fn dealer_seat_has_nothing_to_choose() {
        let board = Board::new(GameKind::Blackjack);
        assert_eq!(Cpu::new(Difficulty::Hard).choose(&board, Side::Two), None);
    }
}

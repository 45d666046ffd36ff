//! Uniform random move choice

use rand::Rng;

use crate::board::{Board, Color};
use crate::rules::{generate_moves, Move};

/// Pick a legal move uniformly at random.
///
/// `exclude` removes one move from the candidates unless it is the only
/// one left, in which case the full list is used. Returns `None` when
/// `color` has no legal move.
pub fn random_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    exclude: Option<&Move>,
    rng: &mut R,
) -> Option<Move> {
    let moves = generate_moves(board, color);
    if moves.is_empty() {
        return None;
    }

    let filtered: Vec<Move> = match exclude {
        Some(ex) => moves
            .iter()
            .filter(|m| !(m.from == ex.from && m.to == ex.to))
            .copied()
            .collect(),
        None => Vec::new(),
    };
    let pool = if filtered.is_empty() { &moves } else { &filtered };

    Some(pool[rng.random_range(0..pool.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{initial_board, Pos};
    use crate::rules::MoveKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_move_is_legal() {
        let board = initial_board();
        let legal = generate_moves(&board, Color::Blue);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let mv = random_move(&board, Color::Blue, None, &mut rng);
            assert!(mv.is_some_and(|m| legal.contains(&m)));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = initial_board();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                random_move(&board, Color::Red, None, &mut a),
                random_move(&board, Color::Red, None, &mut b)
            );
        }
    }

    #[test]
    fn test_exclusion_falls_back_to_only_move() {
        let mut board = Board::new();
        board.push(Pos::new(0, 0), Color::Red);
        board.push(Pos::new(0, 1), Color::Blue);
        // Only Down onto the empty a2 is legal
        let only = Move::new(Pos::new(0, 0), Pos::new(1, 0), MoveKind::StepDown);
        assert_eq!(generate_moves(&board, Color::Red), vec![only]);

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random_move(&board, Color::Red, Some(&only), &mut rng), Some(only));
    }

    #[test]
    fn test_exclusion_is_honored() {
        let board = initial_board();
        let excluded = generate_moves(&board, Color::Red)[0];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let mv = random_move(&board, Color::Red, Some(&excluded), &mut rng);
            assert_ne!(mv, Some(excluded));
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_move(&board, Color::Red, None, &mut rng), None);
    }
}

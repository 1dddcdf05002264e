//! Property tests for grid clearing, movement and the piece queue.

use proptest::prelude::*;

use blockfall::core::{ActivePiece, Grid, PieceQueue, RandomSource};
use blockfall::types::{ShapeKind, QUEUE_SIZE, SHAPE_COUNT};

/// Rows that are either completely full or random (possibly full by chance).
fn grid_rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (3usize..9, 4usize..14).prop_flat_map(|(width, height)| {
        let row = prop_oneof![
            prop::collection::vec(1u8..=SHAPE_COUNT as u8, width),
            prop::collection::vec(0u8..=SHAPE_COUNT as u8, width),
        ];
        prop::collection::vec(row, height)
    })
}

fn shape_kind() -> impl Strategy<Value = ShapeKind> {
    (0..SHAPE_COUNT).prop_map(|i| ShapeKind::ALL[i])
}

proptest! {
    #[test]
    fn clearing_keeps_dimensions_and_survivor_order(rows in grid_rows()) {
        let width = rows[0].len();
        let mut grid = Grid::from_rows(&rows);
        let survivors: Vec<Vec<u8>> = rows
            .iter()
            .filter(|r| r.iter().any(|&v| v == 0))
            .cloned()
            .collect();

        let cleared = grid.clear_full_rows();
        let after = grid.to_rows();

        prop_assert_eq!(grid.width(), width);
        prop_assert_eq!(after.len(), rows.len());
        prop_assert_eq!(cleared, rows.len() - survivors.len());
        for top in &after[..cleared] {
            prop_assert!(top.iter().all(|&v| v == 0));
        }
        prop_assert_eq!(&after[cleared..], &survivors[..]);
    }

    #[test]
    fn clearing_twice_is_a_noop(rows in grid_rows()) {
        let mut grid = Grid::from_rows(&rows);
        grid.clear_full_rows();
        let once = grid.clone();
        prop_assert_eq!(grid.clear_full_rows(), 0);
        prop_assert_eq!(grid, once);
    }

    #[test]
    fn rejected_moves_do_not_mutate(
        rows in grid_rows(),
        kind in shape_kind(),
        x in -2i32..10,
        y in -4i32..14,
        dx in -2i32..=2,
        dy in -1i32..=3,
    ) {
        let grid = Grid::from_rows(&rows);
        let mut piece = ActivePiece::new(kind, x, y);
        let before = piece.clone();
        if piece.try_move(&grid, dx, dy) {
            prop_assert_eq!(piece.x(), before.x() + dx);
            prop_assert_eq!(piece.y(), before.y() + dy);
            prop_assert!(piece.fits(&grid, 0, 0));
        } else {
            prop_assert_eq!(piece, before);
        }
    }

    #[test]
    fn square_rotation_is_identity(turns in 0usize..32, x in 0i32..8, y in 0i32..16) {
        let mut piece = ActivePiece::new(ShapeKind::O, x, y);
        let before = piece.clone();
        for _ in 0..turns {
            piece.rotate();
        }
        prop_assert_eq!(piece, before);
    }

    #[test]
    fn queue_always_holds_four(seed in any::<u64>(), advances in 0usize..64) {
        let mut rng = RandomSource::new(seed);
        let mut queue = PieceQueue::new(&mut rng);
        prop_assert_eq!(queue.len(), QUEUE_SIZE);
        for _ in 0..advances {
            let expected = queue.front();
            prop_assert_eq!(queue.advance(&mut rng), expected);
            prop_assert_eq!(queue.peek_all().count(), QUEUE_SIZE);
        }
    }
}

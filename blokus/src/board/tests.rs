use super::{Board, Cell, RuleViolation};
use crate::{moves::Move, pieces::PieceType, Colour};

fn mv(colour: Colour, piece: PieceType, cells: &[(i32, i32)]) -> Move {
    Move::new(
        colour,
        piece,
        cells.iter().map(|&(r, c)| Cell::new(r, c)).collect(),
    )
    .unwrap()
}

#[test]
fn first_move_must_reach_a_board_corner() {
    let board = Board::new(20);
    assert!(!board.is_legal(&mv(Colour::Red, PieceType::I1, &[(5, 5)])));
    assert_eq!(
        board.check_move(&mv(Colour::Red, PieceType::I1, &[(5, 5)])),
        vec![RuleViolation::MissingCornerContact(Colour::Red)]
    );
    assert!(board.is_legal(&mv(Colour::Red, PieceType::I1, &[(0, 0)])));
}

#[test]
fn every_first_move_covers_a_board_corner() {
    let mut board = Board::new(20);
    let corners = board.board_corners();
    let moves = board.legal_moves(Colour::Green).clone();
    assert!(!moves.is_empty());
    for m in &moves {
        assert!(
            m.cells().iter().any(|cell| corners.contains(cell)),
            "{m} covers no corner"
        );
    }
}

#[test]
fn single_cell_piece_has_exactly_four_openings() {
    let mut board = Board::new(20);
    let openings = board
        .legal_moves(Colour::Red)
        .iter()
        .filter(|m| m.piece() == PieceType::I1)
        .count();
    assert_eq!(openings, 4);
}

#[test]
fn bounds_failure_stops_the_check() {
    let board = Board::new(20);
    let out = mv(Colour::Red, PieceType::I2, &[(0, 0), (0, -1)]);
    let violations = board.check_move(&out);
    assert_eq!(violations, vec![RuleViolation::OutOfBounds(Cell::new(0, -1))]);
}

#[test]
fn availability_is_checked_before_overlap() {
    let mut board = Board::new(20);
    let opening = mv(Colour::Red, PieceType::I1, &[(0, 0)]);
    board.play_move(opening.clone()).unwrap();
    assert_eq!(
        board.check_move(&opening),
        vec![RuleViolation::PieceUnavailable {
            colour: Colour::Red,
            piece: PieceType::I1,
        }]
    );
}

#[test]
fn overlap_is_rejected_for_any_colour() {
    let mut board = Board::new(20);
    board
        .play_move(mv(Colour::Red, PieceType::I1, &[(0, 0)]))
        .unwrap();
    assert_eq!(
        board.check_move(&mv(Colour::Green, PieceType::I1, &[(0, 0)])),
        vec![RuleViolation::Overlap(Cell::new(0, 0))]
    );
}

#[test]
fn edge_contact_only_binds_the_same_colour() {
    let mut board = Board::new(20);
    board
        .play_move(mv(Colour::Red, PieceType::I1, &[(0, 0)]))
        .unwrap();

    let red_flush = mv(Colour::Red, PieceType::I2, &[(0, 1), (0, 2)]);
    assert_eq!(
        board.check_move(&red_flush),
        vec![RuleViolation::EdgeContact(Cell::new(0, 1), Colour::Red)]
    );

    // The same cells are fine for green as far as edges go; what green is
    // missing is corner contact of its own.
    let green_flush = mv(Colour::Green, PieceType::I2, &[(0, 1), (0, 2)]);
    assert_eq!(
        board.check_move(&green_flush),
        vec![RuleViolation::MissingCornerContact(Colour::Green)]
    );
}

#[test]
fn diagonal_contact_enables_follow_up_moves() {
    let mut board = Board::new(20);
    board
        .play_move(mv(Colour::Red, PieceType::I1, &[(0, 0)]))
        .unwrap();
    let follow_up = mv(Colour::Red, PieceType::V3, &[(1, 1), (2, 1), (2, 2)]);
    assert!(board.is_legal(&follow_up));
}

#[test]
fn rejected_move_leaves_the_board_untouched() {
    let mut board = Board::new(20);
    let before = board.legal_moves(Colour::Red).clone();

    let err = board
        .play_move(mv(Colour::Red, PieceType::I1, &[(5, 5)]))
        .unwrap_err();
    assert_eq!(
        err.violations(),
        [RuleViolation::MissingCornerContact(Colour::Red)]
    );
    assert_eq!(err.attempted().piece(), PieceType::I1);

    assert_eq!(board.score(Colour::Red), 0);
    assert!(board.inventory(Colour::Red).contains(PieceType::I1));
    assert!(board.history().is_empty());
    assert_eq!(board.legal_moves(Colour::Red), &before);
}

#[test]
fn playing_updates_grid_inventory_and_history() {
    let mut board = Board::new(20);
    let opening = mv(Colour::Blue, PieceType::V3, &[(0, 19), (1, 19), (1, 18)]);
    board.play_move(opening.clone()).unwrap();

    assert_eq!(board.score(Colour::Blue), 3);
    assert_eq!(board.colour_at(Cell::new(0, 19)), Some(Colour::Blue));
    assert_eq!(board.colour_at(Cell::new(1, 18)), Some(Colour::Blue));
    assert!(!board.inventory(Colour::Blue).contains(PieceType::V3));
    assert_eq!(board.inventory(Colour::Blue).len(), 20);
    assert_eq!(board.history(), [opening]);

    let snapshot = board.grid_snapshot();
    assert_eq!(snapshot.len(), 400);
    assert_eq!(snapshot[19], Some(Colour::Blue));
    assert_eq!(snapshot[0], None);
}

#[test]
fn legal_moves_is_idempotent_between_plays() {
    let mut board = Board::new(20);
    let first = board.legal_moves(Colour::Yellow).clone();
    let second = board.legal_moves(Colour::Yellow).clone();
    assert_eq!(first, second);
}

#[test]
fn opening_exclusions_after_a_corner_play() {
    let mut board = Board::new(20);
    board
        .play_move(mv(Colour::Red, PieceType::I1, &[(0, 0)]))
        .unwrap();

    let moves = board.legal_moves(Colour::Red).clone();
    assert!(!moves.is_empty());
    for blocked in [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)] {
        assert!(
            moves.iter().all(|m| !m.contains(blocked)),
            "a move still uses {blocked}"
        );
    }
    assert!(moves.iter().any(|m| m.contains(Cell::new(1, 1))));
}

#[test]
fn corner_predicates_treat_all_four_borders_alike() {
    let mut board = Board::new(20);
    let seats = [
        (Colour::Red, Cell::new(0, 0), Cell::new(1, 1)),
        (Colour::Green, Cell::new(0, 19), Cell::new(1, 18)),
        (Colour::Yellow, Cell::new(19, 0), Cell::new(18, 1)),
        (Colour::Blue, Cell::new(19, 19), Cell::new(18, 18)),
    ];
    for (colour, corner, inward) in seats {
        board
            .play_move(mv(colour, PieceType::I1, &[(corner.row, corner.col)]))
            .unwrap();
        assert!(board.is_corner_of(corner, colour));
        assert_eq!(board.corner_cells(colour), vec![corner]);
        assert_eq!(board.valid_origins_from_corner(corner, colour), vec![inward]);
    }
}

#[test]
fn caches_stay_in_step_with_brute_force_after_plays() {
    let mut board = Board::new(14);
    // Touch every cache so the maintenance engine has to keep them all alive.
    for &colour in &[Colour::Red, Colour::Green, Colour::Yellow, Colour::Blue] {
        board.legal_moves(colour);
    }

    board
        .play_move(mv(Colour::Red, PieceType::V3, &[(0, 0), (1, 0), (1, 1)]))
        .unwrap();
    board
        .play_move(mv(Colour::Green, PieceType::I2, &[(0, 13), (0, 12)]))
        .unwrap();
    board
        .play_move(mv(Colour::Red, PieceType::I2, &[(2, 2), (2, 3)]))
        .unwrap();

    for &colour in &[Colour::Red, Colour::Green, Colour::Yellow, Colour::Blue] {
        let brute = board.enumerate_moves(colour);
        assert_eq!(board.legal_moves(colour), &brute, "{colour} cache diverged");
    }
}

#[test]
fn with_move_applied_does_not_touch_the_original() {
    let board = Board::new(20);
    let opening = mv(Colour::Red, PieceType::O, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    let future = board.with_move_applied(&opening);

    assert_eq!(future.colour_at(Cell::new(1, 1)), Some(Colour::Red));
    assert!(!future.inventory(Colour::Red).contains(PieceType::O));
    assert_eq!(future.score(Colour::Red), 4);

    assert_eq!(board.colour_at(Cell::new(1, 1)), None);
    assert!(board.inventory(Colour::Red).contains(PieceType::O));
    assert_eq!(board.score(Colour::Red), 0);
}

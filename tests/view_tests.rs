use seagrid::board::{Board, Coordinate, Phase, TileView, ViewMode};
use seagrid::ships::{Orientation, ShipKind};

/// Two-ship board used by most of the view tests: a destroyer across the top
/// and a cruiser down the middle.
fn two_ship_board() -> Board {
    let mut board = Board::with_ships(10, 10, &[ShipKind::Destroyer, ShipKind::Cruiser]);
    board
        .place_ship(ShipKind::Destroyer, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(ShipKind::Cruiser, Coordinate::new(4, 4), Orientation::Vertical)
        .unwrap();
    assert_eq!(board.phase(), Phase::Active);
    board
}

#[test]
fn fresh_board_is_all_sea() {
    let board = Board::new(10, 10);
    for mode in [ViewMode::Owner, ViewMode::Opponent] {
        for row in board.iter_views(mode) {
            for view in row {
                assert_eq!(view, TileView::Sea);
            }
        }
    }
}

#[test]
fn owner_sees_ships_opponent_sees_sea() {
    let board = two_ship_board();
    for &coord in board.ship(ShipKind::Destroyer).unwrap().cells() {
        assert_eq!(board.tile_view(coord, ViewMode::Owner).unwrap(), TileView::Ship);
        assert_eq!(
            board.tile_view(coord, ViewMode::Opponent).unwrap(),
            TileView::Sea
        );
    }
}

#[test]
fn miss_is_visible_to_both_views() {
    let mut board = two_ship_board();
    let coord = Coordinate::new(9, 9);
    board.shoot(coord).unwrap();
    assert_eq!(board.tile_view(coord, ViewMode::Owner).unwrap(), TileView::Miss);
    assert_eq!(
        board.tile_view(coord, ViewMode::Opponent).unwrap(),
        TileView::Miss
    );
}

#[test]
fn hit_is_visible_to_both_views() {
    let mut board = two_ship_board();
    let coord = Coordinate::new(4, 4);
    board.shoot(coord).unwrap();
    assert_eq!(board.tile_view(coord, ViewMode::Owner).unwrap(), TileView::Hit);
    assert_eq!(board.tile_view(coord, ViewMode::Opponent).unwrap(), TileView::Hit);
    // The rest of the cruiser is still hidden from the opponent.
    assert_eq!(
        board
            .tile_view(Coordinate::new(5, 4), ViewMode::Opponent)
            .unwrap(),
        TileView::Sea
    );
}

#[test]
fn sunk_ship_cells_read_sunk_in_both_views() {
    let mut board = two_ship_board();
    let cells = board.ship(ShipKind::Destroyer).unwrap().cells().to_vec();
    for &coord in &cells {
        board.shoot(coord).unwrap();
    }
    assert!(board.ship(ShipKind::Destroyer).unwrap().sunk());
    for &coord in &cells {
        assert_eq!(board.tile_view(coord, ViewMode::Owner).unwrap(), TileView::Sunk);
        assert_eq!(
            board.tile_view(coord, ViewMode::Opponent).unwrap(),
            TileView::Sunk
        );
    }

    // A hit on a still-afloat ship keeps reading as a plain hit.
    let coord = Coordinate::new(4, 4);
    board.shoot(coord).unwrap();
    assert_eq!(board.tile_view(coord, ViewMode::Owner).unwrap(), TileView::Hit);
}

#[test]
fn iter_views_matches_tile_view() {
    let mut board = two_ship_board();
    board.shoot(Coordinate::new(0, 0)).unwrap();
    board.shoot(Coordinate::new(7, 7)).unwrap();

    for mode in [ViewMode::Owner, ViewMode::Opponent] {
        for (row, coords) in board.iter_views(mode).zip(board.dimensions().iter_coordinates()) {
            for (view, coord) in row.zip(coords) {
                assert_eq!(view, board.tile_view(coord, mode).unwrap());
            }
        }
    }
}

#[test]
fn view_rejects_out_of_bounds() {
    let board = Board::new(10, 10);
    let coord = Coordinate::new(10, 10);
    let err = board.tile_view(coord, ViewMode::Owner).unwrap_err();
    assert_eq!(err.coord(), coord);
}

use std::collections::HashSet;

use seagrid::board::{Board, Coordinate};
use seagrid::ships::{Orientation, ShipKind};

#[test]
fn kind_lengths_match_the_classic_roster() {
    assert_eq!(ShipKind::Carrier.len(), 5);
    assert_eq!(ShipKind::Battleship.len(), 4);
    assert_eq!(ShipKind::Cruiser.len(), 3);
    assert_eq!(ShipKind::Submarine.len(), 3);
    assert_eq!(ShipKind::Destroyer.len(), 2);

    let kinds: HashSet<ShipKind> = ShipKind::ALL.into_iter().collect();
    assert_eq!(kinds.len(), ShipKind::ALL.len());
}

#[test]
fn horizontal_runs_extend_along_columns() {
    let mut board = Board::with_ships(10, 10, &[ShipKind::Cruiser]);
    board
        .place_ship(ShipKind::Cruiser, Coordinate::new(2, 3), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.ship(ShipKind::Cruiser).unwrap().cells(),
        &[
            Coordinate::new(2, 3),
            Coordinate::new(2, 4),
            Coordinate::new(2, 5)
        ]
    );
}

#[test]
fn vertical_runs_extend_along_rows() {
    let mut board = Board::with_ships(10, 10, &[ShipKind::Battleship]);
    board
        .place_ship(ShipKind::Battleship, Coordinate::new(6, 1), Orientation::Vertical)
        .unwrap();
    assert_eq!(
        board.ship(ShipKind::Battleship).unwrap().cells(),
        &[
            Coordinate::new(6, 1),
            Coordinate::new(7, 1),
            Coordinate::new(8, 1),
            Coordinate::new(9, 1)
        ]
    );
}

#[test]
fn ship_ref_tracks_damage() {
    let mut board = Board::with_ships(10, 10, &[ShipKind::Cruiser]);
    let ship = board.ship(ShipKind::Cruiser).unwrap();
    assert!(!ship.placed());
    assert_eq!(ship.len(), 3);
    assert!(ship.cells().is_empty());

    board
        .place_ship(ShipKind::Cruiser, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    let ship = board.ship(ShipKind::Cruiser).unwrap();
    assert!(ship.placed());
    assert_eq!(ship.hits(), 0);
    assert!(!ship.sunk());

    board.shoot(Coordinate::new(0, 1)).unwrap();
    let ship = board.ship(ShipKind::Cruiser).unwrap();
    assert_eq!(ship.hits(), 1);
    assert!(!ship.sunk());

    board.shoot(Coordinate::new(0, 0)).unwrap();
    board.shoot(Coordinate::new(0, 2)).unwrap();
    let ship = board.ship(ShipKind::Cruiser).unwrap();
    assert_eq!(ship.hits(), 3);
    assert!(ship.sunk());
}

#[test]
fn iter_ships_covers_the_roster() {
    let board = Board::new(10, 10);
    let kinds: HashSet<ShipKind> = board.iter_ships().map(|ship| ship.kind()).collect();
    let expected: HashSet<ShipKind> = ShipKind::ALL.into_iter().collect();
    assert_eq!(kinds, expected);
    assert!(board.iter_ships().all(|ship| !ship.placed()));
}

#[test]
fn ship_lookup_outside_roster_is_none() {
    let board = Board::with_ships(10, 10, &[ShipKind::Destroyer]);
    assert!(board.ship(ShipKind::Carrier).is_none());
    assert!(board.ship(ShipKind::Destroyer).is_some());
}

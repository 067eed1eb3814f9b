// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Types that make up the game board.

use std::collections::HashMap;

use tracing::debug;

use crate::ships::{self, Orientation, Ship, ShipKind};

use self::grid::Grid;
pub use self::{
    dimensions::{Coordinate, Dimensions},
    errors::{CannotPlaceReason, CannotShootReason, OutOfBounds, PlaceError, ShotError},
    view::{TileView, ViewMode},
};

mod dimensions;
mod errors;
mod grid;
mod view;

/// Lifecycle phase of a [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Ships are still being placed. Shots are rejected.
    Setup,
    /// Every roster ship is placed; shots are resolved.
    Active,
    /// Every ship has been sunk. The board is terminal.
    Finished,
}

/// Result of a resolved shot on a player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the given ship, but did not sink it.
    Hit(ShipKind),
    /// The shot sank the given ship, but the player has more ships left.
    Sunk(ShipKind),
    /// The shot sank the given ship and it was the player's last: the game
    /// is over.
    Defeated(ShipKind),
    /// The cell was already shot. Nothing changed.
    Repeat,
}

impl ShotOutcome {
    /// Get the kind of the ship that was hit, if any.
    pub fn ship(&self) -> Option<ShipKind> {
        match self {
            ShotOutcome::Miss | ShotOutcome::Repeat => None,
            ShotOutcome::Hit(kind) | ShotOutcome::Sunk(kind) | ShotOutcome::Defeated(kind) => {
                Some(*kind)
            }
        }
    }
}

/// Handle to a roster ship that allows reading its status without touching
/// the board's internals.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    /// Kind of the ship.
    kind: ShipKind,

    /// Occupancy record, present once the ship has been placed.
    ship: Option<&'a Ship>,
}

impl<'a> ShipRef<'a> {
    /// Get the kind of the ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Get the length of the ship.
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    /// Check if this ship has been placed yet.
    pub fn placed(&self) -> bool {
        self.ship.is_some()
    }

    /// Number of this ship's cells that have been hit. Zero until placed.
    pub fn hits(&self) -> usize {
        self.ship.map_or(0, Ship::hits)
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.ship.map_or(false, Ship::sunk)
    }

    /// Get the cells this ship occupies, in placement order. Empty until
    /// placed.
    pub fn cells(&self) -> &'a [Coordinate] {
        self.ship.map_or(&[], Ship::cells)
    }
}

/// Represents a single player's board: the grid of cells, the ships placed
/// on it, and the phase of the match.
///
/// A board is constructed in [`Phase::Setup`] with a fixed roster of
/// expected ships. Placing the last roster ship moves it to
/// [`Phase::Active`]; sinking the last ship moves it to [`Phase::Finished`].
/// The two mutating operations, [`place_ship`][Board::place_ship] and
/// [`shoot`][Board::shoot], take `&mut self`, so the single-writer
/// turn-based discipline is enforced by the borrow checker rather than any
/// internal locking.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Mapping of every roster kind to its occupancy record, `None` until
    /// the ship is placed.
    ships: HashMap<ShipKind, Option<Ship>>,

    /// Number of placed ships not yet sunk.
    afloat: usize,

    /// Current lifecycle phase.
    phase: Phase,
}

impl Board {
    /// Construct a board expecting the standard five-ship roster, in
    /// [`Phase::Setup`].
    /// Panics if `width * height` exceeds `usize::MAX` or if `width` or
    /// `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_ships(width, height, &ShipKind::ALL)
    }

    /// Construct a standard-roster board, returning `None` instead of
    /// panicking on invalid dimensions.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        Dimensions::try_new(width, height)
            .map(|dim| Self::with_roster(dim, &ShipKind::ALL))
    }

    /// Construct a board expecting exactly the given roster of ships, in
    /// [`Phase::Setup`].
    /// Panics if the roster is empty or contains a duplicate kind, or if the
    /// dimensions are invalid (see [`Board::new`]).
    pub fn with_ships(width: usize, height: usize, kinds: &[ShipKind]) -> Self {
        Self::with_roster(Dimensions::new(width, height), kinds)
    }

    fn with_roster(dim: Dimensions, kinds: &[ShipKind]) -> Self {
        assert!(!kinds.is_empty(), "board roster must not be empty");
        let mut ships = HashMap::with_capacity(kinds.len());
        for &kind in kinds {
            if ships.insert(kind, None).is_some() {
                panic!("duplicate ship in board roster: {:?}", kind);
            }
        }
        Self {
            grid: Grid::new(dim),
            ships,
            afloat: 0,
            phase: Phase::Setup,
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dim
    }

    /// Get the width of this board.
    pub fn width(&self) -> usize {
        self.grid.dim.width()
    }

    /// Get the height of this board.
    pub fn height(&self) -> usize {
        self.grid.dim.height()
    }

    /// Get the current lifecycle phase of this board.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of placed ships not yet sunk. Reaches the roster size when
    /// setup completes and zero when the game is over.
    pub fn ships_remaining(&self) -> usize {
        self.afloat
    }

    /// Get the read handle for the given kind, if it is part of this
    /// board's roster.
    pub fn ship(&self, kind: ShipKind) -> Option<ShipRef> {
        self.ships.get(&kind).map(|ship| ShipRef {
            kind,
            ship: ship.as_ref(),
        })
    }

    /// Get an iterator over read handles for every ship in the roster.
    pub fn iter_ships(&self) -> impl Iterator<Item = ShipRef> {
        self.ships.iter().map(|(&kind, ship)| ShipRef {
            kind,
            ship: ship.as_ref(),
        })
    }

    /// Place a ship on the board, occupying the run of cells computed from
    /// the anchor, orientation, and the kind's length.
    ///
    /// Placement is atomic: every cell of the run is validated before any
    /// cell is marked, so a failed call leaves the board exactly as it was.
    /// Placing the final roster ship moves the board to [`Phase::Active`].
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        let fail = |reason| Err(PlaceError::new(reason, kind, anchor, orientation));
        match self.ships.get(&kind) {
            None => return fail(CannotPlaceReason::UnknownShip),
            Some(Some(_)) => return fail(CannotPlaceReason::AlreadyPlaced),
            Some(None) => {}
        }
        let cells = match ships::projected_cells(kind, anchor, orientation) {
            Some(cells) => cells,
            None => return fail(CannotPlaceReason::OutOfBounds),
        };
        // Validate every cell before marking any, so a rejected placement
        // cannot leave the grid partially marked.
        for &coord in &cells {
            match self.grid.get(coord) {
                None => return fail(CannotPlaceReason::OutOfBounds),
                Some(cell) if cell.ship.is_some() => return fail(CannotPlaceReason::Occupied),
                Some(_) => {}
            }
        }
        for &coord in &cells {
            self.grid[coord].ship = Some(kind);
        }
        self.ships.insert(kind, Some(Ship::new(kind, cells)));
        self.afloat += 1;
        debug!(?kind, ?anchor, ?orientation, "placed ship");
        if self.ships.values().all(|ship| ship.is_some()) {
            self.phase = Phase::Active;
            debug!("all ships placed, board active");
        }
        Ok(())
    }

    /// Resolve a shot at the given cell, returning the outcome of the shot
    /// on this player.
    ///
    /// Exactly one outcome is produced per call, in a fixed order: phase and
    /// bounds checks, then the already-shot check, then miss/hit/sunk
    /// classification. A cell that was already shot resolves to
    /// [`ShotOutcome::Repeat`] with no state change — repeated shots are
    /// normal turn flow, not errors. Shots outside [`Phase::Active`] fail
    /// with [`CannotShootReason::NotActive`].
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.phase != Phase::Active {
            return Err(ShotError::new(CannotShootReason::NotActive, coord));
        }
        let cell = match self.grid.get_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(cell) => cell,
        };
        if cell.hit {
            return Ok(ShotOutcome::Repeat);
        }
        cell.hit = true;
        let outcome = match cell.ship {
            None => ShotOutcome::Miss,
            Some(kind) => {
                // Occupied cells always refer back to a placed ship.
                let ship = self.ships.get_mut(&kind).unwrap().as_mut().unwrap();
                if ship.record_hit() {
                    self.afloat -= 1;
                    if self.afloat == 0 {
                        self.phase = Phase::Finished;
                        debug!("last ship sunk, game over");
                        ShotOutcome::Defeated(kind)
                    } else {
                        ShotOutcome::Sunk(kind)
                    }
                } else {
                    ShotOutcome::Hit(kind)
                }
            }
        };
        debug!(?coord, ?outcome, "resolved shot");
        Ok(outcome)
    }

    /// Compute what a viewer with the given [`ViewMode`] can see at the
    /// given cell. Pure read; fails only for out-of-range coordinates.
    pub fn tile_view(&self, coord: Coordinate, mode: ViewMode) -> Result<TileView, OutOfBounds> {
        match self.grid.get(coord) {
            None => Err(OutOfBounds::new(coord)),
            Some(cell) => {
                let sunk = cell
                    .ship
                    .is_some_and(|kind| self.ship_record(kind).is_some_and(Ship::sunk));
                Ok(view::project(cell.hit, cell.ship.is_some(), sunk, mode))
            }
        }
    }

    /// Get an iterator over the whole board as seen by the given
    /// [`ViewMode`]. The iterator's item is another iterator that projects a
    /// single row.
    pub fn iter_views<'a>(
        &'a self,
        mode: ViewMode,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = TileView>> {
        self.grid.dim.iter_coordinates().map(move |row| {
            // Coordinates from the dimensions iterator are always in range.
            row.map(move |coord| self.tile_view(coord, mode).unwrap())
        })
    }

    fn ship_record(&self, kind: ShipKind) -> Option<&Ship> {
        self.ships.get(&kind).and_then(Option::as_ref)
    }
}

impl Default for Board {
    /// Construct the standard game board: 10x10 with the classic five-ship
    /// roster.
    fn default() -> Self {
        let dim = Dimensions::default();
        Self::new(dim.width(), dim.height())
    }
}

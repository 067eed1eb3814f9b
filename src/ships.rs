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

//! Ship kinds, placement orientations, and occupancy records.

use crate::board::Coordinate;

/// Kind of ship in the roster. Also serves as the non-owning handle grid
/// cells use to refer back to the ship occupying them: the board owns the
/// ships, cells only look them up by kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipKind {
    /// The standard five-ship roster.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Get the length of this kind of ship.
    pub fn len(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }
}

/// Placement orientation of a ship. `Horizontal` extends along columns,
/// `Vertical` along rows, always increasing from the anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The cell `steps` cells away from `anchor` along this orientation.
    /// `None` if the offset overflows the coordinate space.
    fn offset(self, anchor: Coordinate, steps: usize) -> Option<Coordinate> {
        match self {
            Orientation::Horizontal => anchor
                .col
                .checked_add(steps)
                .map(|col| Coordinate::new(anchor.row, col)),
            Orientation::Vertical => anchor
                .row
                .checked_add(steps)
                .map(|row| Coordinate::new(row, anchor.col)),
        }
    }
}

/// Compute the run of cells a ship of `kind` would occupy anchored at
/// `anchor` along `orientation`. Purely geometric: whether the run fits on a
/// particular board is the board's concern. `None` if the run overflows the
/// coordinate space.
pub(crate) fn projected_cells(
    kind: ShipKind,
    anchor: Coordinate,
    orientation: Orientation,
) -> Option<Vec<Coordinate>> {
    (0..kind.len())
        .map(|step| orientation.offset(anchor, step))
        .collect()
}

/// A placed ship: the run of cells it occupies and how battered it is.
///
/// Hits are counted directly rather than recomputed from the grid, so
/// sunk-ness and the board's afloat count are cheap to maintain per shot.
#[derive(Debug)]
pub(crate) struct Ship {
    kind: ShipKind,
    cells: Vec<Coordinate>,
    hits: usize,
    sunk: bool,
}

impl Ship {
    /// Record a ship occupying the given run of cells. The run must have
    /// been produced by [`projected_cells`] for the same kind.
    pub(crate) fn new(kind: ShipKind, cells: Vec<Coordinate>) -> Self {
        debug_assert_eq!(cells.len(), kind.len());
        Self {
            kind,
            cells,
            hits: 0,
            sunk: false,
        }
    }

    /// The kind of this ship.
    pub(crate) fn kind(&self) -> ShipKind {
        self.kind
    }

    /// The run of cells this ship occupies, in placement order.
    pub(crate) fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of this ship's cells that have been hit.
    pub(crate) fn hits(&self) -> usize {
        self.hits
    }

    /// Whether every cell of this ship has been hit.
    pub(crate) fn sunk(&self) -> bool {
        self.sunk
    }

    /// Record one hit on this ship. Returns `true` if the hit sank it.
    /// Callers must not record more hits than the ship has cells; the
    /// board's shot-once-per-cell rule guarantees this.
    pub(crate) fn record_hit(&mut self) -> bool {
        debug_assert!(self.hits < self.cells.len());
        self.hits += 1;
        if self.hits == self.cells.len() {
            self.sunk = true;
        }
        self.sunk
    }
}

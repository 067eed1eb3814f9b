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

//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::dimensions::Coordinate;
use crate::ships::{Orientation, ShipKind};

/// Reason why a ship could not be placed at the requested position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The requested kind is not part of this board's roster.
    #[error("ship is not part of this board's roster")]
    UnknownShip,
    /// The requested kind was already placed.
    #[error("ship was already placed")]
    AlreadyPlaced,
    /// Part of the requested run of cells falls outside the board.
    #[error("the requested position runs out of bounds")]
    OutOfBounds,
    /// One or more of the cells in the requested run is already occupied.
    #[error("the requested position was already occupied")]
    Occupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place {kind:?} at {anchor:?} {orientation:?}: {reason}")]
pub struct PlaceError {
    /// Reason why the placement was rejected.
    #[source]
    reason: CannotPlaceReason,

    /// The kind of ship that was being placed.
    kind: ShipKind,

    /// The anchor cell of the rejected placement.
    anchor: Coordinate,

    /// The orientation of the rejected placement.
    orientation: Orientation,
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected placement.
    pub(super) fn new(
        reason: CannotPlaceReason,
        kind: ShipKind,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Self {
        Self {
            reason,
            kind,
            anchor,
            orientation,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the kind of ship whose placement was rejected.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Get the anchor cell of the rejected placement.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Get the orientation of the rejected placement.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reason why a shot could not be resolved.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The board is not in its active phase: either ships are still being
    /// placed, or the game is already over.
    NotActive,

    /// The cell selected was out of bounds on the board.
    OutOfBounds,
}

/// Error returned when trying to shoot a cell.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord:?}: {reason:?}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

impl Debug for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error returned by the read-only view queries for coordinates outside the
/// board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {coord:?} is out of bounds")]
pub struct OutOfBounds {
    /// The out-of-range coordinate.
    coord: Coordinate,
}

impl OutOfBounds {
    /// Construct an [`OutOfBounds`] error for the given coordinate.
    pub(super) fn new(coord: Coordinate) -> Self {
        Self { coord }
    }

    /// Get the coordinate that was out of range.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

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

//! Random ship placement, enabled by the `rng_gen` feature.

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Coordinate};
use crate::ships::{Orientation, ShipKind};

/// Number of placement attempts per ship before giving up.
const MAX_ATTEMPTS: usize = 100;

/// Error returned when random placement ran out of attempts for a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no valid placement found for {kind:?} after {attempts} attempts")]
pub struct RandomPlacementError {
    /// The kind of ship that could not be fitted.
    kind: ShipKind,
    /// Number of attempts made before giving up.
    attempts: usize,
}

impl RandomPlacementError {
    /// Get the kind of ship that could not be fitted.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }
}

impl Distribution<Orientation> for StandardUniform {
    /// Sample an [`Orientation`] by fair coin flip.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Place every pending roster ship of `board` at a random position.
///
/// Ships that are already placed are left alone. Each pending ship is
/// placed by sampling an anchor that keeps the whole run on the board plus
/// a random orientation, retrying a bounded number of times before failing
/// with [`RandomPlacementError`]. A failure leaves any ships placed by
/// earlier iterations in place.
pub fn place_remaining<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(), RandomPlacementError> {
    let pending: Vec<ShipKind> = board
        .iter_ships()
        .filter(|ship| !ship.placed())
        .map(|ship| ship.kind())
        .collect();
    for kind in pending {
        place_one(board, rng, kind)?;
    }
    Ok(())
}

fn place_one<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    kind: ShipKind,
) -> Result<(), RandomPlacementError> {
    let len = kind.len();
    for _ in 0..MAX_ATTEMPTS {
        let orientation: Orientation = rng.random();
        let span = match orientation {
            Orientation::Horizontal => board.width(),
            Orientation::Vertical => board.height(),
        };
        // A ship longer than the sampled axis can never fit this way round.
        let max_anchor = match span.checked_sub(len) {
            Some(max) => max,
            None => continue,
        };
        let anchor = match orientation {
            Orientation::Horizontal => Coordinate::new(
                rng.random_range(0..board.height()),
                rng.random_range(0..=max_anchor),
            ),
            Orientation::Vertical => Coordinate::new(
                rng.random_range(0..=max_anchor),
                rng.random_range(0..board.width()),
            ),
        };
        if board.place_ship(kind, anchor, orientation).is_ok() {
            return Ok(());
        }
    }
    Err(RandomPlacementError {
        kind,
        attempts: MAX_ATTEMPTS,
    })
}

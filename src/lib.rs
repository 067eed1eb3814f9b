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

//! Rules engine for the classic game Battleship.
//!
//! The crate tracks ship placement on a rectangular grid, resolves attacks
//! against that grid, and classifies every shot as a miss, hit, sinking, or
//! the final sinking that ends the game. What a viewer may learn about the
//! board is controlled by an explicit view contract: the board's owner sees
//! their own ships, an opponent never sees a ship that has not been hit.
//!
//! Rendering, input handling, score persistence, and turn sequencing between
//! two boards are all left to the surrounding application; this crate is only
//! the authoritative game state and its transition rules.
//!
//! ```
//! use seagrid::board::{Board, Coordinate, Phase, ShotOutcome, TileView, ViewMode};
//! use seagrid::ships::{Orientation, ShipKind};
//!
//! // A small board that expects a single cruiser.
//! let mut board = Board::with_ships(5, 5, &[ShipKind::Cruiser]);
//! assert_eq!(board.phase(), Phase::Setup);
//!
//! board.place_ship(ShipKind::Cruiser, Coordinate::new(0, 0), Orientation::Horizontal)?;
//! assert_eq!(board.phase(), Phase::Active);
//!
//! // The owner sees the ship; the opponent sees open water.
//! let bow = Coordinate::new(0, 0);
//! assert_eq!(board.tile_view(bow, ViewMode::Owner)?, TileView::Ship);
//! assert_eq!(board.tile_view(bow, ViewMode::Opponent)?, TileView::Sea);
//!
//! assert_eq!(board.shoot(bow)?, ShotOutcome::Hit(ShipKind::Cruiser));
//! assert_eq!(board.shoot(bow)?, ShotOutcome::Repeat);
//! assert_eq!(board.shoot(Coordinate::new(1, 1))?, ShotOutcome::Miss);
//! assert_eq!(board.shoot(Coordinate::new(0, 1))?, ShotOutcome::Hit(ShipKind::Cruiser));
//! assert_eq!(board.shoot(Coordinate::new(0, 2))?, ShotOutcome::Defeated(ShipKind::Cruiser));
//! assert_eq!(board.phase(), Phase::Finished);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
#[cfg(feature = "rng_gen")]
pub mod rng;
pub mod ships;

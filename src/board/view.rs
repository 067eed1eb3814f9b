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

//! View projection: what a cell looks like to a given viewer.
//!
//! The display rules are a small closed set, so they are modeled as a pure
//! function over an explicit mode enum rather than any kind of dispatch.

/// Whose eyes a cell is being projected for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ViewMode {
    /// The owner of the board. Sees their own ships, shot or not.
    Owner,
    /// The attacking opponent. Never sees a ship that has not been hit.
    Opponent,
}

/// What a viewer with a given [`ViewMode`] can see at a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TileView {
    /// Open water: nothing known to be here. Also produced for occupied but
    /// unshot cells in the opponent's view.
    Sea,
    /// A shot that hit nothing.
    Miss,
    /// An unshot ship cell. Only ever produced for the owner's view.
    Ship,
    /// A shot ship cell whose ship is still afloat.
    Hit,
    /// A shot ship cell whose ship has been sunk.
    Sunk,
}

/// Project a cell's state for a viewer.
///
/// Pure function of the cell's shot flag, its occupancy, whether the
/// occupying ship is sunk (`false` for unoccupied cells), and the view mode.
pub(super) fn project(hit: bool, occupied: bool, sunk: bool, mode: ViewMode) -> TileView {
    match (hit, occupied, mode) {
        (false, false, _) => TileView::Sea,
        (false, true, ViewMode::Owner) => TileView::Ship,
        // The hiding contract: an unshot ship is invisible to the opponent.
        (false, true, ViewMode::Opponent) => TileView::Sea,
        (true, false, _) => TileView::Miss,
        (true, true, _) if sunk => TileView::Sunk,
        (true, true, _) => TileView::Hit,
    }
}

/*
endpoints.rs

Copyright 2025 Hervé Quatremain

This file is part of Maze Dash.

Maze Dash is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Maze Dash is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Maze Dash. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Choose the start and end cells of a maze.
//!
//! The selector looks for two cells that are far apart: the Manhattan distance between them must
//! be at least 60% of the largest possible Manhattan distance in the grid, and they must not be
//! directly connected by a passage.
//! The search is bounded to [`MAX_ATTEMPTS`] random start cells.
//! When all attempts fail, [`farthest`] pairs a random start with the cell that is the farthest
//! away by walking distance.

use log::{debug, warn};

use super::distances::{DistanceTable, is_reachable};
use super::grid::{Grid, Position};
use super::random_source::RandomSource;

/// Number of random start cells to try before falling back to [`farthest`].
pub const MAX_ATTEMPTS: usize = 200;

/// Minimum separation, as a ratio of the largest possible Manhattan distance.
const MIN_SEPARATION_RATIO: f64 = 0.6;

/// Start and end cells of a maze.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub start: Position,
    pub end: Position,

    /// Whether the pair comes from the [`farthest`] fallback.
    pub fallback: bool,
}

/// Return the minimum Manhattan distance between the start and the end.
pub fn min_separation(rows: usize, cols: usize) -> usize {
    let manhattan_max: usize = rows.saturating_sub(1) + cols.saturating_sub(1);
    (MIN_SEPARATION_RATIO * manhattan_max as f64).floor() as usize
}

/// Select the start and end cells for the given maze.
///
/// The grid is only read. The function always returns a pair.
pub fn select(grid: &Grid, rng: &mut RandomSource) -> Endpoints {
    for attempt in 0..MAX_ATTEMPTS {
        if let Some(endpoints) = attempt_separated(grid, rng) {
            debug!(
                "Endpoints {:?} -> {:?} found after {} attempt(s)",
                endpoints.start,
                endpoints.end,
                attempt + 1
            );
            return endpoints;
        }
    }
    warn!("No well-separated endpoints after {MAX_ATTEMPTS} attempts, using the farthest cell");
    farthest(grid, rng)
}

/// Make one attempt at finding a well-separated pair from a random start cell.
///
/// Return None when no cell qualifies as the end, or when the explicit reachability check fails.
pub fn attempt_separated(grid: &Grid, rng: &mut RandomSource) -> Option<Endpoints> {
    let min_required: usize = min_separation(grid.rows(), grid.cols());
    let start: Position = grid.random_position(rng);
    let table: DistanceTable = DistanceTable::compute(grid, start);

    let pool: Vec<Position> = grid
        .positions()
        .filter(|p| {
            let d: Option<usize> = table.get(*p);
            p.manhattan(start) >= min_required && d.is_some() && d != Some(1)
        })
        .collect();
    if pool.is_empty() {
        return None;
    }

    let end: Position = pool[rng.index(pool.len())];
    if end == start || !is_reachable(grid, start, end) {
        return None;
    }
    Some(Endpoints {
        start,
        end,
        fallback: false,
    })
}

/// Pair a random start cell with the first cell, in row-major order, at the largest walking
/// distance.
pub fn farthest(grid: &Grid, rng: &mut RandomSource) -> Endpoints {
    let start: Position = grid.random_position(rng);
    let table: DistanceTable = DistanceTable::compute(grid, start);

    // `farthest()` is in row-major order, so the first entry wins ties
    let end: Position = table.farthest().first().copied().unwrap_or(start);
    debug!(
        "Fallback endpoints {start:?} -> {end:?} at distance {}",
        table.max_distance()
    );
    Endpoints {
        start,
        end,
        fallback: true,
    }
}

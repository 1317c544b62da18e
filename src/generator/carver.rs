/*
carver.rs

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

//! Carve a perfect maze with a randomized depth-first search.
//!
//! The search starts from a random cell and walks to a random unvisited neighbour, knocking down
//! the wall on the way.
//! When the current cell has no unvisited neighbour, the search backtracks.
//! Every cell is reached exactly once, through exactly one carved wall, so the open passages
//! form a spanning tree: the maze has no loop and no isolated region.

use log::debug;

use super::grid::{Direction, Grid, Position};
use super::random_source::RandomSource;

/// Build a [`Grid`] of the given size and carve a perfect maze into it.
///
/// Grids with a single row or column produce a corridor.
/// The visited markers only live for the duration of the call.
pub fn carve(rows: usize, cols: usize, rng: &mut RandomSource) -> Grid {
    let mut grid: Grid = Grid::new(rows, cols);
    if grid.is_empty() {
        return grid;
    }

    let mut visited: Vec<bool> = vec![false; grid.len()];
    let mut stack: Vec<Position> = Vec::with_capacity(grid.len());
    let mut neighbours: Vec<(Direction, Position)> = Vec::with_capacity(4);

    let first: Position = grid.random_position(rng);
    debug!("Carving a {rows}x{cols} maze from {first:?}");
    visited[grid.index(first)] = true;
    stack.push(first);

    let mut visits: usize = 1;
    while let Some(&current) = stack.last() {
        neighbours.clear();
        neighbours.extend(
            Direction::ALL
                .into_iter()
                .filter_map(|d| grid.neighbour(current, d).map(|p| (d, p)))
                .filter(|(_, p)| !visited[grid.index(*p)]),
        );

        if neighbours.is_empty() {
            stack.pop();
            continue;
        }

        rng.shuffle(&mut neighbours);
        let (direction, next) = neighbours[0];
        grid.carve(current, direction);
        visited[grid.index(next)] = true;
        stack.push(next);
        visits += 1;
    }
    debug!("Carving done: {visits} cells visited");
    grid
}

/*
generator.rs

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

//! Generate mazes and choose their endpoints.
//!
//! A maze is built in three steps, all driven by the same [`random_source::RandomSource`]
//! object so that a seed always gives the same maze:
//!
//! * [`carver::carve`] builds a [`grid::Grid`] and carves a perfect maze into it with a
//!   randomized depth-first search.
//!   Every cell is reachable from every other cell through exactly one path.
//!
//! * [`endpoints::select`] picks a start and an end far apart from each other.
//!   It uses the [`distances::DistanceTable`] breadth-first analysis to reject adjacent and
//!   unreachable cells.
//!   If it cannot find a well-separated pair in [`endpoints::MAX_ATTEMPTS`] attempts, it falls
//!   back to the cell that is the farthest away from a random start.
//!
//! * [`maze::MazeResult`] stores the grid and the endpoints, after verifying that the end can be
//!   reached from the start.
//!
//! [`maze::generate`] runs these steps for one of the [`difficulty::Difficulty`] levels.

pub mod carver;
pub mod difficulty;
pub mod distances;
pub mod endpoints;
pub mod grid;
pub mod maze;
pub mod random_source;

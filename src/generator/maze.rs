/*
maze.rs

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

//! Generated maze: the carved grid and its validated endpoints.

use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt;

use super::carver;
use super::difficulty::Difficulty;
use super::distances::is_reachable;
use super::endpoints::{self, Endpoints};
use super::grid::{Grid, Position};
use super::random_source::RandomSource;

/// Smallest accepted number of rows and columns.
pub const MIN_SIZE: usize = 2;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The requested grid is smaller than [`MIN_SIZE`] in at least one dimension.
    InvalidDimensions { rows: usize, cols: usize },

    /// The selected end cannot be reached from the start. A perfect maze makes this impossible.
    Unsolvable,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid maze dimensions {rows}x{cols}: rows and columns must be at least {MIN_SIZE}"
            ),
            MazeError::Unsolvable => write!(f, "the end of the maze cannot be reached"),
        }
    }
}

impl Error for MazeError {}

/// A maze ready to be played.
///
/// The object cannot be changed once created. The player position is kept separately, see
/// [`crate::player_position::PlayerPosition`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MazeResult {
    /// Carved grid.
    grid: Grid,

    /// Starting cell.
    start: Position,

    /// Goal cell.
    end: Position,

    /// Seed of the random source used for carving and for selecting the endpoints.
    seed: u32,

    /// Whether the endpoints come from the fallback selection.
    fallback: bool,
}

impl MazeResult {
    /// Generate a maze of the given size from the seed.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidDimensions`] before any work if `rows` or `cols` is lower than
    /// [`MIN_SIZE`].
    pub fn new(rows: usize, cols: usize, seed: u32) -> Result<Self, MazeError> {
        if rows < MIN_SIZE || cols < MIN_SIZE {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let mut rng: RandomSource = RandomSource::new(seed);
        let grid: Grid = carver::carve(rows, cols, &mut rng);
        let Endpoints {
            start,
            end,
            fallback,
        } = endpoints::select(&grid, &mut rng);

        if start == end || !is_reachable(&grid, start, end) {
            return Err(MazeError::Unsolvable);
        }
        info!("Generated {rows}x{cols} maze (seed {seed}): start {start:?}, end {end:?}");
        Ok(Self {
            grid,
            start,
            end,
            seed,
            fallback,
        })
    }

    /// Return the carved grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the starting cell.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Return the goal cell.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Return the seed the maze was generated from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Whether the endpoints come from the fallback selection.
    pub fn used_fallback(&self) -> bool {
        self.fallback
    }
}

/// Generate a maze for the given difficulty level.
///
/// When `seed` is None, a random seed is used.
pub fn generate(difficulty: Difficulty, seed: Option<u32>) -> Result<MazeResult, MazeError> {
    let (rows, cols) = difficulty.dimensions();
    MazeResult::new(rows, cols, seed.unwrap_or_else(RandomSource::random_seed))
}

/*
player_position.rs

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

//! Track the player in the maze.
//!
//! The player starts on the maze start cell and only moves one cell at a time, through open
//! passages.
//! A move towards a wall is not an error: [`PlayerPosition::attempt_move`] reports it as
//! [`MoveResult::Blocked`] and the position does not change.

use crate::generator::grid::{Direction, Position};
use crate::generator::maze::MazeResult;

/// Result of a move attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// A wall stands in the way. The position did not change.
    Blocked,

    /// The player moved to the given cell.
    Moved(Position),
}

/// Current cell of the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayerPosition {
    position: Position,
}

impl PlayerPosition {
    /// Create a [`PlayerPosition`] object on the start cell of the maze.
    pub fn new(maze: &MazeResult) -> Self {
        Self {
            position: maze.start(),
        }
    }

    /// Place the player on any cell, without checking walls.
    #[cfg(test)]
    pub(crate) fn at(position: Position) -> Self {
        Self { position }
    }

    /// Return the current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move one cell in the given direction if no wall is in the way.
    pub fn attempt_move(&mut self, maze: &MazeResult, direction: Direction) -> MoveResult {
        match maze.grid().passage(self.position, direction) {
            Some(next) => {
                self.position = next;
                MoveResult::Moved(next)
            }
            None => MoveResult::Blocked,
        }
    }

    /// Whether the player is on the end cell.
    pub fn is_at_end(&self, maze: &MazeResult) -> bool {
        self.position == maze.end()
    }
}

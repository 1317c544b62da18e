/*
lib.rs

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

//! Maze Dash generates perfect mazes and lets the player find their way out of them.
//!
//! The [`generator`] module carves the maze and picks the start and end cells. The other modules
//! implement the terminal game around it: player moves, timer, best times, and preferences.

pub mod application;
pub mod cli_options;
pub mod config;
pub mod draw;
pub mod game;
pub mod generator;
pub mod highscores;
pub mod player_input;
pub mod player_position;
pub mod preferences;
pub mod saver;

pub use generator::difficulty::Difficulty;
pub use generator::maze::{MazeError, MazeResult, generate};

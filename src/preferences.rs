/*
preferences.rs

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

//! Player preferences kept between sessions.
//!
//! See the [`crate::saver::preferences`] module that saves and restores the [`Preferences`]
//! object.

use serde::{Deserialize, Serialize};

use crate::generator::difficulty::Difficulty;

/// Player preferences.
///
/// Missing fields in a save file take their default value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Preferences {
    /// Last selected difficulty level.
    pub difficulty: Difficulty,

    /// Whether to draw the maze with the high-contrast palette.
    pub colorblind: bool,

    /// Whether to silence the terminal bell.
    pub muted: bool,
}

/*
difficulty.rs

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

//! Difficulty levels and their grid sizes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Maze difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Difficulty {
    /// Grid size, as (rows, columns), for the difficulty level.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (15, 15),
            Difficulty::Medium => (25, 25),
            Difficulty::Hard => (35, 35),
        }
    }

    /// Identifier used in save files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Return the next difficulty level, wrapping from hard back to easy.
    pub fn next(self) -> Self {
        Self::from_repr((self as usize + 1) % 3).unwrap_or_default()
    }

    /// Parse a difficulty name, ignoring the case.
    pub fn from_key(key: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(key, true).ok()
    }
}

/*
saver.rs

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

//! Save and restore the best times and the player preferences.
//!
//! Both are stored as JSON files in the data directory returned by [`data_dir`].

pub mod highscores;
pub mod preferences;

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::APP_NAME;

/// Return the directory where the save files are stored.
///
/// The directory provided on the command line comes first, then `$XDG_DATA_HOME/mazedash`, then
/// `$HOME/.local/share/mazedash`. As a last resort, the current directory is used.
pub fn data_dir(requested: Option<PathBuf>) -> PathBuf {
    resolve_data_dir(requested, env::var_os("XDG_DATA_HOME"), env::var_os("HOME"))
}

/// Select the data directory from the requested directory and the environment values.
fn resolve_data_dir(
    requested: Option<PathBuf>,
    xdg_data_home: Option<OsString>,
    home: Option<OsString>,
) -> PathBuf {
    if let Some(dir) = requested {
        return dir;
    }
    if let Some(dir) = xdg_data_home.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir).join(APP_NAME);
    }
    if let Some(home) = home.filter(|d| !d.is_empty()) {
        return PathBuf::from(home).join(".local/share").join(APP_NAME);
    }
    PathBuf::from(".")
}

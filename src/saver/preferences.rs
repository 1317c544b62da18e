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

//! Save and restore the player preferences.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::config::PREFERENCES_FILE;
use crate::preferences::Preferences;

/// Object to save and restore the player preferences.
pub struct SaverPreferences {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverPreferences {
    /// Create a [`SaverPreferences`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the preferences must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(PREFERENCES_FILE);
        debug!("Preferences file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Preferences`] object, or None if the preferences file does not exist.
    pub fn get_preferences(&self) -> Result<Option<Preferences>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let preferences: Preferences = serde_json::from_reader(reader)?;
        Ok(Some(preferences))
    }

    /// Save the provided [`Preferences`] object.
    pub fn save_preferences(&self, preferences: &Preferences) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, preferences)?;
        writer.flush()?;
        Ok(())
    }
}

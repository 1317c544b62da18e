/*
config.rs

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

//! Application constants.

/// Name used for the data directory.
pub const APP_NAME: &str = "mazedash";

/// Text shown with `--version`.
pub const COPYRIGHT_NOTICE: &str = "\nCopyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Name of the best times file in the data directory.
pub const HIGHSCORES_FILE: &str = "highscores.json";

/// Name of the preferences file in the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Status line printed under the maze.
pub const STATUS_TEMPLATE: &str =
    "{difficulty} {rows}x{cols}  seed {seed}  time {time}  moves {moves}{paused}";

/// Message printed when the player reaches the goal.
pub const WIN_TEMPLATE: &str = "You escaped! Your time: {time} · Best ({difficulty}): {best}";

/// Message printed when a time makes it to the scoreboard.
pub const RANK_TEMPLATE: &str = "New entry #{rank} on the {difficulty} scoreboard";

/// Printed after the win messages.
pub const NEXT_MAZE_PROMPT: &str = "Type n for a new maze, or q to quit.";

/// Commands understood by the interactive session.
pub const HELP_TEXT: &str = "\
Moves:      w a s d, h j k l, up down left right (several letters allowed: wwdd)
Maze:       n new maze, easy | medium | hard to change the difficulty
Timer:      p pause, r resume
Display:    ? hint, c colorblind palette, m mute the bell
            help this text, q quit";

/*
player_input.rs

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

//! Translate the player's key presses into commands.
//!
//! The interactive session reads lines from the terminal.
//! A line is split into whitespace separated tokens, and each token is one key press.
//! Key codes from the browser version of the game (`ArrowUp`, `KeyW`...) are accepted as well as
//! short names.
//! A token made only of `w`, `a`, `s`, and `d` letters is a sequence of moves, one per letter,
//! so that `wwdd` moves twice up and twice right.

use crate::generator::difficulty::Difficulty;
use crate::generator::grid::Direction;

/// Action requested by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the player one cell.
    Move(Direction),

    /// Generate a new maze at the current difficulty level.
    NewMaze,

    /// Switch to the given difficulty level and generate a new maze.
    SetDifficulty(Difficulty),

    /// Pause the timer.
    Pause,

    /// Resume the timer.
    Resume,

    /// Show the route from the player to the goal.
    Hint,

    /// Toggle the colorblind palette.
    ToggleColorblind,

    /// Toggle the bell.
    ToggleMute,

    /// Print the list of commands.
    Help,

    /// Leave the game.
    Quit,
}

/// Translate one key name into a direction.
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "KeyW" | "w" | "W" | "up" | "k" => Some(Direction::Up),
        "ArrowRight" | "KeyD" | "d" | "D" | "right" | "l" => Some(Direction::Right),
        "ArrowDown" | "KeyS" | "s" | "S" | "down" | "j" => Some(Direction::Down),
        "ArrowLeft" | "KeyA" | "a" | "A" | "left" | "h" => Some(Direction::Left),
        _ => None,
    }
}

/// Translate one token into commands. Unknown tokens produce no command.
pub fn parse_token(token: &str) -> Vec<Command> {
    if let Some(d) = direction_from_key(token) {
        return vec![Command::Move(d)];
    }
    if let Some(difficulty) = Difficulty::from_key(token) {
        return vec![Command::SetDifficulty(difficulty)];
    }

    let command: Option<Command> = match token {
        "n" | "new" => Some(Command::NewMaze),
        "p" | "pause" => Some(Command::Pause),
        "r" | "resume" => Some(Command::Resume),
        "?" | "hint" => Some(Command::Hint),
        "c" | "colorblind" => Some(Command::ToggleColorblind),
        "m" | "mute" => Some(Command::ToggleMute),
        "help" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    };
    if let Some(c) = command {
        return vec![c];
    }

    // Sequence of moves, such as "wwdsa"
    let moves: Option<Vec<Command>> = token
        .chars()
        .map(|c| direction_from_key(c.encode_utf8(&mut [0; 4])).map(Command::Move))
        .collect();
    moves.unwrap_or_default()
}

/// Translate a line of input into commands.
pub fn parse_line(line: &str) -> Vec<Command> {
    line.split_whitespace().flat_map(parse_token).collect()
}

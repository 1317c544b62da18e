/*
draw.rs

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

//! Draw the maze in the terminal.
//!
//! Each cell takes three characters horizontally and one line vertically, with the walls drawn
//! between cells:
//!
//! ```text
//! +---+---+---+
//! | @     |   |
//! +---+   +   +
//! |       | ◆ |
//! +---+---+---+
//! ```
//!
//! Colors are ANSI escape sequences. The colorblind palette uses high-contrast primary colors,
//! and the plain palette draws without any escape sequence.

use formatx::formatx;

use crate::config::STATUS_TEMPLATE;
use crate::game::{Game, format_time};
use crate::generator::grid::{Direction, Grid, Position};
use crate::generator::maze::MazeResult;

const RESET: &str = "\x1b[0m";

const PLAYER_MARK: &str = " @ ";
const GOAL_MARK: &str = " ◆ ";
const HINT_MARK: &str = " · ";
const EMPTY: &str = "   ";

/// Escape sequences used to draw the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    wall: &'static str,
    player: &'static str,
    goal: &'static str,
    hint: &'static str,
}

impl Palette {
    /// No color at all.
    pub const PLAIN: Palette = Palette {
        wall: "",
        player: "",
        goal: "",
        hint: "",
    };

    /// Default palette.
    pub const STANDARD: Palette = Palette {
        wall: "\x1b[38;5;153m",
        player: "\x1b[1;38;5;45m",
        goal: "\x1b[1;38;5;221m",
        hint: "\x1b[38;5;240m",
    };

    /// High-contrast palette.
    pub const COLORBLIND: Palette = Palette {
        wall: "\x1b[97m",
        player: "\x1b[1;93m",
        goal: "\x1b[1;96m",
        hint: "\x1b[37m",
    };

    /// Select the palette for the given settings.
    pub fn select(colors: bool, colorblind: bool) -> Self {
        match (colors, colorblind) {
            (false, _) => Self::PLAIN,
            (true, false) => Self::STANDARD,
            (true, true) => Self::COLORBLIND,
        }
    }

    fn paint(&self, out: &mut String, code: &str, text: &str) {
        if code.is_empty() {
            out.push_str(text);
        } else {
            out.push_str(code);
            out.push_str(text);
            out.push_str(RESET);
        }
    }
}

/// Draw the maze, the player, the goal, and the optional hint cells.
pub fn render(maze: &MazeResult, player: Position, hint: &[Position], palette: &Palette) -> String {
    let grid: &Grid = maze.grid();
    let mut out: String = String::with_capacity((grid.rows() * 2 + 1) * (grid.cols() * 4 + 2));

    // Top border
    horizontal_walls(&mut out, grid, 0, Direction::Up, palette);
    for row in 0..grid.rows() {
        let first: Position = Position::new(row, 0);
        let left: &str = wall_char(grid, first, Direction::Left);
        palette.paint(&mut out, palette.wall, left);

        for col in 0..grid.cols() {
            let pos: Position = Position::new(row, col);
            if pos == player {
                palette.paint(&mut out, palette.player, PLAYER_MARK);
            } else if pos == maze.end() {
                palette.paint(&mut out, palette.goal, GOAL_MARK);
            } else if hint.contains(&pos) {
                palette.paint(&mut out, palette.hint, HINT_MARK);
            } else {
                out.push_str(EMPTY);
            }
            let right: &str = wall_char(grid, pos, Direction::Right);
            palette.paint(&mut out, palette.wall, right);
        }
        out.push('\n');
        horizontal_walls(&mut out, grid, row, Direction::Down, palette);
    }
    out
}

/// Return the character for a vertical wall.
fn wall_char(grid: &Grid, pos: Position, side: Direction) -> &'static str {
    if grid.cell(pos).has_wall(side) {
        "|"
    } else {
        " "
    }
}

/// Draw the walls above or below the given row.
fn horizontal_walls(out: &mut String, grid: &Grid, row: usize, side: Direction, palette: &Palette) {
    let mut line: String = String::from("+");
    for col in 0..grid.cols() {
        if grid.cell(Position::new(row, col)).has_wall(side) {
            line.push_str("---+");
        } else {
            line.push_str("   +");
        }
    }
    palette.paint(out, palette.wall, &line);
    out.push('\n');
}

/// Return the status line for the game in progress.
pub fn status_line(game: &Game) -> String {
    let grid: &Grid = game.maze().grid();
    formatx!(
        String::from(STATUS_TEMPLATE),
        difficulty = game.difficulty(),
        rows = grid.rows(),
        cols = grid.cols(),
        seed = game.maze().seed(),
        time = format_time(game.get_duration()),
        moves = game.moves(),
        paused = if game.paused { "  (paused)" } else { "" }
    )
    .unwrap_or_default()
}

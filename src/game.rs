/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns the maze being played, the player position, and the timer.
//! The timer starts with the first move that goes through, can be paused and resumed, and stops
//! when the player reaches the goal.

use log::{debug, info};
use std::time::{Duration, Instant};

use crate::generator::difficulty::Difficulty;
use crate::generator::grid::{Direction, Position};
use crate::generator::maze::MazeResult;
use crate::player_position::{MoveResult, PlayerPosition};

/// Result of a move request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A wall stands in the way.
    Blocked,

    /// The player moved to the given cell.
    Moved(Position),

    /// The player reached the goal. The duration is the final time.
    Won(Duration),

    /// The maze is already solved, so the move is ignored.
    Ignored,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Maze being played.
    maze: MazeResult,

    /// Difficulty level of the maze.
    difficulty: Difficulty,

    /// Current cell of the player.
    player: PlayerPosition,

    /// Number of accepted moves.
    moves: usize,

    /// Whether the timer has started (the player made a first move).
    pub started: bool,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Whether the player reached the goal.
    pub solved: bool,

    /// Time when the timer started. Shifted forward on resume to skip the pause.
    start_time: Instant,

    /// Elapsed time when the player paused the game.
    pause_duration: Option<Duration>,

    /// Final time, when solved.
    final_duration: Option<Duration>,
}

impl Game {
    /// Create a [`Game`] object for the given maze.
    pub fn new(maze: MazeResult, difficulty: Difficulty) -> Self {
        let player: PlayerPosition = PlayerPosition::new(&maze);
        Self {
            maze,
            difficulty,
            player,
            moves: 0,
            started: false,
            paused: false,
            solved: false,
            start_time: Instant::now(),
            pause_duration: None,
            final_duration: None,
        }
    }

    /// Return the maze being played.
    pub fn maze(&self) -> &MazeResult {
        &self.maze
    }

    /// Return the difficulty level of the maze.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Return the player's cell.
    pub fn player(&self) -> Position {
        self.player.position()
    }

    /// Return the number of accepted moves.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Move the player one cell.
    ///
    /// Moving while the game is paused resumes it.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if self.solved {
            return MoveOutcome::Ignored;
        }
        let position: Position = match self.player.attempt_move(&self.maze, direction) {
            MoveResult::Blocked => return MoveOutcome::Blocked,
            MoveResult::Moved(p) => p,
        };

        if !self.started {
            self.started = true;
            self.start_time = Instant::now();
            debug!("Timer started");
        } else if self.paused {
            self.resume();
        }
        self.moves += 1;

        if self.player.is_at_end(&self.maze) {
            let duration: Duration = self.start_time.elapsed();
            self.solved = true;
            self.final_duration = Some(duration);
            info!(
                "Maze solved in {} with {} moves",
                format_time(duration),
                self.moves
            );
            return MoveOutcome::Won(duration);
        }
        MoveOutcome::Moved(position)
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if !self.started || self.paused || self.solved {
            return;
        }
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration. The duration is zero until the first move.
    pub fn get_duration(&self) -> Duration {
        if let Some(d) = self.final_duration {
            return d;
        }
        if !self.started {
            return Duration::ZERO;
        }
        match self.pause_duration {
            Some(d) => d,
            None => self.start_time.elapsed(),
        }
    }
}

/// Format a duration as `mm:ss.cc` (minutes, seconds, centiseconds).
pub fn format_time(duration: Duration) -> String {
    let total_cs: u128 = duration.as_millis() / 10;
    let cs: u128 = total_cs % 100;
    let total_s: u128 = total_cs / 100;
    format!("{:02}:{:02}.{:02}", total_s / 60, total_s % 60, cs)
}

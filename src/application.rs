/*
application.rs

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

//! Interactive game session in the terminal.
//!
//! The [`Application`] object reads the player's key presses line by line, applies them to the
//! [`Game`] object, and redraws the maze after each line.
//! While a maze is being played, the next one is generated in a background thread so that
//! "new maze" requests, even for large mazes, are served immediately.

use log::{debug, warn};
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use async_channel::Receiver;
use formatx::formatx;

use crate::config::{HELP_TEXT, NEXT_MAZE_PROMPT, RANK_TEMPLATE, WIN_TEMPLATE};
use crate::draw::{self, Palette};
use crate::game::{Game, MoveOutcome, format_time};
use crate::generator::difficulty::Difficulty;
use crate::generator::distances::DistanceTable;
use crate::generator::grid::{Direction, Position};
use crate::generator::maze::{self, MazeError, MazeResult};
use crate::highscores::HighScores;
use crate::player_input::{self, Command};
use crate::preferences::Preferences;
use crate::saver::highscores::SaverHighScores;
use crate::saver::preferences::SaverPreferences;

/// Terminal bell, used as the win sound.
const BELL: &str = "\x07";

/// Maze generated in the background, with its difficulty level.
type PendingMaze = (Difficulty, Receiver<Result<MazeResult, MazeError>>);

/// Interactive session.
pub struct Application {
    /// Player preferences.
    preferences: Preferences,

    /// Saves the preferences when they change.
    saver_preferences: SaverPreferences,

    /// Best times.
    highscores: HighScores,

    /// Saves the best times when the player makes it to a scoreboard.
    saver_highscores: SaverHighScores,

    /// Whether to draw with colors.
    colors: bool,

    /// Game in progress.
    game: Game,

    /// Cells on the route to the goal, when the player asked for a hint.
    hint: Vec<Position>,

    /// Next maze, being generated in a background thread.
    pending: Option<PendingMaze>,
}

impl Application {
    /// Create an [`Application`] object and generate the first maze.
    ///
    /// The preferences and the best times are loaded from `data_dir`.
    /// The provided `preferences` object overrides the saved preferences.
    pub fn new(
        data_dir: PathBuf,
        preferences: Preferences,
        seed: Option<u32>,
        colors: bool,
    ) -> Result<Self, MazeError> {
        let saver_highscores: SaverHighScores = SaverHighScores::new(data_dir.clone());
        let highscores: HighScores = match saver_highscores.get_highscores() {
            Ok(Some(h)) => h,
            Ok(None) => {
                debug!("No saved high scores");
                HighScores::new()
            }
            Err(error) => {
                warn!("Error getting the saved high scores: {error}");
                // Delete the file in error for trying to resolve the issue for the next start
                saver_highscores.delete_save();
                HighScores::new()
            }
        };

        let maze: MazeResult = maze::generate(preferences.difficulty, seed)?;
        let mut app = Self {
            preferences,
            saver_preferences: SaverPreferences::new(data_dir),
            highscores,
            saver_highscores,
            colors,
            game: Game::new(maze, preferences.difficulty),
            hint: Vec::new(),
            pending: None,
        };
        app.prepare_next();
        Ok(app)
    }

    /// Return the game in progress.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the best times.
    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    /// Return the current preferences.
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Read commands from `input` until the player quits or the input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<(), Box<dyn Error>> {
        self.redraw(output)?;
        for line in input.lines() {
            let line: String = line?;
            let mut quit: bool = false;
            for command in player_input::parse_line(&line) {
                if !self.handle(command, output)? {
                    quit = true;
                    break;
                }
            }
            if quit {
                break;
            }
            self.redraw(output)?;
        }
        output.flush()?;
        Ok(())
    }

    /// Apply one command. Return false when the player wants to quit.
    fn handle<W: Write>(
        &mut self,
        command: Command,
        output: &mut W,
    ) -> Result<bool, Box<dyn Error>> {
        debug!("Command {command:?}");
        match command {
            Command::Move(direction) => self.move_player(direction, output)?,
            Command::NewMaze => self.new_maze()?,
            Command::SetDifficulty(difficulty) => {
                self.preferences.difficulty = difficulty;
                self.save_preferences();
                self.new_maze()?;
            }
            Command::Pause => self.game.pause(),
            Command::Resume => self.game.resume(),
            Command::Hint => self.hint = self.route_to_goal(),
            Command::ToggleColorblind => {
                self.preferences.colorblind = !self.preferences.colorblind;
                self.save_preferences();
            }
            Command::ToggleMute => {
                self.preferences.muted = !self.preferences.muted;
                self.save_preferences();
            }
            Command::Help => writeln!(output, "{HELP_TEXT}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn move_player<W: Write>(
        &mut self,
        direction: Direction,
        output: &mut W,
    ) -> Result<(), Box<dyn Error>> {
        match self.game.move_player(direction) {
            MoveOutcome::Moved(position) => {
                // Keep the hint only while the player follows it
                if self.hint.first() == Some(&position) {
                    self.hint.remove(0);
                } else {
                    self.hint.clear();
                }
            }
            MoveOutcome::Won(duration) => {
                self.hint.clear();
                self.record_win(duration, output)?;
            }
            MoveOutcome::Blocked | MoveOutcome::Ignored => (),
        }
        Ok(())
    }

    /// Store the time and print the win message.
    fn record_win<W: Write>(
        &mut self,
        duration: Duration,
        output: &mut W,
    ) -> Result<(), Box<dyn Error>> {
        let difficulty: Difficulty = self.game.difficulty();
        let rank: Option<usize> = self.highscores.add_score(
            difficulty,
            duration,
            self.game.moves(),
            self.game.maze().seed(),
        );
        if rank.is_some()
            && let Err(error) = self.saver_highscores.save_highscores(&self.highscores)
        {
            warn!("Error saving the high scores: {error}");
        }

        if !self.preferences.muted {
            write!(output, "{BELL}")?;
        }
        let best: Duration = self.highscores.best(difficulty).unwrap_or(duration);
        let message: String = formatx!(
            String::from(WIN_TEMPLATE),
            time = format_time(duration),
            difficulty = difficulty,
            best = format_time(best)
        )
        .unwrap_or_default();
        writeln!(output, "{message}")?;

        if let Some(rank) = rank {
            let message: String = formatx!(
                String::from(RANK_TEMPLATE),
                rank = rank,
                difficulty = difficulty
            )
            .unwrap_or_default();
            writeln!(output, "{message}")?;
        }
        writeln!(output, "{NEXT_MAZE_PROMPT}")?;
        Ok(())
    }

    /// Return the cells between the player and the goal.
    fn route_to_goal(&self) -> Vec<Position> {
        let maze: &MazeResult = self.game.maze();
        let table: DistanceTable = DistanceTable::compute(maze.grid(), maze.end());
        let mut cells: Vec<Position> = table.route_cells(maze.grid(), self.game.player());

        // The goal has its own mark
        cells.pop();
        cells
    }

    /// Replace the game in progress with a new maze at the preferred difficulty level.
    ///
    /// The maze prepared in the background is used if it has the right difficulty level.
    fn new_maze(&mut self) -> Result<(), MazeError> {
        let difficulty: Difficulty = self.preferences.difficulty;
        let prepared: Option<Result<MazeResult, MazeError>> = match self.pending.take() {
            Some((d, receiver)) if d == difficulty => receiver.recv_blocking().ok(),
            _ => None,
        };
        let maze: MazeResult = match prepared {
            Some(result) => result?,
            None => {
                debug!("No prepared {difficulty} maze, generating one now");
                maze::generate(difficulty, None)?
            }
        };
        self.game = Game::new(maze, difficulty);
        self.hint.clear();
        self.prepare_next();
        Ok(())
    }

    /// Start generating the next maze in a background thread.
    fn prepare_next(&mut self) {
        let difficulty: Difficulty = self.preferences.difficulty;
        let (sender, receiver) = async_channel::bounded::<Result<MazeResult, MazeError>>(1);

        thread::spawn(move || {
            // The receiver is gone if the session ended or the difficulty changed
            let _ = sender.send_blocking(maze::generate(difficulty, None));
        });
        self.pending = Some((difficulty, receiver));
    }

    fn save_preferences(&self) {
        if let Err(error) = self.saver_preferences.save_preferences(&self.preferences) {
            warn!("Error saving the preferences: {error}");
        }
    }

    fn redraw<W: Write>(&self, output: &mut W) -> Result<(), Box<dyn Error>> {
        let palette: Palette = Palette::select(self.colors, self.preferences.colorblind);
        write!(
            output,
            "{}",
            draw::render(self.game.maze(), self.game.player(), &self.hint, &palette)
        )?;
        writeln!(output, "{}", draw::status_line(&self.game))?;
        if let Some(best) = self.highscores.best(self.game.difficulty()) {
            writeln!(output, "best {}", format_time(best))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mazedash-app-{name}-{}", std::process::id()))
    }

    fn app(name: &str, difficulty: Difficulty) -> Application {
        let preferences = Preferences {
            difficulty,
            colorblind: false,
            muted: true,
        };
        Application::new(scratch_dir(name), preferences, Some(1234), false).unwrap()
    }

    /// Letters that walk from the player to the goal.
    fn solution(app: &Application) -> String {
        let maze: &MazeResult = app.game().maze();
        DistanceTable::compute(maze.grid(), maze.end())
            .route_from(maze.grid(), app.game().player())
            .unwrap()
            .into_iter()
            .map(|d| match d {
                Direction::Up => 'w',
                Direction::Right => 'd',
                Direction::Down => 's',
                Direction::Left => 'a',
            })
            .collect()
    }

    #[test]
    fn draws_and_quits() {
        let mut app: Application = app("quit", Difficulty::Easy);
        let mut output: Vec<u8> = Vec::new();

        app.run(Cursor::new("q\nw\n"), &mut output).unwrap();
        let text: String = String::from_utf8(output).unwrap();
        assert!(text.contains('@'));
        assert!(text.contains("easy 15x15  seed 1234"));
        assert_eq!(app.game().moves(), 0);
    }

    #[test]
    fn solving_records_a_best_time() {
        let dir: PathBuf = scratch_dir("solve");
        let mut app: Application = app("solve", Difficulty::Easy);
        let mut output: Vec<u8> = Vec::new();
        let moves: String = solution(&app);

        let input = Cursor::new(format!("{moves}\n"));
        app.run(input, &mut output).unwrap();
        let text: String = String::from_utf8(output).unwrap();
        assert!(app.game().solved);
        assert_eq!(app.game().moves(), moves.len());
        assert!(text.contains("You escaped!"));
        assert!(text.contains(NEXT_MAZE_PROMPT));
        assert!(!text.contains(BELL));
        assert!(app.highscores().best(Difficulty::Easy).is_some());

        let saver = SaverHighScores::new(dir.clone());
        let saved: HighScores = saver.get_highscores().unwrap().unwrap();
        assert!(saved.best(Difficulty::Easy).is_some());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn new_maze_and_difficulty_change() {
        let dir: PathBuf = scratch_dir("difficulty");
        let mut app: Application = app("difficulty", Difficulty::Easy);
        let mut output: Vec<u8> = Vec::new();
        let first_seed: u32 = app.game().maze().seed();

        app.run(Cursor::new("hard\n"), &mut output).unwrap();
        assert_eq!(app.game().difficulty(), Difficulty::Hard);
        assert_eq!(app.game().maze().grid().rows(), 35);
        assert_eq!(app.preferences().difficulty, Difficulty::Hard);

        app.run(Cursor::new("n\n"), &mut output).unwrap();
        assert_eq!(app.game().difficulty(), Difficulty::Hard);
        assert_ne!(app.game().maze().seed(), first_seed);

        let saver = SaverPreferences::new(dir.clone());
        let saved: Preferences = saver.get_preferences().unwrap().unwrap();
        assert_eq!(saved.difficulty, Difficulty::Hard);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn hint_marks_the_route() {
        let mut app: Application = app("hint", Difficulty::Easy);
        let mut output: Vec<u8> = Vec::new();

        app.run(Cursor::new("?\n"), &mut output).unwrap();
        let text: String = String::from_utf8(output).unwrap();
        assert!(text.contains('·'));
        assert!(!app.hint.is_empty());
        assert!(!app.hint.contains(&app.game().maze().end()));

        let maze: &MazeResult = app.game().maze();
        let table = DistanceTable::compute(maze.grid(), maze.end());
        assert_eq!(table.get(maze.start()), Some(app.hint.len() + 1));
    }

    #[test]
    fn help_and_toggles() {
        let dir: PathBuf = scratch_dir("toggles");
        let mut app: Application = app("toggles", Difficulty::Easy);
        let mut output: Vec<u8> = Vec::new();

        app.run(Cursor::new("help c m\n"), &mut output).unwrap();
        let text: String = String::from_utf8(output).unwrap();
        assert!(text.contains("Moves:"));
        assert!(app.preferences().colorblind);
        assert!(!app.preferences().muted);
        let _ = std::fs::remove_dir_all(dir);
    }
}

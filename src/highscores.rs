/*
highscores.rs

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

//! Manage the best times for each difficulty level.
//!
//! The main object, [`HighScores`], maintains a scoreboard for each difficulty level.
//! This object is saved when the player solves a maze and makes it to the scoreboard, and
//! is restored when the game starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::generator::difficulty::Difficulty;

/// Number of entries per scoreboard (number of top times to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// How long did it take for solving the maze.
    pub time: Duration,

    /// Number of moves.
    pub moves: usize,

    /// Seed of the solved maze.
    pub seed: u32,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a difficulty level.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct ScoreBoard {
    /// Sorted list of the top scores, fastest first.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl ScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (best time). A time equal to an existing one ranks
    /// after it.
    fn add_score(&mut self, score: Score) -> Option<usize> {
        let i: usize = self.top.partition_point(|s| s.time <= score.time);
        if i >= BOARD_SIZE {
            return None;
        }
        self.top.insert(i, score);
        self.top.truncate(BOARD_SIZE);
        Some(i + 1)
    }
}

/// List of the scoreboards for the difficulty levels.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`ScoreBoard`] objects indexed by the difficulty level.
    ///
    /// The index is a string in the format "best_<difficulty>".
    board: HashMap<String, ScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(difficulty: Difficulty) -> String {
        format!("best_{difficulty}")
    }

    /// Add a time to the scoreboard of the difficulty level and return the position in the
    /// scoreboard, or None if the time does not make it to the board.
    ///
    /// The returned position starts at 1 (best time).
    pub fn add_score(
        &mut self,
        difficulty: Difficulty,
        time: Duration,
        moves: usize,
        seed: u32,
    ) -> Option<usize> {
        let key: String = Self::build_key(difficulty);
        let scoreboard: &mut ScoreBoard = self.board.entry(key).or_default();

        scoreboard.add_score(Score {
            time,
            moves,
            seed,
            when: SystemTime::now(),
        })
    }

    /// Return the list of [`Score`] for the difficulty level, fastest first.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_scores(&self, difficulty: Difficulty) -> Option<&Vec<Score>> {
        self.board
            .get(&Self::build_key(difficulty))
            .map(|b| &b.top)
            .filter(|top| !top.is_empty())
    }

    /// Return the best time for the difficulty level.
    pub fn best(&self, difficulty: Difficulty) -> Option<Duration> {
        self.get_scores(difficulty)
            .and_then(|top| top.first())
            .map(|s| s.time)
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any difficulty level)
    pub fn is_empty(&self) -> bool {
        self.board.values().all(|b| b.top.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn empty_board() {
        let scores = HighScores::new();

        assert!(scores.is_empty());
        assert_eq!(scores.best(Difficulty::Easy), None);
        assert_eq!(scores.get_scores(Difficulty::Easy), None);
    }

    #[test]
    fn positions_and_best() {
        let mut scores = HighScores::new();

        assert_eq!(scores.add_score(Difficulty::Easy, secs(30), 80, 1), Some(1));
        assert_eq!(scores.add_score(Difficulty::Easy, secs(20), 70, 2), Some(1));
        assert_eq!(scores.add_score(Difficulty::Easy, secs(40), 90, 3), Some(3));
        assert_eq!(scores.add_score(Difficulty::Easy, secs(30), 60, 4), Some(3));
        assert_eq!(scores.best(Difficulty::Easy), Some(secs(20)));
        assert_eq!(scores.best(Difficulty::Hard), None);

        let times: Vec<Duration> = scores
            .get_scores(Difficulty::Easy)
            .unwrap()
            .iter()
            .map(|s| s.time)
            .collect();
        assert_eq!(times, vec![secs(20), secs(30), secs(30), secs(40)]);
        assert!(!scores.is_empty());
    }

    #[test]
    fn board_is_bounded() {
        let mut scores = HighScores::new();

        for s in 1..=BOARD_SIZE as u64 {
            let rank: Option<usize> = scores.add_score(Difficulty::Medium, secs(s), 1, 0);
            assert_eq!(rank, Some(s as usize));
        }
        assert_eq!(scores.add_score(Difficulty::Medium, secs(100), 1, 0), None);
        assert_eq!(scores.add_score(Difficulty::Medium, secs(0), 1, 0), Some(1));

        let top: &Vec<Score> = scores.get_scores(Difficulty::Medium).unwrap();
        assert_eq!(top.len(), BOARD_SIZE);
        assert_eq!(top.last().unwrap().time, secs(BOARD_SIZE as u64 - 1));
    }

    #[test]
    fn boards_are_per_difficulty() {
        let mut scores = HighScores::new();

        scores.add_score(Difficulty::Hard, secs(90), 300, 5);
        assert_eq!(scores.best(Difficulty::Hard), Some(secs(90)));
        assert_eq!(scores.best(Difficulty::Medium), None);
        assert_eq!(HighScores::build_key(Difficulty::Hard), "best_hard");
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let mut scores = HighScores::new();
        scores.add_score(Difficulty::Easy, secs(12), 40, 7);
        scores.add_score(Difficulty::Easy, secs(9), 35, 8);

        let json: String = serde_json::to_string(&scores).unwrap();
        let restored: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(
            restored.get_scores(Difficulty::Easy),
            scores.get_scores(Difficulty::Easy)
        );
    }
}

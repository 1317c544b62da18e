/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Maze Dash starts an interactive session in the terminal.
//! The other modes print a maze, list the best times, or generate mazes in batch to report
//! statistics about the generator.
//!
//! # Examples
//!
//! Print an easy maze and the route to its goal:
//!
//! ```text
//! $ mazedash --print --solve -f easy -s 42
//! ```
//!
//! Generate 100 hard mazes and print some statistics:
//!
//! ```text
//! $ mazedash -c 100 -f hard --summary
//! ```

use chrono::{DateTime, Local};
use clap::Parser;
use log::debug;
use serde::Serialize;
use std::env;
use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::application::Application;
use crate::config::COPYRIGHT_NOTICE;
use crate::draw::{self, Palette};
use crate::game::format_time;
use crate::generator::difficulty::Difficulty;
use crate::generator::distances::DistanceTable;
use crate::generator::grid::{Direction, Position};
use crate::generator::maze::{self, MazeResult};
use crate::highscores::HighScores;
use crate::preferences::Preferences;
use crate::saver;
use crate::saver::highscores::SaverHighScores;
use crate::saver::preferences::SaverPreferences;

/// Find your way out of randomly generated mazes.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Difficulty level (defaults to the last one played)
    #[arg(value_enum, short = 'f', long)]
    difficulty: Option<Difficulty>,

    /// Seed for the first maze (random if not set)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Print the maze and exit
    #[arg(short, long, default_value_t = false)]
    print: bool,

    /// With --print, mark the route from the start to the goal
    #[arg(long, default_value_t = false, requires = "print")]
    solve: bool,

    /// With --print, output the maze as JSON
    #[arg(long, default_value_t = false, requires = "print")]
    json: bool,

    /// List the best times
    #[arg(long, default_value_t = false)]
    scores: bool,

    /// Number of mazes to generate in batch
    #[arg(short, long, group = "batch")]
    count: Option<usize>,

    /// Print some statistics after generating the mazes
    #[arg(long, default_value_t = false, requires = "batch")]
    summary: bool,

    /// Toggle and save the colorblind palette
    #[arg(long, default_value_t = false)]
    colorblind: bool,

    /// Toggle and save the bell on win
    #[arg(long, default_value_t = false)]
    mute: bool,

    /// Draw without colors
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Directory for the best times and the preferences
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Maze printed with `--print --json`.
#[derive(Serialize)]
struct MazeDump<'a> {
    #[serde(flatten)]
    maze: &'a MazeResult,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    route: Vec<Direction>,
}

/// Statistics collected by [`batch`].
#[derive(Debug, Default, PartialEq)]
struct BatchStats {
    mazes: usize,
    fallbacks: usize,
    route_total: usize,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let data_dir: PathBuf = saver::data_dir(args.data_dir.clone());
    debug!("Data directory: {data_dir:?}");

    //
    // Retrieve the saved preferences and apply the command-line overrides
    //
    let saver_preferences: SaverPreferences = SaverPreferences::new(data_dir.clone());
    let saved: Preferences = match saver_preferences.get_preferences() {
        Ok(p) => p.unwrap_or_default(),
        Err(error) => {
            debug!("Error getting the preferences: {error}");
            Preferences::default()
        }
    };
    let preferences: Preferences = apply_overrides(saved, &args);
    if preferences != saved
        && let Err(error) = saver_preferences.save_preferences(&preferences)
    {
        eprintln!("Cannot save the preferences: {error}");
    }

    let colors: bool =
        !args.no_color && env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
    let mut stdout = io::stdout();

    let result: Result<(), Box<dyn Error>> = if args.scores {
        load_highscores(&data_dir).and_then(|h| list_scores(&mut stdout, &h))
    } else if let Some(count) = args.count {
        batch(&mut stdout, count, preferences.difficulty, args.seed).and_then(|stats| {
            if args.summary {
                summary(&mut stdout, &stats)?;
            }
            Ok(())
        })
    } else if args.print {
        let palette: Palette = Palette::select(colors, preferences.colorblind);
        print_maze(&mut stdout, &args, preferences.difficulty, &palette)
    } else {
        play(data_dir, preferences, args.seed, colors)
    };

    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    }
}

/// Return the preferences with the command-line options applied.
///
/// `--difficulty` replaces the saved level. `--colorblind` and `--mute` toggle the saved setting.
fn apply_overrides(saved: Preferences, args: &Args) -> Preferences {
    let mut preferences: Preferences = saved;
    if let Some(d) = args.difficulty {
        preferences.difficulty = d;
    }
    preferences.colorblind ^= args.colorblind;
    preferences.muted ^= args.mute;
    preferences
}

/// Start the interactive session.
fn play(
    data_dir: PathBuf,
    preferences: Preferences,
    seed: Option<u32>,
    colors: bool,
) -> Result<(), Box<dyn Error>> {
    let mut app: Application = Application::new(data_dir, preferences, seed, colors)?;
    println!("Type help for the list of commands.");
    let stdin = io::stdin();
    app.run(stdin.lock(), &mut io::stdout())
}

/// Print one maze, as text or as JSON.
fn print_maze<W: Write>(
    output: &mut W,
    args: &Args,
    difficulty: Difficulty,
    palette: &Palette,
) -> Result<(), Box<dyn Error>> {
    let maze: MazeResult = maze::generate(difficulty, args.seed)?;
    let table: Option<DistanceTable> = args
        .solve
        .then(|| DistanceTable::compute(maze.grid(), maze.end()));

    if args.json {
        let route: Vec<Direction> = table
            .and_then(|t| t.route_from(maze.grid(), maze.start()))
            .unwrap_or_default();
        let dump = MazeDump { maze: &maze, route };
        serde_json::to_writer_pretty(&mut *output, &dump)?;
        writeln!(output)?;
        return Ok(());
    }

    let route: Vec<Position> = table
        .map(|t| t.route_cells(maze.grid(), maze.start()))
        .unwrap_or_default();
    let text: String = draw::render(&maze, maze.start(), &route, palette);
    write!(output, "{text}")?;
    writeln!(
        output,
        "{difficulty} {}x{}  seed {}",
        maze.grid().rows(),
        maze.grid().cols(),
        maze.seed()
    )?;
    Ok(())
}

/// Read the best times from the data directory.
fn load_highscores(data_dir: &Path) -> Result<HighScores, Box<dyn Error>> {
    let saver: SaverHighScores = SaverHighScores::new(data_dir.to_path_buf());
    Ok(saver.get_highscores()?.unwrap_or_default())
}

/// Print the scoreboards.
fn list_scores<W: Write>(output: &mut W, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
    if highscores.is_empty() {
        writeln!(output, "No best time yet.")?;
        return Ok(());
    }

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let Some(scores) = highscores.get_scores(difficulty) else {
            continue;
        };
        writeln!(output, "{difficulty}")?;
        for (i, score) in scores.iter().enumerate() {
            let dt: DateTime<Local> = DateTime::from(score.when);
            writeln!(
                output,
                "{:>3}. {}  {:>5} moves  seed {:<10}  {}",
                i + 1,
                format_time(score.time),
                score.moves,
                score.seed,
                dt.format("%c")
            )?;
        }
    }
    Ok(())
}

/// Generate mazes in batch, verify them, and print one line per maze.
///
/// Consecutive seeds are used when a starting seed is provided, so that runs can be reproduced.
fn batch<W: Write>(
    output: &mut W,
    count: usize,
    difficulty: Difficulty,
    seed: Option<u32>,
) -> Result<BatchStats, Box<dyn Error>> {
    let mut stats = BatchStats::default();
    let start: Instant = Instant::now();

    for i in 0..count {
        let maze_seed: Option<u32> = seed.map(|s| s.wrapping_add(i as u32));
        let maze: MazeResult = maze::generate(difficulty, maze_seed)?;

        let grid = maze.grid();
        if grid.passage_count() != grid.len() - 1 {
            return Err(format!("seed {} is not a perfect maze", maze.seed()).into());
        }
        let table: DistanceTable = DistanceTable::compute(grid, maze.start());
        let route: usize = table.get(maze.end()).unwrap_or_default();
        if table.reachable_count() != grid.len() || route < 2 {
            return Err(format!("seed {} has no valid route", maze.seed()).into());
        }

        stats.mazes += 1;
        stats.route_total += route;
        if maze.used_fallback() {
            stats.fallbacks += 1;
        }
        writeln!(
            output,
            "seed {:<10}  start {:>2},{:<2}  end {:>2},{:<2}  route {route}",
            maze.seed(),
            maze.start().row,
            maze.start().col,
            maze.end().row,
            maze.end().col
        )?;
    }
    debug!("Generated {count} mazes in {:?}", start.elapsed());
    Ok(stats)
}

/// Print the statistics collected by [`batch`].
fn summary<W: Write>(output: &mut W, stats: &BatchStats) -> Result<(), Box<dyn Error>> {
    let average: usize = stats.route_total / stats.mazes.max(1);
    writeln!(
        output,
        "
            mazes = {}
    average route = {}
        fallbacks = {}",
        stats.mazes,
        average,
        stats.fallbacks
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(options: &[&str]) -> Args {
        let mut argv: Vec<&str> = vec!["mazedash"];
        argv.extend_from_slice(options);
        Args::try_parse_from(argv).unwrap()
    }

    fn text(output: Vec<u8>) -> String {
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn no_option_keeps_the_preferences() {
        let saved = Preferences {
            difficulty: Difficulty::Hard,
            colorblind: true,
            muted: false,
        };

        assert_eq!(apply_overrides(saved, &args(&[])), saved);
    }

    #[test]
    fn options_override_the_preferences() {
        let saved = Preferences::default();
        let updated: Preferences =
            apply_overrides(saved, &args(&["-f", "easy", "--colorblind", "--mute"]));

        assert_eq!(updated.difficulty, Difficulty::Easy);
        assert!(updated.colorblind);
        assert!(updated.muted);

        // The flags toggle the saved value
        let toggled: Preferences = apply_overrides(updated, &args(&["--colorblind"]));
        assert!(!toggled.colorblind);
        assert!(toggled.muted);
        assert_eq!(toggled.difficulty, Difficulty::Easy);
    }

    #[test]
    fn dependent_options() {
        let solve_alone = Args::try_parse_from(["mazedash", "--solve"]);
        let summary_alone = Args::try_parse_from(["mazedash", "--summary"]);

        assert!(solve_alone.is_err());
        assert!(summary_alone.is_err());
        assert!(Args::try_parse_from(["mazedash", "-f", "extreme"]).is_err());
    }

    #[test]
    fn printed_maze_shows_the_route() {
        let args: Args = args(&["--print", "--solve", "-s", "42"]);
        let mut output: Vec<u8> = Vec::new();
        print_maze(&mut output, &args, Difficulty::Easy, &Palette::PLAIN).unwrap();
        let text: String = text(output);

        let maze: MazeResult = maze::generate(Difficulty::Easy, Some(42)).unwrap();
        let table = DistanceTable::compute(maze.grid(), maze.end());
        let route_length: usize = table.get(maze.start()).unwrap();

        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('◆').count(), 1);
        // The goal mark replaces the last route cell
        assert_eq!(text.matches('·').count(), route_length - 1);
        assert!(text.ends_with("easy 15x15  seed 42\n"));
    }

    #[test]
    fn printed_maze_without_route() {
        let args: Args = args(&["--print", "-s", "42"]);
        let mut output: Vec<u8> = Vec::new();
        print_maze(&mut output, &args, Difficulty::Easy, &Palette::PLAIN).unwrap();

        assert!(!text(output).contains('·'));
    }

    #[test]
    fn printed_json() {
        let args: Args = args(&["--print", "--json", "--solve", "-s", "8"]);
        let mut output: Vec<u8> = Vec::new();
        print_maze(&mut output, &args, Difficulty::Easy, &Palette::PLAIN).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

        let maze: MazeResult = maze::generate(Difficulty::Easy, Some(8)).unwrap();
        let table = DistanceTable::compute(maze.grid(), maze.end());
        let route_length: usize = table.get(maze.start()).unwrap();

        assert_eq!(json["seed"], 8);
        assert_eq!(json["grid"]["rows"], 15);
        assert_eq!(json["grid"]["cells"].as_array().unwrap().len(), 225);
        assert_eq!(json["start"]["row"], maze.start().row);
        assert_eq!(json["end"]["col"], maze.end().col);
        assert_eq!(json["route"].as_array().unwrap().len(), route_length);
    }

    #[test]
    fn batch_reports_every_maze() {
        let mut output: Vec<u8> = Vec::new();
        let stats: BatchStats = batch(&mut output, 5, Difficulty::Easy, Some(100)).unwrap();
        let text: String = text(output);

        assert_eq!(stats.mazes, 5);
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().unwrap().starts_with("seed 100 "));
        assert!(text.lines().last().unwrap().starts_with("seed 104 "));

        let mut fallbacks: usize = 0;
        let mut route_total: usize = 0;
        for seed in 100..105 {
            let maze: MazeResult = maze::generate(Difficulty::Easy, Some(seed)).unwrap();
            let table = DistanceTable::compute(maze.grid(), maze.start());
            route_total += table.get(maze.end()).unwrap();
            fallbacks += usize::from(maze.used_fallback());
        }
        assert_eq!(stats.fallbacks, fallbacks);
        assert_eq!(stats.route_total, route_total);
    }

    #[test]
    fn batch_summary() {
        let stats = BatchStats {
            mazes: 4,
            fallbacks: 1,
            route_total: 90,
        };
        let mut output: Vec<u8> = Vec::new();
        summary(&mut output, &stats).unwrap();
        let text: String = text(output);

        assert!(text.contains("mazes = 4"));
        assert!(text.contains("average route = 22"));
        assert!(text.contains("fallbacks = 1"));

        let mut output: Vec<u8> = Vec::new();
        summary(&mut output, &BatchStats::default()).unwrap();
        assert!(self::text(output).contains("average route = 0"));
    }

    #[test]
    fn empty_scoreboards() {
        let mut output: Vec<u8> = Vec::new();
        list_scores(&mut output, &HighScores::new()).unwrap();

        assert_eq!(text(output), "No best time yet.\n");
    }

    #[test]
    fn scoreboards_are_listed_by_level() {
        let mut highscores = HighScores::new();
        highscores.add_score(Difficulty::Hard, Duration::from_millis(95_420), 310, 7);
        highscores.add_score(Difficulty::Hard, Duration::from_millis(65_000), 250, 3);
        highscores.add_score(Difficulty::Easy, Duration::from_millis(12_340), 40, 9);

        let mut output: Vec<u8> = Vec::new();
        list_scores(&mut output, &highscores).unwrap();
        let text: String = text(output);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "easy");
        assert!(lines[1].starts_with("  1. 00:12.34     40 moves  seed 9 "));
        assert_eq!(lines[2], "hard");
        assert!(lines[3].starts_with("  1. 01:05.00    250 moves  seed 3 "));
        assert!(lines[4].starts_with("  2. 01:35.42    310 moves  seed 7 "));
    }

    #[test]
    fn missing_scores_file() {
        let dir: PathBuf = env::temp_dir().join(format!("mazedash-cli-{}", std::process::id()));

        assert!(load_highscores(&dir).unwrap().is_empty());
    }
}

/*
grid.rs

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

//! Maze grid: cells, walls, and directions.
//!
//! A [`Grid`] is a rectangle of [`Cell`] objects.
//! Each cell has four walls, indexed by [`Direction`].
//! The wall between two adjacent cells is stored twice, once in each cell, and both flags always
//! agree: the only way to open a wall is [`Grid::carve`], which clears the pair.

use serde::Serialize;

use super::random_source::RandomSource;

/// Movement and wall directions.
///
/// The discriminant is the index of the wall in [`Cell`].
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All the directions, in wall index order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Return the wall index for the direction.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Return the direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Return the (row, column) offset for one step in the direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Cell coordinates in the grid.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between the two positions.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// One maze cell.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Wall flags, indexed by [`Direction::index`]. `true` means the wall is standing.
    walls: [bool; 4],
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Create a [`Cell`] object with its four walls standing.
    pub fn new() -> Self {
        Self { walls: [true; 4] }
    }

    /// Whether a wall stands in the given direction.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Return the four wall flags.
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    fn open(&mut self, direction: Direction) {
        self.walls[direction.index()] = false;
    }
}

/// Rectangular grid of cells, stored in row-major order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a [`Grid`] object where all the walls are standing.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of the position. Used for the per-cell marker vectors.
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Return the cell at the given position.
    ///
    /// Panics if the position is outside the grid.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// Iterate over all the positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols: usize = self.cols;
        (0..self.rows)
            .flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Return the adjacent position in the given direction, ignoring walls, or None if the step
    /// would leave the grid.
    pub fn neighbour(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row: usize = pos.row.checked_add_signed(dr)?;
        let col: usize = pos.col.checked_add_signed(dc)?;
        let next: Position = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Return the adjacent position if no wall separates it from `pos`.
    pub fn passage(&self, pos: Position, direction: Direction) -> Option<Position> {
        if !self.contains(pos) || self.cell(pos).has_wall(direction) {
            return None;
        }
        self.neighbour(pos, direction)
    }

    /// Iterate over the positions reachable in one step from `pos`.
    pub fn open_neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.passage(pos, d))
    }

    /// Knock down the wall between `pos` and its neighbour in the given direction.
    ///
    /// Both sides of the wall are cleared. Returns the neighbour, or None (and nothing changes)
    /// if the neighbour is outside the grid.
    pub fn carve(&mut self, pos: Position, direction: Direction) -> Option<Position> {
        let next: Position = self.neighbour(pos, direction)?;
        let (i, j) = (self.index(pos), self.index(next));
        self.cells[i].open(direction);
        self.cells[j].open(direction.opposite());
        Some(next)
    }

    /// Count the open passages between adjacent cells. Each passage is counted once.
    pub fn passage_count(&self) -> usize {
        self.positions()
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|d| self.passage(pos, *d).is_some())
                    .count()
            })
            .sum()
    }

    /// Draw a random position: the row first, then the column.
    pub fn random_position(&self, rng: &mut RandomSource) -> Position {
        let row: usize = rng.index(self.rows);
        let col: usize = rng.index(self.cols);
        Position::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_closed() {
        let grid = Grid::new(3, 4);

        assert_eq!(grid.len(), 12);
        assert_eq!(grid.passage_count(), 0);
        for pos in grid.positions() {
            assert_eq!(grid.cell(pos).walls(), [true; 4]);
        }
    }

    #[test]
    fn json_layout() {
        let mut grid = Grid::new(1, 2);
        grid.carve(Position::new(0, 0), Direction::Right);

        let json: serde_json::Value = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["rows"], 1);
        assert_eq!(json["cols"], 2);
        assert_eq!(
            json["cells"][0]["walls"],
            serde_json::json!([true, false, true, true])
        );
        assert_eq!(serde_json::to_value(Direction::Left).unwrap(), "left");
        assert_eq!(
            serde_json::to_value(Position::new(3, 4)).unwrap(),
            serde_json::json!({"row": 3, "col": 4})
        );
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::new(2, 3);
        let positions: Vec<Position> = grid.positions().collect();

        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[2], Position::new(0, 2));
        assert_eq!(positions[3], Position::new(1, 0));
        for (i, pos) in positions.iter().enumerate() {
            assert_eq!(grid.index(*pos), i);
        }
    }

    #[test]
    fn neighbour_respects_edges() {
        let grid = Grid::new(2, 2);
        let corner = Position::new(0, 0);

        assert_eq!(grid.neighbour(corner, Direction::Up), None);
        assert_eq!(grid.neighbour(corner, Direction::Left), None);
        assert_eq!(
            grid.neighbour(corner, Direction::Right),
            Some(Position::new(0, 1))
        );
        assert_eq!(
            grid.neighbour(corner, Direction::Down),
            Some(Position::new(1, 0))
        );
        assert_eq!(grid.neighbour(Position::new(1, 1), Direction::Down), None);
    }

    #[test]
    fn carve_clears_both_sides() {
        let mut grid = Grid::new(2, 2);
        let a = Position::new(0, 0);

        let b: Option<Position> = grid.carve(a, Direction::Right);
        assert_eq!(b, Some(Position::new(0, 1)));
        assert!(!grid.cell(a).has_wall(Direction::Right));
        assert!(!grid.cell(Position::new(0, 1)).has_wall(Direction::Left));
        assert_eq!(grid.passage_count(), 1);
        assert_eq!(grid.passage(a, Direction::Right), Some(Position::new(0, 1)));
        assert_eq!(grid.passage(a, Direction::Down), None);
    }

    #[test]
    fn carve_outside_changes_nothing() {
        let mut grid = Grid::new(2, 2);

        assert_eq!(grid.carve(Position::new(0, 0), Direction::Up), None);
        assert_eq!(grid.cell(Position::new(0, 0)).walls(), [true; 4]);
    }

    #[test]
    fn opposite_and_offsets_match() {
        for d in Direction::ALL {
            let (r1, c1) = d.offset();
            let (r2, c2) = d.opposite().offset();
            assert_eq!((r1 + r2, c1 + c2), (0, 0));
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(Direction::ALL[d.index()], d);
        }
    }

    #[test]
    fn manhattan_distance() {
        let a = Position::new(1, 5);
        let b = Position::new(4, 2);

        assert_eq!(a.manhattan(b), 6);
        assert_eq!(b.manhattan(a), 6);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn random_position_is_inside() {
        let grid = Grid::new(3, 7);
        let mut rng = RandomSource::new(8);

        for _ in 0..500 {
            assert!(grid.contains(grid.random_position(&mut rng)));
        }
    }
}

/*
distances.rs

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

//! Breadth-first distance analysis over the open passages of a maze.
//!
//! [`DistanceTable::compute`] gives the shortest hop count from one source cell to every other
//! cell.
//! Cells that cannot be reached keep the [`None`] sentinel: they are never reported as distance
//! zero.
//! [`is_reachable`] runs the same traversal but stops as soon as the target is dequeued.
//!
//! Each run allocates its own "seen" markers; the grid is only read.

use std::collections::VecDeque;

use super::grid::{Direction, Grid, Position};

/// Shortest distances from one source cell.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    /// Cell from which the distances are computed.
    source: Position,

    /// Number of columns, to convert positions to indexes.
    cols: usize,

    /// Distances in row-major order. None means unreachable.
    distances: Vec<Option<usize>>,

    /// Largest finite distance.
    max_distance: usize,

    /// Cells at [`DistanceTable::max_distance`], in row-major order.
    farthest: Vec<Position>,
}

impl DistanceTable {
    /// Run a breadth-first search from `source`.
    ///
    /// Panics if `source` is outside the grid.
    pub fn compute(grid: &Grid, source: Position) -> Self {
        let mut distances: Vec<Option<usize>> = vec![None; grid.len()];
        let mut queue: VecDeque<Position> = VecDeque::with_capacity(grid.len());

        distances[grid.index(source)] = Some(0);
        queue.push_back(source);

        let mut max_distance: usize = 0;
        while let Some(current) = queue.pop_front() {
            let d: usize = distances[grid.index(current)].unwrap_or_default();
            max_distance = max_distance.max(d);
            for next in grid.open_neighbours(current) {
                let i: usize = grid.index(next);
                if distances[i].is_none() {
                    distances[i] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }

        let farthest: Vec<Position> = grid
            .positions()
            .filter(|p| distances[grid.index(*p)] == Some(max_distance))
            .collect();

        Self {
            source,
            cols: grid.cols(),
            distances,
            max_distance,
            farthest,
        }
    }

    /// Return the cell the distances are computed from.
    pub fn source(&self) -> Position {
        self.source
    }

    /// Return the distance to the given cell, or None if it cannot be reached.
    pub fn get(&self, pos: Position) -> Option<usize> {
        if pos.col >= self.cols {
            return None;
        }
        self.distances
            .get(pos.row * self.cols + pos.col)
            .copied()
            .flatten()
    }

    /// Whether the cell can be reached from the source.
    pub fn is_reachable(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Number of cells reachable from the source, including the source itself.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Largest finite distance from the source.
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Cells at the largest finite distance, in row-major order.
    pub fn farthest(&self) -> &[Position] {
        &self.farthest
    }

    /// Return the steps that lead from `from` to the source, following decreasing distances.
    ///
    /// Return None if `from` cannot be reached.
    pub fn route_from(&self, grid: &Grid, from: Position) -> Option<Vec<Direction>> {
        let mut d: usize = self.get(from)?;
        let mut current: Position = from;
        let mut route: Vec<Direction> = Vec::with_capacity(d);

        while d > 0 {
            let (direction, next) = Direction::ALL
                .into_iter()
                .filter_map(|dir| grid.passage(current, dir).map(|p| (dir, p)))
                .find(|(_, p)| self.get(*p) == Some(d - 1))?;
            route.push(direction);
            current = next;
            d -= 1;
        }
        Some(route)
    }

    /// Return the cells visited on the way from `from` to the source, the source included.
    ///
    /// The list is empty when `from` is the source or cannot be reached.
    pub fn route_cells(&self, grid: &Grid, from: Position) -> Vec<Position> {
        let mut cells: Vec<Position> = Vec::new();
        let mut current: Position = from;

        for direction in self.route_from(grid, from).unwrap_or_default() {
            match grid.passage(current, direction) {
                Some(next) => current = next,
                None => break,
            }
            cells.push(current);
        }
        cells
    }
}

/// Whether `to` can be reached from `from` through open passages.
pub fn is_reachable(grid: &Grid, from: Position, to: Position) -> bool {
    if !grid.contains(from) || !grid.contains(to) {
        return false;
    }
    let mut seen: Vec<bool> = vec![false; grid.len()];
    let mut queue: VecDeque<Position> = VecDeque::new();

    seen[grid.index(from)] = true;
    queue.push_back(from);
    while let Some(current) = queue.pop_front() {
        if current == to {
            return true;
        }
        for next in grid.open_neighbours(current) {
            let i: usize = grid.index(next);
            if !seen[i] {
                seen[i] = true;
                queue.push_back(next);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::carver::carve;
    use crate::generator::random_source::RandomSource;

    /// 2x3 grid with a single passage between (0,0) and (0,1).
    ///
    /// ```text
    /// +--+--+--+
    /// |a  b |  |
    /// +--+--+--+
    /// |  |  |  |
    /// +--+--+--+
    /// ```
    fn split_grid() -> Grid {
        let mut grid = Grid::new(2, 3);
        grid.carve(Position::new(0, 0), Direction::Right);
        grid
    }

    /// 3x3 grid carved as a snake: row 0 left to right, row 1 right to left, row 2 left to right.
    fn snake_grid() -> Grid {
        let mut grid = Grid::new(3, 3);
        grid.carve(Position::new(0, 0), Direction::Right);
        grid.carve(Position::new(0, 1), Direction::Right);
        grid.carve(Position::new(0, 2), Direction::Down);
        grid.carve(Position::new(1, 2), Direction::Left);
        grid.carve(Position::new(1, 1), Direction::Left);
        grid.carve(Position::new(1, 0), Direction::Down);
        grid.carve(Position::new(2, 0), Direction::Right);
        grid.carve(Position::new(2, 1), Direction::Right);
        grid
    }

    #[test]
    fn snake_distances() {
        let grid: Grid = snake_grid();
        let table = DistanceTable::compute(&grid, Position::new(0, 0));

        assert_eq!(table.source(), Position::new(0, 0));
        assert_eq!(table.get(Position::new(0, 0)), Some(0));
        assert_eq!(table.get(Position::new(0, 2)), Some(2));
        assert_eq!(table.get(Position::new(1, 0)), Some(5));
        assert_eq!(table.get(Position::new(2, 2)), Some(8));
        assert_eq!(table.max_distance(), 8);
        assert_eq!(table.farthest(), &[Position::new(2, 2)]);
        assert_eq!(table.reachable_count(), 9);
    }

    #[test]
    fn unreachable_cells_are_not_zero() {
        let grid: Grid = split_grid();
        let table = DistanceTable::compute(&grid, Position::new(0, 0));

        assert_eq!(table.get(Position::new(0, 1)), Some(1));
        assert_eq!(table.get(Position::new(1, 1)), None);
        assert!(!table.is_reachable(Position::new(0, 2)));
        assert_eq!(table.reachable_count(), 2);
        assert_eq!(table.max_distance(), 1);
        assert_eq!(table.farthest(), &[Position::new(0, 1)]);
    }

    #[test]
    fn out_of_grid_lookups() {
        let grid: Grid = split_grid();
        let table = DistanceTable::compute(&grid, Position::new(0, 0));

        assert_eq!(table.get(Position::new(0, 3)), None);
        assert_eq!(table.get(Position::new(5, 0)), None);
    }

    #[test]
    fn isolated_source() {
        let grid = Grid::new(2, 2);
        let table = DistanceTable::compute(&grid, Position::new(1, 1));

        assert_eq!(table.max_distance(), 0);
        assert_eq!(table.farthest(), &[Position::new(1, 1)]);
        assert_eq!(table.reachable_count(), 1);
    }

    #[test]
    fn reachability_check() {
        let grid: Grid = split_grid();

        let origin = Position::new(0, 0);
        let right = Position::new(0, 1);
        let below = Position::new(1, 0);
        let corner = Position::new(1, 2);

        assert!(is_reachable(&grid, origin, right));
        assert!(is_reachable(&grid, right, origin));
        assert!(is_reachable(&grid, corner, corner));
        assert!(!is_reachable(&grid, origin, below));
        assert!(!is_reachable(&grid, origin, Position::new(9, 9)));
    }

    #[test]
    fn full_coverage_on_carved_mazes() {
        for seed in 0..10 {
            let grid: Grid = carve(8, 11, &mut RandomSource::new(seed));
            let table = DistanceTable::compute(&grid, Position::new(4, 4));
            assert_eq!(table.reachable_count(), grid.len());
            for pos in grid.positions() {
                assert!(is_reachable(&grid, Position::new(4, 4), pos));
            }
        }
    }

    #[test]
    fn route_follows_passages() {
        let grid: Grid = carve(10, 10, &mut RandomSource::new(4));
        let target = Position::new(9, 9);
        let table = DistanceTable::compute(&grid, target);
        let from = Position::new(0, 0);

        let route: Vec<Direction> = table.route_from(&grid, from).expect("no route");
        assert_eq!(Some(route.len()), table.get(from));

        let mut current: Position = from;
        for d in route {
            current = grid.passage(current, d).expect("route crosses a wall");
        }
        assert_eq!(current, target);
    }

    #[test]
    fn no_route_when_unreachable() {
        let grid: Grid = split_grid();
        let origin = Position::new(0, 0);
        let isolated = Position::new(1, 1);
        let table = DistanceTable::compute(&grid, origin);

        assert_eq!(table.route_from(&grid, isolated), None);
        assert_eq!(table.route_from(&grid, origin), Some(Vec::new()));
        assert!(table.route_cells(&grid, isolated).is_empty());
        assert!(table.route_cells(&grid, origin).is_empty());
    }

    #[test]
    fn route_cells_are_adjacent() {
        let grid: Grid = carve(7, 9, &mut RandomSource::new(12));
        let target = Position::new(6, 8);
        let from = Position::new(0, 0);
        let table = DistanceTable::compute(&grid, target);

        let cells: Vec<Position> = table.route_cells(&grid, from);
        assert_eq!(Some(cells.len()), table.get(from));
        assert_eq!(cells.last(), Some(&target));

        let mut previous: Position = from;
        for cell in cells {
            assert!(grid.open_neighbours(previous).any(|p| p == cell));
            assert_eq!(table.get(cell), table.get(previous).map(|d| d - 1));
            previous = cell;
        }
    }
}

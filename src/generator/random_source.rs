/*
random_source.rs

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

//! Deterministic random source used to carve mazes and place their endpoints.
//!
//! Maze generation must be reproducible from a seed, so the generator does not draw from
//! [`rand::rng()`] directly.
//! Instead, each maze owns a [`RandomSource`] object, which is a small Mulberry32 generator.
//! Two [`RandomSource`] objects created with the same seed always produce the same sequence.
//!
//! [`rand`] is only used to pick a fresh seed when the player does not provide one.

use rand::Rng;

/// Increment added to the state for every draw. Must be odd.
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, used to normalize the mixed state into `[0, 1)`.
const NORMALIZER: f64 = 4_294_967_296.0;

/// Seeded pseudo-random generator.
#[derive(Debug, Clone)]
pub struct RandomSource {
    /// Seed the object was created with.
    seed: u32,

    /// Internal state, advanced by each draw.
    state: u32,
}

impl RandomSource {
    /// Create a [`RandomSource`] object from the given seed.
    pub fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    /// Return a random seed from the thread-local generator.
    pub fn random_seed() -> u32 {
        rand::rng().random()
    }

    /// Return the seed used to create the object.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advance the state and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t: u32 = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / NORMALIZER
    }

    /// Return a random index in `[0, len)`.
    ///
    /// `len` must not be zero.
    pub fn index(&mut self, len: usize) -> usize {
        let i: usize = (self.next_f64() * len as f64) as usize;
        // Rounding on huge lengths could reach `len`
        i.min(len.saturating_sub(1))
    }

    /// Shuffle the slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j: usize = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

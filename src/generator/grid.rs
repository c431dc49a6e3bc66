/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordsearch.

Wordsearch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordsearch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordsearch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Letter grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::{Cell, Direction};

/// Square matrix of uppercase letters.
///
/// A [`Grid`] object is built by [`super::random_grid::RandomGrid`] and is not modified
/// afterward.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Letters, row after row.
    letters: Vec<char>,
}

impl Grid {
    /// Create a [`Grid`] object from its rows.
    ///
    /// Return None if the rows do not form a square of uppercase letters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size: usize = rows.len();
        let mut letters: Vec<char> = Vec::with_capacity(size * size);
        for row in rows {
            let row: Vec<char> = row.as_ref().chars().collect();
            if row.len() != size || !row.iter().all(char::is_ascii_uppercase) {
                return None;
            }
            letters.extend(row);
        }
        Some(Self { size, letters })
    }

    /// Build the grid from the letters collected by the generator.
    pub(super) fn from_letters(size: usize, letters: Vec<char>) -> Self {
        Self { size, letters }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the letter in the given cell, or None if the cell is outside the grid.
    pub fn get(&self, cell: Cell) -> Option<char> {
        if cell.is_inside(self.size) {
            self.letters.get(cell.row * self.size + cell.col).copied()
        } else {
            None
        }
    }

    /// Return the letters under the given cells, in order. Cells outside the grid are skipped.
    pub fn word_at(&self, cells: &[Cell]) -> String {
        cells.iter().filter_map(|c| self.get(*c)).collect()
    }

    /// Return the rows of the grid as strings.
    pub fn rows(&self) -> Vec<String> {
        self.letters
            .chunks(self.size.max(1))
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Look for the word along the eight directions and return the cells of the first run that
    /// spells it.
    pub fn find(&self, word: &str) -> Option<Vec<Cell>> {
        let word: Vec<char> = word.chars().collect();
        if word.is_empty() {
            return None;
        }
        for row in 0..self.size {
            for col in 0..self.size {
                let start: Cell = Cell::new(row, col);
                for d in 0..8 {
                    let Some(direction) = Direction::from_repr(d) else {
                        continue;
                    };
                    let cells: Option<Vec<Cell>> = (0..word.len())
                        .map(|i| start.offset(direction, i, self.size))
                        .collect();
                    if let Some(cells) = cells
                        && cells
                            .iter()
                            .zip(&word)
                            .all(|(c, letter)| self.get(*c) == Some(*letter))
                    {
                        return Some(cells);
                    }
                }
            }
        }
        None
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.letters.chunks(self.size.max(1)) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

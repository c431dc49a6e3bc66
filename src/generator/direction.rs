/*
direction.rs

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

//! Cells and line directions in the word search grid.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use strum_macros::FromRepr;

/// Number of directions the generator uses for placing words.
/// These are the first variants of [`Direction`].
pub const NUM_PLACEMENT_DIRECTIONS: u8 = 4;

/// Position of a cell in the grid.
///
/// Rows grow downward and columns grow to the right. Both start at zero.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the cell reached by walking `steps` times in the given direction, or None if the
    /// cell is outside a grid of `size` rows and columns.
    pub fn offset(&self, direction: Direction, steps: usize, size: usize) -> Option<Cell> {
        self.shifted(direction, steps).filter(|cell| cell.is_inside(size))
    }

    /// Return the cell reached by walking `steps` times in the given direction, or None if the
    /// row or the column becomes negative.
    pub fn shifted(&self, direction: Direction, steps: usize) -> Option<Cell> {
        let (drow, dcol) = direction.step();
        let steps: isize = isize::try_from(steps).ok()?;
        let row: isize = isize::try_from(self.row).ok()?.checked_add(drow * steps)?;
        let col: isize = isize::try_from(self.col).ok()?.checked_add(dcol * steps)?;
        Some(Cell {
            row: usize::try_from(row).ok()?,
            col: usize::try_from(col).ok()?,
        })
    }

    /// Whether the cell is inside a grid of `size` rows and columns.
    pub fn is_inside(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight unit steps between adjacent cells.
///
/// The four first variants are the directions along which the generator writes the words.
/// The player can select a word in any of the eight directions, which covers words written
/// backward.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    /// Left to right.
    East,
    /// Top to bottom.
    South,
    /// Diagonal, top left to bottom right.
    SouthEast,
    /// Diagonal, bottom left to top right.
    NorthEast,
    West,
    North,
    NorthWest,
    SouthWest,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::East => write!(f, "horizontal"),
            Direction::South => write!(f, "vertical"),
            Direction::SouthEast => write!(f, "diagonal down"),
            Direction::NorthEast => write!(f, "diagonal up"),
            Direction::West => write!(f, "horizontal, reversed"),
            Direction::North => write!(f, "vertical, reversed"),
            Direction::NorthWest => write!(f, "diagonal down, reversed"),
            Direction::SouthWest => write!(f, "diagonal up, reversed"),
        }
    }
}

impl Direction {
    /// Return the row and column increments for the direction.
    pub fn step(&self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::SouthWest => (1, -1),
        }
    }

    /// Return the direction that has the given increments, or None if they are not unit steps.
    pub fn from_step(drow: isize, dcol: isize) -> Option<Direction> {
        match (drow, dcol) {
            (0, 1) => Some(Direction::East),
            (1, 0) => Some(Direction::South),
            (1, 1) => Some(Direction::SouthEast),
            (-1, 1) => Some(Direction::NorthEast),
            (0, -1) => Some(Direction::West),
            (-1, 0) => Some(Direction::North),
            (-1, -1) => Some(Direction::NorthWest),
            (1, -1) => Some(Direction::SouthWest),
            _ => None,
        }
    }

    /// Return the direction pointing from `from` toward `to`.
    ///
    /// The direction is the sign of the row and column differences, so the two cells do not
    /// have to be aligned. Return None if the two cells are the same.
    pub fn toward(from: Cell, to: Cell) -> Option<Direction> {
        let sign = |a: usize, b: usize| -> isize {
            match b.cmp(&a) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            }
        };
        Self::from_step(sign(from.row, to.row), sign(from.col, to.col))
    }

    /// Whether the generator uses that direction for placing words.
    pub fn is_placement(&self) -> bool {
        (*self as u8) < NUM_PLACEMENT_DIRECTIONS
    }
}

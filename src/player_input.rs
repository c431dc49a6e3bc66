/*
player_input.rs

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

//! Manage the cells that the player is selecting.
//!
//! The player presses the pointer on a cell and drags it over the grid. The selected cells always
//! form a straight line: the direction is given by the second selected cell, and then each new
//! cell must be the next one in that direction. Other cells are ignored.

use log::trace;
use std::slice;

use crate::generator::direction::{Cell, Direction};

/// Cells under the current pointer drag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No drag in progress.
    #[default]
    Empty,

    /// The player pressed the pointer on a cell, the direction is not known yet.
    SingleCell(Cell),

    /// Two cells or more, from the first selected cell to the last one.
    DirectedRun {
        cells: Vec<Cell>,
        direction: Direction,
    },
}

impl Selection {
    /// Create an empty [`Selection`] object.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Drop the current cells and start a new selection from the given cell.
    pub fn begin(&mut self, cell: Cell) {
        *self = Self::SingleCell(cell);
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// Add the cell at the end of the selection if it is the next cell along the line.
    ///
    /// Return `true` if the cell has been added.
    pub fn extend(&mut self, cell: Cell) -> bool {
        match self {
            Self::Empty => {
                trace!("Cell {cell} ignored: no selection in progress");
                false
            }
            Self::SingleCell(first) => {
                let first: Cell = *first;
                // The second cell gives the direction, but it must also be adjacent
                let Some(direction) = Direction::toward(first, cell) else {
                    return false;
                };
                if first.shifted(direction, 1) != Some(cell) {
                    trace!("Cell {cell} ignored: not adjacent to {first}");
                    return false;
                }
                *self = Self::DirectedRun {
                    cells: vec![first, cell],
                    direction,
                };
                true
            }
            Self::DirectedRun { cells, direction } => {
                if cells.contains(&cell) {
                    return false;
                }
                let expected: Option<Cell> = cells[0].shifted(*direction, cells.len());
                if expected != Some(cell) {
                    trace!("Cell {cell} ignored: not the next cell {direction}");
                    return false;
                }
                cells.push(cell);
                true
            }
        }
    }

    /// Return the selected cells, from the first one to the last one.
    pub fn cells(&self) -> &[Cell] {
        match self {
            Self::Empty => &[],
            Self::SingleCell(cell) => slice::from_ref(cell),
            Self::DirectedRun { cells, .. } => cells,
        }
    }

    /// Return the direction of the selection, or None if it has less than two cells.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::DirectedRun { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// Whether the given cell is selected.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells().contains(&cell)
    }

    /// Return the number of selected cells.
    pub fn len(&self) -> usize {
        self.cells().len()
    }

    /// Whether no cell is selected.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

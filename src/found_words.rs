/*
found_words.rs

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

//! Manage the words that the player found.

use log::debug;
use std::collections::{BTreeSet, HashSet};

use crate::generator::direction::Cell;

/// Words found so far, and the cells they cover.
///
/// Words and cells are only added, never removed.
#[derive(Debug, Clone, Default)]
pub struct FoundWords {
    /// Found words, in alphabetical order.
    words: BTreeSet<String>,

    /// Cells of all the runs the player validated. The display keeps these cells highlighted.
    cells: HashSet<Cell>,
}

impl FoundWords {
    /// Create a [`FoundWords`] object.
    pub fn new() -> Self {
        Self {
            words: BTreeSet::new(),
            cells: HashSet::new(),
        }
    }

    /// Record the word and its cells.
    ///
    /// Return `true` if the word was not already found.
    pub fn add(&mut self, word: &str, cells: &[Cell]) -> bool {
        self.cells.extend(cells.iter().copied());
        let added: bool = self.words.insert(word.to_string());
        if added {
            debug!("Word {word} found: {} words found", self.words.len());
        }
        added
    }

    /// Highlight the cells again, without changing the word list.
    pub fn add_cells(&mut self, cells: &[Cell]) {
        self.cells.extend(cells.iter().copied());
    }

    /// Whether the word has been found.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether the cell belongs to a found word.
    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Return the number of found words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word has been found yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Return the found words in alphabetical order.
    pub fn get_words(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }
}

/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The display translates the pointer events into cell coordinates and calls
//! [`Game::begin_selection`] when the pointer is pressed, [`Game::extend_selection`] when it moves
//! over a cell, and [`Game::end_selection`] when it is released.
//! It then reads the cell states and the word lists back from the [`Game`] object to paint them.

use log::{debug, trace};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::found_words::FoundWords;
use crate::generator::direction::Cell;
use crate::generator::grid::Grid;
use crate::generator::random_grid::{Placement, Puzzle, RandomGrid};
use crate::generator::word_set::{ConfigError, WordSet};
use crate::player_input::Selection;

/// Highlight status of a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellState {
    Idle,

    /// The cell is part of the current selection.
    Selected,

    /// The cell is part of a word the player found, and is not selected.
    Found,
}

/// How the released selection has been interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The selection spells a word to find, forward or backward.
    Found(String),

    /// The selection spells a word that the player already found.
    AlreadyFound(String),

    /// The selection does not spell any word to find.
    NoMatch,
}

/// Result of [`Game::end_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub resolution: Resolution,

    /// Whether the found and remaining word lists changed and must be painted again.
    pub refresh_lists: bool,

    /// Whether the puzzle has just been completed. This is `true` only once per game.
    pub completed: bool,
}

/// Manage the status of the game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Parameters used to create the game.
    config: GameConfig,

    /// Letter grid and word positions.
    puzzle: Puzzle,

    /// Cells under the current drag.
    selection: Selection,

    /// Words that the player found.
    found_words: FoundWords,

    /// Whether the completion has been reported to the caller of [`Game::end_selection`].
    completion_signaled: bool,

    /// Whether the completion has been reported but not yet consumed by
    /// [`Game::take_completion`].
    completion_pending: bool,
}

impl Game {
    /// Create a [`Game`] object with a new random grid.
    ///
    /// If the configuration provides a seed, then the grid is generated from it. Otherwise the
    /// thread random generator is used.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        match config.seed {
            Some(seed) => Self::with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(config, &mut rand::rng()),
        }
    }

    /// Create a [`Game`] object with a grid generated from the given random generator.
    pub fn with_rng<R: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let mut generator: RandomGrid = RandomGrid::new(config.size, config.max_attempts);
        let puzzle: Puzzle = generator.generate(&config.words, rng)?;
        debug!(
            "New game: {} words in a {}x{} grid ({} attempts)",
            config.words.len(),
            config.size,
            config.size,
            generator.iteration
        );
        Ok(Self::from_puzzle(config, puzzle))
    }

    /// Create a [`Game`] object for an existing puzzle.
    pub fn from_puzzle(config: GameConfig, puzzle: Puzzle) -> Self {
        Self {
            config,
            puzzle,
            selection: Selection::new(),
            found_words: FoundWords::new(),
            completion_signaled: false,
            completion_pending: false,
        }
    }

    /// Start a new selection from the given cell.
    ///
    /// The previous selection is dropped. Cells of found words stay highlighted.
    /// A cell outside the grid is ignored.
    pub fn begin_selection(&mut self, cell: Cell) {
        if !self.is_inside(cell) {
            return;
        }
        self.selection.begin(cell);
    }

    /// Add the cell to the selection if it continues the selected line.
    ///
    /// Other cells are ignored and the selection does not change.
    pub fn extend_selection(&mut self, cell: Cell) {
        if !self.is_inside(cell) {
            return;
        }
        self.selection.extend(cell);
    }

    /// Drop the current selection, for example when the pointer leaves the grid before being
    /// released.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Verify the letters under the selection and end the selection.
    ///
    /// The word is accepted if it, or its reverse, is a word that the player has not found yet.
    /// Selecting again a word already found highlights its cells again but does not count it
    /// twice.
    pub fn end_selection(&mut self) -> Outcome {
        let cells: Vec<Cell> = self.selection.cells().to_vec();
        let word: String = self.puzzle.grid.word_at(&cells);
        let reversed_word: String = word.chars().rev().collect();
        if let Some(direction) = self.selection.direction() {
            trace!("Selection {word:?} released ({direction})");
        }
        self.selection.clear();

        let words: &WordSet = &self.config.words;
        let resolution: Resolution =
            if !cells.is_empty() && words.contains(&word) && !self.found_words.contains(&word) {
                self.found_words.add(&word, &cells);
                Resolution::Found(word)
            } else if !cells.is_empty()
                && words.contains(&reversed_word)
                && !self.found_words.contains(&reversed_word)
            {
                self.found_words.add(&reversed_word, &cells);
                Resolution::Found(reversed_word)
            } else if !cells.is_empty() && words.contains(&word) {
                self.found_words.add_cells(&cells);
                Resolution::AlreadyFound(word)
            } else {
                trace!("No word for selection {word:?}");
                Resolution::NoMatch
            };
        debug!("Selection released: {resolution:?}");

        let refresh_lists: bool = !matches!(resolution, Resolution::NoMatch);
        let mut completed: bool = false;
        if self.is_complete() && !self.completion_signaled {
            debug!("All the words are found");
            self.completion_signaled = true;
            self.completion_pending = true;
            completed = true;
        }
        Outcome {
            resolution,
            refresh_lists,
            completed,
        }
    }

    /// Whether the player found all the words.
    pub fn is_complete(&self) -> bool {
        self.found_words.len() == self.config.words.len()
    }

    /// Return `true` once after the puzzle is completed, and `false` otherwise.
    pub fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }

    /// Return the highlight status of the cell.
    pub fn cell_state(&self, cell: Cell) -> CellState {
        if self.selection.contains(cell) {
            CellState::Selected
        } else if self.found_words.contains_cell(cell) {
            CellState::Found
        } else {
            CellState::Idle
        }
    }

    /// Return the selected cells, in selection order.
    pub fn get_selection(&self) -> &[Cell] {
        self.selection.cells()
    }

    /// Return the letters under the current selection.
    pub fn get_selected_word(&self) -> String {
        self.puzzle.grid.word_at(self.selection.cells())
    }

    /// Return the words found so far, in alphabetical order.
    pub fn get_found_words(&self) -> Vec<String> {
        self.found_words.get_words()
    }

    /// Return the words still to find, in alphabetical order.
    pub fn get_remaining_words(&self) -> Vec<String> {
        self.config
            .words
            .iter()
            .filter(|w| !self.found_words.contains(w))
            .cloned()
            .collect()
    }

    /// Return the letter grid.
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// Return the words to find.
    pub fn word_set(&self) -> &WordSet {
        &self.config.words
    }

    /// Return the position of the words in the grid (the solution).
    pub fn placements(&self) -> &[Placement] {
        &self.puzzle.placements
    }

    fn is_inside(&self, cell: Cell) -> bool {
        if cell.is_inside(self.puzzle.grid.size()) {
            true
        } else {
            trace!("Cell {cell} ignored: outside the grid");
            false
        }
    }
}

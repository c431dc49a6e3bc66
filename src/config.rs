/*
config.rs

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

//! Build-time constants and game configuration.

use crate::generator::word_set::{ConfigError, WordSet};

pub static APPLICATION_NAME: &str = "Wordsearch";
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
pub static COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Words to find when none are given on the command line.
pub const DEFAULT_WORDS: [&str; 6] = [
    "CROATIA",
    "ITALY",
    "BRAZIL",
    "FRANCE",
    "SWITZERLAND",
    "EGYPT",
];

/// Number of rows and columns of the grid when none is given on the command line.
pub const DEFAULT_GRID_SIZE: usize = 11;

/// Parameters for creating a game.
///
/// The object is passed to the generator and kept by [`crate::game::Game`], so that several games
/// can be created one after the other with different parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Words to hide in the grid.
    pub words: WordSet,

    /// Number of rows and columns.
    pub size: usize,

    /// Maximum number of placement attempts for each word.
    /// When `None`, the generator retries until the word fits.
    pub max_attempts: Option<usize>,

    /// Seed for the random generator. When `None`, the thread random generator is used.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WordSet::from_words(DEFAULT_WORDS).unwrap_or_default(),
            size: DEFAULT_GRID_SIZE,
            max_attempts: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a [`GameConfig`] object from a word list and a grid size.
    ///
    /// # Errors
    ///
    /// The words are normalized and verified by [`WordSet::from_words`], and the size must be
    /// large enough for the longest word.
    pub fn new<I, S>(words: I, size: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: WordSet = WordSet::from_words(words)?;
        words.check_fits(size)?;
        Ok(Self {
            words,
            size,
            max_attempts: None,
            seed: None,
        })
    }

    /// Bound the number of placement attempts for each word.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Seed the random generator.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

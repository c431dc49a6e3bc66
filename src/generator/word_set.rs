/*
word_set.rs

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

//! Set of the words to find, and configuration errors.

use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

/// Type of errors raised when a game cannot be created from its configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The word does not fit in the grid.
    WordTooLong { word: String, size: usize },

    /// The grid has no cells.
    EmptyGrid,

    /// A word of the list is empty.
    EmptyWord,

    /// The word contains characters other than ASCII letters.
    InvalidWord(String),

    /// The generator gave up placing the word after the configured number of attempts.
    PlacementExhausted { word: String, attempts: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::WordTooLong { word, size } => write!(
                f,
                "the word {word} ({} letters) does not fit in a {size}x{size} grid",
                word.chars().count()
            ),
            ConfigError::EmptyGrid => write!(f, "the grid size must be at least 1"),
            ConfigError::EmptyWord => write!(f, "the word list contains an empty word"),
            ConfigError::InvalidWord(word) => {
                write!(f, "the word {word} must only contain letters from A to Z")
            }
            ConfigError::PlacementExhausted { word, attempts } => write!(
                f,
                "cannot place the word {word} in the grid after {attempts} attempts"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Words to find in the grid.
///
/// Words are stored in uppercase and without duplicates. Iterating over the set returns the
/// words in alphabetical order, which gives the generator a deterministic placement order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    /// Create a [`WordSet`] object from a list of words.
    ///
    /// Words are trimmed and converted to uppercase. Duplicated words are kept once.
    ///
    /// # Errors
    ///
    /// Return an error if a word is empty or if it contains characters other than ASCII letters.
    pub fn from_words<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: BTreeSet<String> = BTreeSet::new();
        for word in words {
            let word: String = word.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() {
                return Err(ConfigError::EmptyWord);
            }
            if !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(ConfigError::InvalidWord(word));
            }
            set.insert(word);
        }
        Ok(Self { words: set })
    }

    /// Verify that all the words fit in a grid of `size` rows and columns.
    pub fn check_fits(&self, size: usize) -> Result<(), ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        match self.words.iter().find(|w| w.len() > size) {
            Some(word) => Err(ConfigError::WordTooLong {
                word: word.clone(),
                size,
            }),
            None => Ok(()),
        }
    }

    /// Whether the set contains the given word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Return the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Return an iterator over the words, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}

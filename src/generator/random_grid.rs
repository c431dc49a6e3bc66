/*
random_grid.rs

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

//! Generate a random word search grid.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::time::Instant;

use super::direction::{Cell, Direction, NUM_PLACEMENT_DIRECTIONS};
use super::grid::Grid;
use super::word_set::{ConfigError, WordSet};

/// Letters used for filling the cells that no word uses.
const FILL_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Position of a word in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The word.
    pub word: String,

    /// Cell of the first letter.
    pub start: Cell,

    /// Direction in which the word is written. Always one of the placement directions.
    pub direction: Direction,
}

impl Placement {
    /// Return the cells of the word, from the first letter to the last.
    pub fn cells(&self) -> Vec<Cell> {
        (0..self.word.chars().count())
            .filter_map(|i| self.start.shifted(self.direction, i))
            .collect()
    }
}

/// Grid and the position of its words.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub grid: Grid,

    /// Word positions, in the order the words were placed.
    pub placements: Vec<Placement>,
}

/// [`RandomGrid`] object.
pub struct RandomGrid {
    /// Number of rows and columns.
    pub size: usize,

    /// Maximum number of attempts for placing each word. No limit when `None`.
    pub max_attempts: Option<usize>,

    /// Number of placement attempts it took to generate the last grid.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last grid.
    pub duration: f32,
}

impl RandomGrid {
    /// Create the object.
    pub fn new(size: usize, max_attempts: Option<usize>) -> Self {
        Self {
            size,
            max_attempts,
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a random grid that contains all the given words.
    ///
    /// Words are placed one after the other, from the longest to the shortest, and in
    /// alphabetical order for words of the same length. For each word, a direction
    /// and a starting cell are drawn until the word fits: it must stay inside the grid and every
    /// cell it goes through must be empty or already hold the same letter.
    /// The remaining cells are then filled with random letters.
    ///
    /// Without [`RandomGrid::max_attempts`], there is no bound on the number of draws: a word
    /// list that leaves no room for a word makes the method loop forever.
    ///
    /// # Errors
    ///
    /// The method returns an error if a word is longer than the grid size, or if a word could
    /// not be placed within [`RandomGrid::max_attempts`] draws.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        words: &WordSet,
        rng: &mut R,
    ) -> Result<Puzzle, ConfigError> {
        words.check_fits(self.size)?;

        self.iteration = 0;
        self.duration = 0.0;
        let start: Instant = Instant::now();

        let mut cells: Vec<Option<char>> = vec![None; self.size * self.size];
        let mut placements: Vec<Placement> = Vec::with_capacity(words.len());

        // Longest words first, while the grid is still mostly empty
        let mut ordered: Vec<&String> = words.iter().collect();
        ordered.sort_by_key(|w| Reverse(w.len()));

        for word in ordered {
            let placement: Placement = self.place_word(word, &mut cells, rng)?;
            debug!(
                "Word {} placed at {} ({})",
                placement.word, placement.start, placement.direction
            );
            placements.push(placement);
        }

        let letters: Vec<char> = cells
            .into_iter()
            .map(|c| match c {
                Some(letter) => letter,
                None => FILL_LETTERS[rng.random_range(0..FILL_LETTERS.len())] as char,
            })
            .collect();

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        Ok(Puzzle {
            grid: Grid::from_letters(self.size, letters),
            placements,
        })
    }

    /// Draw positions for the word until it fits, and write it in the cells.
    fn place_word<R: Rng + ?Sized>(
        &mut self,
        word: &str,
        cells: &mut [Option<char>],
        rng: &mut R,
    ) -> Result<Placement, ConfigError> {
        let letters: Vec<char> = word.chars().collect();
        let mut attempts: usize = 0;

        loop {
            if let Some(max) = self.max_attempts
                && attempts >= max
            {
                debug!("Giving up on word {word} after {attempts} attempts");
                return Err(ConfigError::PlacementExhausted {
                    word: word.to_string(),
                    attempts,
                });
            }
            attempts += 1;
            self.iteration += 1;

            let Some(direction) =
                Direction::from_repr(rng.random_range(0..NUM_PLACEMENT_DIRECTIONS))
            else {
                continue;
            };
            let start: Cell = Cell::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );

            // The last letter must stay inside the grid
            if start
                .offset(direction, letters.len() - 1, self.size)
                .is_none()
            {
                continue;
            }

            let run: Option<Vec<usize>> = (0..letters.len())
                .map(|i| {
                    start
                        .offset(direction, i, self.size)
                        .map(|c| c.row * self.size + c.col)
                })
                .collect();
            let Some(run) = run else {
                continue;
            };

            // Words can cross, but only on a shared letter
            let fits: bool = run
                .iter()
                .zip(&letters)
                .all(|(i, letter)| cells[*i].is_none_or(|c| c == *letter));
            if !fits {
                continue;
            }

            for (i, letter) in run.iter().zip(&letters) {
                cells[*i] = Some(*letter);
            }
            debug!("Word {word}: {attempts} attempts");
            return Ok(Placement {
                word: word.to_string(),
                start,
                direction,
            });
        }
    }
}

/// Generate a grid of `size` rows and columns that hides the given words, by using the thread
/// random generator.
pub fn generate(words: &WordSet, size: usize) -> Result<Grid, ConfigError> {
    RandomGrid::new(size, None)
        .generate(words, &mut rand::rng())
        .map(|puzzle| puzzle.grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn countries() -> WordSet {
        WordSet::from_words(["CROATIA", "ITALY", "BRAZIL", "FRANCE", "SWITZERLAND", "EGYPT"])
            .unwrap()
    }

    #[test]
    fn every_word_is_written_along_its_placement() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = RandomGrid::new(11, None)
                .generate(&countries(), &mut rng)
                .unwrap();
            assert_eq!(puzzle.placements.len(), 6);
            for placement in &puzzle.placements {
                assert!(placement.direction.is_placement());
                let cells = placement.cells();
                assert!(cells.iter().all(|c| c.is_inside(11)));
                assert_eq!(puzzle.grid.word_at(&cells), placement.word);
            }
        }
    }

    #[test]
    fn placement_cells_follow_the_direction() {
        let placement = Placement {
            word: "DOG".to_string(),
            start: Cell::new(2, 0),
            direction: Direction::NorthEast,
        };
        assert_eq!(
            placement.cells(),
            vec![Cell::new(2, 0), Cell::new(1, 1), Cell::new(0, 2)]
        );
    }

    #[test]
    fn every_cell_holds_an_uppercase_letter() {
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = RandomGrid::new(11, None)
            .generate(&countries(), &mut rng)
            .unwrap();
        let rows = puzzle.grid.rows();
        assert_eq!(rows.len(), 11);
        for row in rows {
            assert_eq!(row.len(), 11);
            assert!(row.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn longest_words_are_placed_first() {
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = RandomGrid::new(11, None)
            .generate(&countries(), &mut rng)
            .unwrap();
        let placed: Vec<&str> = puzzle.placements.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(
            placed,
            vec!["SWITZERLAND", "CROATIA", "BRAZIL", "FRANCE", "EGYPT", "ITALY"]
        );
    }

    #[test]
    fn same_seed_gives_same_grid() {
        let a = RandomGrid::new(11, None)
            .generate(&countries(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = RandomGrid::new(11, None)
            .generate(&countries(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn word_filling_the_whole_row_fits() {
        let words = WordSet::from_words(["ABCD"]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = RandomGrid::new(4, None).generate(&words, &mut rng).unwrap();
        assert!(puzzle.grid.find("ABCD").is_some());
    }

    #[test]
    fn too_long_word_is_a_config_error() {
        let words = WordSet::from_words(["CAT", "GIRAFFE"]).unwrap();
        let err = generate(&words, 4).unwrap_err();
        assert_eq!(
            err,
            ConfigError::WordTooLong {
                word: "GIRAFFE".to_string(),
                size: 4
            }
        );
    }

    #[test]
    fn bounded_attempts_give_up() {
        // Two one-row words on a single cell cannot both fit
        let words = WordSet::from_words(["A", "B"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut generator = RandomGrid::new(1, Some(50));
        let err = generator.generate(&words, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigError::PlacementExhausted {
                word: "B".to_string(),
                attempts: 50
            }
        );
    }

    #[test]
    fn empty_word_list_gives_filler_grid() {
        let grid = generate(&WordSet::default(), 3).unwrap();
        assert_eq!(grid.size(), 3);
        assert!(grid.rows().iter().all(|r| r.len() == 3));
    }
}

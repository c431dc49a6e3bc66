/*
draw.rs

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

//! Draw the game as text.
//!
//! Each cell takes [`CELL_WIDTH`] characters:
//!
//! - ` A ` for a cell in no particular state,
//! - `[A]` for a cell in the current selection,
//! - `(a)` for a cell that belongs to a found word.
//!
//! With coordinates, the grid is preceded by a line with the column numbers, and each row starts
//! with its row number, so that the player can type the coordinates of the cells.

use std::fmt::Write;

use crate::game::{CellState, Game};
use crate::generator::direction::Cell;
use crate::generator::random_grid::Placement;

/// Number of characters for each cell.
pub const CELL_WIDTH: usize = 3;

/// Number of characters before the first cell of each row (the row number).
const MARGIN: usize = 4;

/// Draw object that is used to draw the game components.
#[derive(Debug, Default)]
pub struct Draw {
    /// Whether to print the row and column numbers.
    coordinates: bool,
}

impl Draw {
    /// Create a [`Draw`] object.
    pub fn new(coordinates: bool) -> Self {
        Self { coordinates }
    }

    /// Return the text of a single cell.
    fn cell(letter: char, state: CellState) -> String {
        match state {
            CellState::Idle => format!(" {letter} "),
            CellState::Selected => format!("[{letter}]"),
            CellState::Found => format!("({})", letter.to_ascii_lowercase()),
        }
    }

    /// Draw the grid with the state of each cell.
    pub fn grid(&self, game: &Game) -> String {
        let size: usize = game.grid().size();
        let mut out: String = String::new();

        if self.coordinates {
            out.push_str(&" ".repeat(MARGIN));
            for col in 0..size {
                let _ = write!(out, "{col:^width$}", width = CELL_WIDTH);
            }
            out.push('\n');
        }

        for row in 0..size {
            if self.coordinates {
                let _ = write!(out, "{row:>2}  ");
            }
            for col in 0..size {
                let cell: Cell = Cell::new(row, col);
                if let Some(letter) = game.grid().get(cell) {
                    out.push_str(&Self::cell(letter, game.cell_state(cell)));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Draw the list of the words to find and the list of the found words.
    pub fn word_lists(&self, game: &Game) -> String {
        format!(
            "Find these words: {}\nFound ({}/{}): {}\n",
            game.get_remaining_words().join(", "),
            game.get_found_words().len(),
            game.word_set().len(),
            game.get_found_words().join(", ")
        )
    }

    /// Draw the position of each word.
    pub fn solution(&self, placements: &[Placement]) -> String {
        let mut out: String = String::new();
        for p in placements {
            let _ = writeln!(out, "{:<16} {} {}", p.word, p.start, p.direction);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::generator::direction::Direction;
    use crate::generator::grid::Grid;
    use crate::generator::random_grid::Puzzle;

    fn game() -> Game {
        let config = GameConfig::new(["AB"], 2).unwrap();
        let puzzle = Puzzle {
            grid: Grid::from_rows(&["AB", "CD"]).unwrap(),
            placements: vec![Placement {
                word: "AB".to_string(),
                start: Cell::new(0, 0),
                direction: Direction::East,
            }],
        };
        Game::from_puzzle(config, puzzle)
    }

    #[test]
    fn cells_show_their_state() {
        let mut game = game();
        game.begin_selection(Cell::new(0, 0));
        game.extend_selection(Cell::new(0, 1));
        let draw = Draw::new(false);
        assert_eq!(draw.grid(&game), "[A][B]\n C  D \n");

        game.end_selection();
        game.begin_selection(Cell::new(1, 1));
        assert_eq!(draw.grid(&game), "(a)(b)\n C [D]\n");
    }

    #[test]
    fn coordinates_frame_the_grid() {
        let draw = Draw::new(true);
        assert_eq!(draw.grid(&game()), "     0  1 \n 0   A  B \n 1   C  D \n");
    }

    #[test]
    fn word_lists_follow_the_game() {
        let mut game = game();
        let draw = Draw::default();
        assert_eq!(draw.word_lists(&game), "Find these words: AB\nFound (0/1): \n");
        game.begin_selection(Cell::new(0, 1));
        game.extend_selection(Cell::new(0, 0));
        game.end_selection();
        assert_eq!(draw.word_lists(&game), "Find these words: \nFound (1/1): AB\n");
    }

    #[test]
    fn solution_lists_each_word() {
        let draw = Draw::default();
        let game = game();
        assert_eq!(
            draw.solution(game.placements()),
            "AB               (0, 0) horizontal\n"
        );
    }
}

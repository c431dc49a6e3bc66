/*
generator.rs

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

//! Build random word search grids.
//!
//! The words to find are collected in a [`word_set::WordSet`] object, which normalizes them to
//! uppercase and rejects the words that cannot be used.
//!
//! A [`random_grid::RandomGrid`] object then writes each word along one of four directions
//! (horizontal, vertical, diagonal down, and diagonal up), and fills the other cells with random
//! letters. The result is a [`random_grid::Puzzle`] object, which holds the
//! [`grid::Grid`] of letters and the [`random_grid::Placement`] of each word (the solution).
//! Words can cross each other when they share the letter at the crossing.
//!
//! Cells and the eight directions the player can use for selecting words are defined in the
//! [`direction`] module.

pub mod direction;
pub mod grid;
pub mod random_grid;
pub mod word_set;

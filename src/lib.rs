/*
lib.rs

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

//! Word search puzzle game.
//!
//! The [`generator`] module builds a grid of letters that hides a list of words. The [`game`]
//! module follows the player's selection over the grid and reports the words found. Displays
//! only translate pointer events into cell coordinates and paint the game state, as the
//! [`terminal`] module does with the text drawn by the [`draw`] module.

pub mod cli_options;
pub mod config;
pub mod draw;
pub mod found_words;
pub mod game;
pub mod generator;
pub mod player_input;
pub mod terminal;

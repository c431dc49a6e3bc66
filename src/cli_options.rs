/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Wordsearch starts a game with the default word list in the terminal.
//! The `--generate` option is intended for developers: it prints a random grid with the position
//! of its words, as text or as JSON.
//!
//! # Examples
//!
//! Play with your own words in a 6x6 grid:
//!
//! ```text
//! $ wordsearch --words cat,dog,bird,fish --size 6
//! ```
//!
//! Generate a grid and print it in JSON format:
//!
//! ```text
//! $ wordsearch -g -j --words cat,dog --size 4 --seed 7
//! ```
//!
//! The JSON document holds the grid `size`, the `rows` of letters, and the `placements` of the
//! words (word, start cell, and direction).

use clap::Parser;
use log::{debug, error};
use serde::Serialize;
use std::env;
use std::error::Error;
use std::io;

use crate::config::{COPYRIGHT_NOTICE, DEFAULT_GRID_SIZE, DEFAULT_WORDS, GameConfig};
use crate::draw::Draw;
use crate::game::Game;
use crate::generator::random_grid::Placement;
use crate::terminal::Terminal;

/// Find the hidden words in a grid of letters.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Comma-separated list of the words to find
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_WORDS.map(String::from))]
    words: Vec<String>,

    /// Number of rows and columns of the grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Seed for the random generator, to get the same grid again
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of attempts for placing each word (no limit by default)
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Print a random grid and the position of its words, and exit
    #[arg(short, long, default_value_t = false)]
    generate: bool,

    /// Print the generated grid in JSON format
    #[arg(short, long, default_value_t = false, requires = "generate")]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Generated grid, as printed in JSON format.
#[derive(Serialize)]
struct PuzzleExport<'a> {
    size: usize,
    rows: Vec<String>,
    placements: &'a [Placement],
}

/// Parse and process command-line options, and return the exit status.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Options: {args:?}");

    let config: GameConfig = match GameConfig::new(&args.words, args.size) {
        Ok(c) => c.with_max_attempts(args.max_attempts).with_seed(args.seed),
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    match run(&args, config) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Create the game and either print it or play it.
fn run(args: &Args, config: GameConfig) -> Result<(), Box<dyn Error>> {
    let game: Game = Game::new(config)?;

    if args.generate {
        // Verify that the words can be read in the generated grid
        for word in game.word_set().iter() {
            if game.grid().find(word).is_none() {
                return Err(format!("Bug: the word {word} is missing from the grid").into());
            }
        }

        if args.json {
            let export: PuzzleExport = PuzzleExport {
                size: game.grid().size(),
                rows: game.grid().rows(),
                placements: game.placements(),
            };
            println!("{}", serde_json::to_string_pretty(&export)?);
        } else {
            let draw: Draw = Draw::new(false);
            print!("{}", game.grid());
            println!();
            print!("{}", draw.solution(game.placements()));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut terminal = Terminal::new(game, stdin.lock(), io::stdout());
    if terminal.run()? {
        debug!("Puzzle solved");
    }
    Ok(())
}

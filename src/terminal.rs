/*
terminal.rs

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

//! Play the game in a terminal.
//!
//! The player types one command per line. The commands stand for the pointer events of a
//! graphical interface:
//!
//! ```text
//! b ROW COL           press the pointer on a cell
//! e ROW COL           drag the pointer over a cell
//! s ROW COL ROW COL   drag from the first cell to the second one in one go
//! u                   release the pointer
//! c                   cancel the drag
//! p                   print the grid again
//! q                   quit
//! ```

use log::debug;
use std::io::{self, BufRead, Write};

use crate::draw::Draw;
use crate::game::{Game, Outcome, Resolution};
use crate::generator::direction::{Cell, Direction};

const HELP: &str = "Commands: b ROW COL | e ROW COL | s ROW COL ROW COL | u | c | p | q";

/// Command typed by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Begin(Cell),
    Extend(Cell),
    Stroke(Cell, Cell),
    Release,
    Cancel,
    Print,
    Quit,
}

impl Command {
    /// Parse a line typed by the player. Return None if the line is not a valid command.
    pub fn parse(line: &str) -> Option<Command> {
        let mut tokens = line.split_whitespace();
        let name: &str = tokens.next()?;
        let numbers: Vec<usize> = tokens
            .map(|t| t.parse::<usize>())
            .collect::<Result<_, _>>()
            .ok()?;

        match (name.to_ascii_lowercase().as_str(), numbers.as_slice()) {
            ("b", [row, col]) => Some(Command::Begin(Cell::new(*row, *col))),
            ("e", [row, col]) => Some(Command::Extend(Cell::new(*row, *col))),
            ("s", [r1, c1, r2, c2]) => {
                Some(Command::Stroke(Cell::new(*r1, *c1), Cell::new(*r2, *c2)))
            }
            ("u", []) => Some(Command::Release),
            ("c", []) => Some(Command::Cancel),
            ("p", []) => Some(Command::Print),
            ("q", []) => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Terminal front end for a [`Game`] object.
pub struct Terminal<R: BufRead, W: Write> {
    game: Game,
    draw: Draw,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a [`Terminal`] object.
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            draw: Draw::new(true),
            input,
            output,
        }
    }

    /// Return the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read and process the commands until the puzzle is complete, the player quits, or the
    /// input is closed.
    ///
    /// Return `true` if the player found all the words.
    pub fn run(&mut self) -> io::Result<bool> {
        self.paint()?;
        writeln!(self.output, "{HELP}")?;

        let mut line: String = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // The player went away in the middle of a drag
                debug!("End of input");
                self.game.clear_selection();
                return Ok(false);
            }

            let Some(command) = Command::parse(&line) else {
                writeln!(self.output, "{HELP}")?;
                continue;
            };
            debug!("Command {command:?}");

            match command {
                Command::Begin(cell) => self.game.begin_selection(cell),
                Command::Extend(cell) => self.game.extend_selection(cell),
                Command::Stroke(from, to) => self.stroke(from, to),
                Command::Release => {
                    let outcome: Outcome = self.game.end_selection();
                    self.report(&outcome)?;
                    if self.game.take_completion() {
                        writeln!(self.output, "Congratulations! You found all the words!")?;
                        return Ok(true);
                    }
                }
                Command::Cancel => {
                    self.game.clear_selection();
                    self.paint()?;
                }
                Command::Print => self.paint()?,
                Command::Quit => {
                    self.game.clear_selection();
                    return Ok(false);
                }
            }
        }
    }

    /// Select the cells from `from` to `to`, as if the pointer was dragged between them.
    fn stroke(&mut self, from: Cell, to: Cell) {
        self.game.begin_selection(from);
        let Some(direction) = Direction::toward(from, to) else {
            return;
        };
        let mut steps: usize = 1;
        while let Some(cell) = from.shifted(direction, steps) {
            self.game.extend_selection(cell);
            if cell == to || !cell.is_inside(self.game.grid().size()) {
                break;
            }
            steps += 1;
        }
    }

    /// Tell the player what the released selection gave, and paint the game.
    fn report(&mut self, outcome: &Outcome) -> io::Result<()> {
        match &outcome.resolution {
            Resolution::Found(word) => writeln!(self.output, "Found {word}!")?,
            Resolution::AlreadyFound(word) => writeln!(self.output, "{word} is already found")?,
            Resolution::NoMatch => (),
        }
        self.paint()
    }

    fn paint(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.draw.grid(&self.game))?;
        write!(self.output, "{}", self.draw.word_lists(&self.game))?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::generator::grid::Grid;
    use crate::generator::random_grid::{Placement, Puzzle};
    use std::io::Cursor;

    fn game() -> Game {
        let config = GameConfig::new(["CAT", "DOG"], 4).unwrap();
        let puzzle = Puzzle {
            grid: Grid::from_rows(&["CATX", "QOZY", "GODW", "RPLT"]).unwrap(),
            placements: vec![
                Placement {
                    word: "CAT".to_string(),
                    start: Cell::new(0, 0),
                    direction: Direction::East,
                },
                Placement {
                    word: "DOG".to_string(),
                    start: Cell::new(2, 2),
                    direction: Direction::West,
                },
            ],
        };
        Game::from_puzzle(config, puzzle)
    }

    fn play(script: &str) -> (bool, String, Game) {
        let mut output: Vec<u8> = Vec::new();
        let (done, game) = {
            let mut terminal =
                Terminal::new(game(), Cursor::new(script.to_string()), &mut output);
            let done = terminal.run().unwrap();
            (done, terminal.game().clone())
        };
        (done, String::from_utf8(output).unwrap(), game)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("b 1 2"), Some(Command::Begin(Cell::new(1, 2))));
        assert_eq!(Command::parse("  E 0 3 "), Some(Command::Extend(Cell::new(0, 3))));
        assert_eq!(
            Command::parse("s 0 0 0 2"),
            Some(Command::Stroke(Cell::new(0, 0), Cell::new(0, 2)))
        );
        assert_eq!(Command::parse("u"), Some(Command::Release));
        assert_eq!(Command::parse("b 1"), None);
        assert_eq!(Command::parse("b -1 2"), None);
        assert_eq!(Command::parse("u 1"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("x"), None);
    }

    #[test]
    fn scripted_session_completes_the_puzzle_once() {
        let script = "b 0 0\ne 0 1\ne 0 2\nu\ns 2 0 2 2\nu\nb 0 0\n";
        let (done, output, game) = play(script);
        assert!(done);
        assert_eq!(output.matches("Congratulations").count(), 1);
        assert!(output.contains("Found CAT!"));
        assert!(output.contains("Found DOG!"));
        assert_eq!(game.get_found_words(), vec!["CAT", "DOG"]);
        // The loop stops after the completion, so the last command is never read
        assert!(game.get_selection().is_empty());
    }

    #[test]
    fn end_of_input_drops_the_drag() {
        let (done, output, game) = play("b 0 0\ne 0 1\n");
        assert!(!done);
        assert!(game.get_selection().is_empty());
        assert!(game.get_found_words().is_empty());
        assert!(output.starts_with("     0  1  2  3 \n"));
    }

    #[test]
    fn unknown_commands_print_the_help() {
        let (done, output, _) = play("hello\nq\nb 0 0\n");
        assert!(!done);
        assert_eq!(output.matches(HELP).count(), 2);
    }

    #[test]
    fn stroke_stops_at_the_grid_border() {
        let mut output: Vec<u8> = Vec::new();
        let mut terminal = Terminal::new(game(), Cursor::new(String::new()), &mut output);
        terminal.stroke(Cell::new(0, 1), Cell::new(0, 9));
        assert_eq!(
            terminal.game().get_selection(),
            vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3)]
        );
        assert_eq!(terminal.game().get_selected_word(), "ATX");

        let (_, output, game) = play("s 0 1 0 9\nu\nq\n");
        assert!(!output.contains("Found ATX"));
        assert!(game.get_found_words().is_empty());
    }

    #[test]
    fn stroke_to_a_huge_coordinate_is_ignored() {
        let (done, output, game) = play("s 1 0 9223372036854775808 0\nu\nq\n");
        assert!(!done);
        assert!(!output.contains("Found Q"));
        assert!(game.get_found_words().is_empty());
        assert!(game.get_selection().is_empty());
    }
}

use rand::SeedableRng;
use rand::rngs::StdRng;

use wordsearch::config::GameConfig;
use wordsearch::game::{CellState, Game, Resolution};
use wordsearch::generator::direction::Cell;
use wordsearch::generator::random_grid::{RandomGrid, generate};
use wordsearch::generator::word_set::{ConfigError, WordSet};

fn drag(game: &mut Game, cells: &[Cell]) -> Resolution {
    game.begin_selection(cells[0]);
    for cell in &cells[1..] {
        game.extend_selection(*cell);
    }
    game.end_selection().resolution
}

#[test]
fn cat_and_dog_end_to_end() {
    for seed in 0..10 {
        let config = GameConfig::new(["CAT", "DOG"], 4)
            .unwrap()
            .with_seed(Some(seed));
        let mut game = Game::new(config).unwrap();
        let placements = game.placements().to_vec();
        assert_eq!(placements.len(), 2);

        let mut signals = 0;
        for placement in &placements {
            let cells = placement.cells();
            game.begin_selection(cells[0]);
            for cell in &cells[1..] {
                game.extend_selection(*cell);
            }
            let outcome = game.end_selection();
            assert_eq!(outcome.resolution, Resolution::Found(placement.word.clone()));
            if outcome.completed {
                signals += 1;
            }
            if game.take_completion() {
                signals += 1;
            }
        }
        // Once through the outcome, once through the query
        assert_eq!(signals, 2);
        assert_eq!(game.get_found_words(), vec!["CAT", "DOG"]);
        assert!(game.get_remaining_words().is_empty());
        assert!(game.is_complete());

        // Re-tracing a word changes nothing
        let first = placements[0].cells();
        drag(&mut game, &first);
        assert_eq!(game.get_found_words().len(), 2);
        assert!(!game.take_completion());
    }
}

#[test]
fn backward_selection_finds_the_word() {
    let config = GameConfig::new(["PUZZLE", "GRID", "WORD"], 8)
        .unwrap()
        .with_seed(Some(12));
    let mut game = Game::new(config).unwrap();
    let placement = game.placements()[0].clone();
    let mut cells = placement.cells();
    cells.reverse();
    assert_eq!(drag(&mut game, &cells), Resolution::Found(placement.word.clone()));
    for cell in &cells {
        assert_eq!(game.cell_state(*cell), CellState::Found);
    }
}

#[test]
fn generated_grids_hide_every_word() {
    let words = WordSet::from_words(["RUST", "CARGO", "CRATE", "TRAIT", "BORROW", "LIFETIME"])
        .unwrap();
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = RandomGrid::new(10, None).generate(&words, &mut rng).unwrap();
        let grid = &puzzle.grid;
        for word in words.iter() {
            assert!(grid.find(word).is_some(), "{word} missing with seed {seed}");
        }
        for row in grid.rows() {
            assert_eq!(row.chars().count(), 10);
            assert!(row.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}

#[test]
fn selection_stays_on_one_line() {
    let config = GameConfig::new(["AB"], 6).unwrap().with_seed(Some(1));
    let mut game = Game::new(config).unwrap();
    game.begin_selection(Cell::new(2, 2));
    let moves = [
        Cell::new(3, 3),
        Cell::new(3, 4),
        Cell::new(4, 4),
        Cell::new(5, 4),
        Cell::new(2, 2),
        Cell::new(5, 5),
        Cell::new(9, 9),
    ];
    for cell in moves {
        game.extend_selection(cell);
        let selection = game.get_selection();
        for pair in selection.windows(2) {
            assert_eq!(pair[1].row - pair[0].row, 1);
            assert_eq!(pair[1].col - pair[0].col, 1);
        }
    }
    assert_eq!(
        game.get_selection(),
        &[Cell::new(2, 2), Cell::new(3, 3), Cell::new(4, 4), Cell::new(5, 5)]
    );
}

#[test]
fn configuration_errors() {
    let words = WordSet::from_words(["ELEPHANT"]).unwrap();
    assert_eq!(
        generate(&words, 5).unwrap_err(),
        ConfigError::WordTooLong {
            word: "ELEPHANT".to_string(),
            size: 5
        }
    );
    assert_eq!(
        GameConfig::new(["CAT"], 0).unwrap_err(),
        ConfigError::EmptyGrid
    );
    assert!(matches!(
        GameConfig::new(["R2D2"], 5),
        Err(ConfigError::InvalidWord(_))
    ));
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_word_search::*;

#[test]
fn solving_recovers_everything_the_builder_placed() {
    let words = ["penguin", "walrus", "seal", "orca", "tern"];
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = build_puzzle_with_rng(&words, &PuzzleConfig::default(), &mut rng).unwrap();

        let result = solve(&grid, &words);
        assert_eq!(result.found.len(), words.len(), "seed {seed}");
        assert!(result.not_found.is_empty(), "seed {seed}");
    }
}

#[test]
fn crossing_words_are_both_recovered() {
    let config = PuzzleConfig {
        height: Some(3),
        width: Some(3),
        orientations: vec![Orientation::Horizontal, Orientation::Vertical],
        ..PuzzleConfig::default()
    };
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = build_puzzle_with_rng(&["cat", "car"], &config, &mut rng).unwrap();
        assert_eq!(grid.height(), 3, "seed {seed}");
        assert_eq!(grid.width(), 3, "seed {seed}");

        let result = solve(&grid, &["cat", "car"]);
        assert_eq!(result.found.len(), 2, "seed {seed}");
        assert!(result.not_found.is_empty(), "seed {seed}");
    }
}

#[test]
fn a_near_miss_lands_in_not_found() {
    let grid = Grid::from_rows(&["bolt", "oars", "gulf", "team"]).unwrap();
    let result = solve(&grid, &["bolt", "bole", "gulf"]);

    let found: Vec<&str> = result.found.iter().map(|hit| hit.word.as_str()).collect();
    assert_eq!(found, vec!["bolt", "gulf"]);
    assert_eq!(result.not_found, vec!["bole".to_string()]);
}

#[test]
fn every_word_lands_in_exactly_one_list() {
    let grid = Grid::from_rows(&["cat"]).unwrap();
    let words = ["dog", "cat", "tac"];
    let result = solve(&grid, &words);

    assert_eq!(result.found.len() + result.not_found.len(), words.len());
    let found: Vec<&str> = result.found.iter().map(|hit| hit.word.as_str()).collect();
    assert_eq!(found, vec!["cat", "tac"]);
    assert_eq!(result.not_found, vec!["dog".to_string()]);
}

#[test]
fn reversed_words_report_their_own_start_cell() {
    let grid = Grid::from_rows(&["cat"]).unwrap();
    let result = solve(&grid, &["tac"]);

    let hit = &result.found[0];
    assert_eq!((hit.x, hit.y), (2, 0));
    assert_eq!(hit.orientation, Orientation::HorizontalReversed);
}

#[test]
fn found_cells_can_be_walked_with_step() {
    let grid = Grid::from_rows(&["gnu ", " ox ", "    ", "    "]).unwrap();
    let result = solve(&grid, &["ox"]);

    let hit = &result.found[0];
    let cells: Vec<char> = (0..hit.word.chars().count())
        .map(|i| {
            let (x, y) = hit.orientation.step(hit.x, hit.y, i);
            grid.cell(x, y).unwrap()
        })
        .collect();
    assert_eq!(cells, vec!['o', 'x']);
}

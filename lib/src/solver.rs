use log::debug;

use crate::grid::Grid;
use crate::orientation::Orientation;
use crate::placement::{find_candidates, SearchOptions};
use crate::results::{FoundWord, SolveResult};

/// Locates each of `words` in `grid`.
///
/// The scan runs over all eight orientations seeking maximal overlap, and a
/// word counts as found only when the first candidate reuses the word's full
/// length, meaning every letter already matches. When a word can be read in
/// several places, the earliest hit in scan order wins (orientation order,
/// then row-major position) and the rest are ignored.
///
/// Never fails: every input word lands in exactly one of the two result
/// lists, in input order.
///
/// ```
/// use rs_word_search::{solve, Grid, Orientation};
///
/// let grid = Grid::from_rows(&["cat", "ore", "wet"]).unwrap();
/// let result = solve(&grid, &["cow", "are", "ant"]);
///
/// assert_eq!(result.found.len(), 2);
/// assert_eq!((result.found[0].x, result.found[0].y), (0, 0));
/// assert_eq!(result.found[0].orientation, Orientation::Vertical);
/// assert_eq!(result.not_found, vec!["ant".to_string()]);
/// ```
pub fn solve<S: AsRef<str>>(grid: &Grid, words: &[S]) -> SolveResult {
    let options = SearchOptions {
        orientations: &Orientation::ALL,
        require_overlap: true,
    };
    let mut result = SolveResult {
        found: Vec::new(),
        not_found: Vec::new(),
    };
    for word in words {
        let word = word.as_ref();
        let letters: Vec<char> = word.chars().collect();
        let candidates = find_candidates(grid, &options, &letters);
        match candidates.first() {
            Some(first) if first.overlap == letters.len() => result.found.push(FoundWord {
                word: word.to_string(),
                x: first.x,
                y: first.y,
                orientation: first.orientation,
            }),
            _ => {
                debug!("{:?} is not in the grid", word);
                result.not_found.push(word.to_string());
            }
        }
    }
    result
}

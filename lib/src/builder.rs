use std::cmp::Reverse;

use log::{debug, trace};
use rand::Rng;

use crate::grid::Grid;
use crate::orientation::Orientation;
use crate::placement::{find_candidates, place_word, SearchOptions};
use crate::results::WordSearchError;

/// Letters drawn at random for the cells no word covers.
const FILLER_LETTERS: &str = "abcdefghijklmnoprstuvwxyz";

/// Settings for building a puzzle. Every field has a default, so partial
/// overrides read naturally with struct-update syntax:
///
/// ```
/// use rs_word_search::PuzzleConfig;
///
/// let config = PuzzleConfig {
///     height: Some(10),
///     width: Some(12),
///     ..PuzzleConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    /// Grid height; defaults to the longest word's length.
    pub height: Option<usize>,
    /// Grid width; defaults to the longest word's length.
    pub width: Option<usize>,
    /// Orientations words may take, tried in this order while scanning.
    pub orientations: Vec<Orientation>,
    /// Fill the cells left empty after placement with random letters.
    pub fill_blanks: bool,
    /// Prefer positions that reuse letters already on the grid.
    pub overlap: bool,
    /// Placement attempts per grid size before growing.
    pub attempts: usize,
    /// How many times the grid may grow before construction fails.
    pub max_growth: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            height: None,
            width: None,
            orientations: Orientation::ALL.to_vec(),
            fill_blanks: true,
            overlap: true,
            attempts: 3,
            max_growth: 100,
        }
    }
}

/// Builds a puzzle grid containing every word in `words`.
///
/// Words are placed longest first, each at a position drawn uniformly from
/// the best candidates a full grid scan finds. If any word has no feasible
/// position, the whole grid is abandoned and rebuilt from scratch, up to
/// `config.attempts` times per size; after that both dimensions grow by one
/// and the attempts start over. Growth repeats until a build succeeds or
/// `config.max_growth` increments have been spent, which surfaces
/// [`WordSearchError::GrowthExhausted`].
///
/// ```
/// use rs_word_search::{build_puzzle_with_rng, solve, PuzzleConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let words = ["crab", "kelp", "reef"];
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = build_puzzle_with_rng(&words, &PuzzleConfig::default(), &mut rng).unwrap();
///
/// let result = solve(&grid, &words);
/// assert_eq!(result.found.len(), 3);
/// assert!(result.not_found.is_empty());
/// ```
pub fn build_puzzle_with_rng<S, R>(
    words: &[S],
    config: &PuzzleConfig,
    rng: &mut R,
) -> Result<Grid, WordSearchError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let words = validate_and_sort(words, config)?;
    let longest = words[0].len();
    let mut height = config.height.unwrap_or(longest);
    let mut width = config.width.unwrap_or(longest);
    if height == 0 || width == 0 {
        return Err(WordSearchError::InvalidDimensions { height, width });
    }

    debug!(
        "building a {}x{} puzzle from {} words, {} attempts per size",
        height,
        width,
        words.len(),
        config.attempts
    );
    let mut growths = 0;
    loop {
        for _ in 0..config.attempts {
            if let Some(mut grid) = place_all(&words, height, width, config, rng) {
                if config.fill_blanks {
                    fill_blanks_with_rng(&mut grid, rng);
                }
                return Ok(grid);
            }
        }
        if growths == config.max_growth {
            return Err(WordSearchError::GrowthExhausted { height, width });
        }
        growths += 1;
        height += 1;
        width += 1;
        debug!("every attempt failed, growing the grid to {}x{}", height, width);
    }
}

/// Builds a puzzle grid using the thread-local random number generator.
///
/// See [`build_puzzle_with_rng`] for the construction rules.
pub fn build_puzzle<S: AsRef<str>>(
    words: &[S],
    config: &PuzzleConfig,
) -> Result<Grid, WordSearchError> {
    build_puzzle_with_rng(words, config, &mut rand::thread_rng())
}

/// Fills every empty cell in `grid` with a letter drawn uniformly from the
/// filler alphabet.
pub fn fill_blanks_with_rng<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let letters = FILLER_LETTERS.as_bytes();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.cell(x, y).is_none() {
                grid.set(x, y, letters[rng.gen_range(0..letters.len())] as char);
            }
        }
    }
}

/// Fills every empty cell using the thread-local random number generator.
pub fn fill_blanks(grid: &mut Grid) {
    fill_blanks_with_rng(grid, &mut rand::thread_rng())
}

/// Checks the inputs and returns the words as char lists, longest first,
/// ties keeping their original order.
fn validate_and_sort<S: AsRef<str>>(
    words: &[S],
    config: &PuzzleConfig,
) -> Result<Vec<Vec<char>>, WordSearchError> {
    if words.is_empty() {
        return Err(WordSearchError::EmptyWordList);
    }
    if config.orientations.is_empty() {
        return Err(WordSearchError::NoOrientations);
    }
    if config.attempts == 0 {
        return Err(WordSearchError::NoAttempts);
    }
    let mut lists = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        if word.is_empty() || !word.chars().all(char::is_lowercase) {
            return Err(WordSearchError::InvalidWord(word.to_string()));
        }
        lists.push(word.chars().collect::<Vec<char>>());
    }
    lists.sort_by_key(|word| Reverse(word.len()));
    Ok(lists)
}

/// Runs one whole placement attempt on a fresh grid. `None` means some word
/// had no feasible position and the grid was abandoned.
fn place_all<R: Rng + ?Sized>(
    words: &[Vec<char>],
    height: usize,
    width: usize,
    config: &PuzzleConfig,
    rng: &mut R,
) -> Option<Grid> {
    let mut grid = Grid::new(height, width);
    let options = SearchOptions {
        orientations: &config.orientations,
        require_overlap: config.overlap,
    };
    for word in words {
        let candidates = find_candidates(&grid, &options, word);
        if candidates.is_empty() {
            debug!(
                "no feasible position for {:?} in a {}x{} grid, abandoning the attempt",
                word.iter().collect::<String>(),
                height,
                width
            );
            return None;
        }
        let chosen = candidates[rng.gen_range(0..candidates.len())];
        trace!(
            "placing {:?} at ({}, {}) {:?}, overlap {}, from {} candidates",
            word.iter().collect::<String>(),
            chosen.x,
            chosen.y,
            chosen.orientation,
            chosen.overlap,
            candidates.len()
        );
        place_word(&mut grid, word, chosen.x, chosen.y, chosen.orientation);
    }
    Some(grid)
}

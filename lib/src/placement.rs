use crate::grid::Grid;
use crate::orientation::Orientation;

/// One feasible way to place a word: where it starts, which way it runs,
/// and how many letters already on the grid it reuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) orientation: Orientation,
    pub(crate) overlap: usize,
}

/// How a candidate search scans the grid.
pub(crate) struct SearchOptions<'a> {
    /// Orientations to try, scanned in this order.
    pub(crate) orientations: &'a [Orientation],
    /// Keep only candidates that tie the best overlap found.
    pub(crate) require_overlap: bool,
}

/// Collects every position where `word` could be written into `grid`.
///
/// Each orientation is scanned row-major, x fastest, jumping via
/// [`Orientation::advance`] wherever [`Orientation::fits`] fails. With
/// overlap seeking on, a running maximum accumulates across the whole scan
/// and the collected list is trimmed at the end to candidates that tie the
/// final maximum; since the maximum only ratchets up as the scan proceeds,
/// weaker candidates pushed early are filtered out later, and the result
/// depends on scan order. With overlap seeking off, every feasible position
/// is returned.
///
/// An empty result means the word cannot be placed anywhere.
pub(crate) fn find_candidates(
    grid: &Grid,
    options: &SearchOptions,
    word: &[char],
) -> Vec<Candidate> {
    let height = grid.height();
    let width = grid.width();
    let mut candidates = Vec::new();
    let mut max_overlap = 0;

    for &orientation in options.orientations {
        let mut x = 0;
        let mut y = 0;
        while y < height {
            if orientation.fits(x, y, height, width, word.len()) {
                if let Some(overlap) = overlap_at(grid, word, x, y, orientation) {
                    if overlap >= max_overlap || !options.require_overlap {
                        max_overlap = overlap;
                        candidates.push(Candidate {
                            x,
                            y,
                            orientation,
                            overlap,
                        });
                    }
                }
                x += 1;
                if x >= width {
                    x = 0;
                    y += 1;
                }
            } else {
                let (next_x, next_y) = orientation.advance(x, y, word.len());
                x = next_x;
                y = next_y;
            }
        }
    }

    if options.require_overlap {
        candidates.retain(|candidate| candidate.overlap >= max_overlap);
    }
    candidates
}

/// Counts the letters of `word` that match letters already present along
/// `orientation` from `(x, y)`, or `None` when a differing letter blocks
/// the position. Empty cells never block.
fn overlap_at(
    grid: &Grid,
    word: &[char],
    x: usize,
    y: usize,
    orientation: Orientation,
) -> Option<usize> {
    let mut overlap = 0;
    for (i, &letter) in word.iter().enumerate() {
        let (cx, cy) = orientation.step(x, y, i);
        match grid.cell(cx, cy) {
            Some(present) if present == letter => overlap += 1,
            Some(_) => return None,
            None => {}
        }
    }
    Some(overlap)
}

/// Writes `word` into `grid` along `orientation` from `(x, y)`.
///
/// Callers take `(x, y, orientation)` from a returned candidate, which
/// guarantees every target cell is empty or already holds the same letter.
pub(crate) fn place_word(
    grid: &mut Grid,
    word: &[char],
    x: usize,
    y: usize,
    orientation: Orientation,
) {
    for (i, &letter) in word.iter().enumerate() {
        let (cx, cy) = orientation.step(x, y, i);
        grid.set(cx, cy, letter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn horizontal_only(require_overlap: bool) -> SearchOptions<'static> {
        SearchOptions {
            orientations: &[Orientation::Horizontal],
            require_overlap,
        }
    }

    #[test]
    fn overlap_counts_the_full_word_on_a_verbatim_match() {
        let grid = Grid::from_rows(&["cat"]).unwrap();
        assert_eq!(
            overlap_at(&grid, &letters("cat"), 0, 0, Orientation::Horizontal),
            Some(3)
        );
    }

    #[test]
    fn overlap_blocks_on_a_mismatched_letter() {
        let grid = Grid::from_rows(&["cap"]).unwrap();
        assert_eq!(
            overlap_at(&grid, &letters("cat"), 0, 0, Orientation::Horizontal),
            None
        );
    }

    #[test]
    fn overlap_passes_through_empty_cells() {
        let grid = Grid::from_rows(&["c t"]).unwrap();
        assert_eq!(
            overlap_at(&grid, &letters("cat"), 0, 0, Orientation::Horizontal),
            Some(2)
        );
    }

    #[test]
    fn running_maximum_filters_weaker_candidates() {
        // "t" matches the word's last letter only from x = 0; the empty
        // stretches further right score 0 and must be trimmed.
        let grid = Grid::from_rows(&["  t    "]).unwrap();
        let candidates = find_candidates(&grid, &horizontal_only(true), &letters("cat"));
        assert_eq!(
            candidates,
            vec![Candidate {
                x: 0,
                y: 0,
                orientation: Orientation::Horizontal,
                overlap: 1,
            }]
        );
    }

    #[test]
    fn disabled_overlap_keeps_every_feasible_position() {
        let grid = Grid::from_rows(&["  t    "]).unwrap();
        let candidates = find_candidates(&grid, &horizontal_only(false), &letters("cat"));
        let positions: Vec<(usize, usize)> =
            candidates.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(positions, vec![(0, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn maximum_found_late_filters_earlier_orientations() {
        // The vertical scan runs first and banks a one-letter crossing; the
        // later horizontal verbatim hit raises the bar to the full word.
        let grid = Grid::from_rows(&["cat", "   ", "   "]).unwrap();
        let options = SearchOptions {
            orientations: &[Orientation::Vertical, Orientation::Horizontal],
            require_overlap: true,
        };
        let candidates = find_candidates(&grid, &options, &letters("cat"));
        assert_eq!(
            candidates,
            vec![Candidate {
                x: 0,
                y: 0,
                orientation: Orientation::Horizontal,
                overlap: 3,
            }]
        );
    }

    #[test]
    fn candidates_come_back_in_scan_order() {
        let grid = Grid::from_rows(&["cat", "   ", "cat"]).unwrap();
        let candidates = find_candidates(&grid, &horizontal_only(true), &letters("cat"));
        let positions: Vec<(usize, usize)> =
            candidates.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 2)]);
    }

    #[test]
    fn no_candidates_when_nothing_is_feasible() {
        let grid = Grid::from_rows(&["dog"]).unwrap();
        let options = SearchOptions {
            orientations: &Orientation::ALL,
            require_overlap: true,
        };
        assert!(find_candidates(&grid, &options, &letters("cats")).is_empty());
    }

    #[test]
    fn place_word_writes_along_the_orientation() {
        let mut grid = Grid::new(3, 3);
        place_word(&mut grid, &letters("cat"), 2, 0, Orientation::DiagonalDownLeft);
        assert_eq!(grid.cell(2, 0), Some('c'));
        assert_eq!(grid.cell(1, 1), Some('a'));
        assert_eq!(grid.cell(0, 2), Some('t'));
        assert_eq!(grid.cell(1, 0), None);
    }
}

#[cfg(all(feature = "unstable", test))]
mod benches {
    extern crate test;

    use super::*;
    use test::Bencher;

    #[bench]
    fn bench_find_candidates_on_a_filled_grid(b: &mut Bencher) {
        let mut grid = Grid::new(24, 24);
        for (i, letter) in "abcdefghij".chars().cycle().take(24 * 24).enumerate() {
            grid.set(i % 24, i / 24, letter);
        }
        let word: Vec<char> = "abcdefgh".chars().collect();
        let options = SearchOptions {
            orientations: &Orientation::ALL,
            require_overlap: true,
        };
        b.iter(|| find_candidates(&grid, &options, &word));
    }
}

/// A direction a word can be written in, named for how the word reads from
/// its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Right to left.
    HorizontalReversed,
    /// Top to bottom.
    Vertical,
    /// Bottom to top.
    VerticalReversed,
    /// Down and to the right.
    DiagonalDownRight,
    /// Up and to the right.
    DiagonalUpRight,
    /// Down and to the left.
    DiagonalDownLeft,
    /// Up and to the left.
    DiagonalUpLeft,
}

impl Orientation {
    /// Every orientation, in the order scans try them.
    pub const ALL: [Orientation; 8] = [
        Orientation::Horizontal,
        Orientation::HorizontalReversed,
        Orientation::Vertical,
        Orientation::VerticalReversed,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalUpRight,
        Orientation::DiagonalDownLeft,
        Orientation::DiagonalUpLeft,
    ];

    /// Returns the cell `i` steps from `(x, y)` along this orientation.
    ///
    /// `step(x, y, 0)` is `(x, y)` for every orientation. Orientations that
    /// run leftward or upward subtract from the start coordinate, so callers
    /// must have checked [`fits`](Self::fits) for the word's full length
    /// first.
    ///
    /// ```
    /// use rs_word_search::Orientation;
    ///
    /// assert_eq!(Orientation::Horizontal.step(1, 2, 2), (3, 2));
    /// assert_eq!(Orientation::DiagonalUpRight.step(1, 2, 2), (3, 0));
    /// ```
    pub fn step(self, x: usize, y: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x + i, y),
            Orientation::HorizontalReversed => (x - i, y),
            Orientation::Vertical => (x, y + i),
            Orientation::VerticalReversed => (x, y - i),
            Orientation::DiagonalDownRight => (x + i, y + i),
            Orientation::DiagonalUpRight => (x + i, y - i),
            Orientation::DiagonalDownLeft => (x - i, y + i),
            Orientation::DiagonalUpLeft => (x - i, y - i),
        }
    }

    /// Returns whether a word of length `len` starting at `(x, y)` stays
    /// inside a `height` by `width` grid along this orientation.
    ///
    /// ```
    /// use rs_word_search::Orientation;
    ///
    /// assert!(Orientation::Vertical.fits(0, 1, 4, 4, 3));
    /// assert!(!Orientation::Vertical.fits(0, 2, 4, 4, 3));
    /// ```
    pub fn fits(self, x: usize, y: usize, height: usize, width: usize, len: usize) -> bool {
        match self {
            Orientation::Horizontal => x + len <= width && y < height,
            Orientation::HorizontalReversed => x + 1 >= len && x < width && y < height,
            Orientation::Vertical => y + len <= height && x < width,
            Orientation::VerticalReversed => y + 1 >= len && y < height && x < width,
            Orientation::DiagonalDownRight => x + len <= width && y + len <= height,
            Orientation::DiagonalUpRight => x + len <= width && y + 1 >= len && y < height,
            Orientation::DiagonalDownLeft => x + 1 >= len && x < width && y + len <= height,
            Orientation::DiagonalUpLeft => x + 1 >= len && x < width && y + 1 >= len && y < height,
        }
    }

    /// Returns the next coordinate worth testing after `fits` failed at
    /// `(x, y)` for a word of length `len`.
    ///
    /// The jump may overshoot cells that would also fail, never cells that
    /// would pass, and it always lands strictly later in row-major order, so
    /// scans terminate even when `len` exceeds both grid dimensions.
    pub(crate) fn advance(self, x: usize, y: usize, len: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, y + 1),
            // The word extends leftward: no start before x = len - 1 can
            // work on any row.
            Orientation::HorizontalReversed => {
                if x + 1 < len {
                    (len - 1, y)
                } else {
                    (len - 1, y + 1)
                }
            }
            // Downward feasibility depends only on y and only degrades as y
            // grows; leap the cursor past the bottom of the scan.
            Orientation::Vertical => (0, y + 100),
            // The word extends upward: no start above y = len - 1 can work.
            Orientation::VerticalReversed => {
                if y + 1 < len {
                    (0, len - 1)
                } else {
                    (0, y + 1)
                }
            }
            Orientation::DiagonalDownRight => (0, y + 1),
            Orientation::DiagonalUpRight => {
                if y + 1 < len {
                    (0, len - 1)
                } else {
                    (0, y + 1)
                }
            }
            Orientation::DiagonalDownLeft => {
                if x + 1 < len {
                    (len - 1, y)
                } else {
                    (len - 1, y + 1)
                }
            }
            Orientation::DiagonalUpLeft => {
                if x + 1 < len {
                    (len - 1, y)
                } else {
                    (len - 1, y + 1)
                }
            }
        }
    }
}

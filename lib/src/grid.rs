use std::fmt;

use crate::results::WordSearchError;

/// A rectangular letter grid.
///
/// Cells are addressed by `(x, y)` where `x` selects the column and `y` the
/// row, with `(0, 0)` in the top-left corner. Each cell is either empty or
/// holds one letter. Consumers receive grids read-only; letters are written
/// only while a puzzle is under construction.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Vec<Option<char>>>,
}

impl Grid {
    /// Creates an empty grid. Callers guarantee positive dimensions.
    pub(crate) fn new(height: usize, width: usize) -> Self {
        Grid {
            cells: vec![vec![None; width]; height],
        }
    }

    /// Parses a grid from one string per row, reading a space as an empty
    /// cell and any other character as a letter.
    ///
    /// Returns [`WordSearchError::RaggedGrid`] unless there is at least one
    /// row and all rows are non-empty and of equal length.
    ///
    /// ```
    /// use rs_word_search::Grid;
    ///
    /// let grid = Grid::from_rows(&["cat", "o e", "gnu"]).unwrap();
    /// assert_eq!(grid.height(), 3);
    /// assert_eq!(grid.cell(0, 1), Some('o'));
    /// assert_eq!(grid.cell(1, 1), None);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, WordSearchError> {
        let cells: Vec<Vec<Option<char>>> = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|ch| if ch == ' ' { None } else { Some(ch) })
                    .collect()
            })
            .collect();
        let width = cells.first().map_or(0, Vec::len);
        if width == 0 || cells.iter().any(|row| row.len() != width) {
            return Err(WordSearchError::RaggedGrid);
        }
        Ok(Grid { cells })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Returns the letter at `(x, y)`, or `None` if the cell is empty or
    /// out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, letter: char) {
        self.cells[y][x] = Some(letter);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.unwrap_or(' '))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

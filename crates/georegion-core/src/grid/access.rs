//! Cell access functions
//!
//! Every accessor validates `row < height` and `col < width` before touching
//! the flat cell storage; the `row * width + col` arithmetic lives only in
//! [`Grid::index_of`].

use super::Grid;
use crate::error::{Error, Result};

impl Grid {
    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the grid has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The configured border symbol
    #[inline]
    pub fn border_symbol(&self) -> u8 {
        self.border
    }

    /// Flat index of `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Get the cell at `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Get the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn cell(&self, row: usize, col: usize) -> Result<u8> {
        self.get(row, col).ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Check whether `(row, col)` holds the border symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn is_border(&self, row: usize, col: usize) -> Result<bool> {
        self.cell(row, col).map(|value| value == self.border)
    }

    /// True if `(row, col)` is in bounds and not a border cell.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|value| value != self.border)
    }

    /// Borrow one row, or `None` if `row >= height`.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        (row < self.height).then(|| {
            let start = row * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).filter_map(move |row| self.row(row))
    }

    /// Flat row-major cell data
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells holding the border symbol
    pub fn border_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == self.border).count()
    }

    /// Number of traversable (non-border) cells
    pub fn open_count(&self) -> usize {
        self.len() - self.border_count()
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::IndexOutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Grid, GridConfig};

    fn sample() -> Grid {
        Grid::from_rows(["#.#", ".#.", "#.#"], &GridConfig::default()).unwrap()
    }

    #[test]
    fn test_get_in_bounds() {
        let grid = sample();
        assert_eq!(grid.get(0, 0), Some(b'#'));
        assert_eq!(grid.get(0, 1), Some(b'.'));
        assert_eq!(grid.get(2, 2), Some(b'#'));
        assert_eq!(grid.index_of(1, 2), Some(5));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = sample();
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.index_of(0, 3), None);
        assert!(!grid.is_open(0, 3));
    }

    #[test]
    fn test_cell_reports_bounds() {
        let grid = sample();
        match grid.cell(1, 7) {
            Err(Error::IndexOutOfBounds {
                row,
                col,
                width,
                height,
            }) => {
                assert_eq!((row, col, width, height), (1, 7, 3, 3));
            }
            other => panic!("expected IndexOutOfBounds, got {other:?}"),
        }
        assert!(grid.is_border(5, 5).is_err());
    }

    #[test]
    fn test_border_classification() {
        let grid = sample();
        assert!(grid.is_border(0, 0).unwrap());
        assert!(!grid.is_border(0, 1).unwrap());
        assert!(grid.is_open(1, 0));
        assert!(!grid.is_open(1, 1));
        assert_eq!(grid.border_count(), 5);
        assert_eq!(grid.open_count(), 4);
    }

    #[test]
    fn test_custom_border_symbol() {
        let grid = Grid::from_rows(["X.#"], &GridConfig::new(b'X')).unwrap();
        assert_eq!(grid.border_symbol(), b'X');
        assert!(grid.is_border(0, 0).unwrap());
        assert!(!grid.is_border(0, 2).unwrap());
    }

    #[test]
    fn test_rows() {
        let grid = sample();
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&b"#.#"[..], &b".#."[..], &b"#.#"[..]]);
        assert_eq!(grid.row(3), None);
    }

    #[test]
    fn test_zero_width_rows() {
        let grid = Grid::from_rows(["", ""], &GridConfig::default()).unwrap();
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 2);
        assert_eq!(grid.get(0, 0), None);
    }
}

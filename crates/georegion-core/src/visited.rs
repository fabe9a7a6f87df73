//! Visited-cell bookkeeping
//!
//! A [`VisitedSet`] records which cells of a grid have already been assigned
//! to a region. Marks only ever go from unvisited to visited; there is no way
//! to clear a mark once set.

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Boolean mask of visited cells, shaped like a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    width: usize,
    height: usize,
    marks: Vec<bool>,
    marked: usize,
}

impl VisitedSet {
    /// Create an all-unvisited set of the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOverflow`] if `width * height` overflows, or
    /// [`Error::AllocationFailed`] if the mask cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(Error::DimensionOverflow { width, height })?;

        let mut marks = Vec::new();
        marks.try_reserve_exact(len)?;
        marks.resize(len, false);

        Ok(Self {
            width,
            height,
            marks,
            marked: 0,
        })
    }

    /// Create an all-unvisited set shaped like `grid`.
    pub fn for_grid(grid: &Grid) -> Result<Self> {
        Self::new(grid.width(), grid.height())
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells marked so far
    pub fn marked_count(&self) -> usize {
        self.marked
    }

    /// Check whether `(row, col)` is marked.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index_of(row, col).map(|i| self.marks[i])
    }

    /// Check whether `(row, col)` is marked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn is_visited(&self, row: usize, col: usize) -> Result<bool> {
        self.get(row, col).ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Mark `(row, col)` as visited.
    ///
    /// Returns `true` if the cell was newly marked and `false` if it was
    /// already visited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn mark(&mut self, row: usize, col: usize) -> Result<bool> {
        let i = self
            .index_of(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        if self.marks[i] {
            return Ok(false);
        }
        self.marks[i] = true;
        self.marked += 1;
        Ok(true)
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
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
    use super::*;
    use crate::GridConfig;
    use proptest::prelude::*;

    #[test]
    fn test_new_is_unvisited() {
        let visited = VisitedSet::new(4, 3).unwrap();
        assert_eq!(visited.width(), 4);
        assert_eq!(visited.height(), 3);
        assert_eq!(visited.marked_count(), 0);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(visited.get(row, col), Some(false));
            }
        }
    }

    #[test]
    fn test_mark_and_test() {
        let mut visited = VisitedSet::new(2, 2).unwrap();
        assert!(visited.mark(1, 0).unwrap());
        assert!(!visited.mark(1, 0).unwrap());
        assert!(visited.is_visited(1, 0).unwrap());
        assert!(!visited.is_visited(0, 1).unwrap());
        assert_eq!(visited.marked_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut visited = VisitedSet::new(2, 2).unwrap();
        assert_eq!(visited.get(2, 0), None);
        assert!(matches!(
            visited.mark(0, 2),
            Err(Error::IndexOutOfBounds { row: 0, col: 2, .. })
        ));
        assert!(visited.is_visited(5, 5).is_err());
        assert_eq!(visited.marked_count(), 0);
    }

    #[test]
    fn test_for_grid_and_empty() {
        let grid = Grid::from_rows(["#..", "..."], &GridConfig::default()).unwrap();
        let visited = VisitedSet::for_grid(&grid).unwrap();
        assert_eq!((visited.width(), visited.height()), (3, 2));

        let empty = VisitedSet::new(0, 0).unwrap();
        assert_eq!(empty.get(0, 0), None);
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            VisitedSet::new(usize::MAX, 3),
            Err(Error::DimensionOverflow { .. })
        ));
    }

    proptest! {
        #[test]
        fn marks_are_monotonic(
            width in 1usize..12,
            height in 1usize..12,
            picks in proptest::collection::vec((0usize..12, 0usize..12), 0..64),
        ) {
            let mut visited = VisitedSet::new(width, height).unwrap();
            let mut newly = 0usize;
            for (row, col) in picks {
                let (row, col) = (row % height, col % width);
                if visited.mark(row, col).unwrap() {
                    newly += 1;
                }
                prop_assert_eq!(visited.get(row, col), Some(true));
            }
            prop_assert_eq!(visited.marked_count(), newly);
        }
    }
}

//! Depth-first flood fill
//!
//! This module provides the reachability engine used by the region counter:
//! starting from a seed cell it marks every 4-connected, non-border,
//! not-yet-visited cell in a [`VisitedSet`].
//!
//! The traversal is depth-first with neighbors expanded up, left, right,
//! down. It runs on an explicit heap-allocated stack of frames, each holding
//! a cell and the index of its next neighbor to examine, so the visit order
//! matches the recursive formulation while native stack usage stays constant
//! for regions of any size.

use crate::error::{RegionError, RegionResult};
use georegion_core::{Grid, VisitedSet};

/// Neighbor offsets as (row, col) deltas, in expansion order:
/// up, left, right, down
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Check whether a cell may be entered by a traversal.
///
/// True when `(row, col)` is inside the grid, is not a border cell and has
/// not been visited. Negative coordinates are simply out of bounds.
pub fn is_safe(grid: &Grid, visited: &VisitedSet, row: isize, col: isize) -> bool {
    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(row), Ok(col)) => is_safe_at(grid, visited, row, col),
        _ => false,
    }
}

/// Mark every cell reachable from a seed.
///
/// # Arguments
///
/// * `grid` - The map
/// * `visited` - Visited set shaped like `grid`
/// * `start_row` - Row of the seed cell
/// * `start_col` - Column of the seed cell
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed is out of bounds,
/// [`RegionError::BorderSeed`] if it is a border cell,
/// [`RegionError::AlreadyVisited`] if it is already marked, or
/// [`RegionError::ShapeMismatch`] if `visited` does not match `grid`.
/// `visited` is unchanged on error.
pub fn traverse(
    grid: &Grid,
    visited: &mut VisitedSet,
    start_row: usize,
    start_col: usize,
) -> RegionResult<()> {
    traverse_with(grid, visited, start_row, start_col, |_, _| {})
}

/// Mark every cell reachable from a seed, reporting each one.
///
/// Same as [`traverse`], but `on_visit(row, col)` is called once for every
/// newly marked cell, in the order the cells are marked. The seed is always
/// reported first.
pub fn traverse_with<F>(
    grid: &Grid,
    visited: &mut VisitedSet,
    start_row: usize,
    start_col: usize,
    mut on_visit: F,
) -> RegionResult<()>
where
    F: FnMut(usize, usize),
{
    check_seed(grid, visited, start_row, start_col)?;

    visited.mark(start_row, start_col)?;
    on_visit(start_row, start_col);

    let mut stack: Vec<(usize, usize, usize)> = vec![(start_row, start_col, 0)];

    while let Some(frame) = stack.last_mut() {
        let (row, col, next) = *frame;
        let Some(&(dr, dc)) = NEIGHBOR_OFFSETS.get(next) else {
            stack.pop();
            continue;
        };
        frame.2 += 1;

        let Some((nr, nc)) = row.checked_add_signed(dr).zip(col.checked_add_signed(dc)) else {
            continue;
        };
        if is_safe_at(grid, visited, nr, nc) {
            visited.mark(nr, nc)?;
            on_visit(nr, nc);
            stack.push((nr, nc, 0));
        }
    }

    Ok(())
}

pub(crate) fn check_shape(grid: &Grid, visited: &VisitedSet) -> RegionResult<()> {
    if visited.width() != grid.width() || visited.height() != grid.height() {
        return Err(RegionError::ShapeMismatch {
            expected: (grid.width(), grid.height()),
            actual: (visited.width(), visited.height()),
        });
    }
    Ok(())
}

fn check_seed(grid: &Grid, visited: &VisitedSet, row: usize, col: usize) -> RegionResult<()> {
    check_shape(grid, visited)?;
    if grid.get(row, col).is_none() {
        return Err(RegionError::InvalidSeed { row, col });
    }
    if !grid.is_open(row, col) {
        return Err(RegionError::BorderSeed { row, col });
    }
    if visited.is_visited(row, col)? {
        return Err(RegionError::AlreadyVisited { row, col });
    }
    Ok(())
}

#[inline]
fn is_safe_at(grid: &Grid, visited: &VisitedSet, row: usize, col: usize) -> bool {
    grid.is_open(row, col) && visited.get(row, col) == Some(false)
}

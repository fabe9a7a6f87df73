//! Region counting
//!
//! Scans every cell of a grid and seeds a flood fill at each non-border cell
//! that no earlier fill has reached. Each seed starts exactly one region, so
//! the number of seeds is the number of regions.

use crate::error::RegionResult;
use crate::floodfill::{check_shape, traverse};
use georegion_core::{Grid, VisitedSet};
use log::{debug, trace};

/// Order in which cells are scanned for seeds
///
/// The region count does not depend on the scan order; only the seed cells
/// chosen for each region do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Row 0 first, left to right within a row
    #[default]
    RowMajor,
    /// Column 0 first, top to bottom within a column
    ColumnMajor,
}

/// Options for region counting
#[derive(Debug, Clone, Default)]
pub struct RegionOptions {
    /// Seed scan order
    pub scan_order: ScanOrder,
}

impl RegionOptions {
    /// Create options with the specified scan order
    pub fn new(scan_order: ScanOrder) -> Self {
        Self { scan_order }
    }

    /// Set the scan order
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }
}

/// Count the 4-connected regions of non-border cells.
///
/// # Returns
///
/// The number of regions; 0 for empty or all-border grids.
///
/// # Errors
///
/// Fails only if the visited set cannot be allocated.
pub fn count_regions(grid: &Grid) -> RegionResult<usize> {
    count_regions_with(grid, &RegionOptions::default())
}

/// Count regions using the given options.
pub fn count_regions_with(grid: &Grid, options: &RegionOptions) -> RegionResult<usize> {
    let mut visited = VisitedSet::for_grid(grid)?;
    count_regions_in(grid, &mut visited, options)
}

/// Count regions among the cells not yet marked in `visited`.
///
/// Cells already marked are treated as belonging to earlier regions and are
/// neither counted nor traversed. On return every non-border cell is marked.
///
/// # Errors
///
/// Returns [`RegionError::ShapeMismatch`](crate::RegionError::ShapeMismatch)
/// if `visited` is not shaped like `grid`.
pub fn count_regions_in(
    grid: &Grid,
    visited: &mut VisitedSet,
    options: &RegionOptions,
) -> RegionResult<usize> {
    check_shape(grid, visited)?;

    let width = grid.width();
    let height = grid.height();
    let mut count = 0usize;

    for i in 0..grid.len() {
        let (row, col) = match options.scan_order {
            ScanOrder::RowMajor => (i / width, i % width),
            ScanOrder::ColumnMajor => (i % height, i / height),
        };

        if grid.is_open(row, col) && visited.get(row, col) == Some(false) {
            traverse(grid, visited, row, col)?;
            count += 1;
            trace!("region {count} seeded at ({row}, {col})");
        }
    }

    debug!(
        "counted {count} regions in {width}x{height} grid ({:?} scan)",
        options.scan_order
    );
    Ok(count)
}

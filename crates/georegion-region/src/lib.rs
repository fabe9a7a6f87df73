//! georegion-region - Region counting for georegion
//!
//! This crate counts the 4-connected regions of a map:
//!
//! - **Flood fill** - Depth-first reachability from a seed cell
//! - **Region counting** - Seeding fills over every unvisited open cell
//!
//! # Examples
//!
//! ## Counting regions
//!
//! ```
//! use georegion_core::{Grid, GridConfig};
//! use georegion_region::count_regions;
//!
//! let grid = Grid::from_rows(["#.#", ".#.", "#.#"], &GridConfig::default()).unwrap();
//! assert_eq!(count_regions(&grid).unwrap(), 4);
//! ```
//!
//! ## Flood fill
//!
//! ```
//! use georegion_core::{Grid, GridConfig, VisitedSet};
//! use georegion_region::traverse;
//!
//! let grid = Grid::from_rows(["..#", "#.."], &GridConfig::default()).unwrap();
//! let mut visited = VisitedSet::for_grid(&grid).unwrap();
//!
//! traverse(&grid, &mut visited, 0, 0).unwrap();
//! assert_eq!(visited.marked_count(), 4);
//! ```

pub mod count;
pub mod error;
pub mod floodfill;

// Re-export core types
pub use georegion_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export counting types and functions
pub use count::{RegionOptions, ScanOrder, count_regions, count_regions_in, count_regions_with};

// Re-export flood fill functions
pub use floodfill::{NEIGHBOR_OFFSETS, is_safe, traverse, traverse_with};

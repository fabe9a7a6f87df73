//! georegion - Region counting for text maps
//!
//! A map is a text file of equal-length lines in which `#` marks a wall.
//! This crate counts the maximal groups of non-wall cells connected through
//! shared edges.
//!
//! # Overview
//!
//! - Map reading and printing ([`io`])
//! - Flood fill and region counting ([`region`])
//! - Grid and visited-set types (re-exported from `georegion-core`)
//!
//! # Example
//!
//! ```
//! use georegion::{GridConfig, io, region};
//!
//! let grid = io::read_grid_from_bytes(b"..#..\n", &GridConfig::default()).unwrap();
//! assert_eq!(region::count_regions(&grid).unwrap(), 2);
//! ```

pub mod error;

use log::debug;
use std::path::Path;

// Re-export core types (primary data structures used everywhere)
pub use georegion_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use georegion_io as io;
pub use georegion_region as region;

pub use error::{Error, ErrorKind};

/// Load a map file and count its regions.
///
/// # Errors
///
/// Fails if the file cannot be read, describes a malformed grid, or memory
/// runs out; [`Error::kind`] tells which.
pub fn count_regions_in_file<P: AsRef<Path>>(
    path: P,
    config: &GridConfig,
    options: &region::RegionOptions,
) -> std::result::Result<usize, Error> {
    let grid = io::read_grid_file(path.as_ref(), config)?;
    let count = region::count_regions_with(&grid, options)?;
    debug!("{}: {count} regions", path.as_ref().display());
    Ok(count)
}

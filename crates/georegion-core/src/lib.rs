//! georegion-core - Basic data structures for map region analysis
//!
//! This crate provides the fundamental data structures shared by the
//! georegion crates:
//!
//! - [`Grid`] - Immutable rectangular map of byte cells
//! - [`GridBuilder`] - Row-by-row grid construction with width checking
//! - [`GridConfig`] - Map dialect settings (border symbol, line endings)
//! - [`VisitedSet`] - Per-count traversal bookkeeping
//!
//! # Example
//!
//! ```
//! use georegion_core::{Grid, GridConfig};
//!
//! let grid = Grid::from_rows(["#.#", "..#"], &GridConfig::default()).unwrap();
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.height(), 2);
//! assert_eq!(grid.get(1, 0), Some(b'.'));
//! assert!(grid.is_border(0, 0).unwrap());
//! ```

pub mod error;
pub mod grid;
pub mod visited;

pub use error::{Error, Result};
pub use grid::{DEFAULT_BORDER_SYMBOL, Grid, GridBuilder, GridConfig};
pub use visited::VisitedSet;

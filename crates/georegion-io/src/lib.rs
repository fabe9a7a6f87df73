//! georegion-io - Map text I/O
//!
//! A map is a text file of equal-length lines. This crate provides:
//!
//! - [`LineReader`] - Unbounded line reading with distinct empty-line and
//!   end-of-stream results
//! - [`read_grid`] / [`read_grid_file`] / [`read_grid_from_bytes`] - Build a
//!   [`Grid`] from text
//! - [`write_grid`] / [`write_grid_file`] / [`write_grid_to_bytes`] - Print a
//!   grid back as text
//!
//! # Example
//!
//! ```
//! use georegion_core::GridConfig;
//! use georegion_io::read_grid_from_bytes;
//!
//! let grid = read_grid_from_bytes(b"#.#\n...\n", &GridConfig::default()).unwrap();
//! assert_eq!((grid.width(), grid.height()), (3, 2));
//! ```

pub mod error;
pub mod line;
pub mod map;

pub use error::{IoError, IoResult};
pub use georegion_core::Grid;
pub use line::{INITIAL_LINE_CAPACITY, Line, LineReader};
pub use map::{
    read_grid, read_grid_file, read_grid_from_bytes, write_grid, write_grid_file,
    write_grid_to_bytes,
};

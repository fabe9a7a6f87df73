//! Grid - the map container
//!
//! A `Grid` is a rectangular, row-major array of byte cells. Cells equal to
//! the configured border symbol are walls; every other byte is traversable.
//! Once built, a grid is never modified.
//!
//! Grids are constructed either from a flat cell vector ([`Grid::new`]), from
//! a sequence of rows ([`Grid::from_rows`]) or incrementally with a
//! [`GridBuilder`]. All three paths enforce the rectangular invariant: every
//! row has exactly `width` cells.

mod access;

use crate::error::{Error, Result};

/// Border symbol used when none is configured
pub const DEFAULT_BORDER_SYMBOL: u8 = b'#';

/// Map dialect settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Byte marking a border (wall) cell
    pub border: u8,
    /// Remove one trailing `\r` from every row (CRLF input)
    pub strip_carriage_return: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            border: DEFAULT_BORDER_SYMBOL,
            strip_carriage_return: true,
        }
    }
}

impl GridConfig {
    /// Create a config with the given border symbol
    pub fn new(border: u8) -> Self {
        Self {
            border,
            ..Default::default()
        }
    }

    /// Set the border symbol
    pub fn with_border(mut self, border: u8) -> Self {
        self.border = border;
        self
    }

    /// Enable or disable carriage-return stripping
    pub fn with_strip_carriage_return(mut self, strip: bool) -> Self {
        self.strip_carriage_return = strip;
        self
    }
}

/// Immutable rectangular map of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major, `width * height` cells
    cells: Vec<u8>,
    border: u8,
}

impl Grid {
    /// Create a grid from flat row-major cell data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellCountMismatch`] if `cells.len()` is not
    /// `width * height`, or [`Error::DimensionOverflow`] if that product
    /// overflows.
    pub fn new(width: usize, height: usize, cells: Vec<u8>, config: &GridConfig) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(Error::DimensionOverflow { width, height })?;
        if cells.len() != expected {
            return Err(Error::CellCountMismatch {
                width,
                height,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
            border: config.border,
        })
    }

    /// Create a grid with no rows.
    pub fn empty(config: &GridConfig) -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            border: config.border,
        }
    }

    /// Create a grid from a sequence of rows.
    ///
    /// The first row sets the width. Carriage returns are handled as
    /// described by [`GridConfig::strip_carriage_return`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRow`] on the first row whose length differs
    /// from the first row's.
    pub fn from_rows<I, R>(rows: I, config: &GridConfig) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        let mut builder = GridBuilder::new(*config);
        for row in rows {
            builder.push_row(row.as_ref())?;
        }
        Ok(builder.finish())
    }
}

/// Incremental row-by-row grid construction
///
/// The first pushed row establishes the width; every later row must match
/// it.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    config: GridConfig,
    width: Option<usize>,
    height: usize,
    cells: Vec<u8>,
}

impl GridBuilder {
    /// Create an empty builder
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            width: None,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Append one row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRow`] if the row length differs from the
    /// established width, or [`Error::AllocationFailed`] if the cell storage
    /// cannot grow. The builder is unchanged on error.
    pub fn push_row(&mut self, row: &[u8]) -> Result<()> {
        let row = match row {
            [head @ .., b'\r'] if self.config.strip_carriage_return => head,
            _ => row,
        };

        match self.width {
            Some(width) if width != row.len() => {
                return Err(Error::RaggedRow {
                    row: self.height,
                    expected: width,
                    actual: row.len(),
                });
            }
            Some(_) => {}
            None => self.width = Some(row.len()),
        }

        self.cells.try_reserve(row.len())?;
        self.cells.extend_from_slice(row);
        self.height += 1;
        Ok(())
    }

    /// Number of rows pushed so far
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width established by the first row, if any
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Finish construction
    pub fn finish(mut self) -> Grid {
        self.cells.shrink_to_fit();
        Grid {
            width: self.width.unwrap_or(0),
            height: self.height,
            cells: self.cells,
            border: self.config.border,
        }
    }
}

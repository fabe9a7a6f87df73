//! Map text format
//!
//! A map is one grid row per line. Each line's bytes become the row's cells
//! unchanged; the first line sets the grid width and every later line must
//! match it. The last line may omit its newline.
//!
//! Blank lines at the very end of the input are ignored, so files saved with
//! an extra trailing newline load normally. A blank line followed by more
//! content is a zero-length row and fails the width check unless the whole
//! map is zero width.

use crate::error::{IoError, IoResult};
use crate::line::{Line, LineReader};
use georegion_core::{Grid, GridBuilder, GridConfig};
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read a map from a byte stream.
///
/// # Errors
///
/// Returns [`IoError::Read`] if the stream fails, or a malformed-grid error
/// (see [`IoError::is_malformed_grid`]) if the rows differ in length.
pub fn read_grid<R: Read>(reader: R, config: &GridConfig) -> IoResult<Grid> {
    let mut lines = LineReader::new(reader);
    let mut builder = GridBuilder::new(*config);
    let mut pending_blank = 0usize;

    loop {
        let row = match lines.read_line()? {
            Line::EndOfStream => break,
            Line::Empty => {
                pending_blank += 1;
                continue;
            }
            Line::Text(row) if is_blank(&row, config) => {
                pending_blank += 1;
                continue;
            }
            Line::Text(row) => row,
        };

        for _ in 0..pending_blank {
            builder.push_row(&[])?;
        }
        pending_blank = 0;
        builder.push_row(&row)?;
    }

    let grid = builder.finish();
    debug!(
        "read {}x{} grid from {} lines ({} trailing blank)",
        grid.width(),
        grid.height(),
        lines.lines_read(),
        pending_blank
    );
    Ok(grid)
}

/// Read a map from a file.
///
/// # Errors
///
/// Returns [`IoError::SourceUnavailable`] if the file cannot be opened; see
/// [`read_grid`] for the remaining cases.
pub fn read_grid_file<P: AsRef<Path>>(path: P, config: &GridConfig) -> IoResult<Grid> {
    let path = path.as_ref();
    debug!("reading map from {}", path.display());

    let file = File::open(path).map_err(|source| IoError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_grid(BufReader::new(file), config)
}

/// Read a map from an in-memory buffer.
pub fn read_grid_from_bytes(data: &[u8], config: &GridConfig) -> IoResult<Grid> {
    read_grid(data, config)
}

/// Write a grid as text, one `\n`-terminated line per row.
pub fn write_grid<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    for row in grid.rows() {
        writer.write_all(row).map_err(IoError::Write)?;
        writer.write_all(b"\n").map_err(IoError::Write)?;
    }
    writer.flush().map_err(IoError::Write)
}

/// Write a grid to a file.
pub fn write_grid_file<P: AsRef<Path>>(grid: &Grid, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref()).map_err(IoError::Write)?;
    write_grid(grid, BufWriter::new(file))
}

/// Write a grid to a byte vector.
pub fn write_grid_to_bytes(grid: &Grid) -> IoResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(grid.len() + grid.height());
    write_grid(grid, &mut buf)?;
    Ok(buf)
}

fn is_blank(row: &[u8], config: &GridConfig) -> bool {
    config.strip_carriage_return && row == b"\r"
}

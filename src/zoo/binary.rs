//! Packed binary grid encoding.
//!
//! # Layout
//! - `i32` width, native byte order
//! - `i32` height, native byte order
//! - `ceil(width * height / 8)` payload bytes; bit `i % 8` (LSB first) of
//!   byte `i / 8` holds cell `i` in row-major order, 1 = alive
//!
//! Padding bits in the final byte are written as 0 and ignored when reading.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, warn};

use crate::automaton::Grid;
use crate::cell::Cell;
use crate::error::{LifeError, Result};

const FORMAT: &str = "binary";

/// Number of payload bytes needed for `cells` packed bits.
#[inline]
pub fn payload_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

/// Fill `buf` completely, turning a premature end of input into a format error.
fn read_section<R: Read>(reader: &mut R, buf: &mut [u8], section: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => LifeError::format(
            FORMAT,
            format!("input ends before the {} {section} bytes", buf.len()),
        ),
        _ => LifeError::Io(err),
    })
}

fn read_dimension<R: Read>(reader: &mut R, name: &str) -> Result<u32> {
    let mut raw = [0u8; 4];
    read_section(reader, &mut raw, name)?;
    let value = i32::from_ne_bytes(raw);
    u32::try_from(value)
        .map_err(|_| LifeError::format(FORMAT, format!("negative {name} {value}")))
}

/// Decode a grid from the packed binary encoding.
///
/// # Errors
/// [`LifeError::Format`] if the header or payload is truncated or a
/// dimension is negative. Read failures surface as [`LifeError::Io`].
pub fn read_binary<R: Read>(mut reader: R) -> Result<Grid> {
    let width = read_dimension(&mut reader, "width")?;
    let height = read_dimension(&mut reader, "height")?;

    let total = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| LifeError::format(FORMAT, format!("{width}x{height} grid is too large")))?;
    let expected = total.div_ceil(8);

    // Read at most `expected` bytes; the buffer only holds what is present.
    let mut payload = Vec::new();
    reader.by_ref().take(expected).read_to_end(&mut payload)?;
    if (payload.len() as u64) < expected {
        return Err(LifeError::format(
            FORMAT,
            format!(
                "input ends after {} of {expected} payload bytes",
                payload.len()
            ),
        ));
    }

    let mut grid = Grid::with_size(width, height);
    for (i, cell) in grid.cells.iter_mut().enumerate() {
        *cell = Cell::from((payload[i / 8] >> (i % 8)) & 1 == 1);
    }

    let mut trailing = [0u8; 1];
    if reader.read(&mut trailing)? > 0 {
        warn!("ignoring trailing bytes after {}x{} binary grid", width, height);
    }

    Ok(grid)
}

/// Encode a grid in the packed binary encoding.
///
/// # Errors
/// [`LifeError::Format`] if a dimension does not fit the signed 32-bit
/// header. Write failures surface as [`LifeError::Io`].
pub fn write_binary<W: Write>(mut writer: W, grid: &Grid) -> Result<()> {
    let header = |value: u32, name: &str| {
        i32::try_from(value).map_err(|_| {
            LifeError::format(FORMAT, format!("{name} {value} does not fit the header"))
        })
    };
    let width = header(grid.width(), "width")?;
    let height = header(grid.height(), "height")?;

    let mut payload = vec![0u8; payload_len(grid.total_cells())];
    for (i, cell) in grid.cells().iter().enumerate() {
        if cell.is_alive() {
            payload[i / 8] |= 1 << (i % 8);
        }
    }

    writer.write_all(&width.to_ne_bytes())?;
    writer.write_all(&height.to_ne_bytes())?;
    writer.write_all(&payload)?;
    writer.flush()?;
    Ok(())
}

/// Load a grid from a binary file.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    debug!("loading binary grid from {}", path.display());
    let file = File::open(path)?;
    read_binary(BufReader::new(file))
}

/// Save a grid to a binary file, replacing any existing content.
pub fn save_binary(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    debug!(
        "saving {}x{} grid as binary to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    let file = File::create(path)?;
    write_binary(BufWriter::new(file), grid)
}

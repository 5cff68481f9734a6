//! ASCII grid encoding.
//!
//! # Layout
//! ```text
//! <width> <height>\n
//! <row 0: width chars of ' ' or '#'>\n
//! ...
//! <row height-1>\n
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, warn};

use crate::automaton::Grid;
use crate::cell::Cell;
use crate::error::{LifeError, Result};

const FORMAT: &str = "ascii";

/// Decode a grid from ASCII text.
///
/// # Errors
/// [`LifeError::Format`] if the header is not two positive integers, a
/// newline is missing, a cell character is neither `' '` nor `'#'`, or the
/// input ends early. Read failures surface as [`LifeError::Io`].
pub fn read_ascii<R: Read>(mut reader: R) -> Result<Grid> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let header_end = bytes
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| LifeError::format(FORMAT, "missing newline after header"))?;
    let (width, height) = parse_header(&bytes[..header_end])?;

    // Each row is `width` cells plus its newline; reject short input before
    // allocating the grid.
    let body_len = (bytes.len() - header_end - 1) as u64;
    let needed = (width as u64 + 1) * height as u64;
    if body_len < needed {
        return Err(LifeError::format(
            FORMAT,
            format!("input ends early: {width}x{height} needs {needed} bytes, got {body_len}"),
        ));
    }

    let mut grid = Grid::with_size(width, height);
    let row_len = width as usize;
    let mut pos = header_end + 1;

    for y in 0..height {
        let row = bytes.get(pos..pos + row_len).ok_or_else(|| {
            LifeError::format(FORMAT, format!("input ends before row {y} is complete"))
        })?;

        for (x, &byte) in row.iter().enumerate() {
            let cell = Cell::from_char(byte as char).map_err(|_| {
                LifeError::format(
                    FORMAT,
                    format!("illegal cell character {:?} at ({x}, {y})", byte as char),
                )
            })?;
            let idx = grid.index_of(x as u32, y);
            grid.cells[idx] = cell;
        }

        if bytes.get(pos + row_len) != Some(&b'\n') {
            return Err(LifeError::format(
                FORMAT,
                format!("missing newline after row {y}"),
            ));
        }
        pos += row_len + 1;
    }

    if pos < bytes.len() {
        warn!("ignoring {} trailing bytes after ascii grid", bytes.len() - pos);
    }

    Ok(grid)
}

fn parse_header(line: &[u8]) -> Result<(u32, u32)> {
    let text = String::from_utf8_lossy(line);
    let bad_header =
        || LifeError::format(FORMAT, format!("expected positive width and height, got {text:?}"));

    let mut fields = text.split_whitespace();
    let mut dimension = || -> Result<u32> {
        match fields.next() {
            Some(field) if field.bytes().all(|b| b.is_ascii_digit()) => match field.parse::<u32>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(bad_header()),
            },
            _ => Err(bad_header()),
        }
    };
    let width = dimension()?;
    let height = dimension()?;

    if fields.next().is_some() {
        return Err(bad_header());
    }
    Ok((width, height))
}

/// Encode a grid as ASCII text.
pub fn write_ascii<W: Write>(mut writer: W, grid: &Grid) -> Result<()> {
    writeln!(writer, "{} {}", grid.width(), grid.height())?;

    let mut line = String::with_capacity(grid.width() as usize + 1);
    for y in 0..grid.height() {
        line.clear();
        let start = grid.index_of(0, y);
        line.extend(
            grid.cells[start..start + grid.width() as usize]
                .iter()
                .map(|c| c.as_char()),
        );
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a grid from an ASCII file.
pub fn load_ascii(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    debug!("loading ascii grid from {}", path.display());
    let file = File::open(path)?;
    read_ascii(BufReader::new(file))
}

/// Save a grid to an ASCII file, replacing any existing content.
pub fn save_ascii(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    debug!(
        "saving {}x{} grid as ascii to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    let file = File::create(path)?;
    write_ascii(BufWriter::new(file), grid)
}

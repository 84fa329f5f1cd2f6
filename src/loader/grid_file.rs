//! Binary grid file: rows (i32 LE), cols (i32 LE), default id (u8), then
//! rows * cols cell bytes in row-major order.
use crate::error::MapError;
use std::path::Path;

const HEADER_LEN: usize = 4 + 4 + 1;

/// Decoded contents of a `.map` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridFile {
    /// Row count, positive
    pub rows: i32,
    /// Column count, positive
    pub cols: i32,
    /// Fill tile id
    pub default_id: u8,
    /// Row-major cells, `rows * cols` long
    pub cells: Vec<u8>,
}

/// Cell count for validated dimensions.
fn cell_count(rows: i32, cols: i32) -> Option<usize> {
    if rows <= 0 || cols <= 0 {
        return None;
    }
    (rows as usize).checked_mul(cols as usize)
}

/// Serializes a grid.
pub fn encode_grid(grid: &GridFile) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_LEN + grid.cells.len());
    bytes.extend_from_slice(&grid.rows.to_le_bytes());
    bytes.extend_from_slice(&grid.cols.to_le_bytes());
    bytes.push(grid.default_id);
    bytes.extend_from_slice(&grid.cells);
    bytes
}

/// Parses a grid. `path` is only used in errors.
pub fn decode_grid(bytes: &[u8], path: &Path) -> Result<GridFile, MapError> {
    if bytes.len() < HEADER_LEN {
        return Err(MapError::corrupt(
            path,
            format!("{} bytes is shorter than the {} byte header", bytes.len(), HEADER_LEN),
        ));
    }
    let rows = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let cols = i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let default_id = bytes[8];

    let count = cell_count(rows, cols)
        .ok_or_else(|| MapError::corrupt(path, format!("bad dimensions {}x{}", rows, cols)))?;
    let body = &bytes[HEADER_LEN..];
    if body.len() != count {
        return Err(MapError::corrupt(
            path,
            format!("expected {} cells for {}x{}, found {}", count, rows, cols, body.len()),
        ));
    }

    Ok(GridFile {
        rows,
        cols,
        default_id,
        cells: body.to_vec(),
    })
}

/// Writes `grid` to `path`.
pub fn write_grid_file(path: &Path, grid: &GridFile) -> Result<(), MapError> {
    std::fs::write(path, encode_grid(grid)).map_err(|e| MapError::io(path, e))
}

/// Reads and decodes the grid at `path`.
pub fn read_grid_file(path: &Path) -> Result<GridFile, MapError> {
    let bytes = std::fs::read(path).map_err(|e| MapError::io(path, e))?;
    decode_grid(&bytes, path)
}

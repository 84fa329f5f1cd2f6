use crate::config::ScreenSize;
use macroquad::prelude::IVec2;

const CULL_MARGIN_TILES: i32 = 1;

/// Half-open range of grid cells to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// First row, inclusive
    pub start_row: i32,
    /// Row past the last one drawn
    pub end_row: i32,
    /// First column, inclusive
    pub start_col: i32,
    /// Column past the last one drawn
    pub end_col: i32,
}

impl VisibleRange {
    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.start_row..self.end_row)
            .flat_map(move |row| (self.start_col..self.end_col).map(move |col| (row, col)))
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        let rows = (self.end_row - self.start_row).max(0) as usize;
        let cols = (self.end_col - self.start_col).max(0) as usize;
        rows * cols
    }

    /// True when nothing is covered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cells touching the screen plus one tile of padding on every side, so
/// partially visible edge tiles are drawn.
pub fn visible_range(offset: IVec2, screen: ScreenSize, tile_size: i32) -> VisibleRange {
    let first_col = offset.x.div_euclid(tile_size);
    let first_row = offset.y.div_euclid(tile_size);
    // last cells with a pixel on screen
    let last_col = (offset.x + screen.width - 1).div_euclid(tile_size);
    let last_row = (offset.y + screen.height - 1).div_euclid(tile_size);

    VisibleRange {
        start_row: first_row - CULL_MARGIN_TILES,
        end_row: last_row + CULL_MARGIN_TILES + 1,
        start_col: first_col - CULL_MARGIN_TILES,
        end_col: last_col + CULL_MARGIN_TILES + 1,
    }
}

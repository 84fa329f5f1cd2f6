use crate::tile::TileId;
use macroquad::prelude::IVec2;

/// Which pass a draw belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawLayer {
    /// Cell outside the map
    OutOfRange,
    /// Background tile under an in-bounds cell
    Background,
    /// The cell's own tile
    Foreground,
}

/// One tile blit at a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    /// Tile to draw
    pub tile: TileId,
    /// Top-left corner in screen pixels
    pub dest: IVec2,
    /// Pass the blit belongs to
    pub layer: DrawLayer,
}

use crate::render::{DrawCommand, DrawLayer};
use crate::tile::TileId;
use crate::tileset::TileSet;
use macroquad::prelude::{ivec2, IVec2, Vec2};

/// Screen grid the palette lays tiles out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    /// Slots per row
    pub cols: i32,
    /// Rows of slots
    pub rows: i32,
    /// Slot edge in pixels
    pub tile_size: i32,
}

impl PaletteLayout {
    /// Number of slots on screen.
    pub fn slots(&self) -> usize {
        (self.cols.max(0) * self.rows.max(0)) as usize
    }

    /// Slot under a screen pixel, if the pixel is on the palette.
    pub fn slot_at(&self, mouse: Vec2) -> Option<usize> {
        let cell = self.cell_at(mouse)?;
        Some((cell.y * self.cols + cell.x) as usize)
    }

    /// Palette cell under a screen pixel.
    pub fn cell_at(&self, mouse: Vec2) -> Option<IVec2> {
        let ts = self.tile_size as f32;
        let x = (mouse.x / ts).floor() as i32;
        let y = (mouse.y / ts).floor() as i32;
        if x < 0 || y < 0 || x >= self.cols || y >= self.rows {
            return None;
        }
        Some(ivec2(x, y))
    }

    /// Top-left pixel of a slot.
    pub fn slot_position(&self, slot: usize) -> IVec2 {
        let slot = slot as i32;
        ivec2(slot % self.cols, slot / self.cols) * self.tile_size
    }
}

/// Tile picker overlay and the tile that painting uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    selected: TileId,
    visible: bool,
}

impl Palette {
    /// Hidden, with tile 0 selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tile that painting uses.
    pub fn selected(&self) -> TileId {
        self.selected
    }

    /// Sets the paint tile.
    pub fn select(&mut self, tile: TileId) {
        self.selected = tile;
    }

    /// Whether the overlay is open.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Opens or closes the overlay.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Closes the overlay.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Handles a click on the open palette. Selecting an existing tile closes
    /// the palette and returns true; empty slots are ignored.
    pub fn click(&mut self, layout: &PaletteLayout, mouse: Vec2, tileset: &TileSet) -> bool {
        let Some(slot) = layout.slot_at(mouse) else {
            return false;
        };
        let tile = TileId(slot as u32);
        if !tileset.contains(tile) {
            return false;
        }
        self.selected = tile;
        self.visible = false;
        true
    }

    /// Every slot gets the out-of-range tile as backing; slots with a tile
    /// get that tile on top.
    pub fn render_plan(&self, layout: &PaletteLayout, tileset: &TileSet) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(layout.slots() * 2);
        for slot in 0..layout.slots() {
            let dest = layout.slot_position(slot);
            out.push(DrawCommand {
                tile: tileset.out_of_range_id(),
                dest,
                layer: DrawLayer::OutOfRange,
            });
            let tile = TileId(slot as u32);
            if tileset.contains(tile) {
                out.push(DrawCommand {
                    tile,
                    dest,
                    layer: DrawLayer::Foreground,
                });
            }
        }
        out
    }
}

#![warn(missing_docs)]

//! Grid tile-map editor core for Macroquad: tile sets, the camera transform,
//! the palette, and the `.map`/`.dat` file pair with its tile renumbering.

mod config;
mod cursor;
mod editor;
mod error;
/// On-disk formats: the binary grid file and the tile-index manifest.
pub mod loader {
    pub mod grid_file;
    pub mod manifest;
}
mod map;
mod palette;
mod prompt;
mod render;
mod tile;
mod tileset;
/// Camera transform between cursor, screen pixels and grid cells.
pub mod view;

pub use config::{EditorConfig, InitialMap, ScreenSize};
pub use cursor::{Cursor, Direction};
pub use editor::{Command, Editor};
pub use error::MapError;
pub use loader::grid_file::GridFile;
pub use loader::manifest::ManifestEntry;
pub use map::{GridMap, SavePlan, MAX_MAP_CELLS, MAX_MAP_TILES};
pub use palette::{Palette, PaletteLayout};
pub use prompt::{LineInput, PromptEvent, PromptKey, PromptSequence, PromptService, ScriptedPrompt};
pub use render::{visible_range, DrawCommand, DrawLayer, VisibleRange};
pub use tile::TileId;
pub use tileset::{TileImage, TileSet, DIRECTORY_RESERVED_OFFSET};

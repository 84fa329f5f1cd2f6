use crate::error::MapError;
use crate::tileset::DIRECTORY_RESERVED_OFFSET;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Editor settings, read from a JSON file. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Edge length of one tile in pixels
    pub tile_size: u32,
    /// Screen width in tiles
    pub screen_cols: u32,
    /// Screen height in tiles
    pub screen_rows: u32,
    /// Directory holding the tile images
    pub tile_dir: PathBuf,
    /// Directory the `.map`/`.dat` pairs are written to
    pub map_dir: PathBuf,
    /// Extension of tile image files, without the dot
    pub image_extension: String,
    /// Base name of the background tile
    pub background_tile: String,
    /// Base name of the tile drawn outside the map
    pub out_of_range_tile: String,
    /// Leading directory entries that are not tiles
    pub reserved_entries: usize,
    /// Map opened at start-up
    pub initial_map: InitialMap,
}

/// Map created when the editor starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InitialMap {
    /// Map name
    pub name: String,
    /// Row count
    pub rows: i32,
    /// Column count
    pub cols: i32,
}

impl Default for InitialMap {
    fn default() -> Self {
        InitialMap {
            name: "NEW".to_owned(),
            rows: 64,
            cols: 64,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            tile_size: 32,
            screen_cols: 25,
            screen_rows: 20,
            tile_dir: PathBuf::from("mapchip"),
            map_dir: PathBuf::from("."),
            image_extension: "png".to_owned(),
            background_tile: "water".to_owned(),
            out_of_range_tile: "none".to_owned(),
            reserved_entries: DIRECTORY_RESERVED_OFFSET,
            initial_map: InitialMap::default(),
        }
    }
}

/// Screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl EditorConfig {
    /// Parses a config from JSON text and validates it.
    pub fn from_json_str(txt: &str, path: &Path) -> Result<Self, MapError> {
        let cfg: EditorConfig = serde_json::from_str(txt).map_err(|source| MapError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads `path` if it exists, falling back to defaults when it does not.
    pub fn load_or_default(path: &Path) -> Result<Self, MapError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(EditorConfig::default());
        }
        let txt = std::fs::read_to_string(path).map_err(|e| MapError::io(path, e))?;
        Self::from_json_str(&txt, path)
    }

    /// Rejects values the editor cannot work with.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.tile_size == 0 {
            return Err(MapError::Config("tile_size must be positive".into()));
        }
        if self.screen_cols == 0 || self.screen_rows == 0 {
            return Err(MapError::Config("screen dimensions must be positive".into()));
        }
        if self.initial_map.rows <= 0 || self.initial_map.cols <= 0 {
            return Err(MapError::Config("initial map dimensions must be positive".into()));
        }
        Ok(())
    }

    /// Window size in pixels.
    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize {
            width: (self.tile_size * self.screen_cols) as i32,
            height: (self.tile_size * self.screen_rows) as i32,
        }
    }

    /// Path of the tile-index manifest for `name`.
    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.map_dir.join(format!("{}.dat", name.to_lowercase()))
    }

    /// Path of the binary grid file for `name`.
    pub fn map_path(&self, name: &str) -> PathBuf {
        self.map_dir.join(format!("{}.map", name.to_lowercase()))
    }

    /// Path of the image for the tile called `base_name`.
    pub fn image_path(&self, base_name: &str) -> PathBuf {
        self.tile_dir
            .join(format!("{}.{}", base_name, self.image_extension))
    }
}

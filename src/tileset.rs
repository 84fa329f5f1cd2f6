use crate::config::EditorConfig;
use crate::error::MapError;
use crate::loader::manifest::ManifestEntry;
use crate::tile::TileId;
use std::path::PathBuf;

/// Number of leading entries of a sorted tile directory listing that are not
/// tiles. Entry `DIRECTORY_RESERVED_OFFSET + i` of the listing is tile `i`.
pub const DIRECTORY_RESERVED_OFFSET: usize = 1;

/// One loadable tile image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    /// File stem, e.g. `water` for `water.png`
    pub name: String,
    /// Where the image lives on disk
    pub path: PathBuf,
    /// Walkability flag carried by manifests; not used by the editor
    pub movable: bool,
}

/// Ordered tile images plus the background and out-of-range ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    images: Vec<TileImage>,
    default_id: TileId,
    out_of_range_id: TileId,
}

impl TileSet {
    /// Builds a set from images in id order.
    ///
    /// The tiles named `background` and `out_of_range` become the default and
    /// out-of-range ids; a name that is missing falls back to id 0.
    pub fn from_images(
        images: Vec<TileImage>,
        background: &str,
        out_of_range: &str,
    ) -> Result<Self, MapError> {
        if images.is_empty() {
            return Err(MapError::EmptyTileSet);
        }
        let find = |name: &str| {
            images
                .iter()
                .position(|img| img.name == name)
                .map(|i| TileId(i as u32))
        };
        let default_id = find(background).unwrap_or_else(|| {
            tracing::warn!(background, "background tile not in tile set, using id 0");
            TileId(0)
        });
        let out_of_range_id = find(out_of_range).unwrap_or_else(|| {
            tracing::warn!(out_of_range, "out-of-range tile not in tile set, using id 0");
            TileId(0)
        });
        Ok(TileSet {
            images,
            default_id,
            out_of_range_id,
        })
    }

    /// Scans `cfg.tile_dir`.
    ///
    /// Regular files are listed by file name; the first
    /// `cfg.reserved_entries` are skipped and the rest become tiles in order.
    pub fn scan_directory(cfg: &EditorConfig) -> Result<Self, MapError> {
        let dir = &cfg.tile_dir;
        let mut listing = Vec::new();
        let entries = std::fs::read_dir(dir).map_err(|e| MapError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| MapError::io(dir, e))?;
            let file_type = entry.file_type().map_err(|e| MapError::io(entry.path(), e))?;
            if file_type.is_file() {
                listing.push(entry.path());
            }
        }
        listing.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let images: Vec<TileImage> = listing
            .into_iter()
            .skip(cfg.reserved_entries)
            .filter_map(|path| {
                let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
                else {
                    // later ids shift down by one
                    tracing::warn!(path = %path.display(), "skipping tile without a UTF-8 name");
                    return None;
                };
                Some(TileImage {
                    name,
                    path,
                    movable: false,
                })
            })
            .collect();

        tracing::info!(dir = %dir.display(), tiles = images.len(), "scanned tile directory");
        Self::from_images(images, &cfg.background_tile, &cfg.out_of_range_tile)
    }

    /// Builds the set described by a map's manifest. Images are resolved
    /// against `cfg.tile_dir`.
    pub fn from_manifest(entries: &[ManifestEntry], cfg: &EditorConfig) -> Result<Self, MapError> {
        let images = entries
            .iter()
            .map(|e| TileImage {
                name: e.name.clone(),
                path: cfg.image_path(&e.name),
                movable: e.movable,
            })
            .collect();
        Self::from_images(images, &cfg.background_tile, &cfg.out_of_range_tile)
    }

    /// Clears this set and takes over every field of `other`.
    pub fn replace(&mut self, other: TileSet) {
        *self = other;
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether `id` names an image.
    #[inline]
    pub fn contains(&self, id: TileId) -> bool {
        id.index() < self.images.len()
    }

    /// Image for `id`.
    pub fn get(&self, id: TileId) -> Option<&TileImage> {
        self.images.get(id.index())
    }

    /// Base name for `id`.
    pub fn name_of(&self, id: TileId) -> Option<&str> {
        self.get(id).map(|img| img.name.as_str())
    }

    /// First id whose image is called `name`.
    pub fn id_of(&self, name: &str) -> Option<TileId> {
        self.images
            .iter()
            .position(|img| img.name == name)
            .map(|i| TileId(i as u32))
    }

    /// All images in id order.
    pub fn images(&self) -> &[TileImage] {
        &self.images
    }

    /// Background tile, drawn under every cell.
    pub fn default_id(&self) -> TileId {
        self.default_id
    }

    /// Tile drawn for cells outside the map.
    pub fn out_of_range_id(&self) -> TileId {
        self.out_of_range_id
    }
}

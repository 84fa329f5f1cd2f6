use crate::config::EditorConfig;
use crate::error::MapError;
use crate::loader::grid_file::{read_grid_file, write_grid_file, GridFile};
use crate::loader::manifest::{read_manifest, write_manifest};
use crate::render::{DrawCommand, DrawLayer, VisibleRange};
use crate::tile::TileId;
use crate::tileset::TileSet;
use crate::view::grid_to_screen;
use macroquad::prelude::{ivec2, IVec2};

/// Most distinct tiles one map file can reference (one byte per cell).
pub const MAX_MAP_TILES: usize = u8::MAX as usize + 1;

/// Largest grid a new map may allocate.
pub const MAX_MAP_CELLS: usize = 4096 * 4096;

/// A rows x cols grid of tile ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    name: String,
    rows: i32,
    cols: i32,
    default_id: TileId,
    cells: Vec<TileId>,
}

/// What a save writes: the deduplicated manifest and the renumbered grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    /// Image base names; position 0 is the out-of-range tile, 1 the background
    pub manifest: Vec<String>,
    /// Cells renumbered against `manifest`
    pub grid: GridFile,
}

impl GridMap {
    /// A map filled with `default_id`. Both dimensions must be positive and
    /// the cell count at most [`MAX_MAP_CELLS`].
    pub fn new(
        name: impl Into<String>,
        rows: i32,
        cols: i32,
        default_id: TileId,
    ) -> Result<Self, MapError> {
        let count = if rows > 0 && cols > 0 {
            (rows as usize)
                .checked_mul(cols as usize)
                .filter(|&n| n <= MAX_MAP_CELLS)
        } else {
            None
        };
        let Some(count) = count else {
            return Err(MapError::InvalidDimensions {
                rows: rows as i64,
                cols: cols as i64,
            });
        };
        Ok(GridMap {
            name: name.into(),
            rows,
            cols,
            default_id,
            cells: vec![default_id; count],
        })
    }

    /// Name as typed at the prompt.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Row count.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Fill value recorded in the map file.
    pub fn default_id(&self) -> TileId {
        self.default_id
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[TileId] {
        &self.cells
    }

    #[inline]
    fn index(&self, coord: IVec2) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 || coord.x >= self.cols || coord.y >= self.rows {
            return None;
        }
        Some(coord.y as usize * self.cols as usize + coord.x as usize)
    }

    /// Whether `coord` (x = column, y = row) lies on the map.
    pub fn in_bounds(&self, coord: IVec2) -> bool {
        self.index(coord).is_some()
    }

    /// Sets the cell at `coord`. Off-map coordinates are ignored.
    /// Returns true when a cell was written.
    pub fn paint(&mut self, coord: IVec2, tile: TileId) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Tile at `coord`, or `None` off the map so the caller keeps its
    /// current selection.
    pub fn pick(&self, coord: IVec2) -> Option<TileId> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Blits for every cell in `range`, in draw order.
    ///
    /// Off-map cells get the out-of-range tile. On-map cells get the
    /// background tile first and then their own tile, so transparent pixels
    /// show ground instead of whatever was drawn last frame.
    pub fn render_plan(
        &self,
        range: VisibleRange,
        offset: IVec2,
        tileset: &TileSet,
        tile_size: i32,
    ) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(range.len() * 2);
        for (row, col) in range.cells() {
            let cell = ivec2(col, row);
            let dest = grid_to_screen(cell, offset, tile_size);
            match self.pick(cell) {
                None => out.push(DrawCommand {
                    tile: tileset.out_of_range_id(),
                    dest,
                    layer: DrawLayer::OutOfRange,
                }),
                Some(tile) => {
                    out.push(DrawCommand {
                        tile: tileset.default_id(),
                        dest,
                        layer: DrawLayer::Background,
                    });
                    out.push(DrawCommand {
                        tile,
                        dest,
                        layer: DrawLayer::Foreground,
                    });
                }
            }
        }
        out
    }

    /// Deduplicates the tiles this map uses into a fresh manifest and
    /// renumbers every cell against it.
    ///
    /// The manifest starts as `[out_of_range_name, background_name]`; other
    /// names are appended in row-major order of first use.
    pub fn plan_save(
        &self,
        tileset: &TileSet,
        out_of_range_name: &str,
        background_name: &str,
    ) -> Result<SavePlan, MapError> {
        let mut manifest = vec![out_of_range_name.to_owned(), background_name.to_owned()];
        let mut cells = Vec::with_capacity(self.cells.len());

        for &id in &self.cells {
            let name = tileset.name_of(id).ok_or(MapError::UnknownTile {
                id: id.raw(),
                len: tileset.len(),
            })?;
            let pos = match manifest.iter().position(|n| n == name) {
                Some(pos) => pos,
                None => {
                    manifest.push(name.to_owned());
                    manifest.len() - 1
                }
            };
            if pos >= MAX_MAP_TILES {
                return Err(MapError::TooManyTiles(manifest.len()));
            }
            cells.push(pos as u8);
        }

        let default_pos = manifest
            .iter()
            .position(|n| n == background_name)
            .unwrap_or(1);

        Ok(SavePlan {
            manifest,
            grid: GridFile {
                rows: self.rows,
                cols: self.cols,
                default_id: default_pos as u8,
                cells,
            },
        })
    }

    /// Writes `<name>.dat` and `<name>.map` for this map. The in-memory map
    /// is not touched; reload to pick up the renumbered ids.
    pub fn save_files(
        &self,
        tileset: &TileSet,
        cfg: &EditorConfig,
        name: &str,
    ) -> Result<SavePlan, MapError> {
        let plan = self.plan_save(tileset, &cfg.out_of_range_tile, &cfg.background_tile)?;
        write_manifest(&cfg.manifest_path(name), &plan.manifest)?;
        write_grid_file(&cfg.map_path(name), &plan.grid)?;
        tracing::info!(
            name,
            rows = self.rows,
            cols = self.cols,
            tiles = plan.manifest.len(),
            "saved map"
        );
        Ok(plan)
    }

    /// Reads a saved map and the tile set its manifest describes. Nothing is
    /// returned unless both files are valid.
    pub fn load(cfg: &EditorConfig, name: &str) -> Result<(GridMap, TileSet), MapError> {
        let manifest_path = cfg.manifest_path(name);
        let entries = read_manifest(&manifest_path)?;
        let tileset = TileSet::from_manifest(&entries, cfg)?;

        let map_path = cfg.map_path(name);
        let grid = read_grid_file(&map_path)?;
        if grid.default_id as usize >= tileset.len() {
            return Err(MapError::corrupt(
                &map_path,
                format!("default id {} outside manifest of {}", grid.default_id, tileset.len()),
            ));
        }
        if let Some(bad) = grid.cells.iter().find(|&&c| c as usize >= tileset.len()) {
            return Err(MapError::corrupt(
                &map_path,
                format!("cell id {} outside manifest of {}", bad, tileset.len()),
            ));
        }

        let map = GridMap {
            name: name.to_owned(),
            rows: grid.rows,
            cols: grid.cols,
            default_id: TileId::from(grid.default_id),
            cells: grid.cells.into_iter().map(TileId::from).collect(),
        };
        tracing::info!(name, rows = map.rows, cols = map.cols, "loaded map");
        Ok((map, tileset))
    }
}

use anyhow::Context;
use macroquad::prelude::*;
use macroquad_tile_editor::{TileId, TileSet};
use std::path::{Path, PathBuf};

/// GPU textures for the images of one tile set, indexed by tile id.
pub struct TextureCache {
    paths: Vec<PathBuf>,
    textures: Vec<Texture2D>,
}

async fn load_tile_texture(path: &Path) -> anyhow::Result<Texture2D> {
    let tex = load_texture(&path.to_string_lossy())
        .await
        .with_context(|| format!("Loading texture {}", path.display()))?;
    tex.set_filter(FilterMode::Nearest);
    Ok(tex)
}

fn placeholder(tile_size: u16) -> Texture2D {
    let tex = Texture2D::from_image(&Image::gen_image_color(tile_size, tile_size, MAGENTA));
    tex.set_filter(FilterMode::Nearest);
    tex
}

impl TextureCache {
    /// Loads every image of `tileset`. Unreadable images are replaced by a
    /// solid placeholder so a broken file never stops the editor.
    pub async fn load(tileset: &TileSet, tile_size: u32) -> Self {
        let mut paths = Vec::with_capacity(tileset.len());
        let mut textures = Vec::with_capacity(tileset.len());
        for img in tileset.images() {
            let tex = match load_tile_texture(&img.path).await {
                Ok(tex) => tex,
                Err(e) => {
                    tracing::warn!("{:#}", e);
                    placeholder(tile_size.min(u16::MAX as u32) as u16)
                }
            };
            paths.push(img.path.clone());
            textures.push(tex);
        }
        tracing::debug!(count = textures.len(), "loaded tile textures");
        TextureCache { paths, textures }
    }

    /// False once the tile set has been replaced by a load or save.
    pub fn is_current(&self, tileset: &TileSet) -> bool {
        self.paths.len() == tileset.len()
            && self
                .paths
                .iter()
                .zip(tileset.images())
                .all(|(p, img)| *p == img.path)
    }

    pub fn get(&self, id: TileId) -> Option<&Texture2D> {
        self.textures.get(id.index())
    }
}

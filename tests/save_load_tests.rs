// tests/save_load_tests.rs

use macroquad::prelude::{ivec2, vec2};
use macroquad_tile_editor::loader::grid_file::read_grid_file;
use macroquad_tile_editor::loader::manifest::read_manifest;
use macroquad_tile_editor::{
    Command, Editor, EditorConfig, GridMap, InitialMap, MapError, ScriptedPrompt, TileId,
};
use std::fs;
use tempfile::TempDir;

/// Tile directory with a reserved marker entry and four tiles, plus an
/// empty map directory.
fn workspace() -> (TempDir, EditorConfig) {
    let root = tempfile::tempdir().expect("temp dir");
    let tiles = root.path().join("mapchip");
    let maps = root.path().join("maps");
    fs::create_dir_all(&tiles).unwrap();
    fs::create_dir_all(&maps).unwrap();
    for f in [".reserved", "grass.png", "none.png", "sand.png", "water.png"] {
        fs::write(tiles.join(f), b"").unwrap();
    }
    let cfg = EditorConfig {
        tile_dir: tiles,
        map_dir: maps,
        initial_map: InitialMap {
            name: "NEW".into(),
            rows: 4,
            cols: 4,
        },
        ..EditorConfig::default()
    };
    (root, cfg)
}

fn names(ed: &Editor) -> Vec<String> {
    ed.map()
        .cells()
        .iter()
        .map(|&id| ed.tileset().name_of(id).expect("valid id").to_owned())
        .collect()
}

#[test]
fn background_only_map_writes_two_entry_manifest() {
    let (_root, cfg) = workspace();
    let mut ed = Editor::new(cfg.clone()).unwrap();
    ed.new_map("SMALL", 2, 2, ed.tileset().default_id()).unwrap();
    ed.save("SMALL").unwrap();

    let manifest = read_manifest(&cfg.manifest_path("small")).unwrap();
    let names: Vec<&str> = manifest.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["none", "water"]);

    let grid = read_grid_file(&cfg.map_path("small")).unwrap();
    assert_eq!(grid.default_id, 1);
    assert_eq!(grid.cells, [1, 1, 1, 1]);
}

#[test]
fn save_then_load_keeps_tile_names() {
    let (_root, cfg) = workspace();
    let mut ed = Editor::new(cfg.clone()).unwrap();
    let grass = ed.tileset().id_of("grass").unwrap();
    let sand = ed.tileset().id_of("sand").unwrap();
    let mut painted = GridMap::new("ISLAND", 3, 2, ed.tileset().default_id()).unwrap();
    painted.paint(ivec2(0, 0), grass);
    painted.paint(ivec2(1, 2), sand);
    painted.paint(ivec2(1, 0), grass);

    // the same strokes through the editor, cursor at the origin
    let mut prompt = ScriptedPrompt::new(["ISLAND", "3", "2", "3"]);
    ed.execute(Command::NewMap, &mut prompt).unwrap();
    ed.palette_mut().select(grass);
    let centre = ed.config().screen_size();
    let (cx, cy) = (centre.width as f32 / 2.0, centre.height as f32 / 2.0);
    ed.paint_at(vec2(cx, cy));
    ed.paint_at(vec2(cx + 32.0, cy));
    ed.palette_mut().select(sand);
    ed.paint_at(vec2(cx + 32.0, cy + 64.0));
    assert_eq!(ed.map().cells(), painted.cells());

    let expected = names(&ed);
    ed.save("Island").unwrap();
    assert_eq!(ed.palette().selected(), TileId(0));
    assert_eq!(names(&ed), expected);

    let mut fresh = Editor::new(cfg).unwrap();
    fresh.load("ISLAND").unwrap();
    assert_eq!(fresh.map().rows(), 3);
    assert_eq!(fresh.map().cols(), 2);
    assert_eq!(names(&fresh), expected);
    assert_eq!(fresh.tileset().name_of(fresh.tileset().default_id()), Some("water"));
    assert_eq!(fresh.tileset().name_of(fresh.tileset().out_of_range_id()), Some("none"));
}

#[test]
fn saved_manifest_is_deduplicated() {
    let (_root, cfg) = workspace();
    let mut ed = Editor::new(cfg.clone()).unwrap();
    ed.new_map("MIX", 2, 3, ed.tileset().id_of("sand").unwrap()).unwrap();
    ed.save("MIX").unwrap();
    // second save runs against the manifest-built tile set
    ed.save("MIX").unwrap();

    let manifest = read_manifest(&cfg.manifest_path("MIX")).unwrap();
    let names: Vec<&str> = manifest.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["none", "water", "sand"]);

    let grid = read_grid_file(&cfg.map_path("MIX")).unwrap();
    assert!(grid.cells.iter().all(|&c| (c as usize) < manifest.len()));
    assert!(grid.cells.iter().all(|&c| c == 2));
}

#[test]
fn loading_missing_map_keeps_state() {
    let (_root, cfg) = workspace();
    let mut ed = Editor::new(cfg).unwrap();
    let map_before = ed.map().clone();
    let tiles_before = ed.tileset().clone();

    let err = ed.load("NOWHERE").unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
    assert_eq!(ed.map(), &map_before);
    assert_eq!(ed.tileset(), &tiles_before);
}

#[test]
fn loading_corrupt_grid_keeps_state() {
    let (_root, cfg) = workspace();
    let mut ed = Editor::new(cfg.clone()).unwrap();
    ed.new_map("BROKEN", 2, 2, ed.tileset().default_id()).unwrap();
    ed.save("BROKEN").unwrap();

    ed.new_map("OTHER", 3, 3, ed.tileset().default_id()).unwrap();
    let map_before = ed.map().clone();
    let tiles_before = ed.tileset().clone();

    let path = cfg.map_path("BROKEN");
    let mut bytes = fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 1);
    fs::write(&path, bytes).unwrap();

    assert!(matches!(ed.load("BROKEN"), Err(MapError::Corrupt { .. })));
    assert_eq!(ed.map(), &map_before);
    assert_eq!(ed.tileset(), &tiles_before);
}

#[test]
fn cell_ids_beyond_manifest_are_corrupt() {
    let (_root, cfg) = workspace();
    fs::write(cfg.manifest_path("bad"), "0,none,0\n1,water,0\n").unwrap();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&1i32.to_le_bytes());
    bytes.extend_from_slice(&1i32.to_le_bytes());
    bytes.push(1);
    bytes.push(5);
    fs::write(cfg.map_path("bad"), bytes).unwrap();

    let mut ed = Editor::new(cfg).unwrap();
    assert!(matches!(ed.load("BAD"), Err(MapError::Corrupt { .. })));
}

#[test]
fn load_via_prompt_uses_lower_case_files() {
    let (_root, cfg) = workspace();
    let mut ed = Editor::new(cfg.clone()).unwrap();
    ed.new_map("CAVE", 1, 2, ed.tileset().default_id()).unwrap();
    ed.save("CAVE").unwrap();
    assert!(cfg.map_path("cave").exists());

    let mut other = Editor::new(cfg).unwrap();
    let mut prompt = ScriptedPrompt::new(["CAVE"]);
    other.execute(Command::Load, &mut prompt).unwrap();
    assert_eq!(other.map().name(), "CAVE");
    assert_eq!(other.map().cols(), 2);
}

#[test]
fn loading_smaller_tile_set_resets_stale_selection() {
    let (_root, cfg) = workspace();
    let mut ed = Editor::new(cfg.clone()).unwrap();
    ed.new_map("POND", 2, 2, ed.tileset().default_id()).unwrap();
    ed.save("POND").unwrap();

    let mut other = Editor::new(cfg.clone()).unwrap();
    other.palette_mut().select(TileId(3));
    other.load("POND").unwrap();
    assert_eq!(other.tileset().len(), 2);
    assert!(other.tileset().contains(other.palette().selected()));

    let centre = other.config().screen_size();
    assert!(other.paint_at(vec2(centre.width as f32 / 2.0, centre.height as f32 / 2.0)));
    let painted = other.map().pick(ivec2(0, 0)).unwrap();
    assert!(other.tileset().contains(painted));
    other.save("POND").unwrap();

    let manifest = read_manifest(&cfg.manifest_path("pond")).unwrap();
    assert!(manifest.len() <= 2);
}

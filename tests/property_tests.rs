// tests/property_tests.rs

use macroquad::prelude::ivec2;
use macroquad_tile_editor::{EditorConfig, GridMap, TileId, TileImage, TileSet};
use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

const NAMES: [&str; 6] = ["grass", "none", "sand", "water", "lava", "road"];

fn tileset() -> TileSet {
    let images = NAMES
        .iter()
        .map(|n| TileImage {
            name: (*n).to_owned(),
            path: PathBuf::from(format!("{n}.png")),
            movable: false,
        })
        .collect();
    TileSet::from_images(images, "water", "none").unwrap()
}

fn painted_map() -> impl Strategy<Value = GridMap> {
    (1i32..7, 1i32..7).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(0u32..NAMES.len() as u32, (rows * cols) as usize).prop_map(
            move |ids| {
                let mut map = GridMap::new("PROP", rows, cols, TileId(3)).unwrap();
                for (i, id) in ids.into_iter().enumerate() {
                    let i = i as i32;
                    map.paint(ivec2(i % cols, i / cols), TileId(id));
                }
                map
            },
        )
    })
}

proptest! {
    #[test]
    fn manifest_is_unique_and_anchored(map in painted_map()) {
        let set = tileset();
        let plan = map.plan_save(&set, "none", "water").unwrap();

        let unique: HashSet<&String> = plan.manifest.iter().collect();
        prop_assert_eq!(unique.len(), plan.manifest.len());
        prop_assert_eq!(plan.manifest[0].as_str(), "none");
        prop_assert_eq!(plan.manifest[1].as_str(), "water");
        prop_assert_eq!(plan.grid.default_id, 1);
        prop_assert!(plan.grid.cells.iter().all(|&c| (c as usize) < plan.manifest.len()));

        for (cell, &id) in plan.grid.cells.iter().zip(map.cells()) {
            prop_assert_eq!(plan.manifest[*cell as usize].as_str(), set.name_of(id).unwrap());
        }
    }

    #[test]
    fn save_load_round_trip_keeps_names(map in painted_map()) {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EditorConfig {
            map_dir: dir.path().to_path_buf(),
            ..EditorConfig::default()
        };
        let set = tileset();
        map.save_files(&set, &cfg, "prop").unwrap();
        let (loaded, loaded_set) = GridMap::load(&cfg, "PROP").unwrap();

        prop_assert_eq!(loaded.rows(), map.rows());
        prop_assert_eq!(loaded.cols(), map.cols());
        let before: Vec<&str> = map.cells().iter().map(|&id| set.name_of(id).unwrap()).collect();
        let after: Vec<&str> = loaded
            .cells()
            .iter()
            .map(|&id| loaded_set.name_of(id).unwrap())
            .collect();
        prop_assert_eq!(before, after);
    }
}

//! Tile-index manifest: one `<index>,<name>,<movable>` line per tile.
use crate::error::MapError;
use std::fmt::Write as _;
use std::path::Path;

/// One manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Tile id the line describes
    pub index: usize,
    /// Image base name
    pub name: String,
    /// Walkability flag, reserved for later use
    pub movable: bool,
}

/// Parses manifest text. Blank lines are skipped; indices must count up from 0.
pub fn parse_manifest(txt: &str, path: &Path) -> Result<Vec<ManifestEntry>, MapError> {
    let mut entries = Vec::new();
    for (n, line) in txt.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let bad = |reason: String| MapError::Manifest {
            path: path.to_path_buf(),
            line: n + 1,
            reason,
        };

        let fields: Vec<&str> = line.split(',').collect();
        let [index, name, movable] = fields[..] else {
            return Err(bad(format!("expected 3 fields, found {}", fields.len())));
        };
        let index: usize = index
            .trim()
            .parse()
            .map_err(|_| bad(format!("index '{}' is not a number", index)))?;
        if index != entries.len() {
            return Err(bad(format!("index {} out of sequence, expected {}", index, entries.len())));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(bad("empty image name".to_owned()));
        }
        let movable: i64 = movable
            .trim()
            .parse()
            .map_err(|_| bad(format!("movable flag '{}' is not a number", movable)))?;

        entries.push(ManifestEntry {
            index,
            name: name.to_owned(),
            movable: movable != 0,
        });
    }
    Ok(entries)
}

/// Renders manifest text for `names` in order. The movable flag is always 0.
pub fn format_manifest(names: &[String]) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        let _ = writeln!(out, "{},{},0", i, name);
    }
    out
}

/// Reads and parses the manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>, MapError> {
    let txt = std::fs::read_to_string(path).map_err(|e| MapError::io(path, e))?;
    parse_manifest(&txt, path)
}

/// Writes the manifest for `names` to `path`.
pub fn write_manifest(path: &Path, names: &[String]) -> Result<(), MapError> {
    std::fs::write(path, format_manifest(names)).map_err(|e| MapError::io(path, e))
}

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for tile sets, map files and editor commands
#[derive(Debug)]
pub enum MapError {
    /// File I/O error on a known path
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// Config file could not be parsed
    Json {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },
    /// Config values that cannot drive the editor
    Config(String),
    /// A manifest line could not be parsed
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },
    /// A binary map file is truncated or inconsistent
    Corrupt {
        /// Map file path
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },
    /// A tile set with no images cannot back a map
    EmptyTileSet,
    /// A cell references an id the live tile set does not have
    UnknownTile {
        /// Offending id
        id: u32,
        /// Number of images in the live tile set
        len: usize,
    },
    /// The map uses more distinct tiles than one byte per cell can encode
    TooManyTiles(usize),
    /// Rows or cols were not positive, or the grid is too large
    InvalidDimensions {
        /// Requested rows
        rows: i64,
        /// Requested cols
        cols: i64,
    },
    /// A prompt answer could not be used
    InvalidAnswer {
        /// Question that was asked
        question: String,
        /// Answer that was given
        answer: String,
    },
    /// The prompt was dismissed before all questions were answered
    Cancelled,
}

impl MapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MapError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        MapError::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            MapError::Json { path, source } => {
                write!(f, "JSON parse error in {}: {}", path.display(), source)
            }
            MapError::Config(msg) => write!(f, "Invalid config: {}", msg),
            MapError::Manifest { path, line, reason } => {
                write!(f, "Bad manifest line {} in {}: {}", line, path.display(), reason)
            }
            MapError::Corrupt { path, reason } => {
                write!(f, "Corrupt map file {}: {}", path.display(), reason)
            }
            MapError::EmptyTileSet => write!(f, "Tile set contains no images"),
            MapError::UnknownTile { id, len } => {
                write!(f, "Tile id {} is not in the loaded tile set ({} images)", id, len)
            }
            MapError::TooManyTiles(n) => {
                write!(f, "Map uses {} distinct tiles, at most 256 fit in a map file", n)
            }
            MapError::InvalidDimensions { rows, cols } => {
                write!(f, "Map dimensions {}x{} are not positive or exceed the cell limit", rows, cols)
            }
            MapError::InvalidAnswer { question, answer } => {
                write!(f, "Cannot use '{}' as an answer to {}", answer, question)
            }
            MapError::Cancelled => write!(f, "Prompt cancelled"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io { source, .. } => Some(source),
            MapError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

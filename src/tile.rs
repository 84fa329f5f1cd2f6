use std::fmt;

/// Index of an image inside the active [`TileSet`](crate::TileSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileId(pub u32);

impl TileId {
    /// Position in the tile set.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw numeric value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl From<u8> for TileId {
    fn from(v: u8) -> Self {
        TileId(v as u32)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

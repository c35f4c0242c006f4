//! Cell addressing and tile references

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One addressable grid cell: column, row and layer index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
    pub layer: usize,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32, layer: usize) -> Self {
        Self { x, y, layer }
    }

    /// Unsigned column/row, or None if either is negative
    pub fn to_unsigned(&self) -> Option<(u32, u32)> {
        if self.x < 0 || self.y < 0 {
            return None;
        }
        Some((self.x as u32, self.y as u32))
    }
}

impl From<(i32, i32, usize)> for CellCoord {
    fn from((x, y, layer): (i32, i32, usize)) -> Self {
        Self::new(x, y, layer)
    }
}

/// Identifies a tile definition: an entry of a tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId {
    pub tileset_id: Uuid,
    /// Virtual tile index within the tileset (no flip flags)
    pub index: u32,
}

impl TileId {
    pub fn new(tileset_id: Uuid, index: u32) -> Self {
        Self { tileset_id, index }
    }
}

/// What occupies a cell
///
/// Only [`TileRef::Tile`] is backed by an editable shared definition. Callers
/// branch on [`TileRef::definition`] rather than on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileRef {
    /// A tile placed from a tileset entry
    Tile(TileId),
    /// Covered by a multi-cell tile whose base sits in another cell
    Occupied,
}

impl TileRef {
    /// The shared definition behind this tile, if it has one
    pub fn definition(&self) -> Option<TileId> {
        match self {
            TileRef::Tile(id) => Some(*id),
            TileRef::Occupied => None,
        }
    }
}

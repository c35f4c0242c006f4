//! Tile and object layers of a level

use crate::ColliderShape;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Tile value stored in every cell of a multi-cell tile except its base cell
pub const OCCUPIED_CELL: u32 = u32::MAX;

/// Bits of a stored tile value holding the tileset index.
/// The upper three bits are flip flags and do not affect collider shapes.
const TILE_INDEX_MASK: u32 = 0x1FFF_FFFF;

/// Tileset index of a stored tile value
#[inline]
pub fn tile_index(tile: u32) -> u32 {
    tile & TILE_INDEX_MASK
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub data: LayerData,
}

impl Layer {
    /// Create an empty tile layer of `width` x `height` cells
    pub fn new_tile_layer(name: String, tileset_id: Uuid, width: u32, height: u32) -> Self {
        let cells = (width * height) as usize;
        Self {
            name,
            data: LayerData::Tiles {
                tileset_id,
                tiles: vec![None; cells],
                occupied_cells: HashMap::new(),
                colliders: vec![ColliderShape::None; cells],
            },
        }
    }

    /// Create a layer that holds no tiles. The brush never targets it.
    pub fn new_object_layer(name: String) -> Self {
        Self {
            name,
            data: LayerData::Objects,
        }
    }

    pub fn layer_type(&self) -> LayerType {
        match &self.data {
            LayerData::Tiles { .. } => LayerType::Tiles,
            LayerData::Objects => LayerType::Objects,
        }
    }

    pub fn tileset_id(&self) -> Option<Uuid> {
        match &self.data {
            LayerData::Tiles { tileset_id, .. } => Some(*tileset_id),
            LayerData::Objects => None,
        }
    }

    /// Base cell of the multi-cell tile covering `index`, or `index` itself
    pub fn base_cell(&self, index: usize) -> usize {
        match &self.data {
            LayerData::Tiles { occupied_cells, .. } => {
                occupied_cells.get(&index).copied().unwrap_or(index)
            }
            LayerData::Objects => index,
        }
    }

    /// Cells covered by the tile whose base cell is `base`, base first
    pub fn footprint(&self, base: usize) -> Vec<usize> {
        let mut cells = vec![base];
        if let LayerData::Tiles { occupied_cells, .. } = &self.data {
            let mut covered: Vec<usize> = occupied_cells
                .iter()
                .filter(|(_, b)| **b == base)
                .map(|(cell, _)| *cell)
                .collect();
            covered.sort_unstable();
            cells.extend(covered);
        }
        cells
    }

    /// Empty every cell of the tile covering `index`, collider shapes included
    pub fn clear_tile(&mut self, index: usize) {
        let cells = self.footprint(self.base_cell(index));
        if let LayerData::Tiles {
            tiles,
            occupied_cells,
            colliders,
            ..
        } = &mut self.data
        {
            for cell in cells {
                if let Some(tile) = tiles.get_mut(cell) {
                    *tile = None;
                }
                if let Some(collider) = colliders.get_mut(cell) {
                    *collider = ColliderShape::None;
                }
                occupied_cells.remove(&cell);
            }
        }
    }

    /// Write one cell. `base` is the base cell when `index` is covered by a
    /// multi-cell tile. Returns false for object layers and cells past the end.
    pub fn write_cell(
        &mut self,
        index: usize,
        tile: Option<u32>,
        collider: ColliderShape,
        base: Option<usize>,
    ) -> bool {
        let LayerData::Tiles {
            tiles,
            occupied_cells,
            colliders,
            ..
        } = &mut self.data
        else {
            return false;
        };
        if index >= tiles.len() {
            return false;
        }
        if colliders.len() < tiles.len() {
            colliders.resize(tiles.len(), ColliderShape::None);
        }
        tiles[index] = tile;
        colliders[index] = collider;
        match base {
            Some(base) => occupied_cells.insert(index, base),
            None => occupied_cells.remove(&index),
        };
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerType {
    Tiles,
    Objects,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerData {
    Tiles {
        tileset_id: Uuid,
        /// Row-major cells. None is empty; multi-cell tiles store their index
        /// in the base cell and OCCUPIED_CELL in the rest.
        tiles: Vec<Option<u32>>,
        /// Covered cell -> base cell, for every non-base cell of a multi-cell tile
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        occupied_cells: HashMap<usize, usize>,
        /// Collider shape per cell, parallel to `tiles`.
        /// Older files may omit it; missing entries read as None.
        #[serde(default)]
        colliders: Vec<ColliderShape>,
    },
    Objects,
}

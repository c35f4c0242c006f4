//! Tilesets and the per-tile definitions shared by every placed instance

use crate::ColliderShape;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Properties of one tile in a tileset
///
/// A single record is shared by every cell that references the tile, in every
/// level of the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileProperties {
    /// Collider shape newly placed instances of this tile start with
    #[serde(default)]
    pub collider_shape: ColliderShape,
    /// Width in cells for multi-cell tiles
    #[serde(default = "default_grid_extent")]
    pub grid_width: u32,
    /// Height in cells for multi-cell tiles
    #[serde(default = "default_grid_extent")]
    pub grid_height: u32,
}

fn default_grid_extent() -> u32 {
    1
}

impl Default for TileProperties {
    fn default() -> Self {
        Self {
            collider_shape: ColliderShape::None,
            grid_width: 1,
            grid_height: 1,
        }
    }
}

impl TileProperties {
    pub fn with_collider_shape(mut self, shape: ColliderShape) -> Self {
        self.collider_shape = shape;
        self
    }

    pub fn with_grid_size(mut self, width: u32, height: u32) -> Self {
        self.grid_width = width.max(1);
        self.grid_height = height.max(1);
        self
    }
}

/// A tile atlas and the definitions of its tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tileset {
    pub id: Uuid,
    pub name: String,
    pub tile_size: u32,
    /// Per-tile properties keyed by virtual tile index; missing entries use defaults
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tile_properties: HashMap<u32, TileProperties>,
    /// Set when a tile definition changed and the tileset needs saving
    #[serde(skip)]
    pub dirty: bool,
}

impl Tileset {
    pub fn new(name: String, tile_size: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tile_size,
            tile_properties: HashMap::new(),
            dirty: false,
        }
    }

    /// Get properties for a tile, if any were set
    pub fn get_tile_properties(&self, tile_index: u32) -> Option<&TileProperties> {
        self.tile_properties.get(&tile_index)
    }

    /// Get mutable properties for a tile, creating defaults if needed
    pub fn get_tile_properties_mut(&mut self, tile_index: u32) -> &mut TileProperties {
        self.tile_properties.entry(tile_index).or_default()
    }

    /// Replace the properties of a tile
    pub fn set_tile_properties(&mut self, tile_index: u32, properties: TileProperties) {
        self.tile_properties.insert(tile_index, properties);
    }

    /// Default collider shape for a tile (None if the tile has no properties)
    pub fn collider_shape(&self, tile_index: u32) -> ColliderShape {
        self.get_tile_properties(tile_index)
            .map(|p| p.collider_shape)
            .unwrap_or_default()
    }

    /// Grid size (width, height) in cells of a tile, at least one cell each way
    pub fn get_tile_grid_size(&self, tile_index: u32) -> (u32, u32) {
        self.get_tile_properties(tile_index)
            .map(|p| (p.grid_width.max(1), p.grid_height.max(1)))
            .unwrap_or((1, 1))
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

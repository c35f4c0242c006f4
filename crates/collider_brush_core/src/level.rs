//! Level/map containing tile layers

use crate::{
    tile_index, CellCoord, ColliderShape, Layer, LayerData, LayerType, TileId, TileRef,
    OCCUPIED_CELL,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A level/map made of stacked layers sharing one width and height
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: Uuid,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub layers: Vec<Layer>,
}

impl Level {
    /// Create a new empty level
    pub fn new(name: String, width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            width,
            height,
            layers: Vec::new(),
        }
    }

    /// Add a new layer
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Get layer by index
    pub fn get_layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Whether any layer of this level can hold tiles
    pub fn has_tile_layers(&self) -> bool {
        self.layers
            .iter()
            .any(|layer| layer.layer_type() == LayerType::Tiles)
    }

    /// Row-major index of a cell, or None when outside the level
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Get tile at position for a specific layer
    pub fn get_tile(&self, layer_index: usize, x: u32, y: u32) -> Option<u32> {
        let index = self.cell_index(x, y)?;
        if let Some(layer) = self.layers.get(layer_index) {
            if let LayerData::Tiles { tiles, .. } = &layer.data {
                return tiles.get(index).copied().flatten();
            }
        }
        None
    }

    /// Set tile at position for a specific layer.
    /// The cell's collider shape is reset to None.
    pub fn set_tile(&mut self, layer_index: usize, x: u32, y: u32, tile: Option<u32>) {
        self.set_tile_with_collider(layer_index, x, y, tile, ColliderShape::None);
    }

    /// Set tile and collider shape of a cell in one step.
    /// A multi-cell tile covering the cell is removed entirely first.
    pub fn set_tile_with_collider(
        &mut self,
        layer_index: usize,
        x: u32,
        y: u32,
        tile: Option<u32>,
        collider: ColliderShape,
    ) {
        let Some(index) = self.cell_index(x, y) else {
            return;
        };
        if let Some(layer) = self.layers.get_mut(layer_index) {
            layer.clear_tile(index);
            layer.write_cell(index, tile, collider, None);
        }
    }

    /// Place a tile spanning `grid_size` cells with its base at (x, y).
    ///
    /// Every tile overlapping the new footprint is removed first, including
    /// the parts of multi-cell tiles outside it. Returns false if the tile
    /// does not fit or the layer holds no tiles.
    pub fn place_tile(
        &mut self,
        layer_index: usize,
        x: u32,
        y: u32,
        tile: u32,
        grid_size: (u32, u32),
        collider: ColliderShape,
    ) -> bool {
        let (grid_width, grid_height) = (grid_size.0.max(1), grid_size.1.max(1));
        let fits_x = x.checked_add(grid_width).is_some_and(|end| end <= self.width);
        let fits_y = y.checked_add(grid_height).is_some_and(|end| end <= self.height);
        if !fits_x || !fits_y {
            return false;
        }

        let width = self.width as usize;
        let base = y as usize * width + x as usize;
        let cells: Vec<usize> = (0..grid_height as usize)
            .flat_map(|dy| (0..grid_width as usize).map(move |dx| base + dy * width + dx))
            .collect();

        let Some(layer) = self.layers.get_mut(layer_index) else {
            return false;
        };
        if layer.layer_type() != LayerType::Tiles {
            return false;
        }

        for &cell in &cells {
            layer.clear_tile(cell);
        }
        for &cell in &cells {
            if cell == base {
                layer.write_cell(cell, Some(tile), collider, None);
            } else {
                layer.write_cell(cell, Some(OCCUPIED_CELL), collider, Some(base));
            }
        }
        true
    }

    /// Get the collider shape stored on a cell. Out-of-range cells read as None.
    pub fn get_collider(&self, layer_index: usize, x: u32, y: u32) -> ColliderShape {
        let Some(index) = self.cell_index(x, y) else {
            return ColliderShape::None;
        };
        match self.layers.get(layer_index).map(|layer| &layer.data) {
            Some(LayerData::Tiles { colliders, .. }) => {
                colliders.get(index).copied().unwrap_or_default()
            }
            _ => ColliderShape::None,
        }
    }

    /// Set the collider shape stored on a cell. Out-of-range cells are ignored.
    pub fn set_collider(&mut self, layer_index: usize, x: u32, y: u32, collider: ColliderShape) {
        let Some(index) = self.cell_index(x, y) else {
            return;
        };
        if let Some(layer) = self.layers.get_mut(layer_index) {
            if let LayerData::Tiles {
                tiles, colliders, ..
            } = &mut layer.data
            {
                if index >= tiles.len() {
                    return;
                }
                if colliders.len() < tiles.len() {
                    colliders.resize(tiles.len(), ColliderShape::None);
                }
                colliders[index] = collider;
            }
        }
    }

    /// Resolve what occupies a cell
    pub fn tile_ref(&self, cell: CellCoord) -> Option<TileRef> {
        let (x, y) = cell.to_unsigned()?;
        let tile = self.get_tile(cell.layer, x, y)?;
        if tile == OCCUPIED_CELL {
            return Some(TileRef::Occupied);
        }
        let tileset_id = self.layers.get(cell.layer)?.tileset_id()?;
        Some(TileRef::Tile(TileId::new(tileset_id, tile_index(tile))))
    }
}

//! Traits the brush uses to read and write map cells and shared tile definitions
//!
//! [`TileMap`] is implemented by [`Level`]; [`TileDefinitions`] by the
//! project's tileset list. Other hosts can implement them over their own storage.

use crate::{CellCoord, ColliderShape, Level, TileId, TileRef, Tileset};

/// Cell storage a brush can paint on
pub trait TileMap {
    /// What occupies `cell`, or None for empty and out-of-range cells
    fn tile(&self, cell: CellCoord) -> Option<TileRef>;

    /// Collider shape stored on `cell`; None for empty and out-of-range cells
    fn collider_shape(&self, cell: CellCoord) -> ColliderShape;

    fn set_collider_shape(&mut self, cell: CellCoord, shape: ColliderShape);
}

/// Store of shared tile definitions
pub trait TileDefinitions {
    /// Collider shape new instances of `tile` start with, or None if the definition is unknown
    fn default_collider_shape(&self, tile: TileId) -> Option<ColliderShape>;

    /// Returns false if no definition exists for `tile`
    fn set_default_collider_shape(&mut self, tile: TileId, shape: ColliderShape) -> bool;

    /// Flag the definition as changed so the host saves it
    fn mark_changed(&mut self, tile: TileId);
}

impl TileMap for Level {
    fn tile(&self, cell: CellCoord) -> Option<TileRef> {
        self.tile_ref(cell)
    }

    fn collider_shape(&self, cell: CellCoord) -> ColliderShape {
        match cell.to_unsigned() {
            Some((x, y)) => self.get_collider(cell.layer, x, y),
            None => ColliderShape::None,
        }
    }

    fn set_collider_shape(&mut self, cell: CellCoord, shape: ColliderShape) {
        if let Some((x, y)) = cell.to_unsigned() {
            self.set_collider(cell.layer, x, y, shape);
        }
    }
}

impl TileDefinitions for Vec<Tileset> {
    fn default_collider_shape(&self, tile: TileId) -> Option<ColliderShape> {
        self.iter()
            .find(|t| t.id == tile.tileset_id)
            .map(|t| t.collider_shape(tile.index))
    }

    fn set_default_collider_shape(&mut self, tile: TileId, shape: ColliderShape) -> bool {
        let Some(tileset) = self.iter_mut().find(|t| t.id == tile.tileset_id) else {
            return false;
        };
        tileset.get_tile_properties_mut(tile.index).collider_shape = shape;
        true
    }

    fn mark_changed(&mut self, tile: TileId) {
        if let Some(tileset) = self.iter_mut().find(|t| t.id == tile.tileset_id) {
            tileset.mark_dirty();
        }
    }
}

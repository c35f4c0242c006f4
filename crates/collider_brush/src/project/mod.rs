//! Project management for the collider brush
//!
//! The Project resource is the editing context the brush paints in: every
//! open level plus the tilesets whose tile definitions they share.

mod file;

pub use file::*;

use bevy::prelude::Resource;
use collider_brush_core::{
    tile_index, CellCoord, Level, TileDefinitions, TileId, TileMap, Tileset,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::brush::BrushTarget;

/// The levels and tilesets being edited
#[derive(Debug, Clone, Serialize, Deserialize, Resource)]
pub struct Project {
    pub version: u32,
    #[serde(skip)]
    pub path: Option<PathBuf>,
    pub tilesets: Vec<Tileset>,
    pub levels: Vec<Level>,
    #[serde(skip)]
    pub dirty: bool,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            version: 1,
            path: None,
            tilesets: Vec::new(),
            levels: Vec::new(),
            dirty: false,
        }
    }
}

impl Project {
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Add a tileset, returning its ID
    pub fn add_tileset(&mut self, tileset: Tileset) -> Uuid {
        let id = tileset.id;
        self.tilesets.push(tileset);
        self.dirty = true;
        id
    }

    /// Add a level, returning its ID
    pub fn add_level(&mut self, level: Level) -> Uuid {
        let id = level.id;
        self.levels.push(level);
        self.dirty = true;
        id
    }

    pub fn get_tileset(&self, id: Uuid) -> Option<&Tileset> {
        self.tilesets.iter().find(|t| t.id == id)
    }

    pub fn get_level(&self, id: Uuid) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Borrow a level as the brush's map together with the shared tile definitions.
    /// Unknown levels yield a target without a map.
    pub fn brush_target(&mut self, level_id: Uuid) -> BrushTarget<'_> {
        let definitions: &mut dyn TileDefinitions = &mut self.tilesets;
        match self.levels.iter_mut().find(|l| l.id == level_id) {
            Some(level) => BrushTarget::new(level, definitions),
            None => BrushTarget::without_map(definitions),
        }
    }

    /// Place a tile and give its cells the collider shape of the tile's definition.
    ///
    /// Tiles it overlaps are removed whole, including multi-cell tiles that
    /// only partly overlap. Returns false if the level is unknown or the tile
    /// does not fit.
    pub fn place_tile(&mut self, level_id: Uuid, cell: CellCoord, tile: u32) -> bool {
        let Some((x, y)) = cell.to_unsigned() else {
            return false;
        };
        let Some(level) = self.levels.iter_mut().find(|l| l.id == level_id) else {
            return false;
        };
        let Some(tileset_id) = level.get_layer(cell.layer).and_then(|l| l.tileset_id()) else {
            return false;
        };

        let index = tile_index(tile);
        let tileset = self.tilesets.iter().find(|t| t.id == tileset_id);
        let (grid_width, grid_height) = tileset
            .map(|t| t.get_tile_grid_size(index))
            .unwrap_or((1, 1));
        let collider = self
            .tilesets
            .default_collider_shape(TileId::new(tileset_id, index))
            .unwrap_or_default();

        let placed = level.place_tile(
            cell.layer,
            x,
            y,
            tile,
            (grid_width, grid_height),
            collider,
        );
        if placed {
            self.dirty = true;
        }
        placed
    }

    /// Whether painting `cell` of `level_id` would hit a tile
    pub fn has_tile_at(&self, level_id: Uuid, cell: CellCoord) -> bool {
        self.get_level(level_id)
            .and_then(|level| level.tile(cell))
            .is_some()
    }

    /// Whether any tile definition changed since the last save
    pub fn has_unsaved_tilesets(&self) -> bool {
        self.tilesets.iter().any(|t| t.dirty)
    }

    /// Get project name from path
    pub fn name(&self) -> &str {
        self.path
            .as_ref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{BrushState, ColliderBrush, GridBrush};
    use collider_brush_core::{ColliderShape, Layer, TileProperties, TileRef};

    fn project() -> (Project, Uuid, Uuid) {
        let mut project = Project::default();
        let tileset_id = project.add_tileset(Tileset::new("Terrain".to_string(), 16));
        let mut level = Level::new("One".to_string(), 8, 8);
        level.add_layer(Layer::new_tile_layer("Ground".to_string(), tileset_id, 8, 8));
        let level_id = project.add_level(level);
        project.dirty = false;
        (project, level_id, tileset_id)
    }

    #[test]
    fn test_place_tile_uses_definition_default() {
        let (mut project, level_id, tileset_id) = project();
        project.tilesets[0].set_tile_properties(
            3,
            TileProperties::default().with_collider_shape(ColliderShape::Sprite),
        );

        assert!(project.place_tile(level_id, CellCoord::new(2, 2, 0), 3));
        let level = project.get_level(level_id).unwrap();
        assert_eq!(level.collider_shape(CellCoord::new(2, 2, 0)), ColliderShape::Sprite);
        assert_eq!(
            level.tile(CellCoord::new(2, 2, 0)),
            Some(TileRef::Tile(TileId::new(tileset_id, 3)))
        );
        assert!(project.dirty);
    }

    #[test]
    fn test_place_multi_cell_tile() {
        let (mut project, level_id, _) = project();
        project.tilesets[0].set_tile_properties(
            5,
            TileProperties::default()
                .with_grid_size(2, 2)
                .with_collider_shape(ColliderShape::Grid),
        );

        assert!(project.place_tile(level_id, CellCoord::new(0, 0, 0), 5));
        let level = project.get_level(level_id).unwrap();
        assert_eq!(level.tile(CellCoord::new(1, 1, 0)), Some(TileRef::Occupied));
        assert_eq!(level.collider_shape(CellCoord::new(1, 1, 0)), ColliderShape::Grid);

        // Does not fit at the edge
        assert!(!project.place_tile(level_id, CellCoord::new(7, 7, 0), 5));
    }

    #[test]
    fn test_overwriting_multi_cell_base_frees_covered_cells() {
        let (mut project, level_id, tileset_id) = project();
        project.tilesets[0].set_tile_properties(
            5,
            TileProperties::default()
                .with_grid_size(2, 2)
                .with_collider_shape(ColliderShape::Grid),
        );
        project.place_tile(level_id, CellCoord::new(0, 0, 0), 5);

        let base = CellCoord::new(0, 0, 0);
        let covered = CellCoord::new(1, 1, 0);
        assert!(project.place_tile(level_id, base, 1));

        let level = project.get_level(level_id).unwrap();
        assert_eq!(
            level.tile(base),
            Some(TileRef::Tile(TileId::new(tileset_id, 1)))
        );
        assert_eq!(level.tile(covered), None);
        assert_eq!(level.collider_shape(covered), ColliderShape::None);

        // The freed cell is empty, so painting it changes nothing
        let brush = ColliderBrush::new(BrushState {
            collider_shape: ColliderShape::Grid,
            modify_base_tile: false,
        });
        let mut target = project.brush_target(level_id);
        brush.paint(&mut target, covered);
        let level = project.get_level(level_id).unwrap();
        assert_eq!(level.collider_shape(covered), ColliderShape::None);
    }

    #[test]
    fn test_unclamped_grid_size_from_file() {
        let (mut project, level_id, _) = project();
        let zero = project.tilesets[0].get_tile_properties_mut(6);
        zero.grid_width = 0;
        zero.grid_height = 0;
        project.tilesets[0].get_tile_properties_mut(8).grid_width = u32::MAX;

        assert!(project.place_tile(level_id, CellCoord::new(7, 7, 0), 6));
        assert!(project.has_tile_at(level_id, CellCoord::new(7, 7, 0)));

        project.dirty = false;
        assert!(!project.place_tile(level_id, CellCoord::new(1, 1, 0), 8));
        assert!(!project.has_tile_at(level_id, CellCoord::new(1, 1, 0)));
        assert!(!project.dirty);
    }

    #[test]
    fn test_place_tile_rejects_bad_targets() {
        let (mut project, level_id, _) = project();
        assert!(!project.place_tile(Uuid::new_v4(), CellCoord::new(0, 0, 0), 1));
        assert!(!project.place_tile(level_id, CellCoord::new(-1, 0, 0), 1));
        assert!(!project.place_tile(level_id, CellCoord::new(0, 0, 4), 1));
        assert!(!project.dirty);
    }

    #[test]
    fn test_propagation_reaches_other_levels() {
        let (mut project, first, tileset_id) = project();
        let mut level = Level::new("Two".to_string(), 8, 8);
        level.add_layer(Layer::new_tile_layer("Ground".to_string(), tileset_id, 8, 8));
        let second = project.add_level(level);

        let painted = CellCoord::new(1, 1, 0);
        let placed_before = CellCoord::new(4, 4, 0);
        project.place_tile(first, painted, 2);
        project.place_tile(second, placed_before, 2);

        let brush = ColliderBrush::new(BrushState {
            collider_shape: ColliderShape::Grid,
            modify_base_tile: true,
        });
        let mut target = project.brush_target(first);
        brush.paint(&mut target, painted);

        assert!(project.has_unsaved_tilesets());
        // Existing instance in the other level keeps its own shape
        let other = project.get_level(second).unwrap();
        assert_eq!(other.collider_shape(placed_before), ColliderShape::None);

        // A new instance in the other level starts from the new default
        let placed_after = CellCoord::new(5, 5, 0);
        project.place_tile(second, placed_after, 2);
        let other = project.get_level(second).unwrap();
        assert_eq!(other.collider_shape(placed_after), ColliderShape::Grid);
    }

    #[test]
    fn test_unknown_level_target_has_no_map() {
        let (mut project, _, _) = project();
        let target = project.brush_target(Uuid::new_v4());
        assert!(target.map.is_none());
    }

    #[test]
    fn test_has_tile_at() {
        let (mut project, level_id, _) = project();
        project.place_tile(level_id, CellCoord::new(3, 3, 0), 0);
        assert!(project.has_tile_at(level_id, CellCoord::new(3, 3, 0)));
        assert!(!project.has_tile_at(level_id, CellCoord::new(3, 4, 0)));
        assert!(!project.has_tile_at(Uuid::new_v4(), CellCoord::new(3, 3, 0)));
    }

    #[test]
    fn test_default_name() {
        let project = Project::default();
        assert_eq!(project.name(), "Untitled");
    }
}

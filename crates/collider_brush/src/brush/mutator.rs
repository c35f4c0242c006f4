//! Single-cell collider write shared by paint and erase

use bevy::log::{debug, info};
use collider_brush_core::{CellCoord, ColliderShape, TileDefinitions, TileMap};

/// Set the collider shape of one cell, optionally writing it through to the
/// tile's shared definition.
///
/// Empty cells are left untouched. When `modify_base_tile` is set and the
/// occupying tile has a definition, the definition's default shape is updated
/// and marked changed before the cell itself is written. Every other
/// instance of that tile sees the new default immediately. The cell-local
/// shape is written whenever a tile is present.
pub fn set_collider(
    map: &mut dyn TileMap,
    definitions: &mut dyn TileDefinitions,
    cell: CellCoord,
    shape: ColliderShape,
    modify_base_tile: bool,
) {
    let Some(tile) = map.tile(cell) else {
        debug!("No tile at {:?}, collider unchanged", cell);
        return;
    };

    if modify_base_tile {
        match tile.definition() {
            Some(id) => {
                if definitions.set_default_collider_shape(id, shape) {
                    definitions.mark_changed(id);
                    info!(
                        "Base tile {} of tileset {} now defaults to {} collider",
                        id.index, id.tileset_id, shape
                    );
                } else {
                    debug!("Tileset {} not loaded, base tile left as is", id.tileset_id);
                }
            }
            None => debug!("Tile at {:?} has no editable definition", cell),
        }
    }

    map.set_collider_shape(cell, shape);
}

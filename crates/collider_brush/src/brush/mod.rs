//! Collider brush - paints collider shape modes onto tile cells
//!
//! The brush plugs into the editor's brush dispatch through [`GridBrush`]:
//! paint, erase and the hover overlay. All three are synchronous and finish
//! within the calling system.

mod mutator;

pub use mutator::set_collider;

use bevy::prelude::Resource;
use collider_brush_core::{CellCoord, ColliderShape, TileDefinitions, TileMap};
use serde::{Deserialize, Serialize};

use crate::overlay::{read_overlay, GridLayout, OverlayLabel};

/// Settings the operator configures for the collider brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrushState {
    /// Shape painted onto cells
    pub collider_shape: ColliderShape,
    /// Also write the shape to the tile's shared definition.
    /// Affects every tile placed from that definition afterwards.
    pub modify_base_tile: bool,
}

/// What a brush operation acts on: a map, if the target has one, and the
/// shared tile definitions it references
pub struct BrushTarget<'a> {
    pub map: Option<&'a mut dyn TileMap>,
    pub definitions: &'a mut dyn TileDefinitions,
}

impl<'a> BrushTarget<'a> {
    pub fn new(map: &'a mut dyn TileMap, definitions: &'a mut dyn TileDefinitions) -> Self {
        Self {
            map: Some(map),
            definitions,
        }
    }

    /// A target that exposes no map; every operation on it is a no-op
    pub fn without_map(definitions: &'a mut dyn TileDefinitions) -> Self {
        Self {
            map: None,
            definitions,
        }
    }
}

/// Extension points the editor's brush dispatch calls into
pub trait GridBrush {
    fn paint(&self, target: &mut BrushTarget<'_>, cell: CellCoord);

    fn erase(&self, target: &mut BrushTarget<'_>, cell: CellCoord);

    /// Label to draw for `cell`, or None when nothing should be drawn
    fn overlay(
        &self,
        target: &BrushTarget<'_>,
        layout: &dyn GridLayout,
        cell: CellCoord,
    ) -> Option<OverlayLabel>;
}

/// Brush that changes the collider shape of painted tiles
#[derive(Resource, Debug, Clone, Default)]
pub struct ColliderBrush {
    pub state: BrushState,
}

impl ColliderBrush {
    pub fn new(state: BrushState) -> Self {
        Self { state }
    }
}

impl GridBrush for ColliderBrush {
    /// Set the cell's collider shape to the selected shape
    fn paint(&self, target: &mut BrushTarget<'_>, cell: CellCoord) {
        if let Some(map) = target.map.as_deref_mut() {
            set_collider(
                map,
                &mut *target.definitions,
                cell,
                self.state.collider_shape,
                self.state.modify_base_tile,
            );
        }
    }

    /// Set the cell's collider shape to None
    fn erase(&self, target: &mut BrushTarget<'_>, cell: CellCoord) {
        if let Some(map) = target.map.as_deref_mut() {
            set_collider(
                map,
                &mut *target.definitions,
                cell,
                ColliderShape::None,
                self.state.modify_base_tile,
            );
        }
    }

    /// Show the collider shape currently stored on the hovered cell
    fn overlay(
        &self,
        target: &BrushTarget<'_>,
        layout: &dyn GridLayout,
        cell: CellCoord,
    ) -> Option<OverlayLabel> {
        read_overlay(target.map.as_deref(), layout, cell)
    }
}

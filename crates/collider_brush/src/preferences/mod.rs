//! Remembered collider brush settings
//!
//! Stored as JSON in the platform config directory so the brush starts with
//! the shape and base-tile mode the operator last saved.

mod file;

pub use file::*;

use bevy::prelude::Resource;
use collider_brush_core::ColliderShape;
use serde::{Deserialize, Serialize};

use crate::brush::BrushState;

/// Persisted brush defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct BrushPreferences {
    pub collider_shape: ColliderShape,
    pub modify_base_tile: bool,
    /// Show the collider shape label under the cursor
    pub show_overlay: bool,
}

impl Default for BrushPreferences {
    fn default() -> Self {
        Self {
            collider_shape: ColliderShape::None,
            modify_base_tile: false,
            show_overlay: true,
        }
    }
}

impl BrushPreferences {
    pub fn brush_state(&self) -> BrushState {
        BrushState {
            collider_shape: self.collider_shape,
            modify_base_tile: self.modify_base_tile,
        }
    }

    /// Remember the current brush settings
    pub fn update_from(&mut self, state: &BrushState, show_overlay: bool) {
        self.collider_shape = state.collider_shape;
        self.modify_base_tile = state.modify_base_tile;
        self.show_overlay = show_overlay;
    }
}

//! collider_brush - paints collider shape modes onto tile map cells
//!
//! The brush sets the collider shape (None, Grid or Sprite) of individual
//! cells. With "Modify Base Tile" enabled it also writes the shape to the
//! tile's shared definition, so every instance placed from that tile later
//! starts with it. While the brush is active the shape of the hovered cell
//! is shown as a label in the viewport.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use collider_brush::ColliderBrushPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(bevy_egui::EguiPlugin::default())
//!         .add_plugins(ColliderBrushPlugin::new().with_modify_base_tile(false))
//!         .run();
//! }
//! ```
//!
//! The host feeds cursor input through [`tools::BrushSession`].

pub mod brush;
pub mod overlay;
pub mod preferences;
pub mod project;
pub mod targets;
pub mod tools;
pub mod ui;

// Re-export core types
pub use collider_brush_core;
pub use collider_brush_core::{CellCoord, ColliderShape};

pub use brush::{set_collider, BrushState, BrushTarget, ColliderBrush, GridBrush};
pub use overlay::{ColliderOverlay, GridLayout, OverlayLabel, SquareGrid};
pub use preferences::BrushPreferences;
pub use project::Project;
pub use tools::{BrushAction, BrushSession, BrushTool};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin registering the collider brush, its dispatch and overlay systems
///
/// Settings not given here are taken from the saved [`BrushPreferences`].
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use collider_brush::{ColliderBrushPlugin, ColliderShape};
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         ColliderBrushPlugin::new()
///             .with_collider_shape(ColliderShape::Grid)
///             .with_overlay(true)
///     )
///     .run();
/// ```
#[derive(Debug, Clone)]
pub struct ColliderBrushPlugin {
    pub collider_shape: Option<ColliderShape>,
    pub modify_base_tile: Option<bool>,
    pub show_overlay: Option<bool>,
    /// Read saved preferences from the config directory
    pub use_preferences: bool,
}

impl Default for ColliderBrushPlugin {
    fn default() -> Self {
        Self {
            collider_shape: None,
            modify_base_tile: None,
            show_overlay: None,
            use_preferences: true,
        }
    }
}

impl ColliderBrushPlugin {
    /// Create a brush plugin with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shape the brush starts painting with
    pub fn with_collider_shape(mut self, shape: ColliderShape) -> Self {
        self.collider_shape = Some(shape);
        self
    }

    /// Set whether painting starts out writing to the tile definition
    pub fn with_modify_base_tile(mut self, modify: bool) -> Self {
        self.modify_base_tile = Some(modify);
        self
    }

    /// Set whether the hover label is shown
    pub fn with_overlay(mut self, show: bool) -> Self {
        self.show_overlay = Some(show);
        self
    }

    /// Set whether saved preferences are loaded (default: true)
    pub fn with_preferences(mut self, enabled: bool) -> Self {
        self.use_preferences = enabled;
        self
    }

    /// Combine saved preferences with the plugin's explicit settings
    fn resolve(&self, preferences: &BrushPreferences) -> (BrushState, bool) {
        let state = BrushState {
            collider_shape: self.collider_shape.unwrap_or(preferences.collider_shape),
            modify_base_tile: self.modify_base_tile.unwrap_or(preferences.modify_base_tile),
        };
        let show_overlay = self.show_overlay.unwrap_or(preferences.show_overlay);
        (state, show_overlay)
    }
}

impl Plugin for ColliderBrushPlugin {
    fn build(&self, app: &mut App) {
        let preferences = if self.use_preferences {
            BrushPreferences::load()
        } else {
            BrushPreferences::default()
        };
        let (state, show_overlay) = self.resolve(&preferences);
        info!(
            "ColliderBrushPlugin: painting {} (modify base tile: {})",
            state.collider_shape, state.modify_base_tile
        );

        app.insert_resource(ColliderBrush::new(state))
            .insert_resource(ColliderOverlay {
                enabled: show_overlay,
                label: None,
            })
            .insert_resource(preferences)
            .init_resource::<BrushSession>()
            .init_resource::<Project>()
            .add_systems(
                Update,
                (tools::process_brush_actions, overlay::sync_overlay_text).chain(),
            )
            .add_systems(EguiPrimaryContextPass, ui::render_brush_panel);
    }
}

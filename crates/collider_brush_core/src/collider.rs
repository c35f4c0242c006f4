//! Collider shape mode assigned to tile cells

use serde::{Deserialize, Serialize};

/// How the physics collider of a tile cell is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColliderShape {
    /// No collider
    #[default]
    None,
    /// Fixed shape taken from the grid cell geometry
    Grid,
    /// Shape derived from the tile sprite's outline
    Sprite,
}

impl ColliderShape {
    /// Every variant, in display order
    pub const ALL: [ColliderShape; 3] = [
        ColliderShape::None,
        ColliderShape::Grid,
        ColliderShape::Sprite,
    ];

    /// Short label shown in the viewport overlay and brush settings
    pub fn label(&self) -> &'static str {
        match self {
            ColliderShape::None => "None",
            ColliderShape::Grid => "Grid",
            ColliderShape::Sprite => "Sprite",
        }
    }
}

impl std::fmt::Display for ColliderShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

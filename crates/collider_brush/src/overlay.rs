//! Hover readout of the collider shape under the brush
//!
//! The readout always comes from the cell itself, never from the tile
//! definition, so it shows what a paint or erase earlier in the same frame
//! left behind.

use bevy::prelude::*;
use collider_brush_core::{CellCoord, ColliderShape, TileMap};

/// Depth added to the label so it draws above the tilemap
const LABEL_Z_OFFSET: f32 = 100.0;

/// Converts cell coordinates into world space
pub trait GridLayout {
    /// World position of the cell's origin corner
    fn cell_to_world(&self, cell: CellCoord) -> Vec3;
}

/// Square cells laid out from a world origin, one z unit per layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareGrid {
    pub cell_size: Vec2,
    pub origin: Vec3,
}

impl SquareGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: Vec2::splat(cell_size),
            origin: Vec3::ZERO,
        }
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }
}

impl GridLayout for SquareGrid {
    fn cell_to_world(&self, cell: CellCoord) -> Vec3 {
        self.origin
            + Vec3::new(
                cell.x as f32 * self.cell_size.x,
                cell.y as f32 * self.cell_size.y,
                cell.layer as f32,
            )
    }
}

/// Text label and where to draw it
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLabel {
    pub shape: ColliderShape,
    pub text: &'static str,
    pub world_position: Vec3,
}

/// Read the collider shape stored on `cell` and build its label.
///
/// Returns None when the target has no map. Cells outside the map read as None.
pub fn read_overlay(
    map: Option<&dyn TileMap>,
    layout: &dyn GridLayout,
    cell: CellCoord,
) -> Option<OverlayLabel> {
    let map = map?;
    let shape = map.collider_shape(cell);
    Some(OverlayLabel {
        shape,
        text: shape.label(),
        world_position: layout.cell_to_world(cell),
    })
}

/// Latest readout for the host to draw
#[derive(Resource, Debug, Clone)]
pub struct ColliderOverlay {
    pub enabled: bool,
    pub label: Option<OverlayLabel>,
}

impl Default for ColliderOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            label: None,
        }
    }
}

/// Marker for the text entity showing the readout
#[derive(Component)]
pub struct ColliderOverlayText;

/// Keep the overlay text entity in sync with the readout
pub(crate) fn sync_overlay_text(
    mut commands: Commands,
    overlay: Res<ColliderOverlay>,
    mut text_q: Query<(&mut Text2d, &mut Transform, &mut Visibility), With<ColliderOverlayText>>,
) {
    if !overlay.is_changed() {
        return;
    }

    let label = overlay.label.as_ref().filter(|_| overlay.enabled);

    if let Some((mut text, mut transform, mut visibility)) = text_q.iter_mut().next() {
        match label {
            Some(label) => {
                if text.0 != label.text {
                    text.0 = label.text.to_string();
                }
                transform.translation = label.world_position + Vec3::Z * LABEL_Z_OFFSET;
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
        return;
    }

    if let Some(label) = label {
        commands.spawn((
            ColliderOverlayText,
            Text2d::new(label.text),
            Transform::from_translation(label.world_position + Vec3::Z * LABEL_Z_OFFSET),
            Visibility::Visible,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collider_brush_core::{Layer, Level};
    use uuid::Uuid;

    fn level() -> Level {
        let mut level = Level::new("Test".to_string(), 4, 4);
        level.add_layer(Layer::new_tile_layer("Ground".to_string(), Uuid::new_v4(), 4, 4));
        level.set_tile_with_collider(0, 1, 2, Some(0), ColliderShape::Sprite);
        level
    }

    #[test]
    fn test_square_grid_cell_to_world() {
        let grid = SquareGrid::new(16.0).with_origin(Vec3::new(8.0, -8.0, 0.0));
        assert_eq!(
            grid.cell_to_world(CellCoord::new(2, 3, 1)),
            Vec3::new(40.0, 40.0, 1.0)
        );
        assert_eq!(
            grid.cell_to_world(CellCoord::new(-1, 0, 0)),
            Vec3::new(-8.0, -8.0, 0.0)
        );
    }

    #[test]
    fn test_readout_uses_cell_shape() {
        let level = level();
        let label = read_overlay(Some(&level), &SquareGrid::new(32.0), CellCoord::new(1, 2, 0))
            .unwrap();
        assert_eq!(label.shape, ColliderShape::Sprite);
        assert_eq!(label.text, "Sprite");
        assert_eq!(label.world_position, Vec3::new(32.0, 64.0, 0.0));
    }

    #[test]
    fn test_readout_out_of_bounds_reads_none() {
        let level = level();
        let label = read_overlay(Some(&level), &SquareGrid::new(32.0), CellCoord::new(40, -3, 0))
            .unwrap();
        assert_eq!(label.shape, ColliderShape::None);
        assert_eq!(label.text, "None");
    }

    #[test]
    fn test_readout_without_map() {
        assert!(read_overlay(None, &SquareGrid::new(32.0), CellCoord::new(1, 2, 0)).is_none());
    }

    #[test]
    fn test_overlay_text_follows_readout() {
        let mut app = App::new();
        app.init_resource::<ColliderOverlay>()
            .add_systems(Update, sync_overlay_text);

        app.world_mut().resource_mut::<ColliderOverlay>().label = Some(OverlayLabel {
            shape: ColliderShape::Grid,
            text: "Grid",
            world_position: Vec3::new(16.0, 0.0, 0.0),
        });
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<(&Text2d, &Visibility), With<ColliderOverlayText>>();
        let (text, visibility) = query.single(app.world()).unwrap();
        assert_eq!(text.0, "Grid");
        assert_eq!(*visibility, Visibility::Visible);

        app.world_mut().resource_mut::<ColliderOverlay>().enabled = false;
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<&Visibility, With<ColliderOverlayText>>();
        assert_eq!(*query.single(app.world()).unwrap(), Visibility::Hidden);
    }
}

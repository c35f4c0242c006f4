//! Levels the collider brush can paint on

use uuid::Uuid;

use crate::project::Project;

/// Every level in the project that has at least one tile layer.
///
/// Computed fresh on each call; levels come and go while editing.
pub fn valid_targets(project: &Project) -> Vec<Uuid> {
    project
        .levels
        .iter()
        .filter(|level| level.has_tile_layers())
        .map(|level| level.id)
        .collect()
}

/// Whether `level_id` is currently a valid brush target
pub fn is_valid_target(project: &Project, level_id: Uuid) -> bool {
    project
        .get_level(level_id)
        .is_some_and(|level| level.has_tile_layers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use collider_brush_core::{Layer, Level};

    #[test]
    fn test_only_levels_with_tile_layers() {
        let mut project = Project::default();

        let mut tiles = Level::new("Tiles".to_string(), 4, 4);
        tiles.add_layer(Layer::new_tile_layer("Ground".to_string(), Uuid::new_v4(), 4, 4));
        let tiles_id = project.add_level(tiles);

        let mut objects = Level::new("Objects".to_string(), 4, 4);
        objects.add_layer(Layer::new_object_layer("Entities".to_string()));
        let objects_id = project.add_level(objects);

        let empty_id = project.add_level(Level::new("Empty".to_string(), 4, 4));

        assert_eq!(valid_targets(&project), vec![tiles_id]);
        assert!(is_valid_target(&project, tiles_id));
        assert!(!is_valid_target(&project, objects_id));
        assert!(!is_valid_target(&project, empty_id));
        assert!(!is_valid_target(&project, Uuid::new_v4()));
    }

    #[test]
    fn test_reflects_current_project() {
        let mut project = Project::default();
        assert!(valid_targets(&project).is_empty());

        let mut level = Level::new("Later".to_string(), 2, 2);
        level.add_layer(Layer::new_tile_layer("Ground".to_string(), Uuid::new_v4(), 2, 2));
        let id = project.add_level(level);
        assert_eq!(valid_targets(&project), vec![id]);

        project.levels.clear();
        assert!(valid_targets(&project).is_empty());
    }
}

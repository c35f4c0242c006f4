//! Project file save/load operations

use super::Project;
use std::path::Path;

#[derive(Debug)]
pub enum ProjectError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    NoPath,
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectError::IoError(e) => write!(f, "IO error: {}", e),
            ProjectError::ParseError(e) => write!(f, "Parse error: {}", e),
            ProjectError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ProjectError::NoPath => write!(f, "No file path set"),
        }
    }
}

impl std::error::Error for ProjectError {}

impl Project {
    /// Load project from file
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ProjectError::IoError(e.to_string()))?;

        let mut project: Project =
            serde_json::from_str(&content).map_err(|e| ProjectError::ParseError(e.to_string()))?;

        project.path = Some(path.to_path_buf());
        bevy::log::info!(
            "Loaded project {:?}: {} levels, {} tilesets",
            path,
            project.levels.len(),
            project.tilesets.len()
        );

        Ok(project)
    }

    /// Save project to file. Changed tile definitions are written with it.
    pub fn save(&mut self, path: &Path) -> Result<(), ProjectError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ProjectError::SerializeError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ProjectError::IoError(e.to_string()))?;

        self.path = Some(path.to_path_buf());
        self.dirty = false;
        for tileset in &mut self.tilesets {
            tileset.dirty = false;
        }

        Ok(())
    }

    /// Save to current path if set
    pub fn save_current(&mut self) -> Result<(), ProjectError> {
        if let Some(path) = self.path.clone() {
            self.save(&path)
        } else {
            Err(ProjectError::NoPath)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collider_brush_core::{CellCoord, ColliderShape, Layer, Level, TileMap, Tileset};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}_{}.json", name, uuid::Uuid::new_v4().simple()))
    }

    #[test]
    fn test_save_and_load() {
        let mut project = Project::default();
        let tileset_id = project.add_tileset(Tileset::new("Terrain".to_string(), 16));
        let mut level = Level::new("One".to_string(), 4, 4);
        level.add_layer(Layer::new_tile_layer("Ground".to_string(), tileset_id, 4, 4));
        let level_id = project.add_level(level);
        project.place_tile(level_id, CellCoord::new(1, 1, 0), 2);
        project.levels[0].set_collider_shape(CellCoord::new(1, 1, 0), ColliderShape::Sprite);
        project.tilesets[0].get_tile_properties_mut(2).collider_shape = ColliderShape::Grid;
        project.tilesets[0].mark_dirty();

        let path = temp_path("collider_brush_project");
        project.save(&path).unwrap();
        assert!(!project.dirty);
        assert!(!project.has_unsaved_tilesets());

        let loaded = Project::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
        let level = loaded.get_level(level_id).unwrap();
        assert_eq!(level.collider_shape(CellCoord::new(1, 1, 0)), ColliderShape::Sprite);
        assert_eq!(
            loaded.get_tileset(tileset_id).unwrap().collider_shape(2),
            ColliderShape::Grid
        );
    }

    #[test]
    fn test_save_current_without_path() {
        let mut project = Project::default();
        assert!(matches!(project.save_current(), Err(ProjectError::NoPath)));
    }

    #[test]
    fn test_load_errors() {
        let missing = temp_path("collider_brush_missing");
        assert!(matches!(Project::load(&missing), Err(ProjectError::IoError(_))));

        let garbage = temp_path("collider_brush_garbage");
        std::fs::write(&garbage, "not json").unwrap();
        let result = Project::load(&garbage);
        let _ = std::fs::remove_file(&garbage);
        assert!(matches!(result, Err(ProjectError::ParseError(_))));
    }
}

//! Brush dispatch - applies queued paint/erase/hover actions to the project
//!
//! Input handling lives in the host editor. It resolves the cell under the
//! cursor and queues actions on [`BrushSession`]; [`process_brush_actions`]
//! applies them in order and refreshes the overlay readout.

use bevy::prelude::*;
use collider_brush_core::CellCoord;
use uuid::Uuid;

use crate::brush::{ColliderBrush, GridBrush};
use crate::overlay::{ColliderOverlay, SquareGrid};
use crate::project::Project;
use crate::targets::is_valid_target;

/// Cell size used when the layer's tileset cannot be found
const DEFAULT_TILE_SIZE: f32 = 32.0;

/// What the operator is doing with the brush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushTool {
    Paint,
    Erase,
    /// Cursor moved without painting; only the readout updates
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushAction {
    pub tool: BrushTool,
    pub cell: CellCoord,
}

/// Brush interaction state for the active target
#[derive(Resource, Debug, Default)]
pub struct BrushSession {
    /// Level being painted
    target: Option<Uuid>,
    /// Actions queued since the last dispatch
    pending: Vec<BrushAction>,
    /// Last paint/erase applied in the current stroke
    last_applied: Option<BrushAction>,
}

impl BrushSession {
    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    /// Switch the brush to another level. Ends the current stroke.
    pub fn set_target(&mut self, target: Option<Uuid>) {
        if self.target != target {
            self.target = target;
            self.pending.clear();
            self.last_applied = None;
        }
    }

    pub fn paint(&mut self, cell: CellCoord) {
        self.push(BrushTool::Paint, cell);
    }

    pub fn erase(&mut self, cell: CellCoord) {
        self.push(BrushTool::Erase, cell);
    }

    pub fn hover(&mut self, cell: CellCoord) {
        self.push(BrushTool::Hover, cell);
    }

    pub fn push(&mut self, tool: BrushTool, cell: CellCoord) {
        self.pending.push(BrushAction { tool, cell });
    }

    /// Call when the mouse button is released
    pub fn end_stroke(&mut self) {
        self.last_applied = None;
    }

    pub fn pending(&self) -> &[BrushAction] {
        &self.pending
    }
}

/// Apply one paint/erase action to a level of the project.
///
/// Returns true if a tile was under the cell; the project is then marked dirty.
pub fn apply_brush_action(
    brush: &dyn GridBrush,
    project: &mut Project,
    level_id: Uuid,
    action: BrushAction,
) -> bool {
    if action.tool == BrushTool::Hover {
        return false;
    }

    let hit = project.has_tile_at(level_id, action.cell);
    let mut target = project.brush_target(level_id);
    match action.tool {
        BrushTool::Paint => brush.paint(&mut target, action.cell),
        BrushTool::Erase => brush.erase(&mut target, action.cell),
        BrushTool::Hover => {}
    }

    if hit {
        project.mark_dirty();
    }
    hit
}

/// Grid layout of a layer, sized from its tileset
pub fn layer_grid(project: &Project, level_id: Uuid, layer: usize) -> SquareGrid {
    let tile_size = project
        .get_level(level_id)
        .and_then(|level| level.get_layer(layer))
        .and_then(|layer| layer.tileset_id())
        .and_then(|id| project.get_tileset(id))
        .map(|tileset| tileset.tile_size as f32)
        .unwrap_or(DEFAULT_TILE_SIZE);
    SquareGrid::new(tile_size)
}

/// System applying queued brush actions, then reading back the last cell
pub fn process_brush_actions(
    brush: Res<ColliderBrush>,
    mut session: ResMut<BrushSession>,
    mut project: ResMut<Project>,
    mut overlay: ResMut<ColliderOverlay>,
) {
    if session.pending.is_empty() {
        return;
    }
    let actions = std::mem::take(&mut session.pending);

    let Some(level_id) = session
        .target
        .filter(|id| is_valid_target(&project, *id))
    else {
        if overlay.label.is_some() {
            overlay.label = None;
        }
        return;
    };

    let mut applied = 0;
    for action in &actions {
        if action.tool == BrushTool::Hover {
            continue;
        }
        // Dragging over the same cell repeats the action; skip it
        if session.last_applied == Some(*action) {
            continue;
        }
        session.last_applied = Some(*action);
        if apply_brush_action(&*brush, &mut project, level_id, *action) {
            applied += 1;
        }
    }
    if applied > 0 {
        debug!("Collider brush changed {} cells", applied);
    }

    if let Some(last) = actions.last() {
        let layout = layer_grid(&project, level_id, last.cell.layer);
        let target = project.bypass_change_detection().brush_target(level_id);
        overlay.label = brush.overlay(&target, &layout, last.cell);
    }
}

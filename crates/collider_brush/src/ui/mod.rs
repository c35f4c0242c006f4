//! egui panel for the collider brush settings

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use collider_brush_core::ColliderShape;

use crate::brush::{BrushState, ColliderBrush};
use crate::overlay::ColliderOverlay;
use crate::preferences::BrushPreferences;
use crate::project::Project;
use crate::targets::valid_targets;
use crate::tools::BrushSession;

/// Render the brush settings. Returns true if anything changed.
pub fn render_collider_brush_settings(ui: &mut egui::Ui, state: &mut BrushState) -> bool {
    let mut changed = false;

    ui.label("Collider Shape:");
    ui.horizontal(|ui| {
        for shape in ColliderShape::ALL {
            changed |= ui
                .selectable_value(&mut state.collider_shape, shape, shape.label())
                .changed();
        }
    });

    changed |= ui
        .checkbox(&mut state.modify_base_tile, "Modify Base Tile")
        .on_hover_text("Also set the collider shape on the tile definition")
        .changed();

    if state.modify_base_tile {
        ui.colored_label(
            egui::Color32::YELLOW,
            "Changes every tile placed from the painted tile's definition",
        );
    }

    changed
}

/// Render a picker over the levels the brush can paint on
pub fn render_target_picker(ui: &mut egui::Ui, project: &Project, session: &mut BrushSession) {
    let targets = valid_targets(project);
    let current = session
        .target()
        .and_then(|id| project.get_level(id))
        .map(|level| level.name.as_str())
        .unwrap_or("(none)");

    let mut selected = session.target();
    egui::ComboBox::from_label("Target")
        .selected_text(current)
        .show_ui(ui, |ui| {
            for id in targets {
                if let Some(level) = project.get_level(id) {
                    ui.selectable_value(&mut selected, Some(id), level.name.as_str());
                }
            }
        });
    session.set_target(selected);
}

/// System drawing the collider brush window
pub(crate) fn render_brush_panel(
    mut contexts: EguiContexts,
    mut brush: ResMut<ColliderBrush>,
    mut session: ResMut<BrushSession>,
    mut overlay: ResMut<ColliderOverlay>,
    mut preferences: ResMut<BrushPreferences>,
    project: Res<Project>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    egui::Window::new("Collider Brush")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.label(format!("Project: {}", project.name()));
            render_target_picker(ui, &project, &mut session);
            ui.separator();

            render_collider_brush_settings(ui, &mut brush.state);

            let mut show_overlay = overlay.enabled;
            if ui.checkbox(&mut show_overlay, "Show Collider Label").changed() {
                overlay.enabled = show_overlay;
            }

            ui.separator();
            if ui.button("Save as Default").clicked() {
                preferences.update_from(&brush.state, overlay.enabled);
                if let Err(e) = preferences.save() {
                    error!("Failed to save brush preferences: {}", e);
                }
            }
        });
}

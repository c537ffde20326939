//! Handler für Bearbeitungs-Actions (Eigenschaften, Attribute, Löschen).

use crate::app::state::Mode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{AttributePatch, GeometryEngine, ProjectProperties, PropertyMap};
use std::sync::Arc;

/// Setzt Eigenschaften auf allen selektierten Elementen.
pub fn set_properties(engine: &dyn GeometryEngine, state: &mut AppState, properties: &PropertyMap) {
    let scene = use_cases::batch::set_properties(engine, &state.scene, properties);
    state.commit(scene);
    state.mode = Mode::Idle;
}

/// Setzt Attribute auf den selektierten Elementen einer Art.
pub fn set_attributes(
    engine: &dyn GeometryEngine,
    state: &mut AppState,
    attributes: &AttributePatch,
) {
    let scene = use_cases::batch::set_attributes(engine, &state.scene, attributes, &state.catalog);
    state.commit(scene);
    state.mode = Mode::Idle;
}

/// Löscht die selektierten Lines, Holes und Items (ein History-Eintrag).
pub fn remove(engine: &dyn GeometryEngine, state: &mut AppState) {
    let scene = use_cases::removal::remove_selected(engine, &state.scene, &state.catalog);
    state.commit(scene);
    state.mode = Mode::Idle;
}

/// Übernimmt Projekt-Eigenschaften direkt in die Szene.
pub fn set_project_properties(state: &mut AppState, properties: &ProjectProperties) {
    let mut scene = Arc::clone(&state.scene);
    Arc::make_mut(&mut scene).apply_project_properties(properties);
    state.commit(scene);
    state.mode = Mode::Idle;
    log::info!(
        "Projekt-Eigenschaften gesetzt: {} x {} {}",
        state.scene.width,
        state.scene.height,
        state.scene.unit
    );
}

//! Handler für Selektions-Actions.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeometryEngine;

/// Hebt die gesamte Selektion auf und committet die Szene.
pub fn unselect_all(engine: &dyn GeometryEngine, state: &mut AppState) {
    let before = state.selected_count();
    let scene = use_cases::selection::unselect_all(engine, &state.scene);
    state.commit(scene);
    log::debug!("Selektion aufgehoben ({} Elemente)", before);
}

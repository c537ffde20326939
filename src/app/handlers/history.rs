//! Handler für Undo und Rollback.

use crate::app::state::{InteractionState, Mode};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeometryEngine;

/// Führt einen Undo-Schritt im eingestellten Rhythmus aus.
pub fn undo(state: &mut AppState) {
    let cadence = state.options.undo_cadence;
    if let Some(scene) = state.history.undo_step(&state.scene, cadence) {
        state.scene = scene;
        state.mode = Mode::Idle;
        log::info!("Undo ausgeführt ({} Snapshots)", state.history.len());
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Committet den jüngsten Snapshot ohne Selektion erneut und verwirft
/// alle Werkzeug-Zwischenstände.
pub fn rollback(engine: &dyn GeometryEngine, state: &mut AppState) {
    let Some(last) = state.history.last() else {
        log::debug!("Rollback: History leer");
        return;
    };
    let scene = use_cases::selection::unselect_all(engine, last);
    state.commit(scene);
    state.mode = Mode::Idle;
    state.interaction = InteractionState::new();
    log::debug!("Rollback ausgeführt ({} Snapshots)", state.history.len());
}

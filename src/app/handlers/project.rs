//! Handler für den Projekt-Lebenszyklus und Moduswechsel.

use super::history;
use crate::app::state::Mode;
use crate::app::AppState;
use crate::core::{Catalog, CatalogData, GeometryEngine, Scene};

/// Ersetzt den State durch ein leeres Projekt. Optionen bleiben erhalten.
pub fn new_project(state: &mut AppState) {
    *state = AppState::with_options(state.options.clone());
    log::info!("Neues Projekt angelegt");
}

/// Ersetzt den State durch die geladene Szene.
/// Der Katalog wird als reine Daten übernommen, die History beginnt neu.
pub fn load_project(state: &mut AppState, scene: &Scene) {
    let catalog = Catalog::from_data(state.catalog.to_data());
    *state = AppState::from_scene(scene.clone(), catalog, state.options.clone());
    log::info!(
        "Projekt geladen: {} Layer, {} Gruppen",
        state.scene.layers.len(),
        state.scene.groups.len()
    );
}

/// Rollback, danach Katalog-Ansicht.
pub fn open_catalog(engine: &dyn GeometryEngine, state: &mut AppState) {
    history::rollback(engine, state);
    state.mode = Mode::ViewingCatalog;
}

/// Wechselt in den Bearbeitungsmodus-Ausgangszustand.
pub fn select_tool_edit(state: &mut AppState) {
    state.mode = Mode::Idle;
}

/// Öffnet den Projekt-Konfigurator.
pub fn open_project_configurator(state: &mut AppState) {
    state.mode = Mode::ConfiguringProject;
}

/// Ersetzt den Katalog. Szene und History bleiben unverändert.
pub fn init_catalog(state: &mut AppState, data: &CatalogData) {
    state.catalog = Catalog::from_data(data.clone());
    log::info!("Katalog initialisiert: {} Elemente", state.catalog.len());
}

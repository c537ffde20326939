//! Application Controller für zentrale Action-Verarbeitung.

use super::handlers;
use super::{AppState, CommandLog, ProjectAction};
use crate::core::{AttributePatch, GeometryEngine, PlanGeometry};

/// Reine Transition: liefert den Folge-State zu `state` und `action`.
///
/// `state` selbst wird nie verändert; der Folge-State teilt alle
/// unveränderten Teile (Szene, Layer, Elemente, Katalog) mit ihm.
pub fn transition(
    engine: &dyn GeometryEngine,
    state: &AppState,
    action: &ProjectAction,
) -> AppState {
    let mut next = state.clone();

    match action {
        // === Projekt ===
        ProjectAction::NewProject => handlers::project::new_project(&mut next),
        ProjectAction::LoadProject { scene } => handlers::project::load_project(&mut next, scene),
        ProjectAction::InitCatalog { catalog } => handlers::project::init_catalog(&mut next, catalog),

        // === Modus ===
        ProjectAction::OpenCatalog => handlers::project::open_catalog(engine, &mut next),
        ProjectAction::SelectToolEdit => handlers::project::select_tool_edit(&mut next),
        ProjectAction::OpenProjectConfigurator => {
            handlers::project::open_project_configurator(&mut next)
        }

        // === Selektion ===
        ProjectAction::UnselectAll => handlers::selection::unselect_all(engine, &mut next),

        // === Bearbeitung ===
        ProjectAction::SetProperties { properties } => {
            handlers::editing::set_properties(engine, &mut next, properties)
        }
        ProjectAction::SetItemsAttributes { attributes } => handlers::editing::set_attributes(
            engine,
            &mut next,
            &AttributePatch::Items(attributes.clone()),
        ),
        ProjectAction::SetLinesAttributes { attributes } => handlers::editing::set_attributes(
            engine,
            &mut next,
            &AttributePatch::Lines(attributes.clone()),
        ),
        ProjectAction::SetHolesAttributes { attributes } => handlers::editing::set_attributes(
            engine,
            &mut next,
            &AttributePatch::Holes(attributes.clone()),
        ),
        ProjectAction::Remove => handlers::editing::remove(engine, &mut next),
        ProjectAction::SetProjectProperties { properties } => {
            handlers::editing::set_project_properties(&mut next, properties)
        }

        // === History ===
        ProjectAction::Undo => handlers::history::undo(&mut next),
        ProjectAction::Rollback => handlers::history::rollback(engine, &mut next),

        ProjectAction::Unrecognized => {
            log::debug!("Unbekannte Action ignoriert");
        }
    }

    next
}

/// Orchestriert Actions auf den AppState.
pub struct AppController {
    engine: Box<dyn GeometryEngine>,
    command_log: CommandLog,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller mit der mitgelieferten Geometrie-Engine.
    pub fn new() -> Self {
        Self::with_engine(PlanGeometry::new())
    }

    /// Erstellt einen Controller mit eigener Geometrie-Engine.
    pub fn with_engine(engine: impl GeometryEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            command_log: CommandLog::new(),
        }
    }

    /// Verarbeitet eine Action und liefert den Folge-State.
    pub fn handle_action(&mut self, state: &AppState, action: ProjectAction) -> AppState {
        self.command_log.record(&action);
        let next = transition(self.engine.as_ref(), state, &action);
        log::debug!(
            "{}: Modus {:?}, {} Snapshots",
            action.name(),
            next.mode,
            next.history_len()
        );
        next
    }

    /// Parst eine JSON-Action und verarbeitet sie.
    pub fn dispatch_json(&mut self, state: &AppState, json: &str) -> anyhow::Result<AppState> {
        let action = ProjectAction::from_json(json)?;
        Ok(self.handle_action(state, action))
    }

    /// Bisher verarbeitete Actions.
    pub fn command_log(&self) -> &CommandLog {
        &self.command_log
    }
}

use floorplan_editor::{
    AppController, AppState, CatalogData, EditorOptions, Mode, ProjectAction, Scene,
    SceneHistory, UndoCadence,
};
use serde_json::json;
use std::sync::Arc;

fn two_rooms() -> Scene {
    Scene::from_json(include_str!("fixtures/two_rooms.json")).expect("Fixture sollte gültig sein")
}

fn loaded_state(controller: &mut AppController) -> AppState {
    controller.handle_action(
        &AppState::new(),
        ProjectAction::LoadProject {
            scene: Box::new(two_rooms()),
        },
    )
}

fn sample_catalog() -> CatalogData {
    CatalogData::from_json(
        r#"{
            "elements": {
                "wall": { "name": "wall", "prototype": "line" },
                "door": {
                    "name": "door",
                    "prototype": "hole",
                    "properties": { "width": { "default": 80, "min": 40, "max": 200 } }
                },
                "room": { "name": "room", "prototype": "area" }
            }
        }"#,
    )
    .expect("Katalog sollte gültig sein")
}

#[test]
fn test_unrecognized_action_returns_equal_state() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);

    let next = controller
        .dispatch_json(&state, r#"{"type":"ZOOM_IN","factor":2}"#)
        .expect("Unbekannte Actions sind kein Fehler");

    assert_eq!(next, state);
    assert!(Arc::ptr_eq(&next.scene, &state.scene));
}

#[test]
fn test_dispatch_json_rejects_ill_typed_payload() {
    let mut controller = AppController::new();
    let state = AppState::new();

    let result = controller.dispatch_json(
        &state,
        r#"{"type":"SET_PROJECT_PROPERTIES","properties":{"width":"breit"}}"#,
    );

    assert!(result.is_err());
    assert!(controller.command_log().is_empty());
}

#[test]
fn test_command_log_records_each_action() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for json in [
        r#"{"type":"OPEN_PROJECT_CONFIGURATOR"}"#,
        r#"{"type":"SELECT_TOOL_EDIT"}"#,
        r#"{"type":"UNDO"}"#,
    ] {
        state = controller.dispatch_json(&state, json).expect("gültige Action");
    }

    let names: Vec<&str> = controller
        .command_log()
        .entries()
        .iter()
        .map(ProjectAction::name)
        .collect();
    assert_eq!(names, vec!["OPEN_PROJECT_CONFIGURATOR", "SELECT_TOOL_EDIT", "UNDO"]);
}

#[test]
fn test_mode_transitions_do_not_touch_scene() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);

    let configuring = controller.handle_action(&state, ProjectAction::OpenProjectConfigurator);
    assert_eq!(configuring.mode, Mode::ConfiguringProject);
    assert!(Arc::ptr_eq(&configuring.scene, &state.scene));
    assert_eq!(configuring.history, state.history);

    let idle = controller.handle_action(&configuring, ProjectAction::SelectToolEdit);
    assert_eq!(idle.mode, Mode::Idle);
    assert!(Arc::ptr_eq(&idle.scene, &state.scene));
}

#[test]
fn test_open_catalog_rolls_back_before_showing_catalog() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    state
        .interaction
        .dragging_support
        .insert("start".into(), json!([10, 20]));
    assert_eq!(state.selected_count(), 4);

    let next = controller.handle_action(&state, ProjectAction::OpenCatalog);

    assert_eq!(next.mode, Mode::ViewingCatalog);
    assert_eq!(next.selected_count(), 0);
    assert_eq!(next.history_len(), state.history_len() + 1);
    assert!(next.is_committed());
    assert!(next.interaction.is_clear());
}

#[test]
fn test_open_catalog_on_empty_history_only_switches_mode() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    state.history = SceneHistory::new();

    let next = controller.handle_action(&state, ProjectAction::OpenCatalog);

    assert_eq!(next.mode, Mode::ViewingCatalog);
    assert_eq!(next.history, state.history);
    assert_eq!(next.history_len(), 0);
    assert!(Arc::ptr_eq(&next.scene, &state.scene));
    // Ohne Snapshot kein Rollback: die Selektion bleibt stehen
    assert_eq!(next.selected_count(), 4);
}

#[test]
fn test_new_project_resets_everything_but_options() {
    let mut controller = AppController::new();
    let options = EditorOptions {
        undo_cadence: UndoCadence::SingleStep,
        history_limit: Some(20),
    };
    let mut state = AppState::with_options(options.clone());
    state = controller.handle_action(
        &state,
        ProjectAction::InitCatalog {
            catalog: sample_catalog(),
        },
    );
    state = controller.handle_action(
        &state,
        ProjectAction::LoadProject {
            scene: Box::new(two_rooms()),
        },
    );
    state = controller.handle_action(&state, ProjectAction::OpenProjectConfigurator);

    let fresh = controller.handle_action(&state, ProjectAction::NewProject);

    assert_eq!(fresh.mode, Mode::Idle);
    assert_eq!(*fresh.scene, Scene::new());
    assert_eq!(fresh.history_len(), 1);
    assert!(fresh.is_committed());
    assert!(fresh.catalog.is_empty());
    assert_eq!(fresh.options, options);
}

#[test]
fn test_load_project_keeps_catalog_and_seeds_history() {
    let mut controller = AppController::new();
    let mut state = controller.handle_action(
        &AppState::new(),
        ProjectAction::InitCatalog {
            catalog: sample_catalog(),
        },
    );
    state = controller.handle_action(&state, ProjectAction::UnselectAll);
    assert_eq!(state.history_len(), 2);

    let loaded = controller.handle_action(
        &state,
        ProjectAction::LoadProject {
            scene: Box::new(two_rooms()),
        },
    );

    assert_eq!(loaded.catalog, state.catalog);
    assert_eq!(loaded.catalog.len(), 3);
    assert_eq!(loaded.history_len(), 1);
    assert!(loaded.is_committed());
    assert_eq!(loaded.scene.layers.len(), 2);
    assert_eq!(loaded.mode, Mode::Idle);
}

#[test]
fn test_load_project_from_json_action() {
    let mut controller = AppController::new();
    let scene_json: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/two_rooms.json")).unwrap();
    let action = json!({ "type": "LOAD_PROJECT", "sceneJSON": scene_json }).to_string();

    let state = controller
        .dispatch_json(&AppState::new(), &action)
        .expect("LOAD_PROJECT sollte parsen");

    assert_eq!(*state.scene, two_rooms());
}

#[test]
fn test_init_catalog_leaves_scene_and_history() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);

    let next = controller.handle_action(
        &state,
        ProjectAction::InitCatalog {
            catalog: sample_catalog(),
        },
    );

    assert!(Arc::ptr_eq(&next.scene, &state.scene));
    assert_eq!(next.history, state.history);
    assert!(next.catalog.element("door").is_some());
}

#[test]
fn test_transition_does_not_modify_input_state() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);
    let before = state.clone();

    for action in [
        ProjectAction::Remove,
        ProjectAction::UnselectAll,
        ProjectAction::Rollback,
        ProjectAction::Undo,
    ] {
        let _ = controller.handle_action(&state, action);
    }

    assert_eq!(state, before);
    assert_eq!(state.selected_count(), 4);
}

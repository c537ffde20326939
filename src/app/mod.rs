//! Application-Layer: Controller, State, Actions, History und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szene, History, Katalog, Modus).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::{transition, AppController};
pub use events::ProjectAction;
pub use history::SceneHistory;
pub use state::{AppState, InteractionState, Mode, SnapElement};

//! Grundriss-Editor-Kern als Library.
//! Reducer, History und Geometrie-Engine exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    transition, AppController, AppState, CommandLog, InteractionState, Mode, ProjectAction,
    SceneHistory,
};
pub use core::{
    AttributePatch, Catalog, CatalogData, GeometryEngine, Layer, PlanGeometry, ProjectProperties,
    PropertyMap, Scene,
};
pub use shared::{EditorOptions, UndoCadence};

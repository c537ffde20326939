//! Core-Domänentypen: Szene, Layer, Elemente, Katalog und Geometrie-Engine.

pub mod attributes;
pub mod catalog;
/// Elemente des Grundrisses
///
/// - Vertex: Eckpunkt im Liniengraphen
/// - Line: Wand zwischen zwei Vertices
/// - Hole: Öffnung in einer Wand
/// - Item: frei platzierter Gegenstand
/// - Area: abgeleitete Fläche
pub mod element;
pub mod geometry;
pub mod layer;
pub mod scene;

pub use attributes::{AttributePatch, HoleAttributes, ItemAttributes, LineAttributes};
pub use catalog::{Catalog, CatalogData, CatalogElement, CatalogInfo, PropertyInfo};
pub use element::{
    Area, ElementId, ElementKind, ElementRef, GroupId, Hole, Item, LayerId, Line, PropertyMap,
    Selectable, Vertex,
};
pub use geometry::{GeometryEngine, PlanGeometry, DEFAULT_AREA_TYPE};
pub use layer::{Elements, Layer, SelectedIds};
pub use scene::{Group, ProjectProperties, Scene, DEFAULT_LAYER_ID};

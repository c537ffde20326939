//! Elemente eines Grundrisses: Vertices, Wände (Lines), Öffnungen (Holes),
//! Einrichtungsgegenstände (Items) und abgeleitete Flächen (Areas).

use glam::DVec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// ID eines Layers
pub type LayerId = String;
/// ID eines Elements (Vertex, Line, Hole, Item, Area)
pub type ElementId = String;
/// ID einer Gruppe
pub type GroupId = String;

/// Frei belegbare Eigenschaften (Farbe, Höhe, Material, …).
/// Der Kern interpretiert die Werte nicht.
pub type PropertyMap = IndexMap<String, serde_json::Value>;

/// Art eines Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Wand bzw. Linie zwischen zwei Vertices
    Line,
    /// Öffnung in einer Wand (Tür, Fenster)
    Hole,
    /// Frei platzierter Gegenstand
    Item,
    /// Aus dem Liniengraphen abgeleitete Fläche
    Area,
}

/// Eckpunkt im Liniengraphen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: ElementId,
    /// Position in Szenen-Einheiten
    pub position: DVec2,
    /// Lines, die an diesem Vertex enden
    #[serde(default)]
    pub lines: Vec<ElementId>,
    /// Areas, deren Rand diesen Vertex enthält
    #[serde(default)]
    pub areas: Vec<ElementId>,
    #[serde(default)]
    pub selected: bool,
}

impl Vertex {
    /// Erstellt einen unverbundenen Vertex.
    pub fn new(id: impl Into<ElementId>, position: DVec2) -> Self {
        Self {
            id: id.into(),
            position,
            lines: Vec::new(),
            areas: Vec::new(),
            selected: false,
        }
    }
}

/// Wand zwischen zwei Vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: ElementId,
    /// Katalog-Typ (z.B. `wall`)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    /// Genau zwei Vertex-IDs: Start und Ende
    pub vertices: Vec<ElementId>,
    /// Holes, die in dieser Wand sitzen
    #[serde(default)]
    pub holes: Vec<ElementId>,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub selected: bool,
}

impl Line {
    /// Erstellt eine Wand zwischen `v1` und `v2`.
    pub fn new(
        id: impl Into<ElementId>,
        kind: impl Into<String>,
        v1: impl Into<ElementId>,
        v2: impl Into<ElementId>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: String::new(),
            vertices: vec![v1.into(), v2.into()],
            holes: Vec::new(),
            properties: PropertyMap::new(),
            selected: false,
        }
    }

    /// Liefert Start- und End-Vertex, falls die Line korrekt zwei Enden hat.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        match self.vertices.as_slice() {
            [a, b] => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}

/// Öffnung in einer Wand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    /// Trägerwand
    pub line: ElementId,
    /// Relative Position des Mittelpunkts auf der Wand (0.0 = Start, 1.0 = Ende)
    pub offset: f64,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub selected: bool,
}

impl Hole {
    /// Erstellt eine Öffnung auf `line` an der relativen Position `offset`.
    pub fn new(
        id: impl Into<ElementId>,
        kind: impl Into<String>,
        line: impl Into<ElementId>,
        offset: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: String::new(),
            line: line.into(),
            offset,
            properties: PropertyMap::new(),
            selected: false,
        }
    }
}

/// Frei platzierter Gegenstand (Möbel, Sanitär, …)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    pub position: DVec2,
    /// Drehung in Grad, normiert auf [0, 360)
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub selected: bool,
}

impl Item {
    /// Erstellt einen Gegenstand an `position` ohne Drehung.
    pub fn new(id: impl Into<ElementId>, kind: impl Into<String>, position: DVec2) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: String::new(),
            position,
            rotation: 0.0,
            properties: PropertyMap::new(),
            selected: false,
        }
    }
}

/// Abgeleitete Fläche, begrenzt von einem geschlossenen Linienzug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    /// Rand-Vertices gegen den Uhrzeigersinn
    pub vertices: Vec<ElementId>,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub selected: bool,
}

impl Area {
    /// Erstellt eine Fläche über den gegebenen Rand-Vertices.
    pub fn new(id: impl Into<ElementId>, kind: impl Into<String>, vertices: Vec<ElementId>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: String::new(),
            vertices,
            properties: PropertyMap::new(),
            selected: false,
        }
    }
}

/// Verweis auf ein Element innerhalb eines Layers (z.B. als Gruppenmitglied)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub layer: LayerId,
    pub kind: ElementKind,
    pub id: ElementId,
}

/// Gemeinsamer Zugriff auf das eingebettete Selektions-Flag.
pub trait Selectable {
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
}

macro_rules! impl_selectable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Selectable for $ty {
                fn is_selected(&self) -> bool {
                    self.selected
                }

                fn set_selected(&mut self, selected: bool) {
                    self.selected = selected;
                }
            }
        )*
    };
}

impl_selectable!(Vertex, Line, Hole, Item, Area);

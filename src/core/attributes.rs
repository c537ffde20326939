//! Typisierte Attribut-Payloads für die Batch-Attribut-Setter.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Attribute für selektierte Items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemAttributes {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Drehung in Grad
    pub rotation: Option<f64>,
}

/// Attribute für selektierte Lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineAttributes {
    pub name: Option<String>,
    /// Neue Position des Start-Vertex
    #[serde(rename = "vertexOne")]
    pub vertex_one: Option<DVec2>,
    /// Neue Position des End-Vertex
    #[serde(rename = "vertexTwo")]
    pub vertex_two: Option<DVec2>,
}

/// Attribute für selektierte Holes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleAttributes {
    pub name: Option<String>,
    /// Relative Position auf der Trägerwand
    pub offset: Option<f64>,
}

/// Attribut-Änderung für genau eine Element-Art
#[derive(Debug, Clone, PartialEq)]
pub enum AttributePatch {
    Items(ItemAttributes),
    Lines(LineAttributes),
    Holes(HoleAttributes),
}

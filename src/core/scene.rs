//! Die Szene: das editierbare Dokument aus Layern und Gruppen.

use super::element::{ElementRef, GroupId, LayerId, PropertyMap, Selectable};
use super::layer::Layer;
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// ID des Layers einer frisch erstellten Szene.
pub const DEFAULT_LAYER_ID: &str = "layer-1";

/// Benannte Gruppe von Elementen mit gemeinsamer Selektion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Vec<ElementRef>,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub selected: bool,
}

impl Group {
    /// Erstellt eine leere, nicht selektierte Gruppe.
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            members: Vec::new(),
            properties: PropertyMap::new(),
            selected: false,
        }
    }
}

impl Selectable for Group {
    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Projekt-Eigenschaften, die per `SET_PROJECT_PROPERTIES` direkt in die
/// Szene übernommen werden. Nicht gesetzte Felder bleiben unverändert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectProperties {
    pub unit: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Unveränderlicher Dokument-Snapshot.
///
/// Wird im State und in der History immer als `Arc<Scene>` gehalten.
/// Änderungen laufen über `Arc::make_mut` auf einer Arbeitskopie, nie
/// auf einem bereits veröffentlichten Snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Maßeinheit (z.B. `cm`)
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Aktiver Layer für neue Elemente
    #[serde(default)]
    pub selected_layer: Option<LayerId>,
    #[serde(default)]
    pub layers: IndexMap<LayerId, Arc<Layer>>,
    #[serde(default)]
    pub groups: IndexMap<GroupId, Arc<Group>>,
    /// Freie Metadaten des Projekts
    #[serde(default)]
    pub meta: PropertyMap,
}

fn default_unit() -> String {
    "cm".to_string()
}

fn default_width() -> f64 {
    3000.0
}

fn default_height() -> f64 {
    2000.0
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Erstellt eine leere Szene mit einem Standard-Layer.
    pub fn new() -> Self {
        let mut layers = IndexMap::new();
        layers.insert(
            DEFAULT_LAYER_ID.to_string(),
            Arc::new(Layer::new(DEFAULT_LAYER_ID, "default")),
        );
        Self {
            unit: default_unit(),
            width: default_width(),
            height: default_height(),
            selected_layer: Some(DEFAULT_LAYER_ID.to_string()),
            layers,
            groups: IndexMap::new(),
            meta: PropertyMap::new(),
        }
    }

    /// Baut eine Szene aus Szenen-JSON.
    ///
    /// Geprüft wird nur die Form (Serde); inhaltliche Konsistenz
    /// (z.B. existierende Vertex-IDs) liegt beim Aufrufer.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Szenen-JSON konnte nicht gelesen werden")
    }

    /// Serialisiert die Szene als formatiertes JSON.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Szene konnte nicht serialisiert werden")
    }

    /// Übernimmt gesetzte Projekt-Eigenschaften in die Szene.
    pub fn apply_project_properties(&mut self, properties: &ProjectProperties) {
        if let Some(unit) = &properties.unit {
            self.unit = unit.clone();
        }
        if let Some(width) = properties.width {
            self.width = width;
        }
        if let Some(height) = properties.height {
            self.height = height;
        }
    }

    /// Gibt eine mutable Referenz auf einen Layer zurück (CoW).
    pub fn layer_mut(&mut self, layer_id: &str) -> Option<&mut Layer> {
        self.layers.get_mut(layer_id).map(Arc::make_mut)
    }

    /// Anzahl selektierter Elemente und Gruppen über alle Layer.
    pub fn selected_count(&self) -> usize {
        self.layers
            .values()
            .map(|layer| layer.elements.selected_count())
            .sum::<usize>()
            + self.groups.values().filter(|g| g.selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_has_default_layer() {
        let scene = Scene::new();
        assert_eq!(scene.layers.len(), 1);
        assert_eq!(scene.selected_layer.as_deref(), Some(DEFAULT_LAYER_ID));
        assert_eq!(scene.selected_count(), 0);
    }

    #[test]
    fn project_properties_only_touch_set_fields() {
        let mut scene = Scene::new();
        scene.apply_project_properties(&ProjectProperties {
            width: Some(1200.0),
            ..Default::default()
        });
        assert_eq!(scene.width, 1200.0);
        assert_eq!(scene.height, 2000.0);
        assert_eq!(scene.unit, "cm");
    }

    #[test]
    fn from_json_fills_defaults() {
        let scene = Scene::from_json(r#"{ "unit": "m", "layers": {} }"#).expect("gültiges JSON");
        assert_eq!(scene.unit, "m");
        assert_eq!(scene.width, 3000.0);
        assert!(scene.layers.is_empty());
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        assert!(Scene::from_json(r#"{ "width": "breit" }"#).is_err());
    }
}

//! Katalog: Referenzbibliothek platzierbarer Element-Typen.

use super::element::{ElementKind, PropertyMap};
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Beschreibung einer Eigenschaft eines Katalog-Elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Standardwert für neu erzeugte Elemente
    #[serde(default)]
    pub default: serde_json::Value,
    /// Untergrenze numerischer Werte
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Obergrenze numerischer Werte
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PropertyInfo {
    /// Begrenzt einen Zahlenwert auf den deklarierten Bereich.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }
}

/// Anzeige-Informationen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogInfo {
    pub title: String,
    pub description: String,
    pub tag: Vec<String>,
}

/// Ein Element-Typ im Katalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogElement {
    pub name: String,
    /// Element-Art, die dieser Typ erzeugt
    pub prototype: ElementKind,
    #[serde(default)]
    pub info: CatalogInfo,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyInfo>,
}

/// Reine Katalog-Daten (serialisierbar, ohne geteilte Referenzen)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub elements: IndexMap<String, CatalogElement>,
}

impl CatalogData {
    /// Liest Katalog-Daten aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Katalog-JSON konnte nicht gelesen werden")
    }
}

/// Geteilter, für den Kern unveränderlicher Katalog.
///
/// Klonen ist O(1); ersetzt wird der Katalog nur als Ganzes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    data: Arc<CatalogData>,
}

impl Catalog {
    /// Erstellt einen leeren Katalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verpackt reine Katalog-Daten.
    pub fn from_data(data: CatalogData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Liefert eine Kopie der reinen Daten (Gegenstück zu `from_data`).
    pub fn to_data(&self) -> CatalogData {
        (*self.data).clone()
    }

    /// Anzahl der Element-Typen.
    pub fn len(&self) -> usize {
        self.data.elements.len()
    }

    /// Gibt `true` zurück, wenn der Katalog keine Element-Typen enthält.
    pub fn is_empty(&self) -> bool {
        self.data.elements.is_empty()
    }

    /// Sucht einen Element-Typ über seinen Namen.
    pub fn element(&self, name: &str) -> Option<&CatalogElement> {
        self.data.elements.get(name)
    }

    /// Deklarierte Eigenschaft `key` des Typs `name`.
    pub fn property(&self, name: &str, key: &str) -> Option<&PropertyInfo> {
        self.element(name)?.properties.get(key)
    }

    /// Standardwerte aller Eigenschaften eines Typs.
    pub fn default_properties(&self, name: &str) -> PropertyMap {
        self.element(name)
            .map(|element| {
                element
                    .properties
                    .iter()
                    .map(|(key, info)| (key.clone(), info.default.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Erster Typ mit der gegebenen Element-Art (z.B. der Standard-Flächentyp).
    pub fn first_of_kind(&self, kind: ElementKind) -> Option<&CatalogElement> {
        self.data.elements.values().find(|e| e.prototype == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r##"{
        "elements": {
            "door": {
                "name": "door",
                "prototype": "hole",
                "info": { "title": "Tür" },
                "properties": {
                    "width": { "default": 80.0, "min": 60.0, "max": 120.0 }
                }
            },
            "room": {
                "name": "room",
                "prototype": "area",
                "properties": { "patternColor": { "default": "#f5f4f4" } }
            }
        }
    }"##;

    #[test]
    fn parses_catalog_and_looks_up_properties() {
        let catalog = Catalog::from_data(CatalogData::from_json(CATALOG_JSON).unwrap());

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.element("door").unwrap().info.title, "Tür");
        let width = catalog.property("door", "width").unwrap();
        assert_eq!(width.clamp(200.0), 120.0);
        assert_eq!(width.clamp(10.0), 60.0);
        assert_eq!(catalog.first_of_kind(ElementKind::Area).unwrap().name, "room");
        assert_eq!(
            catalog.default_properties("room")["patternColor"],
            serde_json::json!("#f5f4f4")
        );
    }

    #[test]
    fn data_roundtrip_keeps_content_but_not_identity() {
        let catalog = Catalog::from_data(CatalogData::from_json(CATALOG_JSON).unwrap());
        let rewrapped = Catalog::from_data(catalog.to_data());

        assert_eq!(rewrapped, catalog);
        assert!(!Arc::ptr_eq(&rewrapped.data, &catalog.data));
    }

    #[test]
    fn unknown_prototype_is_rejected() {
        let json = r#"{ "elements": { "x": { "name": "x", "prototype": "roof" } } }"#;
        assert!(CatalogData::from_json(json).is_err());
    }
}

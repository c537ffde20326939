//! Projekt-Actions: der geschlossene Satz an Eingaben des Reducers.
//!
//! Actions kommen als JSON vom Dispatcher (`{"type": "REMOVE"}` usw.) und
//! werden an der Grenze typisiert. Unbekannte `type`-Werte werden zu
//! [`ProjectAction::Unrecognized`] und lassen den State unverändert.

use crate::core::{
    CatalogData, HoleAttributes, ItemAttributes, LineAttributes, ProjectProperties, PropertyMap,
    Scene,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Alle Actions, die der Reducer verarbeitet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectAction {
    /// Neues, leeres Projekt
    NewProject,
    /// Projekt aus Szenen-JSON laden (Katalog bleibt erhalten)
    LoadProject {
        #[serde(rename = "sceneJSON")]
        scene: Box<Scene>,
    },
    /// Rollback, danach Katalog-Ansicht
    OpenCatalog,
    /// Bearbeitungswerkzeug wählen
    SelectToolEdit,
    /// Gesamte Selektion aufheben
    UnselectAll,
    /// Eigenschaften aller selektierten Elemente setzen
    SetProperties { properties: PropertyMap },
    /// Attribute der selektierten Items setzen
    SetItemsAttributes {
        #[serde(rename = "itemsAttributes")]
        attributes: ItemAttributes,
    },
    /// Attribute der selektierten Lines setzen
    SetLinesAttributes {
        #[serde(rename = "linesAttributes")]
        attributes: LineAttributes,
    },
    /// Attribute der selektierten Holes setzen
    SetHolesAttributes {
        #[serde(rename = "holesAttributes")]
        attributes: HoleAttributes,
    },
    /// Selektierte Lines, Holes und Items löschen
    Remove,
    /// Einen Schritt zurück in der History
    Undo,
    /// Letzten Snapshot ohne Selektion erneut committen
    Rollback,
    /// Projekt-Eigenschaften (Einheit, Größe) setzen
    SetProjectProperties { properties: ProjectProperties },
    /// Projekt-Konfigurator öffnen
    OpenProjectConfigurator,
    /// Katalog ersetzen
    InitCatalog { catalog: CatalogData },
    /// Jeder andere `type`: keine Wirkung
    #[serde(other)]
    Unrecognized,
}

impl ProjectAction {
    /// Parst eine einzelne Action aus JSON.
    ///
    /// Unbekannte Typen sind kein Fehler; falsch typisierte Payloads
    /// bekannter Actions schon.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).with_context(|| {
            let preview: String = json.chars().take(80).collect();
            format!("Ungültige Action: {preview}")
        })
    }

    /// Konstanten-Name der Action (für Logs).
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewProject => "NEW_PROJECT",
            Self::LoadProject { .. } => "LOAD_PROJECT",
            Self::OpenCatalog => "OPEN_CATALOG",
            Self::SelectToolEdit => "SELECT_TOOL_EDIT",
            Self::UnselectAll => "UNSELECT_ALL",
            Self::SetProperties { .. } => "SET_PROPERTIES",
            Self::SetItemsAttributes { .. } => "SET_ITEMS_ATTRIBUTES",
            Self::SetLinesAttributes { .. } => "SET_LINES_ATTRIBUTES",
            Self::SetHolesAttributes { .. } => "SET_HOLES_ATTRIBUTES",
            Self::Remove => "REMOVE",
            Self::Undo => "UNDO",
            Self::Rollback => "ROLLBACK",
            Self::SetProjectProperties { .. } => "SET_PROJECT_PROPERTIES",
            Self::OpenProjectConfigurator => "OPEN_PROJECT_CONFIGURATOR",
            Self::InitCatalog { .. } => "INIT_CATALOG",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Gibt `true` zurück, wenn die Action einen History-Eintrag erzeugt
    /// (bei leerer History entfällt er).
    pub fn commits_scene(&self) -> bool {
        matches!(
            self,
            Self::UnselectAll
                | Self::SetProperties { .. }
                | Self::SetItemsAttributes { .. }
                | Self::SetLinesAttributes { .. }
                | Self::SetHolesAttributes { .. }
                | Self::Remove
                | Self::Rollback
                | Self::OpenCatalog
                | Self::SetProjectProperties { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_actions_by_constant_name() {
        assert_eq!(
            ProjectAction::from_json(r#"{"type":"REMOVE"}"#).unwrap(),
            ProjectAction::Remove
        );
        assert_eq!(
            ProjectAction::from_json(r#"{"type":"OPEN_PROJECT_CONFIGURATOR"}"#).unwrap(),
            ProjectAction::OpenProjectConfigurator
        );
    }

    #[test]
    fn parses_payload_field_names() {
        let action = ProjectAction::from_json(
            r#"{"type":"SET_ITEMS_ATTRIBUTES","itemsAttributes":{"rotation":90}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            ProjectAction::SetItemsAttributes {
                attributes: ItemAttributes {
                    rotation: Some(90.0),
                    ..Default::default()
                }
            }
        );

        let action =
            ProjectAction::from_json(r#"{"type":"SET_PROPERTIES","properties":{"color":"red"}}"#)
                .unwrap();
        match action {
            ProjectAction::SetProperties { properties } => {
                assert_eq!(properties["color"], serde_json::json!("red"));
            }
            other => panic!("unerwartete Action: {other:?}"),
        }
    }

    #[test]
    fn load_project_reads_scene_json() {
        let action = ProjectAction::from_json(
            r#"{"type":"LOAD_PROJECT","sceneJSON":{"unit":"m","layers":{}}}"#,
        )
        .unwrap();
        match action {
            ProjectAction::LoadProject { scene } => assert_eq!(scene.unit, "m"),
            other => panic!("unerwartete Action: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_unrecognized() {
        assert_eq!(
            ProjectAction::from_json(r#"{"type":"ZOOM_IN"}"#).unwrap(),
            ProjectAction::Unrecognized
        );
    }

    #[test]
    fn ill_typed_payload_is_rejected() {
        let err = ProjectAction::from_json(
            r#"{"type":"SET_PROJECT_PROPERTIES","properties":{"width":"breit"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Ungültige Action"));
        assert!(ProjectAction::from_json("kein json").is_err());
    }

    #[test]
    fn name_matches_wire_constant() {
        let action = ProjectAction::SetLinesAttributes {
            attributes: LineAttributes::default(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.name());
    }
}

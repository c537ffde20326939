//! Application State — zentrale Datenhaltung.

use super::history::SceneHistory;
use crate::core::{Catalog, ElementId, PropertyMap, Scene};
use crate::shared::EditorOptions;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Interaktionsmodus der Oberfläche, unabhängig vom Szeneninhalt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Standard: nichts in Bearbeitung
    #[default]
    Idle,
    /// Ein Werkzeug bearbeitet gerade Elemente
    Editing,
    /// Katalog-Ansicht ist geöffnet
    ViewingCatalog,
    /// Projekt-Konfigurator ist geöffnet
    ConfiguringProject,
}

/// Fangpunkt bzw. Fangkante für Zeichen- und Verschiebewerkzeuge
#[derive(Debug, Clone, PartialEq)]
pub enum SnapElement {
    /// Fangpunkt (z.B. ein Vertex)
    Point {
        position: DVec2,
        radius: f64,
        related: Vec<ElementId>,
    },
    /// Fangkante (z.B. entlang einer Wand)
    Segment {
        start: DVec2,
        end: DVec2,
        radius: f64,
        related: Vec<ElementId>,
    },
}

/// Flüchtiger Interaktionszustand laufender Werkzeuge.
/// Wird nie in die History übernommen und beim Rollback verworfen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Fangelemente des aktiven Werkzeugs
    pub snap_elements: Vec<SnapElement>,
    /// Aktuell eingerastetes Fangelement
    pub active_snap_element: Option<SnapElement>,
    /// Zwischenstand beim Zeichnen
    pub drawing_support: PropertyMap,
    /// Zwischenstand beim Verschieben
    pub dragging_support: PropertyMap,
    /// Zwischenstand beim Drehen
    pub rotating_support: PropertyMap,
}

impl InteractionState {
    /// Erstellt einen leeren Interaktionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn kein Werkzeug Zwischenstände hält.
    pub fn is_clear(&self) -> bool {
        self.snap_elements.is_empty()
            && self.active_snap_element.is_none()
            && self.drawing_support.is_empty()
            && self.dragging_support.is_empty()
            && self.rotating_support.is_empty()
    }
}

/// Hauptzustand der Anwendung.
///
/// Ein Wert dieses Typs wird nie an Ort und Stelle verändert, nachdem er
/// veröffentlicht wurde: jede Transition liefert einen neuen `AppState`.
/// Klonen ist günstig, weil Szene, History-Einträge und Katalog geteilt werden.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Interaktionsmodus
    pub mode: Mode,
    /// Aktuelle Szene
    pub scene: Arc<Scene>,
    /// Snapshot-History für Undo/Rollback
    pub history: SceneHistory,
    /// Element-Katalog (geteilte Referenzdaten)
    pub catalog: Catalog,
    /// Flüchtiger Werkzeugzustand
    pub interaction: InteractionState,
    /// Laufzeit-Optionen (Undo-Verhalten, History-Grenze)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerer Szene und History `[S0]`.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Wie [`AppState::new`], aber mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self::from_scene(Scene::new(), Catalog::new(), options)
    }

    /// Erstellt einen App-State für eine geladene Szene.
    /// Die History beginnt mit genau dieser Szene.
    pub fn from_scene(scene: Scene, catalog: Catalog, options: EditorOptions) -> Self {
        let scene = Arc::new(scene);
        Self {
            mode: Mode::Idle,
            history: SceneHistory::with_initial(Arc::clone(&scene)),
            scene,
            catalog,
            interaction: InteractionState::new(),
            options,
        }
    }

    /// Setzt `scene` als aktuelle Szene und hängt sie an die History an.
    pub fn commit(&mut self, scene: Arc<Scene>) {
        self.scene = Arc::clone(&scene);
        self.history.push(scene, self.options.history_limit);
    }

    /// Prüft, ob die aktuelle Szene der jüngste History-Snapshot ist.
    pub fn is_committed(&self) -> bool {
        self.history.is_top(&self.scene)
    }

    /// Gibt zurück, ob ältere Snapshots als der jüngste existieren.
    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    /// Anzahl der History-Snapshots (für UI-Anzeige).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Anzahl selektierter Elemente und Gruppen der aktuellen Szene.
    pub fn selected_count(&self) -> usize {
        self.scene.selected_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

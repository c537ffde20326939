//! Layer mit seinen Element-Sammlungen.

use super::element::{Area, ElementId, Hole, Item, LayerId, Line, Vertex};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// IDs der aktuell selektierten, löschbaren Elemente eines Layers
/// (in Einfügereihenfolge der jeweiligen Sammlung).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedIds {
    pub lines: Vec<ElementId>,
    pub holes: Vec<ElementId>,
    pub items: Vec<ElementId>,
}

impl SelectedIds {
    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.holes.is_empty() && self.items.is_empty()
    }
}

/// Alle Elemente eines Layers.
///
/// Jedes Element liegt hinter einem `Arc`: Klonen ist O(n) Ref-Count-Erhöhungen,
/// geändert wird per `Arc::make_mut` nur das betroffene Element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Elements {
    pub vertices: IndexMap<ElementId, Arc<Vertex>>,
    pub lines: IndexMap<ElementId, Arc<Line>>,
    pub holes: IndexMap<ElementId, Arc<Hole>>,
    pub items: IndexMap<ElementId, Arc<Item>>,
    pub areas: IndexMap<ElementId, Arc<Area>>,
}

impl Elements {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die IDs aller selektierten Lines, Holes und Items.
    /// Areas sind abgeleitet und nicht eigenständig löschbar.
    pub fn selected(&self) -> SelectedIds {
        fn ids<T>(map: &IndexMap<ElementId, Arc<T>>, selected: impl Fn(&T) -> bool) -> Vec<ElementId> {
            map.iter()
                .filter_map(|(id, e)| selected(&**e).then(|| id.clone()))
                .collect()
        }

        SelectedIds {
            lines: ids(&self.lines, |l| l.selected),
            holes: ids(&self.holes, |h| h.selected),
            items: ids(&self.items, |i| i.selected),
        }
    }

    /// Anzahl selektierter Elemente aller Arten (inkl. Vertices und Areas).
    pub fn selected_count(&self) -> usize {
        self.vertices.values().filter(|v| v.selected).count()
            + self.lines.values().filter(|l| l.selected).count()
            + self.holes.values().filter(|h| h.selected).count()
            + self.items.values().filter(|i| i.selected).count()
            + self.areas.values().filter(|a| a.selected).count()
    }

    /// Fügt einen Vertex hinzu.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.insert(vertex.id.clone(), Arc::new(vertex));
    }

    /// Fügt eine Line hinzu und trägt sie an beiden Vertices ein.
    pub fn add_line(&mut self, line: Line) {
        for vertex_id in &line.vertices {
            if let Some(vertex) = self.vertices.get_mut(vertex_id) {
                let vertex = Arc::make_mut(vertex);
                if !vertex.lines.contains(&line.id) {
                    vertex.lines.push(line.id.clone());
                }
            }
        }
        self.lines.insert(line.id.clone(), Arc::new(line));
    }

    /// Fügt ein Hole hinzu und trägt es an der Trägerwand ein.
    pub fn add_hole(&mut self, hole: Hole) {
        if let Some(line) = self.lines.get_mut(&hole.line) {
            let line = Arc::make_mut(line);
            if !line.holes.contains(&hole.id) {
                line.holes.push(hole.id.clone());
            }
        }
        self.holes.insert(hole.id.clone(), Arc::new(hole));
    }

    /// Fügt ein Item hinzu.
    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), Arc::new(item));
    }
}

/// Ein Layer (Stockwerk bzw. Ebene) der Szene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    #[serde(default)]
    pub name: String,
    /// Höhe über Grund in Szenen-Einheiten
    #[serde(default)]
    pub altitude: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub elements: Elements,
}

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

impl Layer {
    /// Erstellt einen leeren, sichtbaren Layer.
    pub fn new(id: impl Into<LayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            altitude: 0.0,
            opacity: default_opacity(),
            visible: default_visible(),
            elements: Elements::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn add_line_registers_line_on_both_vertices() {
        let mut elements = Elements::new();
        elements.add_vertex(Vertex::new("v1", DVec2::ZERO));
        elements.add_vertex(Vertex::new("v2", DVec2::new(100.0, 0.0)));
        elements.add_line(Line::new("l1", "wall", "v1", "v2"));

        assert_eq!(elements.vertices["v1"].lines, vec!["l1".to_string()]);
        assert_eq!(elements.vertices["v2"].lines, vec!["l1".to_string()]);
    }

    #[test]
    fn selected_ignores_vertices_and_areas() {
        let mut elements = Elements::new();
        let mut vertex = Vertex::new("v1", DVec2::ZERO);
        vertex.selected = true;
        elements.add_vertex(vertex);
        let mut item = Item::new("i1", "chair", DVec2::ZERO);
        item.selected = true;
        elements.add_item(item);
        elements.add_item(Item::new("i2", "chair", DVec2::ONE));

        let selected = elements.selected();
        assert!(selected.lines.is_empty());
        assert_eq!(selected.items, vec!["i1".to_string()]);
        assert_eq!(elements.selected_count(), 2);
    }
}

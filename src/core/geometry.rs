//! Geometrie-/Attribut-Engine.
//!
//! Der Kern ruft Element-Löschung, Flächenerkennung und die Batch-Setter
//! ausschließlich über [`GeometryEngine`] auf. [`PlanGeometry`] ist die
//! mitgelieferte Implementierung.
//!
//! Alle `&mut Elements`-Operationen arbeiten auf einer Arbeitskopie des
//! Aufrufers. Einzelne Elemente werden per `Arc::make_mut` nur dann kopiert,
//! wenn sie sich tatsächlich ändern.

use super::attributes::{AttributePatch, HoleAttributes, ItemAttributes, LineAttributes};
use super::catalog::Catalog;
use super::element::{Area, ElementId, ElementKind, Hole, Line, PropertyMap, Selectable, Vertex};
use super::layer::{Elements, Layer};
use glam::DVec2;
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

/// Flächentyp, wenn der Katalog keinen Typ mit Prototyp `area` kennt.
pub const DEFAULT_AREA_TYPE: &str = "area";

/// Minimale Flächengröße, ab der ein Zyklus als Raum zählt.
const AREA_EPSILON: f64 = 1e-9;

/// Schnittstelle zur Geometrie-/Attribut-Engine.
pub trait GeometryEngine {
    /// Hebt die Selektion aller Vertices, Lines, Holes, Items und Areas auf.
    fn unselect_all_elements(&self, elements: &mut Elements);

    /// Entfernt eine Line samt abhängiger Holes und verwaister Vertices.
    /// Unbekannte IDs werden ignoriert.
    fn remove_line(&self, elements: &mut Elements, line_id: &str);

    /// Entfernt ein Hole und trägt es aus seiner Wand aus.
    fn remove_hole(&self, elements: &mut Elements, hole_id: &str);

    /// Entfernt ein Item.
    fn remove_item(&self, elements: &mut Elements, item_id: &str);

    /// Berechnet die Flächen aus dem aktuellen Liniengraphen neu.
    fn detect_and_update_areas(&self, elements: &mut Elements, catalog: &Catalog);

    /// Übernimmt `properties` in alle selektierten Elemente des Layers.
    /// Ohne Selektion wird derselbe `Arc` zurückgegeben.
    fn set_properties_on_selected(&self, layer: &Arc<Layer>, properties: &PropertyMap)
        -> Arc<Layer>;

    /// Übernimmt Attribute in die selektierten Elemente der jeweiligen Art.
    fn set_attributes_on_selected(
        &self,
        layer: &Arc<Layer>,
        attributes: &AttributePatch,
        catalog: &Catalog,
    ) -> Arc<Layer>;
}

/// Mitgelieferte Engine für Grundrisse aus Wänden, Öffnungen und Gegenständen.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGeometry;

impl PlanGeometry {
    /// Erstellt die Engine.
    pub fn new() -> Self {
        Self
    }
}

impl GeometryEngine for PlanGeometry {
    fn unselect_all_elements(&self, elements: &mut Elements) {
        unselect_map(&mut elements.vertices);
        unselect_map(&mut elements.lines);
        unselect_map(&mut elements.holes);
        unselect_map(&mut elements.items);
        unselect_map(&mut elements.areas);
    }

    fn remove_line(&self, elements: &mut Elements, line_id: &str) {
        let Some(line) = elements.lines.shift_remove(line_id) else {
            return;
        };

        elements
            .holes
            .retain(|hole_id, hole| hole.line != line_id && !line.holes.contains(hole_id));

        for vertex_id in &line.vertices {
            // Rückverweise am Vertex können in geladenen Szenen fehlen;
            // maßgeblich ist, ob noch eine Line den Vertex benutzt.
            let in_use = elements
                .lines
                .values()
                .any(|other| other.vertices.contains(vertex_id));
            if !in_use {
                elements.vertices.shift_remove(vertex_id);
            } else if let Some(vertex) = elements.vertices.get_mut(vertex_id) {
                if vertex.lines.iter().any(|id| id == line_id) {
                    Arc::make_mut(vertex).lines.retain(|id| id != line_id);
                }
            }
        }
    }

    fn remove_hole(&self, elements: &mut Elements, hole_id: &str) {
        let Some(hole) = elements.holes.shift_remove(hole_id) else {
            return;
        };
        if let Some(line) = elements.lines.get_mut(&hole.line) {
            if line.holes.iter().any(|id| id == hole_id) {
                Arc::make_mut(line).holes.retain(|id| id != hole_id);
            }
        }
    }

    fn remove_item(&self, elements: &mut Elements, item_id: &str) {
        elements.items.shift_remove(item_id);
    }

    fn detect_and_update_areas(&self, elements: &mut Elements, catalog: &Catalog) {
        let faces = detect_faces(elements);

        let existing: HashMap<Vec<ElementId>, ElementId> = elements
            .areas
            .values()
            .map(|area| (sorted_key(&area.vertices), area.id.clone()))
            .collect();

        let area_type = catalog
            .first_of_kind(ElementKind::Area)
            .map_or(DEFAULT_AREA_TYPE, |element| element.name.as_str());

        let mut keep: HashSet<ElementId> = HashSet::new();
        let mut created: Vec<Area> = Vec::new();
        for face in faces {
            let key = sorted_key(&face);
            match existing.get(&key) {
                Some(id) => {
                    keep.insert(id.clone());
                }
                None => {
                    let mut area = Area::new(format!("area-{}", key.join("-")), area_type, face);
                    area.properties = catalog.default_properties(area_type);
                    created.push(area);
                }
            }
        }

        let before = elements.areas.len();
        elements.areas.retain(|id, _| keep.contains(id));
        let dropped = before - elements.areas.len();
        let mut added = 0;
        for area in created {
            if !elements.areas.contains_key(&area.id) {
                elements.areas.insert(area.id.clone(), Arc::new(area));
                added += 1;
            }
        }

        refresh_vertex_areas(elements);
        log::debug!(
            "Flächen aktualisiert: {} behalten, {} entfernt, {} neu",
            keep.len(),
            dropped,
            added
        );
    }

    fn set_properties_on_selected(
        &self,
        layer: &Arc<Layer>,
        properties: &PropertyMap,
    ) -> Arc<Layer> {
        let elements = &layer.elements;
        let has_target = any_selected(&elements.lines)
            || any_selected(&elements.holes)
            || any_selected(&elements.items)
            || any_selected(&elements.areas);
        if !has_target {
            return Arc::clone(layer);
        }

        let mut layer = Arc::clone(layer);
        let elements = &mut Arc::make_mut(&mut layer).elements;
        for line in elements.lines.values_mut().filter(|l| l.selected) {
            merge_properties(&mut Arc::make_mut(line).properties, properties);
        }
        for hole in elements.holes.values_mut().filter(|h| h.selected) {
            merge_properties(&mut Arc::make_mut(hole).properties, properties);
        }
        for item in elements.items.values_mut().filter(|i| i.selected) {
            merge_properties(&mut Arc::make_mut(item).properties, properties);
        }
        for area in elements.areas.values_mut().filter(|a| a.selected) {
            merge_properties(&mut Arc::make_mut(area).properties, properties);
        }
        layer
    }

    fn set_attributes_on_selected(
        &self,
        layer: &Arc<Layer>,
        attributes: &AttributePatch,
        catalog: &Catalog,
    ) -> Arc<Layer> {
        let has_target = match attributes {
            AttributePatch::Items(_) => any_selected(&layer.elements.items),
            AttributePatch::Lines(_) => any_selected(&layer.elements.lines),
            AttributePatch::Holes(_) => any_selected(&layer.elements.holes),
        };
        if !has_target {
            return Arc::clone(layer);
        }

        let mut layer = Arc::clone(layer);
        let elements = &mut Arc::make_mut(&mut layer).elements;
        match attributes {
            AttributePatch::Items(attributes) => apply_item_attributes(elements, attributes),
            AttributePatch::Lines(attributes) => apply_line_attributes(elements, attributes),
            AttributePatch::Holes(attributes) => {
                apply_hole_attributes(elements, attributes, catalog)
            }
        }
        layer
    }
}

fn unselect_map<T: Selectable + Clone>(map: &mut IndexMap<ElementId, Arc<T>>) {
    for element in map.values_mut() {
        if element.is_selected() {
            Arc::make_mut(element).set_selected(false);
        }
    }
}

fn any_selected<T: Selectable>(map: &IndexMap<ElementId, Arc<T>>) -> bool {
    map.values().any(|element| element.is_selected())
}

fn merge_properties(target: &mut PropertyMap, properties: &PropertyMap) {
    for (key, value) in properties {
        target.insert(key.clone(), value.clone());
    }
}

fn apply_item_attributes(elements: &mut Elements, attributes: &ItemAttributes) {
    for item in elements.items.values_mut().filter(|i| i.selected) {
        let item = Arc::make_mut(item);
        if let Some(name) = &attributes.name {
            item.name = name.clone();
        }
        if let Some(x) = attributes.x {
            item.position.x = x;
        }
        if let Some(y) = attributes.y {
            item.position.y = y;
        }
        if let Some(rotation) = attributes.rotation {
            item.rotation = rotation.rem_euclid(360.0);
        }
    }
}

fn apply_line_attributes(elements: &mut Elements, attributes: &LineAttributes) {
    // Vertices werden erst nach dem Durchlauf verschoben: sie können von
    // mehreren selektierten Lines geteilt werden.
    let mut moves: Vec<(ElementId, DVec2)> = Vec::new();
    for line in elements.lines.values_mut().filter(|l| l.selected) {
        if let Some(name) = &attributes.name {
            Arc::make_mut(line).name = name.clone();
        }
        if let Some((start, end)) = line.endpoints() {
            if let Some(position) = attributes.vertex_one {
                moves.push((start.to_string(), position));
            }
            if let Some(position) = attributes.vertex_two {
                moves.push((end.to_string(), position));
            }
        }
    }

    for (vertex_id, position) in moves {
        if let Some(vertex) = elements.vertices.get_mut(&vertex_id) {
            if vertex.position != position {
                Arc::make_mut(vertex).position = position;
            }
        }
    }
}

fn apply_hole_attributes(elements: &mut Elements, attributes: &HoleAttributes, catalog: &Catalog) {
    let Elements {
        vertices,
        lines,
        holes,
        ..
    } = elements;

    for hole in holes.values_mut().filter(|h| h.selected) {
        let (min, max) = offset_bounds(hole, lines, vertices, catalog);
        let hole = Arc::make_mut(hole);
        if let Some(name) = &attributes.name {
            hole.name = name.clone();
        }
        if let Some(offset) = attributes.offset {
            hole.offset = offset.clamp(min, max);
        }
    }
}

/// Breite einer Öffnung: eigene Eigenschaft, sonst Katalog-Standard, sonst 0.
/// Der Katalog-Bereich (`min`/`max`) begrenzt auch die eigene Breite.
fn hole_width(hole: &Hole, catalog: &Catalog) -> f64 {
    let info = catalog.property(&hole.kind, "width");
    let width = hole
        .properties
        .get("width")
        .and_then(serde_json::Value::as_f64)
        .or_else(|| info.and_then(|info| info.default.as_f64()))
        .unwrap_or(0.0);
    info.map_or(width, |info| info.clamp(width))
}

fn line_length(line: &Line, vertices: &IndexMap<ElementId, Arc<Vertex>>) -> Option<f64> {
    let (start, end) = line.endpoints()?;
    Some(vertices.get(start)?.position.distance(vertices.get(end)?.position))
}

/// Zulässiger Offset-Bereich, in dem die Öffnung vollständig auf der Wand liegt.
fn offset_bounds(
    hole: &Hole,
    lines: &IndexMap<ElementId, Arc<Line>>,
    vertices: &IndexMap<ElementId, Arc<Vertex>>,
    catalog: &Catalog,
) -> (f64, f64) {
    let length = lines
        .get(&hole.line)
        .and_then(|line| line_length(line, vertices))
        .unwrap_or(0.0);
    if length <= 0.0 {
        return (0.0, 1.0);
    }
    let half = (hole_width(hole, catalog) / 2.0 / length).clamp(0.0, 0.5);
    (half, 1.0 - half)
}

fn sorted_key<S: AsRef<str>>(vertices: &[S]) -> Vec<ElementId> {
    let mut key: Vec<ElementId> = vertices.iter().map(|v| v.as_ref().to_string()).collect();
    key.sort();
    key
}

fn refresh_vertex_areas(elements: &mut Elements) {
    let Elements {
        vertices, areas, ..
    } = elements;

    let mut memberships: HashMap<&str, Vec<ElementId>> = HashMap::new();
    for area in areas.values() {
        for vertex_id in &area.vertices {
            memberships
                .entry(vertex_id.as_str())
                .or_default()
                .push(area.id.clone());
        }
    }

    for vertex in vertices.values_mut() {
        let wanted = memberships.remove(vertex.id.as_str()).unwrap_or_default();
        if vertex.areas != wanted {
            Arc::make_mut(vertex).areas = wanted;
        }
    }
}

/// Findet alle beschränkten Flächen des planaren Liniengraphen.
///
/// Jede Fläche wird gegen den Uhrzeigersinn zurückgegeben und beginnt beim
/// lexikographisch kleinsten Vertex. Das Ergebnis hängt nicht von der
/// Einfügereihenfolge der Sammlungen ab.
fn detect_faces(elements: &Elements) -> Vec<Vec<ElementId>> {
    let mut adjacency: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for line in elements.lines.values() {
        let Some((a, b)) = line.endpoints() else {
            continue;
        };
        if a == b || !elements.vertices.contains_key(a) || !elements.vertices.contains_key(b) {
            continue;
        }
        adjacency.entry(a).or_default().insert(b);
        adjacency.entry(b).or_default().insert(a);
    }
    prune_dangling(&mut adjacency);

    let position = |id: &str| elements.vertices[id].position;

    // Nachbarn nach Winkel sortiert (gegen den Uhrzeigersinn)
    let neighbors: BTreeMap<&str, Vec<&str>> = adjacency
        .iter()
        .map(|(&vertex, around)| {
            let origin = position(vertex);
            let mut sorted: Vec<&str> = around.iter().copied().collect();
            sorted.sort_by(|a, b| {
                angle(origin, position(*a))
                    .total_cmp(&angle(origin, position(*b)))
                    .then_with(|| a.cmp(b))
            });
            (vertex, sorted)
        })
        .collect();

    let max_steps = neighbors.values().map(Vec::len).sum::<usize>();
    let mut visited: HashSet<(&str, &str)> = HashSet::new();
    let mut faces = Vec::new();

    for (&start, around) in &neighbors {
        for &next in around {
            if visited.contains(&(start, next)) {
                continue;
            }
            let Some(face) = walk_face(&neighbors, &mut visited, start, next, max_steps) else {
                continue;
            };
            let points: Vec<DVec2> = face.iter().map(|id| position(*id)).collect();
            if is_simple(&face) && signed_area(&points) > AREA_EPSILON {
                faces.push(canonical(face));
            }
        }
    }
    faces
}

fn prune_dangling<'a>(adjacency: &mut BTreeMap<&'a str, BTreeSet<&'a str>>) {
    loop {
        let dangling: Vec<&'a str> = adjacency
            .iter()
            .filter(|(_, around)| around.len() <= 1)
            .map(|(&vertex, _)| vertex)
            .collect();
        if dangling.is_empty() {
            return;
        }
        for vertex in dangling {
            if let Some(around) = adjacency.remove(vertex) {
                for neighbor in around {
                    if let Some(set) = adjacency.get_mut(neighbor) {
                        set.remove(vertex);
                    }
                }
            }
        }
    }
}

/// Läuft eine Fläche ab, indem an jedem Vertex die im Uhrzeigersinn nächste
/// Kante nach der Eingangskante genommen wird.
fn walk_face<'a>(
    neighbors: &BTreeMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<(&'a str, &'a str)>,
    start: &'a str,
    next: &'a str,
    max_steps: usize,
) -> Option<Vec<&'a str>> {
    let mut face = Vec::new();
    let (mut from, mut to) = (start, next);
    for _ in 0..max_steps {
        if !visited.insert((from, to)) {
            return None;
        }
        face.push(from);
        let around = neighbors.get(to)?;
        let index = around.iter().position(|&n| n == from)?;
        let following = around[(index + around.len() - 1) % around.len()];
        from = to;
        to = following;
        if (from, to) == (start, next) {
            return Some(face);
        }
    }
    None
}

fn angle(origin: DVec2, point: DVec2) -> f64 {
    let delta = point - origin;
    delta.y.atan2(delta.x)
}

fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}

fn is_simple(face: &[&str]) -> bool {
    let mut seen = HashSet::new();
    face.iter().all(|vertex| seen.insert(*vertex))
}

fn canonical(mut face: Vec<&str>) -> Vec<ElementId> {
    let start = face
        .iter()
        .enumerate()
        .min_by_key(|(_, vertex)| **vertex)
        .map_or(0, |(index, _)| index);
    face.rotate_left(start);
    face.into_iter().map(str::to_string).collect()
}

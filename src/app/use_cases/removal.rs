//! Use-Case: Selektierte Lines, Holes und Items löschen.
//!
//! Ablauf auf einer einzigen Arbeitskopie:
//! 1. Selektion je Layer erfassen (Areas sind nicht direkt löschbar)
//! 2. Gesamte Selektion aufheben
//! 3. Lines, danach Holes, danach Items entfernen
//! 4. Flächen der betroffenen Layer neu erkennen
//!
//! Die Flächenerkennung muss den endgültigen Liniengraphen sehen, deshalb
//! ist die Reihenfolge fest.

use super::selection::unselect_all;
use crate::core::{Catalog, GeometryEngine, LayerId, Scene, SelectedIds};
use std::sync::Arc;

/// Entfernt alle selektierten Lines, Holes und Items und liefert die neue Szene.
pub fn remove_selected(
    engine: &dyn GeometryEngine,
    scene: &Arc<Scene>,
    catalog: &Catalog,
) -> Arc<Scene> {
    let captured: Vec<(LayerId, SelectedIds)> = scene
        .layers
        .iter()
        .map(|(id, layer)| (id.clone(), layer.elements.selected()))
        .filter(|(_, selected)| !selected.is_empty())
        .collect();

    let mut next = unselect_all(engine, scene);

    for (layer_id, selected) in &captured {
        let Some(layer) = Arc::make_mut(&mut next).layer_mut(layer_id) else {
            continue;
        };
        let elements = &mut layer.elements;

        for line_id in &selected.lines {
            engine.remove_line(elements, line_id);
        }
        for hole_id in &selected.holes {
            engine.remove_hole(elements, hole_id);
        }
        for item_id in &selected.items {
            engine.remove_item(elements, item_id);
        }
        engine.detect_and_update_areas(elements, catalog);

        log::info!(
            "Layer {}: {} Lines, {} Holes, {} Items gelöscht",
            layer_id,
            selected.lines.len(),
            selected.holes.len(),
            selected.items.len()
        );
    }

    next
}

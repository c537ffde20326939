//! Use-Case: Selektion in einer Szene vollständig aufheben.

use crate::core::{GeometryEngine, Scene};
use std::sync::Arc;

/// Liefert eine Szene, in der kein Element und keine Gruppe selektiert ist.
///
/// Nur Layer und Gruppen mit Selektion werden kopiert; ist nichts selektiert,
/// wird derselbe `Arc` zurückgegeben.
pub fn unselect_all(engine: &dyn GeometryEngine, scene: &Arc<Scene>) -> Arc<Scene> {
    let mut next = Arc::clone(scene);

    for (layer_id, layer) in &scene.layers {
        if layer.elements.selected_count() == 0 {
            continue;
        }
        if let Some(layer) = Arc::make_mut(&mut next).layer_mut(layer_id) {
            engine.unselect_all_elements(&mut layer.elements);
        }
    }

    for (group_id, group) in &scene.groups {
        if !group.selected {
            continue;
        }
        if let Some(group) = Arc::make_mut(&mut next).groups.get_mut(group_id) {
            Arc::make_mut(group).selected = false;
        }
    }

    next
}

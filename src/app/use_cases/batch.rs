//! Use-Case: Eigenschaften und Attribute auf alle selektierten Elemente
//! anwenden (Layer für Layer über die Geometrie-Engine).

use crate::core::{AttributePatch, Catalog, GeometryEngine, Layer, PropertyMap, Scene};
use std::sync::Arc;

/// Ersetzt jeden Layer der Szene durch `map(layer)` und liefert eine neue Szene.
fn map_layers(scene: &Arc<Scene>, map: impl Fn(&Arc<Layer>) -> Arc<Layer>) -> Arc<Scene> {
    let mut next = (**scene).clone();
    for layer in next.layers.values_mut() {
        let mapped = map(layer);
        *layer = mapped;
    }
    Arc::new(next)
}

/// Übernimmt `properties` in alle selektierten Elemente aller Layer.
pub fn set_properties(
    engine: &dyn GeometryEngine,
    scene: &Arc<Scene>,
    properties: &PropertyMap,
) -> Arc<Scene> {
    log::debug!("Eigenschaften setzen: {} Schlüssel", properties.len());
    map_layers(scene, |layer| engine.set_properties_on_selected(layer, properties))
}

/// Übernimmt Attribute in die selektierten Elemente der Patch-Art.
pub fn set_attributes(
    engine: &dyn GeometryEngine,
    scene: &Arc<Scene>,
    attributes: &AttributePatch,
    catalog: &Catalog,
) -> Arc<Scene> {
    map_layers(scene, |layer| {
        engine.set_attributes_on_selected(layer, attributes, catalog)
    })
}

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use floorplan_editor::core::{Elements, GeometryEngine, Item, Layer, Line, Vertex};
use floorplan_editor::{
    transition, AppState, Catalog, EditorOptions, PlanGeometry, ProjectAction, PropertyMap, Scene,
};
use glam::DVec2;
use serde_json::json;
use std::hint::black_box;
use std::sync::Arc;

/// Raster aus `cells` x `cells` Räumen; jede zehnte Wand und jedes dritte Item selektiert.
fn build_grid_elements(cells: usize) -> Elements {
    let mut elements = Elements::new();
    let vertex_id = |x: usize, y: usize| format!("v{x}-{y}");

    for y in 0..=cells {
        for x in 0..=cells {
            let position = DVec2::new(x as f64 * 100.0, y as f64 * 100.0);
            elements.add_vertex(Vertex::new(vertex_id(x, y), position));
        }
    }

    let mut index = 0usize;
    for y in 0..=cells {
        for x in 0..=cells {
            let mut edges = Vec::new();
            if x < cells {
                edges.push(vertex_id(x + 1, y));
            }
            if y < cells {
                edges.push(vertex_id(x, y + 1));
            }
            for other in edges {
                let mut line = Line::new(format!("l{index}"), "wall", vertex_id(x, y), other);
                line.selected = index % 10 == 0;
                elements.add_line(line);
                index += 1;
            }
        }
    }

    for i in 0..cells * cells {
        let position = DVec2::new((i % cells) as f64 * 100.0 + 50.0, (i / cells) as f64 * 100.0 + 50.0);
        let mut item = Item::new(format!("i{i}"), "chair", position);
        item.selected = i % 3 == 0;
        elements.add_item(item);
    }

    PlanGeometry::new().detect_and_update_areas(&mut elements, &Catalog::new());
    elements
}

fn build_state(cells: usize, layers: usize) -> AppState {
    let mut scene = Scene::new();
    scene.layers.clear();
    for index in 0..layers {
        let id = format!("layer-{index}");
        let mut layer = Layer::new(id.clone(), format!("Ebene {index}"));
        layer.elements = build_grid_elements(cells);
        scene.layers.insert(id, Arc::new(layer));
    }
    AppState::from_scene(scene, Catalog::new(), EditorOptions::default())
}

fn bench_transitions(c: &mut Criterion) {
    let engine = PlanGeometry::new();
    let mut group = c.benchmark_group("transitions");

    let mut properties = PropertyMap::new();
    properties.insert("color".into(), json!("red"));
    let actions = [
        ("set_properties", ProjectAction::SetProperties { properties }),
        ("unselect_all", ProjectAction::UnselectAll),
        ("remove", ProjectAction::Remove),
        ("rollback", ProjectAction::Rollback),
    ];

    for &cells in &[10usize, 30usize] {
        let state = build_state(cells, 4);
        for (name, action) in &actions {
            group.bench_with_input(BenchmarkId::new(*name, cells), &state, |b, state| {
                b.iter(|| {
                    let next = transition(&engine, black_box(state), black_box(action));
                    black_box(next.history_len())
                })
            });
        }
    }

    group.finish();
}

criterion_group!(transition_benches, bench_transitions);
criterion_main!(transition_benches);

//! Editing flows against the editor state store.

use voltlab::prelude::*;
use voltlab::schema::Position;
use voltlab::store::Tool;
use voltlab::templates::template_by_id;
use voltlab::WireEndpoint;

fn store_with_template(id: &str) -> CircuitStore {
    let template = template_by_id(id).unwrap();
    let mut store = CircuitStore::new();
    store.import_circuit(template.components, template.wires);
    store
}

#[test]
fn test_deleting_a_component_cascades_its_wires() {
    let mut store = store_with_template("simple-led");
    assert_eq!(store.wires().len(), 4);

    assert!(store.delete_component("resistor-1"));
    assert_eq!(store.components().len(), 3);
    // wire-1 and wire-2 both touched the resistor.
    assert_eq!(store.wires().len(), 2);
    assert!(store.wires().iter().all(|w| {
        w.from.component_id != "resistor-1" && w.to.component_id != "resistor-1"
    }));
}

#[test]
fn test_delete_clears_selection() {
    let mut store = store_with_template("simple-led");
    store.select_component(Some("led-1".to_string()));
    assert_eq!(store.selected_component(), Some("led-1"));

    store.delete_component("led-1");
    assert_eq!(store.selected_component(), None);
}

#[test]
fn test_update_component_is_undoable() {
    let mut store = store_with_template("simple-led");
    let updated = store.update_component("resistor-1", |c| {
        c.properties.value = Some("470Ω".to_string());
    });
    assert!(updated);
    assert_eq!(
        store
            .components()
            .iter()
            .find(|c| c.id == "resistor-1")
            .unwrap()
            .value_str(),
        Some("470Ω")
    );

    assert!(store.undo());
    assert_eq!(
        store
            .components()
            .iter()
            .find(|c| c.id == "resistor-1")
            .unwrap()
            .value_str(),
        Some("220Ω")
    );
}

#[test]
fn test_update_unknown_component_changes_nothing() {
    let mut store = store_with_template("simple-led");
    let history_before = store.history_len();
    assert!(!store.update_component("bogus", |c| c.rotation = 90.0));
    assert_eq!(store.history_len(), history_before);
}

#[test]
fn test_selection_is_exclusive() {
    let mut store = store_with_template("simple-led");
    store.select_component(Some("led-1".to_string()));
    store.select_wire(Some("wire-1".to_string()));
    assert_eq!(store.selected_component(), None);
    assert_eq!(store.selected_wire(), Some("wire-1"));
}

#[test]
fn test_tool_change_drops_pending_wire() {
    let mut store = CircuitStore::new();
    store.set_wire_start(Some(WireEndpoint {
        component_id: "a".to_string(),
        terminal_id: "a-t1".to_string(),
    }));
    store.set_tool(Tool::Pan);
    assert!(store.wire_start().is_none());
    assert_eq!(store.tool(), Tool::Pan);
}

#[test]
fn test_zoom_is_clamped() {
    let mut store = CircuitStore::new();
    store.set_zoom(10.0);
    assert_eq!(store.zoom(), 3.0);
    store.set_zoom(0.01);
    assert_eq!(store.zoom(), 0.25);
    store.set_zoom(1.5);
    assert_eq!(store.zoom(), 1.5);
}

#[test]
fn test_load_project_restores_viewport_without_history() {
    let template = template_by_id("voltage-divider").unwrap();
    let mut store = CircuitStore::new();
    let history_before = store.history_len();
    store.load_project(
        template.components,
        template.wires,
        Some(2.0),
        Some(Position { x: 40.0, y: -10.0 }),
    );
    assert_eq!(store.zoom(), 2.0);
    assert_eq!(store.pan().x, 40.0);
    assert_eq!(store.history_len(), history_before);
}

#[test]
fn test_run_simulation_stores_the_result() {
    let mut store = store_with_template("simple-led");
    assert!(store.simulation_result().is_none());
    store.run_simulation();
    let result = store.simulation_result().unwrap();
    assert!(result.errors.is_empty());
    assert_eq!(result.node_voltages.len(), 3);
}

#[test]
fn test_clear_resets_circuit_and_result() {
    let mut store = store_with_template("simple-led");
    store.run_simulation();
    store.clear();
    assert!(store.components().is_empty());
    assert!(store.wires().is_empty());
    assert!(store.simulation_result().is_none());

    // Clearing is itself undoable.
    assert!(store.undo());
    assert_eq!(store.components().len(), 4);
}

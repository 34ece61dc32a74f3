//! Editor state container.
//!
//! Owns the circuit being edited plus the surrounding editor state
//! (selection, tool, viewport, last simulation result) behind
//! command-style mutators. Undo/redo keeps full `{components, wires}`
//! snapshots in a bounded buffer. The simulation engine never sees any of
//! this; it only receives the current snapshot.

use tracing::info;

use crate::engine;
use crate::schema::{Component, Position, SimulationResult, Wire, WireEndpoint};

/// Maximum number of history snapshots retained.
pub const HISTORY_CAP: usize = 50;

#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    components: Vec<Component>,
    wires: Vec<Wire>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Wire,
    Pan,
}

#[derive(Debug, Clone)]
pub struct CircuitStore {
    components: Vec<Component>,
    wires: Vec<Wire>,
    selected_component: Option<String>,
    selected_wire: Option<String>,
    tool: Tool,
    wire_start: Option<WireEndpoint>,
    zoom: f64,
    pan: Position,
    grid_enabled: bool,
    simulation_result: Option<SimulationResult>,
    history: Vec<Snapshot>,
    history_index: usize,
}

impl Default for CircuitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitStore {
    pub fn new() -> Self {
        let initial = Snapshot {
            components: Vec::new(),
            wires: Vec::new(),
        };
        CircuitStore {
            components: Vec::new(),
            wires: Vec::new(),
            selected_component: None,
            selected_wire: None,
            tool: Tool::Select,
            wire_start: None,
            zoom: 1.0,
            pan: Position { x: 0.0, y: 0.0 },
            grid_enabled: true,
            simulation_result: None,
            history: vec![initial],
            history_index: 0,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn selected_component(&self) -> Option<&str> {
        self.selected_component.as_deref()
    }

    pub fn selected_wire(&self) -> Option<&str> {
        self.selected_wire.as_deref()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn wire_start(&self) -> Option<&WireEndpoint> {
        self.wire_start.as_ref()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Position {
        self.pan
    }

    pub fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    pub fn simulation_result(&self) -> Option<&SimulationResult> {
        self.simulation_result.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // --- Circuit mutators (all push a history snapshot) ---

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
        self.push_history();
    }

    /// Apply an edit to a component by id. Returns false when the id is
    /// unknown, in which case nothing changes.
    pub fn update_component(&mut self, id: &str, edit: impl FnOnce(&mut Component)) -> bool {
        let Some(component) = self.components.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        edit(component);
        self.push_history();
        true
    }

    /// Remove a component along with every wire attached to it.
    pub fn delete_component(&mut self, id: &str) -> bool {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        if self.components.len() == before {
            return false;
        }
        self.wires
            .retain(|w| w.from.component_id != id && w.to.component_id != id);
        if self.selected_component.as_deref() == Some(id) {
            self.selected_component = None;
        }
        self.push_history();
        true
    }

    pub fn add_wire(&mut self, wire: Wire) {
        self.wires.push(wire);
        self.push_history();
    }

    pub fn delete_wire(&mut self, id: &str) -> bool {
        let before = self.wires.len();
        self.wires.retain(|w| w.id != id);
        if self.wires.len() == before {
            return false;
        }
        if self.selected_wire.as_deref() == Some(id) {
            self.selected_wire = None;
        }
        self.push_history();
        true
    }

    pub fn clear(&mut self) {
        self.components.clear();
        self.wires.clear();
        self.selected_component = None;
        self.selected_wire = None;
        self.simulation_result = None;
        self.push_history();
    }

    /// Replace the circuit with imported content.
    pub fn import_circuit(&mut self, components: Vec<Component>, wires: Vec<Wire>) {
        self.components = components;
        self.wires = wires;
        self.selected_component = None;
        self.selected_wire = None;
        self.push_history();
    }

    /// Load a saved project, restoring the viewport as well. Not an edit:
    /// no history snapshot is taken.
    pub fn load_project(
        &mut self,
        components: Vec<Component>,
        wires: Vec<Wire>,
        zoom: Option<f64>,
        pan: Option<Position>,
    ) {
        self.components = components;
        self.wires = wires;
        self.selected_component = None;
        self.selected_wire = None;
        self.zoom = zoom.unwrap_or(1.0);
        self.pan = pan.unwrap_or(Position { x: 0.0, y: 0.0 });
    }

    // --- Editor-only state (no history) ---

    pub fn select_component(&mut self, id: Option<String>) {
        self.selected_component = id;
        self.selected_wire = None;
    }

    pub fn select_wire(&mut self, id: Option<String>) {
        self.selected_wire = id;
        self.selected_component = None;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.wire_start = None;
    }

    pub fn set_wire_start(&mut self, start: Option<WireEndpoint>) {
        self.wire_start = start;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(0.25, 3.0);
    }

    pub fn set_pan(&mut self, pan: Position) {
        self.pan = pan;
    }

    pub fn toggle_grid(&mut self) {
        self.grid_enabled = !self.grid_enabled;
    }

    /// Run the engine over the current snapshot and keep the result.
    pub fn run_simulation(&mut self) -> &SimulationResult {
        let result = engine::simulate(&self.components, &self.wires);
        info!(
            "simulation run: {} errors, {} warnings",
            result.errors.len(),
            result.warnings.len()
        );
        self.simulation_result.insert(result)
    }

    pub fn set_simulation_result(&mut self, result: Option<SimulationResult>) {
        self.simulation_result = result;
    }

    // --- History ---

    pub fn undo(&mut self) -> bool {
        if self.history_index == 0 {
            return false;
        }
        self.history_index -= 1;
        self.restore(self.history_index);
        true
    }

    pub fn redo(&mut self) -> bool {
        if self.history_index + 1 >= self.history.len() {
            return false;
        }
        self.history_index += 1;
        self.restore(self.history_index);
        true
    }

    fn restore(&mut self, index: usize) {
        let snapshot = self.history[index].clone();
        self.components = snapshot.components;
        self.wires = snapshot.wires;
    }

    fn push_history(&mut self) {
        self.history.truncate(self.history_index + 1);
        self.history.push(Snapshot {
            components: self.components.clone(),
            wires: self.wires.clone(),
        });
        if self.history.len() > HISTORY_CAP {
            let overflow = self.history.len() - HISTORY_CAP;
            self.history.drain(..overflow);
        }
        self.history_index = self.history.len() - 1;
    }
}

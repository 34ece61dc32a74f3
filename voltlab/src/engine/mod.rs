//! The DC simulation engine.
//!
//! A single pure function: [`simulate`] takes a snapshot of components and
//! wires and produces node voltages, component currents, and diagnostics.
//! It holds no state between invocations, performs no I/O, and is safe to
//! run concurrently on independent snapshots.

pub mod diagnostics;
pub mod netlist;
mod solver;

use std::collections::BTreeMap;

use tracing::debug;

pub use netlist::{terminal_key, NodeMap, ResolvedNode};

use crate::schema::{Component, SimulationResult, Wire};

/// Resolve the circuit topology and compute its DC operating point.
///
/// The contract is "always return a result, never fail the caller": an
/// empty circuit, a circuit without a source, or dangling wires all
/// degrade to an empty or partial result carrying descriptive strings in
/// `errors`/`warnings`.
pub fn simulate(components: &[Component], wires: &[Wire]) -> SimulationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !components.iter().any(|c| c.kind.is_voltage_source()) {
        errors.push(diagnostics::NO_SOURCE_ERROR.to_string());
        return SimulationResult {
            errors,
            warnings,
            ..Default::default()
        };
    }

    let node_map = NodeMap::build(components, wires);
    if node_map.is_empty() {
        errors.push(diagnostics::NO_TOPOLOGY_ERROR.to_string());
        return SimulationResult {
            errors,
            warnings,
            ..Default::default()
        };
    }

    let ground = netlist::select_ground(components, &node_map);
    if !components.iter().any(|c| c.kind.is_ground()) {
        warnings.push(diagnostics::MISSING_GROUND_WARNING.to_string());
    }
    // Without a designated ground the first-discovered node is the
    // arbitrary 0 V reference.
    let ground = ground.unwrap_or(0);

    let (voltages, mut currents) = solver::solve(components, &node_map, ground);

    // Propagate component currents onto the wires leaving them, for
    // downstream flow visualization. Magnitude only; direction across a
    // component and its wires is not modeled.
    let wire_currents: Vec<(String, f64)> = wires
        .iter()
        .filter_map(|wire| {
            currents
                .get(&wire.from.component_id)
                .map(|&current| (wire.id.clone(), current))
        })
        .collect();
    currents.extend(wire_currents);

    let node_voltages: BTreeMap<String, f64> = node_map
        .nodes()
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id.clone(), voltages[index]))
        .collect();

    warnings.extend(diagnostics::sanity_warnings(&node_voltages, &currents));

    debug!(
        "simulated {} components, {} wires into {} nodes ({} errors, {} warnings)",
        components.len(),
        wires.len(),
        node_map.len(),
        errors.len(),
        warnings.len()
    );

    SimulationResult {
        node_voltages,
        component_currents: currents,
        errors,
        warnings,
    }
}

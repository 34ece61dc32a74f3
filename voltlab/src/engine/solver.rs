//! DC operating point: source voltage assignment and per-component
//! constitutive current rules.

use std::collections::BTreeMap;

use tracing::trace;

use crate::schema::{Component, ComponentKind};
use crate::value::parse_component_value;

use super::netlist::NodeMap;

/// Resistance assumed when a resistor carries no parseable value.
const DEFAULT_RESISTANCE: &str = "1k";
/// Ideal threshold model: conduction above 0.7 V through 100 Ω.
const FORWARD_VOLTAGE: f64 = 0.7;
const FORWARD_RESISTANCE: f64 = 100.0;
/// Nominal current reported for a voltage source. A fixed placeholder —
/// the solver does not compute true load current.
const SOURCE_NOMINAL_CURRENT: f64 = 0.1;
/// Currents at or below this magnitude are treated as no measurable
/// current and omitted from the result.
pub(crate) const CURRENT_EPSILON: f64 = 1e-10;

/// Write source voltages into `voltages`, indexed by node.
///
/// Each source assigns its magnitude locally: the positive terminal's
/// node gets +v when the negative terminal sits on the reference, the
/// mirror case gets -v, and with neither terminal grounded the positive
/// node still gets +v. No simultaneous system is assembled.
fn assign_source_voltages(
    components: &[Component],
    node_map: &NodeMap,
    ground: usize,
    voltages: &mut [f64],
) {
    for component in components {
        if !component.kind.is_voltage_source() || component.terminals.len() < 2 {
            continue;
        }
        let volts = parse_component_value(component.value_str().unwrap_or("0"));

        let negative = node_map.node_index(&component.id, &component.terminals[0].id);
        let positive = node_map.node_index(&component.id, &component.terminals[1].id);
        let (Some(negative), Some(positive)) = (negative, positive) else {
            continue;
        };

        if negative == ground {
            voltages[positive] = volts;
        } else if positive == ground {
            voltages[negative] = -volts;
        } else {
            voltages[positive] = volts;
        }
        trace!(
            "source {} drives {} V across n{}..n{}",
            component.id,
            volts,
            negative,
            positive
        );
    }
}

/// Current through a two-terminal component bridging a voltage
/// difference, by kind-specific rule.
fn constitutive_current(component: &Component, delta_v: f64) -> f64 {
    match component.kind {
        ComponentKind::Resistor => {
            let resistance =
                parse_component_value(component.value_str().unwrap_or(DEFAULT_RESISTANCE));
            if resistance > 0.0 {
                delta_v / resistance
            } else {
                0.0
            }
        }
        ComponentKind::Diode | ComponentKind::Led => {
            if delta_v > FORWARD_VOLTAGE {
                (delta_v - FORWARD_VOLTAGE) / FORWARD_RESISTANCE
            } else {
                0.0
            }
        }
        ComponentKind::Battery | ComponentKind::AcSource => SOURCE_NOMINAL_CURRENT,
        _ => 0.0,
    }
}

/// Resolve node voltages and the sparse component current map.
pub(crate) fn solve(
    components: &[Component],
    node_map: &NodeMap,
    ground: usize,
) -> (Vec<f64>, BTreeMap<String, f64>) {
    let mut voltages = vec![0.0; node_map.len()];
    assign_source_voltages(components, node_map, ground, &mut voltages);

    let mut currents = BTreeMap::new();
    for component in components {
        if component.terminals.len() < 2 {
            continue;
        }
        let first = node_map.node_index(&component.id, &component.terminals[0].id);
        let second = node_map.node_index(&component.id, &component.terminals[1].id);
        let (Some(first), Some(second)) = (first, second) else {
            continue;
        };

        let delta_v = voltages[second] - voltages[first];
        let current = constitutive_current(component, delta_v);
        if current.abs() > CURRENT_EPSILON {
            currents.insert(component.id.clone(), current);
        }
    }

    (voltages, currents)
}

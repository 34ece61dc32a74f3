//! Error and warning derivation for a resolved circuit.
//!
//! Errors block numeric interpretation but still yield a structurally
//! valid result; warnings ride along with a populated one. The engine
//! never raises for malformed circuit data.

use std::collections::BTreeMap;

pub const NO_SOURCE_ERROR: &str = "No voltage source found in circuit";
pub const NO_TOPOLOGY_ERROR: &str = "No valid circuit connections found";
pub const MISSING_GROUND_WARNING: &str =
    "No ground reference found - assuming arbitrary reference";

/// Heuristic sanity bounds for user feedback, not physical limits.
const HIGH_VOLTAGE_BOUND: f64 = 1000.0;
const HIGH_CURRENT_BOUND: f64 = 100.0;

/// Warnings for implausibly large resolved values.
pub(crate) fn sanity_warnings(
    node_voltages: &BTreeMap<String, f64>,
    currents: &BTreeMap<String, f64>,
) -> Vec<String> {
    let mut warnings = Vec::new();
    for (node, voltage) in node_voltages {
        if voltage.abs() > HIGH_VOLTAGE_BOUND {
            warnings.push(format!("Node {node} has high voltage: {voltage:.2}V"));
        }
    }
    for (id, current) in currents {
        if current.abs() > HIGH_CURRENT_BOUND {
            warnings.push(format!("Component {id} has high current: {current:.2}A"));
        }
    }
    warnings
}

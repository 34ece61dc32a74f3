//! VoltLab - circuit sketching and DC simulation library
//!
//! This library turns a schematic snapshot (components plus wire
//! connections) into node voltages, component currents, and a diagnostic
//! report, and provides the application plumbing around that engine:
//! an editor state store with undo/redo, JSON import/export, built-in
//! starter circuits, and report/walkthrough generators.
//!
//! # Quick Start
//!
//! ```
//! use voltlab::templates::template_by_id;
//! use voltlab::simulate;
//!
//! let circuit = template_by_id("simple-led").unwrap();
//! let result = simulate(&circuit.components, &circuit.wires);
//!
//! for (node, voltage) in &result.node_voltages {
//!     println!("{node}: {voltage} V");
//! }
//! assert!(result.errors.is_empty());
//! ```
//!
//! # Features
//!
//! - **Topology resolution**: wires partition terminals into electrical
//!   nodes via union-find
//! - **DC simulation**: per-kind constitutive rules, sanity diagnostics
//! - **Editor store**: command mutators, bounded snapshot history
//! - **Interchange**: versionless JSON documents, report generation

pub mod components;
pub mod core;
pub mod engine;
pub mod explain;
pub mod io;
pub mod report;
pub mod schema;
pub mod store;
pub mod templates;
pub mod value;

// Re-export main types
pub use crate::core::{SimulationOutcome, SimulationStats, VoltLabCore, VoltLabError};
pub use engine::simulate;
pub use io::CircuitDocument;
pub use schema::{
    Component, ComponentKind, Position, SimulationResult, Terminal, Wire, WireEndpoint,
};
pub use store::{CircuitStore, Tool};
pub use value::parse_component_value;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        simulate, CircuitDocument, CircuitStore, Component, ComponentKind, SimulationOutcome,
        SimulationResult, SimulationStats, VoltLabCore, VoltLabError, Wire,
    };
}

//! Simple simulation example: run a built-in circuit and print results.

use voltlab::prelude::*;
use voltlab::templates::template_by_id;

fn main() {
    let template_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "simple-led".to_string());

    let Some(circuit) = template_by_id(&template_id) else {
        eprintln!("Unknown template: {template_id}");
        eprintln!("Usage: cargo run --example simple_simulation [template-id]");
        std::process::exit(1);
    };

    let result = simulate(&circuit.components, &circuit.wires);

    println!("Simulating: {}", circuit.name);
    println!();

    for error in &result.errors {
        println!("ERROR: {error}");
    }
    for warning in &result.warnings {
        println!("WARNING: {warning}");
    }

    println!("Node voltages:");
    for (node, voltage) in &result.node_voltages {
        println!("  {node}: {voltage:.4} V");
    }

    println!("Currents:");
    for (id, current) in &result.component_currents {
        println!("  {id}: {current:.6} A");
    }
}

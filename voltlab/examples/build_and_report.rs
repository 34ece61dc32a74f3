//! Build a circuit through the editor store, simulate it, and print a
//! design report.

use voltlab::prelude::*;
use voltlab::report::generate_report;
use voltlab::WireEndpoint;

fn connect(id: &str, from: (&str, &str), to: (&str, &str)) -> Wire {
    Wire {
        id: id.to_string(),
        from: WireEndpoint {
            component_id: from.0.to_string(),
            terminal_id: from.1.to_string(),
        },
        to: WireEndpoint {
            component_id: to.0.to_string(),
            terminal_id: to.1.to_string(),
        },
        points: Vec::new(),
    }
}

fn main() {
    let mut store = CircuitStore::new();

    store.add_component(
        Component::with_id(ComponentKind::Battery, "battery-1", 200.0, 200.0)
            .with_label("V1")
            .with_value("5V"),
    );
    store.add_component(
        Component::with_id(ComponentKind::Resistor, "resistor-1", 350.0, 200.0)
            .with_label("R1")
            .with_value("330Ω"),
    );
    store.add_component(Component::with_id(ComponentKind::Ground, "ground-1", 350.0, 320.0));

    store.add_wire(connect(
        "wire-1",
        ("battery-1", "battery-1-t2"),
        ("resistor-1", "resistor-1-t1"),
    ));
    store.add_wire(connect(
        "wire-2",
        ("resistor-1", "resistor-1-t2"),
        ("ground-1", "ground-1-t1"),
    ));
    store.add_wire(connect(
        "wire-3",
        ("ground-1", "ground-1-t1"),
        ("battery-1", "battery-1-t1"),
    ));

    store.run_simulation();

    let report = generate_report(
        store.components(),
        store.wires(),
        store.simulation_result(),
        Some("Built with the VoltLab example."),
    );
    print!("{report}");
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voltlab::prelude::*;
use voltlab::WireEndpoint;

/// Battery feeding a series chain of resistors down to ground, sized to
/// the largest circuits the editor is expected to hold.
fn ladder_circuit(stages: usize) -> (Vec<Component>, Vec<Wire>) {
    let mut components = vec![
        Component::with_id(ComponentKind::Battery, "battery-1", 0.0, 0.0).with_value("9V"),
        Component::with_id(ComponentKind::Ground, "ground-1", 0.0, 400.0),
    ];
    let mut wires = Vec::new();

    let mut previous = ("battery-1".to_string(), "battery-1-t2".to_string());
    for stage in 0..stages {
        let id = format!("resistor-{stage}");
        components.push(
            Component::with_id(ComponentKind::Resistor, &id, 100.0 * stage as f64, 200.0)
                .with_value("220Ω"),
        );
        wires.push(Wire {
            id: format!("wire-in-{stage}"),
            from: WireEndpoint {
                component_id: previous.0.clone(),
                terminal_id: previous.1.clone(),
            },
            to: WireEndpoint {
                component_id: id.clone(),
                terminal_id: format!("{id}-t1"),
            },
            points: Vec::new(),
        });
        previous = (id.clone(), format!("{id}-t2"));
    }
    wires.push(Wire {
        id: "wire-out".to_string(),
        from: WireEndpoint {
            component_id: previous.0,
            terminal_id: previous.1,
        },
        to: WireEndpoint {
            component_id: "ground-1".to_string(),
            terminal_id: "ground-1-t1".to_string(),
        },
        points: Vec::new(),
    });
    wires.push(Wire {
        id: "wire-return".to_string(),
        from: WireEndpoint {
            component_id: "ground-1".to_string(),
            terminal_id: "ground-1-t1".to_string(),
        },
        to: WireEndpoint {
            component_id: "battery-1".to_string(),
            terminal_id: "battery-1-t1".to_string(),
        },
        points: Vec::new(),
    });

    (components, wires)
}

fn bench_simulate_small(c: &mut Criterion) {
    let (components, wires) = ladder_circuit(20);
    c.bench_function("simulate_ladder_20", |b| {
        b.iter(|| simulate(black_box(&components), black_box(&wires)));
    });
}

fn bench_simulate_large(c: &mut Criterion) {
    let (components, wires) = ladder_circuit(300);
    c.bench_function("simulate_ladder_300", |b| {
        b.iter(|| simulate(black_box(&components), black_box(&wires)));
    });
}

criterion_group!(benches, bench_simulate_small, bench_simulate_large);
criterion_main!(benches);

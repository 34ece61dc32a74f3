//! Simulation walkthrough generation.
//!
//! Turns a circuit snapshot plus its simulation result into a linear
//! sequence of human-readable steps, each pointing at the components and
//! wires it talks about. A read-only consumer of the engine's output.

use serde::{Deserialize, Serialize};

use crate::schema::{Component, ComponentKind, SimulationResult, Wire};
use crate::value::parse_component_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    Forward,
    Reverse,
}

/// Hint that a wire carries current, for flow animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentFlowHint {
    pub wire_id: String,
    pub direction: FlowDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStep {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub highlighted_components: Vec<String>,
    pub highlighted_wires: Vec<String>,
    pub current_flow: Vec<CurrentFlowHint>,
}

struct StepBuilder {
    steps: Vec<SimulationStep>,
}

impl StepBuilder {
    fn new() -> Self {
        StepBuilder { steps: Vec::new() }
    }

    fn push(
        &mut self,
        title: impl Into<String>,
        description: String,
        highlighted_components: Vec<String>,
        highlighted_wires: Vec<String>,
        current_flow: Vec<CurrentFlowHint>,
    ) {
        let id = self.steps.len();
        self.steps.push(SimulationStep {
            id,
            title: title.into(),
            description,
            highlighted_components,
            highlighted_wires,
            current_flow,
        });
    }
}

fn wires_touching<'a>(wires: &'a [Wire], component_id: &str) -> Vec<String> {
    wires
        .iter()
        .filter(|w| w.from.component_id == component_id || w.to.component_id == component_id)
        .map(|w| w.id.clone())
        .collect()
}

fn forward_hints(wire_ids: &[String]) -> Vec<CurrentFlowHint> {
    wire_ids
        .iter()
        .map(|id| CurrentFlowHint {
            wire_id: id.clone(),
            direction: FlowDirection::Forward,
        })
        .collect()
}

/// Build the step-by-step explanation of a simulated circuit.
pub fn generate_simulation_steps(
    components: &[Component],
    wires: &[Wire],
    result: &SimulationResult,
) -> Vec<SimulationStep> {
    let mut builder = StepBuilder::new();

    builder.push(
        "Circuit Overview",
        format!(
            "This circuit contains {} components and {} connections. \
             Let's analyze how current flows through this circuit.",
            components.len(),
            wires.len()
        ),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );

    let power_sources: Vec<&Component> = components
        .iter()
        .filter(|c| c.kind.is_voltage_source())
        .collect();
    if let Some(first) = power_sources.first() {
        builder.push(
            "Power Source Initialization",
            format!(
                "The circuit has {} power source(s). {} is supplied by {}.",
                power_sources.len(),
                first.value_str().filter(|v| !v.is_empty()).unwrap_or("Unknown voltage"),
                first.properties.label.as_deref().filter(|l| !l.is_empty()).unwrap_or("the source"),
            ),
            power_sources.iter().map(|c| c.id.clone()).collect(),
            Vec::new(),
            Vec::new(),
        );
    }

    let grounds: Vec<String> = components
        .iter()
        .filter(|c| c.kind.is_ground())
        .map(|c| c.id.clone())
        .collect();
    if !grounds.is_empty() {
        builder.push(
            "Ground Reference",
            "Ground symbols establish the 0V reference point for the circuit. \
             All voltages are measured relative to ground."
                .to_string(),
            grounds,
            Vec::new(),
            Vec::new(),
        );
    }

    let wires_with_current: Vec<String> = wires
        .iter()
        .filter(|w| result.component_currents.contains_key(&w.id))
        .map(|w| w.id.clone())
        .collect();
    if !wires_with_current.is_empty() {
        builder.push(
            "Current Path Established",
            format!(
                "Current flows through {} wire(s) in the circuit.",
                wires_with_current.len()
            ),
            Vec::new(),
            wires_with_current.clone(),
            forward_hints(&wires_with_current),
        );
    }

    for resistor in components.iter().filter(|c| c.kind == ComponentKind::Resistor) {
        let Some(&current) = result.component_currents.get(&resistor.id) else {
            continue;
        };
        let resistance = parse_component_value(resistor.value_str().unwrap_or("0"));
        let voltage_drop = current * resistance;
        builder.push(
            format!("Resistor Analysis: {}", resistor.display_label()),
            format!(
                "This resistor ({}) carries {:.3}A of current. By Ohm's Law (V=IR), \
                 the voltage drop across it is {:.3}V. Resistors limit current flow \
                 and dissipate energy as heat.",
                resistor.value_str().filter(|v| !v.is_empty()).unwrap_or("unknown"),
                current.abs(),
                voltage_drop.abs(),
            ),
            vec![resistor.id.clone()],
            wires_touching(wires, &resistor.id),
            Vec::new(),
        );
    }

    for diode in components
        .iter()
        .filter(|c| matches!(c.kind, ComponentKind::Diode | ComponentKind::Led))
    {
        let is_led = diode.kind == ComponentKind::Led;
        let device = if is_led { "LED" } else { "diode" };
        let current = result.component_currents.get(&diode.id).copied();
        match current {
            Some(current) if current.abs() > 0.001 => builder.push(
                format!("{} Analysis: {}", device, diode.display_label()),
                format!(
                    "This {device} is forward-biased with {:.3}A flowing through it. {}",
                    current.abs(),
                    if is_led {
                        "The LED emits light as current flows through it."
                    } else {
                        "The diode allows current to flow in one direction only."
                    },
                ),
                vec![diode.id.clone()],
                wires_touching(wires, &diode.id),
                Vec::new(),
            ),
            _ => builder.push(
                format!("{} Analysis: {}", device, diode.display_label()),
                format!(
                    "This {device} is reverse-biased or not conducting. No current flows \
                     through it, and it acts as an open circuit."
                ),
                vec![diode.id.clone()],
                Vec::new(),
                Vec::new(),
            ),
        }
    }

    for capacitor in components.iter().filter(|c| c.kind == ComponentKind::Capacitor) {
        builder.push(
            format!("Capacitor: {}", capacitor.display_label()),
            format!(
                "This capacitor ({}) stores electrical energy in an electric field. \
                 In DC steady-state analysis, it acts as an open circuit.",
                capacitor.value_str().filter(|v| !v.is_empty()).unwrap_or("unknown"),
            ),
            vec![capacitor.id.clone()],
            Vec::new(),
            Vec::new(),
        );
    }

    for transistor in components.iter().filter(|c| {
        matches!(c.kind, ComponentKind::TransistorNpn | ComponentKind::TransistorPnp)
    }) {
        builder.push(
            format!("Transistor: {}", transistor.display_label()),
            "This transistor acts as an electronic switch or amplifier. When the base \
             current is sufficient, it allows current to flow from collector to emitter."
                .to_string(),
            vec![transistor.id.clone()],
            Vec::new(),
            Vec::new(),
        );
    }

    if !result.node_voltages.is_empty() {
        let mut sorted: Vec<(&String, &f64)> = result.node_voltages.iter().collect();
        sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        let (highest_node, highest) = sorted[0];
        let (lowest_node, lowest) = sorted[sorted.len() - 1];
        builder.push(
            "Node Voltage Analysis",
            format!(
                "The circuit has {} unique voltage nodes. The highest voltage is \
                 {:.2}V at node {}, and the lowest is {:.2}V at node {}.",
                sorted.len(),
                highest,
                highest_node,
                lowest,
                lowest_node,
            ),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
    }

    builder.push(
        "Steady-State Condition",
        format!(
            "The circuit has reached steady-state where all voltages and currents are \
             constant. {}",
            if result.has_errors() {
                "However, there are errors that need attention."
            } else {
                "The circuit is operating normally."
            }
        ),
        components.iter().map(|c| c.id.clone()).collect(),
        wires_with_current.clone(),
        forward_hints(&wires_with_current),
    );

    builder.steps
}

/// One-string narration of where current flows and what each conducting
/// component is doing.
pub fn generate_current_flow_explanation(
    components: &[Component],
    wires: &[Wire],
    result: &SimulationResult,
) -> String {
    let mut explanation = String::from("Current Flow Analysis:\n\n");

    if let Some(source) = components.iter().find(|c| c.kind.is_voltage_source()) {
        let kind = if source.kind == ComponentKind::Battery {
            "DC battery"
        } else {
            "AC source"
        };
        explanation.push_str(&format!(
            "The circuit is powered by a {} providing {}.\n\n",
            kind,
            source.value_str().filter(|v| !v.is_empty()).unwrap_or("unknown voltage"),
        ));
    }

    let carrying: Vec<&Wire> = wires
        .iter()
        .filter(|w| result.component_currents.contains_key(&w.id))
        .collect();
    if !carrying.is_empty() {
        explanation.push_str("Current Path:\n");
        for (index, wire) in carrying.iter().enumerate() {
            let from = components
                .iter()
                .find(|c| c.id == wire.from.component_id)
                .map(Component::display_label)
                .unwrap_or("unknown");
            let to = components
                .iter()
                .find(|c| c.id == wire.to.component_id)
                .map(Component::display_label)
                .unwrap_or("unknown");
            let current = result.component_currents[&wire.id].abs();
            explanation.push_str(&format!(
                "{}. From {} to {} ({:.3}A)\n",
                index + 1,
                from,
                to,
                current
            ));
        }
        explanation.push('\n');
    }

    explanation.push_str("Component Behavior:\n");
    for component in components {
        let Some(&current) = result.component_currents.get(&component.id) else {
            continue;
        };
        if current.abs() <= 0.001 {
            continue;
        }
        let label = component.display_label();
        match component.kind {
            ComponentKind::Resistor => {
                let resistance = parse_component_value(component.value_str().unwrap_or("0"));
                let voltage_drop = (current * resistance).abs();
                explanation.push_str(&format!(
                    "- {} ({}): {:.3}V drop, {:.3}A current\n",
                    label,
                    component.value_str().unwrap_or(""),
                    voltage_drop,
                    current.abs()
                ));
            }
            ComponentKind::Led => {
                explanation.push_str(&format!(
                    "- {}: Forward-biased, emitting light with {:.3}A\n",
                    label,
                    current.abs()
                ));
            }
            ComponentKind::Diode => {
                explanation.push_str(&format!(
                    "- {}: Conducting {:.3}A in forward direction\n",
                    label,
                    current.abs()
                ));
            }
            ComponentKind::Ground | ComponentKind::Connector => {}
            _ => {
                explanation.push_str(&format!(
                    "- {}: Active with {:.3}A\n",
                    label,
                    current.abs()
                ));
            }
        }
    }

    explanation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulate;
    use crate::templates::template_by_id;

    #[test]
    fn test_steps_cover_the_simple_led_circuit() {
        let template = template_by_id("simple-led").unwrap();
        let result = simulate(&template.components, &template.wires);
        let steps = generate_simulation_steps(&template.components, &template.wires, &result);

        let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles[0], "Circuit Overview");
        assert!(titles.contains(&"Power Source Initialization"));
        assert!(titles.contains(&"Ground Reference"));
        assert!(titles.contains(&"Resistor Analysis: R1"));
        assert!(titles.last().unwrap().starts_with("Steady-State"));

        // Step ids are sequential.
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.id, index);
        }
    }

    #[test]
    fn test_steps_for_errored_circuit_mention_errors() {
        let result = simulate(&[], &[]);
        let steps = generate_simulation_steps(&[], &[], &result);
        let last = steps.last().unwrap();
        assert!(last.description.contains("errors that need attention"));
    }

    #[test]
    fn test_flow_explanation_names_the_source() {
        let template = template_by_id("simple-led").unwrap();
        let result = simulate(&template.components, &template.wires);
        let text =
            generate_current_flow_explanation(&template.components, &template.wires, &result);
        assert!(text.contains("DC battery"));
        assert!(text.contains("Current Path:"));
        assert!(text.contains("Component Behavior:"));
    }
}

//! Plain-text design report: circuit overview, component and wiring
//! listings, simulation results, and user notes.

use std::fmt::Write;

use chrono::Local;

use crate::schema::{Component, SimulationResult, Wire};

/// Currents smaller than this are left out of the report listing.
const REPORT_CURRENT_FLOOR: f64 = 1e-5;

fn display_label_for(id: &str, components: &[Component]) -> String {
    components
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.display_label().to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Render a report document for a circuit and (optionally) its latest
/// simulation result and free-text notes.
pub fn generate_report(
    components: &[Component],
    wires: &[Wire],
    result: Option<&SimulationResult>,
    notes: Option<&str>,
) -> String {
    let mut out = String::new();
    let rule = "─".repeat(60);

    writeln!(out, "Circuit Design Report").unwrap();
    writeln!(out, "{rule}").unwrap();
    writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S")).unwrap();
    writeln!(out).unwrap();

    let sources = components
        .iter()
        .filter(|c| c.kind.is_voltage_source())
        .count();
    writeln!(out, "Circuit Overview").unwrap();
    writeln!(out, "  Total Components: {}", components.len()).unwrap();
    writeln!(out, "  Wire Connections: {}", wires.len()).unwrap();
    writeln!(out, "  Power Sources:    {sources}").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "Component List").unwrap();
    if components.is_empty() {
        writeln!(out, "  (none)").unwrap();
    }
    for (index, component) in components.iter().enumerate() {
        let value = component.value_str().filter(|v| !v.is_empty()).unwrap_or("N/A");
        writeln!(
            out,
            "  {}. {} ({}) - {}",
            index + 1,
            component.display_label(),
            component.kind,
            value
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    writeln!(out, "Wiring Summary").unwrap();
    if wires.is_empty() {
        writeln!(out, "  (none)").unwrap();
    }
    for (index, wire) in wires.iter().enumerate() {
        let from = display_label_for(&wire.from.component_id, components);
        let to = display_label_for(&wire.to.component_id, components);
        writeln!(out, "  {}. {} -> {}", index + 1, from, to).unwrap();
    }

    if let Some(result) = result {
        writeln!(out).unwrap();
        writeln!(out, "Simulation Results").unwrap();

        if !result.errors.is_empty() {
            writeln!(out, "  Errors:").unwrap();
            for error in &result.errors {
                writeln!(out, "    - {error}").unwrap();
            }
        }
        if !result.warnings.is_empty() {
            writeln!(out, "  Warnings:").unwrap();
            for warning in &result.warnings {
                writeln!(out, "    - {warning}").unwrap();
            }
        }

        writeln!(out, "  Node Voltages:").unwrap();
        if result.node_voltages.is_empty() {
            writeln!(out, "    (none)").unwrap();
        }
        for (node, voltage) in &result.node_voltages {
            writeln!(out, "    {node}: {voltage:.4} V").unwrap();
        }

        writeln!(out, "  Component Currents:").unwrap();
        let mut any = false;
        for (id, current) in &result.component_currents {
            if current.abs() > REPORT_CURRENT_FLOOR {
                any = true;
                writeln!(
                    out,
                    "    {}: {:.6} A",
                    display_label_for(id, components),
                    current.abs()
                )
                .unwrap();
            }
        }
        if !any {
            writeln!(out, "    (none)").unwrap();
        }
    }

    if let Some(notes) = notes.filter(|n| !n.is_empty()) {
        writeln!(out).unwrap();
        writeln!(out, "User Notes").unwrap();
        for line in notes.lines() {
            writeln!(out, "  {line}").unwrap();
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "{rule}").unwrap();
    writeln!(out, "Generated by VoltLab").unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulate;
    use crate::templates::template_by_id;

    #[test]
    fn test_report_carries_all_sections() {
        let template = template_by_id("simple-led").unwrap();
        let result = simulate(&template.components, &template.wires);
        let report = generate_report(
            &template.components,
            &template.wires,
            Some(&result),
            Some("Checked against the lab handout."),
        );

        assert!(report.contains("Circuit Design Report"));
        assert!(report.contains("Total Components: 4"));
        assert!(report.contains("Power Sources:    1"));
        assert!(report.contains("R1 (resistor) - 220Ω"));
        assert!(report.contains("V1 -> R1"));
        assert!(report.contains("Node Voltages:"));
        assert!(report.contains("Component Currents:"));
        assert!(report.contains("User Notes"));
        assert!(report.contains("Checked against the lab handout."));
        assert!(report.contains("Generated by VoltLab"));
    }

    #[test]
    fn test_report_without_result_or_notes() {
        let report = generate_report(&[], &[], None, None);
        assert!(report.contains("Total Components: 0"));
        assert!(report.contains("(none)"));
        assert!(!report.contains("Simulation Results"));
        assert!(!report.contains("User Notes"));
    }

    #[test]
    fn test_tiny_currents_are_omitted() {
        let template = template_by_id("simple-led").unwrap();
        let mut result = simulate(&template.components, &template.wires);
        result
            .component_currents
            .insert("noise".to_string(), 1e-9);
        let report =
            generate_report(&template.components, &template.wires, Some(&result), None);
        assert!(!report.contains("noise"));
    }
}

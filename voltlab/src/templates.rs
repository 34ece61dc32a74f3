//! Built-in starter circuits.
//!
//! Templates use stable component and wire ids so they double as fixtures
//! for tests and documentation.

use serde::{Deserialize, Serialize};

use crate::schema::{Component, ComponentKind, Wire, WireEndpoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Basic,
    Analog,
    Digital,
    Power,
    Learning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub difficulty: TemplateDifficulty,
    pub components: Vec<Component>,
    pub wires: Vec<Wire>,
}

fn wire(id: &str, from: (&str, &str), to: (&str, &str)) -> Wire {
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

fn simple_led() -> CircuitTemplate {
    CircuitTemplate {
        id: "simple-led".to_string(),
        name: "Simple LED Circuit".to_string(),
        description: "Basic LED circuit with resistor and battery - perfect for beginners"
            .to_string(),
        category: TemplateCategory::Learning,
        difficulty: TemplateDifficulty::Beginner,
        components: vec![
            Component::with_id(ComponentKind::Battery, "battery-1", 200.0, 200.0)
                .with_label("V1")
                .with_value("9V"),
            Component::with_id(ComponentKind::Resistor, "resistor-1", 350.0, 200.0)
                .with_label("R1")
                .with_value("220Ω"),
            Component::with_id(ComponentKind::Led, "led-1", 500.0, 200.0).with_label("LED1"),
            Component::with_id(ComponentKind::Ground, "ground-1", 350.0, 320.0),
        ],
        wires: vec![
            wire("wire-1", ("battery-1", "battery-1-t2"), ("resistor-1", "resistor-1-t1")),
            wire("wire-2", ("resistor-1", "resistor-1-t2"), ("led-1", "led-1-t1")),
            wire("wire-3", ("led-1", "led-1-t2"), ("ground-1", "ground-1-t1")),
            wire("wire-4", ("ground-1", "ground-1-t1"), ("battery-1", "battery-1-t1")),
        ],
    }
}

fn voltage_divider() -> CircuitTemplate {
    CircuitTemplate {
        id: "voltage-divider".to_string(),
        name: "Voltage Divider".to_string(),
        description: "Two resistors in series with voltage source".to_string(),
        category: TemplateCategory::Basic,
        difficulty: TemplateDifficulty::Beginner,
        components: vec![
            Component::with_id(ComponentKind::Battery, "battery-1", 250.0, 200.0)
                .with_label("V1")
                .with_value("12V"),
            Component::with_id(ComponentKind::Resistor, "resistor-1", 400.0, 150.0)
                .with_label("R1")
                .with_value("1kΩ"),
            Component::with_id(ComponentKind::Resistor, "resistor-2", 400.0, 280.0)
                .with_label("R2")
                .with_value("1kΩ"),
            Component::with_id(ComponentKind::Ground, "ground-1", 250.0, 350.0),
        ],
        wires: vec![
            wire("wire-1", ("battery-1", "battery-1-t2"), ("resistor-1", "resistor-1-t1")),
            wire("wire-2", ("resistor-1", "resistor-1-t2"), ("resistor-2", "resistor-2-t1")),
            wire("wire-3", ("resistor-2", "resistor-2-t2"), ("ground-1", "ground-1-t1")),
            wire("wire-4", ("ground-1", "ground-1-t1"), ("battery-1", "battery-1-t1")),
        ],
    }
}

fn rc_filter() -> CircuitTemplate {
    CircuitTemplate {
        id: "rc-filter".to_string(),
        name: "RC Low-Pass Filter".to_string(),
        description: "Simple RC filter circuit".to_string(),
        category: TemplateCategory::Analog,
        difficulty: TemplateDifficulty::Intermediate,
        components: vec![
            Component::with_id(ComponentKind::AcSource, "ac-source-1", 250.0, 200.0)
                .with_label("V1")
                .with_value("5V"),
            Component::with_id(ComponentKind::Resistor, "resistor-1", 400.0, 200.0)
                .with_label("R1")
                .with_value("1kΩ"),
            Component::with_id(ComponentKind::Capacitor, "capacitor-1", 550.0, 260.0)
                .with_label("C1")
                .with_value("100µF"),
            Component::with_id(ComponentKind::Ground, "ground-1", 550.0, 380.0),
        ],
        wires: vec![
            wire("wire-1", ("ac-source-1", "ac-source-1-t2"), ("resistor-1", "resistor-1-t1")),
            wire("wire-2", ("resistor-1", "resistor-1-t2"), ("capacitor-1", "capacitor-1-t1")),
            wire("wire-3", ("capacitor-1", "capacitor-1-t2"), ("ground-1", "ground-1-t1")),
            wire("wire-4", ("ground-1", "ground-1-t1"), ("ac-source-1", "ac-source-1-t1")),
        ],
    }
}

fn transistor_switch() -> CircuitTemplate {
    CircuitTemplate {
        id: "transistor-switch".to_string(),
        name: "Transistor Switch".to_string(),
        description: "NPN transistor as a switch".to_string(),
        category: TemplateCategory::Analog,
        difficulty: TemplateDifficulty::Intermediate,
        components: vec![
            Component::with_id(ComponentKind::Battery, "battery-1", 250.0, 200.0)
                .with_label("V1")
                .with_value("9V"),
            Component::with_id(ComponentKind::Resistor, "resistor-1", 350.0, 260.0)
                .with_label("R1")
                .with_value("10kΩ"),
            Component::with_id(ComponentKind::TransistorNpn, "transistor-1", 470.0, 260.0)
                .with_label("Q1"),
            Component::with_id(ComponentKind::Resistor, "resistor-2", 470.0, 80.0)
                .with_label("R2")
                .with_value("220Ω"),
            Component::with_id(ComponentKind::Led, "led-1", 470.0, 160.0).with_label("LED1"),
            Component::with_id(ComponentKind::Ground, "ground-1", 250.0, 400.0),
        ],
        wires: vec![
            wire("wire-1", ("battery-1", "battery-1-t2"), ("resistor-2", "resistor-2-t1")),
            wire("wire-2", ("resistor-2", "resistor-2-t2"), ("led-1", "led-1-t1")),
            wire("wire-3", ("led-1", "led-1-t2"), ("transistor-1", "transistor-1-collector")),
            wire("wire-4", ("battery-1", "battery-1-t2"), ("resistor-1", "resistor-1-t1")),
            wire("wire-5", ("resistor-1", "resistor-1-t2"), ("transistor-1", "transistor-1-base")),
            wire("wire-6", ("transistor-1", "transistor-1-emitter"), ("ground-1", "ground-1-t1")),
            wire("wire-7", ("ground-1", "ground-1-t1"), ("battery-1", "battery-1-t1")),
        ],
    }
}

/// All built-in templates, beginner circuits first.
pub fn builtin_templates() -> Vec<CircuitTemplate> {
    vec![
        simple_led(),
        voltage_divider(),
        rc_filter(),
        transistor_switch(),
    ]
}

pub fn template_by_id(id: &str) -> Option<CircuitTemplate> {
    builtin_templates().into_iter().find(|t| t.id == id)
}

//! Component construction: kind-specific terminal layouts and placement.

use uuid::Uuid;

use crate::schema::{Component, ComponentKind, ComponentProperties, Position, Terminal};

fn terminal(component_id: &str, suffix: &str, x: f64, y: f64, name: &str) -> Terminal {
    Terminal {
        id: format!("{component_id}-{suffix}"),
        x,
        y,
        component_id: component_id.to_string(),
        name: name.to_string(),
    }
}

/// Terminal layout for a component kind, using the editor's standard
/// attachment offsets. Labels and text annotations have no terminals.
fn default_terminals(kind: ComponentKind, id: &str) -> Vec<Terminal> {
    match kind {
        ComponentKind::Resistor
        | ComponentKind::Capacitor
        | ComponentKind::Inductor
        | ComponentKind::Diode
        | ComponentKind::Led
        | ComponentKind::Battery
        | ComponentKind::AcSource
        | ComponentKind::SwitchSpst => vec![
            terminal(id, "t1", -40.0, 0.0, "T1"),
            terminal(id, "t2", 40.0, 0.0, "T2"),
        ],
        ComponentKind::TransistorNpn | ComponentKind::TransistorPnp | ComponentKind::Mosfet => {
            vec![
                terminal(id, "base", -40.0, 0.0, "Base"),
                terminal(id, "collector", 15.0, -40.0, "Collector"),
                terminal(id, "emitter", 15.0, 40.0, "Emitter"),
            ]
        }
        ComponentKind::SwitchSpdt => vec![
            terminal(id, "common", -40.0, 0.0, "Common"),
            terminal(id, "no", 40.0, -15.0, "NO"),
            terminal(id, "nc", 40.0, 15.0, "NC"),
        ],
        ComponentKind::Ic => vec![
            terminal(id, "pin1", -30.0, -20.0, "Pin1"),
            terminal(id, "pin2", -30.0, 0.0, "Pin2"),
            terminal(id, "pin3", -30.0, 20.0, "Pin3"),
            terminal(id, "pin4", 30.0, -20.0, "Pin4"),
            terminal(id, "pin5", 30.0, 0.0, "Pin5"),
            terminal(id, "pin6", 30.0, 20.0, "Pin6"),
        ],
        ComponentKind::Connector => vec![terminal(id, "t1", 0.0, 0.0, "T1")],
        ComponentKind::Ground => vec![terminal(id, "t1", 0.0, -20.0, "T1")],
        ComponentKind::Label | ComponentKind::Text => Vec::new(),
    }
}

impl Component {
    /// Create a component at a canvas position with a generated id.
    pub fn new(kind: ComponentKind, x: f64, y: f64) -> Self {
        let id = format!("{}-{}", kind.slug(), Uuid::new_v4());
        Self::with_id(kind, id, x, y)
    }

    /// Create a component with an explicit id. Templates and tests use
    /// this so their circuits have stable identities.
    pub fn with_id(kind: ComponentKind, id: impl Into<String>, x: f64, y: f64) -> Self {
        let id = id.into();
        let terminals = default_terminals(kind, &id);
        Component {
            id,
            kind,
            x,
            y,
            rotation: 0.0,
            properties: ComponentProperties::default(),
            terminals,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.properties.value = Some(value.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.properties.label = Some(label.into());
        self
    }

    /// World position of a terminal under the component's rotation.
    pub fn terminal_position(&self, terminal: &Terminal) -> Position {
        let rad = self.rotation.to_radians();
        let (sin, cos) = rad.sin_cos();
        Position {
            x: self.x + terminal.x * cos - terminal.y * sin,
            y: self.y + terminal.x * sin + terminal.y * cos,
        }
    }
}

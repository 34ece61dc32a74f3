use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Kind tag for a placed component. Serialized with the same kebab-case
/// names the editor's interchange format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Inductor,
    Diode,
    Led,
    Battery,
    AcSource,
    TransistorNpn,
    TransistorPnp,
    Mosfet,
    SwitchSpst,
    SwitchSpdt,
    Ic,
    Connector,
    Ground,
    Label,
    Text,
}

impl ComponentKind {
    /// True for components that impose a voltage on the circuit.
    pub fn is_voltage_source(&self) -> bool {
        matches!(self, ComponentKind::Battery | ComponentKind::AcSource)
    }

    pub fn is_ground(&self) -> bool {
        matches!(self, ComponentKind::Ground)
    }

    /// The kebab-case tag, as used in ids and the interchange format.
    pub fn slug(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "resistor",
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Inductor => "inductor",
            ComponentKind::Diode => "diode",
            ComponentKind::Led => "led",
            ComponentKind::Battery => "battery",
            ComponentKind::AcSource => "ac-source",
            ComponentKind::TransistorNpn => "transistor-npn",
            ComponentKind::TransistorPnp => "transistor-pnp",
            ComponentKind::Mosfet => "mosfet",
            ComponentKind::SwitchSpst => "switch-spst",
            ComponentKind::SwitchSpdt => "switch-spdt",
            ComponentKind::Ic => "ic",
            ComponentKind::Connector => "connector",
            ComponentKind::Ground => "ground",
            ComponentKind::Label => "label",
            ComponentKind::Text => "text",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Named connection point on a component. The x/y offset is local to the
/// component and only matters to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub component_id: String,
    pub name: String,
}

/// Free-form property bag. `label` and `value` are the fields the engine
/// and the report generator read; anything else round-trips untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub properties: ComponentProperties,
    #[serde(default)]
    pub terminals: Vec<Terminal>,
}

impl Component {
    /// Display label, falling back to the kind tag when unset.
    pub fn display_label(&self) -> &str {
        match self.properties.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => self.kind.slug(),
        }
    }

    /// The raw magnitude string, if any ("9V", "220Ω", "100µF").
    pub fn value_str(&self) -> Option<&str> {
        self.properties.value.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEndpoint {
    pub component_id: String,
    pub terminal_id: String,
}

/// A two-ended connection between terminals. Route points are
/// renderer-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wire {
    pub id: String,
    pub from: WireEndpoint,
    pub to: WireEndpoint,
    #[serde(default)]
    pub points: Vec<Position>,
}

/// Outcome of one simulation run.
///
/// `component_currents` is keyed by component id, plus wire ids that carry
/// a propagated current for flow visualization. Both maps are ordered so
/// two runs over the same circuit serialize identically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub node_voltages: BTreeMap<String, f64>,
    pub component_currents: BTreeMap<String, f64>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl SimulationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_slug_roundtrip() {
        let json = serde_json::to_string(&ComponentKind::AcSource).unwrap();
        assert_eq!(json, "\"ac-source\"");
        let back: ComponentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ComponentKind::AcSource);
        assert_eq!(ComponentKind::TransistorNpn.slug(), "transistor-npn");
    }

    #[test]
    fn test_component_deserializes_interchange_shape() {
        let json = r#"{
            "id": "resistor-1",
            "type": "resistor",
            "x": 350.0,
            "y": 200.0,
            "rotation": 0,
            "properties": { "label": "R1", "value": "220Ω" },
            "terminals": [
                { "id": "resistor-1-t1", "x": -40, "y": 0, "componentId": "resistor-1", "name": "T1" },
                { "id": "resistor-1-t2", "x": 40, "y": 0, "componentId": "resistor-1", "name": "T2" }
            ]
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.kind, ComponentKind::Resistor);
        assert_eq!(component.display_label(), "R1");
        assert_eq!(component.value_str(), Some("220Ω"));
        assert_eq!(component.terminals.len(), 2);
        assert_eq!(component.terminals[0].component_id, "resistor-1");
    }

    #[test]
    fn test_unknown_property_keys_are_kept() {
        let json = r#"{
            "id": "c1", "type": "capacitor", "x": 0, "y": 0,
            "properties": { "value": "100µF", "tolerance": "10%" }
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.properties.extra.get("tolerance").unwrap(), "10%");
    }

    #[test]
    fn test_display_label_falls_back_to_kind() {
        let component: Component = serde_json::from_str(
            r#"{ "id": "g1", "type": "ground", "x": 0, "y": 0 }"#,
        )
        .unwrap();
        assert_eq!(component.display_label(), "ground");
    }
}

//! Circuit interchange: components and wires serialized verbatim as JSON.
//!
//! The format carries no schema version; whatever the editor wrote is
//! what comes back. The simulation engine neither reads nor writes it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::VoltLabError;
use crate::schema::{Component, Position, Wire};
use crate::store::CircuitStore;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitDocument {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub wires: Vec<Wire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<Position>,
}

impl CircuitDocument {
    pub fn new(components: Vec<Component>, wires: Vec<Wire>) -> Self {
        CircuitDocument {
            components,
            wires,
            zoom: None,
            pan: None,
        }
    }

    /// Snapshot a store, viewport included, for project persistence.
    pub fn from_store(store: &CircuitStore) -> Self {
        CircuitDocument {
            components: store.components().to_vec(),
            wires: store.wires().to_vec(),
            zoom: Some(store.zoom()),
            pan: Some(store.pan()),
        }
    }

    pub fn to_json(&self) -> Result<String, VoltLabError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, VoltLabError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), VoltLabError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, VoltLabError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

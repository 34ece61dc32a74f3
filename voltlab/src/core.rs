//! File-level simulation API shared by the CLI and other front ends.
//! No editor or UI state dependencies.

use std::path::{Path, PathBuf};

use crate::engine;
use crate::io::CircuitDocument;
use crate::schema::SimulationResult;

#[derive(Debug, thiserror::Error)]
pub enum VoltLabError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for VoltLabError {
    fn from(e: serde_json::Error) -> Self {
        VoltLabError::Parse(e.to_string())
    }
}

/// Counts summarizing one simulation run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SimulationStats {
    pub nodes: usize,
    pub components: usize,
    pub wires: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Per-file simulation result with its summary counts.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub file: PathBuf,
    pub result: SimulationResult,
    pub stats: SimulationStats,
}

impl SimulationOutcome {
    pub fn has_errors(&self) -> bool {
        self.stats.errors > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.stats.warnings > 0
    }
}

/// Entry points for running the engine against stored circuits.
pub struct VoltLabCore;

impl VoltLabCore {
    /// Load a circuit file and simulate it.
    pub fn simulate_file(path: &Path) -> Result<SimulationOutcome, VoltLabError> {
        let document = CircuitDocument::load(path)?;
        let result = Self::simulate_document(&document);
        let stats = SimulationStats {
            nodes: result.node_voltages.len(),
            components: document.components.len(),
            wires: document.wires.len(),
            errors: result.errors.len(),
            warnings: result.warnings.len(),
        };
        Ok(SimulationOutcome {
            file: path.to_path_buf(),
            result,
            stats,
        })
    }

    /// Simulate an in-memory document.
    pub fn simulate_document(document: &CircuitDocument) -> SimulationResult {
        engine::simulate(&document.components, &document.wires)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let err = VoltLabCore::simulate_file(Path::new("no_such_circuit.json")).unwrap_err();
        assert!(matches!(err, VoltLabError::Io(_)));
    }

    #[test]
    fn test_empty_document_simulates_with_error_entry() {
        let document = CircuitDocument::default();
        let result = VoltLabCore::simulate_document(&document);
        assert!(result.has_errors());
        assert!(result.node_voltages.is_empty());
    }
}

//! Terminal graph resolution.
//!
//! Every terminal starts as its own electrical node; each wire merges the
//! nodes of its two endpoints. The merged partition is deduplicated into
//! canonical node ids (`n0`, `n1`, …) in discovery order.

use std::collections::HashMap;

use petgraph::unionfind::UnionFind;
use tracing::debug;

use crate::schema::{Component, Wire};

/// Key of a terminal inside the partition: `"{componentId}:{terminalId}"`.
pub fn terminal_key(component_id: &str, terminal_id: &str) -> String {
    format!("{component_id}:{terminal_id}")
}

/// One resolved electrical node: a maximal set of terminals held at the
/// same potential.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    pub id: String,
    pub members: Vec<String>,
}

/// The complete terminal-to-node partition of a circuit.
#[derive(Debug, Clone)]
pub struct NodeMap {
    nodes: Vec<ResolvedNode>,
    terminal_to_node: HashMap<String, usize>,
}

impl NodeMap {
    /// Partition all terminals into electrical nodes using the wires as
    /// union operations.
    ///
    /// Wires referencing a terminal that does not exist are skipped; a
    /// sketch in mid-edit routinely contains them and they must not abort
    /// a run.
    pub fn build(components: &[Component], wires: &[Wire]) -> Self {
        let mut keys: Vec<String> = Vec::new();
        let mut indices: HashMap<String, usize> = HashMap::new();
        for component in components {
            for terminal in &component.terminals {
                let key = terminal_key(&component.id, &terminal.id);
                indices.insert(key.clone(), keys.len());
                keys.push(key);
            }
        }

        let mut sets: UnionFind<usize> = UnionFind::new(keys.len());
        for wire in wires {
            let from = indices.get(&terminal_key(&wire.from.component_id, &wire.from.terminal_id));
            let to = indices.get(&terminal_key(&wire.to.component_id, &wire.to.terminal_id));
            match (from, to) {
                (Some(&a), Some(&b)) => {
                    sets.union(a, b);
                }
                _ => {
                    debug!("ignoring wire {} with unknown endpoint", wire.id);
                }
            }
        }

        // Canonical ids follow first-seen order of each set's
        // representative, walking terminals in input order.
        let labels = sets.into_labeling();
        let mut root_to_node: HashMap<usize, usize> = HashMap::new();
        let mut nodes: Vec<ResolvedNode> = Vec::new();
        let mut terminal_to_node: HashMap<String, usize> = HashMap::new();
        for (index, key) in keys.iter().enumerate() {
            let root = labels[index];
            let node_index = *root_to_node.entry(root).or_insert_with(|| {
                let node_index = nodes.len();
                nodes.push(ResolvedNode {
                    id: format!("n{node_index}"),
                    members: Vec::new(),
                });
                node_index
            });
            nodes[node_index].members.push(key.clone());
            terminal_to_node.insert(key.clone(), node_index);
        }

        NodeMap {
            nodes,
            terminal_to_node,
        }
    }

    /// True when the circuit exposed no terminals at all.
    pub fn is_empty(&self) -> bool {
        self.terminal_to_node.is_empty()
    }

    /// Number of distinct electrical nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[ResolvedNode] {
        &self.nodes
    }

    /// Node index a terminal resolved into.
    pub fn node_index(&self, component_id: &str, terminal_id: &str) -> Option<usize> {
        self.terminal_to_node
            .get(&terminal_key(component_id, terminal_id))
            .copied()
    }

    /// Canonical node id a terminal resolved into.
    pub fn node_id_of(&self, component_id: &str, terminal_id: &str) -> Option<&str> {
        self.node_index(component_id, terminal_id)
            .map(|index| self.nodes[index].id.as_str())
    }
}

/// Node of the first ground component's terminal, if any.
pub(crate) fn select_ground(components: &[Component], node_map: &NodeMap) -> Option<usize> {
    components
        .iter()
        .find(|c| c.kind.is_ground())
        .and_then(|ground| ground.terminals.first())
        .and_then(|terminal| node_map.node_index(&terminal.component_id, &terminal.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ComponentKind, Wire, WireEndpoint};

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

    fn resistor(id: &str) -> Component {
        Component::with_id(ComponentKind::Resistor, id, 0.0, 0.0)
    }

    #[test]
    fn test_unwired_terminals_stay_distinct() {
        let components = [resistor("r1"), resistor("r2")];
        let node_map = NodeMap::build(&components, &[]);
        assert_eq!(node_map.len(), 4);
        assert_ne!(
            node_map.node_index("r1", "r1-t1"),
            node_map.node_index("r1", "r1-t2")
        );
    }

    #[test]
    fn test_wire_merges_nodes_transitively() {
        let components = [resistor("r1"), resistor("r2"), resistor("r3")];
        let wires = [
            wire("w1", ("r1", "r1-t2"), ("r2", "r2-t1")),
            wire("w2", ("r2", "r2-t1"), ("r3", "r3-t1")),
        ];
        let node_map = NodeMap::build(&components, &wires);
        assert_eq!(node_map.len(), 4);
        let shared = node_map.node_index("r1", "r1-t2");
        assert_eq!(node_map.node_index("r2", "r2-t1"), shared);
        assert_eq!(node_map.node_index("r3", "r3-t1"), shared);
        assert_ne!(node_map.node_index("r1", "r1-t1"), shared);
    }

    #[test]
    fn test_partition_ignores_wire_order() {
        let components = [resistor("r1"), resistor("r2"), resistor("r3")];
        let mut wires = vec![
            wire("w1", ("r1", "r1-t2"), ("r2", "r2-t1")),
            wire("w2", ("r2", "r2-t1"), ("r3", "r3-t1")),
            wire("w3", ("r1", "r1-t1"), ("r3", "r3-t2")),
        ];
        let forward = NodeMap::build(&components, &wires);
        wires.reverse();
        let reversed = NodeMap::build(&components, &wires);

        assert_eq!(forward.len(), reversed.len());
        for component in &components {
            for terminal in &component.terminals {
                assert_eq!(
                    forward.node_index(&component.id, &terminal.id),
                    reversed.node_index(&component.id, &terminal.id),
                );
            }
        }
    }

    #[test]
    fn test_dangling_wires_are_ignored() {
        let components = [resistor("r1")];
        let wires = [
            wire("w1", ("r1", "r1-t1"), ("ghost", "ghost-t1")),
            wire("w2", ("nope", "nope-t1"), ("nope", "nope-t2")),
        ];
        let node_map = NodeMap::build(&components, &wires);
        assert_eq!(node_map.len(), 2);
    }

    #[test]
    fn test_ground_selection() {
        let components = [
            resistor("r1"),
            Component::with_id(ComponentKind::Ground, "gnd-1", 0.0, 0.0),
        ];
        let wires = [wire("w1", ("r1", "r1-t2"), ("gnd-1", "gnd-1-t1"))];
        let node_map = NodeMap::build(&components, &wires);
        let ground = select_ground(&components, &node_map).unwrap();
        assert_eq!(node_map.node_index("r1", "r1-t2"), Some(ground));

        let no_ground = [resistor("r1")];
        let node_map = NodeMap::build(&no_ground, &[]);
        assert!(select_ground(&no_ground, &node_map).is_none());
    }

    #[test]
    fn test_empty_circuit_has_no_nodes() {
        let node_map = NodeMap::build(&[], &[]);
        assert!(node_map.is_empty());
        assert_eq!(node_map.len(), 0);
    }
}

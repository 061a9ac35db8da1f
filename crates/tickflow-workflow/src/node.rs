use serde::{Deserialize, Serialize};

use tickflow_config::NodeDef;

/// A directed edge to a downstream node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
  /// Name of the target node. May be dangling; resolved at traversal time.
  pub to: String,
  /// Delay in seconds before the target becomes eligible.
  pub wait_secs: f64,
}

/// A validated workflow node.
///
/// Unlike `tickflow_config::NodeDef`, a `Node` knows its own name: the map
/// key it was declared under is stamped onto the record at construction.
/// Edges keep their declaration order, which breaks ties between equal
/// delays during traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub name: String,
  pub start: bool,
  pub edges: Vec<Edge>,
}

impl Node {
  /// Build a node from its definition, stamping the map key as its name.
  pub(crate) fn from_def(name: String, def: NodeDef) -> Self {
    let edges = def
      .edges
      .into_iter()
      .map(|(to, wait_secs)| Edge { to, wait_secs })
      .collect();

    Self {
      name,
      start: def.start,
      edges,
    }
  }
}

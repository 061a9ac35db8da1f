use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single node definition within a workflow.
///
/// `edges` maps downstream node names to the delay, in seconds, after which
/// the downstream node becomes eligible once this node has executed.
/// Insertion order is preserved and meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
  /// Whether this node is the workflow entry point.
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub start: bool,

  /// Outgoing edges: target node name -> wait time in seconds.
  #[serde(default)]
  pub edges: IndexMap<String, f64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn edges_preserve_declaration_order() {
    let def: NodeDef = serde_json::from_str(r#"{"edges": {"Z": 1, "A": 1, "M": 1}}"#).unwrap();

    let order: Vec<&str> = def.edges.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["Z", "A", "M"]);
  }

  #[test]
  fn start_defaults_to_false() {
    let def: NodeDef = serde_json::from_str(r#"{"edges": {}}"#).unwrap();
    assert!(!def.start);
  }
}

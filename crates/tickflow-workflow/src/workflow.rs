use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use tickflow_config::WorkflowDef;

use crate::error::WorkflowError;
use crate::node::Node;
use crate::validate;

/// A validated workflow ready for traversal.
///
/// Nodes keep their declaration order; start-node resolution scans it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
  nodes: IndexMap<String, Node>,
}

impl Workflow {
  /// Build and validate a workflow from its definition.
  ///
  /// Each node is stamped with its map key as its `name`, then the whole
  /// graph is validated. On failure no `Workflow` is produced.
  ///
  /// # Errors
  /// Returns `WorkflowError::CycleDetected` if a cycle exists among the
  /// graph's nodes (reachable from the start node or not), or
  /// `WorkflowError::NegativeWait` if any edge has a negative wait time.
  pub fn new(def: WorkflowDef) -> Result<Self, WorkflowError> {
    let nodes = def
      .nodes
      .into_iter()
      .map(|(name, node_def)| {
        let node = Node::from_def(name.clone(), node_def);
        (name, node)
      })
      .collect();

    let workflow = Self { nodes };
    workflow.validate()?;
    Ok(workflow)
  }

  /// Re-run structural validation.
  ///
  /// Construction already validates, so this never fails on a `Workflow`
  /// obtained from `new`; it exists so callers can assert the invariant
  /// and has no side effects on the graph.
  pub fn validate(&self) -> Result<(), WorkflowError> {
    validate::validate(self)
  }

  /// Look up a node by name.
  ///
  /// This is the single edge-target resolution routine: both validation
  /// and traversal go through it, so a dangling target is skipped by the
  /// validator and reported by the engine based on the same lookup.
  pub fn resolve(&self, name: &str) -> Option<&Node> {
    self.nodes.get(name)
  }

  /// The first node in stored order flagged as the start node, if any.
  ///
  /// If several nodes carry the flag the first one wins and the rest are
  /// ignored, matching the behavior of scanning a definition in
  /// declaration order.
  pub fn start_node(&self) -> Option<&Node> {
    self.nodes.values().find(|node| node.start)
  }

  /// Iterate all nodes in stored order.
  pub fn nodes(&self) -> impl Iterator<Item = &Node> {
    self.nodes.values()
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn def(json: &str) -> WorkflowDef {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn stamps_node_names_from_keys() {
    let workflow = Workflow::new(def(
      r#"{
        "A": { "start": true, "edges": { "B": 1 } },
        "B": { "edges": {} }
      }"#,
    ))
    .unwrap();

    let names: Vec<&str> = workflow.nodes().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
  }

  #[test]
  fn start_node_picks_first_in_stored_order() {
    let workflow = Workflow::new(def(
      r#"{
        "X": { "edges": {} },
        "Y": { "start": true, "edges": {} },
        "Z": { "start": true, "edges": {} }
      }"#,
    ))
    .unwrap();

    assert_eq!(workflow.start_node().unwrap().name, "Y");
  }

  #[test]
  fn no_start_node_resolves_to_none() {
    let workflow = Workflow::new(def(r#"{"A": {"edges": {}}}"#)).unwrap();
    assert!(workflow.start_node().is_none());
  }

  #[test]
  fn resolve_finds_existing_and_misses_dangling() {
    let workflow = Workflow::new(def(
      r#"{
        "A": { "start": true, "edges": { "B": 1, "ghost": 2 } },
        "B": { "edges": {} }
      }"#,
    ))
    .unwrap();

    assert!(workflow.resolve("B").is_some());
    assert!(workflow.resolve("ghost").is_none());
  }
}

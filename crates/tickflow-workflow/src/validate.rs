//! Structural validation: cycle detection and edge-weight checks.

use std::collections::HashSet;

use crate::error::WorkflowError;
use crate::node::Node;
use crate::workflow::Workflow;

/// Validate the whole graph.
///
/// Every node is used as a DFS root in turn, so cycles are found even when
/// they are unreachable from the start node. The on-path set is popped on
/// backtrack rather than accumulated, which makes shared subgraphs (e.g. a
/// diamond) legal at the cost of re-walking them from each root. Replacing
/// this with a single global-visited DFS would miss cycles the start node
/// cannot reach.
pub(crate) fn validate(workflow: &Workflow) -> Result<(), WorkflowError> {
  let mut on_path = HashSet::new();
  for node in workflow.nodes() {
    dfs(workflow, node, &mut on_path)?;
  }
  Ok(())
}

/// Depth-first walk from `node`.
///
/// `on_path` holds exactly the names on the current recursion stack: a node
/// is inserted on entry and removed before returning, so re-encountering a
/// name mid-walk can only mean a cycle.
fn dfs<'w>(
  workflow: &'w Workflow,
  node: &'w Node,
  on_path: &mut HashSet<&'w str>,
) -> Result<(), WorkflowError> {
  if !on_path.insert(node.name.as_str()) {
    return Err(WorkflowError::CycleDetected {
      node: node.name.clone(),
    });
  }

  for edge in &node.edges {
    if edge.wait_secs < 0.0 {
      return Err(WorkflowError::NegativeWait {
        node: edge.to.clone(),
        wait_secs: edge.wait_secs,
      });
    }

    // Dangling targets are a traversal-time anomaly, not a structural error.
    if let Some(target) = workflow.resolve(&edge.to) {
      dfs(workflow, target, on_path)?;
    }
  }

  on_path.remove(node.name.as_str());
  Ok(())
}

use thiserror::Error;

/// Structural errors detected at workflow construction.
///
/// These are fatal: construction fails outright and no engine can be built
/// over the offending graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
  /// A cycle exists among the nodes of the graph, detected at `node`.
  #[error("Cycle detected in the workflow involving node {node}")]
  CycleDetected { node: String },

  /// An edge carries a negative wait time.
  #[error("Negative wait time ({wait_secs} seconds) on edge to node {node}")]
  NegativeWait { node: String, wait_secs: f64 },
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::node::NodeDef;

/// An unvalidated workflow definition: node name -> node definition.
///
/// This is the shape of the JSON wire format:
///
/// ```json
/// {
///   "A": { "start": true, "edges": { "B": 8, "C": 2 } },
///   "B": { "edges": {} }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowDef {
  pub nodes: IndexMap<String, NodeDef>,
}

impl WorkflowDef {
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}

//! Tickflow Config
//!
//! This crate contains the serializable workflow definition types for tickflow.
//! These types represent a workflow as supplied by the outside world (a JSON
//! file, a database blob, an in-memory literal) before it has been validated.
//!
//! Declaration order is significant in two places and must survive
//! deserialization, so both maps are `IndexMap`s:
//! - the order of nodes in the workflow (start-node resolution scans it),
//! - the order of a node's outgoing edges (equal delays are broken by it).
//!
//! Validation lives in `tickflow-workflow`; these types accept anything.

mod node;
mod workflow;

pub use node::NodeDef;
pub use workflow::WorkflowDef;

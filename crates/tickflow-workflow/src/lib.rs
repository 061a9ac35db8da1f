//! Tickflow Workflow
//!
//! This crate provides the validated workflow representation for tickflow.
//! A `Workflow` is built from a `tickflow_config::WorkflowDef` and is only
//! handed out once structural validation has passed:
//!
//! - every node is stamped with its own map key as its `name`,
//! - the graph (restricted to edges whose targets exist) is acyclic,
//! - every edge wait time is non-negative.
//!
//! Dangling edge targets are deliberately *not* a validation failure; they
//! are skipped here and reported as anomalies at traversal time by
//! `tickflow-engine`.
//!
//! The workflow is read-only after construction. There is no way to obtain
//! a `Workflow` over an invalid graph.

mod error;
mod node;
mod validate;
mod workflow;

pub use error::WorkflowError;
pub use node::{Edge, Node};
pub use workflow::Workflow;

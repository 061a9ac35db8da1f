//! Tickflow Engine
//!
//! This crate provides the delay-driven traversal engine for tickflow.
//! It takes a validated `tickflow_workflow::Workflow` and simulates its
//! timed execution: from the start node, every outgoing edge fires
//! concurrently, sleeping for its weight before its target runs.
//!
//! # Architecture
//!
//! ```text
//! TraversalEngine<N: TraversalNotifier>
//! ├── new(config, workflow)            - engine that discards events
//! ├── with_notifier(config, workflow, notifier)
//! └── run()                            - traverse to completion
//!
//! process_node(node)
//! ├── emit NodeVisited                 - synchronous, before any edge
//! ├── per edge: sleep(weight) then recurse, all edges concurrently
//! └── completes when every branch (and sub-branch) has completed
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use tickflow_engine::{ChannelNotifier, EngineConfig, TraversalEngine};
//!
//! let engine = TraversalEngine::with_notifier(
//!     EngineConfig::default(),
//!     workflow,
//!     ChannelNotifier::new(sender),
//! );
//! engine.run().await;
//! ```

mod engine;
mod events;

pub use engine::{EngineConfig, TraversalEngine};
pub use events::{
  Anomaly, ChannelNotifier, ConsoleNotifier, NoopNotifier, TraversalEvent, TraversalNotifier,
};

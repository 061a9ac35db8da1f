//! Traversal events and notifiers for observability.
//!
//! Events are emitted during traversal to let consumers observe the run:
//! collect it in tests, stream it to a UI, print it to a terminal. The
//! engine calls the notifier synchronously at each emission point, so the
//! order in which a notifier sees events is the traversal order itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;

/// A non-fatal condition reported during traversal.
///
/// Anomalies never abort a run; the traversal continues over the valid
/// remainder of the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum Anomaly {
  /// No node in the workflow carries the start flag.
  #[error("No start node found in the workflow.")]
  NoStartNode,

  /// An edge points at a node name that does not exist in the workflow.
  #[error("Node {node} not found in the workflow.")]
  NodeNotFound { node: String },
}

/// Events emitted during workflow traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraversalEvent {
  /// A node was reached along some path and executed.
  ///
  /// A node reached along several paths is visited once per path, so the
  /// same name can appear any number of times in a run.
  NodeVisited { node: String },

  /// A non-fatal problem was reported.
  AnomalyReported { anomaly: Anomaly },
}

/// Trait for receiving traversal events.
///
/// Implementations decide what to do with events (collect, print, forward,
/// ignore). `notify` is called from the traversal task; implementations
/// must not block.
pub trait TraversalNotifier: Send + Sync {
  /// Called for each traversal event, in traversal order.
  fn notify(&self, event: TraversalEvent);
}

/// A no-op notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl TraversalNotifier for NoopNotifier {
  fn notify(&self, _event: TraversalEvent) {
    // Intentionally empty
  }
}

/// A notifier that sends events to an unbounded channel.
///
/// Use this to consume the event stream asynchronously or, in tests, to
/// collect it after the run. Unbounded so a slow consumer can never stall
/// the traversal; the volume is one event per visit, so growth is bounded
/// by the size of the fan-out tree.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<TraversalEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<TraversalEvent>) -> Self {
    Self { sender }
  }
}

impl TraversalNotifier for ChannelNotifier {
  fn notify(&self, event: TraversalEvent) {
    // Ignore send errors - receiver may have been dropped
    let _ = self.sender.send(event);
  }
}

/// A notifier that prints visits to stdout and anomalies to stderr.
///
/// This is the presentation the CLI driver uses: one node name per line as
/// it executes, problems on the error stream.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl TraversalNotifier for ConsoleNotifier {
  fn notify(&self, event: TraversalEvent) {
    match event {
      TraversalEvent::NodeVisited { node } => println!("{}", node),
      TraversalEvent::AnomalyReported { anomaly } => eprintln!("{}", anomaly),
    }
  }
}

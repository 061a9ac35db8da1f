//! Delay-driven workflow traversal.
//!
//! The engine walks the workflow from its start node, firing all outgoing
//! edges of a node concurrently. Each edge independently sleeps for its
//! weight before its target executes, and a node executes once per path it
//! is reached along - visits are never merged or memoized. The graph models
//! independent timers firing, not a single-execution task graph.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tickflow_workflow::{Node, Workflow};
use tracing::{info, warn};

use crate::events::{Anomaly, NoopNotifier, TraversalEvent, TraversalNotifier};

/// Configuration for the traversal engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
  /// Real-time length of one weight unit. Edge weights are specified in
  /// seconds, so the default tick is one second; drivers that only care
  /// about ordering can shrink it.
  pub tick: Duration,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      tick: Duration::from_secs(1),
    }
  }
}

/// The traversal engine.
///
/// Owns a validated workflow and traverses it on demand. Generic over
/// `N: TraversalNotifier` to allow different notification strategies; use
/// `TraversalEngine::new()` for an engine that discards events, or
/// `TraversalEngine::with_notifier()` to observe the run.
///
/// The whole traversal runs as a single cooperative task: branches suspend
/// only at their edge-delay sleep, and sibling branches are polled in
/// declared edge order. Together with the timer's FIFO firing for equal
/// deadlines this makes the emitted event order deterministic for a given
/// graph: a node always precedes its descendants, smaller cumulative delay
/// fires first, and ties resolve in declaration order.
pub struct TraversalEngine<N: TraversalNotifier = NoopNotifier> {
  config: EngineConfig,
  workflow: Workflow,
  notifier: N,
}

impl TraversalEngine<NoopNotifier> {
  /// Create an engine that discards traversal events.
  pub fn new(config: EngineConfig, workflow: Workflow) -> Self {
    Self::with_notifier(config, workflow, NoopNotifier)
  }
}

impl<N: TraversalNotifier> TraversalEngine<N> {
  /// Create an engine with a custom notifier.
  pub fn with_notifier(config: EngineConfig, workflow: Workflow, notifier: N) -> Self {
    Self {
      config,
      workflow,
      notifier,
    }
  }

  /// Get a reference to the workflow.
  pub fn workflow(&self) -> &Workflow {
    &self.workflow
  }

  /// Run the traversal to completion.
  ///
  /// Completes once every branch of the fan-out tree has finished. The run
  /// is observable only through the notifier. A workflow with no start
  /// node completes immediately with zero visits and a single reported
  /// anomaly - that is a successful run, not an error.
  pub async fn run(&self) {
    let Some(start) = self.workflow.start_node() else {
      self.report(Anomaly::NoStartNode);
      return;
    };

    info!(start = %start.name, "traversal_started");
    self.process_node(start).await;
    info!(start = %start.name, "traversal_completed");
  }

  /// Visit `node`, then fan out over its edges concurrently.
  ///
  /// The visit is emitted synchronously before any edge is considered.
  /// The returned future resolves only once every branch spawned here,
  /// including everything those branches spawn in turn, has completed.
  /// Boxed because async recursion needs an indirection.
  fn process_node<'a>(&'a self, node: &'a Node) -> BoxFuture<'a, ()> {
    async move {
      info!(node = %node.name, "node_visited");
      self.notifier.notify(TraversalEvent::NodeVisited {
        node: node.name.clone(),
      });

      let mut branches = Vec::with_capacity(node.edges.len());
      for edge in &node.edges {
        match self.workflow.resolve(&edge.to) {
          Some(target) => branches.push(self.process_edge(target, edge.wait_secs)),
          // Dangling edge: report and abandon the branch, the run goes on.
          None => self.report(Anomaly::NodeNotFound {
            node: edge.to.clone(),
          }),
        }
      }

      // join_all polls branches in declared order within this one task, so
      // timers are registered in declared order and equal deadlines fire
      // earliest-declared first.
      futures::future::join_all(branches).await;
    }
    .boxed()
  }

  /// Sleep out the edge delay, then continue the traversal at `target`.
  async fn process_edge(&self, target: &Node, wait_secs: f64) {
    // wait_secs was validated non-negative at workflow construction.
    tokio::time::sleep(self.config.tick.mul_f64(wait_secs)).await;
    self.process_node(target).await;
  }

  fn report(&self, anomaly: Anomaly) {
    warn!(%anomaly, "traversal_anomaly");
    self.notifier.notify(TraversalEvent::AnomalyReported { anomaly });
  }
}

#[cfg(test)]
mod tests {
  use tickflow_config::WorkflowDef;
  use tokio::sync::mpsc;

  use super::*;
  use crate::events::ChannelNotifier;

  async fn run_and_collect(json: &str) -> Vec<TraversalEvent> {
    let def: WorkflowDef = serde_json::from_str(json).unwrap();
    let workflow = Workflow::new(def).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let engine =
      TraversalEngine::with_notifier(EngineConfig::default(), workflow, ChannelNotifier::new(tx));
    engine.run().await;
    drop(engine);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
      events.push(event);
    }
    events
  }

  #[tokio::test(start_paused = true)]
  async fn no_start_node_reports_one_anomaly_and_no_visits() {
    let events = run_and_collect(r#"{"A": {"edges": {}}, "B": {"edges": {}}}"#).await;

    assert_eq!(
      events,
      vec![TraversalEvent::AnomalyReported {
        anomaly: Anomaly::NoStartNode
      }]
    );
  }

  #[tokio::test(start_paused = true)]
  async fn first_start_flag_in_stored_order_wins() {
    let events = run_and_collect(
      r#"{
        "X": { "edges": {} },
        "Y": { "start": true, "edges": {} },
        "Z": { "start": true, "edges": {} }
      }"#,
    )
    .await;

    assert_eq!(
      events,
      vec![TraversalEvent::NodeVisited {
        node: "Y".to_string()
      }]
    );
  }

  #[tokio::test(start_paused = true)]
  async fn start_node_is_visited_without_delay() {
    let started = tokio::time::Instant::now();
    let events = run_and_collect(r#"{"A": { "start": true, "edges": {} }}"#).await;

    assert_eq!(
      events,
      vec![TraversalEvent::NodeVisited {
        node: "A".to_string()
      }]
    );
    assert_eq!(started.elapsed(), Duration::ZERO);
  }

  #[tokio::test(start_paused = true)]
  async fn zero_weight_edges_still_visit_parent_first() {
    let events = run_and_collect(
      r#"{
        "A": { "start": true, "edges": { "B": 0 } },
        "B": { "edges": { "C": 0 } },
        "C": { "edges": {} }
      }"#,
    )
    .await;

    let visits: Vec<&str> = events
      .iter()
      .map(|event| match event {
        TraversalEvent::NodeVisited { node } => node.as_str(),
        other => panic!("unexpected event: {:?}", other),
      })
      .collect();
    assert_eq!(visits, vec!["A", "B", "C"]);
  }
}

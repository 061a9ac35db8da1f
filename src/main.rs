use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tickflow_config::WorkflowDef;
use tickflow_engine::{ConsoleNotifier, EngineConfig, TraversalEngine};
use tickflow_workflow::Workflow;

/// Tickflow - a timed workflow traversal simulator
#[derive(Parser)]
#[command(name = "tickflow")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run a workflow, printing each node as it executes
  Run {
    /// Path to the workflow file (JSON)
    workflow_file: PathBuf,

    /// Real-time length of one weight unit, in milliseconds (default: 1000)
    #[arg(long)]
    tick_ms: Option<u64>,
  },

  /// Validate a workflow without running it
  Validate {
    /// Path to the workflow file (JSON)
    workflow_file: PathBuf,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_target(false)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Run {
      workflow_file,
      tick_ms,
    }) => {
      run_workflow(workflow_file, tick_ms)?;
    }
    Some(Commands::Validate { workflow_file }) => {
      let workflow = load_workflow(&workflow_file)?;
      eprintln!("Workflow is valid ({} nodes)", workflow.len());
    }
    None => {
      println!("tickflow - use --help to see available commands");
    }
  }

  Ok(())
}

fn run_workflow(workflow_file: PathBuf, tick_ms: Option<u64>) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { run_workflow_async(workflow_file, tick_ms).await })
}

async fn run_workflow_async(workflow_file: PathBuf, tick_ms: Option<u64>) -> Result<()> {
  let workflow = load_workflow(&workflow_file)?;
  eprintln!("Loaded workflow with {} nodes", workflow.len());

  let config = EngineConfig {
    tick: tick_ms.map_or_else(|| Duration::from_secs(1), Duration::from_millis),
  };

  let engine = TraversalEngine::with_notifier(config, workflow, ConsoleNotifier);
  engine.run().await;

  Ok(())
}

fn load_workflow(workflow_file: &PathBuf) -> Result<Workflow> {
  let content = std::fs::read_to_string(workflow_file)
    .with_context(|| format!("failed to read workflow file: {}", workflow_file.display()))?;

  let def: WorkflowDef = serde_json::from_str(&content)
    .with_context(|| format!("failed to parse workflow file: {}", workflow_file.display()))?;

  Workflow::new(def).context("workflow failed validation")
}

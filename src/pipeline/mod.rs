//! End-to-end orchestration: request -> specification -> dataset script ->
//! sandbox -> visualization script -> sandbox.
//!
//! The sequence is fixed; each stage's input is the previous stage's output,
//! so no reordering is possible. Stage success is an explicit precondition
//! for the stage that consumes its side effect: when dataset generation does
//! not succeed, the visualization stage is not invoked and its slot in the
//! outcome carries the `Skipped` status instead of a guess at a missing
//! artifact.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::agents;
use crate::llm::TextGenerator;
use crate::sandbox::{ExecutionResult, Sandbox};

/// Everything one pipeline run produced. Both execution slots are always
/// present; callers inspect the statuses, the pipeline does not interpret
/// them further.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub specification: String,
    pub dataset_script: String,
    pub viz_script: Option<String>,
    pub dataset: ExecutionResult,
    pub visualization: ExecutionResult,
}

pub struct Pipeline<'a, G> {
    client: &'a G,
    sandbox: Sandbox,
    dataset_path: PathBuf,
}

impl<'a, G: TextGenerator> Pipeline<'a, G> {
    pub fn new(client: &'a G, sandbox: Sandbox, dataset_path: impl Into<PathBuf>) -> Self {
        Self { client, sandbox, dataset_path: dataset_path.into() }
    }

    /// Drives one request through all stages. Model-boundary faults abort
    /// the run; script outcomes never do.
    pub async fn run(&self, request: &str) -> Result<PipelineOutcome> {
        let dataset_file = self.dataset_path.display().to_string();

        let specification =
            agents::spec::format_request(self.client, request, &dataset_file).await?;
        let dataset_script =
            agents::dataset::generate_script(self.client, &specification, &dataset_file).await?;
        let dataset = self.sandbox.execute(&dataset_script).await?;

        // The artifact only exists after a successful run; without it there
        // are no columns to sample for the visualization prompt.
        if !dataset.is_success() {
            return Ok(PipelineOutcome {
                specification,
                dataset_script,
                viz_script: None,
                dataset,
                visualization: ExecutionResult::skipped(),
            });
        }

        let viz_script = agents::viz::generate_script(self.client, &self.dataset_path).await?;
        let visualization = self.sandbox.execute(&viz_script).await?;

        Ok(PipelineOutcome {
            specification,
            dataset_script,
            viz_script: Some(viz_script),
            dataset,
            visualization,
        })
    }
}

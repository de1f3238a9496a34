// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::time::Instant;

use crate::config::{load_global_config, ConfigRoot};
use crate::engine::RunExecutor;
use crate::errors::PipelineError;
use crate::modules::ModuleRegistry;
use crate::observability::messages::engine::{PipelineStarted, RunCompleted, RunStarted};

/// Execute the pipeline described by the global configuration at
/// `global_config_path`.
///
/// Loads the global configuration once, derives the configuration root from
/// its location, and executes each named run in declared order. Fail-fast: a
/// failure in run *i* aborts the remaining runs and propagates wrapped with
/// the run's name.
pub async fn run(
    global_config_path: &Path,
    registry: &ModuleRegistry,
) -> Result<(), PipelineError> {
    let global_config = load_global_config(global_config_path)?;
    let root = ConfigRoot::beside_global_config(global_config_path);

    tracing::info!(
        "{}",
        PipelineStarted {
            config_path: &global_config_path.display().to_string(),
            run_count: global_config.runs.len(),
        }
    );

    let executor = RunExecutor::new(&root, registry);

    for run_name in &global_config.runs {
        let run_config_path = root.run_config_path(run_name);
        let started = Instant::now();

        tracing::info!(
            "{}",
            RunStarted {
                run: run_name,
                config_path: &run_config_path,
            }
        );

        executor
            .execute(&run_config_path)
            .await
            .map_err(|source| PipelineError::Run {
                run: run_name.clone(),
                source,
            })?;

        tracing::info!(
            "{}",
            RunCompleted {
                run: run_name,
                duration: started.elapsed(),
            }
        );
    }

    Ok(())
}

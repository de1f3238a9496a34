// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::time::Instant;

use crate::config::{load_run_config, ConfigRoot};
use crate::errors::RunError;
use crate::modules::ModuleRegistry;
use crate::observability::messages::step::{StepCompleted, StepFailed, StepStarted};

/// Executes one run configuration: an ordered sequence of steps.
///
/// For each step, in declared order, the executor constructs the step's
/// configuration path by convention, resolves the step's module through the
/// registry, and awaits the module's entry point with that path. The first
/// failure aborts the remaining steps and propagates with step context
/// attached; there is no rollback and no retry.
pub struct RunExecutor<'a> {
    root: &'a ConfigRoot,
    registry: &'a ModuleRegistry,
}

impl<'a> RunExecutor<'a> {
    pub fn new(root: &'a ConfigRoot, registry: &'a ModuleRegistry) -> Self {
        Self { root, registry }
    }

    /// Execute the run described by the configuration at `run_config_path`.
    pub async fn execute(&self, run_config_path: &Path) -> Result<(), RunError> {
        let run_config = load_run_config(run_config_path)?;

        for (index, step) in run_config.steps.iter().enumerate() {
            let step_config_path = self.root.step_config_path(&step.module, &step.config);

            tracing::info!(
                "{}",
                StepStarted {
                    index,
                    module: &step.module,
                    config_path: &step_config_path,
                }
            );

            let module =
                self.registry
                    .resolve(&step.module)
                    .map_err(|source| RunError::Resolve {
                        index,
                        module: step.module.clone(),
                        source,
                    })?;

            let started = Instant::now();
            match module.run(&step_config_path).await {
                Ok(()) => {
                    tracing::info!(
                        "{}",
                        StepCompleted {
                            index,
                            module: &step.module,
                            duration: started.elapsed(),
                        }
                    );
                }
                Err(source) => {
                    tracing::error!(
                        "{}",
                        StepFailed {
                            index,
                            module: &step.module,
                            error: &source,
                        }
                    );
                    return Err(RunError::Step {
                        index,
                        module: step.module.clone(),
                        source,
                    });
                }
            }
        }

        Ok(())
    }
}

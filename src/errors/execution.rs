// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for pipeline and run execution.
//!
//! Failures are never handled locally: the run executor attaches step
//! context, the program entry attaches run context, and the result reaches
//! the process boundary unchanged.

use thiserror::Error;

use crate::errors::{ConfigError, ResolveError};

/// A failure within the execution of a single run.
///
/// Carries enough context (step index, module identifier) to diagnose which
/// step of the run failed. The run name itself is attached one level up, in
/// [`PipelineError`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The run configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A step's module identifier could not be resolved to an implementation.
    #[error("step {index} ('{module}'): {source}")]
    Resolve {
        index: usize,
        module: String,
        #[source]
        source: ResolveError,
    },

    /// A step implementation ran and failed. The failure is opaque to the
    /// engine and propagated unchanged.
    #[error("step {index} ('{module}') failed")]
    Step {
        index: usize,
        module: String,
        #[source]
        source: anyhow::Error,
    },
}

/// A failure of the whole pipeline invocation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The global configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A run failed; the remaining runs were not executed.
    #[error("run '{run}': {source}")]
    Run {
        run: String,
        #[source]
        source: RunError,
    },
}

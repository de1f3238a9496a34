// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline and run lifecycle events.

use std::fmt::{Display, Formatter};

/// Pipeline execution started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineStarted<'a> {
    pub config_path: &'a str,
    pub run_count: usize,
}

impl Display for PipelineStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline from {}: {} run(s)",
            self.config_path, self.run_count
        )
    }
}

/// Run execution started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunStarted<'a> {
    pub run: &'a str,
    pub config_path: &'a std::path::Path,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Run '{}' started: config={}",
            self.run,
            self.config_path.display()
        )
    }
}

/// Run execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunCompleted<'a> {
    pub run: &'a str,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Run '{}' completed in {:?}", self.run, self.duration)
    }
}

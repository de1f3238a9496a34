// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for step resolution and execution events.

use std::fmt::{Display, Formatter};
use std::path::Path;

/// Step execution started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StepStarted<'a> {
    pub index: usize,
    pub module: &'a str,
    pub config_path: &'a Path,
}

impl Display for StepStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step {} ('{}') started: config={}",
            self.index,
            self.module,
            self.config_path.display()
        )
    }
}

/// Step execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StepCompleted<'a> {
    pub index: usize,
    pub module: &'a str,
    pub duration: std::time::Duration,
}

impl Display for StepCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step {} ('{}') completed in {:?}",
            self.index, self.module, self.duration
        )
    }
}

/// Step execution failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct StepFailed<'a> {
    pub index: usize,
    pub module: &'a str,
    pub error: &'a dyn std::fmt::Display,
}

impl Display for StepFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step {} ('{}') failed: {}",
            self.index, self.module, self.error
        )
    }
}

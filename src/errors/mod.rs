// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod resolve;

pub use config::ConfigError;
pub use execution::{PipelineError, RunError};
pub use resolve::ResolveError;

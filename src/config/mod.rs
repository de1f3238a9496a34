// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod paths;

pub mod consts;

pub use loader::{load_global_config, load_run_config, GlobalConfig, RunConfig, StepSpec};
pub use paths::ConfigRoot;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::ConfigError;

/// Top-level configuration for the pipeline engine.
///
/// Names the runs to execute, in order. Loaded once per process invocation
/// and never mutated afterwards.
///
/// # Example
/// ```yaml
/// runs:
///   - nightly
///   - weekly
/// ```
#[derive(Debug, Deserialize)]
pub struct GlobalConfig {
    pub runs: Vec<String>,
}

/// Configuration for a single run: an ordered sequence of steps.
///
/// Loaded fresh from storage each time the run is executed. Step order is
/// execution order; duplicates are permitted (the same module may appear
/// several times with different configs).
///
/// # Example
/// ```yaml
/// steps:
///   - module: ingest
///     config: default
///   - module: report
///     config: summary
/// ```
#[derive(Debug, Deserialize)]
pub struct RunConfig {
    pub steps: Vec<StepSpec>,
}

/// One step of a run.
///
/// `module` identifies the implementation to invoke; `config` identifies the
/// configuration fragment to hand it. Together with the configuration root
/// they deterministically yield the step's config path. The engine never
/// inspects that resource's content.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StepSpec {
    pub module: String,
    pub config: String,
}

/// Load the global configuration from a YAML file.
pub fn load_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
    load_yaml(path)
}

/// Load a run configuration from a YAML file.
pub fn load_run_config(path: &Path) -> Result<RunConfig, ConfigError> {
    load_yaml(path)
}

/// Load and deserialize a YAML configuration file.
///
/// Parsing happens in two phases so that malformed YAML and well-formed YAML
/// of the wrong shape surface as distinct errors: the text is first parsed
/// into a generic value, then deserialized into the target type.
fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    serde_yaml::from_value(value).map_err(|source| ConfigError::Schema {
        path: path.to_path_buf(),
        reason: source.to_string(),
    })
}

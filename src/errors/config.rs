// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading engine-visible configuration resources.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a global or run configuration file.
///
/// The variants separate the three failure kinds a caller may want to
/// distinguish: the resource is absent, the resource is not valid YAML, or
/// the YAML does not have the required shape. Step configuration files are
/// never loaded through this path; their interpretation belongs to the step
/// implementation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration resource does not exist.
    #[error("configuration not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration resource exists but could not be read.
    #[error("failed to read configuration {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration resource is not well-formed YAML.
    #[error("malformed configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration parsed but a required field is absent or has the
    /// wrong shape.
    #[error("invalid configuration {path}: {reason}")]
    Schema { path: PathBuf, reason: String },
}

impl ConfigError {
    /// The path of the configuration resource the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::NotFound { path, .. } => path,
            ConfigError::Read { path, .. } => path,
            ConfigError::Parse { path, .. } => path,
            ConfigError::Schema { path, .. } => path,
        }
    }
}

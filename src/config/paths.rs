// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use crate::config::consts::{CONFIG_DIR, CONFIG_EXT, MODULES_DIR, RUN_DIR};

/// Newtype wrapper for the configuration root directory.
///
/// All run and step configuration paths are derived from this root by a
/// fixed naming convention; no registry or manifest is consulted. Path
/// construction is a pure function of the root and the identifiers, so the
/// same identifiers always yield the same paths.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRoot(PathBuf);

impl ConfigRoot {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self(root.into())
    }

    /// Derive the configuration root from the location of the global config
    /// file: the `cfg` directory beside it.
    pub fn beside_global_config(global_config_path: &Path) -> Self {
        let base = global_config_path.parent().unwrap_or_else(|| Path::new(""));
        Self(base.join(CONFIG_DIR))
    }

    /// Path of a run configuration: `<root>/run/<run>.yml`.
    pub fn run_config_path(&self, run: &str) -> PathBuf {
        self.0.join(RUN_DIR).join(format!("{run}.{CONFIG_EXT}"))
    }

    /// Path of a step configuration: `<root>/modules/<module>/<config>.yml`.
    pub fn step_config_path(&self, module: &str, config: &str) -> PathBuf {
        self.0
            .join(MODULES_DIR)
            .join(module)
            .join(format!("{config}.{CONFIG_EXT}"))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

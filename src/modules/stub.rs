// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::traits::StepModule;

/// A step module that records every invocation for testing ordering and
/// dispatch behavior.
pub struct RecordingModule {
    name: &'static str,
    log: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl RecordingModule {
    pub fn new(name: &'static str, log: Arc<Mutex<Vec<(String, PathBuf)>>>) -> Self {
        Self { name, log }
    }
}

#[async_trait::async_trait]
impl StepModule for RecordingModule {
    async fn run(&self, config_path: &Path) -> anyhow::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push((self.name.to_string(), config_path.to_path_buf()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// A step module that always fails for testing fail-fast behavior.
pub struct FailingModule {
    name: &'static str,
    log: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl FailingModule {
    pub fn new(name: &'static str, log: Arc<Mutex<Vec<(String, PathBuf)>>>) -> Self {
        Self { name, log }
    }
}

#[async_trait::async_trait]
impl StepModule for FailingModule {
    async fn run(&self, config_path: &Path) -> anyhow::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push((self.name.to_string(), config_path.to_path_buf()));
        anyhow::bail!("simulated step failure in '{}'", self.name)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// A minimal do-nothing step module.
pub struct StubModule {
    name: &'static str,
}

impl StubModule {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[async_trait::async_trait]
impl StepModule for StubModule {
    async fn run(&self, _config_path: &Path) -> anyhow::Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

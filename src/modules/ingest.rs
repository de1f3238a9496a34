use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use crate::traits::StepModule;

/// Configuration for the ingest step module.
#[derive(Debug, Deserialize)]
pub struct IngestConfig {
    /// File to ingest.
    pub source: PathBuf,
    /// Optional label used in log output instead of the source path.
    pub label: Option<String>,
}

/// Ingest step module - reads a source file and reports what it found.
///
/// Counts records (non-empty lines) and bytes. Fails if the source file or
/// its own configuration is absent or malformed.
pub struct IngestModule;

impl IngestModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IngestModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StepModule for IngestModule {
    async fn run(&self, config_path: &Path) -> anyhow::Result<()> {
        let raw = std::fs::read_to_string(config_path)
            .with_context(|| format!("reading ingest config {}", config_path.display()))?;
        let config: IngestConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing ingest config {}", config_path.display()))?;

        let data = std::fs::read_to_string(&config.source)
            .with_context(|| format!("reading source {}", config.source.display()))?;

        let records = data.lines().filter(|line| !line.trim().is_empty()).count();
        let label = config
            .label
            .unwrap_or_else(|| config.source.display().to_string());

        tracing::info!(
            source = %label,
            records,
            bytes = data.len(),
            "ingest complete"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "ingest"
    }
}

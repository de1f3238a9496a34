use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use crate::traits::StepModule;

/// Configuration for the report step module.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    pub title: String,
    /// Files to summarize, in report order.
    pub sources: Vec<PathBuf>,
    /// Where to write the report; logged instead when absent.
    pub output: Option<PathBuf>,
}

/// Report step module - summarizes a set of files into a plain-text report.
pub struct ReportModule;

impl ReportModule {
    pub fn new() -> Self {
        Self
    }

    fn render(config: &ReportConfig) -> anyhow::Result<String> {
        let mut report = String::new();
        writeln!(report, "# {}", config.title)?;

        for source in &config.sources {
            let data = std::fs::read_to_string(source)
                .with_context(|| format!("reading source {}", source.display()))?;
            writeln!(
                report,
                "{}: {} lines, {} bytes",
                source.display(),
                data.lines().count(),
                data.len()
            )?;
        }

        Ok(report)
    }
}

impl Default for ReportModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StepModule for ReportModule {
    async fn run(&self, config_path: &Path) -> anyhow::Result<()> {
        let raw = std::fs::read_to_string(config_path)
            .with_context(|| format!("reading report config {}", config_path.display()))?;
        let config: ReportConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing report config {}", config_path.display()))?;

        let report = Self::render(&config)?;

        match &config.output {
            Some(output) => {
                std::fs::write(output, &report)
                    .with_context(|| format!("writing report {}", output.display()))?;
                tracing::info!(title = %config.title, output = %output.display(), "report written");
            }
            None => {
                tracing::info!(title = %config.title, "report:\n{}", report);
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "report"
    }
}

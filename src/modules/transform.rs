use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use crate::traits::StepModule;

/// Configuration for the transform step module.
#[derive(Debug, Deserialize)]
pub struct TransformConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub operation: Operation,
}

/// Text operation applied by the transform module.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Upper,
    Lower,
    Proper,
    Reverse,
}

impl Operation {
    fn apply(self, input: &str) -> String {
        match self {
            Operation::Upper => input.to_uppercase(),
            Operation::Lower => input.to_lowercase(),
            Operation::Proper => input
                .split_whitespace()
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        None => String::new(),
                        Some(first) => {
                            first.to_uppercase().collect::<String>()
                                + &chars.as_str().to_lowercase()
                        }
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
            Operation::Reverse => input.chars().rev().collect(),
        }
    }
}

/// Transform step module - applies a text operation to a file.
///
/// Reads the configured input, applies the operation, and writes the result
/// to the configured output path.
pub struct TransformModule;

impl TransformModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TransformModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StepModule for TransformModule {
    async fn run(&self, config_path: &Path) -> anyhow::Result<()> {
        let raw = std::fs::read_to_string(config_path)
            .with_context(|| format!("reading transform config {}", config_path.display()))?;
        let config: TransformConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing transform config {}", config_path.display()))?;

        let input = std::fs::read_to_string(&config.input)
            .with_context(|| format!("reading input {}", config.input.display()))?;

        let output = config.operation.apply(&input);

        std::fs::write(&config.output, &output)
            .with_context(|| format!("writing output {}", config.output.display()))?;

        tracing::info!(
            input = %config.input.display(),
            output = %config.output.display(),
            operation = ?config.operation,
            bytes = output.len(),
            "transform complete"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "transform"
    }
}

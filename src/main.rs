// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use stagehand::engine;
use stagehand::modules::ModuleRegistry;

/// Default global configuration file, looked up in the working directory.
const DEFAULT_CONFIG: &str = "config.yml";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.yml]", args[0]);
        eprintln!("Example: {} pipelines/config.yml", args[0]);
        process::exit(1);
    }

    let config_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    let registry = ModuleRegistry::builtin();

    if let Err(error) = engine::run(&config_path, &registry).await {
        eprintln!("Pipeline failed: {error}");
        let mut cause = error.source();
        while let Some(source) = cause {
            eprintln!("  caused by: {source}");
            cause = source.source();
        }
        process::exit(1);
    }
}

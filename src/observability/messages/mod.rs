// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` and is emitted through `tracing`:
//!
//! ```rust
//! use stagehand::observability::messages::engine::PipelineStarted;
//!
//! let msg = PipelineStarted { config_path: "config.yml", run_count: 2 };
//! tracing::info!("{}", msg);
//! ```

pub mod engine;
pub mod step;

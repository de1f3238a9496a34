// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Centralized message types for the engine's diagnostic and operational
//! logging. Message types follow a struct-based pattern with `Display`
//! implementations to keep magic strings out of the engine code and give
//! logging output a consistent shape.
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - pipeline and run lifecycle events
//! * `messages::step` - step resolution and execution events

pub mod messages;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Step module implementations and the registry that resolves them.
//!
//! Each built-in module is a self-contained [`StepModule`](crate::traits::StepModule)
//! implementation: it receives the path of its configuration fragment, loads
//! and interprets that YAML itself, and does its work. Nothing in the engine
//! knows the built-in names beyond their registration in
//! [`ModuleRegistry::builtin`](registry::ModuleRegistry::builtin).

pub mod ingest;
pub mod registry;
pub mod report;
pub mod transform;

#[cfg(test)]
pub mod stub;

pub use ingest::IngestModule;
pub use registry::ModuleRegistry;
pub use report::ReportModule;
pub use transform::TransformModule;

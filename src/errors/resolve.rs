// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for resolving a module identifier to a step implementation.

use thiserror::Error;

/// Errors that can occur during module resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No implementation is registered under the requested identifier.
    #[error("no step module registered for '{module}'")]
    ModuleNotFound { module: String },

    /// An implementation is registered but does not provide a runnable
    /// entry point.
    #[error("step module '{module}' does not provide an entry point")]
    EntryPointMissing { module: String },
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod entry;
pub mod run_executor;


pub use entry::run;
pub use run_executor::RunExecutor;

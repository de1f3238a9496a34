// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // config structs + path convention
pub mod engine;        // program entry + run executor
pub mod errors;        // error handling
pub mod modules;       // step module registry + built-ins
pub mod observability;
pub mod traits;        // step entry-point contract

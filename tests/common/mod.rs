//! Common test utilities for remote-edit CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated workspace, home directory and fake remote host
//! - Fake `scp`/`ssh` binaries injected via PATH (unix only)

#![allow(dead_code)]

pub mod env;

pub use env::*;

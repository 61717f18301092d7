//! Shared Utilities for the mov-convert tool
//!
//! This crate provides the building blocks the converter binary is assembled from:
//! - Run logging (explicit logger, `timestamp - LEVEL - message` lines)
//! - Batch discovery and per-run tallies
//! - Context-carrying filesystem helpers
//! - Conversion error type
//! - Type-safe file sizes

pub mod batch;
pub mod common_utils;
pub mod errors;
pub mod logging;
pub mod types;

pub use batch::{collect_files, BatchResult};
pub use errors::{ConvertError, Result};
pub use logging::{LogConfig, RunLogger};
pub use types::FileSize;

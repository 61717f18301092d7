//! mov-convert - Batch QuickTime → MP4 conversion via HandBrakeCLI
//!
//! Scans `~/Desktop` for `.mov` files, converts each with the `Fast 1080p30`
//! preset into `~/Desktop/output/`, moves converted originals into
//! `~/Desktop/processed/` and appends every step to `~/Desktop/video_processor.log`.
//!
//! ```rust,ignore
//! use mov_convert::{BatchConverter, ConverterConfig, ConverterPaths, HandBrakeCli};
//!
//! let config = ConverterConfig::new(ConverterPaths::for_current_user()?);
//! let summary = BatchConverter::new(config, HandBrakeCli::default()).run()?;
//! ```

pub mod config;
pub mod converter;
pub mod transcoder;

// Re-exports
pub use config::{ConverterConfig, ConverterPaths};
pub use converter::{BatchConverter, Job, JobOutcome, JobReport, RunSummary};
pub use transcoder::{HandBrakeCli, TranscodeStatus, Transcoder};

pub use shared_utils::errors::{ConvertError, Result};

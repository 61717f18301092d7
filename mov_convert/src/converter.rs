//! Batch conversion of every source video in the source directory.
//!
//! Each file is attempted once, strictly in sequence. A file is only moved to
//! the processed directory after the transcoder succeeded and its output was
//! found on disk; any failure leaves the source where it was and the run
//! carries on with the next file.

use anyhow::{Context, Result};
use shared_utils::batch::{collect_files, BatchResult};
use shared_utils::common_utils::{ensure_dir_exists, move_file};
use shared_utils::errors::ConvertError;
use shared_utils::types::FileSize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};
use tracing::{debug, error, info};

use crate::config::{ConverterConfig, ConverterPaths, SOURCE_EXTENSION};
use crate::transcoder::{TranscodeStatus, Transcoder};

/// One source file's trip through the converter.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub original_size: FileSize,
    pub converted_size: Option<FileSize>,
}

impl Job {
    fn new(source_path: PathBuf, paths: &ConverterPaths) -> Self {
        Self {
            destination_path: paths.output_path_for(&source_path),
            source_path,
            original_size: FileSize::ZERO,
            converted_size: None,
        }
    }

    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_path.display().to_string())
    }
}

/// Result of attempting one job.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    Converted {
        original: FileSize,
        converted: FileSize,
    },
    TranscoderFailed {
        exit_code: Option<i32>,
    },
    UnexpectedError(String),
}

impl JobOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, JobOutcome::Converted { .. })
    }
}

#[derive(Debug, Clone)]
pub struct JobReport {
    pub job: Job,
    pub outcome: JobOutcome,
    pub elapsed: Duration,
}

/// What a run did. `None` from [`BatchConverter::run`] means there was nothing to do.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub start_time: SystemTime,
    pub file_count: usize,
    pub duration: Duration,
    pub batch: BatchResult,
    pub jobs: Vec<JobReport>,
}

pub struct BatchConverter<T> {
    config: ConverterConfig,
    transcoder: T,
}

impl<T: Transcoder> BatchConverter<T> {
    pub fn new(config: ConverterConfig, transcoder: T) -> Self {
        Self { config, transcoder }
    }

    /// Converts every source file once.
    ///
    /// Only setup failures (the output or processed directory cannot be
    /// created, the source directory cannot be read) are returned as errors;
    /// per-file failures are logged and recorded in the summary.
    pub fn run(&self) -> Result<Option<RunSummary>> {
        let paths = &self.config.paths;
        ensure_dir_exists(&paths.output_dir)?;
        ensure_dir_exists(&paths.processed_dir)?;

        info!("Script started.");

        let files = collect_files(&paths.source_dir, SOURCE_EXTENSION).with_context(|| {
            format!(
                "Failed to read source directory: {}",
                paths.source_dir.display()
            )
        })?;
        if files.is_empty() {
            info!(
                "No .{} files found for processing. Exiting.",
                SOURCE_EXTENSION
            );
            return Ok(None);
        }

        let start_time = SystemTime::now();
        let started = Instant::now();
        let mut batch = BatchResult::new();
        let mut jobs = Vec::with_capacity(files.len());

        for source in &files {
            let job_started = Instant::now();
            let mut job = Job::new(source.clone(), paths);
            let outcome = self.process(&mut job);
            self.report(&job, &outcome, &mut batch);
            jobs.push(JobReport {
                job,
                outcome,
                elapsed: job_started.elapsed(),
            });
        }

        let duration = started.elapsed();
        info!(
            "Script finished. Total duration: {:.2} seconds.",
            duration.as_secs_f64()
        );
        info!("{}", batch.summary_line());

        Ok(Some(RunSummary {
            start_time,
            file_count: files.len(),
            duration,
            batch,
            jobs,
        }))
    }

    /// Attempts one job; the source is only moved when the transcode came back `Converted`.
    fn process(&self, job: &mut Job) -> JobOutcome {
        let outcome = match self.transcode(job) {
            Ok(outcome) => outcome,
            Err(e) => return JobOutcome::UnexpectedError(e.to_string()),
        };
        if outcome.is_converted() {
            if let Err(e) = self.archive(job) {
                return JobOutcome::UnexpectedError(e.to_string());
            }
        }
        outcome
    }

    fn transcode(&self, job: &mut Job) -> shared_utils::Result<JobOutcome> {
        let name = job.file_name();

        job.original_size = file_size(&job.source_path)?;
        info!("Processing file: {}", name);

        let status = self.transcoder.convert(
            &job.source_path,
            &job.destination_path,
            &self.config.preset,
        )?;
        if let TranscodeStatus::Failed { exit_code } = status {
            return Ok(JobOutcome::TranscoderFailed { exit_code });
        }
        info!(
            "Conversion successful: {} to {}",
            name,
            job.destination_path.display()
        );

        let converted = file_size(&job.destination_path)?;
        job.converted_size = Some(converted);
        if let Some(ratio) = converted.compression_ratio(job.original_size) {
            debug!("{}: output is {:.1}% of the original", name, ratio * 100.0);
        }

        Ok(JobOutcome::Converted {
            original: job.original_size,
            converted,
        })
    }

    fn archive(&self, job: &Job) -> shared_utils::Result<()> {
        let archived = self.config.paths.processed_path_for(&job.source_path);
        move_file(&job.source_path, &archived)?;
        info!(
            "Moved original file to processed directory: {}",
            job.file_name()
        );
        Ok(())
    }

    fn report(&self, job: &Job, outcome: &JobOutcome, batch: &mut BatchResult) {
        let name = job.file_name();
        match outcome {
            JobOutcome::Converted {
                original,
                converted,
            } => {
                info!(
                    "File: {}, Initial Size: {}, Final Size: {}",
                    name,
                    original.display_mb(),
                    converted.display_mb()
                );
                batch.success();
            }
            JobOutcome::TranscoderFailed { exit_code } => {
                let status = match exit_code {
                    Some(code) => format!("exit status {}", code),
                    None => "terminated by signal".to_string(),
                };
                error!("Error during conversion: {} ({})", name, status);
                batch.fail();
            }
            JobOutcome::UnexpectedError(description) => {
                error!("Unexpected error for file {}: {}", name, description);
                batch.fail();
            }
        }
    }
}

fn file_size(path: &Path) -> shared_utils::Result<FileSize> {
    FileSize::of_file(path).map_err(|source| ConvertError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

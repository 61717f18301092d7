//! External transcoder invocation.
//!
//! The converter only sees the [`Transcoder`] trait; [`HandBrakeCli`] is the
//! implementation that shells out to the HandBrake command line binary.

use shared_utils::errors::{ConvertError, Result};
use shared_utils::logging::log_external_tool;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

use crate::config::HANDBRAKE_CLI;

/// How a finished transcoder process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeStatus {
    Success,
    /// Non-zero exit; `exit_code` is `None` when the process was killed by a signal.
    Failed { exit_code: Option<i32> },
}

impl From<ExitStatus> for TranscodeStatus {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            TranscodeStatus::Success
        } else {
            TranscodeStatus::Failed {
                exit_code: status.code(),
            }
        }
    }
}

pub trait Transcoder {
    /// Converts `input` into `output` with the named preset, blocking until done.
    ///
    /// `Err` means the transcoder could not be run at all; a run that exits
    /// non-zero is `Ok(TranscodeStatus::Failed { .. })`.
    fn convert(&self, input: &Path, output: &Path, preset: &str) -> Result<TranscodeStatus>;
}

impl<T: Transcoder + ?Sized> Transcoder for &T {
    fn convert(&self, input: &Path, output: &Path, preset: &str) -> Result<TranscodeStatus> {
        (**self).convert(input, output, preset)
    }
}

#[derive(Debug, Clone)]
pub struct HandBrakeCli {
    binary: PathBuf,
}

impl HandBrakeCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn arguments(input: &Path, output: &Path, preset: &str) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
            format!("--preset={}", preset),
        ]
    }
}

impl Default for HandBrakeCli {
    fn default() -> Self {
        Self::new(HANDBRAKE_CLI)
    }
}

impl Transcoder for HandBrakeCli {
    fn convert(&self, input: &Path, output: &Path, preset: &str) -> Result<TranscodeStatus> {
        let start = Instant::now();

        // stdout only carries per-frame progress
        let result = Command::new(&self.binary)
            .arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output)
            .arg(format!("--preset={}", preset))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ConvertError::Launch {
                program: self.binary.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&result.stderr);
        let tool_name = self
            .binary
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.binary.display().to_string());
        log_external_tool(
            &tool_name,
            &Self::arguments(input, output, preset),
            &stderr,
            result.status.code(),
            start.elapsed(),
        );

        Ok(result.status.into())
    }
}

//! Fixed layout and encoding settings for a conversion run.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extension of the source files picked up from the source directory.
pub const SOURCE_EXTENSION: &str = "mov";
/// Extension given to converted outputs.
pub const TARGET_EXTENSION: &str = "mp4";
/// HandBrake preset every file is encoded with.
pub const DEFAULT_PRESET: &str = "Fast 1080p30";
/// Location of the HandBrake command line binary.
pub const HANDBRAKE_CLI: &str = "/usr/local/bin/HandBrakeCLI";

pub const SOURCE_DIR_NAME: &str = "Desktop";
pub const OUTPUT_DIR_NAME: &str = "output";
pub const PROCESSED_DIR_NAME: &str = "processed";
pub const LOG_FILE_NAME: &str = "video_processor.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterPaths {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub log_file: PathBuf,
}

impl ConverterPaths {
    /// `~/Desktop` is scanned; outputs, archived originals and the log live beside it.
    pub fn from_home(home: &Path) -> Self {
        Self::in_source_dir(home.join(SOURCE_DIR_NAME))
    }

    pub fn in_source_dir(source_dir: PathBuf) -> Self {
        Self {
            output_dir: source_dir.join(OUTPUT_DIR_NAME),
            processed_dir: source_dir.join(PROCESSED_DIR_NAME),
            log_file: source_dir.join(LOG_FILE_NAME),
            source_dir,
        }
    }

    pub fn for_current_user() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine the home directory")?;
        Ok(Self::from_home(&home))
    }

    /// Output path for `source`: same basename, target extension.
    pub fn output_path_for(&self, source: &Path) -> PathBuf {
        let file_name = source.file_name().unwrap_or(source.as_os_str());
        let output = self.output_dir.join(file_name);
        // a file named just `.mov` has no stem
        if output.extension().is_none() {
            return output.with_file_name(format!(".{}", TARGET_EXTENSION));
        }
        output.with_extension(TARGET_EXTENSION)
    }

    /// Where `source` is moved once it has been converted.
    pub fn processed_path_for(&self, source: &Path) -> PathBuf {
        let file_name = source.file_name().unwrap_or(source.as_os_str());
        self.processed_dir.join(file_name)
    }
}

#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub paths: ConverterPaths,
    pub preset: String,
}

impl ConverterConfig {
    pub fn new(paths: ConverterPaths) -> Self {
        Self {
            paths,
            preset: DEFAULT_PRESET.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_home() {
        let paths = ConverterPaths::from_home(Path::new("/home/ana"));

        assert_eq!(paths.source_dir, PathBuf::from("/home/ana/Desktop"));
        assert_eq!(paths.output_dir, PathBuf::from("/home/ana/Desktop/output"));
        assert_eq!(paths.processed_dir, PathBuf::from("/home/ana/Desktop/processed"));
        assert_eq!(
            paths.log_file,
            PathBuf::from("/home/ana/Desktop/video_processor.log")
        );
    }

    #[test]
    fn test_output_path_swaps_extension() {
        let paths = ConverterPaths::in_source_dir(PathBuf::from("/v"));

        assert_eq!(
            paths.output_path_for(Path::new("/v/clip.mov")),
            PathBuf::from("/v/output/clip.mp4")
        );
        assert_eq!(
            paths.output_path_for(Path::new("/v/holiday.2023.mov")),
            PathBuf::from("/v/output/holiday.2023.mp4")
        );
        assert_eq!(
            paths.output_path_for(Path::new("/v/.mov")),
            PathBuf::from("/v/output/.mp4")
        );
    }

    #[test]
    fn test_processed_path_keeps_name() {
        let paths = ConverterPaths::in_source_dir(PathBuf::from("/v"));
        assert_eq!(
            paths.processed_path_for(Path::new("/v/clip.mov")),
            PathBuf::from("/v/processed/clip.mov")
        );
    }

    #[test]
    fn test_default_preset() {
        let config = ConverterConfig::new(ConverterPaths::in_source_dir(PathBuf::from("/v")));
        assert_eq!(config.preset, "Fast 1080p30");
    }
}

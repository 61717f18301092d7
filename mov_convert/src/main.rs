use clap::Parser;
use shared_utils::logging::{LogConfig, RunLogger};
use tracing::{error, Level};

use mov_convert::{BatchConverter, ConverterConfig, ConverterPaths, HandBrakeCli};

#[derive(Parser)]
#[command(name = "mov-convert")]
#[command(
    version,
    about = "Convert every .mov on the Desktop to .mp4 with HandBrakeCLI",
    long_about = None
)]
struct Cli {
    /// Also log external tool output and per-file ratios
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = ConverterPaths::for_current_user()?;
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let logger = RunLogger::open(LogConfig::new(&paths.log_file).with_level(level))?;

    let converter = BatchConverter::new(ConverterConfig::new(paths), HandBrakeCli::default());
    logger.in_scope(|| {
        converter
            .run()
            .inspect_err(|e| error!("Run aborted: {:#}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag() {
        assert!(!Cli::parse_from(["mov-convert"]).verbose);
        assert!(Cli::parse_from(["mov-convert", "-v"]).verbose);
        assert!(Cli::parse_from(["mov-convert", "--verbose"]).verbose);
    }

    #[test]
    fn test_rejects_path_arguments() {
        assert!(Cli::try_parse_from(["mov-convert", "/some/dir"]).is_err());
    }
}

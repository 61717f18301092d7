//! Logging Module - 运行日志
//!
//! 基于tracing框架的显式日志实例：
//! - 日志以追加方式写入固定的日志文件
//! - 每行格式为 `timestamp - LEVEL - message`
//! - 可选地同时输出到stderr
//! - 外部工具调用的日志记录
//!
//! 日志器不安装全局subscriber，而是通过 [`RunLogger::in_scope`] 在作用域内生效，
//! Drop 时刷新并关闭日志文件。
//!
//! # Examples
//!
//! ```no_run
//! use shared_utils::logging::{LogConfig, RunLogger};
//! use tracing::info;
//!
//! let logger = RunLogger::open(LogConfig::new("/tmp/video_processor.log"))
//!     .expect("Failed to open run log");
//! logger.in_scope(|| info!("Script started."));
//! ```

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// 日志行时间戳格式，例如 `2024-05-01 10:11:12,345`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// 失败时记录的stderr最大长度
const TOOL_OUTPUT_TAIL: usize = 2000;

/// 日志配置结构
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志文件路径（追加写入）
    pub log_file: PathBuf,
    /// 日志级别，默认Info
    pub level: Level,
    /// 是否同时输出到stderr，默认开启
    pub console: bool,
}

impl LogConfig {
    /// 创建新的日志配置
    pub fn new<P: AsRef<Path>>(log_file: P) -> Self {
        Self {
            log_file: log_file.as_ref().to_path_buf(),
            level: Level::INFO,
            console: true,
        }
    }

    /// 设置日志级别
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// 设置是否输出到stderr
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }
}

/// `timestamp - LEVEL - message` 格式的事件格式化器
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(
            writer,
            "{} - {} - ",
            now.format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// 一次运行的日志器
///
/// 持有日志文件的后台写入guard；Drop 时所有缓冲的日志行被写入磁盘。
pub struct RunLogger {
    dispatch: Dispatch,
    log_file: PathBuf,
    _guard: WorkerGuard,
}

impl RunLogger {
    /// 打开日志文件并构建日志器
    ///
    /// # Arguments
    ///
    /// * `config` - 日志配置
    ///
    /// # Returns
    ///
    /// 成功返回RunLogger，日志文件或其目录无法创建时返回错误
    pub fn open(config: LogConfig) -> Result<Self> {
        let file_name = config
            .log_file
            .file_name()
            .with_context(|| format!("Log path has no file name: {}", config.log_file.display()))?;
        let log_dir = match config.log_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        // rolling::never 在首次写入前就以追加模式打开文件
        let appender = tracing_appender::rolling::never(&log_dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(config.level).into())
            .from_env_lossy();

        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_writer(writer)
            .with_ansi(false);

        let console_layer = config.console.then(|| {
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false)
        });

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(console_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            log_file: config.log_file,
            _guard: guard,
        })
    }

    /// 在本日志器生效的作用域内执行 `f`
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl fmt::Debug for RunLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunLogger")
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}

/// 记录外部工具调用
///
/// 成功时以debug级别记录命令和输出，失败时以warn级别记录退出码和输出末尾。
///
/// # Arguments
///
/// * `tool_name` - 工具名称（如"HandBrakeCLI"）
/// * `args` - 命令行参数
/// * `output` - 工具的stderr输出
/// * `exit_code` - 退出代码，被信号终止时为None
/// * `duration` - 执行时长
pub fn log_external_tool(
    tool_name: &str,
    args: &[String],
    output: &str,
    exit_code: Option<i32>,
    duration: Duration,
) {
    let command = format!("{} {}", tool_name, args.join(" "));

    match exit_code {
        Some(0) => {
            tracing::debug!(
                "{} completed in {:.2}s: {}",
                tool_name,
                duration.as_secs_f64(),
                command
            );
            if !output.is_empty() {
                tracing::debug!("{} output: {}", tool_name, tail(output));
            }
        }
        Some(code) => {
            tracing::warn!(
                "{} exited with code {} after {:.2}s: {} | {}",
                tool_name,
                code,
                duration.as_secs_f64(),
                command,
                tail(output)
            );
        }
        None => {
            tracing::warn!(
                "{} terminated without exit code after {:.2}s: {} | {}",
                tool_name,
                duration.as_secs_f64(),
                command,
                tail(output)
            );
        }
    }
}

/// 保留输出末尾（HandBrakeCLI 的错误信息通常在最后）
fn tail(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.len() <= TOOL_OUTPUT_TAIL {
        return trimmed.to_string();
    }
    let mut start = trimmed.len() - (TOOL_OUTPUT_TAIL - 3);
    while !trimmed.is_char_boundary(start) {
        start += 1;
    }
    format!("...{}", &trimmed[start..])
}

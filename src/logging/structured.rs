//! Subscriber setup
//!
//! Export progress is written to stderr in a compact human-readable form, so
//! stdout stays free for command output. With `logging.local_enabled` the same
//! events are also appended as JSON lines to a rolling `quire.log` under
//! `logging.local_path`.

use crate::config::LoggingConfig;
use crate::domain::{QuireError, Result};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Prefix of the rolling log file
pub const LOG_FILE_NAME: &str = "quire.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Flushes the JSON log file when dropped
///
/// Hold it until the process is about to exit. Events logged after the guard
/// is gone never reach the file.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    file: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Whether events are also going to a log file
    pub fn writes_file(&self) -> bool {
        self.file.is_some()
    }
}

/// Installs the global subscriber
///
/// `level` applies to quire's own events unless `RUST_LOG` is set, in which
/// case `RUST_LOG` wins. Fails if the level is unknown, the log directory
/// cannot be created, or a subscriber is already installed.
///
/// ```no_run
/// use quire::config::LoggingConfig;
/// use quire::logging::init_logging;
///
/// # fn main() -> quire::domain::Result<()> {
/// let guard = init_logging("debug", &LoggingConfig::default())?;
/// // ... run the export ...
/// drop(guard);
/// # Ok(())
/// # }
/// ```
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let (layers, guard) = build_layers(level, config)?;

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| QuireError::Configuration(format!("Logging already initialized: {e}")))?;

    tracing::debug!(
        %level,
        log_file = guard.writes_file(),
        log_dir = %config.local_path,
        "Logging initialized"
    );
    Ok(guard)
}

fn build_layers(level: Level, config: &LoggingConfig) -> Result<(Vec<BoxedLayer>, LoggingGuard)> {
    let mut layers = vec![console_layer(level)];

    let file = if config.local_enabled {
        let rotation = parse_rotation(&config.local_rotation);
        let (writer, guard) = file_writer(Path::new(&config.local_path), rotation)?;
        layers.push(json_layer(level, writer));
        Some(guard)
    } else {
        None
    };

    Ok((layers, LoggingGuard { file }))
}

fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("quire={level}")))
}

fn console_layer(level: Level) -> BoxedLayer {
    tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(level_filter(level))
        .boxed()
}

fn json_layer(level: Level, writer: NonBlocking) -> BoxedLayer {
    tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(false)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(level_filter(level))
        .boxed()
}

fn file_writer(dir: &Path, rotation: Rotation) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir).map_err(|e| {
        QuireError::Configuration(format!(
            "Failed to create log directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .map_err(|e| {
            QuireError::Configuration(format!(
                "Failed to open log file in {}: {}",
                dir.display(),
                e
            ))
        })?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Maps `logging.local_rotation` to a rotation; unknown values rotate daily
fn parse_rotation(rotation: &str) -> Rotation {
    match rotation {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    level.trim().parse::<Level>().map_err(|_| {
        QuireError::Configuration(format!(
            "Invalid log level: {level}. Must be one of: trace, debug, info, warn, error"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use test_case::test_case;

    fn file_config(dir: &Path, rotation: &str) -> LoggingConfig {
        LoggingConfig {
            local_enabled: true,
            local_path: dir.to_string_lossy().to_string(),
            local_rotation: rotation.to_string(),
        }
    }

    #[test_case("trace", Level::TRACE)]
    #[test_case("Debug", Level::DEBUG)]
    #[test_case("INFO", Level::INFO)]
    #[test_case(" warn ", Level::WARN)]
    #[test_case("error", Level::ERROR)]
    fn test_parse_log_level(input: &str, expected: Level) {
        assert_eq!(parse_log_level(input).unwrap(), expected);
    }

    #[test]
    fn test_parse_log_level_rejects_unknown() {
        let err = parse_log_level("verbose").unwrap_err();
        assert!(matches!(err, QuireError::Configuration(msg) if msg.contains("verbose")));
        assert!(parse_log_level("").is_err());
    }

    #[test_case("hourly", Rotation::HOURLY)]
    #[test_case("never", Rotation::NEVER)]
    #[test_case("daily", Rotation::DAILY)]
    #[test_case("weekly", Rotation::DAILY)]
    fn test_parse_rotation(input: &str, expected: Rotation) {
        assert_eq!(parse_rotation(input), expected);
    }

    #[test]
    fn test_console_only_by_default() {
        let (layers, guard) = build_layers(Level::INFO, &LoggingConfig::default()).unwrap();
        assert_eq!(layers.len(), 1);
        assert!(!guard.writes_file());
    }

    #[test]
    fn test_file_logging_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("logs");

        let (layers, guard) = build_layers(Level::DEBUG, &file_config(&dir, "never")).unwrap();

        assert_eq!(layers.len(), 2);
        assert!(guard.writes_file());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_file_logging_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("logs");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = build_layers(Level::INFO, &file_config(&blocker, "daily"));
        assert!(matches!(result, Err(QuireError::Configuration(_))));
    }
}

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::EnvFilter;

/// Where a binary embedding the toolbar sends its logs.
pub enum LogTarget {
    Stdout,
    File(PathBuf),
}

/// Keeps the non-blocking writer alive for the program's lifetime.
pub struct LoggingGuard {
    _worker: Option<WorkerGuard>,
}

pub fn init(target: LogTarget, level: LevelFilter) -> Result<LoggingGuard> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    match target {
        LogTarget::Stdout => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .init();
            Ok(LoggingGuard { _worker: None })
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {parent:?}"))?;
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {path:?}"))?;

            let (writer, guard) = non_blocking::NonBlockingBuilder::default().finish(file);

            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .init();

            Ok(LoggingGuard {
                _worker: Some(guard),
            })
        }
    }
}

//! Logging setup
//! Console output always, plus an optional daily-rotated file sink

use crate::config::LoggingConfig;
use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "kubedash.log";

impl LoggingConfig {
    /// Install the global subscriber.
    ///
    /// The returned guard flushes the file writer on drop and must be held
    /// for as long as the process logs.
    pub fn init(&self) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = self.env_filter();

        let console_layer = if self.json {
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(io::stdout)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_ansi(true)
                .with_writer(io::stdout)
                .boxed()
        };

        let guard = match self.log_dir {
            Some(ref dir) => {
                let (writer, guard) = non_blocking(rolling::daily(dir, LOG_FILE_PREFIX));

                let file_layer = fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(true)
                    .with_ansi(false)
                    .json()
                    .with_writer(writer);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(console_layer)
                    .with(file_layer)
                    .try_init()?;

                Some(guard)
            }
            None => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(console_layer)
                    .try_init()?;

                None
            }
        };

        tracing::info!("Logging initialized - level: {}", self.level);

        Ok(guard)
    }

    /// `RUST_LOG` when set, the configured level otherwise
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

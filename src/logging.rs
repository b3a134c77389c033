//! Diagnostic logging through `tracing`.
//!
//! Logs go to stderr so the report on stdout stays clean. The level comes from
//! the command line only; `RUST_LOG` is not consulted.

use std::io;

use tracing::dispatcher::{self, Dispatch, SetGlobalDefaultError};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    pub format: LogFormat,
    pub with_ansi: bool,
}

/// Install the global subscriber writing to stderr.
pub fn init_logging(config: &LogConfig) -> Result<(), SetGlobalDefaultError> {
    dispatcher::set_global_default(build_dispatch(config, io::stderr))
}

/// Build the subscriber for `writer` without installing it.
pub fn build_dispatch<W>(config: &LogConfig, writer: W) -> Dispatch
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(config.level_filter);

    match config.format {
        LogFormat::Json => Dispatch::new(
            registry.with(fmt::layer().json().with_writer(writer).with_target(false)),
        ),
        LogFormat::Compact => Dispatch::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false),
            ),
        ),
        LogFormat::Pretty => Dispatch::new(
            registry.with(
                fmt::layer()
                    .pretty()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn config(level_filter: LevelFilter, format: LogFormat) -> LogConfig {
        LogConfig {
            level_filter,
            format,
            with_ansi: false,
        }
    }

    #[test]
    fn json_format_emits_one_object_per_event() {
        let captured = Captured::default();
        let dispatch = build_dispatch(&config(LevelFilter::INFO, LogFormat::Json), captured.clone());

        dispatcher::with_default(&dispatch, || {
            tracing::info!(records = 3, "loaded records");
        });

        let text = captured.text();
        let line: Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["fields"]["message"], "loaded records");
        assert_eq!(line["fields"]["records"], 3);
    }

    #[test]
    fn events_below_the_level_are_dropped() {
        let captured = Captured::default();
        let dispatch = build_dispatch(&config(LevelFilter::WARN, LogFormat::Compact), captured.clone());

        dispatcher::with_default(&dispatch, || {
            tracing::info!("not shown");
            tracing::warn!("shown");
        });

        let text = captured.text();
        assert!(!text.contains("not shown"));
        assert!(text.contains("shown"));
    }
}

//! Tracing setup for the command line front-end.
//!
//! Diagnostics go to stderr so stdout stays clean for reports. A log file is
//! only opened when one is asked for.

use std::io::IsTerminal;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
#[cfg(debug_assertions)]
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when neither `RUST_LOG` nor `--log-level` says otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter from `RUST_LOG` if set, else `wcag_colors=<level>`.
pub fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("wcag_colors={level}")))
        .unwrap_or_else(|_| EnvFilter::new(format!("wcag_colors={DEFAULT_LOG_LEVEL}")))
}

/// Install the global subscriber.
///
/// With `log_path` set, events are appended to that file through a
/// non-blocking writer and the returned guard must be held until exit so the
/// tail gets flushed. Otherwise events go to stderr and there is no guard.
pub fn init_logging(log_path: Option<&Path>, level: &str) -> Option<WorkerGuard> {
    let (file_writer, guard) = match log_path {
        Some(path) => {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("wcag-colors.log"));
            let appender = tracing_appender::rolling::never(parent, filename);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let file_layer = file_writer.map(|writer| {
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true);
        #[cfg(debug_assertions)]
        let layer = layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE);
        layer
    });

    let stderr_layer = file_layer.is_none().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(log_filter(level))
        .with(file_layer)
        .with(stderr_layer)
        .init();

    guard
}

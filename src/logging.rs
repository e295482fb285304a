//! File logging for the demo binary.

use std::path::PathBuf;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "NAVGUARD_LOG";

/// Filter used when `RUST_LOG` is unset. Navigation decisions (guard
/// verdicts, resolver results) are logged at `debug`, so the router gets
/// its own directive.
pub const DEFAULT_DIRECTIVES: &str = "info,navguard::nav=debug";

/// `{base}.{timestamp}.{pid}`, so concurrent instances never share a file.
pub fn log_file_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}.{}", base, timestamp, pid))
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber if `NAVGUARD_LOG` is set.
///
/// Without it nothing is installed and the shell's stdout stays clean.
/// Each `navigate` span is logged when it closes, which records how long
/// the attempt (including any resolver) took.
pub fn init_tracing() {
    let Some(base) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&base, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), err);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .init();
}

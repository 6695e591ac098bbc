use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default filter and install the subscriber.
///
/// 0 -> warn, 1 -> info, 2 -> debug, 3+ -> trace, applied to both workspace
/// crates. A `RUST_LOG` env var takes precedence over the flag. Diagnostics
/// go to stderr; stdout is reserved for the pass reports.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_filter = format!("course_engine={level},course_dates_cli={level}");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

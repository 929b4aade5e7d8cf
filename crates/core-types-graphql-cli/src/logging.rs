const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Install a `tracing` subscriber writing to stderr. Records emitted through
/// the `log` facade (including conversion warnings) are routed to it too.
///
/// `--verbose` wins over the `LOG_LEVEL` environment variable.
pub(crate) fn setup_logger(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(verbose, env_val.as_deref());

    // stdout is reserved for converted output.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// The level to log at, along with a warning to report once logging is set up
/// if `LOG_LEVEL` held something unrecognized.
pub(crate) fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    let Some(env_val) = env_val.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    let log_level = match env_val.to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" | "verbose" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => return (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{env_val}`")),
        ),
    };
    (log_level, None)
}

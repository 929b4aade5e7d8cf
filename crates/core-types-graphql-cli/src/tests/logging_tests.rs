use crate::logging::resolve_log_level;

#[test]
fn verbose_flag_wins() {
    assert_eq!(
        resolve_log_level(true, Some("error")),
        (tracing::Level::DEBUG, None),
    );
}

#[test]
fn default_level_without_env_var() {
    assert_eq!(resolve_log_level(false, None), (tracing::Level::INFO, None));
}

#[test]
fn env_var_levels() {
    assert_eq!(resolve_log_level(false, Some("trace")).0, tracing::Level::TRACE);
    assert_eq!(resolve_log_level(false, Some(" DEBUG ")).0, tracing::Level::DEBUG);
    assert_eq!(resolve_log_level(false, Some("verbose")).0, tracing::Level::DEBUG);
    assert_eq!(resolve_log_level(false, Some("Warn")).0, tracing::Level::WARN);
}

#[test]
fn invalid_env_var_falls_back_with_warning() {
    let (level, warning) = resolve_log_level(false, Some("chatty"));

    assert_eq!(level, tracing::Level::INFO);
    assert_eq!(
        warning.as_deref(),
        Some("Invalid `LOG_LEVEL` environment variable value: `chatty`"),
    );
}

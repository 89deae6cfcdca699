use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "CYGWRAP_LOG";

/// Log to stderr so the delegate's stdout stays untouched.
pub fn init_logging() {
    let directives = std::env::var(LOG_ENV_VAR).ok();

    // A subscriber installed earlier (e.g. by a test harness) wins.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}

/// `warn` unless `directives` names something else; invalid parts are skipped.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

// Логирование

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `directive`.
///
/// With no directive nothing is installed and every `tracing` call in the
/// crate is a no-op. Returns whether a subscriber is now active.
pub fn init(directive: Option<&str>) -> bool {
    // Unparseable directive: logging stays off
    let Some(filter) = directive.and_then(build_filter) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .try_init()
        .is_ok()
}

fn build_filter(directive: &str) -> Option<EnvFilter> {
    EnvFilter::try_new(directive).ok()
}

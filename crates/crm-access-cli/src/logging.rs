//! Subscriber setup for the binary.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 3] = ["crm_access_cli", "crm_access_store", "crm_access_config"];

/// Build the filter directive.
///
/// A CLI level scopes to our crates. A configured value containing `=` or `,`
/// is taken as a full `EnvFilter` directive; otherwise it is a bare level,
/// scoped the same way.
pub fn filter_directive(requested: Option<LevelFilter>, configured: &str) -> String {
    if let Some(level) = requested {
        return scoped(&level.to_string().to_lowercase());
    }
    if configured.contains('=') || configured.contains(',') {
        return configured.to_string();
    }
    scoped(configured.trim())
}

fn scoped(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the filter, falling back to `warn` with a note on stderr when the
/// directive does not parse.
pub fn build_filter(requested: Option<LevelFilter>, configured: &str) -> EnvFilter {
    let directive = filter_directive(requested, configured);
    EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{directive}': {e}; using 'warn'");
        EnvFilter::new("warn")
    })
}

/// Install the global subscriber, logging to stderr so stdout stays parseable.
pub fn init(requested: Option<LevelFilter>, configured: &str) {
    let filter = build_filter(requested, configured);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

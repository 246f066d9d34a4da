use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::DEFAULT_LOG_FILTER;

/// Builds a subscriber that filters by `filter` and writes to `writer`
///
/// Callers choose the scope: install it globally with [`init`], or use
/// `tracing::subscriber::with_default` to capture logs for a single call.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
}

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

/// Installs the process-wide subscriber, logging to stderr
///
/// Stdout is reserved for the MCP transport.
pub fn init() {
    subscriber(env_filter(), std::io::stderr).init();
}

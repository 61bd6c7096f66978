//! `tracing` subscriber setup shared by every binary in the workspace.

use tracing::{
    debug,
    Subscriber,
};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Level used when the requested filter does not parse.
pub const FALLBACK_FILTER: &str = "warn";

/// Parse `directives` into an [`EnvFilter`], falling back to [`FALLBACK_FILTER`].
///
/// Accepts a bare level (`warn`) or a directive list (`fe_gen=debug,info`). A typo on the command
/// line never blocks the tool from running.
#[must_use]
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Compact formatting subscriber filtered by `directives`, writing to `writer`.
pub fn subscriber<W>(directives: &str, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives))
        .with_writer(writer)
        .with_target(false)
        .compact()
        .finish()
}

/// Install the global subscriber, writing to stderr.
///
/// Stdout is left untouched since tools in this workspace use it for their data.
pub fn setup(directives: &str) {
    subscriber(directives, std::io::stderr).init();
    debug!(directives, "logging initialized");
}

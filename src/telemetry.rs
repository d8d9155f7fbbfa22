//! Tracing installation for binaries and tests embedding the walker.
//!
//! The library itself only emits `tracing` events (resolution
//! fallbacks, walk summaries); this module wires up a subscriber for
//! hosts that do not bring their own.

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaulting to `warn` globally and
/// `info` for this crate. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,canvasweave=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}

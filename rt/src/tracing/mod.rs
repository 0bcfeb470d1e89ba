//! Tracing initializer
//!

use std::str::FromStr;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

/// Installs a global fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Calling it more than once is harmless; only the first subscriber sticks.
pub fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(
                    Directive::from_str("info").expect("`info` is a valid directive"),
                )
                .from_env_lossy(),
        )
        .finish();
    let _ = ::tracing::subscriber::set_global_default(subscriber);
}

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=snbt_parse=debug`
/// or `RUST_LOG=snbt_peg=trace`. With `SNBT_LOG_TREE=1` spans render as an
/// indented tree. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if std::env::var("SNBT_LOG_TREE").is_ok_and(|value| value == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a `tracing` subscriber once per test binary.
///
/// A subscriber installed elsewhere first is left alone.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}

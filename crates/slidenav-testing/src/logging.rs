//! Optional log output for tests.

/// Installs `env_logger` (honouring `RUST_LOG`) when the `logging` feature
/// is enabled; otherwise does nothing. Safe to call from every test.
pub fn init_test_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}

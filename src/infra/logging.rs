use tracing_subscriber::EnvFilter;

/// Подключить fmt-логгер в stderr. Уровень берётся из `RUST_LOG`,
/// иначе `default_directive` (например, "warn" или "info").
///
/// Повторный вызов ничего не ломает: второй подписчик просто не ставится.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

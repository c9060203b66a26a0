use env_logger::Env;

/// Sets up the global logger. `RUST_LOG` overrides the default level.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

/// Initialise the process-wide logger. `--debug` raises the default filter
/// to debug level; an explicit `RUST_LOG` still wins.
pub fn init(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .init();
}

use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// Installs env_logger at `level`; `RUST_LOG` still overrides per module.
    pub fn init(level: LevelFilter) {
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .init();
    }
}

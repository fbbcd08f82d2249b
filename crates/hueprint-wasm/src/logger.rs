//! Browser console backend for the `log` facade.

use log::LevelFilter;

/// Install the console logger. Later calls only change the level.
pub(crate) fn init(level: LevelFilter) {
    if let Some(level) = level.to_level() {
        // Fails if a logger is already installed; keep the existing one
        let _ = console_log::init_with_level(level);
    }
    log::set_max_level(level);
}

/// Parse a level name (`"off"`, `"error"`, ... `"trace"`, any case).
pub(crate) fn parse_level(name: &str) -> Option<LevelFilter> {
    name.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_off_does_not_install_backend() {
        init(LevelFilter::Off);
        assert_eq!(log::max_level(), LevelFilter::Off);
    }
}

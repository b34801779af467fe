use std::str::FromStr;

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::LoggingError;

/// Environment variable holding the log level.
pub const LEVEL_ENV: &str = "RIBBON_LOG";

const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

/// Parse a level name; empty or missing means `info`.
pub fn parse_level(value: Option<&str>) -> Result<LevelFilter, LoggingError> {
    match value.map(str::trim) {
        None | Some("") => Ok(LevelFilter::Info),
        Some(name) => {
            LevelFilter::from_str(name).map_err(|_| LoggingError::UnknownLevel(name.to_owned()))
        }
    }
}

/// Install a console logger at the level named by `RIBBON_LOG`.
pub fn init() -> Result<(), LoggingError> {
    let level = parse_level(std::env::var(LEVEL_ENV).ok().as_deref())?;
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        assert_eq!(parse_level(None).unwrap(), LevelFilter::Info);
        assert_eq!(parse_level(Some(" ")).unwrap(), LevelFilter::Info);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(parse_level(Some("debug")).unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level(Some("TRACE")).unwrap(), LevelFilter::Trace);
        assert_eq!(parse_level(Some("off")).unwrap(), LevelFilter::Off);
    }

    #[test]
    fn rejects_unknown_level() {
        match parse_level(Some("loud")) {
            Err(LoggingError::UnknownLevel(name)) => assert_eq!(name, "loud"),
            other => panic!("unexpected {:?}", other),
        }
    }
}

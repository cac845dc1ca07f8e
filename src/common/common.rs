use std::collections::BTreeSet;
use std::path::Path;
use std::time::SystemTime;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level.as_str())));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .is_err()
    {
        return Err(CustomError::new("Failed to initialize logging."));
    }
    info!("logging initialized.");
    Ok(())
}

pub fn current_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Parses a file list: one file name per line, surrounding whitespace
/// ignored, blank lines and repeated names skipped. Order is preserved.
pub fn parse_file_list(data: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(String::from)
        .collect()
}

pub fn read_file_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CustomError> {
    match std::fs::read_to_string(path.as_ref()) {
        Ok(data) => Ok(parse_file_list(&data)),
        Err(error) => Err(CustomError::new(&format!(
            "Unable to read file list {}: {error}",
            path.as_ref().display()
        )))
    }
}

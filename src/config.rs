//! Run settings and logging setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Environment variable naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "OSPF_LOG_CONFIG";
/// log4rs config file used when the environment does not name one.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub json_report: Option<PathBuf>,
}

impl Settings {
    pub fn new(input: PathBuf, output: Option<PathBuf>, json_report: Option<PathBuf>) -> Settings {
        let output = output.unwrap_or_else(|| default_output_file(&input));
        Settings {
            input,
            output,
            json_report,
        }
    }
}

/// `fortigate-<name>-config.txt` next to the input file, `.txt` dropped from the name.
pub fn default_output_file(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().replace(".txt", ""))
        .unwrap_or_else(|| "ospf".to_string());
    input.with_file_name(format!("fortigate-{name}-config.txt"))
}

/// Level for the fallback console logger, from the `-v` count.
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise log4rs from its config file, or a stderr logger when there is none.
pub fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    let log_config =
        std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string());

    if Path::new(&log_config).exists() {
        log4rs::init_file(&log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
        log::debug!("Logging configured from {log_config}");
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(
            Root::builder()
                .appender("stderr")
                .build(verbosity_level(verbose)),
        )?;
    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_file() {
        assert_eq!(
            default_output_file(Path::new("PD-Networks.txt")),
            PathBuf::from("fortigate-PD-Networks-config.txt")
        );
        assert_eq!(
            default_output_file(Path::new("site/ospf-networks.txt")),
            PathBuf::from("site/fortigate-ospf-networks-config.txt")
        );
        assert_eq!(
            default_output_file(Path::new("routers.cfg")),
            PathBuf::from("fortigate-routers.cfg-config.txt")
        );
    }

    #[test]
    fn test_settings_output_override() {
        let settings = Settings::new(
            PathBuf::from("a.txt"),
            Some(PathBuf::from("custom-config.txt")),
            None,
        );
        assert_eq!(settings.output, PathBuf::from("custom-config.txt"));

        let settings = Settings::new(PathBuf::from("a.txt"), None, None);
        assert_eq!(settings.output, PathBuf::from("fortigate-a-config.txt"));
    }

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), LevelFilter::Warn);
        assert_eq!(verbosity_level(2), LevelFilter::Debug);
        assert_eq!(verbosity_level(9), LevelFilter::Trace);
    }
}

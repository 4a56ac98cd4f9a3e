use std::path::PathBuf;

use networth_core::errors::{Error, Result};
use networth_core::ReportFormat;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory exported reports are written to
    pub export_dir: PathBuf,
    /// Format used by `export` when none is given
    pub report_format: ReportFormat,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            report_format: ReportFormat::Text,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Reads settings from the process environment, after loading a `.env`
    /// file when one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let export_dir = lookup("NW_EXPORT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        let report_format = match lookup("NW_REPORT_FORMAT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::InvalidConfigValue(format!("NW_REPORT_FORMAT: {}", e)))?,
            None => defaults.report_format,
        };

        let log_format = match lookup("NW_LOG_FORMAT") {
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) if raw.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(raw) => {
                return Err(Error::InvalidConfigValue(format!(
                    "NW_LOG_FORMAT: expected 'text' or 'json', got '{}'",
                    raw
                )))
            }
            None => defaults.log_format,
        };

        Ok(Self {
            export_dir,
            report_format,
            log_format,
        })
    }
}

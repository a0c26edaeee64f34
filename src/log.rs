//! Activity log: one line per discovery run, kept in the user's data dir.

use crate::error::{Result, SiteFactsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    fn marker(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub domain: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Logger writing to `<data_local_dir>/activity.log`.
    pub fn new() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("io", "sitefacts", "sitefacts")
            .ok_or_else(|| SiteFactsError::Config("could not determine data directory".into()))?;
        Self::at(dirs.data_local_dir().join("activity.log"))
    }

    /// Logger writing to an explicit file; parent directories are created.
    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let log_path = path.into();
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { log_path })
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(
        &self,
        level: LogLevel,
        domain: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            domain: domain.map(|d| d.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        writeln!(
            file,
            "{} {} {} {} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            entry.level.marker(),
            entry.event,
            entry.domain.as_deref().unwrap_or("*"),
            entry.details.as_deref().unwrap_or("")
        )?;
        Ok(())
    }

    /// Matching lines, newest first.
    pub fn read_logs(&self, domain_filter: Option<&str>, errors_only: bool) -> Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let reader = BufReader::new(fs::File::open(&self.log_path)?);
        let error_marker = format!(" {} ", LogLevel::Error.marker());
        let mut matching = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if errors_only && !line.contains(&error_marker) {
                continue;
            }
            if let Some(domain) = domain_filter {
                if !line.contains(domain) {
                    continue;
                }
            }
            matching.push(line);
        }
        matching.reverse();
        Ok(matching)
    }

    pub fn info(&self, domain: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Info, domain, event, details)
    }

    pub fn error(&self, domain: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Error, domain, event, details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_log(tag: &str) -> ActivityLogger {
        let dir = std::env::temp_dir().join(format!(
            "sitefacts-log-{tag}-{}-{}",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        ActivityLogger::at(dir.join("activity.log")).unwrap()
    }

    #[test]
    fn read_missing_log_is_empty() {
        let logger = scratch_log("missing");
        assert!(logger.read_logs(None, false).unwrap().is_empty());
    }

    #[test]
    fn entries_filter_and_come_newest_first() {
        let logger = scratch_log("filter");
        logger.info(Some("acme.com"), "discover", Some("pages=2")).unwrap();
        logger.error(Some("contoso.com"), "discover", Some("invalid url")).unwrap();
        logger.info(Some("contoso.com"), "discover", None).unwrap();

        let all = logger.read_logs(None, false).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all[0].contains("INFO discover contoso.com"));

        let errors = logger.read_logs(None, true).unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].ends_with("invalid url"));

        let acme = logger.read_logs(Some("acme.com"), false).unwrap();
        assert_eq!(acme.len(), 1);

        fs::remove_dir_all(logger.path().parent().unwrap()).unwrap();
    }
}

//! Structured JSON logger
//!
//! Each line is one JSON object: `event`, `severity`, `ts`, then the event's
//! fields in key order. Lines go to stderr in a single write, so stdout stays
//! free for command output.
//!
//! The minimum severity comes from `ACTIONLIST_LOG_LEVEL`
//! (`TRACE`, `INFO`, `WARN`, `ERROR`, `FATAL`; default `INFO`).

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

/// Environment variable holding the minimum severity
pub const LOG_LEVEL_ENV: &str = "ACTIONLIST_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Rendered store requests
    Trace = 0,
    Info = 1,
    Warn = 2,
    /// Failed requests
    Error = 3,
    Fatal = 4,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        [
            Severity::Trace,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Fatal,
        ]
        .into_iter()
        .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| format!("unknown log level: {}", name))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn threshold() -> Severity {
    static THRESHOLD: OnceLock<Severity> = OnceLock::new();
    *THRESHOLD.get_or_init(|| {
        std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Severity::Info)
    })
}

pub struct Logger;

impl Logger {
    /// Whether lines at `severity` pass the configured threshold
    pub fn enabled(severity: Severity) -> bool {
        severity >= threshold()
    }

    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if !Self::enabled(severity) {
            return;
        }
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = Self::render(severity, event, &ts, fields);
        let _ = io::stderr().lock().write_all(line.as_bytes());
    }

    /// Formats one newline-terminated log line
    fn render(severity: Severity, event: &str, ts: &str, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        let mut line = format!(
            "{{\"event\":{},\"severity\":\"{}\",\"ts\":{}",
            quote(event),
            severity,
            quote(ts)
        );
        for (key, value) in sorted {
            line.push(',');
            line.push_str(&quote(key));
            line.push(':');
            line.push_str(&quote(value));
        }
        line.push_str("}\n");
        line
    }
}

/// JSON string literal for `s`, escapes included
fn quote(s: &str) -> String {
    Value::from(s).to_string()
}

//! Game event logger
//!
//! All play-by-play output goes through [`GameLogger`]. Messages carry a
//! verbosity level and an optional category, and are either printed to
//! stdout or captured in memory (for tests and embedding). Stdout output is
//! either plain text or one JSON object per line.

use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Output format for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Machine-readable JSON output (one object per line)
    Json,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
}

/// A captured log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Verbosity level of this log entry
    pub level: VerbosityLevel,
    /// Log message
    pub message: String,
    /// Optional category (e.g., "turn", "half_inning", "snapshot")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Guard type that provides read-only access to log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Centralized logger for game events
///
/// Logging takes `&self` so reporting code can log while only holding a
/// shared borrow; the capture buffer uses interior mutability.
#[derive(Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_format: OutputFormat,
    output_mode: OutputMode,
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger with specified verbosity
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            ..Self::default()
        }
    }

    /// Create a logger that only captures to memory
    pub fn capturing(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_mode: OutputMode::Memory,
            ..Self::default()
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn is_capturing(&self) -> bool {
        self.output_mode == OutputMode::Memory
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Get access to captured log entries
    ///
    /// # Example
    /// ```ignore
    /// let runs = logger.logs().iter()
    ///     .filter(|log| log.message.contains("Home Run"))
    ///     .count();
    /// ```
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    /// Would a message at `level` be printed or captured?
    #[inline]
    pub fn enabled(&self, level: VerbosityLevel) -> bool {
        level != VerbosityLevel::Silent && level <= self.verbosity
    }

    fn log_to_stdout(&self, entry: &LogEntry) {
        match self.output_format {
            OutputFormat::Text => {
                if entry.level == VerbosityLevel::Minimal {
                    println!("{}", entry.message);
                } else {
                    println!("  {}", entry.message);
                }
            }
            OutputFormat::Json => match serde_json::to_string(entry) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("failed to encode log entry: {}", e),
            },
        }
    }

    /// Log a message with an optional category
    pub fn log(&self, level: VerbosityLevel, category: Option<&str>, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            category: category.map(str::to_string),
        };

        match self.output_mode {
            OutputMode::Stdout => self.log_to_stdout(&entry),
            OutputMode::Memory => self.log_buffer.borrow_mut().push(entry),
        }
    }

    #[inline]
    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, None, message);
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = GameLogger::new();
        assert_eq!(logger.verbosity(), VerbosityLevel::Normal);
        assert_eq!(logger.output_mode(), OutputMode::Stdout);
    }

    #[test]
    fn test_log_capture() {
        let logger = GameLogger::capturing(VerbosityLevel::Normal);
        assert!(logger.is_capturing());

        logger.log(VerbosityLevel::Normal, None, "test message");
        logger.minimal("minimal message");

        let logs = logger.logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "test message");
        assert_eq!(logs[1].level, VerbosityLevel::Minimal);
    }

    #[test]
    fn test_verbosity_filters_capture() {
        let logger = GameLogger::capturing(VerbosityLevel::Minimal);
        logger.minimal("kept");
        logger.log(VerbosityLevel::Normal, None, "dropped");
        logger.log(VerbosityLevel::Verbose, None, "dropped");

        assert_eq!(logger.logs().len(), 1);
        assert_eq!(logger.logs()[0].message, "kept");
    }

    #[test]
    fn test_silent_logs_nothing() {
        let logger = GameLogger::capturing(VerbosityLevel::Silent);
        logger.minimal("nothing");
        logger.log(VerbosityLevel::Silent, None, "nothing");
        assert!(logger.logs().is_empty());
    }

    #[test]
    fn test_categories() {
        let logger = GameLogger::capturing(VerbosityLevel::Verbose);
        logger.log(VerbosityLevel::Normal, Some("turn"), "Single");
        assert_eq!(logger.logs()[0].category.as_deref(), Some("turn"));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = LogEntry {
            level: VerbosityLevel::Normal,
            message: "Walk".to_string(),
            category: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"level":"Normal","message":"Walk"}"#);
    }
}

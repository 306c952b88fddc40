//! # Logger Service
//!
//! This crate implements structured logging for the editor services.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! Entries carry a component name and key/value fields; a `Logger` keeps
//! the most recent entries in memory (so hosts and tests can inspect them)
//! and forwards every accepted entry to `tracing`.

use std::collections::VecDeque;
use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Emitting component, filled in by the logger when unset
    pub component: Option<String>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            component: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    /// Sets the emitting component
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Looks up a field value by key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn render_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.level.as_str())?;
        if let Some(component) = &self.component {
            write!(f, " {}:", component)?;
        }
        write!(f, " {}", self.message)?;
        if !self.fields.is_empty() {
            write!(f, " ({})", self.render_fields())?;
        }
        Ok(())
    }
}

/// Default number of entries kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

/// Bounded in-memory log that forwards to `tracing`
#[derive(Debug, Clone)]
pub struct Logger {
    component: String,
    min_level: LogLevel,
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl Logger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            min_level: LogLevel::Debug,
            capacity: DEFAULT_CAPACITY,
            entries: VecDeque::new(),
        }
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Records an entry; entries below the minimum level are dropped
    pub fn log(&mut self, mut entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        if entry.component.is_none() {
            entry.component = Some(self.component.clone());
        }

        forward(&entry);

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn count_at(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    /// Removes and returns every buffered entry, oldest first
    pub fn drain(&mut self) -> Vec<LogEntry> {
        self.entries.drain(..).collect()
    }
}

fn forward(entry: &LogEntry) {
    let component = entry.component.as_deref().unwrap_or("");
    let fields = entry.render_fields();
    match entry.level {
        LogLevel::Debug => tracing::debug!(component, fields = %fields, "{}", entry.message),
        LogLevel::Info => tracing::info!(component, fields = %fields, "{}", entry.message),
        LogLevel::Warn => tracing::warn!(component, fields = %fields, "{}", entry.message),
        LogLevel::Error => tracing::error!(component, fields = %fields, "{}", entry.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_entry_creation() {
        let entry = LogEntry::info("document opened");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message, "document opened");
        assert!(entry.component.is_none());
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn test_log_entry_with_fields() {
        let entry = LogEntry::info("saved")
            .with_field("path", "notes.txt")
            .with_field("bytes", 42);

        assert_eq!(entry.fields.len(), 2);
        assert_eq!(entry.field("path"), Some("notes.txt"));
        assert_eq!(entry.field("bytes"), Some("42"));
        assert_eq!(entry.field("missing"), None);
    }

    #[test]
    fn test_log_entry_display() {
        let entry = LogEntry::error("save failed")
            .with_component("notepad")
            .with_field("path", "a.txt");
        assert_eq!(entry.to_string(), "[ERROR] notepad: save failed (path=a.txt)");
    }

    #[test]
    fn test_logger_fills_component() {
        let mut logger = Logger::new("notepad");
        logger.log(LogEntry::info("hello"));
        assert_eq!(logger.last().and_then(|e| e.component.as_deref()), Some("notepad"));

        logger.log(LogEntry::info("hi").with_component("console"));
        assert_eq!(logger.last().and_then(|e| e.component.as_deref()), Some("console"));
    }

    #[test]
    fn test_logger_min_level_filters() {
        let mut logger = Logger::new("notepad").with_min_level(LogLevel::Warn);
        logger.log(LogEntry::debug("noise"));
        logger.log(LogEntry::info("noise"));
        logger.log(LogEntry::warn("careful"));
        logger.log(LogEntry::error("broken"));

        assert_eq!(logger.entries().count(), 2);
        assert_eq!(logger.count_at(LogLevel::Error), 1);
    }

    #[test]
    fn test_logger_capacity_drops_oldest() {
        let mut logger = Logger::new("notepad").with_capacity(2);
        logger.log(LogEntry::info("one"));
        logger.log(LogEntry::info("two"));
        logger.log(LogEntry::info("three"));

        let messages: Vec<_> = logger.drain().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert!(logger.last().is_none());
    }
}

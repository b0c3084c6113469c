//! Diagnostic loggers handed to [`crate::decorator::with_error_logging`].
//!
//! [`TextLogger`] writes plain lines to any [`Write`] destination, optionally
//! stamped with the local time. [`TracingLogger`] forwards messages to the
//! process-wide `tracing` subscriber instead.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    Stdout,
    Stderr,
    Tracing,
}

/// Accepts one formatted diagnostic line at a time.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

/// Line-oriented logger over a [`Write`] destination.
///
/// Each entry is `<prefix><timestamp ><message>\n`; the newline is only added
/// when the message lacks one.
pub struct TextLogger<W> {
    writer: Mutex<W>,
    prefix: String,
    timestamps: bool,
}

impl<W: Write + Send> TextLogger<W> {
    /// Bare logger: no prefix, no timestamp.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            prefix: String::new(),
            timestamps: false,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn format(&self, message: &str) -> String {
        let mut entry = self.prefix.clone();
        if self.timestamps {
            entry.push_str(&chrono::Local::now().format(TIMESTAMP_FORMAT).to_string());
            entry.push(' ');
        }
        entry.push_str(message);
        if !entry.ends_with('\n') {
            entry.push('\n');
        }
        entry
    }
}

impl<W: Write + Send> Logger for TextLogger<W> {
    fn log(&self, message: &str) {
        let entry = self.format(message);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Nowhere left to report a failing log destination; drop the entry.
        let _ = writer.write_all(entry.as_bytes());
        let _ = writer.flush();
    }
}

/// Forwards each message as a `tracing` warning.
#[derive(Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::warn!("{}", message.trim_end_matches('\n'));
    }
}

pub fn create_logger(target: LogTarget, prefix: &str, timestamps: bool) -> Box<dyn Logger> {
    match target {
        LogTarget::Stdout => Box::new(
            TextLogger::new(io::stdout())
                .with_prefix(prefix)
                .with_timestamps(timestamps),
        ),
        LogTarget::Stderr => Box::new(
            TextLogger::new(io::stderr())
                .with_prefix(prefix)
                .with_timestamps(timestamps),
        ),
        LogTarget::Tracing => Box::new(TracingLogger),
    }
}

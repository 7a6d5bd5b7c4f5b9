//! Observability sink for monitor records
//!
//! The monitor never talks to a logging backend directly. Every evaluation,
//! fault and reset is turned into a [`LogRecord`] and handed to a
//! [`RecordSink`], so the destination (tracing subscriber, log file, memory)
//! is chosen by the caller. Records are emitted in call order.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Severity of a monitor record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for RecordLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordLevel::Debug => "DEBUG",
            RecordLevel::Info => "INFO",
            RecordLevel::Warning => "WARNING",
            RecordLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// A timestamped, leveled text record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: RecordLevel,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: RecordLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogRecord {
    /// `2026-10-18T09:30:00.123Z - WARNING - message`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.message
        )
    }
}

/// Destination for monitor records
///
/// Emission is fire-and-forget: a sink must not fail the caller.
pub trait RecordSink {
    fn emit(&mut self, record: LogRecord);
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn emit(&mut self, record: LogRecord) {
        (**self).emit(record);
    }
}

/// Forwards records to the `tracing` subscriber (default sink)
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RecordSink for TracingSink {
    fn emit(&mut self, record: LogRecord) {
        let message = record.message;
        match record.level {
            RecordLevel::Debug => tracing::debug!(target: "lfsr_sentinel::monitor", "{}", message),
            RecordLevel::Info => tracing::info!(target: "lfsr_sentinel::monitor", "{}", message),
            RecordLevel::Warning => tracing::warn!(target: "lfsr_sentinel::monitor", "{}", message),
            RecordLevel::Error => tracing::error!(target: "lfsr_sentinel::monitor", "{}", message),
        }
    }
}

/// Keeps every record in memory, in emission order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<LogRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Records at exactly `level`
    pub fn at_level(&self, level: RecordLevel) -> impl Iterator<Item = &LogRecord> {
        self.records.iter().filter(move |r| r.level == level)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl RecordSink for MemorySink {
    fn emit(&mut self, record: LogRecord) {
        self.records.push(record);
    }
}

/// Writes one text line per record to any `Write` destination
///
/// Write failures are reported through `tracing` and otherwise ignored.
pub struct WriterSink<W: Write> {
    writer: W,
    min_level: RecordLevel,
}

impl<W: Write> WriterSink<W> {
    /// Sink that drops DEBUG records
    pub fn new(writer: W) -> Self {
        Self::with_min_level(writer, RecordLevel::Info)
    }

    pub fn with_min_level(writer: W, min_level: RecordLevel) -> Self {
        Self { writer, min_level }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for WriterSink<W> {
    fn emit(&mut self, record: LogRecord) {
        if record.level < self.min_level {
            return;
        }
        let result = writeln!(self.writer, "{}", record).and_then(|_| self.writer.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write monitor record: {}", e);
        }
    }
}

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

/// Severity of a journal entry, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    None,
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::None => "none",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// One diagnostic record, stamped at construction time.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    pub name: Option<String>,
    pub severity: Severity,
    pub message: String,
}

impl JournalEntry {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        JournalEntry {
            timestamp: Utc::now(),
            name: None,
            severity,
            message: message.into(),
        }
    }

    pub fn named(name: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        JournalEntry {
            name: Some(name.into()),
            ..JournalEntry::new(severity, message)
        }
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(
                f,
                "{} {} {} {}",
                self.timestamp, self.severity, name, self.message
            ),
            None => write!(f, "{} {} {}", self.timestamp, self.severity, self.message),
        }
    }
}

/// Append-only diagnostic sink, safe for concurrent use through `&self`.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Mutex<Vec<JournalEntry>>,
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    pub fn append(&self, entry: JournalEntry) {
        self.lock().push(entry);
    }

    pub fn append_all(&self, entries: impl IntoIterator<Item = JournalEntry>) {
        self.lock().extend(entries);
    }

    /// Atomic copy of everything recorded so far, in append order.
    pub fn snapshot(&self) -> Vec<JournalEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Highest severity recorded; `Severity::None` when the journal is empty.
    pub fn max_severity(&self) -> Severity {
        self.lock()
            .iter()
            .map(|entry| entry.severity)
            .max()
            .unwrap_or(Severity::None)
    }

    /// All messages joined with newlines, in append order.
    pub fn message(&self) -> String {
        self.lock()
            .iter()
            .map(|entry| entry.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // A writer that panicked mid-append left at most one complete entry
    // behind; the store itself stays usable.
    fn lock(&self) -> MutexGuard<'_, Vec<JournalEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

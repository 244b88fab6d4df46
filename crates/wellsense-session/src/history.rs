//! Bounded, deduplicated history of mood and posture labels.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use wellsense_core::{Result, Timestamp};

/// Number of entries kept unless configured otherwise
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Default `strftime` pattern for entry times (hours and minutes)
pub const DEFAULT_TIME_LABEL_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Mood,
    Posture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Wall-clock label, e.g. `"14:05"`
    pub time: String,
    pub label: String,
    pub kind: HistoryKind,
}

impl HistoryEntry {
    pub fn new(time: impl Into<String>, label: impl Into<String>, kind: HistoryKind) -> Self {
        Self {
            time: time.into(),
            label: label.into(),
            kind,
        }
    }

    fn same_moment(&self, other: &HistoryEntry) -> bool {
        self.time == other.time && self.label == other.label
    }
}

/// Render `timestamp` in local time with a `strftime` pattern
pub fn time_label(timestamp: Timestamp, format: &str) -> String {
    timestamp
        .to_datetime()
        .with_timezone(&Local)
        .format(format)
        .to_string()
}

/// Newest-last sequence of at most `capacity` entries.
///
/// An entry whose time and label match the most recent one is dropped, so a
/// steady mood is recorded once per time label.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Capacity is clamped to `1..=DEFAULT_HISTORY_CAPACITY`
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, DEFAULT_HISTORY_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `entry`, evicting the oldest beyond capacity.
    ///
    /// Returns `false` when the entry duplicated the latest one.
    pub fn record(&mut self, entry: HistoryEntry) -> bool {
        if self.latest().is_some_and(|last| last.same_moment(&entry)) {
            return false;
        }

        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        true
    }

    /// Entries oldest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// JSON array of the entries, oldest first
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

//! Validation / failure message collection, keyed by source

use std::collections::BTreeMap;

/// Source of a group of messages.
///
/// The enum order is the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSource {
    /// Edit-mode hydration failure
    Load,
    /// reservation_date rule findings
    Date,
    /// reservation_time rule findings
    Time,
    /// Failed create/update call
    Submit,
}

/// Ordered collection of human-readable messages shown in the error banner.
///
/// Each source owns its own entry: re-running a rule replaces only that
/// source's messages, so a date finding never wipes out a time finding.
/// Within one entry, insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: BTreeMap<ErrorSource, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry for `source`; empty `messages` removes it.
    pub fn replace(&mut self, source: ErrorSource, messages: Vec<String>) {
        if messages.is_empty() {
            self.entries.remove(&source);
        } else {
            self.entries.insert(source, messages);
        }
    }

    /// Append one message to the entry for `source`.
    pub fn push(&mut self, source: ErrorSource, message: impl Into<String>) {
        self.entries.entry(source).or_default().push(message.into());
    }

    /// Drop the entry for `source`.
    pub fn clear(&mut self, source: ErrorSource) {
        self.entries.remove(&source);
    }

    /// True when no source has findings — the form is clean.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenation of all non-empty entries in source order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.values().flatten().cloned().collect()
    }
}

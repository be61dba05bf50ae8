//! Recently displayed passages, newest first.
//!
//! Kept in memory only. Rendering entries safely (escaping references and
//! text) is the consumer's job.

use std::collections::VecDeque;

use log::trace;

use super::types::models::VerseResult;

/// Number of entries kept by [`History::new`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<VerseResult>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Puts `entry` at the top, dropping the oldest entry beyond capacity.
    ///
    /// Returns `false` without changing anything when the current top entry
    /// has the same reference.
    pub fn add(&mut self, entry: VerseResult) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.entries.front().is_some_and(|top| top.reference == entry.reference) {
            trace!("'{}' is already the latest history entry", entry.reference);
            return false;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        true
    }

    /// Entry at `index`, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&VerseResult> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &VerseResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

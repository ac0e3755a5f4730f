use std::collections::VecDeque;

use sensordash_types::Reading;

use crate::constants::LOG_CAPACITY;

/// Bounded event-log buffer, newest first.
///
/// Insertion is always at the front; eviction always removes the tail, so
/// index 0 is the most recent sample at all times.
#[derive(Clone, Debug, PartialEq)]
pub struct EventLog {
    rows: VecDeque<Reading>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        EventLog {
            rows: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the front, evicting from the tail while over capacity.
    pub fn prepend(&mut self, reading: Reading) {
        self.rows.push_front(reading);
        while self.rows.len() > self.capacity {
            self.rows.pop_back();
        }
    }

    /// Rebuild from an oldest-first server listing, keeping the newest rows
    /// when the listing exceeds capacity.
    pub fn replace_all(&mut self, entries: Vec<Reading>) {
        self.rows.clear();
        for entry in entries {
            self.prepend(entry);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in display order (newest first).
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.rows.iter()
    }

    pub fn newest(&self) -> Option<&Reading> {
        self.rows.front()
    }
}

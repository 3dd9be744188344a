//! Shared message log primitives for the terminal UI and future frontends.
use std::collections::VecDeque;

/// Severity level for UI messages produced from engine outcomes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    /// Number of answered clues when the message was logged.
    pub answered: Option<u32>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, answered: Option<u32>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            answered,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the score-keeper.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_entry_at_capacity() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut log = MessageLog::new(8);
        log.push_text("old");
        log.push(MessageEntry::new("new", None, MessageLevel::Warning));

        let recent: Vec<_> = log.recent(1).collect();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].text, "new");
        assert_eq!(recent[0].level, MessageLevel::Warning);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut log = MessageLog::new(0);
        log.push_text("kept");
        assert_eq!(log.len(), 1);
    }
}

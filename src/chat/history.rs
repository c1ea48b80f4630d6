use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Lines kept in memory
pub const HISTORY_CAPACITY: usize = 12;
/// Lines shown in the chat panel
pub const DISPLAY_LINES: usize = 10;

/// Chat log shared between the game loop and background fetch tasks.
///
/// Cloning gives another handle onto the same log.
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, evicting the oldest once the log is full
    pub fn push(&self, line: impl Into<String>) {
        let mut lines = self.lock();
        lines.push_back(line.into());
        while lines.len() > HISTORY_CAPACITY {
            lines.pop_front();
        }
    }

    /// Every stored line, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    /// The most recent lines for display, oldest first
    pub fn recent(&self) -> Vec<String> {
        let lines = self.lock();
        let skip = lines.len().saturating_sub(DISPLAY_LINES);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panicking writer cannot leave a half-pushed line behind, so a
    // poisoned lock still holds a usable log.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

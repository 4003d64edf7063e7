//! Recently generated passwords, owned by the caller.

use std::collections::VecDeque;

use secrecy::SecretString;

/// How many passwords the history keeps by default.
pub const HISTORY_CAPACITY: usize = 5;

/// Bounded, newest-first list of recent passwords.
///
/// Pushing beyond capacity evicts the oldest entry. Entries are kept as
/// [`SecretString`] so they are zeroized when evicted or dropped.
#[derive(Debug)]
pub struct PasswordHistory {
    entries: VecDeque<SecretString>,
    capacity: usize,
}

impl Default for PasswordHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl PasswordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, password: SecretString) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(password);
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SecretString> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&SecretString> {
        self.entries.front()
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
}

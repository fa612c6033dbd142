use std::collections::VecDeque;

use crate::fingerprint::Fingerprint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionResult {
    pub fingerprint: Fingerprint,
    pub caption: String,
}

impl CaptionResult {
    pub fn new(fingerprint: Fingerprint, caption: impl Into<String>) -> Self {
        Self {
            fingerprint,
            caption: caption.into(),
        }
    }
}

/// Recent captions keyed by fingerprint, oldest first.
///
/// Ordering is by insertion only; a lookup hit does not refresh an entry.
#[derive(Debug)]
pub struct ResultCache {
    entries: VecDeque<CaptionResult>,
    capacity: usize,
}

impl ResultCache {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn lookup(&self, fingerprint: Fingerprint) -> Option<&CaptionResult> {
        self.entries.iter().find(|e| e.fingerprint == fingerprint)
    }

    /// Returns false when the fingerprint was already cached
    pub fn insert(&mut self, result: CaptionResult) -> bool {
        if self.lookup(result.fingerprint).is_some() {
            return false;
        }

        self.entries.push_back(result);
        if self.entries.len() > self.capacity
            && let Some(evicted) = self.entries.pop_front()
        {
            tracing::debug!("Evicted cached caption {}", evicted.fingerprint);
        }
        true
    }

    pub fn most_recent(&self) -> Option<&CaptionResult> {
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
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

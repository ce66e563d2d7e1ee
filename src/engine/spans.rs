use std::collections::HashSet;

/// Start offsets of time mentions already attributed in the current record.
#[derive(Debug, Default)]
pub struct SpanTracker {
    claimed: HashSet<usize>,
}

impl SpanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `offset`; returns false when it was already taken.
    pub fn claim(&mut self, offset: usize) -> bool {
        self.claimed.insert(offset)
    }

    pub fn is_claimed(&self, offset: usize) -> bool {
        self.claimed.contains(&offset)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

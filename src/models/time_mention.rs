use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionKind {
    Range,
    Single,
}

/// A time expression found in a description.
///
/// `span` is a byte range into the source text. Hours are always within
/// `0..=23` and minutes within `0..=59`; the recognizers drop anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMention {
    pub kind: MentionKind,
    pub start_hour: u32,
    pub start_minute: Option<u32>,
    pub end_hour: Option<u32>,
    pub end_minute: Option<u32>,
    pub span: Range<usize>,
}

impl TimeMention {
    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn overlaps(&self, other: &Range<usize>) -> bool {
        self.span.start < other.end && other.start < self.span.end
    }
}

//! Extraction engine: turns one free-text description into a weekly schedule.
//!
//! Per record: scope resolvers, then the fallback associator, then the
//! override table. Nothing is shared between records except the compiled
//! patterns and the read-only override table.

pub mod fallback;
pub mod normalize;
pub mod overrides;
pub mod patterns;
pub mod scope;
pub mod spans;

use crate::models::record::Record;
use crate::models::schedule::Schedule;
use overrides::OverrideTable;
use patterns::Document;
use spans::SpanTracker;

/// Proximity limits, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// From a "tous les ..." or "du ... au ..." phrase to its time.
    pub scope_window: usize,
    /// From an explicit "Day :" marker to its time.
    pub marker_window: usize,
    /// From a day token back-referenced by the fallback pass.
    pub fallback_distance: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            scope_window: 50,
            marker_window: 80,
            fallback_distance: 100,
        }
    }
}

#[derive(Debug, Default)]
pub struct Extractor {
    thresholds: Thresholds,
    overrides: OverrideTable,
}

impl Extractor {
    pub fn new(thresholds: Thresholds, overrides: OverrideTable) -> Self {
        Self {
            thresholds,
            overrides,
        }
    }

    /// Extractor with default thresholds and the built-in override table.
    pub fn with_builtin_overrides() -> crate::errors::AppResult<Self> {
        Ok(Self::new(Thresholds::default(), OverrideTable::builtin()?))
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Schedule of one record, or `None` when nothing recurring was found.
    pub fn extract(&self, record: &Record) -> Option<Schedule> {
        let mut schedule = self.scan(&record.raw_text);
        self.overrides.apply(record, &mut schedule);
        (!schedule.is_empty()).then_some(schedule)
    }

    /// Automatic extraction only, for a text with no record id.
    pub fn extract_text(&self, text: &str) -> Option<Schedule> {
        let schedule = self.scan(text);
        (!schedule.is_empty()).then_some(schedule)
    }

    fn scan(&self, text: &str) -> Schedule {
        let mut schedule = Schedule::new();
        if text.trim().is_empty() {
            return schedule;
        }

        let doc = Document::scan(text);
        let mut tracker = SpanTracker::new();
        scope::resolve_all(&doc, &self.thresholds, &mut tracker, &mut schedule);
        fallback::associate(
            &doc,
            self.thresholds.fallback_distance,
            &mut tracker,
            &mut schedule,
        );
        schedule
    }
}

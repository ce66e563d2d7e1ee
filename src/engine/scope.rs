//! Scope resolvers: phrases that name a set of days, bound to the next time
//! mention found shortly after them.
//!
//! Resolvers run in a fixed order (uniform days, enumerated weekdays, day
//! range, explicit marker) and every binding claims its mention's start
//! offset, so a lower-priority pass never reuses a mention.

use crate::engine::Thresholds;
use crate::engine::patterns::{
    self, DayScope, Document, char_distance, continuation_after, day_markers,
};
use crate::engine::spans::SpanTracker;
use crate::models::schedule::Schedule;
use crate::models::time_mention::TimeMention;
use crate::models::weekday::Weekday;
use log::debug;

/// Search bounds for one trigger phrase.
#[derive(Debug, Clone, Copy)]
struct Window {
    from: usize,
    max_chars: usize,
    limit: usize,
}

impl Window {
    fn after(doc: &Document<'_>, from: usize, max_chars: usize) -> Self {
        Self {
            from,
            max_chars,
            limit: doc.text.len(),
        }
    }

    fn until(mut self, limit: usize) -> Self {
        self.limit = limit.min(self.limit);
        self
    }

    fn contains(&self, doc: &Document<'_>, mention: &TimeMention) -> bool {
        mention.start() >= self.from
            && mention.start() < self.limit
            && char_distance(doc.text, self.from, mention.start()) < self.max_chars
    }
}

/// First mention of `candidates` inside `window` that nobody has claimed yet.
fn first_unclaimed<'m>(
    doc: &Document<'_>,
    candidates: &'m [TimeMention],
    window: Window,
    tracker: &SpanTracker,
) -> Option<&'m TimeMention> {
    candidates
        .iter()
        .filter(|m| m.start() >= window.from)
        .take_while(|m| window.contains(doc, m))
        .find(|m| !tracker.is_claimed(m.start()))
}

fn bind_days(
    label: &str,
    days: &[Weekday],
    mention: &TimeMention,
    tracker: &mut SpanTracker,
    schedule: &mut Schedule,
) -> bool {
    if !tracker.claim(mention.start()) {
        return false;
    }
    for day in days {
        schedule.bind(*day, mention);
    }
    debug!(
        "{label}: {:?} bound to {} day(s) at offset {}",
        mention.kind,
        days.len(),
        mention.start()
    );
    true
}

/// Bind the first range (or, failing that, the first single time) after each scope phrase.
fn resolve_first_mention(
    label: &str,
    doc: &Document<'_>,
    scopes: &[DayScope],
    window: usize,
    tracker: &mut SpanTracker,
    schedule: &mut Schedule,
) {
    for scope in scopes {
        let w = Window::after(doc, scope.span.end, window);
        let found = first_unclaimed(doc, &doc.ranges, w, tracker)
            .or_else(|| first_unclaimed(doc, &doc.singles, w, tracker));
        if let Some(mention) = found {
            bind_days(label, &scope.days, mention, tracker, schedule);
        }
    }
}

/// "tous les jours ... TIME" → all seven days.
pub fn resolve_uniform_days(
    doc: &Document<'_>,
    th: &Thresholds,
    tracker: &mut SpanTracker,
    schedule: &mut Schedule,
) {
    let scopes = patterns::uniform_days(doc.text);
    resolve_first_mention("uniform", doc, &scopes, th.scope_window, tracker, schedule);
}

/// "tous les jeudis ... TIME" → the named weekday(s).
pub fn resolve_enumerated_weekdays(
    doc: &Document<'_>,
    th: &Thresholds,
    tracker: &mut SpanTracker,
    schedule: &mut Schedule,
) {
    let scopes = patterns::enumerated_weekdays(doc.text);
    resolve_first_mention("enumerated", doc, &scopes, th.scope_window, tracker, schedule);
}

/// "du mardi au samedi, ... RANGE" → every day of the span, for each nearby range.
pub fn resolve_day_ranges(
    doc: &Document<'_>,
    th: &Thresholds,
    tracker: &mut SpanTracker,
    schedule: &mut Schedule,
) {
    for scope in patterns::day_ranges(doc.text) {
        let w = Window::after(doc, scope.span.end, th.scope_window);
        let nearby: Vec<&TimeMention> = doc
            .ranges
            .iter()
            .filter(|m| m.start() >= w.from)
            .take_while(|m| w.contains(doc, m))
            .collect();

        for mention in nearby {
            bind_days("day-range", &scope.days, mention, tracker, schedule);
        }
    }
}

/// "Samedi : RANGE[, puis de RANGE]" or "Samedi : ... à TIME" → that day.
///
/// A marker's window ends where the next marker begins.
pub fn resolve_day_markers(
    doc: &Document<'_>,
    th: &Thresholds,
    tracker: &mut SpanTracker,
    schedule: &mut Schedule,
) {
    let markers = day_markers(doc.text);

    for (i, marker) in markers.iter().enumerate() {
        let next = markers
            .get(i + 1)
            .map_or(doc.text.len(), |m| m.span.start);
        let w = Window::after(doc, marker.span.end, th.marker_window).until(next);
        let days = [marker.day];

        if let Some(range) = first_unclaimed(doc, &doc.ranges, w, tracker) {
            if !bind_days("marker", &days, range, tracker, schedule) {
                continue;
            }
            // second segment for the same day: "11 à 12h, puis de 15h à 16h"
            if let Some(at) = continuation_after(doc.text, range.end())
                && let Some(second) = doc.ranges.iter().find(|m| m.start() == at)
            {
                bind_days("marker-continuation", &days, second, tracker, schedule);
            }
            continue;
        }

        if let Some(single) = first_unclaimed(doc, &doc.singles, w, tracker) {
            bind_days("marker", &days, single, tracker, schedule);
        }
    }
}

/// Run every scope resolver in priority order.
pub fn resolve_all(
    doc: &Document<'_>,
    th: &Thresholds,
    tracker: &mut SpanTracker,
    schedule: &mut Schedule,
) {
    resolve_uniform_days(doc, th, tracker, schedule);
    resolve_enumerated_weekdays(doc, th, tracker, schedule);
    resolve_day_ranges(doc, th, tracker, schedule);
    resolve_day_markers(doc, th, tracker, schedule);
}

//! Fallback association: an unclaimed time belongs to the closest weekday
//! named before it.

use crate::engine::patterns::{DayToken, Document, char_distance};
use crate::engine::spans::SpanTracker;
use crate::models::schedule::Schedule;
use crate::models::time_mention::TimeMention;
use log::debug;

/// Day token ending closest before `mention`, if within `max_chars`.
fn nearest_preceding_day<'d>(
    doc: &'d Document<'_>,
    mention: &TimeMention,
    max_chars: usize,
) -> Option<&'d DayToken> {
    doc.days
        .iter()
        .filter(|d| d.span.end <= mention.start())
        .max_by_key(|d| d.span.end)
        .filter(|d| char_distance(doc.text, d.span.end, mention.start()) < max_chars)
}

/// Sweep every mention left unclaimed by the scope resolvers.
///
/// Bindings never overwrite keys written by the scope resolvers; among
/// themselves the last one wins.
pub fn associate(
    doc: &Document<'_>,
    max_chars: usize,
    tracker: &mut SpanTracker,
    schedule: &mut Schedule,
) {
    let scoped = schedule.keys();
    for mention in doc.mentions() {
        if tracker.is_claimed(mention.start()) {
            continue;
        }
        let Some(token) = nearest_preceding_day(doc, mention, max_chars) else {
            continue;
        };
        if !tracker.claim(mention.start()) {
            continue;
        }
        let written = schedule.bind_unless_protected(token.day, mention, &scoped);
        debug!(
            "fallback: {:?} at offset {} -> {} (written: {written})",
            mention.kind,
            mention.start(),
            token.day
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weekday::Weekday;

    fn run(text: &str, max_chars: usize) -> Schedule {
        let doc = Document::scan(text);
        let mut tracker = SpanTracker::new();
        let mut schedule = Schedule::new();
        associate(&doc, max_chars, &mut tracker, &mut schedule);
        schedule
    }

    #[test]
    fn time_goes_to_the_nearest_preceding_day() {
        let s = run("Concert lundi, puis vendredi 16 mai à 20h30", 100);
        assert_eq!(s.get("friday_start_hour_pm"), Some("20:30:00"));
        assert!(s.iter().all(|(k, _)| k.starts_with(Weekday::Friday.key())));
    }

    #[test]
    fn times_without_a_preceding_day_are_dropped() {
        assert!(run("De 9h30 à 11h00 : châteaux de sable, le samedi", 100).is_empty());
    }

    #[test]
    fn later_fallback_binding_replaces_an_earlier_one() {
        let s = run("Samedi à 9h. Puis samedi à 10h", 100);
        assert_eq!(s.get("saturday_start_hour_am"), Some("10:00:00"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn keys_bound_before_the_sweep_are_kept() {
        let doc = Document::scan("Samedi à 9h");
        let mut tracker = SpanTracker::new();
        let mut schedule = Schedule::new();
        let earlier = Document::scan("de 8h à 12h");
        schedule.bind(Weekday::Saturday, &earlier.ranges[0]);

        associate(&doc, 100, &mut tracker, &mut schedule);
        assert_eq!(schedule.get("saturday_start_hour_am"), Some("08:00:00"));
        assert_eq!(schedule.len(), 2);
        // claimed even though nothing was written
        assert!(tracker.is_claimed(doc.singles[0].start()));
    }

    #[test]
    fn distance_threshold_applies() {
        let text = "Samedi, une journée entière consacrée à la découverte du patrimoine local à 10h";
        assert!(!run(text, 100).is_empty());
        assert!(run(text, 20).is_empty());
    }
}

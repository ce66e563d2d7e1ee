//! Recognizers for French time and day expressions.
//!
//! All recognizers are pure functions of the text. Offsets are byte offsets
//! into the text; distances are counted in characters via [`char_distance`].

use crate::models::time_mention::{MentionKind, TimeMention};
use crate::models::weekday::Weekday;
use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

const DAY_NAMES: &str = "lundi|mardi|mercredi|jeudi|vendredi|samedi|dimanche";

/// `[de] H[h|:][MM] <sep> H h [MM]`, e.g. "de 8h - 13h", "11 à 12h", "8h30-12h", "10:30 à 12h".
static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\bde\s+|\bdès\s*)?(?P<sh>\d{1,2})\s*(?:h|:)?\s*(?P<sm>\d{2})?\s*(?:-|–|à|/|\bet\b|\bpuis\s+de\b)\s*(?P<eh>\d{1,2})\s*h\s*(?P<em>\d{2})?",
    )
    .unwrap()
});

/// `(à|:|dès) H h [MM]`, e.g. "à 16h30", "Dès 9h00".
static SINGLE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bà|:|\bdès)\s*(?P<sh>\d{1,2})\s*h\s*(?P<sm>\d{2})?").unwrap()
});

static DAY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b(?P<day>{DAY_NAMES})\b")).unwrap());

static PLURAL_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b(?P<day>{DAY_NAMES})s\b")).unwrap());

static UNIFORM_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\btous\s+les\s+jours\b").unwrap());

/// "tous les jeudis", "tous les jeudis et dimanches".
static ENUMERATED_WEEKDAYS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\btous\s+les\s+(?P<days>(?:{DAY_NAMES})s(?:\s*(?:,|\bet\b)\s*(?:{DAY_NAMES})s)*)\b"
    ))
    .unwrap()
});

/// "du mardi au samedi", "Lundi au vendredi".
static DAY_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:du\s+)?(?P<from>lundi|mardi)\s+au\s+(?P<to>vendredi|samedi)\b").unwrap()
});

/// "Mercredi :", "Samedis :".
static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b(?P<day>{DAY_NAMES})s?\s*:")).unwrap());

/// ", puis de 15h à 16h", " et 13h30-17h30": token linking a second range.
static CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[,;]?\s*(?:puis|et)\s+").unwrap());

/// A weekday named in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayToken {
    pub day: Weekday,
    pub span: Range<usize>,
}

/// A phrase implying a set of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayScope {
    pub days: Vec<Weekday>,
    pub span: Range<usize>,
}

pub fn char_distance(text: &str, from: usize, to: usize) -> usize {
    if to <= from {
        return 0;
    }
    text.get(from..to).map_or(to - from, |s| s.chars().count())
}

fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

fn valid_clock(hour: u32, minute: Option<u32>) -> bool {
    hour <= 23 && minute.is_none_or(|m| m <= 59)
}

/// Build a mention from captures named `sh`, `sm`, `eh`, `em`.
///
/// Returns `None` when the start hour is missing or any value is off the clock.
pub fn mention_from_captures(caps: &Captures<'_>, span: Range<usize>) -> Option<TimeMention> {
    let start_hour = number(caps, "sh")?;
    let start_minute = number(caps, "sm");
    let end_hour = number(caps, "eh");
    let end_minute = number(caps, "em");

    if !valid_clock(start_hour, start_minute) {
        return None;
    }
    if let Some(h) = end_hour
        && !valid_clock(h, end_minute)
    {
        return None;
    }

    Some(TimeMention {
        kind: if end_hour.is_some() {
            MentionKind::Range
        } else {
            MentionKind::Single
        },
        start_hour,
        start_minute,
        end_hour,
        end_minute: end_hour.and(end_minute),
        span,
    })
}

pub fn time_ranges(text: &str) -> Vec<TimeMention> {
    TIME_RANGE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            mention_from_captures(&caps, whole.range())
        })
        .collect()
}

/// Single times that do not overlap any time-range match.
pub fn single_times(text: &str) -> Vec<TimeMention> {
    let range_spans: Vec<Range<usize>> = TIME_RANGE.find_iter(text).map(|m| m.range()).collect();

    SINGLE_TIME
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            mention_from_captures(&caps, whole.range())
        })
        .filter(|m| !range_spans.iter().any(|r| m.overlaps(r)))
        .collect()
}

pub fn day_tokens(text: &str) -> Vec<DayToken> {
    DAY_TOKEN
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.name("day")?;
            Some(DayToken {
                day: Weekday::from_french(m.as_str())?,
                span: m.range(),
            })
        })
        .collect()
}

pub fn uniform_days(text: &str) -> Vec<DayScope> {
    UNIFORM_DAYS
        .find_iter(text)
        .map(|m| DayScope {
            days: Weekday::all().to_vec(),
            span: m.range(),
        })
        .collect()
}

pub fn enumerated_weekdays(text: &str) -> Vec<DayScope> {
    ENUMERATED_WEEKDAYS
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let list = caps.name("days")?.as_str();
            let mut days: Vec<Weekday> = PLURAL_DAY
                .captures_iter(list)
                .filter_map(|c| Weekday::from_french(c.name("day")?.as_str()))
                .collect();
            days.dedup();
            (!days.is_empty()).then(|| DayScope {
                days,
                span: whole.range(),
            })
        })
        .collect()
}

pub fn day_ranges(text: &str) -> Vec<DayScope> {
    DAY_RANGE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let from = Weekday::from_french(caps.name("from")?.as_str())?;
            let to = Weekday::from_french(caps.name("to")?.as_str())?;
            let days = Weekday::span(from, to);
            (!days.is_empty()).then(|| DayScope {
                days,
                span: whole.range(),
            })
        })
        .collect()
}

/// Explicit "Day :" markers; the span covers the colon.
pub fn day_markers(text: &str) -> Vec<DayToken> {
    DAY_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(DayToken {
                day: Weekday::from_french(caps.name("day")?.as_str())?,
                span: whole.range(),
            })
        })
        .collect()
}

/// Offset right after a continuation token starting at `from`, if any.
pub fn continuation_after(text: &str, from: usize) -> Option<usize> {
    let rest = text.get(from..)?;
    CONTINUATION.find(rest).map(|m| from + m.end())
}

/// Every time mention of one text, computed once per record.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub text: &'a str,
    pub ranges: Vec<TimeMention>,
    pub singles: Vec<TimeMention>,
    pub days: Vec<DayToken>,
}

impl<'a> Document<'a> {
    pub fn scan(text: &'a str) -> Self {
        Self {
            text,
            ranges: time_ranges(text),
            singles: single_times(text),
            days: day_tokens(text),
        }
    }

    /// Ranges and singles together, ordered by position.
    pub fn mentions(&self) -> Vec<&TimeMention> {
        let mut all: Vec<&TimeMention> = self.ranges.iter().chain(self.singles.iter()).collect();
        all.sort_by_key(|m| m.start());
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_with_optional_start_marker() {
        let r = time_ranges("Samedis :  11 à 12h, puis de 15h à 16h");
        assert_eq!(r.len(), 2);
        assert_eq!((r[0].start_hour, r[0].end_hour), (11, Some(12)));
        assert_eq!((r[1].start_hour, r[1].end_hour), (15, Some(16)));
        assert_eq!(&"Samedis :  11 à 12h, puis de 15h à 16h"[r[1].start()..r[1].start() + 2], "de");
    }

    #[test]
    fn range_captures_minutes_and_separators() {
        let r = time_ranges("Lundi au vendredi I 8h30-12h et 13h30-17h30 I Hôtel de Ville");
        assert_eq!(r.len(), 2);
        assert_eq!(r[0].start_minute, Some(30));
        assert_eq!(r[0].end_hour, Some(12));
        assert_eq!(r[0].end_minute, None);
        assert_eq!((r[1].start_hour, r[1].end_hour, r[1].end_minute), (13, Some(17), Some(30)));

        let colon = time_ranges("Tous les lundis de 10:30 à 12h");
        assert_eq!(colon.len(), 1);
        assert_eq!((colon[0].start_hour, colon[0].start_minute), (10, Some(30)));
        assert_eq!((colon[0].end_hour, colon[0].end_minute), (Some(12), None));

        let spaced = time_ranges("9 h 30 à 10 h 30 / 11 h à 12 h");
        assert_eq!(spaced[0].start_minute, Some(30));
        assert_eq!(spaced[0].end_minute, Some(30));
    }

    #[test]
    fn single_time_never_overlaps_a_range() {
        let text = "Du mardi au samedi, de 10h à 18h.";
        assert!(single_times(text).is_empty());

        let singles = single_times("Tous les dimanches ... à 16h30");
        assert_eq!(singles.len(), 1);
        assert_eq!(singles[0].start_hour, 16);
        assert_eq!(singles[0].start_minute, Some(30));
        assert_eq!(singles[0].kind, MentionKind::Single);
    }

    #[test]
    fn off_clock_values_fail_to_form() {
        assert!(time_ranges("de 25h à 27h").is_empty());
        assert!(single_times("à 30h").is_empty());
    }

    #[test]
    fn day_tokens_are_word_bounded() {
        let days = day_tokens("Tous les jeudis, et le Samedi aussi");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day, Weekday::Saturday);
    }

    #[test]
    fn scope_phrases() {
        assert_eq!(uniform_days("ouvert tous les jours").len(), 1);

        let e = enumerated_weekdays("d'octobre à mars : tous les jeudis et dimanches");
        assert_eq!(e[0].days, vec![Weekday::Thursday, Weekday::Sunday]);

        let r = day_ranges("Lundi au vendredi I 8h30-12h");
        assert_eq!(r[0].days.len(), 5);
        assert!(day_ranges("du samedi 19 avril au lundi 21 avril").is_empty());

        let m = day_markers("Samedis :  11 à 12h Dimanches : de 11h à 12h");
        assert_eq!(
            m.iter().map(|t| t.day).collect::<Vec<_>>(),
            vec![Weekday::Saturday, Weekday::Sunday]
        );
    }

    #[test]
    fn continuation_token() {
        let text = "11 à 12h, puis de 15h à 16h";
        let first = &time_ranges(text)[0];
        let next = continuation_after(text, first.end()).unwrap();
        assert_eq!(&text[next..next + 2], "de");
        assert_eq!(continuation_after("12h. Fermé", 3), None);
    }

    #[test]
    fn char_distance_counts_characters() {
        let text = "à é 10h";
        assert_eq!(char_distance(text, 0, text.find('1').unwrap()), 4);
        assert_eq!(char_distance(text, 5, 2), 0);
    }
}

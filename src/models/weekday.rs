use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical weekday, ordered Monday → Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    pub fn all() -> &'static [Weekday; 7] {
        &ALL
    }

    /// English lower-case name used in schedule keys.
    pub fn key(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// French surface form, used only for matching.
    pub fn french(&self) -> &'static str {
        match self {
            Weekday::Monday => "lundi",
            Weekday::Tuesday => "mardi",
            Weekday::Wednesday => "mercredi",
            Weekday::Thursday => "jeudi",
            Weekday::Friday => "vendredi",
            Weekday::Saturday => "samedi",
            Weekday::Sunday => "dimanche",
        }
    }

    /// Parse a French day name, case-insensitive, singular or plural.
    pub fn from_french(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        ALL.iter().copied().find(|d| d.french() == singular)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Inclusive forward span `from..=to`; empty when `to` comes before `from`.
    pub fn span(from: Weekday, to: Weekday) -> Vec<Weekday> {
        if to < from {
            return Vec::new();
        }
        ALL[from.index()..=to.index()].to_vec()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

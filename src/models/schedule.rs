use crate::engine::normalize::{end_meridiem, normalize, start_meridiem};
use crate::models::slot::{Boundary, Slot};
use crate::models::time_mention::TimeMention;
use crate::models::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Weekly schedule of one record: `"{day}_{start|end}_hour_{am|pm}"` → `HH:MM:SS`.
///
/// An absent key means nothing was extracted for that segment, not "closed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: BTreeMap<String, String>,
}

pub fn schedule_key(day: Weekday, slot: Slot) -> String {
    format!("{}_{}", day.key(), slot)
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the keys produced by `mention` for `day`, replacing earlier values.
    pub fn bind(&mut self, day: Weekday, mention: &TimeMention) -> bool {
        let pairs = Self::keys_for(day, mention);
        if pairs.is_empty() {
            return false;
        }
        for (key, value) in pairs {
            self.entries.insert(key, value);
        }
        true
    }

    /// Like [`Schedule::bind`], but leaves the schedule untouched when any of
    /// the target keys is already populated.
    pub fn bind_if_vacant(&mut self, day: Weekday, mention: &TimeMention) -> bool {
        let pairs = Self::keys_for(day, mention);
        if pairs.is_empty() || pairs.iter().any(|(k, _)| self.entries.contains_key(k)) {
            return false;
        }
        self.entries.extend(pairs);
        true
    }

    /// Like [`Schedule::bind`], but skips the whole binding when any target
    /// key belongs to `protected`. Other existing values are replaced.
    pub fn bind_unless_protected(
        &mut self,
        day: Weekday,
        mention: &TimeMention,
        protected: &BTreeSet<String>,
    ) -> bool {
        let pairs = Self::keys_for(day, mention);
        if pairs.is_empty() || pairs.iter().any(|(k, _)| protected.contains(k)) {
            return false;
        }
        self.entries.extend(pairs);
        true
    }

    /// Snapshot of the keys currently populated.
    pub fn keys(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }

    fn keys_for(day: Weekday, mention: &TimeMention) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(2);

        let start_minute = mention.start_minute.unwrap_or(0);
        let Some(start) = normalize(mention.start_hour, start_minute) else {
            return out;
        };
        let slot = Slot::new(Boundary::Start, start_meridiem(mention.start_hour));
        out.push((schedule_key(day, slot), start));

        if let Some(end_hour) = mention.end_hour {
            let end_minute = mention.end_minute.unwrap_or(0);
            if let Some(end) = normalize(end_hour, end_minute) {
                let slot = Slot::new(Boundary::End, end_meridiem(end_hour, end_minute));
                out.push((schedule_key(day, slot), end));
            }
        }

        out
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

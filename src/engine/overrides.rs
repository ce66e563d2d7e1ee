//! Record-level exception rules applied after automatic extraction.
//!
//! The table is plain data: a list of [`OverrideRule`]s keyed by record id.
//! Built-in rules cover known-ambiguous descriptions of the source dataset;
//! more rules can be loaded from a YAML file.

use crate::engine::patterns::{day_markers, mention_from_captures};
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::models::schedule::{Schedule, schedule_key};
use crate::models::slot::{Boundary, Meridiem, Slot};
use crate::models::weekday::Weekday;
use log::debug;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum OverrideAction {
    /// The description is about a one-off event: drop the whole schedule.
    Suppress,
    /// Run `pattern` (named groups `sh`, `sm`, `eh`, `em`) on the raw text and
    /// bind the match to `days` whose `guard` key is still empty.
    Reassign {
        pattern: String,
        days: Vec<Weekday>,
        guard: Slot,
        /// Only bind days that have an explicit "Day :" marker in the text.
        #[serde(default)]
        require_marker: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub record_id: i64,
    #[serde(flatten)]
    pub action: OverrideAction,
}

impl OverrideRule {
    pub fn suppress(record_id: i64) -> Self {
        Self {
            record_id,
            action: OverrideAction::Suppress,
        }
    }

    pub fn reassign(
        record_id: i64,
        pattern: &str,
        days: &[Weekday],
        guard: Slot,
        require_marker: bool,
    ) -> Self {
        Self {
            record_id,
            action: OverrideAction::Reassign {
                pattern: pattern.to_string(),
                days: days.to_vec(),
                guard,
                require_marker,
            },
        }
    }
}

const SUPPRESSED: [i64; 25] = [
    9891, 10246, 5369, 2737, 4795, 4265, 11725, 2627, 4006, 9107, 11956, 4267, 7742, 11441, 11437,
    11309, 10115, 6386, 11026, 8491, 8492, 10874, 6394, 11730, 9065,
];

/// Rules for the source listings dataset.
pub fn builtin_rules() -> Vec<OverrideRule> {
    let start_am = Slot::new(Boundary::Start, Meridiem::Am);
    let start_pm = Slot::new(Boundary::Start, Meridiem::Pm);

    let mut rules = vec![
        // opening range stated once, before the per-day markets
        OverrideRule::reassign(
            2263,
            r"de\s*(?P<sh>\d{1,2})h(?P<sm>\d{2})?\s*à\s*(?P<eh>\d{1,2})h(?P<em>\d{2})?",
            &[Weekday::Wednesday, Weekday::Friday, Weekday::Sunday],
            start_am,
            true,
        ),
        OverrideRule::reassign(
            11236,
            r"le\s+mardi\s+à\s+partir\s+de\s*(?P<sh>\d{1,2})h(?P<sm>\d{2})?",
            &[Weekday::Tuesday],
            start_pm,
            false,
        ),
        OverrideRule::reassign(
            10097,
            r"un\s+mercredi.*?de\s*(?P<sh>\d{1,2})h(?P<sm>\d{2})?\s*à\s*(?P<eh>\d{1,2})h(?P<em>\d{2})?",
            &[Weekday::Wednesday],
            start_pm,
            false,
        ),
        // "a" without the accent
        OverrideRule::reassign(
            7588,
            r"\bsamedi\b.*?\ba\s*(?P<sh>\d{1,2})h(?P<sm>\d{2})?",
            &[Weekday::Saturday],
            start_am,
            false,
        ),
    ];
    rules.extend(SUPPRESSED.iter().map(|id| OverrideRule::suppress(*id)));
    rules
}

#[derive(Debug)]
struct CompiledRule {
    rule: OverrideRule,
    regex: Option<Regex>,
}

/// Override rules grouped by record id, patterns compiled once.
#[derive(Debug, Default)]
pub struct OverrideTable {
    rules: BTreeMap<i64, Vec<CompiledRule>>,
}

impl OverrideTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> AppResult<Self> {
        Self::from_rules(builtin_rules())
    }

    pub fn from_rules(rules: Vec<OverrideRule>) -> AppResult<Self> {
        let mut table = Self::default();
        table.extend(rules)?;
        Ok(table)
    }

    /// Append rules; rules for an id run in insertion order.
    pub fn extend(&mut self, rules: Vec<OverrideRule>) -> AppResult<()> {
        for rule in rules {
            let regex = match &rule.action {
                OverrideAction::Suppress => None,
                OverrideAction::Reassign { pattern, .. } => Some(
                    RegexBuilder::new(pattern)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| AppError::InvalidPattern {
                            id: rule.record_id,
                            source,
                        })?,
                ),
            };
            self.rules
                .entry(rule.record_id)
                .or_default()
                .push(CompiledRule { rule, regex });
        }
        Ok(())
    }

    /// Load a YAML list of rules.
    pub fn load_rules(path: &Path) -> AppResult<Vec<OverrideRule>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> impl Iterator<Item = &OverrideRule> {
        self.rules.values().flatten().map(|c| &c.rule)
    }

    /// Apply the rules listed for `record.id` to an already extracted schedule.
    pub fn apply(&self, record: &Record, schedule: &mut Schedule) {
        let Some(rules) = self.rules.get(&record.id) else {
            return;
        };

        for compiled in rules {
            match (&compiled.rule.action, &compiled.regex) {
                (OverrideAction::Suppress, _) => {
                    debug!("override: record {} suppressed", record.id);
                    schedule.clear();
                    return;
                }
                (
                    OverrideAction::Reassign {
                        days,
                        guard,
                        require_marker,
                        ..
                    },
                    Some(regex),
                ) => reassign(record, regex, days, *guard, *require_marker, schedule),
                (OverrideAction::Reassign { .. }, None) => {}
            }
        }
    }
}

fn reassign(
    record: &Record,
    regex: &Regex,
    days: &[Weekday],
    guard: Slot,
    require_marker: bool,
    schedule: &mut Schedule,
) {
    let text = record.raw_text.as_str();
    let Some(caps) = regex.captures(text) else {
        debug!("override: pattern not found for record {}", record.id);
        return;
    };
    let Some(whole) = caps.get(0) else {
        return;
    };
    let Some(mention) = mention_from_captures(&caps, whole.range()) else {
        return;
    };

    let marked: Vec<Weekday> = if require_marker {
        day_markers(text).into_iter().map(|m| m.day).collect()
    } else {
        Vec::new()
    };

    for day in days {
        if require_marker && !marked.contains(day) {
            continue;
        }
        if schedule.contains(&schedule_key(*day, guard)) {
            continue;
        }
        if schedule.bind_if_vacant(*day, &mention) {
            debug!("override: record {} reassigned to {day}", record.id);
        }
    }
}

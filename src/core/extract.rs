use crate::config::Config;
use crate::engine::Extractor;
use crate::engine::overrides::OverrideTable;
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::models::schedule::Schedule;
use log::info;
use std::collections::BTreeMap;
use std::path::Path;

/// High-level logic for the `extract` command.
pub struct ExtractLogic;

impl ExtractLogic {
    /// Build the extractor described by `cfg`; `with_overrides == false` skips every rule.
    pub fn build_extractor(cfg: &Config, with_overrides: bool) -> AppResult<Extractor> {
        let mut table = OverrideTable::empty();
        if with_overrides {
            if cfg.builtin_overrides {
                table = OverrideTable::builtin()?;
            }
            if let Some(file) = &cfg.overrides_file {
                table.extend(OverrideTable::load_rules(Path::new(file))?)?;
            }
        }
        info!("override table: {} rule(s)", table.len());
        Ok(Extractor::new(cfg.thresholds(), table))
    }

    /// Schedules keyed by record id; records without a schedule are omitted.
    ///
    /// When an id appears twice, the later non-empty schedule wins.
    pub fn run(extractor: &Extractor, records: &[Record]) -> BTreeMap<i64, Schedule> {
        records
            .iter()
            .filter_map(|r| extractor.extract(r).map(|s| (r.id, s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Thresholds;

    #[test]
    fn empty_schedules_are_omitted() {
        let extractor = Extractor::new(Thresholds::default(), OverrideTable::empty());
        let records = vec![
            Record::new(1, "Du mardi au samedi, de 10h à 18h."),
            Record::new(2, "Réservation obligatoire"),
            Record::new(3, ""),
        ];
        let out = ExtractLogic::run(&extractor, &records);
        assert_eq!(out.keys().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(out[&1].len(), 10);
    }

    #[test]
    fn overrides_can_be_disabled() {
        let cfg = Config::default();
        let with = ExtractLogic::build_extractor(&cfg, true).unwrap();
        let without = ExtractLogic::build_extractor(&cfg, false).unwrap();
        assert!(!with.overrides().is_empty());
        assert!(without.overrides().is_empty());

        let record = Record::new(4006, "Concert hommage. Vendredi 16 mai à 20h30");
        assert!(with.extract(&record).is_none());
        assert!(without.extract(&record).is_some());
    }
}

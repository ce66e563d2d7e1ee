use crate::config::Config;
use crate::core::extract::ExtractLogic;
use crate::engine::overrides::OverrideAction;
use crate::errors::AppResult;
use crate::ui::table::Table;

/// Handle the `overrides` command: list the effective override table.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let extractor = ExtractLogic::build_extractor(cfg, true)?;

    let mut table = Table::new(["RECORD", "ACTION", "DAYS", "GUARD", "PATTERN"]);
    for rule in extractor.overrides().rules() {
        let row = match &rule.action {
            OverrideAction::Suppress => vec![
                rule.record_id.to_string(),
                "suppress".to_string(),
                String::new(),
                String::new(),
                String::new(),
            ],
            OverrideAction::Reassign {
                pattern,
                days,
                guard,
                require_marker,
            } => {
                let days: Vec<&str> = days.iter().map(|d| d.key()).collect();
                let marker = if *require_marker { " (marker)" } else { "" };
                vec![
                    rule.record_id.to_string(),
                    "reassign".to_string(),
                    format!("{}{marker}", days.join(",")),
                    guard.to_string(),
                    pattern.clone(),
                ]
            }
        };
        table.add_row(row);
    }

    print!("{}", table.render());
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::extract::ExtractLogic;
use crate::errors::AppResult;
use crate::models::record::Record;

/// Handle the `parse` command: one description in, one schedule out (`{}` when empty).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Parse { text, id } = cmd {
        let extractor = ExtractLogic::build_extractor(cfg, id.is_some())?;

        let schedule = match id {
            Some(id) => extractor.extract(&Record::new(*id, text.as_str())),
            None => extractor.extract_text(text),
        }
        .unwrap_or_default();

        println!("{}", serde_json::to_string_pretty(&schedule)?);
    }
    Ok(())
}

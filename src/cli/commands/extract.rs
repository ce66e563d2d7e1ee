use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::extract::ExtractLogic;
use crate::core::input::read_records;
use crate::errors::AppResult;
use crate::export::{
    ExportFormat, ensure_writable, export_csv, export_json, to_csv_string, to_json_string,
};
use crate::ui::messages::{info, warning};
use std::path::Path;

/// Handle the `extract` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Extract {
        input,
        output,
        format,
        id_column,
        text_column,
        no_overrides,
        force,
    } = cmd
    {
        let id_col = id_column.as_deref().unwrap_or(&cfg.id_column);
        let text_col = text_column.as_deref().unwrap_or(&cfg.text_column);

        let report = read_records(Path::new(input), id_col, text_col)?;
        if report.skipped > 0 {
            warning(format!(
                "{} row(s) skipped: unparseable id",
                report.skipped
            ));
        }

        let extractor = ExtractLogic::build_extractor(cfg, !*no_overrides)?;
        let results = ExtractLogic::run(&extractor, &report.records);

        info(format!(
            "{} record(s) read, {} with a recurring schedule",
            report.records.len(),
            results.len()
        ));

        match output {
            None => {
                info(format!("Writing {} to stdout", format.as_str()));
                match format {
                    ExportFormat::Json => println!("{}", to_json_string(&results)?),
                    ExportFormat::Csv => print!("{}", to_csv_string(&results)?),
                }
            }
            Some(file) => {
                let path = Path::new(file);
                ensure_writable(path, *force)?;
                match format {
                    ExportFormat::Json => export_json(&results, path)?,
                    ExportFormat::Csv => export_csv(&results, path)?,
                }
            }
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *edit_config {
            if !path.exists() {
                cfg.save_to(path)?;
            }
            return ConfigLogic::edit(path, editor);
        }

        // --print, or no flag at all
        if *print_config && path.exists() {
            return ConfigLogic::print(path);
        }
        if !path.exists() {
            info(format!(
                "No configuration file at {}; showing defaults",
                path.display()
            ));
        }
        print!("{}", serde_yaml::to_string(cfg)?);
    }
    Ok(())
}

use std::fs;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                info("No config file yet; showing effective defaults.");
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                println!("{}", yaml);
            }
        }

        if *check {
            cfg.validate()?;
            success(format!(
                "Configuration OK: {} lecturers, target {:.0}%, backup {}.",
                cfg.lecturers.len(),
                cfg.target * 100.0,
                if cfg.remote.is_some() {
                    "configured"
                } else {
                    "disabled"
                }
            ));
        }
    }

    Ok(())
}

use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::db;
use crate::db::store;
use crate::errors::AppResult;
use crate::export::{export_xlsx, write_csv, ExportFormat};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = Path::new(file);
        if path.exists() && !*force {
            warning(format!(
                "'{}' already exists. Re-run with --force to overwrite.",
                path.display()
            ));
            return Ok(());
        }

        let pool = db::open_store(cfg)?;
        let records = store::load_all(&pool.conn)?;

        match format {
            ExportFormat::Csv => write_csv(path, &records)?,
            ExportFormat::Xlsx => {
                // summary sheet uses the same aggregation as the dashboard
                let (_, summaries) = aggregate(&records, &cfg.lecturers);
                export_xlsx(&records, &summaries, path)?;
            }
        }

        let _ = db::log::audit(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!("Exported {} records as {}", records.len(), format.as_str()),
        );
    }

    Ok(())
}

use rusqlite::Connection;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{init_db, log};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default lecturer roster
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rollcall…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let conn = Connection::open(&db_path)?;
    let report = init_db(&conn)?;
    if report.renamed_rows > 0 {
        warning(format!(
            "Applied lecturer rename to {} historical rows",
            report.renamed_rows
        ));
    }

    // internal audit row, non-blocking
    if let Err(e) = log::audit(
        &conn,
        "init",
        &db_path.display().to_string(),
        "Database initialized",
    ) {
        warning(format!("Failed to write internal audit log: {}", e));
    }

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}

//! Migrate command - directory schema management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // The subcommand decides what happens to the schema, so skip the
    // automatic migration run on connect.
    let db = Database::connect_unmigrated(&config)
        .await
        .map_err(|e| AppError::internal(format!("Cannot reach the directory database: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.migrate_up()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Directory schema is up to date");
        }
        MigrateAction::Down => {
            db.migrate_down()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Rolled back the most recent migration");
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            for (name, state) in status {
                println!("{}: {}", name, state);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping the directory tables and re-running every migration");
            db.migrate_fresh()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Directory schema rebuilt");
        }
    }

    Ok(())
}

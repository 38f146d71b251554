//! Local SQLite storage behind the record store

pub mod connection;
pub mod migrations;

use std::path::Path;

pub use connection::{Database, DbError, DbResult};

/// Open the database file at `path`, creating its directory if needed, and
/// bring the schema up to date.
pub fn open(path: &Path) -> DbResult<Database> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let database = Database::new(path)?;
    let version = database.with_conn(|conn| {
        migrations::run_migrations(conn)?;
        migrations::get_schema_version(conn)
    })?;
    tracing::info!("opened {} at schema v{}", path.display(), version);

    Ok(database)
}

//! Schema creation and upgrades.
//!
//! Applied versions are recorded as `migration_applied` rows in the `log`
//! table, so running the migrations twice is a no-op.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_initial_schema",
        description: "Created cigars and tastings tables",
        apply: create_base_tables,
    },
    Migration {
        version: "20250412_0002_add_photo_columns",
        description: "Added photo / band_photo references",
        apply: add_photo_columns,
    },
    Migration {
        version: "20250520_0003_add_tasting_indexes",
        description: "Indexed tastings by status and start time",
        apply: add_tasting_indexes,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, description: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, description],
    )?;
    Ok(())
}

fn create_base_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS cigars (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            name           TEXT NOT NULL,
            brand          TEXT NOT NULL,
            origin_country TEXT,
            price          REAL NOT NULL DEFAULT 0 CHECK(price >= 0),
            quantity       INTEGER NOT NULL DEFAULT 0 CHECK(quantity >= 0),
            purchase_date  TEXT,
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tastings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            cigar_id       INTEGER,
            name           TEXT NOT NULL,
            brand          TEXT NOT NULL,
            origin_country TEXT,
            status         TEXT NOT NULL DEFAULT 'em-degustacao'
                           CHECK(status IN ('em-degustacao','finalizado')),
            started_at     TEXT NOT NULL,
            finished_at    TEXT,
            cut            TEXT,
            moment         TEXT,
            draw           TEXT,
            vitola         TEXT,
            flavors        TEXT NOT NULL DEFAULT '[]',
            rating         INTEGER CHECK(rating IS NULL OR (rating >= 0 AND rating <= 10)),
            smoke_duration INTEGER CHECK(smoke_duration IS NULL OR smoke_duration >= 0),
            repurchase     TEXT CHECK(repurchase IS NULL
                               OR repurchase IN ('sim','nao','depende','talvez')),
            notes          TEXT,
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_cigars_name_brand ON cigars(name, brand);
        "#,
    )?;
    Ok(())
}

fn add_photo_columns(conn: &Connection) -> Result<()> {
    if !column_exists(conn, "cigars", "photo")? {
        conn.execute("ALTER TABLE cigars ADD COLUMN photo TEXT;", [])?;
    }
    if !column_exists(conn, "tastings", "band_photo")? {
        conn.execute("ALTER TABLE tastings ADD COLUMN band_photo TEXT;", [])?;
    }
    Ok(())
}

fn add_tasting_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tastings_status ON tastings(status);
        CREATE INDEX IF NOT EXISTS idx_tastings_started ON tastings(started_at);
        "#,
    )?;
    Ok(())
}

/// Copy the database file into a timestamped zip next to it.
fn backup_before_migration(db_path: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!("{}-backup_db_pre_migration.zip", Local::now().format("%Y%m%d_%H%M%S"));
    let backup_path = Path::new(db_path)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&backup_name);

    let db_content = std::fs::read(db_path)?;
    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| AppError::Migration(format!("backup failed (start_file): {e}")))?;
    zip.write_all(&db_content)?;
    zip.finish()
        .map_err(|e| AppError::Migration(format!("backup failed (finish): {e}")))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and by `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m);
        }
    }

    if pending.is_empty() {
        return Ok(());
    }

    // A database that already holds data gets a safety copy first
    if table_exists(conn, "cigars")? {
        warning("Existing schema will be upgraded, creating safety backup...");
        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if db_path.is_empty() {
            warning("Could not determine DB path, backup skipped.");
        } else {
            backup_before_migration(&db_path)?;
        }
    }

    for m in pending {
        (m.apply)(conn).map_err(|e| AppError::Migration(format!("{}: {e}", m.version)))?;
        mark_applied(conn, m.version, m.description)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, MIGRATIONS.len() as i64);
        assert!(column_exists(&conn, "cigars", "photo").unwrap());
        assert!(column_exists(&conn, "tastings", "band_photo").unwrap());
    }

    #[test]
    fn negative_quantity_is_rejected_by_schema() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        let res = conn.execute(
            "INSERT INTO cigars (name, brand, quantity, created_at, updated_at)
             VALUES ('A', 'X', -1, 'now', 'now')",
            [],
        );
        assert!(res.is_err());
    }

    #[test]
    fn unknown_repurchase_code_is_rejected_by_schema() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        let insert = |code: &str| {
            conn.execute(
                "INSERT INTO tastings (name, brand, started_at, repurchase, created_at, updated_at)
                 VALUES ('A', 'X', 'now', ?1, 'now', 'now')",
                [code],
            )
        };
        assert!(insert("sim").is_ok());
        assert!(insert("talvez").is_ok());
        assert!(insert("maybe").is_err());
    }
}

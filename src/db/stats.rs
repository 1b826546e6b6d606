use crate::db::pool::DbPool;
use crate::models::tasting::TastingStatus;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, colorize_optional};
use rusqlite::OptionalExtension;
use std::fs;

/// `db --info`: file size, row counts and the tasting date range.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) STOCK
    //
    let (rows, units): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), IFNULL(SUM(quantity), 0) FROM cigars",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!("{}• Stock rows:{} {}{}{} ({} units)", CYAN, RESET, GREEN, rows, RESET, units);

    //
    // 3) TASTINGS
    //
    let (active, completed): (i64, i64) = pool.conn.query_row(
        "SELECT
            IFNULL(SUM(CASE WHEN status = ?1 THEN 1 ELSE 0 END), 0),
            IFNULL(SUM(CASE WHEN status = ?2 THEN 1 ELSE 0 END), 0)
         FROM tastings",
        [TastingStatus::Active.to_db_str(), TastingStatus::Completed.to_db_str()],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Tastings:{} {}{}{} active, {}{}{} completed",
        CYAN, RESET, GREEN, active, RESET, GREEN, completed, RESET
    );

    //
    // 4) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(started_at, 1, 10) FROM tastings ORDER BY started_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(started_at, 1, 10) FROM tastings ORDER BY started_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = colorize_optional(first.as_deref());
    let fmt_last = colorize_optional(last.as_deref());

    println!("{}• Tasting range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

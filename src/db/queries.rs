//! Row mapping and CRUD for the `cigars` and `tastings` tables.

use crate::errors::{AppError, AppResult};
use crate::models::cigar::Cigar;
use crate::models::session::{Cut, Draw, Moment, SessionSetup};
use crate::models::tasting::{Repurchase, Tasting, TastingStatus};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn parse_timestamp(col: usize, raw: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(col, AppError::InvalidDate(raw.to_string())))
}

/// Flavors are stored as a JSON array. NULL, empty or malformed text
/// decodes to an empty list so a bad row never breaks a listing.
pub fn decode_flavors(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}

pub fn encode_flavors(flavors: &[String]) -> AppResult<String> {
    Ok(serde_json::to_string(flavors)?)
}

// ---------------------------------------------------------------------------
// cigars
// ---------------------------------------------------------------------------

const CIGAR_COLUMNS: &str = "id, name, brand, origin_country, price, quantity, purchase_date, photo, created_at, updated_at";

pub fn map_cigar(row: &Row) -> Result<Cigar> {
    let purchase_date = match row.get::<_, Option<String>>("purchase_date")? {
        Some(s) if !s.is_empty() => Some(
            NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| conversion_error(6, AppError::InvalidDate(s.clone())))?,
        ),
        _ => None,
    };

    Ok(Cigar {
        id: row.get("id")?,
        name: row.get("name")?,
        brand: row.get("brand")?,
        origin_country: row.get("origin_country")?,
        price: row.get("price")?,
        quantity: row.get("quantity")?,
        purchase_date,
        photo: row.get("photo")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// All stock rows, newest first (same order as the stock page).
pub fn load_cigars(conn: &Connection) -> AppResult<Vec<Cigar>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CIGAR_COLUMNS} FROM cigars ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], map_cigar)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_cigar(conn: &Connection, id: i32) -> AppResult<Option<Cigar>> {
    let mut stmt = conn.prepare(&format!("SELECT {CIGAR_COLUMNS} FROM cigars WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_cigar).optional()?)
}

pub fn get_cigar(conn: &Connection, id: i32) -> AppResult<Cigar> {
    find_cigar(conn, id)?.ok_or(AppError::NotFound { entity: "Cigar", id })
}

/// Insert and return the new row id.
pub fn insert_cigar(conn: &Connection, c: &Cigar) -> AppResult<i32> {
    conn.execute(
        "INSERT INTO cigars (name, brand, origin_country, price, quantity, purchase_date, photo, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            c.name,
            c.brand,
            c.origin_country,
            c.price,
            c.quantity,
            c.purchase_date.map(|d| d.format("%Y-%m-%d").to_string()),
            c.photo,
            c.created_at,
            c.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid() as i32)
}

/// Update a cigar (all fields except id and created_at)
pub fn update_cigar(conn: &Connection, c: &Cigar) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE cigars
         SET name = ?1, brand = ?2, origin_country = ?3, price = ?4,
             quantity = ?5, purchase_date = ?6, photo = ?7, updated_at = ?8
         WHERE id = ?9",
        params![
            c.name,
            c.brand,
            c.origin_country,
            c.price,
            c.quantity,
            c.purchase_date.map(|d| d.format("%Y-%m-%d").to_string()),
            c.photo,
            c.updated_at,
            c.id,
        ],
    )?;
    if n == 0 {
        return Err(AppError::NotFound { entity: "Cigar", id: c.id });
    }
    Ok(())
}

pub fn delete_cigar(conn: &Connection, id: i32) -> AppResult<()> {
    let n = conn.execute("DELETE FROM cigars WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::NotFound { entity: "Cigar", id });
    }
    Ok(())
}

/// Lower the quantity by `by`, never below zero. Returns the new quantity.
pub fn decrement_quantity(conn: &Connection, id: i32, by: u32) -> AppResult<u32> {
    let n = conn.execute(
        "UPDATE cigars
         SET quantity = MAX(0, quantity - ?1), updated_at = ?2
         WHERE id = ?3",
        params![by, Local::now().to_rfc3339(), id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound { entity: "Cigar", id });
    }
    let q: u32 = conn.query_row("SELECT quantity FROM cigars WHERE id = ?1", [id], |r| r.get(0))?;
    Ok(q)
}

// ---------------------------------------------------------------------------
// tastings
// ---------------------------------------------------------------------------

const TASTING_COLUMNS: &str = "id, cigar_id, name, brand, origin_country, status, started_at, finished_at, \
     cut, moment, draw, vitola, flavors, rating, smoke_duration, repurchase, notes, band_photo, \
     created_at, updated_at";

pub fn map_tasting(row: &Row) -> Result<Tasting> {
    let status_str: String = row.get("status")?;
    let status = TastingStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(
            5,
            AppError::InvalidChoice {
                field: "status",
                value: status_str.clone(),
            },
        )
    })?;

    let started_raw: String = row.get("started_at")?;
    let started_at = parse_timestamp(6, &started_raw)?;
    let finished_at = match row.get::<_, Option<String>>("finished_at")? {
        Some(s) => Some(parse_timestamp(7, &s)?),
        None => None,
    };

    // Unknown codes in optional columns are dropped rather than failing the row
    let setup = SessionSetup {
        cut: row.get::<_, Option<String>>("cut")?.as_deref().and_then(Cut::from_db_str),
        moment: row
            .get::<_, Option<String>>("moment")?
            .as_deref()
            .and_then(Moment::from_db_str),
        draw: row.get::<_, Option<String>>("draw")?.as_deref().and_then(Draw::from_db_str),
        vitola: row.get("vitola")?,
    };

    let flavors_raw: Option<String> = row.get("flavors")?;

    Ok(Tasting {
        id: row.get("id")?,
        cigar_id: row.get("cigar_id")?,
        name: row.get("name")?,
        brand: row.get("brand")?,
        origin_country: row.get("origin_country")?,
        status,
        started_at,
        finished_at,
        setup,
        rating: row.get("rating")?,
        smoke_duration: row.get("smoke_duration")?,
        flavors: decode_flavors(flavors_raw.as_deref()),
        repurchase: row
            .get::<_, Option<String>>("repurchase")?
            .as_deref()
            .and_then(Repurchase::from_db_str),
        notes: row.get("notes")?,
        band_photo: row.get("band_photo")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn collect_tastings(conn: &Connection, sql: &str, status: Option<TastingStatus>) -> AppResult<Vec<Tasting>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = match status {
        Some(s) => stmt.query_map([s.to_db_str()], map_tasting)?,
        None => stmt.query_map([], map_tasting)?,
    };

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every tasting, oldest first.
pub fn load_tastings(conn: &Connection) -> AppResult<Vec<Tasting>> {
    collect_tastings(
        conn,
        &format!("SELECT {TASTING_COLUMNS} FROM tastings ORDER BY started_at ASC, id ASC"),
        None,
    )
}

/// Tastings with the given status, oldest first.
pub fn load_tastings_by_status(conn: &Connection, status: TastingStatus) -> AppResult<Vec<Tasting>> {
    collect_tastings(
        conn,
        &format!("SELECT {TASTING_COLUMNS} FROM tastings WHERE status = ?1 ORDER BY started_at ASC, id ASC"),
        Some(status),
    )
}

pub fn find_tasting(conn: &Connection, id: i32) -> AppResult<Option<Tasting>> {
    let mut stmt = conn.prepare(&format!("SELECT {TASTING_COLUMNS} FROM tastings WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_tasting).optional()?)
}

pub fn get_tasting(conn: &Connection, id: i32) -> AppResult<Tasting> {
    find_tasting(conn, id)?.ok_or(AppError::NotFound { entity: "Tasting", id })
}

pub fn insert_tasting(conn: &Connection, t: &Tasting) -> AppResult<i32> {
    conn.execute(
        "INSERT INTO tastings (cigar_id, name, brand, origin_country, status, started_at, finished_at,
                               cut, moment, draw, vitola, flavors, rating, smoke_duration, repurchase,
                               notes, band_photo, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
        params![
            t.cigar_id,
            t.name,
            t.brand,
            t.origin_country,
            t.status.to_db_str(),
            t.started_at.to_rfc3339(),
            t.finished_at.map(|d| d.to_rfc3339()),
            t.setup.cut.map(|c| c.to_db_str()),
            t.setup.moment.map(|m| m.to_db_str()),
            t.setup.draw.map(|d| d.to_db_str()),
            t.setup.vitola,
            encode_flavors(&t.flavors)?,
            t.rating,
            t.smoke_duration,
            t.repurchase.map(|r| r.to_db_str()),
            t.notes,
            t.band_photo,
            t.created_at,
            t.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid() as i32)
}

/// Update a tasting (all fields except id, cigar_id and created_at)
pub fn update_tasting(conn: &Connection, t: &Tasting) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE tastings
         SET name = ?1, brand = ?2, origin_country = ?3, status = ?4,
             started_at = ?5, finished_at = ?6, cut = ?7, moment = ?8, draw = ?9,
             vitola = ?10, flavors = ?11, rating = ?12, smoke_duration = ?13,
             repurchase = ?14, notes = ?15, band_photo = ?16, updated_at = ?17
         WHERE id = ?18",
        params![
            t.name,
            t.brand,
            t.origin_country,
            t.status.to_db_str(),
            t.started_at.to_rfc3339(),
            t.finished_at.map(|d| d.to_rfc3339()),
            t.setup.cut.map(|c| c.to_db_str()),
            t.setup.moment.map(|m| m.to_db_str()),
            t.setup.draw.map(|d| d.to_db_str()),
            t.setup.vitola,
            encode_flavors(&t.flavors)?,
            t.rating,
            t.smoke_duration,
            t.repurchase.map(|r| r.to_db_str()),
            t.notes,
            t.band_photo,
            t.updated_at,
            t.id,
        ],
    )?;
    if n == 0 {
        return Err(AppError::NotFound { entity: "Tasting", id: t.id });
    }
    Ok(())
}

pub fn delete_tasting(conn: &Connection, id: i32) -> AppResult<()> {
    let n = conn.execute("DELETE FROM tastings WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::NotFound { entity: "Tasting", id });
    }
    Ok(())
}

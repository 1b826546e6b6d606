use crate::core::inventory::InventoryLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_tasting, get_cigar, get_tasting, insert_tasting, update_tasting};
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionSetup;
use crate::models::tasting::{FinishData, Tasting, TastingStatus};
use crate::utils::minutes_label;
use chrono::{DateTime, Local};

/// Tasting lifecycle: start → finish, or removal at any point.
pub struct TastingLogic;

impl TastingLogic {
    /// Take one unit out of stock and open an active session for it.
    pub fn start(
        pool: &mut DbPool,
        cigar_id: i32,
        setup: SessionSetup,
        now: DateTime<Local>,
    ) -> AppResult<Tasting> {
        let tx = pool.conn.transaction()?;

        let cigar = get_cigar(&tx, cigar_id)?;
        if !cigar.is_available() {
            return Err(AppError::OutOfStock(cigar.name));
        }

        let left = InventoryLogic::decrement(&tx, cigar_id, 1)?;

        let mut tasting = Tasting::start_from(&cigar, setup, now);
        tasting.id = insert_tasting(&tx, &tasting)?;

        ttlog(
            &tx,
            "start",
            &format!("tasting #{}", tasting.id),
            &format!("{} / {} ({} left in stock)", tasting.name, tasting.brand, left),
        )?;

        tx.commit()?;
        Ok(tasting)
    }

    /// Close an active session with its evaluation.
    pub fn finish(pool: &mut DbPool, id: i32, data: FinishData, now: DateTime<Local>) -> AppResult<Tasting> {
        validate_finish(&data)?;

        let mut tasting = get_tasting(&pool.conn, id)?;
        if !tasting.is_active() {
            return Err(AppError::InvalidStatus {
                id,
                status: tasting.status.label().to_string(),
                expected: TastingStatus::Active.label().to_string(),
            });
        }

        tasting.status = TastingStatus::Completed;
        tasting.finished_at = Some(now);
        tasting.rating = Some(data.rating);
        tasting.smoke_duration = Some(data.smoke_duration);
        tasting.flavors = dedup_flavors(data.flavors);
        tasting.repurchase = Some(data.repurchase);
        tasting.notes = data.notes.filter(|n| !n.trim().is_empty());
        tasting.band_photo = data.band_photo;
        tasting.updated_at = now.to_rfc3339();

        update_tasting(&pool.conn, &tasting)?;

        ttlog(
            &pool.conn,
            "finish",
            &format!("tasting #{id}"),
            &format!("{} rated {}/10", tasting.name, data.rating),
        )?;
        Ok(tasting)
    }

    /// Delete a session regardless of its status. Stock is not restored.
    pub fn remove(pool: &mut DbPool, id: i32) -> AppResult<Tasting> {
        let tasting = get_tasting(&pool.conn, id)?;
        delete_tasting(&pool.conn, id)?;

        ttlog(
            &pool.conn,
            "del",
            &format!("tasting #{id}"),
            &format!("{} / {} ({})", tasting.name, tasting.brand, tasting.status.label()),
        )?;
        Ok(tasting)
    }
}

/// Rating 0..=10, non-zero duration.
pub fn validate_finish(data: &FinishData) -> AppResult<()> {
    if data.rating > 10 {
        return Err(AppError::InvalidRating(i64::from(data.rating)));
    }
    if data.smoke_duration == 0 {
        return Err(AppError::MissingField("smoke duration"));
    }
    Ok(())
}

/// Trim, drop blanks and duplicates, keep first-seen order.
pub fn dedup_flavors(flavors: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(flavors.len());
    for f in flavors {
        let f = f.trim().to_string();
        if !f.is_empty() && !out.contains(&f) {
            out.push(f);
        }
    }
    out
}

/// Time since the session started, for the active-sessions view.
pub fn elapsed_label(started_at: DateTime<Local>, now: DateTime<Local>) -> String {
    minutes_label((now - started_at).num_minutes())
}

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{decrement_quantity, delete_cigar, get_cigar, insert_cigar, load_cigars, update_cigar};
use crate::errors::{AppError, AppResult};
use crate::models::cigar::{Cigar, CigarPatch};
use rusqlite::Connection;

/// Stock management ("estoque").
pub struct InventoryLogic;

fn validate(c: &Cigar) -> AppResult<()> {
    if c.name.trim().is_empty() {
        return Err(AppError::MissingField("name"));
    }
    if c.brand.trim().is_empty() {
        return Err(AppError::MissingField("brand"));
    }
    if !c.price.is_finite() || c.price < 0.0 {
        return Err(AppError::InvalidPrice(c.price.to_string()));
    }
    Ok(())
}

impl InventoryLogic {
    pub fn list(pool: &mut DbPool) -> AppResult<Vec<Cigar>> {
        load_cigars(&pool.conn)
    }

    pub fn add(pool: &mut DbPool, mut cigar: Cigar) -> AppResult<Cigar> {
        validate(&cigar)?;

        cigar.id = insert_cigar(&pool.conn, &cigar)?;

        ttlog(
            &pool.conn,
            "add",
            &format!("cigar #{}", cigar.id),
            &format!("{} / {} (qty {})", cigar.name, cigar.brand, cigar.quantity),
        )?;
        Ok(cigar)
    }

    pub fn edit(pool: &mut DbPool, id: i32, patch: CigarPatch) -> AppResult<Cigar> {
        let mut cigar = get_cigar(&pool.conn, id)?;
        if patch.is_empty() {
            return Ok(cigar);
        }

        patch.apply(&mut cigar);
        validate(&cigar)?;
        update_cigar(&pool.conn, &cigar)?;

        ttlog(
            &pool.conn,
            "edit",
            &format!("cigar #{id}"),
            &format!("{} / {} (qty {})", cigar.name, cigar.brand, cigar.quantity),
        )?;
        Ok(cigar)
    }

    pub fn delete(pool: &mut DbPool, id: i32) -> AppResult<Cigar> {
        let cigar = get_cigar(&pool.conn, id)?;
        delete_cigar(&pool.conn, id)?;

        ttlog(
            &pool.conn,
            "del",
            &format!("cigar #{id}"),
            &format!("{} / {}", cigar.name, cigar.brand),
        )?;
        Ok(cigar)
    }

    /// Remove `by` units, saturating at zero. Returns the remaining quantity.
    ///
    /// Takes a bare connection so callers can run it inside their own
    /// transaction.
    pub fn decrement(conn: &Connection, id: i32, by: u32) -> AppResult<u32> {
        let left = decrement_quantity(conn, id, by)?;
        ttlog(conn, "edit", &format!("cigar #{id}"), &format!("-{by} unit(s), {left} left"))?;
        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    #[test]
    fn add_edit_delete() {
        let mut pool = pool();
        let added = InventoryLogic::add(&mut pool, Cigar::new("Robusto", "Cohiba")).unwrap();
        assert!(added.id > 0);

        let edited = InventoryLogic::edit(
            &mut pool,
            added.id,
            CigarPatch {
                price: Some(42.5),
                origin_country: Some("Cuba".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(edited.price, 42.5);
        assert_eq!(edited.origin_country.as_deref(), Some("Cuba"));

        InventoryLogic::delete(&mut pool, added.id).unwrap();
        assert!(InventoryLogic::list(&mut pool).unwrap().is_empty());
    }

    #[test]
    fn blank_name_and_negative_price_are_rejected() {
        let mut pool = pool();
        assert!(matches!(
            InventoryLogic::add(&mut pool, Cigar::new("  ", "Cohiba")),
            Err(AppError::MissingField("name"))
        ));

        let mut c = Cigar::new("Robusto", "Cohiba");
        c.price = -1.0;
        assert!(matches!(InventoryLogic::add(&mut pool, c), Err(AppError::InvalidPrice(_))));
    }

    #[test]
    fn edit_unknown_id_is_not_found() {
        let mut pool = pool();
        let res = InventoryLogic::edit(
            &mut pool,
            99,
            CigarPatch {
                quantity: Some(1),
                ..Default::default()
            },
        );
        assert!(matches!(res, Err(AppError::NotFound { id: 99, .. })));
    }

    #[test]
    fn mutations_are_audited() {
        let mut pool = pool();
        let c = InventoryLogic::add(&mut pool, Cigar::new("Robusto", "Cohiba")).unwrap();
        InventoryLogic::decrement(&pool.conn, c.id, 1).unwrap();

        let n: i64 = pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation IN ('add', 'edit')",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(n, 2);
    }
}

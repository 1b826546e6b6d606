use crate::cli::parser::{Commands, StockAction, StockFields};
use crate::config::Config;
use crate::core::inventory::InventoryLogic;
use crate::core::stats::summarize_inventory;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::cigar::{Cigar, CigarPatch};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, color_for_quantity};
use crate::utils::date::parse_optional_date;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Stock { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        StockAction::Add { name, brand, fields } => {
            let mut cigar = Cigar::new(name, brand);
            let patch = patch_from(fields)?;
            patch.apply(&mut cigar);

            let cigar = InventoryLogic::add(&mut pool, cigar)?;
            success(format!(
                "Added #{}: {} / {} ({} unit(s))",
                cigar.id, cigar.name, cigar.brand, cigar.quantity
            ));
        }
        StockAction::Edit { id, name, brand, fields } => {
            let mut patch = patch_from(fields)?;
            patch.name = name.clone();
            patch.brand = brand.clone();

            if patch.is_empty() {
                info("Nothing to update.");
                return Ok(());
            }

            let cigar = InventoryLogic::edit(&mut pool, *id, patch)?;
            success(format!(
                "Updated #{}: {} / {} ({} unit(s))",
                cigar.id, cigar.name, cigar.brand, cigar.quantity
            ));
        }
        StockAction::Del { id } => {
            let cigar = InventoryLogic::delete(&mut pool, *id)?;
            success(format!("Removed #{}: {} / {}", cigar.id, cigar.name, cigar.brand));
        }
        StockAction::List { available } => {
            let inventory = InventoryLogic::list(&mut pool)?;
            print_stock(&inventory, *available, cfg);
        }
    }

    Ok(())
}

fn parse_quantity(raw: i64) -> AppResult<u32> {
    u32::try_from(raw).map_err(|_| AppError::InvalidQuantity(raw.to_string()))
}

fn patch_from(fields: &StockFields) -> AppResult<CigarPatch> {
    Ok(CigarPatch {
        origin_country: fields.origin.clone(),
        price: fields.price,
        quantity: fields.quantity.map(parse_quantity).transpose()?,
        purchase_date: parse_optional_date(fields.purchase_date.as_deref())?,
        photo: fields.photo.clone(),
        ..Default::default()
    })
}

fn print_stock(inventory: &[Cigar], only_available: bool, cfg: &Config) {
    let summary = summarize_inventory(inventory);

    header("Stock");

    let rows: Vec<&Cigar> = inventory
        .iter()
        .filter(|c| !only_available || c.is_available())
        .collect();

    if rows.is_empty() {
        println!("No cigars in stock.");
    } else {
        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Name", 24),
            Column::new("Brand", 18),
            Column::new("Origin", 14),
            Column::new("Qty", 4),
            Column::new("Price", 10),
            Column::new("Bought", 10),
        ]);
        for c in &rows {
            table.add_row(vec![
                c.id.to_string(),
                c.name.clone(),
                c.brand.clone(),
                c.origin_country.clone().unwrap_or_default(),
                c.quantity.to_string(),
                format!("{:.2}", c.price),
                c.purchase_date_str(),
            ]);
        }

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let rendered = table.render(sep);
        // header and separator first, then one line per row in the same order
        let mut lines = rendered.lines();
        for line in lines.by_ref().take(2) {
            println!("{line}");
        }
        for (line, c) in lines.zip(&rows) {
            println!("{}{line}{RESET}", color_for_quantity(c.quantity));
        }
    }

    println!();
    println!("Units in stock : {}", summary.total_units);
    println!("Stock value    : {}", money(&summary.total_value, &cfg.currency));
    println!(
        "Available items: {} of {}",
        summary.available_items, summary.distinct_items
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_is_rejected() {
        assert_eq!(parse_quantity(3).unwrap(), 3);
        assert!(matches!(parse_quantity(-1), Err(AppError::InvalidQuantity(_))));
    }

    #[test]
    fn patch_carries_parsed_fields() {
        let fields = StockFields {
            origin: Some("Cuba".into()),
            price: Some(42.0),
            quantity: Some(5),
            purchase_date: Some("2025-03-01".into()),
            photo: None,
        };
        let patch = patch_from(&fields).unwrap();
        assert_eq!(patch.quantity, Some(5));
        assert_eq!(patch.purchase_date.map(|d| d.to_string()).as_deref(), Some("2025-03-01"));
        assert!(patch.name.is_none());
    }
}

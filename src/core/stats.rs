//! Summary statistics over the stock and the completed tastings.
//!
//! Every function is a single pass over the slice it receives and defines an
//! explicit value for empty input.

use crate::models::cigar::Cigar;
use crate::models::summary::{InventorySummary, TastingSummary};
use crate::models::tasting::Tasting;

/// Σ quantity. Empty → 0.
pub fn total_units(inventory: &[Cigar]) -> u64 {
    inventory.iter().map(|c| u64::from(c.quantity)).sum()
}

/// Σ price × quantity, two decimals. Empty → "0.00".
pub fn total_value(inventory: &[Cigar]) -> String {
    // folding from +0.0 keeps an empty sum from printing as "-0.00"
    let total = inventory.iter().map(Cigar::stock_value).fold(0.0, |acc, v| acc + v);
    format!("{:.2}", total)
}

/// Number of stock rows with at least one unit left.
pub fn available_items(inventory: &[Cigar]) -> usize {
    inventory.iter().filter(|c| c.is_available()).count()
}

pub fn tasting_count(completed: &[Tasting]) -> usize {
    completed.len()
}

/// Mean smoke duration in minutes, rounded to the nearest integer. Empty → 0.
pub fn average_duration(completed: &[Tasting]) -> u32 {
    if completed.is_empty() {
        return 0;
    }
    let sum: u64 = completed
        .iter()
        .map(|t| u64::from(t.smoke_duration.unwrap_or(0)))
        .sum();
    (sum as f64 / completed.len() as f64).round() as u32
}

/// Mean rating with one decimal. Empty → "0.0".
pub fn average_rating(completed: &[Tasting]) -> String {
    if completed.is_empty() {
        return "0.0".to_string();
    }
    let sum: u64 = completed.iter().map(|t| u64::from(t.rating_or_zero())).sum();
    format!("{:.1}", sum as f64 / completed.len() as f64)
}

/// Highest rating present. Empty → 0.
pub fn best_rating(completed: &[Tasting]) -> u8 {
    completed
        .iter()
        .map(Tasting::rating_or_zero)
        .max()
        .unwrap_or(0)
}

/// Record with the highest rating; the first one wins on ties.
pub fn favorite_item(completed: &[Tasting]) -> Option<&Tasting> {
    let mut best: Option<&Tasting> = None;
    for t in completed {
        match best {
            Some(b) if b.rating_or_zero() >= t.rating_or_zero() => {}
            _ => best = Some(t),
        }
    }
    best
}

pub fn summarize_inventory(inventory: &[Cigar]) -> InventorySummary {
    InventorySummary {
        total_units: total_units(inventory),
        total_value: total_value(inventory),
        available_items: available_items(inventory),
        distinct_items: inventory.len(),
    }
}

pub fn summarize_tastings(completed: &[Tasting]) -> TastingSummary {
    TastingSummary {
        count: tasting_count(completed),
        average_duration: average_duration(completed),
        average_rating: average_rating(completed),
        best_rating: best_rating(completed),
        favorite: favorite_item(completed).map(|t| t.name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::SessionSetup;
    use chrono::Local;

    fn cigar(name: &str, price: f64, quantity: u32) -> Cigar {
        let mut c = Cigar::new(name, "Brand");
        c.price = price;
        c.quantity = quantity;
        c
    }

    fn done(name: &str, rating: Option<u8>, minutes: Option<u32>) -> Tasting {
        let mut t = Tasting::start_from(&Cigar::new(name, "Brand"), SessionSetup::default(), Local::now());
        t.rating = rating;
        t.smoke_duration = minutes;
        t
    }

    #[test]
    fn empty_inventory_has_zero_totals() {
        assert_eq!(total_units(&[]), 0);
        assert_eq!(total_value(&[]), "0.00");
        assert_eq!(available_items(&[]), 0);
        assert_eq!(summarize_inventory(&[]).total_value, "0.00");
    }

    #[test]
    fn sold_out_inventory_values_to_positive_zero() {
        let inv = vec![cigar("A", 12.5, 0), cigar("B", 0.0, 4)];
        assert_eq!(total_value(&inv), "0.00");
    }

    #[test]
    fn empty_history_has_zero_stats() {
        assert_eq!(average_duration(&[]), 0);
        assert_eq!(average_rating(&[]), "0.0");
        assert_eq!(best_rating(&[]), 0);
        assert!(favorite_item(&[]).is_none());
        assert_eq!(summarize_tastings(&[]).favorite_label(), "None");
    }

    #[test]
    fn inventory_totals() {
        let inv = vec![cigar("A", 12.5, 2), cigar("B", 30.0, 0), cigar("C", 7.333, 3)];
        assert_eq!(total_units(&inv), 5);
        // 25 + 0 + 21.999
        assert_eq!(total_value(&inv), "47.00");
        assert_eq!(available_items(&inv), 2);

        let s = summarize_inventory(&inv);
        assert_eq!(s.distinct_items, 3);
        assert_eq!(s.total_units, 5);
    }

    #[test]
    fn averages_round_as_displayed() {
        let h = vec![
            done("A", Some(8), Some(45)),
            done("B", Some(7), Some(50)),
            done("C", None, None),
        ];
        // (45 + 50 + 0) / 3 = 31.67
        assert_eq!(average_duration(&h), 32);
        // (8 + 7 + 0) / 3 = 5.0
        assert_eq!(average_rating(&h), "5.0");
        assert_eq!(best_rating(&h), 8);
    }

    #[test]
    fn favorite_prefers_first_on_tie() {
        let h = vec![
            done("First", Some(9), Some(30)),
            done("Low", Some(4), Some(30)),
            done("Second", Some(9), Some(30)),
        ];
        assert_eq!(favorite_item(&h).map(|t| t.name.as_str()), Some("First"));
        assert_eq!(summarize_tastings(&h).favorite_label(), "First");
    }

    #[test]
    fn favorite_picks_highest() {
        let h = vec![done("A", Some(3), None), done("B", Some(10), None)];
        assert_eq!(favorite_item(&h).map(|t| t.name.as_str()), Some("B"));
    }
}

//! Flavor-based recommendations for the dashboard.
//!
//! Inputs are plain snapshots: the selected flavor tags, the tasting history
//! and the stock the caller considers available. Nothing here touches the
//! database.

use crate::models::cigar::Cigar;
use crate::models::recommendation::Recommendation;
use crate::models::tasting::Tasting;

/// Maximum entries returned when the history has evidence for the flavors.
pub const PRIMARY_LIMIT: usize = 4;
/// Maximum entries returned by the keyword fallback.
pub const FALLBACK_LIMIT: usize = 3;

/// Weight applied to the rating of a different product that shares a flavor.
const RELATED_WEIGHT: f64 = 0.5;

/// Stock rows with quantity > 0, in input order.
pub fn available_stock(inventory: &[Cigar]) -> Vec<Cigar> {
    inventory.iter().filter(|c| c.is_available()).cloned().collect()
}

/// Rank `available` against the `selected` flavors using `history`.
///
/// `available` is expected to be pre-filtered to items in stock
/// (see [`available_stock`]).
pub fn recommend(selected: &[String], history: &[Tasting], available: &[Cigar]) -> Vec<Recommendation> {
    if selected.is_empty() {
        return Vec::new();
    }

    let matching: Vec<&Tasting> = history.iter().filter(|h| h.shares_flavor(selected)).collect();

    if matching.is_empty() {
        keyword_fallback(selected, available)
    } else {
        score_from_history(selected, &matching, available)
    }
}

fn score_from_history(selected: &[String], matching: &[&Tasting], available: &[Cigar]) -> Vec<Recommendation> {
    let mut out: Vec<Recommendation> = available
        .iter()
        .map(|c| {
            let mut rec = Recommendation::new(c.clone());

            for h in matching {
                let weight = if h.same_product(c) {
                    rec.already_smoked = true;
                    1.0
                } else if h.shares_flavor(selected) {
                    RELATED_WEIGHT
                } else {
                    continue;
                };

                rec.score += f64::from(h.rating_or_zero()) * weight;
                for f in h.flavors_in(selected) {
                    rec.add_flavor(f);
                }
            }

            rec
        })
        .filter(Recommendation::is_relevant)
        .collect();

    // sort_by is stable: equal scores keep stock order
    out.sort_by(|a, b| b.score.total_cmp(&a.score));
    out.truncate(PRIMARY_LIMIT);
    out
}

fn keyword_fallback(selected: &[String], available: &[Cigar]) -> Vec<Recommendation> {
    available
        .iter()
        .filter_map(|c| {
            let text = c.search_text();
            let mut rec = Recommendation::new(c.clone());
            for flavor in selected {
                if text.contains(&flavor.to_lowercase()) {
                    rec.add_flavor(flavor);
                }
            }
            (!rec.matched_flavors.is_empty()).then_some(rec)
        })
        .take(FALLBACK_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::SessionSetup;
    use crate::models::tasting::TastingStatus;
    use chrono::Local;

    fn flavors(list: &[&str]) -> Vec<String> {
        list.iter().map(|f| f.to_string()).collect()
    }

    fn stock(name: &str, brand: &str, quantity: u32) -> Cigar {
        let mut c = Cigar::new(name, brand);
        c.quantity = quantity;
        c
    }

    fn smoked(name: &str, brand: &str, rating: Option<u8>, tags: &[&str]) -> Tasting {
        let mut t = Tasting::start_from(&Cigar::new(name, brand), SessionSetup::default(), Local::now());
        t.status = TastingStatus::Completed;
        t.rating = rating;
        t.flavors = flavors(tags);
        t
    }

    #[test]
    fn no_selection_means_no_recommendations() {
        let history = vec![smoked("A", "X", Some(8), &["Café"])];
        let inv = vec![stock("A", "X", 2)];
        assert!(recommend(&[], &history, &inv).is_empty());
    }

    #[test]
    fn same_product_gets_full_rating() {
        let history = vec![smoked("A", "X", Some(8), &["Café"])];
        let inv = vec![stock("A", "X", 2)];

        let got = recommend(&flavors(&["Café"]), &history, &inv);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].cigar.name, "A");
        assert_eq!(got[0].score, 8.0);
        assert_eq!(got[0].matched_flavors, vec!["Café"]);
        assert!(got[0].already_smoked);
    }

    #[test]
    fn other_product_gets_half_rating() {
        let history = vec![smoked("A", "X", Some(6), &["Madeira"])];
        let inv = vec![stock("B", "Y", 1)];

        let got = recommend(&flavors(&["Madeira"]), &history, &inv);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].score, 3.0);
        assert_eq!(got[0].matched_flavors, vec!["Madeira"]);
        assert!(!got[0].already_smoked);
    }

    #[test]
    fn unrated_evidence_still_records_flavors() {
        let history = vec![smoked("A", "X", None, &["Café"])];
        let inv = vec![stock("B", "Y", 1)];

        let got = recommend(&flavors(&["Café"]), &history, &inv);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].score, 0.0);
        assert_eq!(got[0].matched_flavors, vec!["Café"]);
    }

    #[test]
    fn full_and_half_weights_add_up() {
        let history = vec![
            smoked("A", "X", Some(8), &["Café", "Terroso"]),
            smoked("B", "Y", Some(6), &["Terroso"]),
            smoked("C", "Z", Some(9), &["Flores"]),
        ];
        let inv = vec![stock("A", "X", 1), stock("B", "Y", 1)];

        let got = recommend(&flavors(&["Terroso", "Café"]), &history, &inv);
        assert_eq!(got.len(), 2);
        // A: 8 + 0.5*6 = 11 ; B: 0.5*8 + 6 = 10
        assert_eq!(got[0].cigar.name, "A");
        assert_eq!(got[0].score, 11.0);
        assert_eq!(got[0].matched_flavors, vec!["Café", "Terroso"]);
        assert_eq!(got[1].cigar.name, "B");
        assert_eq!(got[1].score, 10.0);
        // the Flores record is not part of the matching history
        assert!(got.iter().all(|r| !r.matched_flavors.contains(&"Flores".to_string())));
    }

    #[test]
    fn brand_match_counts_as_same_product() {
        let history = vec![smoked("Siglo VI", "Cohiba", Some(10), &["Chocolate"])];
        let inv = vec![stock("Robusto", "Cohiba", 3)];

        let got = recommend(&flavors(&["Chocolate"]), &history, &inv);
        assert_eq!(got[0].score, 10.0);
        assert!(got[0].already_smoked);
    }

    #[test]
    fn ties_keep_stock_order_and_list_is_capped() {
        let history = vec![smoked("H", "House", Some(4), &["Café"])];
        let inv: Vec<Cigar> = (1..=6).map(|i| stock(&format!("C{i}"), &format!("B{i}"), 1)).collect();

        let got = recommend(&flavors(&["Café"]), &history, &inv);
        assert_eq!(got.len(), PRIMARY_LIMIT);
        let names: Vec<&str> = got.iter().map(|r| r.cigar.name.as_str()).collect();
        assert_eq!(names, vec!["C1", "C2", "C3", "C4"]);
        assert!(got.iter().all(|r| r.score == 2.0));
    }

    #[test]
    fn history_without_selected_flavor_uses_fallback() {
        let history = vec![smoked("A", "X", Some(9), &["Flores"])];
        let mut with_origin = stock("Maduro", "Casa", 1);
        with_origin.origin_country = Some("Nicarágua".into());
        let inv = vec![
            stock("Chocolate Robusto", "Casa", 1),
            stock("Plain", "Brand", 1),
            with_origin,
        ];

        let got = recommend(&flavors(&["chocolate", "nicarágua"]), &history, &inv);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].cigar.name, "Chocolate Robusto");
        assert_eq!(got[0].score, 0.0);
        assert_eq!(got[0].matched_flavors, vec!["chocolate"]);
        assert!(!got[0].already_smoked);
        assert_eq!(got[1].matched_flavors, vec!["nicarágua"]);
    }

    #[test]
    fn empty_history_fallback_is_capped_at_three() {
        let inv: Vec<Cigar> = (1..=5).map(|i| stock(&format!("Café {i}"), "B", 1)).collect();
        let got = recommend(&flavors(&["Café"]), &[], &inv);
        assert_eq!(got.len(), FALLBACK_LIMIT);
        assert!(got.iter().all(|r| r.score == 0.0 && r.matched_flavors == vec!["Café"]));
    }

    #[test]
    fn fallback_without_matches_is_empty() {
        let inv = vec![stock("Robusto", "Cohiba", 1)];
        assert!(recommend(&flavors(&["Pimenta"]), &[], &inv).is_empty());
    }

    #[test]
    fn records_without_flavors_are_skipped() {
        let history = vec![smoked("A", "X", Some(10), &[]), smoked("B", "Y", Some(6), &["Café"])];
        let inv = vec![stock("A", "X", 1)];

        let got = recommend(&flavors(&["Café"]), &history, &inv);
        // A is only related through B's flavor: 0.5 * 6
        assert_eq!(got[0].score, 3.0);
        assert!(!got[0].already_smoked);
    }

    #[test]
    fn available_stock_drops_empty_rows() {
        let inv = vec![stock("A", "X", 0), stock("B", "Y", 2)];
        let got = available_stock(&inv);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "B");
    }
}

//! Filtering of the completed-tasting history.

use crate::errors::{AppError, AppResult};
use crate::models::tasting::Tasting;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingBand {
    #[default]
    All,
    NineTen,    // >= 9
    SevenEight, // 7..9
    FiveSix,    // 5..7
    ThreeFour,  // 3..5
    OneTwo,     // 1..3
}

impl RatingBand {
    pub fn contains(&self, rating: u8) -> bool {
        match self {
            RatingBand::All => true,
            RatingBand::NineTen => rating >= 9,
            RatingBand::SevenEight => (7..9).contains(&rating),
            RatingBand::FiveSix => (5..7).contains(&rating),
            RatingBand::ThreeFour => (3..5).contains(&rating),
            RatingBand::OneTwo => (1..3).contains(&rating),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingBand::All => "all",
            RatingBand::NineTen => "9-10",
            RatingBand::SevenEight => "7-8",
            RatingBand::FiveSix => "5-6",
            RatingBand::ThreeFour => "3-4",
            RatingBand::OneTwo => "1-2",
        }
    }
}

impl FromStr for RatingBand {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todas" => Ok(RatingBand::All),
            "9-10" => Ok(RatingBand::NineTen),
            "7-8" => Ok(RatingBand::SevenEight),
            "5-6" => Ok(RatingBand::FiveSix),
            "3-4" => Ok(RatingBand::ThreeFour),
            "1-2" => Ok(RatingBand::OneTwo),
            _ => Err(AppError::InvalidRatingBand(s.to_string())),
        }
    }
}

fn matches_text(t: &Tasting, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        Some(t.name.as_str()),
        Some(t.brand.as_str()),
        t.origin_country.as_deref(),
        t.notes.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Records whose name, brand, origin or notes contain `text`
/// (case-insensitive) and whose rating falls in `band`. Input order is kept.
pub fn filter<'a>(history: &'a [Tasting], text: &str, band: RatingBand) -> Vec<&'a Tasting> {
    let needle = text.trim().to_lowercase();
    history
        .iter()
        .filter(|t| matches_text(t, &needle) && band.contains(t.rating_or_zero()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cigar::Cigar;
    use crate::models::session::SessionSetup;
    use chrono::Local;

    fn record(name: &str, brand: &str, origin: Option<&str>, notes: Option<&str>, rating: u8) -> Tasting {
        let mut c = Cigar::new(name, brand);
        c.origin_country = origin.map(str::to_string);
        let mut t = Tasting::start_from(&c, SessionSetup::default(), Local::now());
        t.notes = notes.map(str::to_string);
        t.rating = Some(rating);
        t
    }

    fn history() -> Vec<Tasting> {
        vec![
            record("Robusto", "Cohiba", Some("Cuba"), None, 9),
            record("No. 2", "Montecristo", Some("Cuba"), Some("creamy finish"), 7),
            record("Maduro", "Padrón", Some("Nicaragua"), Some("peppery"), 4),
        ]
    }

    #[test]
    fn text_matches_any_field_case_insensitive() {
        let h = history();
        assert_eq!(filter(&h, "cuba", RatingBand::All).len(), 2);
        assert_eq!(filter(&h, "CREAMY", RatingBand::All)[0].name, "No. 2");
        assert_eq!(filter(&h, "padr", RatingBand::All)[0].name, "Maduro");
        assert_eq!(filter(&h, "", RatingBand::All).len(), 3);
        assert!(filter(&h, "dominican", RatingBand::All).is_empty());
    }

    #[test]
    fn bands_are_half_open() {
        let h = history();
        let names = |band| -> Vec<String> { filter(&h, "", band).iter().map(|t| t.name.clone()).collect() };
        assert_eq!(names(RatingBand::NineTen), vec!["Robusto"]);
        assert_eq!(names(RatingBand::SevenEight), vec!["No. 2"]);
        assert_eq!(names(RatingBand::ThreeFour), vec!["Maduro"]);
        assert!(names(RatingBand::OneTwo).is_empty());
    }

    #[test]
    fn text_and_band_combine() {
        let h = history();
        let got = filter(&h, "cuba", RatingBand::NineTen);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].brand, "Cohiba");
    }

    #[test]
    fn band_parsing() {
        assert_eq!("9-10".parse::<RatingBand>().unwrap(), RatingBand::NineTen);
        assert_eq!("todas".parse::<RatingBand>().unwrap(), RatingBand::All);
        assert!("8-9".parse::<RatingBand>().is_err());
    }
}

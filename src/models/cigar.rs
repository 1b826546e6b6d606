use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A stocked cigar ("estoque" row).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cigar {
    pub id: i32,
    pub name: String,                   // ⇔ cigars.name
    pub brand: String,                  // ⇔ cigars.brand
    pub origin_country: Option<String>, // ⇔ cigars.origin_country (NULL allowed)
    pub price: f64,                     // ⇔ cigars.price (unit price, default 0)
    pub quantity: u32,                  // ⇔ cigars.quantity (CHECK >= 0)
    pub purchase_date: Option<NaiveDate>,
    pub photo: Option<String>, // opaque reference, never read by the app
    pub created_at: String,
    pub updated_at: String,
}

impl Cigar {
    /// Build a new, not yet persisted, stock entry (`id = 0`).
    pub fn new(name: &str, brand: &str) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            name: name.trim().to_string(),
            brand: brand.trim().to_string(),
            origin_country: None,
            price: 0.0,
            quantity: 1,
            purchase_date: None,
            photo: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Unit price times quantity on hand.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// "name brand origin", lowercased. Used by keyword matching.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.brand,
            self.origin_country.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }

    pub fn purchase_date_str(&self) -> String {
        self.purchase_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Partial update for `stock edit`. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct CigarPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub origin_country: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub purchase_date: Option<NaiveDate>,
    pub photo: Option<String>,
}

impl CigarPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.brand.is_none()
            && self.origin_country.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.purchase_date.is_none()
            && self.photo.is_none()
    }

    pub fn apply(self, cigar: &mut Cigar) {
        if let Some(v) = self.name {
            cigar.name = v.trim().to_string();
        }
        if let Some(v) = self.brand {
            cigar.brand = v.trim().to_string();
        }
        if let Some(v) = self.origin_country {
            cigar.origin_country = Some(v);
        }
        if let Some(v) = self.price {
            cigar.price = v;
        }
        if let Some(v) = self.quantity {
            cigar.quantity = v;
        }
        if let Some(v) = self.purchase_date {
            cigar.purchase_date = Some(v);
        }
        if let Some(v) = self.photo {
            cigar.photo = Some(v);
        }
        cigar.updated_at = Local::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_text_joins_name_brand_origin() {
        let mut c = Cigar::new("Robusto", "Cohiba");
        c.origin_country = Some("Cuba".into());
        assert_eq!(c.search_text(), "robusto cohiba cuba");

        c.origin_country = None;
        assert_eq!(c.search_text(), "robusto cohiba ");
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut c = Cigar::new("Robusto", "Cohiba");
        c.price = 50.0;
        CigarPatch {
            quantity: Some(7),
            ..Default::default()
        }
        .apply(&mut c);

        assert_eq!(c.quantity, 7);
        assert_eq!(c.price, 50.0);
        assert_eq!(c.stock_value(), 350.0);
    }
}

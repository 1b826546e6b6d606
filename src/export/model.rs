// src/export/model.rs

use crate::export::ExportRow;
use crate::models::cigar::Cigar;
use crate::models::tasting::Tasting;
use serde::Serialize;

/// Flat view of a stock row.
#[derive(Serialize, Clone, Debug)]
pub struct CigarExport {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub origin_country: String,
    pub price: f64,
    pub quantity: u32,
    pub purchase_date: String,
}

impl From<&Cigar> for CigarExport {
    fn from(c: &Cigar) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            brand: c.brand.clone(),
            origin_country: c.origin_country.clone().unwrap_or_default(),
            price: c.price,
            quantity: c.quantity,
            purchase_date: c.purchase_date_str(),
        }
    }
}

impl ExportRow for CigarExport {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "brand", "origin_country", "price", "quantity", "purchase_date"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.brand.clone(),
            self.origin_country.clone(),
            format!("{:.2}", self.price),
            self.quantity.to_string(),
            self.purchase_date.clone(),
        ]
    }
}

/// Flat view of a completed tasting. Flavors are joined with `; `
/// so the record stays one line in CSV.
#[derive(Serialize, Clone, Debug)]
pub struct TastingExport {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub origin_country: String,
    pub started_at: String,
    pub finished_at: String,
    pub cut: String,
    pub moment: String,
    pub draw: String,
    pub vitola: String,
    pub rating: u8,
    pub smoke_duration: u32,
    pub flavors: String,
    pub repurchase: String,
    pub notes: String,
}

impl From<&Tasting> for TastingExport {
    fn from(t: &Tasting) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            brand: t.brand.clone(),
            origin_country: t.origin_country.clone().unwrap_or_default(),
            started_at: t.started_at.format("%Y-%m-%d %H:%M").to_string(),
            finished_at: t
                .finished_at
                .map(|f| f.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            cut: t.setup.cut.map(|c| c.label().to_string()).unwrap_or_default(),
            moment: t.setup.moment.map(|m| m.label().to_string()).unwrap_or_default(),
            draw: t.setup.draw.map(|d| d.label().to_string()).unwrap_or_default(),
            vitola: t.setup.vitola.clone().unwrap_or_default(),
            rating: t.rating_or_zero(),
            smoke_duration: t.smoke_duration.unwrap_or(0),
            flavors: t.flavors.join("; "),
            repurchase: t.repurchase.map(|r| r.label().to_string()).unwrap_or_default(),
            notes: t.notes.clone().unwrap_or_default(),
        }
    }
}

impl ExportRow for TastingExport {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "brand",
            "origin_country",
            "started_at",
            "finished_at",
            "cut",
            "moment",
            "draw",
            "vitola",
            "rating",
            "smoke_duration",
            "flavors",
            "repurchase",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.brand.clone(),
            self.origin_country.clone(),
            self.started_at.clone(),
            self.finished_at.clone(),
            self.cut.clone(),
            self.moment.clone(),
            self.draw.clone(),
            self.vitola.clone(),
            self.rating.to_string(),
            self.smoke_duration.to_string(),
            self.flavors.clone(),
            self.repurchase.clone(),
            self.notes.clone(),
        ]
    }
}

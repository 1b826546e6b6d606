use serde::Serialize;

/// Stock page cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub total_units: u64,
    pub total_value: String, // two decimals
    pub available_items: usize,
    pub distinct_items: usize,
}

/// History / dashboard cards over completed tastings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TastingSummary {
    pub count: usize,
    pub average_duration: u32, // minutes, rounded
    pub average_rating: String, // one decimal
    pub best_rating: u8,
    pub favorite: Option<String>,
}

impl TastingSummary {
    pub fn favorite_label(&self) -> &str {
        self.favorite.as_deref().unwrap_or("None")
    }
}

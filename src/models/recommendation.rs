use super::cigar::Cigar;
use serde::Serialize;

/// A stock item annotated by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub cigar: Cigar,
    pub score: f64,
    pub matched_flavors: Vec<String>,
    pub already_smoked: bool,
}

impl Recommendation {
    pub fn new(cigar: Cigar) -> Self {
        Self {
            cigar,
            score: 0.0,
            matched_flavors: Vec::new(),
            already_smoked: false,
        }
    }

    /// Record a matched tag once, keeping first-seen order.
    pub fn add_flavor(&mut self, flavor: &str) {
        if !self.matched_flavors.iter().any(|f| f == flavor) {
            self.matched_flavors.push(flavor.to_string());
        }
    }

    pub fn is_relevant(&self) -> bool {
        self.score > 0.0 || !self.matched_flavors.is_empty()
    }
}

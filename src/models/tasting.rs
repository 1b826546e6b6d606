use super::cigar::Cigar;
use super::session::SessionSetup;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TastingStatus {
    Active,    // em-degustacao
    Completed, // finalizado
}

impl TastingStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TastingStatus::Active => "em-degustacao",
            TastingStatus::Completed => "finalizado",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "em-degustacao" => Some(TastingStatus::Active),
            "finalizado" => Some(TastingStatus::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TastingStatus::Active => "active",
            TastingStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Repurchase {
    Yes,
    No,
    Depends,
}

impl Repurchase {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Repurchase::Yes => "sim",
            Repurchase::No => "nao",
            Repurchase::Depends => "depende",
        }
    }

    /// Older rows may carry `talvez` from the first version of the form.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "sim" => Some(Repurchase::Yes),
            "nao" => Some(Repurchase::No),
            "depende" | "talvez" => Some(Repurchase::Depends),
            _ => None,
        }
    }

    /// Helper: convert input answer from CLI (English or stored code, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "yes" | "y" => Some(Repurchase::Yes),
            "no" | "n" => Some(Repurchase::No),
            "depends" | "maybe" => Some(Repurchase::Depends),
            other => Repurchase::from_db_str(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Repurchase::Yes => "yes",
            Repurchase::No => "no",
            Repurchase::Depends => "depends",
        }
    }
}

/// One smoking session ("degustação").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tasting {
    pub id: i32,
    pub cigar_id: Option<i32>, // stock row it was started from, informational only
    pub name: String,
    pub brand: String,
    pub origin_country: Option<String>,
    pub status: TastingStatus,
    pub started_at: DateTime<Local>,
    pub finished_at: Option<DateTime<Local>>,

    pub setup: SessionSetup,

    // filled on finish
    pub rating: Option<u8>,
    pub smoke_duration: Option<u32>, // minutes
    pub flavors: Vec<String>,
    pub repurchase: Option<Repurchase>,
    pub notes: Option<String>,
    pub band_photo: Option<String>,

    pub created_at: String,
    pub updated_at: String,
}

impl Tasting {
    /// Build an active tasting for a stock item (`id = 0`, not yet persisted).
    pub fn start_from(cigar: &Cigar, setup: SessionSetup, now: DateTime<Local>) -> Self {
        let stamp = now.to_rfc3339();
        Self {
            id: 0,
            cigar_id: (cigar.id > 0).then_some(cigar.id),
            name: cigar.name.clone(),
            brand: cigar.brand.clone(),
            origin_country: cigar.origin_country.clone(),
            status: TastingStatus::Active,
            started_at: now,
            finished_at: None,
            setup,
            rating: None,
            smoke_duration: None,
            flavors: Vec::new(),
            repurchase: None,
            notes: None,
            band_photo: None,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TastingStatus::Active
    }

    pub fn is_completed(&self) -> bool {
        self.status == TastingStatus::Completed
    }

    /// Same product for recommendation purposes: equal name OR equal brand.
    pub fn same_product(&self, cigar: &Cigar) -> bool {
        self.name == cigar.name || self.brand == cigar.brand
    }

    /// Tags of this record that are also in `selected`, in record order.
    pub fn flavors_in<'a>(&'a self, selected: &'a [String]) -> impl Iterator<Item = &'a String> {
        self.flavors.iter().filter(move |f| selected.contains(f))
    }

    pub fn shares_flavor(&self, selected: &[String]) -> bool {
        self.flavors_in(selected).next().is_some()
    }

    pub fn rating_or_zero(&self) -> u8 {
        self.rating.unwrap_or(0)
    }
}

/// Evaluation entered when a session ends.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishData {
    pub rating: u8,
    pub smoke_duration: u32,
    pub flavors: Vec<String>,
    pub repurchase: Repurchase,
    pub notes: Option<String>,
    pub band_photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasting(name: &str, brand: &str, flavors: &[&str]) -> Tasting {
        let mut t = Tasting::start_from(&Cigar::new(name, brand), SessionSetup::default(), Local::now());
        t.flavors = flavors.iter().map(|f| f.to_string()).collect();
        t
    }

    #[test]
    fn same_product_matches_on_name_or_brand() {
        let t = tasting("Robusto", "Cohiba", &[]);
        assert!(t.same_product(&Cigar::new("Robusto", "Partagas")));
        assert!(t.same_product(&Cigar::new("Siglo VI", "Cohiba")));
        assert!(!t.same_product(&Cigar::new("No. 2", "Montecristo")));
    }

    #[test]
    fn flavors_in_keeps_record_order() {
        let t = tasting("A", "X", &["Café", "Madeira", "Terroso"]);
        let selected = vec!["Terroso".to_string(), "Café".to_string()];
        let got: Vec<&String> = t.flavors_in(&selected).collect();
        assert_eq!(got, vec!["Café", "Terroso"]);
        assert!(!t.shares_flavor(&["Flores".to_string()]));
    }

    #[test]
    fn repurchase_accepts_legacy_code() {
        assert_eq!(Repurchase::from_db_str("talvez"), Some(Repurchase::Depends));
        assert_eq!(Repurchase::from_code("YES"), Some(Repurchase::Yes));
        assert_eq!(Repurchase::from_code("nao"), Some(Repurchase::No));
        assert_eq!(Repurchase::from_code("perhaps"), None);
    }
}

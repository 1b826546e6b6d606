//! Session configuration chosen when a tasting starts.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cut {
    Straight, // reto
    V,        // v
    Punch,    // furado
}

impl Cut {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Cut::Straight => "reto",
            Cut::V => "v",
            Cut::Punch => "furado",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "reto" => Some(Cut::Straight),
            "v" => Some(Cut::V),
            "furado" => Some(Cut::Punch),
            _ => None,
        }
    }

    /// Accepts the stored code or the English name, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "straight" => Some(Cut::Straight),
            "punch" => Some(Cut::Punch),
            other => Cut::from_db_str(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Cut::Straight => "Straight",
            Cut::V => "V-cut",
            Cut::Punch => "Punch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Moment {
    Alone,  // sozinho
    Social, // confraternizando
}

impl Moment {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Moment::Alone => "sozinho",
            Moment::Social => "confraternizando",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "sozinho" => Some(Moment::Alone),
            "confraternizando" => Some(Moment::Social),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "alone" => Some(Moment::Alone),
            "social" => Some(Moment::Social),
            other => Moment::from_db_str(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Moment::Alone => "Alone",
            Moment::Social => "Social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Draw {
    Loose,  // solto
    Medium, // medio
    Tight,  // preso
}

impl Draw {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Draw::Loose => "solto",
            Draw::Medium => "medio",
            Draw::Tight => "preso",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "solto" => Some(Draw::Loose),
            "medio" => Some(Draw::Medium),
            "preso" => Some(Draw::Tight),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "loose" => Some(Draw::Loose),
            "medium" => Some(Draw::Medium),
            "tight" => Some(Draw::Tight),
            other => Draw::from_db_str(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Draw::Loose => "Loose",
            Draw::Medium => "Medium",
            Draw::Tight => "Tight",
        }
    }
}

/// Everything the user may set before lighting up. All optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSetup {
    pub cut: Option<Cut>,
    pub moment: Option<Moment>,
    pub draw: Option<Draw>,
    pub vitola: Option<String>,
}

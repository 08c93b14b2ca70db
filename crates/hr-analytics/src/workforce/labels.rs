use serde::{Deserialize, Serialize};

use super::domain::Department;

/// Display language for user-facing labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::En),
            "fr" | "french" | "francais" | "français" => Some(Self::Fr),
            _ => None,
        }
    }
}

/// Traffic-light colour attached to dashboard indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorColor {
    Green,
    Orange,
    Red,
}

impl IndicatorColor {
    /// Attrition above 15% is red, above 10% orange.
    pub fn for_attrition_rate(percent: f64) -> Self {
        if percent > 15.0 {
            Self::Red
        } else if percent > 10.0 {
            Self::Orange
        } else {
            Self::Green
        }
    }

    /// Mean satisfaction below 2 is red, below 3 orange. The orange band is half-open,
    /// so a mean of exactly 2.0 is orange rather than green.
    pub fn for_satisfaction(average: f64) -> Self {
        if average < 2.0 {
            Self::Red
        } else if average < 3.0 {
            Self::Orange
        } else {
            Self::Green
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

pub fn department_label(department: Department, locale: Locale) -> &'static str {
    match (locale, department) {
        (Locale::En, department) => department.label(),
        (Locale::Fr, Department::Sales) => "Ventes",
        (Locale::Fr, Department::ResearchAndDevelopment) => "R&D",
        (Locale::Fr, Department::HumanResources) => "Ressources Humaines",
    }
}

pub fn company_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Company",
        Locale::Fr => "Entreprise",
    }
}

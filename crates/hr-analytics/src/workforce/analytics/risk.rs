use serde::{Deserialize, Serialize};

use super::super::domain::{EmployeeRecord, SatisfactionLevel, YesNo};
use super::super::labels::{IndicatorColor, Locale};

const MAX_SCORE: u8 = 100;

const DEFAULT_JOB_SATISFACTION: u8 = 4;
const DEFAULT_YEARS_SINCE_PROMOTION: u32 = 0;
const DEFAULT_MONTHLY_INCOME: u32 = 5000;

const LOW_SATISFACTION_BELOW: u8 = 2;
const STALLED_PROMOTION_AFTER_YEARS: u32 = 3;
const LOW_INCOME_BELOW: u32 = 4000;

/// The subset of an employee record the risk rules look at. Absent fields fall back to
/// neutral values, never to the worst case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskInput {
    #[serde(default)]
    pub over_time: Option<YesNo>,
    #[serde(default)]
    pub job_satisfaction: Option<u8>,
    #[serde(default)]
    pub years_since_last_promotion: Option<u32>,
    #[serde(default)]
    pub monthly_income: Option<u32>,
}

impl From<&EmployeeRecord> for RiskInput {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            over_time: record.over_time,
            job_satisfaction: record.job_satisfaction.map(SatisfactionLevel::get),
            years_since_last_promotion: record.years_since_last_promotion,
            monthly_income: record.monthly_income,
        }
    }
}

/// A rule that fired while scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Overtime,
    LowJobSatisfaction,
    StalledPromotion,
    LowIncome,
}

impl RiskFactor {
    pub const fn points(self) -> u8 {
        match self {
            Self::Overtime => 35,
            Self::LowJobSatisfaction => 20,
            Self::StalledPromotion => 20,
            Self::LowIncome => 25,
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Overtime) => "Works overtime",
            (Locale::En, Self::LowJobSatisfaction) => "Low job satisfaction",
            (Locale::En, Self::StalledPromotion) => "No promotion in over 3 years",
            (Locale::En, Self::LowIncome) => "Monthly income below 4000",
            (Locale::Fr, Self::Overtime) => "Heures supplémentaires",
            (Locale::Fr, Self::LowJobSatisfaction) => "Faible satisfaction au travail",
            (Locale::Fr, Self::StalledPromotion) => "Aucune promotion depuis plus de 3 ans",
            (Locale::Fr, Self::LowIncome) => "Revenu mensuel inférieur à 4000",
        }
    }
}

/// Qualitative band for a 0..=100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    Critical,
}

impl RiskLevel {
    /// `<= 40` low, `<= 70` moderate, above that critical.
    pub fn for_score(score: f64) -> Self {
        if score > 70.0 {
            Self::Critical
        } else if score > 40.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn color(self) -> IndicatorColor {
        match self {
            Self::Low => IndicatorColor::Green,
            Self::Moderate => IndicatorColor::Orange,
            Self::Critical => IndicatorColor::Red,
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Low) => "Low",
            (Locale::En, Self::Moderate) => "Moderate",
            (Locale::En, Self::Critical) => "Critical",
            (Locale::Fr, Self::Low) => "Faible",
            (Locale::Fr, Self::Moderate) => "Modéré",
            (Locale::Fr, Self::Critical) => "Critique",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub color: IndicatorColor,
    pub factors: Vec<RiskFactor>,
}

/// Additive attrition-risk heuristic, capped at 100.
pub fn score_risk(input: &RiskInput) -> RiskAssessment {
    let over_time = input.over_time.unwrap_or_default();
    let job_satisfaction = input.job_satisfaction.unwrap_or(DEFAULT_JOB_SATISFACTION);
    let years_since_promotion = input
        .years_since_last_promotion
        .unwrap_or(DEFAULT_YEARS_SINCE_PROMOTION);
    let monthly_income = input.monthly_income.unwrap_or(DEFAULT_MONTHLY_INCOME);

    let mut factors = Vec::new();
    if over_time.is_yes() {
        factors.push(RiskFactor::Overtime);
    }
    if job_satisfaction < LOW_SATISFACTION_BELOW {
        factors.push(RiskFactor::LowJobSatisfaction);
    }
    if years_since_promotion > STALLED_PROMOTION_AFTER_YEARS {
        factors.push(RiskFactor::StalledPromotion);
    }
    if monthly_income < LOW_INCOME_BELOW {
        factors.push(RiskFactor::LowIncome);
    }

    let total: u32 = factors
        .iter()
        .map(|factor| u32::from(factor.points()))
        .sum();
    let score = total.min(u32::from(MAX_SCORE)) as u8;
    let level = RiskLevel::for_score(f64::from(score));

    RiskAssessment {
        score,
        level,
        color: level.color(),
        factors,
    }
}

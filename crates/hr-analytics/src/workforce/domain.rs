use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for employee records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Partitioning dimension for every department-scoped view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Sales")]
    Sales,
    #[serde(rename = "Research & Development")]
    ResearchAndDevelopment,
    #[serde(rename = "Human Resources")]
    HumanResources,
}

impl Department {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::Sales,
            Self::ResearchAndDevelopment,
            Self::HumanResources,
        ]
    }

    /// Name as it appears in the dataset.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::ResearchAndDevelopment => "Research & Development",
            Self::HumanResources => "Human Resources",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::ResearchAndDevelopment => "rd",
            Self::HumanResources => "hr",
        }
    }

    /// Accepts the dataset name or the URL slug, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered().into_iter().find(|department| {
            department.label().eq_ignore_ascii_case(trimmed)
                || department.slug().eq_ignore_ascii_case(trimmed)
        })
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department '{0}'")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownDepartment(value.to_string()))
    }
}

/// Boolean flag stored as `Yes`/`No` in the dataset (overtime, attrition).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessTravel {
    #[serde(rename = "Non-Travel")]
    NonTravel,
    #[serde(rename = "Travel_Rarely")]
    Rarely,
    #[serde(rename = "Travel_Frequently")]
    Frequently,
}

/// Ordinal survey answer constrained to the 1..=4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SatisfactionLevel(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("satisfaction level must be between 1 and 4 (found {0})")]
pub struct SatisfactionOutOfRange(pub u8);

impl SatisfactionLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(value: u8) -> Result<Self, SatisfactionOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SatisfactionOutOfRange(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SatisfactionLevel {
    type Error = SatisfactionOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SatisfactionLevel> for u8 {
    fn from(level: SatisfactionLevel) -> Self {
        level.0
    }
}

/// One employee row. Field names serialize with the dataset's column names so the CSV
/// export and the JSON API share a single wire shape.
///
/// Only `id` is mandatory. Every descriptive attribute may be missing: absent columns
/// deserialize to `None` and statistics skip them. `Attrition` defaults to `No`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeRecord {
    #[serde(rename = "id", alias = "EmployeeNumber")]
    pub id: EmployeeId,
    pub age: Option<u8>,
    #[serde(default)]
    pub attrition: YesNo,
    pub business_travel: Option<BusinessTravel>,
    pub daily_rate: Option<u32>,
    pub department: Option<Department>,
    pub distance_from_home: Option<u32>,
    pub education: Option<u8>,
    pub education_field: Option<String>,
    pub environment_satisfaction: Option<SatisfactionLevel>,
    pub gender: Option<String>,
    pub hourly_rate: Option<u32>,
    pub job_involvement: Option<SatisfactionLevel>,
    pub job_level: Option<u8>,
    pub job_role: Option<String>,
    pub job_satisfaction: Option<SatisfactionLevel>,
    pub marital_status: Option<String>,
    pub monthly_income: Option<u32>,
    pub monthly_rate: Option<u32>,
    pub num_companies_worked: Option<u32>,
    pub over_time: Option<YesNo>,
    pub percent_salary_hike: Option<u32>,
    pub performance_rating: Option<SatisfactionLevel>,
    pub relationship_satisfaction: Option<SatisfactionLevel>,
    pub standard_hours: Option<u32>,
    pub stock_option_level: Option<u8>,
    pub total_working_years: Option<u32>,
    pub training_times_last_year: Option<u32>,
    pub work_life_balance: Option<SatisfactionLevel>,
    pub years_at_company: Option<u32>,
    pub years_in_current_role: Option<u32>,
    pub years_since_last_promotion: Option<u32>,
    pub years_with_curr_manager: Option<u32>,
    #[serde(rename = "score", default)]
    pub score: f64,
    #[serde(rename = "evaluation_note", default)]
    pub evaluation_note: Option<f64>,
    #[serde(rename = "comment", default)]
    pub comment: Option<String>,
}

impl EmployeeRecord {
    /// A record carrying nothing but its id.
    pub fn bare(id: EmployeeId) -> Self {
        Self {
            id,
            age: None,
            attrition: YesNo::No,
            business_travel: None,
            daily_rate: None,
            department: None,
            distance_from_home: None,
            education: None,
            education_field: None,
            environment_satisfaction: None,
            gender: None,
            hourly_rate: None,
            job_involvement: None,
            job_level: None,
            job_role: None,
            job_satisfaction: None,
            marital_status: None,
            monthly_income: None,
            monthly_rate: None,
            num_companies_worked: None,
            over_time: None,
            percent_salary_hike: None,
            performance_rating: None,
            relationship_satisfaction: None,
            standard_hours: None,
            stock_option_level: None,
            total_working_years: None,
            training_times_last_year: None,
            work_life_balance: None,
            years_at_company: None,
            years_in_current_role: None,
            years_since_last_promotion: None,
            years_with_curr_manager: None,
            score: 0.0,
            evaluation_note: None,
            comment: None,
        }
    }

    pub fn has_left(&self) -> bool {
        self.attrition.is_yes()
    }

    pub fn works_in(&self, department: Department) -> bool {
        self.department == Some(department)
    }
}

/// Inclusive bounds for the HR evaluation note.
pub const EVALUATION_NOTE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

pub fn evaluation_note_in_range(note: f64) -> bool {
    note.is_finite() && EVALUATION_NOTE_RANGE.contains(&note)
}

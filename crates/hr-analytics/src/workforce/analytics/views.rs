use serde::Serialize;

use super::super::domain::{EmployeeId, EmployeeRecord, SatisfactionLevel, YesNo};
use super::super::labels::{IndicatorColor, Locale};
use super::aggregate::WorkforceStats;
use super::risk::{RiskAssessment, RiskLevel};

/// Dashboard card payload for a company or department scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub scope: &'static str,
    pub total_employees: usize,
    pub attrition_rate: String,
    pub average_job_satisfaction: String,
    pub attrition_rate_percent: f64,
    pub average_satisfaction: Option<f64>,
    pub attrition_indicator: IndicatorColor,
    pub satisfaction_indicator: Option<IndicatorColor>,
}

impl WorkforceStats {
    pub fn view(&self, scope: &'static str) -> StatsView {
        StatsView {
            scope,
            total_employees: self.total_count,
            attrition_rate: self.attrition_display(),
            average_job_satisfaction: self.satisfaction_display(),
            attrition_rate_percent: self.attrition_rate_percent,
            average_satisfaction: self.average_satisfaction,
            attrition_indicator: IndicatorColor::for_attrition_rate(self.attrition_rate_percent),
            satisfaction_indicator: self
                .average_satisfaction
                .map(IndicatorColor::for_satisfaction),
        }
    }
}

/// Department table row: the fixed column subset shown for a department.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepartmentViewRow {
    #[serde(rename = "id")]
    pub id: EmployeeId,
    pub age: Option<u8>,
    pub education: Option<u8>,
    pub job_role: Option<String>,
    pub monthly_income: Option<u32>,
    pub environment_satisfaction: Option<SatisfactionLevel>,
    pub job_involvement: Option<SatisfactionLevel>,
    pub relationship_satisfaction: Option<SatisfactionLevel>,
    pub performance_rating: Option<SatisfactionLevel>,
    pub job_satisfaction: Option<SatisfactionLevel>,
    pub work_life_balance: Option<SatisfactionLevel>,
    pub attrition: YesNo,
}

impl From<&EmployeeRecord> for DepartmentViewRow {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id,
            age: record.age,
            education: record.education,
            job_role: record.job_role.clone(),
            monthly_income: record.monthly_income,
            environment_satisfaction: record.environment_satisfaction,
            job_involvement: record.job_involvement,
            relationship_satisfaction: record.relationship_satisfaction,
            performance_rating: record.performance_rating,
            job_satisfaction: record.job_satisfaction,
            work_life_balance: record.work_life_balance,
            attrition: record.attrition,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskView {
    pub employee_id: EmployeeId,
    pub score: u8,
    pub level: RiskLevel,
    pub level_label: &'static str,
    pub color: IndicatorColor,
    pub factors: Vec<&'static str>,
}

impl RiskAssessment {
    pub fn view(&self, employee_id: EmployeeId, locale: Locale) -> RiskView {
        RiskView {
            employee_id,
            score: self.score,
            level: self.level,
            level_label: self.level.label(locale),
            color: self.color,
            factors: self
                .factors
                .iter()
                .map(|factor| factor.label(locale))
                .collect(),
        }
    }
}
